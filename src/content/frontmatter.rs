use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("document does not start with a `---` frontmatter delimiter")]
    Missing,
    #[error("frontmatter block is never closed by a `---` line")]
    Unterminated,
    #[error("invalid frontmatter: {0}")]
    Invalid(#[from] serde_yaml::Error),
}

/// Split a raw document into its YAML frontmatter block and markdown body.
/// The block is delimited by `---` lines; CRLF endings are accepted.
pub fn split(raw: &str) -> Result<(&str, &str), FrontmatterError> {
    let rest = raw.strip_prefix("---").ok_or(FrontmatterError::Missing)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .ok_or(FrontmatterError::Missing)?;

    let mut search = 0;
    let close = loop {
        let at = match rest[search..].find("\n---") {
            Some(i) => search + i,
            None => return Err(FrontmatterError::Unterminated),
        };
        // Only a `---` that fills its whole line closes the block.
        let tail = &rest[at + 4..];
        if tail.is_empty() || tail.starts_with('\n') || tail.starts_with("\r\n") {
            break at;
        }
        search = at + 4;
    };

    let matter = &rest[..close];
    let body = rest[close + 4..]
        .strip_prefix("\r\n")
        .or_else(|| rest[close + 4..].strip_prefix('\n'))
        .unwrap_or(&rest[close + 4..]);
    Ok((matter, body))
}

/// Parse the frontmatter block into a collection schema and return it with
/// the remaining markdown body.
pub fn parse<T: DeserializeOwned>(raw: &str) -> Result<(T, &str), FrontmatterError> {
    let (matter, body) = split(raw)?;
    Ok((serde_yaml::from_str(matter)?, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Matter {
        title: String,
    }

    #[test]
    fn splits_matter_from_body() {
        let raw = "---\ntitle: Hello\n---\n\nFirst paragraph.\n";
        let (matter, body) = split(raw).unwrap();
        assert_eq!(matter, "title: Hello");
        assert_eq!(body, "\nFirst paragraph.\n");
    }

    #[test]
    fn parses_typed_matter() {
        let raw = "---\ntitle: Hello\n---\nbody";
        let (matter, body): (Matter, _) = parse(raw).unwrap();
        assert_eq!(
            matter,
            Matter {
                title: "Hello".to_string()
            }
        );
        assert_eq!(body, "body");
    }

    #[test]
    fn accepts_crlf_documents() {
        let raw = "---\r\ntitle: Hello\r\n---\r\nbody\r\n";
        let (matter, body): (Matter, _) = parse(raw).unwrap();
        assert_eq!(matter.title, "Hello");
        assert_eq!(body, "body\r\n");
    }

    #[test]
    fn closing_delimiter_may_end_the_document() {
        let raw = "---\ntitle: Hello\n---";
        let (matter, body) = split(raw).unwrap();
        assert_eq!(matter, "title: Hello");
        assert_eq!(body, "");
    }

    #[test]
    fn rejects_document_without_leading_delimiter() {
        assert!(matches!(
            split("title: Hello\n"),
            Err(FrontmatterError::Missing)
        ));
        // An inline `---` on the first line is not a delimiter.
        assert!(matches!(
            split("--- title\n"),
            Err(FrontmatterError::Missing)
        ));
    }

    #[test]
    fn rejects_unterminated_block() {
        assert!(matches!(
            split("---\ntitle: Hello\n"),
            Err(FrontmatterError::Unterminated)
        ));
    }

    #[test]
    fn dashed_line_with_suffix_does_not_close() {
        let raw = "---\ntitle: Hello\nnote: keep\n---- not a close\n---\nbody";
        let (matter, body) = split(raw).unwrap();
        assert!(matter.contains("note: keep"));
        assert!(matter.contains("---- not a close"));
        assert_eq!(body, "body");
    }

    #[test]
    fn schema_mismatch_is_invalid() {
        let raw = "---\nheadline: Hello\n---\nbody";
        assert!(matches!(
            parse::<Matter>(raw),
            Err(FrontmatterError::Invalid(_))
        ));
    }
}
