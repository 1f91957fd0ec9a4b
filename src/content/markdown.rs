use pulldown_cmark::{html, Options, Parser};

/// Render a markdown body to HTML. Tables, strikethrough, footnotes and task
/// lists are enabled to cover what the posts actually use.
pub fn render(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let out = render("# Title\n\nSome *emphasis* here.");
        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<em>emphasis</em>"));
    }

    #[test]
    fn renders_tables() {
        let out = render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(out.contains("<table>"));
        assert!(out.contains("<td>1</td>"));
    }

    #[test]
    fn renders_fenced_code() {
        let out = render("```rust\nfn main() {}\n```");
        assert!(out.contains("<pre><code"));
        assert!(out.contains("fn main() {}"));
    }

    #[test]
    fn empty_body_renders_empty() {
        assert_eq!(render(""), "");
    }
}
