use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::content::{frontmatter, frontmatter::FrontmatterError, markdown};

/// Frontmatter schema of a blog post. Field names are camelCase as authored
/// in the content files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMatter {
    pub title: String,
    pub description: String,
    pub pub_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
}

/// A loaded blog post: validated frontmatter plus the body rendered to HTML.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub slug: String,
    #[serde(flatten)]
    pub matter: PostMatter,
    pub html: String,
}

impl Post {
    pub fn parse(slug: impl Into<String>, raw: &str) -> Result<Self, FrontmatterError> {
        let (matter, body) = frontmatter::parse::<PostMatter>(raw)?;
        Ok(Self {
            slug: slug.into(),
            matter,
            html: markdown::render(body),
        })
    }
}
