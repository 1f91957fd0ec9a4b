use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{frontmatter, frontmatter::FrontmatterError};

/// Frontmatter schema of a portfolio project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMatter {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(transparent)]
    Frontmatter(#[from] FrontmatterError),
    #[error("project link `{0}` is not an absolute http(s) URL")]
    InvalidLink(String),
}

/// A loaded project entry. The body of a project file carries no content the
/// site renders; everything lives in the frontmatter.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub slug: String,
    #[serde(flatten)]
    pub matter: ProjectMatter,
}

impl Project {
    pub fn parse(slug: impl Into<String>, raw: &str) -> Result<Self, ProjectError> {
        let (matter, _body) = frontmatter::parse::<ProjectMatter>(raw)?;
        if !matter.link.starts_with("http://") && !matter.link.starts_with("https://") {
            return Err(ProjectError::InvalidLink(matter.link));
        }
        Ok(Self {
            slug: slug.into(),
            matter,
        })
    }
}
