use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::warn;
use walkdir::WalkDir;

use crate::content::{Post, Project};

/// Immutable snapshot of every content collection, loaded once at startup.
#[derive(Debug)]
pub struct ContentStore {
    pub posts: Vec<Post>,
    pub projects: Vec<Project>,
}

impl ContentStore {
    /// Load all collections from `{root}/blog` and `{root}/projects`.
    pub fn load(root: &Path) -> Result<Self> {
        Ok(Self {
            posts: load_posts(&root.join("blog"))?,
            projects: load_projects(&root.join("projects"))?,
        })
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }
}

/// Collect every markdown file under `dir`, recursively, in a deterministic
/// order. A collection directory that does not exist is an empty collection.
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        warn!("Content directory {} is missing", dir.display());
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let ext = entry.path().extension().and_then(|e| e.to_str());
        if matches!(ext, Some("md") | Some("mdx")) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Slug of a content file, derived from its file stem.
fn slug_for(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .with_context(|| format!("Content file {} has no usable name", path.display()))
}

fn check_unique_slugs(slugs: impl Iterator<Item = (String, PathBuf)>) -> Result<()> {
    let mut seen: Vec<(String, PathBuf)> = Vec::new();
    for (slug, path) in slugs {
        if let Some((_, first)) = seen.iter().find(|(s, _)| *s == slug) {
            bail!(
                "Duplicate slug `{}`: {} and {}",
                slug,
                first.display(),
                path.display()
            );
        }
        seen.push((slug, path));
    }
    Ok(())
}

fn load_posts(dir: &Path) -> Result<Vec<Post>> {
    let files = markdown_files(dir)?;
    let mut posts = Vec::with_capacity(files.len());
    for path in &files {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let post = Post::parse(slug_for(path)?, &raw)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        posts.push(post);
    }
    check_unique_slugs(
        posts
            .iter()
            .map(|p| p.slug.clone())
            .zip(files.iter().cloned()),
    )?;
    // Newest first; ties fall back to the slug so ordering stays stable.
    posts.sort_by(|a, b| {
        b.matter
            .pub_date
            .cmp(&a.matter.pub_date)
            .then_with(|| a.slug.cmp(&b.slug))
    });
    Ok(posts)
}

fn load_projects(dir: &Path) -> Result<Vec<Project>> {
    let files = markdown_files(dir)?;
    let mut projects = Vec::with_capacity(files.len());
    for path in &files {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let project = Project::parse(slug_for(path)?, &raw)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        projects.push(project);
    }
    check_unique_slugs(
        projects
            .iter()
            .map(|p| p.slug.clone())
            .zip(files.iter().cloned()),
    )?;
    // Most recently started first; undated entries sink to the end.
    projects.sort_by(|a, b| {
        b.matter
            .start_date
            .cmp(&a.matter.start_date)
            .then_with(|| a.slug.cmp(&b.slug))
    });
    Ok(projects)
}
