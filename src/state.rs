use std::{path::Path, sync::Arc};

use anyhow::Result;
use log::info;
use once_cell::sync::Lazy;

use crate::{config::CONFIG, content::ContentStore};

pub static STATE: Lazy<State> = Lazy::new(|| State::new().expect("Failed to create state"));

#[derive(Clone)]
pub struct State {
    pub content: Arc<ContentStore>,
}

impl State {
    pub fn new() -> Result<Self> {
        let content = ContentStore::load(Path::new(&CONFIG.content_dir))?;
        info!(
            "Loaded {} posts and {} projects from {}",
            content.posts.len(),
            content.projects.len(),
            CONFIG.content_dir,
        );
        Ok(Self {
            content: Arc::new(content),
        })
    }
}
