use dotenvy::var;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use structstruck::strike;

pub static CONFIG: Lazy<Config> = Lazy::new(Config::new);

strike! {
    #[strikethrough[derive(Debug, Clone, Serialize, Deserialize, Default)]]
    pub struct Config {
        pub site:
            pub struct {
                pub title: String,
                pub description: String,
                pub href: String,
                pub author: String,
                pub locale: String,
                pub featured_post_count: usize,
                pub posts_per_page: usize,
            }
        ,
        pub content_dir: String,
        pub port: u16,
        pub is_dev: bool,
    }
}

impl Config {
    pub fn new() -> Self {
        Config {
            site: Site {
                title: var("SITE_TITLE").unwrap_or("pcarion.com".to_string()),
                description: var("SITE_DESCRIPTION")
                    .unwrap_or("Because the world needs yet another engineering blog".to_string()),
                href: var("SITE_HREF").unwrap_or("https://pcarion.com".to_string()),
                author: var("SITE_AUTHOR").unwrap_or("pcarion".to_string()),
                locale: var("SITE_LOCALE").unwrap_or("en-US".to_string()),
                featured_post_count: var("FEATURED_POST_COUNT")
                    .unwrap_or("2".to_string())
                    .parse()
                    .expect("FEATURED_POST_COUNT must be a number"),
                posts_per_page: var("POSTS_PER_PAGE")
                    .unwrap_or("3".to_string())
                    .parse()
                    .expect("POSTS_PER_PAGE must be a number"),
            },
            content_dir: var("CONTENT_DIR").unwrap_or("content".to_string()),
            port: var("PORT")
                .unwrap_or("8080".to_string())
                .parse()
                .expect("PORT must be a number"),
            is_dev: var("MODE").map(|m| m == "dev").unwrap_or_default(),
        }
    }
}
