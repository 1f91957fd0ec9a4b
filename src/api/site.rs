use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::{
    config::CONFIG,
    consts::{icon_for, NAV_LINKS, SOCIAL_LINKS},
};

pub fn routes() -> Router<()> {
    Router::new().route("/", get(site_meta))
}

pub async fn site_meta() -> Json<Value> {
    let social = SOCIAL_LINKS
        .iter()
        .map(|link| {
            json!({
                "href": link.href,
                "label": link.label,
                "icon": icon_for(link.label),
            })
        })
        .collect::<Vec<_>>();

    Json(json!({
        "data": {
            "title": CONFIG.site.title,
            "description": CONFIG.site.description,
            "href": CONFIG.site.href,
            "author": CONFIG.site.author,
            "locale": CONFIG.site.locale,
            "featured_post_count": CONFIG.site.featured_post_count,
            "posts_per_page": CONFIG.site.posts_per_page,
            "nav_links": NAV_LINKS,
            "social_links": social,
        },
    }))
}
