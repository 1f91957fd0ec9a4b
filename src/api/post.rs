use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::{
    config::CONFIG,
    consts::BLOG_BASE_PATH,
    content::Post,
    error::AppError,
    state::{State as AppState, STATE},
    types::{
        page_range::{PageRange, PathSegmentLinks},
        pagination::PageQuery,
    },
};

pub fn routes() -> Router<()> {
    Router::new()
        .route("/", get(list_posts))
        .route("/featured", get(featured_posts))
        .route("/:slug", get(post_by_slug))
        .with_state(STATE.clone())
}

pub async fn list_posts(
    Query(query): Query<PageQuery>,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let posts = &state.content.posts;
    let total_pages = query.total_pages(posts.len());
    let range =
        PageRange::new(query.page(), total_pages).map_err(AppError::bad_request)?;

    let items = posts
        .iter()
        .skip(query.offset())
        .take(query.per_page())
        .map(summary)
        .collect::<Vec<_>>();

    let links = PathSegmentLinks::new(BLOG_BASE_PATH);
    Ok(Json(json!({
        "data": items,
        "pagination": {
            "current_page": range.current(),
            "total_pages": range.total(),
            "total_items": posts.len(),
            "per_page": query.per_page(),
            "has_previous": range.has_previous(),
            "has_next": range.has_next(),
            "previous": range.previous_href(&links),
            "next": range.next_href(&links),
            "pages": range.links(&links),
        },
    })))
}

pub async fn featured_posts(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let featured = state
        .content
        .posts
        .iter()
        .take(CONFIG.site.featured_post_count)
        .map(summary)
        .collect::<Vec<_>>();

    Ok(Json(json!({ "data": featured })))
}

pub async fn post_by_slug(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let post = state
        .content
        .post_by_slug(&slug)
        .ok_or_else(AppError::not_found)?;

    Ok(Json(json!({
        "data": {
            "slug": post.slug,
            "title": post.matter.title,
            "description": post.matter.description,
            "pub_date": post.matter.pub_date,
            "updated_date": post.matter.updated_date,
            "hero_image": post.matter.hero_image,
            "html": post.html,
        },
    })))
}

fn summary(post: &Post) -> Value {
    json!({
        "slug": post.slug,
        "title": post.matter.title,
        "description": post.matter.description,
        "pub_date": post.matter.pub_date,
        "updated_date": post.matter.updated_date,
        "hero_image": post.matter.hero_image,
    })
}
