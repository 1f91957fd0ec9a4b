use axum::Router;

pub mod post;
pub mod project;
pub mod site;

pub fn routes() -> Router<()> {
    Router::new()
        .nest("/posts", post::routes())
        .nest("/projects", project::routes())
        .nest("/site", site::routes())
}
