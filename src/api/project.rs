use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::{
    error::AppError,
    state::{State as AppState, STATE},
};

pub fn routes() -> Router<()> {
    Router::new()
        .route("/", get(list_projects))
        .with_state(STATE.clone())
}

pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let projects = state
        .content
        .projects
        .iter()
        .map(|project| {
            json!({
                "slug": project.slug,
                "name": project.matter.name,
                "description": project.matter.description,
                "tags": project.matter.tags,
                "image": project.matter.image,
                "link": project.matter.link,
                "start_date": project.matter.start_date,
                "end_date": project.matter.end_date,
            })
        })
        .collect::<Vec<_>>();

    Ok(Json(json!({ "data": projects })))
}
