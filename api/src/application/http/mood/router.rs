use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_dishes::{__path_get_dishes, get_dishes};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_dishes))]
pub struct MoodApiDoc;

pub fn mood_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/moods/{{mood}}/dishes", state.args.server.root_path),
        get(get_dishes),
    )
}
