use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_challenge::{__path_get_challenge, get_challenge};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_challenge))]
pub struct ChallengeApiDoc;

pub fn challenge_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/challenges/{{mood}}", state.args.server.root_path),
        get(get_challenge),
    )
}
