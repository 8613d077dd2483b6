use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::parse_journal::{__path_parse_journal, parse_journal};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(parse_journal))]
pub struct JournalApiDoc;

pub fn journal_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/journal/parse", state.args.server.root_path),
        post(parse_journal),
    )
}
