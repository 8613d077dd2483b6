use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    get_profile::{__path_get_profile, get_profile},
    get_rankings::{__path_get_rankings, get_rankings},
    get_recommendations::{__path_get_recommendations, get_recommendations},
    get_suggestions::{__path_get_suggestions, get_suggestions},
    score_pair::{__path_score_pair, score_pair},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    score_pair,
    get_recommendations,
    get_rankings,
    get_profile,
    get_suggestions
))]
pub struct FlavorApiDoc;

pub fn flavor_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/flavor/score"), post(score_pair))
        .route(
            &format!("{root_path}/flavor/recommendations"),
            post(get_recommendations),
        )
        .route(&format!("{root_path}/flavor/rankings"), post(get_rankings))
        .route(&format!("{root_path}/flavor/profile"), post(get_profile))
        .route(
            &format!("{root_path}/flavor/suggestions"),
            post(get_suggestions),
        )
}
