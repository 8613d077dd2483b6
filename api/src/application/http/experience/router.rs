use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_experience::{__path_get_experience, get_experience},
    get_experiences::{__path_get_experiences, get_experiences},
    get_ingredient_experiences::{__path_get_ingredient_experiences, get_ingredient_experiences},
    get_similar_experiences::{__path_get_similar_experiences, get_similar_experiences},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_experiences, get_experience, get_similar_experiences))]
pub struct ExperienceApiDoc;

/// Journal lookups keyed by ingredient, nested under `/ingredients` in the docs.
#[derive(OpenApi)]
#[openapi(paths(get_ingredient_experiences))]
pub struct IngredientExperienceApiDoc;

pub fn experience_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/experiences"), get(get_experiences))
        .route(
            &format!("{root_path}/experiences/{{experience_id}}"),
            get(get_experience),
        )
        .route(
            &format!("{root_path}/experiences/{{experience_id}}/similar"),
            get(get_similar_experiences),
        )
        .route(
            &format!("{root_path}/ingredients/{{ingredient_id}}/experiences"),
            get(get_ingredient_experiences),
        )
}
