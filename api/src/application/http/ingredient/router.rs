use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_ingredient::{__path_get_ingredient, get_ingredient},
    get_ingredients::{__path_get_ingredients, get_ingredients},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_ingredients, get_ingredient))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredients", state.args.server.root_path),
            get(get_ingredients),
        )
        .route(
            &format!(
                "{}/ingredients/{{ingredient_id}}",
                state.args.server.root_path
            ),
            get(get_ingredient),
        )
}
