use axum::extract::{Path, State};
use flavorscope_core::domain::experience::ports::ExperienceService;

use super::get_experiences::GetExperiencesResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{ingredient_id}/experiences",
    tag = "experience",
    summary = "Journal entries using an ingredient",
    params(
        ("ingredient_id" = String, Path, description = "Ingredient id"),
    ),
    responses(
        (status = 200, body = GetExperiencesResponse)
    )
)]
pub async fn get_ingredient_experiences(
    Path(ingredient_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetExperiencesResponse>, ApiError> {
    Ok(Response::OK(GetExperiencesResponse {
        data: state.service.experiences_with_ingredient(&ingredient_id),
    }))
}
