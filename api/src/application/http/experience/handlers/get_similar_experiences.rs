use axum::extract::{Path, State};
use flavorscope_core::domain::experience::ports::ExperienceService;

use super::get_experiences::GetExperiencesResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{experience_id}/similar",
    tag = "experience",
    summary = "Similar journal entries",
    description = "Up to three other entries, same mood first, then by shared ingredients. Unknown ids give an empty list.",
    params(
        ("experience_id" = String, Path, description = "Experience id"),
    ),
    responses(
        (status = 200, body = GetExperiencesResponse)
    )
)]
pub async fn get_similar_experiences(
    Path(experience_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetExperiencesResponse>, ApiError> {
    Ok(Response::OK(GetExperiencesResponse {
        data: state.service.similar_experiences(&experience_id),
    }))
}
