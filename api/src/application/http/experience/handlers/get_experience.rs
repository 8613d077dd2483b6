use axum::extract::{Path, State};
use flavorscope_core::domain::experience::{
    entities::FlavorExperience, ports::ExperienceService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetExperienceResponse {
    pub data: FlavorExperience,
}

#[utoipa::path(
    get,
    path = "/{experience_id}",
    tag = "experience",
    summary = "Get journal entry",
    params(
        ("experience_id" = String, Path, description = "Experience id"),
    ),
    responses(
        (status = 200, body = GetExperienceResponse),
        (status = 404, description = "Experience not found")
    )
)]
pub async fn get_experience(
    Path(experience_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetExperienceResponse>, ApiError> {
    let experience = state
        .service
        .get_experience(&experience_id)
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetExperienceResponse { data: experience }))
}
