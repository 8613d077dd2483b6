use axum::extract::{Path, State};
use flavorscope_core::domain::{
    experience::ports::ExperienceService, ingredient::entities::MoodCategory,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDishesResponse {
    pub mood: MoodCategory,
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/{mood}/dishes",
    tag = "mood",
    summary = "Dish ideas for a mood",
    params(
        ("mood" = MoodCategory, Path, description = "Mood"),
    ),
    responses(
        (status = 200, body = GetDishesResponse),
        (status = 400, description = "Unknown mood")
    )
)]
pub async fn get_dishes(
    Path(mood): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetDishesResponse>, ApiError> {
    let mood: MoodCategory = mood.parse().map_err(ApiError::from)?;

    Ok(Response::OK(GetDishesResponse {
        mood,
        data: state.service.suggest_dishes(mood),
    }))
}
