use axum::extract::{Query, State};
use flavorscope_core::domain::{
    common::entities::app_errors::CoreError,
    experience::{
        entities::FlavorExperience, ports::ExperienceService, value_objects::ExperienceFilter,
    },
    ingredient::entities::MoodCategory,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetExperiencesQuery {
    pub mood: Option<String>,
    /// Exact tag, case-insensitive.
    pub tag: Option<String>,
    /// Part of the location name, case-insensitive.
    pub location: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetExperiencesResponse {
    pub data: Vec<FlavorExperience>,
}

impl TryFrom<GetExperiencesQuery> for ExperienceFilter {
    type Error = CoreError;

    fn try_from(query: GetExperiencesQuery) -> Result<Self, Self::Error> {
        Ok(ExperienceFilter {
            mood: query.mood.as_deref().map(str::parse::<MoodCategory>).transpose()?,
            tag: query.tag,
            location: query.location,
        })
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "experience",
    summary = "List journal entries",
    params(GetExperiencesQuery),
    responses(
        (status = 200, body = GetExperiencesResponse),
        (status = 400, description = "Unknown mood")
    )
)]
pub async fn get_experiences(
    State(state): State<AppState>,
    Query(query): Query<GetExperiencesQuery>,
) -> Result<Response<GetExperiencesResponse>, ApiError> {
    let filter = ExperienceFilter::try_from(query).map_err(ApiError::from)?;

    Ok(Response::OK(GetExperiencesResponse {
        data: state.service.list_experiences(filter),
    }))
}
