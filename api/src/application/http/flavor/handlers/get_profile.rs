use axum::extract::State;
use flavorscope_core::domain::flavor::{entities::FlavorProfile, ports::FlavorService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    flavor::validators::SelectionValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfileResponse {
    pub description: String,
    pub profile: FlavorProfile,
}

#[utoipa::path(
    post,
    path = "/profile",
    tag = "flavor",
    summary = "Describe a selection",
    request_body = SelectionValidator,
    responses(
        (status = 200, body = GetProfileResponse),
        (status = 422, description = "Selection too large")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SelectionValidator>,
) -> Result<Response<GetProfileResponse>, ApiError> {
    Ok(Response::OK(GetProfileResponse {
        description: state.service.describe_profile(&payload.selected_ids),
        profile: state.service.profile(&payload.selected_ids),
    }))
}
