use axum::extract::State;
use flavorscope_core::domain::flavor::{entities::ScoredIngredient, ports::FlavorService};
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
pub struct GetRankingsResponse {
    pub data: Vec<ScoredIngredient>,
}

#[utoipa::path(
    post,
    path = "/rankings",
    tag = "flavor",
    summary = "Rank every candidate",
    description = "Every unselected ingredient with its summed score, best first.",
    request_body = SelectionValidator,
    responses(
        (status = 200, body = GetRankingsResponse),
        (status = 422, description = "Selection too large")
    )
)]
pub async fn get_rankings(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SelectionValidator>,
) -> Result<Response<GetRankingsResponse>, ApiError> {
    let ranked = state.service.rank(&payload.selected_ids);

    Ok(Response::OK(GetRankingsResponse { data: ranked }))
}
