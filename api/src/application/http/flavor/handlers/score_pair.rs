use axum::extract::State;
use flavorscope_core::domain::flavor::{entities::CompatibilityBreakdown, ports::FlavorService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    flavor::validators::ScorePairValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScorePairResponse {
    pub score: u32,
    pub breakdown: CompatibilityBreakdown,
}

#[utoipa::path(
    post,
    path = "/score",
    tag = "flavor",
    summary = "Score a pairing",
    description = "Scores how well the candidate complements the selected ingredient. Order matters for aromas and textures.",
    request_body = ScorePairValidator,
    responses(
        (status = 200, body = ScorePairResponse),
        (status = 404, description = "Ingredient not found"),
        (status = 422, description = "Invalid body")
    )
)]
pub async fn score_pair(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ScorePairValidator>,
) -> Result<Response<ScorePairResponse>, ApiError> {
    let breakdown = state
        .service
        .score_pair(&payload.selected_id, &payload.candidate_id)
        .map_err(ApiError::from)?;

    Ok(Response::OK(ScorePairResponse {
        score: breakdown.total(),
        breakdown,
    }))
}
