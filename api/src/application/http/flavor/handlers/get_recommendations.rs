use axum::extract::State;
use flavorscope_core::domain::{flavor::ports::FlavorService, ingredient::entities::Ingredient};
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
pub struct GetRecommendationsResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    post,
    path = "/recommendations",
    tag = "flavor",
    summary = "Recommend ingredients",
    description = "Up to three unselected ingredients that best complement the selection. An empty selection returns starter ingredients.",
    request_body = SelectionValidator,
    responses(
        (status = 200, body = GetRecommendationsResponse),
        (status = 422, description = "Selection too large")
    )
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SelectionValidator>,
) -> Result<Response<GetRecommendationsResponse>, ApiError> {
    let recommended = state.service.recommend(&payload.selected_ids);

    Ok(Response::OK(GetRecommendationsResponse { data: recommended }))
}
