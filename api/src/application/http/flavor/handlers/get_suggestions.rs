use axum::extract::State;
use flavorscope_core::domain::flavor::{entities::FlavorSuggestion, ports::FlavorService};

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

#[utoipa::path(
    post,
    path = "/suggestions",
    tag = "flavor",
    summary = "Suggest ingredients with reasons",
    request_body = SelectionValidator,
    responses(
        (status = 200, body = FlavorSuggestion),
        (status = 422, description = "Selection too large")
    )
)]
pub async fn get_suggestions(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SelectionValidator>,
) -> Result<Response<FlavorSuggestion>, ApiError> {
    Ok(Response::OK(state.service.suggest(&payload.selected_ids)))
}
