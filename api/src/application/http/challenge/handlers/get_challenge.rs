use axum::extract::{Path, State};
use flavorscope_core::domain::{
    challenge::{entities::MoodChallenge, ports::ChallengeService},
    ingredient::entities::MoodCategory,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{mood}",
    tag = "challenge",
    summary = "Draw a mood challenge",
    description = "Draws up to three ingredients carrying the mood, at random, with the mood's fixed prompt.",
    params(
        ("mood" = MoodCategory, Path, description = "Mood to theme the challenge on"),
    ),
    responses(
        (status = 200, body = MoodChallenge),
        (status = 400, description = "Unknown mood")
    )
)]
pub async fn get_challenge(
    Path(mood): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<MoodChallenge>, ApiError> {
    let mood: MoodCategory = mood.parse().map_err(ApiError::from)?;

    Ok(Response::OK(state.service.generate_challenge(mood)))
}
