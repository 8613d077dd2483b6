use axum::extract::State;
use flavorscope_core::domain::speech::{entities::ParsedSpeech, ports::SpeechService};

use crate::application::http::{
    journal::validators::ParseJournalValidator,
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
    path = "/parse",
    tag = "journal",
    summary = "Parse a journal note",
    description = "Picks out a mood and known ingredients from free text by keyword. When `previous` is given the new fragment is merged into it.",
    request_body = ParseJournalValidator,
    responses(
        (status = 200, body = ParsedSpeech),
        (status = 422, description = "Empty or oversized text or previous notes")
    )
)]
pub async fn parse_journal(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ParseJournalValidator>,
) -> Result<Response<ParsedSpeech>, ApiError> {
    let parsed = match payload.previous {
        Some(previous) => state.service.merge_speech(previous.into(), &payload.text),
        None => state.service.parse_speech(&payload.text),
    };

    Ok(Response::OK(parsed))
}
