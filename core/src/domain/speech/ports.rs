use crate::domain::speech::entities::ParsedSpeech;

/// Best-effort keyword extraction from journal text. Never fails.
#[cfg_attr(test, mockall::automock)]
pub trait SpeechService: Send + Sync {
    fn parse_speech(&self, text: &str) -> ParsedSpeech;

    fn merge_speech(&self, previous: ParsedSpeech, next: &str) -> ParsedSpeech;
}
