use flavorscope_core::domain::{ingredient::entities::MoodCategory, speech::entities::ParsedSpeech};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ParseJournalValidator {
    #[validate(length(min = 1, max = 5000, message = "text must be 1 to 5000 characters"))]
    pub text: String,

    /// Result of the earlier fragments of the same transcript, if any.
    #[serde(default)]
    #[validate(nested)]
    pub previous: Option<PreviousSpeechValidator>,
}

/// A `ParsedSpeech` sent back by the client.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct PreviousSpeechValidator {
    pub mood: Option<MoodCategory>,

    #[validate(length(max = 64, message = "previous ingredients must hold at most 64 ids"))]
    pub ingredients: Vec<String>,

    #[validate(length(max = 5000, message = "previous notes must be at most 5000 characters"))]
    pub notes: String,
}

impl From<PreviousSpeechValidator> for ParsedSpeech {
    fn from(previous: PreviousSpeechValidator) -> Self {
        ParsedSpeech {
            mood: previous.mood,
            ingredients: previous.ingredients,
            notes: previous.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(notes: String) -> ParseJournalValidator {
        ParseJournalValidator {
            text: "honey".to_string(),
            previous: Some(PreviousSpeechValidator {
                notes,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_previous_notes_are_capped() {
        assert!(payload("x".repeat(5000)).validate().is_ok());
        assert!(payload("x".repeat(5001)).validate().is_err());
    }

    #[test]
    fn test_previous_is_optional() {
        let validator: ParseJournalValidator =
            serde_json::from_str(r#"{"text":"honey","previous":{}}"#).unwrap();
        assert!(validator.validate().is_ok());
        assert_eq!(
            ParsedSpeech::from(validator.previous.unwrap()),
            ParsedSpeech::default()
        );
    }
}
