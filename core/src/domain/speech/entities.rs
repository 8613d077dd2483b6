use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ingredient::entities::MoodCategory;

/// What the keyword parser pulled out of a free-text journal note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ParsedSpeech {
    /// Absent when no mood clearly stands out.
    pub mood: Option<MoodCategory>,
    /// Known ingredient ids, each once, in catalog order.
    pub ingredients: Vec<String>,
    /// The input, verbatim.
    pub notes: String,
}

impl ParsedSpeech {
    /// Folds a newer transcript fragment into this one.
    pub fn merge(self, next: ParsedSpeech) -> ParsedSpeech {
        let mut ingredients = self.ingredients;
        for id in next.ingredients {
            if !ingredients.contains(&id) {
                ingredients.push(id);
            }
        }

        let notes = match (self.notes.is_empty(), next.notes.is_empty()) {
            (true, _) => next.notes,
            (false, true) => self.notes,
            (false, false) => format!("{} {}", self.notes, next.notes),
        };

        ParsedSpeech {
            mood: next.mood.or(self.mood),
            ingredients,
            notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(mood: Option<MoodCategory>, ingredients: &[&str], notes: &str) -> ParsedSpeech {
        ParsedSpeech {
            mood,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_merge_keeps_previous_mood_when_next_has_none() {
        let merged = parsed(Some(MoodCategory::Cozy), &["4"], "warm cinnamon")
            .merge(parsed(None, &["7", "4"], "with honey"));
        assert_eq!(merged.mood, Some(MoodCategory::Cozy));
        assert_eq!(merged.ingredients, vec!["4", "7"]);
        assert_eq!(merged.notes, "warm cinnamon with honey");
    }

    #[test]
    fn test_merge_prefers_newer_mood() {
        let merged = parsed(Some(MoodCategory::Cozy), &[], "")
            .merge(parsed(Some(MoodCategory::Calming), &["7"], "so soothing"));
        assert_eq!(merged.mood, Some(MoodCategory::Calming));
        assert_eq!(merged.notes, "so soothing");
    }

    #[test]
    fn test_missing_fields_default() {
        let speech: ParsedSpeech = serde_json::from_str(r#"{"notes":"warm toast"}"#).unwrap();
        assert_eq!(speech.mood, None);
        assert!(speech.ingredients.is_empty());
        assert_eq!(speech.notes, "warm toast");

        assert_eq!(
            serde_json::from_str::<ParsedSpeech>("{}").unwrap(),
            ParsedSpeech::default()
        );
    }
}
