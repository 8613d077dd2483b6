use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ingredient::entities::{Ingredient, MoodCategory};

/// Most ingredients drawn for one challenge.
pub const CHALLENGE_SIZE: usize = 3;

/// A themed prompt plus a few ingredients drawn for it. Rebuilt on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MoodChallenge {
    pub mood: MoodCategory,
    pub ingredients: Vec<Ingredient>,
    pub description: String,
}

/// Fixed prompt for each mood, independent of the ingredients drawn.
pub fn challenge_prompt(mood: MoodCategory) -> &'static str {
    match mood {
        MoodCategory::Cozy => "Create a warm, comforting flavor that reminds you of home",
        MoodCategory::Adventurous => {
            "Design a bold, unexpected flavor combination that surprises the palate"
        }
        MoodCategory::Refreshing => {
            "Develop a bright, invigorating flavor that feels like a cool breeze"
        }
        MoodCategory::Romantic => {
            "Craft a sensual, indulgent flavor experience that evokes intimacy"
        }
        MoodCategory::Energizing => "Mix a vibrant, stimulating flavor that gives you a boost",
        MoodCategory::Calming => "Blend a gentle, soothing flavor that helps you unwind",
    }
}
