use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ingredient::entities::{
    Ingredient, MoodCategory, SmellCategory, SoundCategory, TasteCategory, TextureCategory,
    VisualCategory,
};

/// Per-rule contributions of one selected/candidate pairing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompatibilityBreakdown {
    pub taste_contrast: u32,
    pub smell_novelty: u32,
    pub texture_contrast: u32,
    pub shared_moods: u32,
}

impl CompatibilityBreakdown {
    pub fn total(&self) -> u32 {
        self.taste_contrast + self.smell_novelty + self.texture_contrast + self.shared_moods
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoredIngredient {
    pub ingredient: Ingredient,
    pub score: u32,
}

/// Attribute unions of a selection, each in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FlavorProfile {
    pub taste: Vec<TasteCategory>,
    pub smell: Vec<SmellCategory>,
    pub texture: Vec<TextureCategory>,
    pub sound: Vec<SoundCategory>,
    pub visual: Vec<VisualCategory>,
    pub moods: Vec<MoodCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FlavorSuggestion {
    pub suggestions: Vec<Ingredient>,
    pub reasoning: String,
}
