use crate::domain::{
    flavor::{
        entities::FlavorSuggestion,
        profile::profile_of,
        scoring::{is_selected, resolve_selection},
    },
    ingredient::entities::{Ingredient, TasteCategory, TextureCategory},
};

pub const MAX_SUGGESTIONS: usize = 3;

pub const STARTER_REASONING: &str =
    "Start with these popular base ingredients to build your flavor profile.";

const EXHAUSTED_REASONING: &str =
    "These ingredients will help create a more balanced and complex flavor profile.";

const FALLBACK_REASON: &str = "complement your selection";

const TASTE_RULES: &[(TasteCategory, TasteCategory, u32, &str)] = &[
    (TasteCategory::Sweet, TasteCategory::Salty, 5, "balances sweetness with saltiness"),
    (TasteCategory::Sweet, TasteCategory::Sour, 4, "adds tartness to complement sweetness"),
    (TasteCategory::Salty, TasteCategory::Umami, 4, "enhances savory depth"),
];

const TEXTURE_RULES: &[(TextureCategory, TextureCategory, u32, &str)] = &[
    (TextureCategory::Creamy, TextureCategory::Crunchy, 3, "adds crunch to creamy textures"),
    (TextureCategory::Smooth, TextureCategory::Crispy, 3, "creates textural contrast"),
];

const AROMA_WEIGHT: u32 = 2;

struct Reasoned<'a> {
    ingredient: &'a Ingredient,
    score: u32,
    reasons: Vec<String>,
}

/// Weighs each unselected ingredient against the combined attributes of the
/// selection and explains the strongest picks.
pub fn suggest(catalog: &[Ingredient], selected_ids: &[String]) -> FlavorSuggestion {
    let selected = resolve_selection(catalog, selected_ids);
    if selected.is_empty() {
        return FlavorSuggestion {
            suggestions: catalog.iter().take(MAX_SUGGESTIONS).cloned().collect(),
            reasoning: STARTER_REASONING.to_string(),
        };
    }

    let profile = profile_of(&selected);

    let mut reasoned: Vec<Reasoned> = catalog
        .iter()
        .filter(|candidate| !is_selected(selected_ids, candidate))
        .map(|candidate| {
            let mut score = 0;
            let mut reasons = Vec::new();

            for (have, want, weight, reason) in TASTE_RULES {
                if profile.taste.contains(have) && candidate.has_taste(*want) {
                    score += weight;
                    reasons.push(reason.to_string());
                }
            }
            for (have, want, weight, reason) in TEXTURE_RULES {
                if profile.texture.contains(have) && candidate.has_texture(*want) {
                    score += weight;
                    reasons.push(reason.to_string());
                }
            }

            let new_aromas: Vec<&str> = candidate
                .smell
                .iter()
                .filter(|smell| !profile.smell.contains(smell))
                .map(|smell| smell.as_str())
                .collect();
            if !new_aromas.is_empty() {
                score += new_aromas.len() as u32 * AROMA_WEIGHT;
                reasons.push(format!("introduces {} aromas", new_aromas.join(", ")));
            }

            Reasoned {
                ingredient: candidate,
                score,
                reasons,
            }
        })
        .collect();

    reasoned.sort_by(|a, b| b.score.cmp(&a.score));
    reasoned.truncate(MAX_SUGGESTIONS);

    if reasoned.is_empty() {
        return FlavorSuggestion {
            suggestions: Vec::new(),
            reasoning: EXHAUSTED_REASONING.to_string(),
        };
    }

    let headline = reasoned
        .iter()
        .map(|pick| pick.reasons.first().map_or(FALLBACK_REASON, String::as_str))
        .collect::<Vec<_>>()
        .join(", and ");

    FlavorSuggestion {
        suggestions: reasoned.iter().map(|pick| pick.ingredient.clone()).collect(),
        reasoning: format!(
            "These ingredients are suggested because they {headline}. This creates a balanced flavor profile."
        ),
    }
}
