use crate::domain::{
    flavor::entities::{CompatibilityBreakdown, ScoredIngredient},
    ingredient::entities::{Ingredient, TasteCategory, TextureCategory},
};

/// Most recommendations returned for a selection.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Catalog entries offered when nothing is selected yet.
pub const DEFAULT_RECOMMENDATIONS: usize = 3;

/// Taste pairs rewarded once per unordered ingredient pair.
const TASTE_CONTRASTS: &[(TasteCategory, TasteCategory, u32)] = &[
    (TasteCategory::Sweet, TasteCategory::Salty, 3),
    (TasteCategory::Sweet, TasteCategory::Sour, 2),
    (TasteCategory::Umami, TasteCategory::Salty, 2),
];

/// Texture pairs rewarded only when the selected side carries the first texture.
const TEXTURE_CONTRASTS: &[(TextureCategory, TextureCategory, u32)] = &[
    (TextureCategory::Creamy, TextureCategory::Crunchy, 3),
    (TextureCategory::Smooth, TextureCategory::Crispy, 2),
];

/// Scores how well `candidate` complements an already `selected` ingredient.
///
/// Taste contrasts and shared moods do not depend on argument order. Smell
/// novelty and texture contrast do: they reward what the candidate brings to
/// the selection, so `compatibility_score(a, b)` may differ from
/// `compatibility_score(b, a)`.
pub fn compatibility_score(selected: &Ingredient, candidate: &Ingredient) -> u32 {
    score_breakdown(selected, candidate).total()
}

pub fn score_breakdown(selected: &Ingredient, candidate: &Ingredient) -> CompatibilityBreakdown {
    CompatibilityBreakdown {
        taste_contrast: taste_contrast(selected, candidate),
        smell_novelty: smell_novelty(selected, candidate),
        texture_contrast: texture_contrast(selected, candidate),
        shared_moods: shared_moods(selected, candidate),
    }
}

fn taste_contrast(a: &Ingredient, b: &Ingredient) -> u32 {
    TASTE_CONTRASTS
        .iter()
        .filter(|(first, second, _)| {
            (a.has_taste(*first) && b.has_taste(*second))
                || (b.has_taste(*first) && a.has_taste(*second))
        })
        .map(|(_, _, bonus)| bonus)
        .sum()
}

fn smell_novelty(selected: &Ingredient, candidate: &Ingredient) -> u32 {
    candidate
        .smell
        .iter()
        .filter(|smell| !selected.has_smell(**smell))
        .count() as u32
}

fn texture_contrast(selected: &Ingredient, candidate: &Ingredient) -> u32 {
    TEXTURE_CONTRASTS
        .iter()
        .filter(|(own, other, _)| selected.has_texture(*own) && candidate.has_texture(*other))
        .map(|(_, _, bonus)| bonus)
        .sum()
}

fn shared_moods(a: &Ingredient, b: &Ingredient) -> u32 {
    b.moods.iter().filter(|mood| a.has_mood(**mood)).count() as u32
}

pub(crate) fn is_selected(selected_ids: &[String], ingredient: &Ingredient) -> bool {
    selected_ids.iter().any(|id| *id == ingredient.id)
}

/// Resolves a selection against the catalog, in catalog order. Unknown ids are dropped.
pub(crate) fn resolve_selection<'a>(
    catalog: &'a [Ingredient],
    selected_ids: &[String],
) -> Vec<&'a Ingredient> {
    catalog
        .iter()
        .filter(|ingredient| is_selected(selected_ids, ingredient))
        .collect()
}

/// Ranks every unselected catalog entry by its summed score against the selection.
///
/// Ties keep catalog order.
pub fn rank_candidates(catalog: &[Ingredient], selected_ids: &[String]) -> Vec<ScoredIngredient> {
    let selected = resolve_selection(catalog, selected_ids);

    let mut ranked: Vec<ScoredIngredient> = catalog
        .iter()
        .filter(|candidate| !is_selected(selected_ids, candidate))
        .map(|candidate| ScoredIngredient {
            score: selected
                .iter()
                .map(|ingredient| compatibility_score(ingredient, candidate))
                .sum(),
            ingredient: candidate.clone(),
        })
        .collect();

    // `sort_by` is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Top complements for a selection, or the catalog's opening entries when nothing is selected.
pub fn recommend(catalog: &[Ingredient], selected_ids: &[String]) -> Vec<Ingredient> {
    if selected_ids.is_empty() {
        return catalog
            .iter()
            .take(DEFAULT_RECOMMENDATIONS)
            .cloned()
            .collect();
    }

    rank_candidates(catalog, selected_ids)
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|scored| scored.ingredient)
        .collect()
}
