use crate::domain::{
    common::entities::app_errors::CoreError,
    flavor::entities::{CompatibilityBreakdown, FlavorProfile, FlavorSuggestion, ScoredIngredient},
    ingredient::entities::Ingredient,
};

/// Pairing, ranking and description over the ingredient catalog.
///
/// Selections are plain id lists. Ids the catalog does not know are skipped.
#[cfg_attr(test, mockall::automock)]
pub trait FlavorService: Send + Sync {
    /// Scores one pairing, `selected` first. Unknown ids are `NotFound`.
    fn score_pair(
        &self,
        selected_id: &str,
        candidate_id: &str,
    ) -> Result<CompatibilityBreakdown, CoreError>;

    fn rank(&self, selected_ids: &[String]) -> Vec<ScoredIngredient>;

    fn recommend(&self, selected_ids: &[String]) -> Vec<Ingredient>;

    fn describe_profile(&self, selected_ids: &[String]) -> String;

    fn profile(&self, selected_ids: &[String]) -> FlavorProfile;

    fn suggest(&self, selected_ids: &[String]) -> FlavorSuggestion;
}
