use tracing::instrument;

use crate::domain::{
    challenge::ports::RandomSource,
    common::{entities::app_errors::CoreError, services::Service},
    experience::ports::ExperienceRepository,
    flavor::{
        entities::{CompatibilityBreakdown, FlavorProfile, FlavorSuggestion, ScoredIngredient},
        ports::FlavorService,
        profile, scoring, suggestion,
    },
    ingredient::{entities::Ingredient, ports::IngredientRepository},
};

impl<I, E, R> FlavorService for Service<I, E, R>
where
    I: IngredientRepository,
    E: ExperienceRepository,
    R: RandomSource,
{
    #[instrument(skip(self))]
    fn score_pair(
        &self,
        selected_id: &str,
        candidate_id: &str,
    ) -> Result<CompatibilityBreakdown, CoreError> {
        let selected = self
            .ingredient_repository
            .get_by_id(selected_id)
            .ok_or(CoreError::NotFound)?;
        let candidate = self
            .ingredient_repository
            .get_by_id(candidate_id)
            .ok_or(CoreError::NotFound)?;

        let breakdown = scoring::score_breakdown(&selected, &candidate);
        tracing::debug!(score = breakdown.total(), "Scored ingredient pair");

        Ok(breakdown)
    }

    #[instrument(skip(self))]
    fn rank(&self, selected_ids: &[String]) -> Vec<ScoredIngredient> {
        scoring::rank_candidates(&self.ingredient_repository.get_all(), selected_ids)
    }

    #[instrument(skip(self))]
    fn recommend(&self, selected_ids: &[String]) -> Vec<Ingredient> {
        let recommended = scoring::recommend(&self.ingredient_repository.get_all(), selected_ids);

        tracing::debug!(count = recommended.len(), "Computed recommendations");

        recommended
    }

    #[instrument(skip(self))]
    fn describe_profile(&self, selected_ids: &[String]) -> String {
        profile::describe_profile(&self.ingredient_repository.get_all(), selected_ids)
    }

    #[instrument(skip(self))]
    fn profile(&self, selected_ids: &[String]) -> FlavorProfile {
        profile::collect_profile(&self.ingredient_repository.get_all(), selected_ids)
    }

    #[instrument(skip(self))]
    fn suggest(&self, selected_ids: &[String]) -> FlavorSuggestion {
        suggestion::suggest(&self.ingredient_repository.get_all(), selected_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        challenge::ports::MockRandomSource,
        common::{
            FlavorscopeConfig,
            test_support::{catalog_service, ingredient, selection},
        },
        experience::ports::MockExperienceRepository,
        ingredient::{
            entities::{SmellCategory, TasteCategory, TextureCategory},
            ports::MockIngredientRepository,
        },
    };

    fn service_over(
        catalog: Vec<Ingredient>,
    ) -> Service<MockIngredientRepository, MockExperienceRepository, MockRandomSource> {
        let mut repository = MockIngredientRepository::new();
        let lookup = catalog.clone();
        repository.expect_get_all().returning(move || catalog.clone());
        repository
            .expect_get_by_id()
            .returning(move |id| lookup.iter().find(|i| i.id == id).cloned());

        Service::new(
            repository,
            MockExperienceRepository::new(),
            MockRandomSource::new(),
            FlavorscopeConfig::default(),
        )
    }

    #[test]
    fn test_salt_outranks_an_unrelated_ingredient() {
        let mut strawberry = ingredient("1");
        strawberry.name = "Strawberry".to_string();
        strawberry.taste = vec![TasteCategory::Sweet, TasteCategory::Sour];
        let mut salt = ingredient("3");
        salt.name = "Sea Salt".to_string();
        salt.taste = vec![TasteCategory::Salty];
        let plain = ingredient("99");

        // the unrelated ingredient comes first in the catalog, so only score can lift salt
        let service = service_over(vec![strawberry, plain, salt]);
        let ranked = service.rank(&selection(&["1"]));
        let ids: Vec<&str> = ranked.iter().map(|s| s.ingredient.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "99"]);
        assert!(ranked[0].score > ranked[1].score);

        let recommended = service.recommend(&selection(&["1"]));
        assert_eq!(recommended[0].id, "3");
    }

    #[test]
    fn test_score_pair_unknown_id_is_not_found() {
        let service = catalog_service();
        assert_eq!(service.score_pair("1", "404"), Err(CoreError::NotFound));
        assert_eq!(service.score_pair("404", "1"), Err(CoreError::NotFound));
    }

    #[test]
    fn test_score_pair_is_directional_for_textures() {
        let mut creamy = ingredient("c");
        creamy.texture = vec![TextureCategory::Creamy];
        let mut crunchy = ingredient("k");
        crunchy.texture = vec![TextureCategory::Crunchy];
        crunchy.smell = vec![SmellCategory::Smoky];

        let service = service_over(vec![creamy, crunchy]);
        let forward = service.score_pair("c", "k").unwrap();
        let backward = service.score_pair("k", "c").unwrap();
        assert_eq!(forward.total(), 4);
        assert_eq!(backward.total(), 0);
    }

    #[test]
    fn test_operations_are_repeatable() {
        let service = catalog_service();
        let ids = selection(&["2", "6"]);
        assert_eq!(service.recommend(&ids), service.recommend(&ids));
        assert_eq!(service.describe_profile(&ids), service.describe_profile(&ids));
        assert_eq!(service.suggest(&ids), service.suggest(&ids));
        assert_eq!(service.score_pair("2", "6"), service.score_pair("2", "6"));
    }

    #[test]
    fn test_profile_matches_description() {
        let service = catalog_service();
        let ids = selection(&["4", "7"]);
        let profile = service.profile(&ids);
        let description = service.describe_profile(&ids);
        for taste in &profile.taste {
            assert!(description.contains(taste.as_str()));
        }
        for mood in &profile.moods {
            assert!(description.contains(mood.as_str()));
        }
    }
}
