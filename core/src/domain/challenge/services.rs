use tracing::instrument;

use crate::domain::{
    challenge::{
        entities::{CHALLENGE_SIZE, MoodChallenge, challenge_prompt},
        ports::{ChallengeService, RandomSource},
    },
    common::services::Service,
    experience::ports::ExperienceRepository,
    ingredient::{
        entities::{Ingredient, MoodCategory},
        ports::IngredientRepository,
    },
};

impl<I, E, R> ChallengeService for Service<I, E, R>
where
    I: IngredientRepository,
    E: ExperienceRepository,
    R: RandomSource,
{
    #[instrument(skip(self))]
    fn generate_challenge(&self, mood: MoodCategory) -> MoodChallenge {
        let mut pool: Vec<Ingredient> = self
            .ingredient_repository
            .get_all()
            .into_iter()
            .filter(|ingredient| ingredient.has_mood(mood))
            .collect();

        self.random_source.shuffle(&mut pool);
        pool.truncate(CHALLENGE_SIZE);

        tracing::debug!(count = pool.len(), "Drew challenge ingredients");

        MoodChallenge {
            mood,
            ingredients: pool,
            description: challenge_prompt(mood).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        challenge::ports::MockRandomSource,
        common::{
            FlavorscopeConfig,
            test_support::{catalog_service, ingredient},
        },
        experience::ports::MockExperienceRepository,
        ingredient::ports::MockIngredientRepository,
    };

    #[test]
    fn test_every_drawn_ingredient_has_the_mood() {
        let service = catalog_service();
        for mood in MoodCategory::ALL {
            for _ in 0..20 {
                let challenge = service.generate_challenge(*mood);
                assert_eq!(challenge.mood, *mood);
                assert!(challenge.ingredients.len() <= CHALLENGE_SIZE);
                assert!(challenge.ingredients.iter().all(|i| i.has_mood(*mood)));
                assert_eq!(challenge.description, challenge_prompt(*mood));
            }
        }
    }

    #[test]
    fn test_small_pool_is_returned_whole() {
        // only honey is calming
        let challenge = catalog_service().generate_challenge(MoodCategory::Calming);
        let ids: Vec<&str> = challenge.ingredients.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["7"]);
    }

    #[test]
    fn test_draw_has_no_duplicates() {
        let service = catalog_service();
        for _ in 0..20 {
            let challenge = service.generate_challenge(MoodCategory::Cozy);
            assert_eq!(challenge.ingredients.len(), CHALLENGE_SIZE);
            let mut ids: Vec<&str> = challenge.ingredients.iter().map(|i| i.id.as_str()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), CHALLENGE_SIZE);
        }
    }

    #[test]
    fn test_mood_without_ingredients_keeps_its_prompt() {
        let mut repository = MockIngredientRepository::new();
        repository
            .expect_get_all()
            .returning(|| vec![ingredient("a"), ingredient("b")]);
        let mut random = MockRandomSource::new();
        random.expect_shuffle().times(1).returning(|_| ());

        let service = Service::new(
            repository,
            MockExperienceRepository::new(),
            random,
            FlavorscopeConfig::default(),
        );
        let challenge = service.generate_challenge(MoodCategory::Romantic);
        assert!(challenge.ingredients.is_empty());
        assert_eq!(
            challenge.description,
            "Craft a sensual, indulgent flavor experience that evokes intimacy"
        );
    }

    #[test]
    fn test_draw_follows_the_injected_shuffle() {
        let mut random = MockRandomSource::new();
        random.expect_shuffle().returning(|items| items.reverse());

        let service = Service::new(
            crate::infrastructure::ingredient::StaticIngredientRepository::new(),
            MockExperienceRepository::new(),
            random,
            FlavorscopeConfig::default(),
        );
        // cozy in catalog order: 2, 4, 6, 7, 10
        let challenge = service.generate_challenge(MoodCategory::Cozy);
        let ids: Vec<&str> = challenge.ingredients.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["10", "7", "6"]);
    }
}
