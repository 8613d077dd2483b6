use tracing::instrument;

use crate::domain::{
    challenge::ports::RandomSource,
    common::{entities::app_errors::CoreError, services::Service},
    experience::{
        entities::{FlavorExperience, dishes_for_mood},
        ports::{ExperienceRepository, ExperienceService},
        value_objects::ExperienceFilter,
    },
    ingredient::{entities::MoodCategory, ports::IngredientRepository},
};

pub const MAX_SIMILAR_EXPERIENCES: usize = 3;

const SAME_MOOD_WEIGHT: usize = 10;

impl<I, E, R> ExperienceService for Service<I, E, R>
where
    I: IngredientRepository,
    E: ExperienceRepository,
    R: RandomSource,
{
    #[instrument(skip(self))]
    fn list_experiences(&self, filter: ExperienceFilter) -> Vec<FlavorExperience> {
        let experiences: Vec<FlavorExperience> = self
            .experience_repository
            .get_all()
            .into_iter()
            .filter(|experience| filter.matches(experience))
            .collect();

        tracing::debug!(count = experiences.len(), "Listed experiences");

        experiences
    }

    #[instrument(skip(self))]
    fn get_experience(&self, id: &str) -> Result<FlavorExperience, CoreError> {
        self.experience_repository
            .get_by_id(id)
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    fn experiences_with_ingredient(&self, ingredient_id: &str) -> Vec<FlavorExperience> {
        self.experience_repository
            .get_all()
            .into_iter()
            .filter(|experience| experience.uses_ingredient(ingredient_id))
            .collect()
    }

    #[instrument(skip(self))]
    fn similar_experiences(&self, experience_id: &str) -> Vec<FlavorExperience> {
        let Some(target) = self.experience_repository.get_by_id(experience_id) else {
            return Vec::new();
        };

        let mut ranked: Vec<(usize, FlavorExperience)> = self
            .experience_repository
            .get_all()
            .into_iter()
            .filter(|experience| experience.id != target.id)
            .map(|experience| {
                let mood_bonus = if experience.mood == target.mood {
                    SAME_MOOD_WEIGHT
                } else {
                    0
                };
                (experience.shared_ingredients(&target) + mood_bonus, experience)
            })
            .collect();

        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        ranked
            .into_iter()
            .take(MAX_SIMILAR_EXPERIENCES)
            .map(|(_, experience)| experience)
            .collect()
    }

    fn suggest_dishes(&self, mood: MoodCategory) -> Vec<String> {
        dishes_for_mood(mood)
            .iter()
            .map(|dish| dish.to_string())
            .collect()
    }
}
