use std::sync::Arc;

use crate::domain::{
    challenge::ports::RandomSource, common::FlavorscopeConfig,
    experience::ports::ExperienceRepository, ingredient::ports::IngredientRepository,
};

/// The one service value behind every domain service trait.
pub struct Service<I, E, R>
where
    I: IngredientRepository,
    E: ExperienceRepository,
    R: RandomSource,
{
    pub(crate) ingredient_repository: Arc<I>,
    pub(crate) experience_repository: Arc<E>,
    pub(crate) random_source: Arc<R>,
    pub(crate) config: FlavorscopeConfig,
}

impl<I, E, R> Service<I, E, R>
where
    I: IngredientRepository,
    E: ExperienceRepository,
    R: RandomSource,
{
    pub fn new(
        ingredient_repository: I,
        experience_repository: E,
        random_source: R,
        config: FlavorscopeConfig,
    ) -> Self {
        Self {
            ingredient_repository: Arc::new(ingredient_repository),
            experience_repository: Arc::new(experience_repository),
            random_source: Arc::new(random_source),
            config,
        }
    }
}

impl<I, E, R> Clone for Service<I, E, R>
where
    I: IngredientRepository,
    E: ExperienceRepository,
    R: RandomSource,
{
    fn clone(&self) -> Self {
        Self {
            ingredient_repository: Arc::clone(&self.ingredient_repository),
            experience_repository: Arc::clone(&self.experience_repository),
            random_source: Arc::clone(&self.random_source),
            config: self.config.clone(),
        }
    }
}
