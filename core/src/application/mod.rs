use crate::{
    domain::common::{FlavorscopeConfig, services::Service},
    infrastructure::{
        experience::StaticExperienceRepository, ingredient::StaticIngredientRepository,
        random::SeededRandomSource,
    },
};

pub type FlavorscopeService =
    Service<StaticIngredientRepository, StaticExperienceRepository, SeededRandomSource>;

/// Wires the built-in catalog and journal with a random source seeded from `config`.
pub fn create_service(config: FlavorscopeConfig) -> FlavorscopeService {
    tracing::debug!(
        seeded = config.challenge.seed.is_some(),
        mood_threshold = config.speech.mood_threshold,
        "Creating flavorscope service"
    );

    Service::new(
        StaticIngredientRepository::new(),
        StaticExperienceRepository::new(),
        SeededRandomSource::new(config.challenge.seed),
        config,
    )
}
