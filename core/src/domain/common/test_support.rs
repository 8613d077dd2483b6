use crate::{
    domain::{
        common::{FlavorscopeConfig, services::Service},
        ingredient::entities::Ingredient,
    },
    infrastructure::{
        experience::StaticExperienceRepository, ingredient::StaticIngredientRepository,
        random::SeededRandomSource,
    },
};

pub(crate) const TEST_SEED: u64 = 7;

pub(crate) type CatalogService =
    Service<StaticIngredientRepository, StaticExperienceRepository, SeededRandomSource>;

/// Service over the built-in catalog with a fixed shuffle seed.
pub(crate) fn catalog_service() -> CatalogService {
    Service::new(
        StaticIngredientRepository::new(),
        StaticExperienceRepository::new(),
        SeededRandomSource::seeded(TEST_SEED),
        FlavorscopeConfig::default(),
    )
}

/// Ingredient with no sensory attributes.
pub(crate) fn ingredient(id: &str) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: format!("Ingredient {id}"),
        description: String::new(),
        image: String::new(),
        taste: vec![],
        smell: vec![],
        texture: vec![],
        sound: vec![],
        visual: vec![],
        moods: vec![],
    }
}

pub(crate) fn selection(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}
