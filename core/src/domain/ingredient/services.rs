use tracing::instrument;

use crate::domain::{
    challenge::ports::RandomSource,
    common::{entities::app_errors::CoreError, services::Service},
    experience::ports::ExperienceRepository,
    ingredient::{
        entities::Ingredient,
        ports::{IngredientRepository, IngredientService},
        value_objects::IngredientFilter,
    },
};

impl<I, E, R> IngredientService for Service<I, E, R>
where
    I: IngredientRepository,
    E: ExperienceRepository,
    R: RandomSource,
{
    #[instrument(skip(self))]
    fn list_ingredients(&self, filter: IngredientFilter) -> Vec<Ingredient> {
        let catalog = self.ingredient_repository.get_all();
        if filter.is_empty() {
            return catalog;
        }

        let matched: Vec<Ingredient> = catalog
            .into_iter()
            .filter(|ingredient| filter.matches(ingredient))
            .collect();

        tracing::debug!(count = matched.len(), "Filtered ingredient catalog");

        matched
    }

    #[instrument(skip(self))]
    fn get_ingredient(&self, id: &str) -> Result<Ingredient, CoreError> {
        self.ingredient_repository
            .get_by_id(id)
            .ok_or(CoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::catalog_service,
        ingredient::entities::{SmellCategory, TasteCategory, TextureCategory},
    };

    fn ids(ingredients: &[Ingredient]) -> Vec<&str> {
        ingredients.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_catalog_in_order() {
        let service = catalog_service();
        let all = service.list_ingredients(IngredientFilter::default());
        assert_eq!(
            ids(&all),
            vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]
        );
    }

    #[test]
    fn test_values_within_an_axis_are_alternatives() {
        let service = catalog_service();
        let filter = IngredientFilter {
            taste: vec![TasteCategory::Umami, TasteCategory::Sour],
            ..Default::default()
        };
        assert_eq!(
            ids(&service.list_ingredients(filter)),
            vec!["1", "5", "6", "10"]
        );
    }

    #[test]
    fn test_axes_combine_with_and() {
        let service = catalog_service();
        let filter = IngredientFilter {
            taste: vec![TasteCategory::Salty],
            smell: vec![SmellCategory::Smoky],
            texture: vec![TextureCategory::Crispy],
            search: None,
        };
        assert_eq!(ids(&service.list_ingredients(filter)), vec!["10"]);
    }

    #[test]
    fn test_search_matches_description_case_insensitively() {
        let service = catalog_service();
        let filter = IngredientFilter {
            search: Some("CRUNCH".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&service.list_ingredients(filter)), vec!["8"]);
    }

    #[test]
    fn test_get_ingredient_unknown_id_is_not_found() {
        let service = catalog_service();
        assert_eq!(service.get_ingredient("7").unwrap().name, "Honey");
        assert_eq!(service.get_ingredient("42"), Err(CoreError::NotFound));
    }
}
