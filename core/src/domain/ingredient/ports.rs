use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{entities::Ingredient, value_objects::IngredientFilter},
};

/// Read-only access to the ingredient catalog.
#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    /// Every ingredient, in catalog declaration order.
    fn get_all(&self) -> Vec<Ingredient>;

    fn get_by_id(&self, id: &str) -> Option<Ingredient>;
}

#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn list_ingredients(&self, filter: IngredientFilter) -> Vec<Ingredient>;

    fn get_ingredient(&self, id: &str) -> Result<Ingredient, CoreError>;
}
