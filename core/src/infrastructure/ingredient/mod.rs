pub mod repositories;

pub use repositories::static_ingredient_repository::StaticIngredientRepository;
