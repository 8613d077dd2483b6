pub mod get_ingredient;
pub mod get_ingredients;
