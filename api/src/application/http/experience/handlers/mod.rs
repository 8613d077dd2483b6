pub mod get_experience;
pub mod get_experiences;
pub mod get_ingredient_experiences;
pub mod get_similar_experiences;
