pub mod get_profile;
pub mod get_rankings;
pub mod get_recommendations;
pub mod get_suggestions;
pub mod score_pair;
