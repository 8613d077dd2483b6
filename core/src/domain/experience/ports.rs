use crate::domain::{
    common::entities::app_errors::CoreError,
    experience::{entities::FlavorExperience, value_objects::ExperienceFilter},
    ingredient::entities::MoodCategory,
};

/// Read-only journal storage.
#[cfg_attr(test, mockall::automock)]
pub trait ExperienceRepository: Send + Sync {
    fn get_all(&self) -> Vec<FlavorExperience>;

    fn get_by_id(&self, id: &str) -> Option<FlavorExperience>;
}

#[cfg_attr(test, mockall::automock)]
pub trait ExperienceService: Send + Sync {
    fn list_experiences(&self, filter: ExperienceFilter) -> Vec<FlavorExperience>;

    fn get_experience(&self, id: &str) -> Result<FlavorExperience, CoreError>;

    fn experiences_with_ingredient(&self, ingredient_id: &str) -> Vec<FlavorExperience>;

    /// Up to three other entries, closest first. Unknown ids give an empty list.
    fn similar_experiences(&self, experience_id: &str) -> Vec<FlavorExperience>;

    fn suggest_dishes(&self, mood: MoodCategory) -> Vec<String>;
}
