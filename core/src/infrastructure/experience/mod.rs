pub mod repositories;

pub use repositories::static_experience_repository::StaticExperienceRepository;
