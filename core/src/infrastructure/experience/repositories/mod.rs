pub mod static_experience_repository;
