pub mod static_ingredient_repository;
