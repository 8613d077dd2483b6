pub mod experience;
pub mod ingredient;
pub mod random;
