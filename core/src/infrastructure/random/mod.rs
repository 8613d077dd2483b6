pub mod seeded_random_source;

pub use seeded_random_source::SeededRandomSource;
