use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Unknown mood: {0}")]
    InvalidMood(String),

    #[error("Unknown sensory category: {0}")]
    InvalidCategory(String),
}
