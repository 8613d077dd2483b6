use crate::domain::{
    challenge::entities::MoodChallenge,
    ingredient::entities::{Ingredient, MoodCategory},
};

/// Source of shuffles for challenge draws, injected so tests can pin it.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    fn shuffle(&self, items: &mut [Ingredient]);
}

#[cfg_attr(test, mockall::automock)]
pub trait ChallengeService: Send + Sync {
    fn generate_challenge(&self, mood: MoodCategory) -> MoodChallenge;
}
