pub mod entities;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

/// Default significance threshold for speech mood detection.
pub const DEFAULT_MOOD_THRESHOLD: f32 = 0.5;

#[derive(Clone, Debug, Default)]
pub struct FlavorscopeConfig {
    pub challenge: ChallengeConfig,
    pub speech: SpeechConfig,
}

#[derive(Clone, Debug, Default)]
pub struct ChallengeConfig {
    /// Fixed seed for challenge shuffles. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct SpeechConfig {
    pub mood_threshold: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            mood_threshold: DEFAULT_MOOD_THRESHOLD,
        }
    }
}

/// Appends `value` to `values` unless it is already present, keeping first-seen order.
pub fn push_unique<T: PartialEq + Copy>(values: &mut Vec<T>, value: T) {
    if !values.contains(&value) {
        values.push(value);
    }
}
