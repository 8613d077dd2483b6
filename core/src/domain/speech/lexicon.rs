//! Keyword tables behind the journal parser.
//!
//! Every table is compiled once into case-insensitive substring patterns. A
//! pattern that fails to compile is kept as `None` and simply never matches.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ingredient::entities::MoodCategory;

/// Weight of one keyword occurrence.
pub const KEYWORD_WEIGHT: f32 = 1.0;

const MOOD_KEYWORDS: &[(MoodCategory, &[&str])] = &[
    (MoodCategory::Cozy, &["cozy", "comfort", "warm", "homey"]),
    (
        MoodCategory::Adventurous,
        &["adventurous", "exciting", "bold", "unusual"],
    ),
    (
        MoodCategory::Refreshing,
        &["refreshing", "cool", "light", "crisp"],
    ),
    (
        MoodCategory::Romantic,
        &["romantic", "indulgent", "rich", "sensual"],
    ),
    (
        MoodCategory::Energizing,
        &["energizing", "invigorating", "bright", "lively"],
    ),
    (
        MoodCategory::Calming,
        &["calming", "soothing", "relaxing", "gentle"],
    ),
];

/// Situational cues. All phrases must appear; each cue counts once.
pub const CONTEXT_BONUSES: &[(&[&str], MoodCategory, f32)] = &[
    (&["hot day"], MoodCategory::Refreshing, 1.0),
    (&["summer"], MoodCategory::Refreshing, 0.5),
    (&["winter"], MoodCategory::Cozy, 0.5),
    (&["cold"], MoodCategory::Cozy, 0.5),
    (&["dinner", "special"], MoodCategory::Romantic, 1.0),
];

const INGREDIENT_SYNONYMS: &[(&str, &[&str])] = &[
    ("1", &["strawberry", "strawberries"]),
    ("2", &["chocolate", "cocoa", "cacao"]),
    ("3", &["salt"]),
    ("4", &["cinnamon"]),
    ("5", &["lime", "limes"]),
    ("6", &["mushroom", "shiitake", "porcini", "fungi"]),
    ("7", &["honey"]),
    ("8", &["potato chips", "chips", "crisps"]),
    ("9", &["basil", "pesto"]),
    ("10", &["bacon", "pancetta"]),
];

/// Multi-word names matched on their own, independent of the single-word synonyms.
const COMPOUND_PHRASES: &[(&str, &[&str])] = &[
    ("2", &["dark chocolate", "bitter chocolate"]),
    ("3", &["sea salt", "flaky salt"]),
];

fn alternation(words: &[&str]) -> Option<Regex> {
    let escaped: Vec<String> = words.iter().map(|word| regex::escape(word)).collect();
    Regex::new(&format!("(?i)(?:{})", escaped.join("|"))).ok()
}

pub static MOOD_PATTERNS: LazyLock<Vec<(MoodCategory, Option<Regex>)>> = LazyLock::new(|| {
    MOOD_KEYWORDS
        .iter()
        .map(|(mood, words)| (*mood, alternation(words)))
        .collect()
});

pub static INGREDIENT_PATTERNS: LazyLock<Vec<(&'static str, Option<Regex>)>> =
    LazyLock::new(|| {
        INGREDIENT_SYNONYMS
            .iter()
            .chain(COMPOUND_PHRASES)
            .map(|(id, words)| (*id, alternation(words)))
            .collect()
    });

/// Non-overlapping matches of `pattern` in `text`.
pub fn keyword_hits(pattern: Option<&Regex>, text: &str) -> usize {
    pattern.map_or(0, |pattern| pattern.find_iter(text).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_compiles() {
        assert!(MOOD_PATTERNS.iter().all(|(_, pattern)| pattern.is_some()));
        assert!(INGREDIENT_PATTERNS.iter().all(|(_, pattern)| pattern.is_some()));
    }

    #[test]
    fn test_every_mood_has_keywords() {
        for mood in MoodCategory::ALL {
            assert!(MOOD_PATTERNS.iter().any(|(m, _)| m == mood));
        }
    }

    #[test]
    fn test_hits_count_every_occurrence_case_insensitively() {
        let (_, cozy) = &MOOD_PATTERNS[0];
        assert_eq!(keyword_hits(cozy.as_ref(), "Warm, WARM and so cozy"), 3);
        assert_eq!(keyword_hits(None, "warm"), 0);
    }
}
