use tracing::instrument;

use crate::domain::{
    challenge::ports::RandomSource,
    common::services::Service,
    experience::ports::ExperienceRepository,
    ingredient::{entities::MoodCategory, ports::IngredientRepository},
    speech::{
        entities::ParsedSpeech,
        lexicon::{CONTEXT_BONUSES, INGREDIENT_PATTERNS, KEYWORD_WEIGHT, MOOD_PATTERNS, keyword_hits},
        ports::SpeechService,
    },
};

/// Scores every mood against `text` and keeps the single best one if it clears `threshold`.
fn detect_mood(text: &str, threshold: f32) -> Option<MoodCategory> {
    let lowered = text.to_lowercase();

    let scores: Vec<(MoodCategory, f32)> = MOOD_PATTERNS
        .iter()
        .map(|(mood, pattern)| {
            let keywords = keyword_hits(pattern.as_ref(), text) as f32 * KEYWORD_WEIGHT;
            let context: f32 = CONTEXT_BONUSES
                .iter()
                .filter(|(phrases, target, _)| {
                    target == mood && phrases.iter().all(|phrase| lowered.contains(phrase))
                })
                .map(|(_, _, bonus)| bonus)
                .sum();
            (*mood, keywords + context)
        })
        .collect();

    let best = scores
        .iter()
        .map(|(_, score)| *score)
        .fold(0.0_f32, f32::max);
    if best < threshold {
        return None;
    }

    let mut leaders = scores.iter().filter(|(_, score)| *score == best);
    match (leaders.next(), leaders.next()) {
        (Some((mood, _)), None) => Some(*mood),
        _ => None,
    }
}

fn detect_ingredient_ids(text: &str) -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = Vec::new();
    for (id, pattern) in INGREDIENT_PATTERNS.iter() {
        if keyword_hits(pattern.as_ref(), text) > 0 && !ids.contains(id) {
            ids.push(*id);
        }
    }
    ids
}

impl<I, E, R> SpeechService for Service<I, E, R>
where
    I: IngredientRepository,
    E: ExperienceRepository,
    R: RandomSource,
{
    #[instrument(skip(self, text), fields(length = text.len()))]
    fn parse_speech(&self, text: &str) -> ParsedSpeech {
        let mood = detect_mood(text, self.config.speech.mood_threshold);
        let detected = detect_ingredient_ids(text);

        // catalog order, and only ids the catalog knows
        let ingredients: Vec<String> = self
            .ingredient_repository
            .get_all()
            .into_iter()
            .filter(|ingredient| detected.iter().any(|id| *id == ingredient.id))
            .map(|ingredient| ingredient.id)
            .collect();

        tracing::debug!(
            mood = mood.map(|m| m.as_str()),
            ingredients = ingredients.len(),
            "Parsed journal text"
        );

        ParsedSpeech {
            mood,
            ingredients,
            notes: text.to_string(),
        }
    }

    #[instrument(skip(self, previous, next))]
    fn merge_speech(&self, mut previous: ParsedSpeech, next: &str) -> ParsedSpeech {
        // earlier fragments may come from a client, keep only ids the catalog knows
        previous
            .ingredients
            .retain(|id| self.ingredient_repository.get_by_id(id).is_some());

        previous.merge(self.parse_speech(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{
        FlavorscopeConfig, SpeechConfig,
        services::Service,
        test_support::{TEST_SEED, catalog_service},
    };
    use crate::infrastructure::{
        experience::StaticExperienceRepository, ingredient::StaticIngredientRepository,
        random::SeededRandomSource,
    };

    #[test]
    fn test_synonyms_collapse_to_one_id() {
        let parsed = catalog_service().parse_speech("strawberry and strawberries together");
        assert_eq!(parsed.ingredients, vec!["1"]);
    }

    #[test]
    fn test_no_keywords_means_no_mood() {
        let parsed = catalog_service().parse_speech("I ate some food");
        assert_eq!(parsed.mood, None);
        assert!(parsed.ingredients.is_empty());
        assert_eq!(parsed.notes, "I ate some food");
    }

    #[test]
    fn test_notes_are_verbatim() {
        let text = "  Bacon, BACON!\n\tand Honey  ";
        let parsed = catalog_service().parse_speech(text);
        assert_eq!(parsed.notes, text);
        assert_eq!(parsed.ingredients, vec!["7", "10"]);
    }

    #[test]
    fn test_keyword_mood_detection() {
        let service = catalog_service();
        assert_eq!(
            service.parse_speech("Such a cozy, warm evening").mood,
            Some(MoodCategory::Cozy)
        );
        assert_eq!(
            service.parse_speech("Gentle and SOOTHING tea").mood,
            Some(MoodCategory::Calming)
        );
    }

    #[test]
    fn test_context_cues_lift_a_mood() {
        let service = catalog_service();
        assert_eq!(
            service.parse_speech("lime soda on a hot day").mood,
            Some(MoodCategory::Refreshing)
        );
        assert_eq!(
            service.parse_speech("soup in the winter").mood,
            Some(MoodCategory::Cozy)
        );
        assert_eq!(
            service.parse_speech("a special dinner").mood,
            Some(MoodCategory::Romantic)
        );
        // one half of a paired cue is not enough
        assert_eq!(service.parse_speech("dinner was fine").mood, None);
    }

    #[test]
    fn test_tied_moods_yield_none() {
        let parsed = catalog_service().parse_speech("bold yet gentle");
        assert_eq!(parsed.mood, None);
    }

    #[test]
    fn test_compound_phrases_resolve() {
        let service = catalog_service();
        assert_eq!(
            service.parse_speech("Flaky Salt over bitter chocolate").ingredients,
            vec!["2", "3"]
        );
        assert_eq!(
            service.parse_speech("crisps with pesto and porcini").ingredients,
            vec!["6", "8", "9"]
        );
    }

    #[test]
    fn test_threshold_is_configurable() {
        let strict = Service::new(
            StaticIngredientRepository::new(),
            StaticExperienceRepository::new(),
            SeededRandomSource::seeded(TEST_SEED),
            FlavorscopeConfig {
                speech: SpeechConfig {
                    mood_threshold: 2.0,
                },
                ..Default::default()
            },
        );
        assert_eq!(strict.parse_speech("a summer treat").mood, None);
        assert_eq!(
            catalog_service().parse_speech("a summer treat").mood,
            Some(MoodCategory::Refreshing)
        );
    }

    #[test]
    fn test_merge_speech_accumulates() {
        let service = catalog_service();
        let first = service.parse_speech("warm cinnamon toast");
        let merged = service.merge_speech(first, "with honey and cinnamon");
        assert_eq!(merged.mood, Some(MoodCategory::Cozy));
        assert_eq!(merged.ingredients, vec!["4", "7"]);
        assert_eq!(merged.notes, "warm cinnamon toast with honey and cinnamon");
    }

    #[test]
    fn test_merge_speech_drops_unknown_previous_ids() {
        let previous = ParsedSpeech {
            mood: None,
            ingredients: vec!["ghost".to_string(), "4".to_string()],
            notes: "leftovers".to_string(),
        };

        let merged = catalog_service().merge_speech(previous, "honey");
        assert_eq!(merged.ingredients, vec!["4", "7"]);
        assert_eq!(merged.notes, "leftovers honey");
    }
}
