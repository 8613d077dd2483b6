use crate::domain::{experience::entities::FlavorExperience, ingredient::entities::MoodCategory};

/// Journal query. Set fields combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceFilter {
    pub mood: Option<MoodCategory>,
    /// Exact tag, compared lowercased.
    pub tag: Option<String>,
    /// Case-insensitive substring of the location.
    pub location: Option<String>,
}

impl ExperienceFilter {
    pub fn matches(&self, experience: &FlavorExperience) -> bool {
        let mood = self.mood.is_none_or(|mood| experience.mood == mood);

        let tag = self.tag.as_ref().is_none_or(|tag| {
            let tag = tag.to_lowercase();
            experience.tags.iter().any(|t| *t == tag)
        });

        let location = self.location.as_ref().is_none_or(|needle| {
            experience
                .location
                .as_ref()
                .is_some_and(|place| place.to_lowercase().contains(&needle.to_lowercase()))
        });

        mood && tag && location
    }
}
