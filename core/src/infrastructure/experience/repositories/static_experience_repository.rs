use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{
    experience::{entities::FlavorExperience, ports::ExperienceRepository},
    ingredient::entities::MoodCategory,
};

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

static JOURNAL: LazyLock<Vec<FlavorExperience>> = LazyLock::new(|| {
    vec![
        FlavorExperience {
            id: "1".to_string(),
            title: "Summer Strawberry Sensation".to_string(),
            description: "Sweet strawberries with dark chocolate created a perfect balance of \
                          flavors that reminded me of childhood summers."
                .to_string(),
            ingredients: owned(&["1", "2"]),
            mood: MoodCategory::Romantic,
            tags: owned(&["dessert", "summer", "sweet"]),
            location: Some("Home".to_string()),
            date: utc(2025, 4, 20, 14, 0),
            rating: Some(5),
        },
        FlavorExperience {
            id: "2".to_string(),
            title: "Cozy Cinnamon Morning".to_string(),
            description: "The warm aroma of cinnamon and honey in my morning toast created a \
                          comforting atmosphere perfect for the rainy day."
                .to_string(),
            ingredients: owned(&["4", "7"]),
            mood: MoodCategory::Cozy,
            tags: owned(&["breakfast", "rainy day", "warm"]),
            location: Some("Home".to_string()),
            date: utc(2025, 4, 15, 8, 30),
            rating: Some(4),
        },
        FlavorExperience {
            id: "3".to_string(),
            title: "Energizing Citrus Explosion".to_string(),
            description: "The lime and basil combination created a refreshing and invigorating \
                          sensory experience that woke up my senses."
                .to_string(),
            ingredients: owned(&["5", "9"]),
            mood: MoodCategory::Energizing,
            tags: owned(&["drink", "summer", "refreshing"]),
            location: Some("Garden".to_string()),
            date: utc(2025, 4, 10, 12, 0),
            rating: Some(5),
        },
        FlavorExperience {
            id: "4".to_string(),
            title: "Savory Adventure".to_string(),
            description: "The combination of mushroom and bacon created an umami-rich \
                          experience that was surprisingly complex."
                .to_string(),
            ingredients: owned(&["6", "10"]),
            mood: MoodCategory::Adventurous,
            tags: owned(&["lunch", "savory", "rich"]),
            location: Some("Restaurant".to_string()),
            date: utc(2025, 3, 28, 19, 0),
            rating: Some(4),
        },
        FlavorExperience {
            id: "5".to_string(),
            title: "Refreshing Ocean Breeze".to_string(),
            description: "The subtle saltiness of the sea salt combined with lime created a \
                          sensory memory of beach days."
                .to_string(),
            ingredients: owned(&["3", "5"]),
            mood: MoodCategory::Refreshing,
            tags: owned(&["snack", "vacation", "beach"]),
            location: Some("Beach".to_string()),
            date: utc(2025, 3, 15, 16, 0),
            rating: Some(5),
        },
    ]
});

/// Sample journal, newest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticExperienceRepository;

impl StaticExperienceRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ExperienceRepository for StaticExperienceRepository {
    fn get_all(&self) -> Vec<FlavorExperience> {
        JOURNAL.to_vec()
    }

    fn get_by_id(&self, id: &str) -> Option<FlavorExperience> {
        JOURNAL.iter().find(|experience| experience.id == id).cloned()
    }
}
