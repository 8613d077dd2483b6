use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ingredient::entities::MoodCategory;

/// A journal entry: something someone tasted, where, and how it felt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FlavorExperience {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ingredient ids.
    pub ingredients: Vec<String>,
    pub mood: MoodCategory,
    pub tags: Vec<String>,
    pub location: Option<String>,
    pub date: DateTime<Utc>,
    /// 1 to 5 stars.
    pub rating: Option<u8>,
}

impl FlavorExperience {
    pub fn uses_ingredient(&self, ingredient_id: &str) -> bool {
        self.ingredients.iter().any(|id| id == ingredient_id)
    }

    pub fn shared_ingredients(&self, other: &FlavorExperience) -> usize {
        self.ingredients
            .iter()
            .filter(|id| other.uses_ingredient(id))
            .count()
    }
}

/// Dish ideas offered for each mood.
pub fn dishes_for_mood(mood: MoodCategory) -> &'static [&'static str] {
    match mood {
        MoodCategory::Cozy => &[
            "Cinnamon Apple Oatmeal",
            "Honey Chamomile Tea with Toast",
            "Mushroom Risotto",
            "Chicken Noodle Soup",
        ],
        MoodCategory::Adventurous => &[
            "Spicy Mango Tacos",
            "Sichuan Hot Pot",
            "Curry Laksa Noodles",
            "Fermented Kimchi Bowl",
        ],
        MoodCategory::Refreshing => &[
            "Cucumber Mint Gazpacho",
            "Citrus Green Salad",
            "Watermelon Feta Bites",
            "Lemongrass Sorbet",
        ],
        MoodCategory::Romantic => &[
            "Chocolate Covered Strawberries",
            "Red Wine Poached Pears",
            "Truffle Pasta",
            "Rose Macarons",
        ],
        MoodCategory::Energizing => &[
            "Citrus Smoothie Bowl",
            "Ginger Turmeric Shot",
            "Berry Acai Bowl",
            "Avocado Toast with Chili Flakes",
        ],
        MoodCategory::Calming => &[
            "Lavender Shortbread",
            "Warm Milk with Honey",
            "Chamomile Poached Fruits",
            "Vanilla Bean Rice Pudding",
        ],
    }
}
