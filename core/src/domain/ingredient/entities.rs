use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Declares a closed sensory vocabulary with its canonical lowercase names.
macro_rules! sensory_category {
    (
        $(#[$meta:meta])*
        $name:ident, $error:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($label => Ok($name::$variant),)+
                    _ => Err(CoreError::$error(s.to_string())),
                }
            }
        }
    };
}

sensory_category!(
    TasteCategory, InvalidCategory {
        Sweet => "sweet",
        Salty => "salty",
        Sour => "sour",
        Bitter => "bitter",
        Umami => "umami",
    }
);

sensory_category!(
    SmellCategory, InvalidCategory {
        Floral => "floral",
        Fruity => "fruity",
        Spicy => "spicy",
        Earthy => "earthy",
        Woody => "woody",
        Herbal => "herbal",
        Smoky => "smoky",
    }
);

sensory_category!(
    TextureCategory, InvalidCategory {
        Crispy => "crispy",
        Crunchy => "crunchy",
        Creamy => "creamy",
        Smooth => "smooth",
        Fizzy => "fizzy",
        Chewy => "chewy",
        Tender => "tender",
        Juicy => "juicy",
    }
);

sensory_category!(
    SoundCategory, InvalidCategory {
        Crunchy => "crunchy",
        Fizzy => "fizzy",
        Snappy => "snappy",
        Sizzling => "sizzling",
        Creamy => "creamy",
        Silent => "silent",
    }
);

sensory_category!(
    VisualCategory, InvalidCategory {
        Vibrant => "vibrant",
        Colorful => "colorful",
        Monochromatic => "monochromatic",
        Patterned => "patterned",
        Glossy => "glossy",
        Matte => "matte",
    }
);

sensory_category!(
    /// Emotional or situational theme an ingredient suits.
    MoodCategory, InvalidMood {
        Cozy => "cozy",
        Adventurous => "adventurous",
        Refreshing => "refreshing",
        Romantic => "romantic",
        Energizing => "energizing",
        Calming => "calming",
    }
);

/// Immutable catalog entry. Attribute lists hold no duplicates and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub taste: Vec<TasteCategory>,
    pub smell: Vec<SmellCategory>,
    pub texture: Vec<TextureCategory>,
    pub sound: Vec<SoundCategory>,
    pub visual: Vec<VisualCategory>,
    pub moods: Vec<MoodCategory>,
}

impl Ingredient {
    pub fn has_taste(&self, taste: TasteCategory) -> bool {
        self.taste.contains(&taste)
    }

    pub fn has_smell(&self, smell: SmellCategory) -> bool {
        self.smell.contains(&smell)
    }

    pub fn has_texture(&self, texture: TextureCategory) -> bool {
        self.texture.contains(&texture)
    }

    pub fn has_mood(&self, mood: MoodCategory) -> bool {
        self.moods.contains(&mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("Sweet".parse::<TasteCategory>(), Ok(TasteCategory::Sweet));
        assert_eq!(" smoky ".parse::<SmellCategory>(), Ok(SmellCategory::Smoky));
        assert_eq!("COZY".parse::<MoodCategory>(), Ok(MoodCategory::Cozy));
    }

    #[test]
    fn test_unknown_values_map_to_their_error() {
        assert_eq!(
            "spicy".parse::<TasteCategory>(),
            Err(CoreError::InvalidCategory("spicy".to_string()))
        );
        assert_eq!(
            "sleepy".parse::<MoodCategory>(),
            Err(CoreError::InvalidMood("sleepy".to_string()))
        );
    }

    #[test]
    fn test_all_lists_every_mood_in_declaration_order() {
        let names: Vec<&str> = MoodCategory::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "cozy",
                "adventurous",
                "refreshing",
                "romantic",
                "energizing",
                "calming"
            ]
        );
    }

    #[test]
    fn test_serializes_as_lowercase_names() {
        let json = serde_json::to_string(&vec![SoundCategory::Sizzling, SoundCategory::Silent])
            .unwrap();
        assert_eq!(json, r#"["sizzling","silent"]"#);

        let texture: TextureCategory = serde_json::from_str(r#""juicy""#).unwrap();
        assert_eq!(texture, TextureCategory::Juicy);
    }
}
