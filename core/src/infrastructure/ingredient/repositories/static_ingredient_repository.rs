use std::sync::LazyLock;

use crate::domain::ingredient::{
    entities::{
        Ingredient, MoodCategory as M, SmellCategory as Sm, SoundCategory as So,
        TasteCategory as T, TextureCategory as Tx, VisualCategory as V,
    },
    ports::IngredientRepository,
};

static CATALOG: LazyLock<Vec<Ingredient>> = LazyLock::new(|| {
    vec![
        Entry {
            id: "1",
            name: "Strawberry",
            description: "Sweet and slightly tart with a juicy texture",
            image: "/strawberry.jpg",
            taste: &[T::Sweet, T::Sour],
            smell: &[Sm::Fruity, Sm::Floral],
            texture: &[Tx::Smooth, Tx::Tender],
            sound: &[So::Silent],
            visual: &[V::Vibrant, V::Colorful],
            moods: &[M::Romantic, M::Refreshing, M::Energizing],
        },
        Entry {
            id: "2",
            name: "Dark Chocolate",
            description: "Intensely rich with bitter notes and hints of sweetness",
            image: "/chocolate.jpg",
            taste: &[T::Bitter, T::Sweet],
            smell: &[Sm::Earthy, Sm::Woody],
            texture: &[Tx::Smooth, Tx::Creamy],
            sound: &[So::Snappy],
            visual: &[V::Monochromatic, V::Glossy],
            moods: &[M::Cozy, M::Romantic],
        },
        Entry {
            id: "3",
            name: "Sea Salt",
            description: "Pure briny taste with mineral complexity",
            image: "/salt.jpg",
            taste: &[T::Salty],
            smell: &[],
            texture: &[Tx::Crispy],
            sound: &[So::Crunchy],
            visual: &[V::Monochromatic, V::Matte],
            moods: &[M::Adventurous],
        },
        Entry {
            id: "4",
            name: "Cinnamon",
            description: "Warm spice with sweet and woody notes",
            image: "/cinnamon.jpg",
            taste: &[T::Sweet, T::Bitter],
            smell: &[Sm::Spicy, Sm::Woody],
            texture: &[],
            sound: &[],
            visual: &[V::Monochromatic],
            moods: &[M::Cozy, M::Energizing],
        },
        Entry {
            id: "5",
            name: "Lime",
            description: "Bright citrus with intense sourness and aromatic oils",
            image: "/lime.jpg",
            taste: &[T::Sour],
            smell: &[Sm::Fruity, Sm::Herbal],
            texture: &[Tx::Juicy],
            sound: &[],
            visual: &[V::Vibrant, V::Colorful],
            moods: &[M::Refreshing, M::Energizing, M::Adventurous],
        },
        Entry {
            id: "6",
            name: "Mushroom",
            description: "Earthy with deep savory notes",
            image: "/mushroom.jpg",
            taste: &[T::Umami],
            smell: &[Sm::Earthy],
            texture: &[Tx::Tender, Tx::Chewy],
            sound: &[],
            visual: &[V::Monochromatic],
            moods: &[M::Cozy, M::Adventurous],
        },
        Entry {
            id: "7",
            name: "Honey",
            description: "Floral sweetness with complex aromatics",
            image: "/honey.jpg",
            taste: &[T::Sweet],
            smell: &[Sm::Floral, Sm::Fruity],
            texture: &[Tx::Smooth],
            sound: &[],
            visual: &[V::Glossy, V::Vibrant],
            moods: &[M::Calming, M::Cozy, M::Romantic],
        },
        Entry {
            id: "8",
            name: "Potato Chips",
            description: "Salty with a satisfying crunch",
            image: "/chips.jpg",
            taste: &[T::Salty],
            smell: &[Sm::Earthy],
            texture: &[Tx::Crispy, Tx::Crunchy],
            sound: &[So::Crunchy, So::Snappy],
            visual: &[V::Patterned, V::Colorful],
            moods: &[M::Energizing],
        },
        Entry {
            id: "9",
            name: "Basil",
            description: "Aromatic herb with sweet and peppery notes",
            image: "/basil.jpg",
            taste: &[T::Bitter],
            smell: &[Sm::Herbal, Sm::Spicy],
            texture: &[],
            sound: &[],
            visual: &[V::Vibrant],
            moods: &[M::Refreshing, M::Energizing],
        },
        Entry {
            id: "10",
            name: "Bacon",
            description: "Savory, smoky and salty with a rich aroma",
            image: "/bacon.jpg",
            taste: &[T::Salty, T::Umami],
            smell: &[Sm::Smoky, Sm::Woody],
            texture: &[Tx::Crispy, Tx::Chewy],
            sound: &[So::Crunchy, So::Sizzling],
            visual: &[V::Patterned],
            moods: &[M::Cozy, M::Adventurous],
        },
    ]
    .into_iter()
    .map(Ingredient::from)
    .collect()
});

struct Entry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    image: &'static str,
    taste: &'static [T],
    smell: &'static [Sm],
    texture: &'static [Tx],
    sound: &'static [So],
    visual: &'static [V],
    moods: &'static [M],
}

impl From<Entry> for Ingredient {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            image: entry.image.to_string(),
            taste: entry.taste.to_vec(),
            smell: entry.smell.to_vec(),
            texture: entry.texture.to_vec(),
            sound: entry.sound.to_vec(),
            visual: entry.visual.to_vec(),
            moods: entry.moods.to_vec(),
        }
    }
}

/// The built-in catalog, fixed at startup and shared read-only.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticIngredientRepository;

impl StaticIngredientRepository {
    pub fn new() -> Self {
        Self
    }

    fn catalog(&self) -> &'static [Ingredient] {
        CATALOG.as_slice()
    }
}

impl IngredientRepository for StaticIngredientRepository {
    fn get_all(&self) -> Vec<Ingredient> {
        self.catalog().to_vec()
    }

    fn get_by_id(&self, id: &str) -> Option<Ingredient> {
        self.catalog()
            .iter()
            .find(|ingredient| ingredient.id == id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::hash::Hash;

    use super::*;

    fn assert_unique<T: Eq + Hash + std::fmt::Debug>(values: &[T], context: &str) {
        let set: HashSet<&T> = values.iter().collect();
        assert_eq!(set.len(), values.len(), "duplicate in {context}: {values:?}");
    }

    #[test]
    fn test_ids_are_unique() {
        let repository = StaticIngredientRepository::new();
        let ids: Vec<&str> = repository.catalog().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
        assert_unique(&ids, "ids");
    }

    #[test]
    fn test_attribute_lists_have_no_duplicates() {
        for ingredient in StaticIngredientRepository::new().catalog() {
            assert_unique(&ingredient.taste, &ingredient.name);
            assert_unique(&ingredient.smell, &ingredient.name);
            assert_unique(&ingredient.texture, &ingredient.name);
            assert_unique(&ingredient.sound, &ingredient.name);
            assert_unique(&ingredient.visual, &ingredient.name);
            assert_unique(&ingredient.moods, &ingredient.name);
        }
    }

    #[test]
    fn test_get_by_id_is_exact() {
        let repository = StaticIngredientRepository::new();
        assert_eq!(repository.get_by_id("10").unwrap().name, "Bacon");
        assert!(repository.get_by_id("1 ").is_none());
        assert!(repository.get_by_id("unknown").is_none());
    }

    #[test]
    fn test_get_all_is_restartable() {
        let repository = StaticIngredientRepository::new();
        assert_eq!(repository.get_all(), repository.get_all());
        assert!(repository.get_by_id("3").unwrap().smell.is_empty());
    }
}
