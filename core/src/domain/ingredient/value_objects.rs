use crate::domain::ingredient::entities::{
    Ingredient, SmellCategory, TasteCategory, TextureCategory,
};

/// Catalog browsing filter.
///
/// Within one axis an ingredient matches when it carries any of the listed
/// values; axes that are set must all match. `search` is a case-insensitive
/// substring test on name and description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientFilter {
    pub taste: Vec<TasteCategory>,
    pub smell: Vec<SmellCategory>,
    pub texture: Vec<TextureCategory>,
    pub search: Option<String>,
}

impl IngredientFilter {
    pub fn is_empty(&self) -> bool {
        self.taste.is_empty()
            && self.smell.is_empty()
            && self.texture.is_empty()
            && self.search.as_deref().is_none_or(|s| s.trim().is_empty())
    }

    pub fn matches(&self, ingredient: &Ingredient) -> bool {
        if !self.taste.is_empty() && !self.taste.iter().any(|t| ingredient.has_taste(*t)) {
            return false;
        }
        if !self.smell.is_empty() && !self.smell.iter().any(|s| ingredient.has_smell(*s)) {
            return false;
        }
        if !self.texture.is_empty() && !self.texture.iter().any(|t| ingredient.has_texture(*t)) {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                ingredient.name.to_lowercase().contains(&term)
                    || ingredient.description.to_lowercase().contains(&term)
            }
            _ => true,
        }
    }
}
