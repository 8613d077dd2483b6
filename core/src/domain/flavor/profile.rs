use std::fmt::Display;

use crate::domain::{
    common::push_unique,
    flavor::{entities::FlavorProfile, scoring::resolve_selection},
    ingredient::entities::Ingredient,
};

/// Shown when the selection resolves to no known ingredient.
pub const EMPTY_PROFILE_PLACEHOLDER: &str = "Select ingredients to create your flavor profile...";

/// Collects the attribute unions of a selection.
///
/// The catalog is walked in declaration order, so the result does not depend
/// on the order of `selected_ids`.
pub fn collect_profile(catalog: &[Ingredient], selected_ids: &[String]) -> FlavorProfile {
    profile_of(&resolve_selection(catalog, selected_ids))
}

/// Attribute unions of an already resolved selection.
pub(crate) fn profile_of(selected: &[&Ingredient]) -> FlavorProfile {
    selected
        .iter()
        .fold(FlavorProfile::default(), |mut profile, ingredient| {
            ingredient.taste.iter().for_each(|v| push_unique(&mut profile.taste, *v));
            ingredient.smell.iter().for_each(|v| push_unique(&mut profile.smell, *v));
            ingredient.texture.iter().for_each(|v| push_unique(&mut profile.texture, *v));
            ingredient.sound.iter().for_each(|v| push_unique(&mut profile.sound, *v));
            ingredient.visual.iter().for_each(|v| push_unique(&mut profile.visual, *v));
            ingredient.moods.iter().for_each(|v| push_unique(&mut profile.moods, *v));
            profile
        })
}

fn join<T: Display>(values: &[T], separator: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Renders a profile as sentences. Empty categories drop their clause.
pub fn render_profile(profile: &FlavorProfile) -> String {
    let mut sentences = Vec::with_capacity(4);

    let mut opening = if profile.taste.is_empty() {
        "A flavor profile".to_string()
    } else {
        format!("A {} flavor profile", join(&profile.taste, ", "))
    };
    if !profile.smell.is_empty() {
        opening.push_str(&format!(" with {} aromas", join(&profile.smell, " and ")));
    }
    sentences.push(format!("{opening}."));

    let textures = join(&profile.texture, " and ");
    let sounds = join(&profile.sound, ", ");
    match (textures.is_empty(), sounds.is_empty()) {
        (false, false) => sentences.push(format!(
            "The texture is {textures} creating a {sounds} sensory experience."
        )),
        (false, true) => sentences.push(format!("The texture is {textures}.")),
        (true, false) => sentences.push(format!("A {sounds} sensory experience.")),
        (true, true) => {}
    }

    if !profile.visual.is_empty() {
        sentences.push(format!("Visually {}.", join(&profile.visual, " and ")));
    }
    if !profile.moods.is_empty() {
        sentences.push(format!("Perfect for {} moments.", join(&profile.moods, ", ")));
    }

    sentences.join(" ")
}

pub fn describe_profile(catalog: &[Ingredient], selected_ids: &[String]) -> String {
    let selected = resolve_selection(catalog, selected_ids);
    if selected.is_empty() {
        return EMPTY_PROFILE_PLACEHOLDER.to_string();
    }

    render_profile(&profile_of(&selected))
}
