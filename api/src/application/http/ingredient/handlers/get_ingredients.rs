use std::str::FromStr;

use axum::extract::{Query, State};
use flavorscope_core::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{entities::Ingredient, ports::IngredientService, value_objects::IngredientFilter},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetIngredientsQuery {
    /// Comma-separated taste categories, any of which may match.
    pub taste: Option<String>,
    /// Comma-separated smell categories.
    pub smell: Option<String>,
    /// Comma-separated texture categories.
    pub texture: Option<String>,
    /// Case-insensitive text matched against name and description.
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientsResponse {
    pub data: Vec<Ingredient>,
}

/// Splits a comma list into categories. Blank items are ignored.
pub(crate) fn parse_list<T>(raw: Option<&str>) -> Result<Vec<T>, CoreError>
where
    T: FromStr<Err = CoreError>,
{
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(T::from_str)
        .collect()
}

impl TryFrom<GetIngredientsQuery> for IngredientFilter {
    type Error = CoreError;

    fn try_from(query: GetIngredientsQuery) -> Result<Self, Self::Error> {
        Ok(IngredientFilter {
            taste: parse_list(query.taste.as_deref())?,
            smell: parse_list(query.smell.as_deref())?,
            texture: parse_list(query.texture.as_deref())?,
            search: query.search.filter(|search| !search.trim().is_empty()),
        })
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "ingredient",
    summary = "List ingredients",
    description = "Returns the catalog in declaration order, optionally narrowed by sensory filters and a text search.",
    params(GetIngredientsQuery),
    responses(
        (status = 200, body = GetIngredientsResponse),
        (status = 400, description = "Unknown category value")
    )
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
    Query(query): Query<GetIngredientsQuery>,
) -> Result<Response<GetIngredientsResponse>, ApiError> {
    let filter = IngredientFilter::try_from(query).map_err(ApiError::from)?;
    let ingredients = state.service.list_ingredients(filter);

    Ok(Response::OK(GetIngredientsResponse { data: ingredients }))
}
