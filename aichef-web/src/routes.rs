//! Route paths and the recipe carried between pages as navigation state.

use leptos::prelude::GetUntracked;
use leptos_router::hooks::use_location;
use leptos_router::location::State;
use leptos_router::NavigateOptions;
use wasm_bindgen::JsValue;

use crate::error::ViewError;
use crate::models::Recipe;

pub const HOME: &str = "/";
pub const FAVORITES: &str = "/favorites";

pub fn results_path(query: &str) -> String {
    format!("/results?q={}", urlencoding::encode(query))
}

pub fn recipe_path(recipe_id: &str) -> String {
    format!("/recipe/{}", urlencoding::encode(recipe_id))
}

pub fn encode_recipe_state(recipe: &Recipe) -> Option<String> {
    serde_json::to_string(recipe).ok()
}

/// `None` when no state was carried (e.g. a direct page load).
pub fn decode_recipe_state(raw: Option<String>) -> Result<Option<Recipe>, ViewError> {
    match raw {
        None => Ok(None),
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| ViewError::CorruptState(e.to_string())),
    }
}

/// Navigation options that hand `recipe` to the detail page.
pub fn with_recipe(recipe: &Recipe) -> NavigateOptions {
    let state = encode_recipe_state(recipe).map(|json| JsValue::from_str(&json));
    NavigateOptions {
        state: State::new(state),
        ..Default::default()
    }
}

/// The recipe passed along with the current navigation, if any.
pub fn recipe_from_location() -> Result<Option<Recipe>, ViewError> {
    let state = use_location().state.get_untracked();
    decode_recipe_state(state.to_js_value().as_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_recipe;

    #[test]
    fn test_results_path_encodes_query() {
        assert_eq!(results_path("egg & tomato"), "/results?q=egg%20%26%20tomato");
        assert_eq!(results_path("海鲜"), "/results?q=%E6%B5%B7%E9%B2%9C");
    }

    #[test]
    fn test_recipe_path() {
        assert_eq!(recipe_path("r1"), "/recipe/r1");
    }

    #[test]
    fn test_missing_state_is_not_an_error() {
        assert_eq!(decode_recipe_state(None), Ok(None));
    }

    #[test]
    fn test_state_round_trip() {
        let recipe = sample_recipe("r1");
        let decoded = decode_recipe_state(encode_recipe_state(&recipe)).unwrap();
        assert_eq!(decoded, Some(recipe));
    }

    #[test]
    fn test_foreign_state_is_corrupt() {
        let result = decode_recipe_state(Some(r#"{"scroll":10}"#.to_string()));
        assert!(matches!(result, Err(ViewError::CorruptState(_))));
    }
}
