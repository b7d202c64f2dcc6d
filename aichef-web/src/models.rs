//! Recipe data as delivered by the search backend.

use serde::{Deserialize, Serialize};

/// One cooking step. `step_index` defines display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeStep {
    pub step_index: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A recipe candidate. Never mutated locally; favorites keep a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub recipe_id: String,
    pub recipe_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
    /// AI consultancy note for this recipe.
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl Recipe {
    /// Steps sorted by `step_index`.
    pub fn ordered_steps(&self) -> Vec<RecipeStep> {
        let mut steps = self.steps.clone();
        steps.sort_by_key(|s| s.step_index);
        steps
    }

    /// Plain-text summary handed to the chef consultant as context.
    pub fn consult_context(&self) -> String {
        let mut context = format!("Recipe: {}", self.recipe_name);
        if !self.tags.is_empty() {
            context.push_str(&format!("\nTags: {}", self.tags.join(", ")));
        }
        for step in self.ordered_steps() {
            context.push_str(&format!("\nStep {}: {}", step.step_index, step.description));
        }
        context
    }
}

/// Response body of `POST /api/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeResponse {
    #[serde(default)]
    pub candidates: Vec<Recipe>,
    #[serde(default)]
    pub ai_message: Option<String>,
}

#[cfg(test)]
pub(crate) fn sample_recipe(id: &str) -> Recipe {
    Recipe {
        recipe_id: id.to_string(),
        recipe_name: format!("Recipe {}", id),
        tags: vec!["quick".to_string(), "spicy".to_string()],
        cover_image: None,
        steps: vec![
            RecipeStep {
                step_index: 2,
                description: "Stir fry".to_string(),
                image_url: None,
            },
            RecipeStep {
                step_index: 1,
                description: "Chop garlic".to_string(),
                image_url: Some("/img/1.png".to_string()),
            },
        ],
        message: "Great with rice.".to_string(),
        match_score: None,
        cooking_time: None,
        difficulty: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_decodes_with_missing_optional_fields() {
        let json = r#"{"recipe_id":"r1","recipe_name":"Mapo Tofu","cover_image":null}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();

        assert_eq!(recipe.recipe_id, "r1");
        assert!(recipe.tags.is_empty());
        assert!(recipe.steps.is_empty());
        assert!(recipe.message.is_empty());
        assert_eq!(recipe.match_score, None);
    }

    #[test]
    fn test_absent_optionals_are_not_encoded() {
        let encoded = serde_json::to_string(&sample_recipe("r1")).unwrap();
        assert!(!encoded.contains("match_score"));
        assert!(!encoded.contains("difficulty"));
    }

    #[test]
    fn test_ordered_steps_sorts_by_index() {
        let steps = sample_recipe("r1").ordered_steps();
        assert_eq!(steps[0].step_index, 1);
        assert_eq!(steps[1].description, "Stir fry");
    }

    #[test]
    fn test_consult_context_lists_steps_in_order() {
        let context = sample_recipe("r1").consult_context();
        assert!(context.starts_with("Recipe: Recipe r1"));
        let chop = context.find("Chop garlic").unwrap();
        let stir = context.find("Stir fry").unwrap();
        assert!(chop < stir);
    }

    #[test]
    fn test_search_response_without_ai_message() {
        let response: RecipeResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(response.candidates.is_empty());
        assert_eq!(response.ai_message, None);
    }
}
