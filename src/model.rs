use serde::{Deserialize, Deserializer, Serialize};

/// A recipe loaded for cooking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub localized_name: Option<String>,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The English name when the service provides one, otherwise the plain name.
    pub fn display_name(&self) -> &str {
        localized_or(self.localized_name.as_deref(), &self.name)
    }
}

fn localized_or<'a>(localized: Option<&'a str>, name: &'a str) -> &'a str {
    match localized {
        Some(localized) if !localized.is_empty() => localized,
        _ => name,
    }
}

/// Servers send `null` for text they don't have.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of the recipe list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub name: String,
    #[serde(rename = "name_en", default, skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

impl RecipeSummary {
    /// The English name when the service provides one, otherwise the plain name.
    pub fn display_name(&self) -> &str {
        localized_or(self.localized_name.as_deref(), &self.name)
    }
}

/// Body of `GET /api/recipes`.
///
/// Older servers answer with a bare array of names, so both shapes decode.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RecipeListResponse {
    Wrapped { recipes: Vec<RecipeSummary> },
    Names(Vec<String>),
}

impl RecipeListResponse {
    pub(crate) fn into_summaries(self) -> Vec<RecipeSummary> {
        match self {
            RecipeListResponse::Wrapped { recipes } => recipes,
            RecipeListResponse::Names(names) => names
                .into_iter()
                .map(|name| RecipeSummary {
                    name,
                    ..Default::default()
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CookRequest<'a> {
    pub recipe_name: &'a str,
}

/// Body of `POST /api/cook`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CookResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub recipe_name: String,
    #[serde(default)]
    pub recipe_name_en: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// What the cook endpoint decided about a requested recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookOutcome {
    Found(Recipe),
    /// The service reported `success: false`; carries its message.
    Rejected(String),
}

impl From<CookResponse> for CookOutcome {
    fn from(response: CookResponse) -> Self {
        if !response.success {
            return CookOutcome::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Recipe not found".to_string()),
            );
        }

        CookOutcome::Found(Recipe {
            name: response.recipe_name,
            localized_name: response.recipe_name_en,
            description: response.description,
            ingredients: response.ingredients,
            steps: response.steps,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AskRequest<'a> {
    pub question: &'a str,
    pub current_recipe: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AskResponse {
    #[serde(default)]
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_english() {
        let summary = RecipeSummary {
            name: "Luwombo".to_string(),
            localized_name: Some("Steamed chicken stew".to_string()),
            description: String::new(),
        };
        assert_eq!(summary.display_name(), "Steamed chicken stew");

        let summary = RecipeSummary {
            localized_name: Some(String::new()),
            ..summary
        };
        assert_eq!(summary.display_name(), "Luwombo");
    }

    #[test]
    fn test_recipe_list_wrapped_shape() {
        let body = r#"{"recipes": [
            {"name": "Rolex", "name_en": "Rolled eggs", "description": "Chapati with omelette"},
            {"name": "Matooke"}
        ]}"#;
        let list: RecipeListResponse = serde_json::from_str(body).unwrap();
        let recipes = list.into_summaries();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].localized_name.as_deref(), Some("Rolled eggs"));
        assert_eq!(recipes[1].description, "");
    }

    #[test]
    fn test_null_description_decodes_as_empty() {
        let body = r#"{"recipes": [{"name": "Katogo", "description": null}]}"#;
        let list: RecipeListResponse = serde_json::from_str(body).unwrap();
        let recipes = list.into_summaries();

        assert_eq!(recipes[0].name, "Katogo");
        assert_eq!(recipes[0].description, "");

        let response: CookResponse = serde_json::from_str(
            r#"{"success": true, "recipe_name": "Katogo", "description": null}"#,
        )
        .unwrap();
        assert_eq!(response.description, "");
    }

    #[test]
    fn test_recipe_display_name() {
        let recipe = Recipe {
            name: "Ebinyebwa".to_string(),
            localized_name: Some("Groundnut sauce".to_string()),
            ..Default::default()
        };
        assert_eq!(recipe.display_name(), "Groundnut sauce");
        assert_eq!(Recipe::default().display_name(), "");
    }

    #[test]
    fn test_recipe_list_bare_names() {
        let list: RecipeListResponse = serde_json::from_str(r#"["Posho", "Beans"]"#).unwrap();
        let recipes = list.into_summaries();

        assert_eq!(recipes[0].name, "Posho");
        assert!(recipes[1].localized_name.is_none());
    }

    #[test]
    fn test_cook_response_failure_keeps_message() {
        let response: CookResponse =
            serde_json::from_str(r#"{"success": false, "message": "No such dish"}"#).unwrap();
        assert_eq!(
            CookOutcome::from(response),
            CookOutcome::Rejected("No such dish".to_string())
        );
    }

    #[test]
    fn test_cook_response_failure_without_message() {
        let response: CookResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(
            CookOutcome::from(response),
            CookOutcome::Rejected("Recipe not found".to_string())
        );
    }

    #[test]
    fn test_cook_response_success() {
        let body = r#"{
            "success": true,
            "recipe_name": "Pasta",
            "ingredients": ["pasta", "water"],
            "steps": ["Boil water", "Add pasta"]
        }"#;
        let response: CookResponse = serde_json::from_str(body).unwrap();

        match CookOutcome::from(response) {
            CookOutcome::Found(recipe) => {
                assert_eq!(recipe.name, "Pasta");
                assert_eq!(recipe.step_count(), 2);
                assert_eq!(recipe.ingredients, vec!["pasta", "water"]);
            }
            CookOutcome::Rejected(message) => panic!("unexpected rejection: {}", message),
        }
    }

    #[test]
    fn test_ask_request_serializes_null_context() {
        let request = AskRequest {
            question: "How long to boil?",
            current_recipe: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["current_recipe"].is_null());
    }
}
