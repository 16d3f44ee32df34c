use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::builder::HttpRecipeApiBuilder;
use crate::model::{
    AskRequest, AskResponse, CookOutcome, CookRequest, CookResponse, RecipeListResponse,
    RecipeSummary,
};
use crate::GuideError;

/// The three calls the guide makes against the recipe service
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Where requests go, for diagnostics
    fn service_name(&self) -> &str;

    /// `GET /api/recipes`
    async fn list_recipes(&self) -> Result<Vec<RecipeSummary>, GuideError>;

    /// `POST /api/cook`
    async fn cook(&self, recipe_name: &str) -> Result<CookOutcome, GuideError>;

    /// `POST /api/ask`, returning the answer text
    async fn ask(
        &self,
        question: &str,
        current_recipe: Option<&str>,
    ) -> Result<String, GuideError>;
}

/// `RecipeApi` over HTTP with reqwest
#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
}

impl HttpRecipeApi {
    pub fn builder() -> HttpRecipeApiBuilder {
        HttpRecipeApiBuilder::default()
    }

    pub(crate) fn from_parts(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode a JSON body, keeping the raw text for the error.
///
/// The cook endpoint reports "not found" with `success: false`, sometimes under a 404,
/// so a decodable body wins over the status code.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GuideError> {
    let status = response.status();
    let body = response.text().await?;
    debug!("{} {}", status, body);

    serde_json::from_str(&body).map_err(|source| {
        debug!("Response did not decode: {}", source);
        if status.is_success() {
            GuideError::DecodeError {
                status: status.as_u16(),
                source,
                body,
            }
        } else {
            GuideError::ApiError {
                status: status.as_u16(),
                body,
            }
        }
    })
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    fn service_name(&self) -> &str {
        &self.base_url
    }

    async fn list_recipes(&self) -> Result<Vec<RecipeSummary>, GuideError> {
        let url = self.endpoint("/api/recipes");
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let list: RecipeListResponse = decode(response).await?;
        Ok(list.into_summaries())
    }

    async fn cook(&self, recipe_name: &str) -> Result<CookOutcome, GuideError> {
        let url = self.endpoint("/api/cook");
        debug!("POST {} recipe_name={:?}", url, recipe_name);

        let response = self
            .client
            .post(url)
            .json(&CookRequest { recipe_name })
            .send()
            .await?;
        let cooked: CookResponse = decode(response).await?;
        Ok(cooked.into())
    }

    async fn ask(
        &self,
        question: &str,
        current_recipe: Option<&str>,
    ) -> Result<String, GuideError> {
        let url = self.endpoint("/api/ask");
        debug!("POST {} current_recipe={:?}", url, current_recipe);

        let response = self
            .client
            .post(url)
            .json(&AskRequest {
                question,
                current_recipe,
            })
            .send()
            .await?;
        let answer: AskResponse = decode(response).await?;
        Ok(answer.answer)
    }
}
