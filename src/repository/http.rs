//! [`reqwest`]-backed implementation of the repository traits.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::domain::ingredient::{Ingredient, NewIngredient, UpdateIngredient};
use crate::domain::recipe::{NewRecipe, Recipe};
use crate::domain::recommendation::Recommendation;
use crate::domain::types::{IngredientId, RecipeId};
use crate::models::config::ClientConfig;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    IngredientReader, IngredientWriter, RecipeReader, RecipeWriter, RecommendationReader,
};

const INGREDIENT_PATH: &str = "ingredient";
const RECIPE_PATH: &str = "recipe";
const RECOMMENDATION_PATH: &str = "recommendation";

/// Error payload the pantry server sends alongside failures.
#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

/// Client for the pantry REST API rooted at `base_url`.
#[derive(Clone, Debug)]
pub struct HttpRepository {
    client: Client,
    base_url: Url,
}

impl HttpRepository {
    pub fn new(base_url: &str, timeout: Duration) -> RepositoryResult<Self> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(RepositoryError::InvalidUrl(base_url.to_string()));
        }
        // `Url::join` drops the last segment unless the path ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("pantry-client/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ClientConfig) -> RepositoryResult<Self> {
        Self::new(&config.api_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> RepositoryResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> RepositoryResult<Vec<T>> {
        let url = self.endpoint(path)?;
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        let body = response.bytes().await?;
        decode_list(&body)
    }

    async fn delete_by_id(&self, path: &str, id: u32) -> RepositoryResult<()> {
        let url = self.endpoint(path)?;
        log::debug!("DELETE {url}?id={id}");
        let response = self
            .client
            .delete(url)
            .query(&[("id", id)])
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turns non-2xx responses into [`RepositoryError`]s.
async fn check_status(response: Response) -> RepositoryResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(RepositoryError::NotFound);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<MessageBody>(&text)
        .map(|body| body.message)
        .unwrap_or_else(|_| text.trim().to_string());

    Err(RepositoryError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Decodes a listing body: an array, `null`, an empty body, or a
/// `{"message": ..}` object the server sends when it has nothing to list.
fn decode_list<T: DeserializeOwned>(body: &[u8]) -> RepositoryResult<Vec<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => match map.get("message").and_then(Value::as_str) {
            Some(message) => Err(RepositoryError::Server(message.to_string())),
            None => Err(RepositoryError::Decode(
                "expected a JSON array of records".to_string(),
            )),
        },
        value => Ok(serde_json::from_value(value)?),
    }
}

#[async_trait]
impl IngredientReader for HttpRepository {
    async fn list_ingredients(&self) -> RepositoryResult<Vec<Ingredient>> {
        self.get_list(INGREDIENT_PATH).await
    }
}

#[async_trait]
impl IngredientWriter for HttpRepository {
    async fn create_ingredient(&self, new_ingredient: &NewIngredient) -> RepositoryResult<()> {
        let url = self.endpoint(INGREDIENT_PATH)?;
        log::debug!("POST {url}");
        let response = self.client.post(url).json(new_ingredient).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn update_ingredient(
        &self,
        id: IngredientId,
        updates: &UpdateIngredient,
    ) -> RepositoryResult<()> {
        let url = self.endpoint(&format!("{INGREDIENT_PATH}/{id}"))?;
        log::debug!("PATCH {url}");
        let response = self.client.patch(url).json(updates).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn delete_ingredient(&self, id: IngredientId) -> RepositoryResult<()> {
        self.delete_by_id(INGREDIENT_PATH, id.get()).await
    }
}

#[async_trait]
impl RecipeReader for HttpRepository {
    async fn list_recipes(&self) -> RepositoryResult<Vec<Recipe>> {
        self.get_list(RECIPE_PATH).await
    }
}

#[async_trait]
impl RecipeWriter for HttpRepository {
    async fn create_recipe(&self, new_recipe: &NewRecipe) -> RepositoryResult<()> {
        let url = self.endpoint(RECIPE_PATH)?;
        log::debug!("POST {url}");
        let response = self.client.post(url).json(new_recipe).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn delete_recipe(&self, id: RecipeId) -> RepositoryResult<()> {
        self.delete_by_id(RECIPE_PATH, id.get()).await
    }
}

#[async_trait]
impl RecommendationReader for HttpRepository {
    async fn list_recommendations(&self) -> RepositoryResult<Vec<Recommendation>> {
        self.get_list(RECOMMENDATION_PATH).await
    }
}
