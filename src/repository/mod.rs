//! Data-fetch collaborators for the pantry API.
//!
//! Services depend on the reader/writer traits only. [`HttpRepository`] talks
//! to the real server; `mock` provides mockall doubles behind the
//! `test-mocks` feature.

use async_trait::async_trait;

use crate::domain::ingredient::{Ingredient, NewIngredient, UpdateIngredient};
use crate::domain::recipe::{NewRecipe, Recipe};
use crate::domain::recommendation::Recommendation;
use crate::domain::types::{IngredientId, RecipeId};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use http::HttpRepository;

#[async_trait]
pub trait IngredientReader: Send + Sync {
    async fn list_ingredients(&self) -> RepositoryResult<Vec<Ingredient>>;
}

#[async_trait]
pub trait IngredientWriter: Send + Sync {
    async fn create_ingredient(&self, new_ingredient: &NewIngredient) -> RepositoryResult<()>;
    async fn update_ingredient(
        &self,
        id: IngredientId,
        updates: &UpdateIngredient,
    ) -> RepositoryResult<()>;
    async fn delete_ingredient(&self, id: IngredientId) -> RepositoryResult<()>;
}

#[async_trait]
pub trait RecipeReader: Send + Sync {
    async fn list_recipes(&self) -> RepositoryResult<Vec<Recipe>>;
}

#[async_trait]
pub trait RecipeWriter: Send + Sync {
    async fn create_recipe(&self, new_recipe: &NewRecipe) -> RepositoryResult<()>;
    async fn delete_recipe(&self, id: RecipeId) -> RepositoryResult<()>;
}

#[async_trait]
pub trait RecommendationReader: Send + Sync {
    async fn list_recommendations(&self) -> RepositoryResult<Vec<Recommendation>>;
}
