//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::ingredient::{Ingredient, NewIngredient, UpdateIngredient};
use crate::domain::recipe::{NewRecipe, Recipe};
use crate::domain::recommendation::Recommendation;
use crate::domain::types::{IngredientId, RecipeId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    IngredientReader, IngredientWriter, RecipeReader, RecipeWriter, RecommendationReader,
};

mock! {
    pub Repository {}

    #[async_trait]
    impl IngredientReader for Repository {
        async fn list_ingredients(&self) -> RepositoryResult<Vec<Ingredient>>;
    }

    #[async_trait]
    impl IngredientWriter for Repository {
        async fn create_ingredient(&self, new_ingredient: &NewIngredient) -> RepositoryResult<()>;
        async fn update_ingredient(
            &self,
            id: IngredientId,
            updates: &UpdateIngredient,
        ) -> RepositoryResult<()>;
        async fn delete_ingredient(&self, id: IngredientId) -> RepositoryResult<()>;
    }

    #[async_trait]
    impl RecipeReader for Repository {
        async fn list_recipes(&self) -> RepositoryResult<Vec<Recipe>>;
    }

    #[async_trait]
    impl RecipeWriter for Repository {
        async fn create_recipe(&self, new_recipe: &NewRecipe) -> RepositoryResult<()>;
        async fn delete_recipe(&self, id: RecipeId) -> RepositoryResult<()>;
    }

    #[async_trait]
    impl RecommendationReader for Repository {
        async fn list_recommendations(&self) -> RepositoryResult<Vec<Recommendation>>;
    }
}
