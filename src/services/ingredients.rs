use validator::Validate;

use crate::domain::ingredient::{NewIngredient, UpdateIngredient};
use crate::domain::types::IngredientId;
use crate::dto::ingredients::IngredientsPageData;
use crate::repository::{IngredientReader, IngredientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetches the full stock listing.
pub async fn load_ingredients<R>(repo: &R) -> ServiceResult<IngredientsPageData>
where
    R: IngredientReader + ?Sized,
{
    let ingredients = repo.list_ingredients().await.map_err(|err| {
        log::error!("Failed to list ingredients: {err}");
        err
    })?;

    Ok(IngredientsPageData { ingredients })
}

/// Validates and stores a new ingredient, then reloads the listing.
pub async fn add_ingredient<R>(
    repo: &R,
    new_ingredient: NewIngredient,
) -> ServiceResult<IngredientsPageData>
where
    R: IngredientReader + IngredientWriter + ?Sized,
{
    if let Err(err) = new_ingredient.validate() {
        log::error!("Failed to validate ingredient: {err}");
        return Err(ServiceError::Form(
            "ingredient name and measure type are required".to_string(),
        ));
    }

    repo.create_ingredient(&new_ingredient)
        .await
        .map_err(|err| {
            log::error!("Failed to add ingredient: {err}");
            err
        })?;
    log::info!("Added ingredient {}", new_ingredient.name);

    load_ingredients(repo).await
}

/// Validates and applies changes to an existing ingredient.
pub async fn update_ingredient<R>(
    repo: &R,
    id: IngredientId,
    updates: UpdateIngredient,
) -> ServiceResult<IngredientsPageData>
where
    R: IngredientReader + IngredientWriter + ?Sized,
{
    if let Err(err) = updates.validate() {
        log::error!("Failed to validate ingredient update: {err}");
        return Err(ServiceError::Form(
            "ingredient name and measure type are required".to_string(),
        ));
    }

    repo.update_ingredient(id, &updates).await.map_err(|err| {
        log::error!("Failed to update ingredient {id}: {err}");
        err
    })?;
    log::info!("Updated ingredient {id}");

    load_ingredients(repo).await
}

pub async fn delete_ingredient<R>(repo: &R, id: IngredientId) -> ServiceResult<IngredientsPageData>
where
    R: IngredientReader + IngredientWriter + ?Sized,
{
    repo.delete_ingredient(id).await.map_err(|err| {
        log::error!("Failed to delete ingredient {id}: {err}");
        err
    })?;
    log::info!("Deleted ingredient {id}");

    load_ingredients(repo).await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::ingredient::Ingredient;
    use crate::repository::errors::{RepositoryError, RepositoryResult};

    #[derive(Default)]
    struct FakeRepo {
        stored: Mutex<Vec<Ingredient>>,
    }

    #[async_trait]
    impl IngredientReader for FakeRepo {
        async fn list_ingredients(&self) -> RepositoryResult<Vec<Ingredient>> {
            Ok(self.stored.lock().unwrap().clone())
        }
    }

    #[async_trait]
    impl IngredientWriter for FakeRepo {
        async fn create_ingredient(&self, new_ingredient: &NewIngredient) -> RepositoryResult<()> {
            let mut stored = self.stored.lock().unwrap();
            let id = IngredientId::new(stored.len() as u32 + 1);
            stored.push(Ingredient {
                id: Some(id),
                name: new_ingredient.name.clone(),
                measure_type: new_ingredient.measure_type.clone(),
                quantity: new_ingredient.quantity,
            });
            Ok(())
        }

        async fn update_ingredient(
            &self,
            id: IngredientId,
            updates: &UpdateIngredient,
        ) -> RepositoryResult<()> {
            let mut stored = self.stored.lock().unwrap();
            let ingredient = stored
                .iter_mut()
                .find(|i| i.id == Some(id))
                .ok_or(RepositoryError::NotFound)?;
            ingredient.name = updates.name.clone();
            ingredient.measure_type = updates.measure_type.clone();
            ingredient.quantity = updates.quantity;
            Ok(())
        }

        async fn delete_ingredient(&self, id: IngredientId) -> RepositoryResult<()> {
            self.stored.lock().unwrap().retain(|i| i.id != Some(id));
            Ok(())
        }
    }

    #[tokio::test]
    async fn add_then_update_then_delete() {
        let repo = FakeRepo::default();

        let page = add_ingredient(&repo, NewIngredient::new("onion", "unit", 10))
            .await
            .unwrap();
        assert_eq!(page.ingredients.len(), 1);

        let id = IngredientId::new(1);
        let page = update_ingredient(&repo, id, UpdateIngredient::new("onion", "unit", 4))
            .await
            .unwrap();
        assert_eq!(page.ingredients[0].quantity, 4);

        let page = delete_ingredient(&repo, id).await.unwrap();
        assert!(page.ingredients.is_empty());
    }

    #[tokio::test]
    async fn invalid_ingredient_is_not_sent() {
        let repo = FakeRepo::default();

        let result = add_ingredient(&repo, NewIngredient::new("", "unit", 1)).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
        assert!(repo.stored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn updating_unknown_ingredient_fails() {
        let repo = FakeRepo::default();

        let result = update_ingredient(
            &repo,
            IngredientId::new(9),
            UpdateIngredient::new("salt", "g", 1),
        )
        .await;

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::NotFound))
        ));
    }
}
