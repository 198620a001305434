use validator::Validate;

use crate::domain::recipe::{NewRecipe, Recipe};
use crate::domain::types::RecipeId;
use crate::dto::recipes::RecipesPageData;
use crate::pagination::Paginator;
use crate::repository::{RecipeReader, RecipeWriter};
use crate::services::{ServiceError, ServiceResult, select_page};

/// Replaces the held recipes with a fresh listing and rewinds to page 1.
///
/// On failure `pager` keeps its previous contents.
async fn refresh_recipes<R>(repo: &R, pager: &mut Paginator<Recipe>) -> ServiceResult<()>
where
    R: RecipeReader + ?Sized,
{
    let recipes = repo.list_recipes().await.map_err(|err| {
        log::error!("Failed to list recipes: {err}");
        err
    })?;

    pager.set_items(recipes);
    pager.reset();
    Ok(())
}

/// Fetches all recipes and shows `page` (page 1 when `None`).
pub async fn load_recipes<R>(
    repo: &R,
    pager: &mut Paginator<Recipe>,
    page: Option<usize>,
) -> ServiceResult<RecipesPageData>
where
    R: RecipeReader + ?Sized,
{
    refresh_recipes(repo, pager).await?;
    select_page(pager, page)?;

    Ok(RecipesPageData {
        recipes: pager.page_view(),
    })
}

/// Shows another page of the already fetched recipes.
pub fn show_recipes_page(
    pager: &mut Paginator<Recipe>,
    page: usize,
) -> ServiceResult<RecipesPageData> {
    select_page(pager, Some(page))?;

    Ok(RecipesPageData {
        recipes: pager.page_view(),
    })
}

/// Validates and stores a recipe, then reloads the listing from page 1.
pub async fn create_recipe<R>(
    repo: &R,
    pager: &mut Paginator<Recipe>,
    new_recipe: NewRecipe,
) -> ServiceResult<RecipesPageData>
where
    R: RecipeReader + RecipeWriter + ?Sized,
{
    if let Err(err) = new_recipe.validate() {
        log::error!("Failed to validate recipe: {err}");
        return Err(ServiceError::Form(
            "recipe needs a name and at least one complete ingredient".to_string(),
        ));
    }

    repo.create_recipe(&new_recipe).await.map_err(|err| {
        log::error!("Failed to create recipe: {err}");
        err
    })?;
    log::info!("Created recipe {}", new_recipe.name);

    load_recipes(repo, pager, None).await
}

/// Deletes a recipe, then reloads the listing from page 1.
pub async fn delete_recipe<R>(
    repo: &R,
    pager: &mut Paginator<Recipe>,
    id: RecipeId,
) -> ServiceResult<RecipesPageData>
where
    R: RecipeReader + RecipeWriter + ?Sized,
{
    repo.delete_recipe(id).await.map_err(|err| {
        log::error!("Failed to delete recipe {id}: {err}");
        err
    })?;
    log::info!("Deleted recipe {id}");

    load_recipes(repo, pager, None).await
}
