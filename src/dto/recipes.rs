use serde::Serialize;

use crate::domain::recipe::Recipe;
use crate::pagination::Paginated;

/// Data required to render one page of the recipe listing.
#[derive(Debug, Serialize)]
pub struct RecipesPageData {
    pub recipes: Paginated<Recipe>,
}
