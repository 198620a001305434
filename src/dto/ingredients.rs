use serde::Serialize;

use crate::domain::ingredient::Ingredient;

/// Data required to render the pantry stock listing.
#[derive(Debug, Serialize)]
pub struct IngredientsPageData {
    /// Every ingredient currently in stock, in server order.
    pub ingredients: Vec<Ingredient>,
}
