use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::recipe::Recipe;

/// Recipe suggested by the server for the ingredients currently in stock.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Recommendation {
    /// 1-based position in the server's ranking, best match first.
    #[serde(rename = "Recommendation", alias = "recommendation")]
    pub rank: u32,
    #[serde(rename = "Recipe", alias = "recipe")]
    pub recipe: Recipe,
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.rank, self.recipe)
    }
}
