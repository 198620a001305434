use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::ingredient::Ingredient;
use crate::domain::types::{RecipeId, TypeConstraintError, non_blank};

/// Recipe stored on the server together with the ingredients it requires.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Recipe {
    #[serde(default, alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecipeId>,
    #[serde(alias = "name")]
    pub name: String,
    #[serde(default, alias = "ingredients", deserialize_with = "null_as_empty")]
    pub ingredients: Vec<Ingredient>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Ingredient>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Ingredient>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Display for Recipe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(id) = self.id {
            write!(f, "#{id} ")?;
        }
        write!(f, "{}", self.name)?;
        if self.ingredients.is_empty() {
            return Ok(());
        }
        write!(f, " - requires: ")?;
        for (i, ingredient) in self.ingredients.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(
                f,
                "{}: {} {}",
                ingredient.name, ingredient.quantity, ingredient.measure_type
            )?;
        }
        Ok(())
    }
}

/// One required ingredient inside a [`NewRecipe`].
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeIngredient {
    #[validate(length(min = 1))]
    pub name: String,
    pub quantity: i64,
    #[validate(length(min = 1))]
    pub measure_type: String,
}

impl RecipeIngredient {
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: i64, measure_type: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            quantity,
            measure_type: measure_type.into().trim().to_string(),
        }
    }
}

/// Parses `name:quantity:measure`, e.g. `flour:500:g`.
///
/// The measure defaults to `unit` when omitted.
impl FromStr for RecipeIngredient {
    type Err = TypeConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.splitn(3, ':');
        let name = non_blank(parts.next().unwrap_or_default())?;
        let quantity = parts
            .next()
            .map(str::trim)
            .ok_or_else(|| TypeConstraintError::InvalidValue(value.to_string()))?
            .parse::<i64>()
            .map_err(|_| TypeConstraintError::InvalidValue(value.to_string()))?;
        let measure_type = match parts.next() {
            Some(measure) => non_blank(measure)?,
            None => "unit".to_string(),
        };
        Ok(Self::new(name, quantity, measure_type))
    }
}

/// Payload for `POST /recipe`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Validate)]
pub struct NewRecipe {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1), nested)]
    pub ingredients: Vec<RecipeIngredient>,
}

impl NewRecipe {
    #[must_use]
    pub fn new(name: impl Into<String>, ingredients: Vec<RecipeIngredient>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            ingredients,
        }
    }
}
