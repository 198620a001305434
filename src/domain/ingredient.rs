use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::IngredientId;

/// Ingredient held in the pantry, as listed by the server.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Ingredient {
    #[serde(default, alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<IngredientId>,
    #[serde(alias = "name")]
    pub name: String,
    #[serde(default, alias = "measureType", alias = "measure_type")]
    pub measure_type: String,
    #[serde(default, alias = "quantity")]
    pub quantity: i64,
}

impl Display for Ingredient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(id) = self.id {
            write!(f, "#{id} ")?;
        }
        write!(f, "{} ({} {})", self.name, self.quantity, self.measure_type)
    }
}

/// Payload for `POST /ingredient`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewIngredient {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub measure_type: String,
    pub quantity: i64,
}

impl NewIngredient {
    #[must_use]
    pub fn new(name: impl Into<String>, measure_type: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into().trim().to_string(),
            measure_type: measure_type.into().trim().to_string(),
            quantity,
        }
    }
}

/// Payload for `PATCH /ingredient/{id}`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIngredient {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub measure_type: String,
    pub quantity: i64,
}

impl UpdateIngredient {
    #[must_use]
    pub fn new(name: impl Into<String>, measure_type: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into().trim().to_string(),
            measure_type: measure_type.into().trim().to_string(),
            quantity,
        }
    }
}
