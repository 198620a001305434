//! Strongly-typed value objects used by domain records.
//!
//! Identifiers are assigned by the pantry server. The client only needs to
//! carry them around and parse them from user input.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for server-assigned identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Returns the raw `u32` backing this identifier.
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                trimmed
                    .parse::<u32>()
                    .map(Self)
                    .map_err(|_| TypeConstraintError::InvalidValue(trimmed.to_string()))
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(IngredientId, "Identifier of an ingredient in stock.");
id_newtype!(RecipeId, "Identifier of a stored recipe.");

/// Trims a user-supplied string and rejects blank values.
pub fn non_blank<S: Into<String>>(value: S) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString)
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_from_trimmed_strings() {
        assert_eq!(" 42 ".parse::<RecipeId>(), Ok(RecipeId::new(42)));
        assert_eq!(
            "".parse::<IngredientId>(),
            Err(TypeConstraintError::EmptyString)
        );
        assert_eq!(
            "-1".parse::<IngredientId>(),
            Err(TypeConstraintError::InvalidValue("-1".to_string()))
        );
    }

    #[test]
    fn ids_are_transparent_on_the_wire() {
        let id: RecipeId = serde_json::from_str("7").unwrap();
        assert_eq!(id.get(), 7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }

    #[test]
    fn non_blank_trims_and_rejects_whitespace() {
        assert_eq!(non_blank("  onion "), Ok("onion".to_string()));
        assert_eq!(non_blank("   "), Err(TypeConstraintError::EmptyString));
    }
}
