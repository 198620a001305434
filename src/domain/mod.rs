//! Domain records exchanged with the pantry API.

pub mod ingredient;
pub mod recipe;
pub mod recommendation;
pub mod types;
