//! DTO modules that bridge services with the rendering layer.

pub mod ingredients;
pub mod recipes;
pub mod recommendations;
