//! Models shared by the client runtime.

pub mod config;
