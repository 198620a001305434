//! Client for the pantry ingredients/recipes API.
//!
//! The `data` feature exposes the domain records and the in-memory
//! [`pagination::Paginator`]. The default `client` feature adds the HTTP
//! repository, the listing services and the command-line front end.

pub mod domain;
pub mod dto;
pub mod pagination;

#[cfg(feature = "client")]
pub mod cli;
#[cfg(feature = "client")]
pub mod models;
#[cfg(feature = "client")]
pub mod repository;
#[cfg(feature = "client")]
pub mod services;

#[cfg(feature = "client")]
use crate::cli::Cli;
#[cfg(feature = "client")]
use crate::models::config::ClientConfig;
#[cfg(feature = "client")]
use crate::repository::HttpRepository;
#[cfg(feature = "client")]
use crate::services::ServiceResult;

/// Builds the HTTP repository from `config` and runs the parsed command.
#[cfg(feature = "client")]
pub async fn run(cli: Cli, config: ClientConfig) -> ServiceResult<()> {
    let repo = HttpRepository::from_config(&config)?;
    log::debug!("Using pantry API at {}", repo.base_url());

    let output = cli::execute(&repo, cli.command, cli.json, config.items_per_page).await?;
    println!("{output}");
    Ok(())
}
