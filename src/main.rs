use std::env;

use clap::Parser;
use dotenvy::dotenv;

use pantry_client::cli::Cli;
use pantry_client::models::config::ClientConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match ClientConfig::load(&cli.config_dir, &app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = pantry_client::run(cli, config).await {
        log::error!("{err}");
        std::process::exit(1);
    }
}
