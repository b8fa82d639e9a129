use axum_helpers::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;
use users_api::config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(environment = %config.environment, "Starting users API");

    create_app(users_api::app(config.expose_error_detail), &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
