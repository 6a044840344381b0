//! Health backend: a single `/health` route behind a permissive CORS policy.
//! Used by: binary entrypoint.

pub mod config;
pub mod console;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod server;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();
    console::print_startup(&config.display_url());
    tracing::info!("starting backend on {}", config.socket_addr());

    server::run(config).await?;
    Ok(())
}
