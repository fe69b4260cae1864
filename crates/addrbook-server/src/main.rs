//! # AddrBook Server
//!
//! Loads configuration, wires the application, serves HTTP until a shutdown
//! signal arrives, then releases resources.

use addrbook_config::ConfigLoader;
use addrbook_core::{telemetry::init_logging, AddrBookError, AddrBookResult};
use addrbook_rest::{create_router, AppState};
use addrbook_server::{
    di::AppContainer,
    startup::{print_startup_info, shutdown_signal},
};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let loader = match ConfigLoader::from_default_location() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let config = loader.into_config();

    if let Err(e) = init_logging(
        &config.observability.filter_directive(),
        config.observability.log_format,
    ) {
        eprintln!("Failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Starting address book server...");
    info!("Environment: {}", config.app.environment);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(fatal = e.is_fatal(), "Application error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: addrbook_config::AppConfig) -> AddrBookResult<()> {
    let container = AppContainer::build(&config).await?;

    let state = AppState::new(
        container.address_book(),
        container.health_checks(),
        config.app.clone(),
    );
    let router = create_router(state, &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AddrBookError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    print_startup_info(&config);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AddrBookError::Internal(format!("HTTP server error: {}", e)));
    info!("Server stopped");

    container.close().await;
    served
}
