use order_intake::app_system::{setup_tracing, OrderSystem, SystemConfig};
use order_intake::http;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_level);

    info!(?config, "Starting order intake");

    let system = OrderSystem::new(&config);
    let app = http::router(system.order_service.clone());

    let listener = TcpListener::bind(config.http_addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", config.http_addr, e))?;
    info!(addr = %config.http_addr, "Listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = &served {
        error!(error = %e, "Server failed");
    }

    system.shutdown().await?;

    info!("Order intake stopped");
    served.map_err(|e| e.to_string())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for ctrl-c");
    }
    info!("Shutdown signal received");
}
