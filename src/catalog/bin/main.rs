use std::net::TcpListener;
use tracing::info;
use book_registry::catalog::controller::build_router;
use book_registry::catalog::factory::create_catalog_service;
use book_registry::core::controller::AppState;
use book_registry::core::domain::Configuration;
use book_registry::core::library::LibraryError;
use book_registry::utils::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    let config = Configuration::from_env()?;
    setup_tracing(&config);

    let catalog = create_catalog_service();
    let app = build_router(AppState::new(catalog));

    let listener = TcpListener::bind(config.bind_address())?;
    let server = axum::Server::from_tcp(listener).map_err(|err| {
        LibraryError::runtime(format!("failed to bind {}: {}", config.bind_address(), err).as_str(), None)
    })?;

    info!("Server is running on http://{}:{}", config.host, config.port);

    server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| LibraryError::runtime(format!("server failed {}", err).as_str(), None))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to install Ctrl+C handler {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!("failed to install signal handler {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
