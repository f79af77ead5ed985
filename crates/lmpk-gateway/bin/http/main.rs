mod cli;

use std::sync::Arc;

use crate::cli::{StorageBackendArg, CLI};
use clap::Parser;
use lmpk_core::RedirectStore;
use lmpk_gateway::config::validate_token;
use lmpk_gateway::{load_auth_token, App, AppState, GatewayConfig};
use lmpk_storage::{FlatFileRepository, InMemoryRepository};
use lmpk_store::{StoreService, StoreSettings};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;

    lmpk_telemetry::init(config.log_format.into(), lmpk_telemetry::DEFAULT_FILTER)?;

    let auth_token = match config.auth_token {
        Some(token) => validate_token(token)?,
        None => load_auth_token(&config.env_file, &config.auth_key)?,
    };

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        delete_match = %config.delete_match,
        default_link = %config.default_link,
        "starting lmpk gateway"
    );

    let settings = StoreSettings::builder()
        .delete_match(config.delete_match.into())
        .build();

    let store: Arc<dyn RedirectStore> = match config.storage {
        StorageBackendArg::File => {
            let repository = FlatFileRepository::open(&config.redirects_file).await?;
            info!(path = %config.redirects_file.display(), "using flat-file storage");
            Arc::new(StoreService::new(repository, settings))
        }
        StorageBackendArg::InMemory => {
            info!("using in-memory storage, records are lost on exit");
            Arc::new(StoreService::new(InMemoryRepository::new(), settings))
        }
    };

    let gateway_config = GatewayConfig::builder()
        .auth_token(auth_token)
        .default_link(config.default_link)
        .template_path(config.template_path)
        .static_dir(config.static_dir)
        .build();

    let router = App::router(AppState::new(store, gateway_config));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("received terminate signal, shutting down");
        },
    }
}
