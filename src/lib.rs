pub mod api;
pub mod backend;
pub mod config;
pub mod form;
pub mod view;

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use backend::RecipeBackend;
use config::AppConfig;
use form::QueryForm;

#[derive(Clone)]
pub struct AppState {
    pub form: Arc<QueryForm>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            form: Arc::new(QueryForm::new(RecipeBackend::new(config.backend()))),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(config: AppConfig) -> Result<(), ServeError> {
    let state = AppState::new(&config);
    let app = build_app(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!(%addr, backend = %config.backend_url, "recipe form listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Serve)?;

    info!("recipe form stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            stream.recv().await;
            info!("Received terminate signal, shutting down");
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
