//! HTTP scoring endpoint for the screening questionnaire.
//!
//! `POST /analyze` takes the six answers as JSON and returns the scored
//! report. Answers that are missing or `null` never count as concerns.

use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;

use config::Config;
use routes::{analyze_handler, health_handler};

pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serve the scoring router on an already bound listener until shutdown.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Initialize logging, bind the configured address and serve.
///
/// # Errors
///
/// Returns an I/O error if binding or serving fails.
pub async fn start_server() -> std::io::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    info!("Binding to {}", config.addr);

    let listener = TcpListener::bind(config.addr).await?;
    info!("Scorer running on {}", config.addr);

    serve(listener).await?;

    info!("Scorer shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        } else {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
