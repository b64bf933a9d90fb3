//! HTTP front end for DMARC verification.
//!
//! Exposes a single endpoint:
//! - `POST /verify` - takes `{"email": "..."}` and answers with
//!   `{"dmarcRecord": "...", "isDmarc": bool, "dmarcType": "..."}`
//!
//! Any origin may call the endpoint.

mod error;
mod handler;

use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::{
    Router,
    http::{Method, header},
    routing::post,
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};

use crate::{dmarc::DmarcResolver, error::DmarcError, net::TxtResolver};

pub use error::ApiError;
pub use handler::{VerifyRequest, VerifyResponse, verify};

/// State shared by all requests
pub struct AppState<R: TxtResolver> {
    pub resolver: Arc<DmarcResolver<R>>,
}

impl<R: TxtResolver> AppState<R> {
    pub fn new(resolver: DmarcResolver<R>) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}

impl<R: TxtResolver> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
        }
    }
}

/// Build the application router
pub fn router<R: TxtResolver>(state: AppState<R>) -> Router {
    Router::new()
        .route("/verify", post(verify::<R>))
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Bind `listen` and serve until SIGINT or SIGTERM
pub async fn serve<R: TxtResolver>(
    listen: SocketAddr,
    resolver: DmarcResolver<R>,
) -> Result<(), DmarcError> {
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|source| DmarcError::Bind {
            addr: listen,
            source,
        })?;

    run(listener, resolver, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` completes
///
/// In-flight requests are allowed to finish before this returns.
pub async fn run<R, F>(
    listener: TcpListener,
    resolver: DmarcResolver<R>,
    shutdown: F,
) -> Result<(), DmarcError>
where
    R: TxtResolver,
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    log::info!("Server listening on http://{addr}/verify");

    axum::serve(listener, router(AppState::new(resolver)))
        .with_graceful_shutdown(shutdown)
        .await?;

    log::info!("Server on {addr} stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {err}");
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
                log::error!("Failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    log::info!("Shutdown signal received, draining connections");
}
