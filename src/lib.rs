#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
// easier to use when using the functions as callback of foreign functions
#![allow(clippy::needless_pass_by_value)]
// errors are documented on the storage and API types
#![allow(clippy::missing_errors_doc)]

//! Wanderlust, the travel catalog backend
//!
//! Destinations are managed through the `/api/destinations` endpoints, backed by a
//! [`Storage`](storage::Storage). The [`console`] drives those endpoints the way the admin page
//! does.

use std::net::SocketAddr;

use anyhow::Result;
use axum::Extension;
use axum::Router;
use axum::http::Uri;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::seed::ensure_seed_destinations;
use crate::storage::Storage;

pub mod api;
pub mod catalog;
pub mod console;
pub mod destinations;
mod graceful_shutdown;
pub mod seed;
pub mod storage;
#[cfg(test)]
mod tests;
pub mod utils;

/// Create and setup the app with its storage
///
/// # Errors
///
/// Will return `Err` when seeding the demo destinations fails
pub async fn setup_app<S: Storage>(storage: S) -> Result<Router> {
    ensure_seed_destinations(&storage).await?;

    Ok(create_router(storage))
}

/// Create the router for Wanderlust
pub fn create_router<S: Storage>(storage: S) -> Router {
    Router::new()
        .nest("/api", api::router::<S>())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(storage))
}

/// Serve the app until a shutdown signal arrives, then close the storage
///
/// # Errors
///
/// Will return `Err` when the app can not be setup or the address can not be bound
pub async fn serve<S: Storage>(storage: S, address: SocketAddr) -> Result<()> {
    let app = setup_app(storage.clone()).await?;

    let listener = TcpListener::bind(address).await?;
    tracing::info!("Listening on {}", address);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(graceful_shutdown::handler())
        .await;

    storage.close().await;

    Ok(result?)
}

/// Any unknown route
async fn not_found(uri: Uri) -> api::Error {
    tracing::debug!("No route for {}", uri.path());

    api::Error::not_found("Not found")
}
