//! Local web server for the browser UI.
//!
//! Provides four endpoints:
//! - `/` - the search page with the details panel and the map
//! - `/search?q=...` - submits a search and redirects back to `/`
//! - `/state` - JSON view state and page model
//! - `/images/icon-location.svg` - the map marker icon
//!
//! All browsers share one page, like a single open tab.
//! [`launch`] starts serving before the startup lookup finishes.

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::MARKER_ICON_PATH;
use crate::controller::Controller;
use handlers::{icon_handler, index_handler, search_handler, state_handler};
pub use types::{AppState, StateResponse};

/// Builds the router for `controller`.
pub fn router(controller: Arc<Controller>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/search", get(search_handler))
        .route("/state", get(state_handler))
        .route(MARKER_ICON_PATH, get(icon_handler))
        .with_state(AppState::new(controller))
}

/// Binds `addr`.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, anyhow::Error> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind web UI to {}: {}", addr, e))
}

/// Serves the browser UI and runs the startup lookup in the background.
///
/// Requests are answered while the lookup is in flight; the page reports
/// `loading` until it completes, and a search submitted meanwhile wins.
pub async fn launch(listener: TcpListener, controller: Arc<Controller>) -> Result<(), anyhow::Error> {
    let startup = Arc::clone(&controller);
    tokio::spawn(async move {
        let outcome = startup.startup().await;
        log::info!("Startup lookup: {:?}", outcome);
    });
    serve(listener, controller).await
}

/// Serves the browser UI on `listener` until the process ends.
pub async fn serve(listener: TcpListener, controller: Arc<Controller>) -> Result<(), anyhow::Error> {
    if let Ok(addr) = listener.local_addr() {
        log::info!("Web UI listening on http://{}/", addr);
    }

    axum::serve(listener, router(controller))
        .await
        .map_err(|e| anyhow::anyhow!("Web UI server error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_reports_address_in_use() {
        let first = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = first.local_addr().unwrap();

        let err = bind(addr).await.unwrap_err().to_string();
        assert!(err.contains("Failed to bind web UI"));
        assert!(err.contains(&addr.port().to_string()));
    }
}
