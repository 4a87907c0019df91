/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;


use std::sync::Arc;

use vani_client::{ClientConfig, ContentClient, FetchError};
use vani_content::{AcceptAll, ContentError, FallbackStore, TokenVerifier};

/// Re-export the content core and fetcher for convenience
pub use vani_client;
pub use vani_content;

/// Builder for the page-content proxy.
///
/// Reads never fail toward the caller while any default exists; writes are
/// forwarded to the backend with the caller's token.
pub struct ContentProxy {
  client: ClientConfig,
  fallback: Option<Arc<FallbackStore>>,
  verifier: Arc<dyn TokenVerifier>,
}

impl ContentProxy {
  pub fn new(client: ClientConfig) -> Self {
    Self { client, fallback: None, verifier: Arc::new(AcceptAll) }
  }

  /// Secondary table served when the backend rejects a read.
  pub fn fallback(mut self, store: FallbackStore) -> Self {
    self.fallback = Some(Arc::new(store));
    self
  }

  /// Reject writes whose token this verifier refuses. Defaults to [`AcceptAll`],
  /// which leaves authorization to the backend.
  pub fn verifier(mut self, verifier: impl TokenVerifier + 'static) -> Self {
    self.verifier = Arc::new(verifier);
    self
  }

  pub fn into_router(self) -> Result<axum::Router, ContentError> {
    let client = ContentClient::new(self.client).map_err(client_setup_error)?;
    Ok(handler::build_router(client, self.fallback, self.verifier))
  }

  pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let upstream = self.client.base_url.clone();
    let router = self.into_router()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
      port = local_addr.port(),
      upstream = %upstream,
      "page content proxy running on http://localhost:{}",
      local_addr.port()
    );
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
  }
}

/// Building the HTTP client is local setup; it never means the backend is down.
fn client_setup_error(err: FetchError) -> ContentError {
  ContentError::internal(format!("failed to build HTTP client: {err}"))
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}
