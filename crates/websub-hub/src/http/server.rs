//! HTTP server lifecycle: bind, serve, graceful shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::domain::{HubConfig, ServerError};
use crate::ports::HubApi;
use crate::service::DefaultHubService;

use super::router::build_router;

/// A bound, not yet serving, hub listener.
pub struct HubServer {
    listener: TcpListener,
    router: Router,
}

impl HubServer {
    /// Bind the configured address and build the router over `hub`.
    ///
    /// Port 0 binds an ephemeral port; read it back with [`HubServer::local_addr`].
    pub async fn bind(config: &HubConfig, hub: Arc<dyn HubApi>) -> Result<Self, ServerError> {
        config.validate()?;

        let listener = TcpListener::bind(config.http_addr())
            .await
            .map_err(ServerError::Bind)?;
        let router = build_router(hub, &config.limits);

        Ok(Self { listener, router })
    }

    /// Bind with the production service built from `config`.
    pub async fn from_config(config: &HubConfig) -> Result<Self, ServerError> {
        let hub = DefaultHubService::from_config(config)?;
        Self::bind(config, Arc::new(hub)).await
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        self.listener.local_addr().map_err(ServerError::Bind)
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        info!(addr = %addr, "Starting hub HTTP server");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServerError::Serve)?;

        info!("Hub HTTP server stopped");
        Ok(())
    }
}
