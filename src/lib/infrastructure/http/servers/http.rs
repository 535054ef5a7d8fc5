//! The application's plain HTTP server.

use std::net::{SocketAddr, TcpListener};

use anyhow::{Context, Result};
use axum::{async_trait, Router};
use axum_server::Handle;
use tracing::{debug, info};

use crate::{
    domain::contact::ContactService,
    infrastructure::http::{
        rate_limit::RateLimitConfig,
        rate_limited_router, shutdown_signal,
        state::AppState,
        Server,
    },
};

/// The application's HTTP server
#[derive(Debug)]
pub struct HttpServer {
    router: Router,
    listener: TcpListener,
}

impl HttpServer {
    /// Returns a new HTTP server bound to `address`.
    pub async fn new(
        address: SocketAddr,
        rate_limit: RateLimitConfig,
        state: AppState<impl ContactService>,
    ) -> Result<Self> {
        let router = rate_limited_router(state, rate_limit)?;

        let listener = TcpListener::bind(address)
            .with_context(|| format!("failed to listen on {address}"))?;
        listener
            .set_nonblocking(true)
            .context("failed to make the listener non-blocking")?;

        Ok(Self { router, listener })
    }

    /// The address the server is bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("failed to get local address")
    }
}

#[async_trait]
impl Server for HttpServer {
    /// Runs the HTTP server.
    #[mutants::skip]
    async fn run(self) -> Result<()> {
        info!("HTTP server listening on {}", self.local_addr()?);

        let handle = Handle::new();

        let server = axum_server::from_tcp(self.listener)
            .handle(handle.clone())
            .serve(
                self.router
                    .into_make_service_with_connect_info::<SocketAddr>(),
            );

        tokio::select! {
            result = server => result.context("server error")?,
            _ = shutdown_signal(Some(handle)) => {
                debug!("shutting down HTTP server");
            }
        }

        Ok(())
    }
}
