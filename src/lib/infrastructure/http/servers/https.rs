//! HTTPS application server

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{async_trait, Router};
use axum_server::{tls_rustls::RustlsConfig, Handle};
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

/// The application's HTTPS server
#[derive(Debug)]
pub struct HttpsServer {
    router: Router,
    address: SocketAddr,
    tls_config: RustlsConfig,
}

impl HttpsServer {
    /// Returns a new HTTPS server that will bind to `address`.
    pub async fn new(
        address: SocketAddr,
        cert_path: &str,
        key_path: &str,
        rate_limit: RateLimitConfig,
        state: AppState<impl ContactService>,
    ) -> Result<Self> {
        let tls_config = RustlsConfig::from_pem_file(cert_path, key_path)
            .await
            .context("failed to load TLS config")?;

        let router = rate_limited_router(state, rate_limit)?;

        Ok(Self {
            router,
            address,
            tls_config,
        })
    }
}

#[async_trait]
impl Server for HttpsServer {
    #[mutants::skip]
    async fn run(self) -> Result<()> {
        info!("HTTPS server listening on {}", self.address);

        let handle = Handle::new();

        let server = axum_server::bind_rustls(self.address, self.tls_config)
            .handle(handle.clone())
            .serve(
                self.router
                    .into_make_service_with_connect_info::<SocketAddr>(),
            );

        tokio::select! {
            result = server => result.context("server error")?,
            _ = shutdown_signal(Some(handle)) => {
                debug!("shutting down HTTPS server");
            }
        }

        Ok(())
    }
}
