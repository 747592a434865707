//! Counter HTTP API.
//!
//! Serves the routes [`HttpCounterService`](crate::data::HttpCounterService)
//! talks to, backed by an [`InMemoryCounterRepository`](crate::data::InMemoryCounterRepository).

pub mod error;
mod routes;

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

pub use error::ApiError;
pub use routes::{build_router, ServerState};

/// A bound, not yet running, counter server.
pub struct CounterServer {
    addr: SocketAddr,
    listener: TcpListener,
    router: Router,
}

impl CounterServer {
    /// Bind `bind_addr`. Port 0 picks a free port; see [`CounterServer::local_addr`].
    pub async fn bind(bind_addr: &str, state: ServerState) -> std::io::Result<Self> {
        let listener = TcpListener::bind(bind_addr).await?;
        let addr = listener.local_addr()?;
        Ok(Self {
            addr,
            listener,
            router: build_router(state),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Serve until `shutdown` resolves, then finish in-flight requests.
    pub async fn run<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Counter server listening on {}", self.addr);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .into_future()
            .await?;

        tracing::info!("Counter server stopped");
        Ok(())
    }
}
