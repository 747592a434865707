//! Data-access layer: counter storage and the services that reach it.
//!
//! The store depends on [`CounterService`] only. Two implementations exist:
//! [`SimulatedCounterService`] answers from an [`InMemoryCounterRepository`]
//! after a fixed delay, and [`HttpCounterService`] calls a counter server
//! through [`crate::http::fetch_json`].

mod error;
mod remote;
mod repository;
mod service;
mod simulated;

use std::sync::Arc;

pub use error::ServiceError;
pub use remote::HttpCounterService;
pub use repository::InMemoryCounterRepository;
pub use service::CounterService;
pub use simulated::{SimulatedCounterService, DEFAULT_SIMULATED_DELAY};

use crate::config::{ServiceConfig, ServiceKind};
use crate::http::FetchError;

/// Build the service selected by `config`.
///
/// `repository` backs the simulated service and is ignored for HTTP.
pub fn service_from_config(
    config: &ServiceConfig,
    repository: InMemoryCounterRepository,
) -> Result<Arc<dyn CounterService>, FetchError> {
    let service: Arc<dyn CounterService> = match config.kind {
        ServiceKind::Simulated => Arc::new(SimulatedCounterService::new(
            repository,
            config.simulated_delay(),
        )),
        ServiceKind::Http => Arc::new(HttpCounterService::new(
            config.base_url.clone(),
            config.token.clone(),
            config.timeout(),
        )?),
    };

    tracing::info!(service = service.name(), "Counter service ready");
    Ok(service)
}
