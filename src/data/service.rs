use async_trait::async_trait;

use crate::data::error::ServiceError;
use crate::domain::Counter;

/// Remote counter backend, as seen by the store.
///
/// Use cases never call this directly; they go through
/// [`CounterStore`](crate::app::CounterStore), and the store owns a service.
#[async_trait]
pub trait CounterService: Send + Sync {
    /// Name used in log fields.
    fn name(&self) -> &'static str;

    async fn get_counter(&self) -> Result<Counter, ServiceError>;

    /// Persist `counter` and return the value the backend ended up storing.
    async fn update_counter(&self, counter: Counter) -> Result<Counter, ServiceError>;
}
