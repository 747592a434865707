use std::time::Duration;

use async_trait::async_trait;

use crate::data::error::ServiceError;
use crate::data::repository::InMemoryCounterRepository;
use crate::data::service::CounterService;
use crate::domain::Counter;

/// Latency the simulated backend adds to every call.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_secs(1);

/// Counter backend that answers from memory after a fixed delay.
pub struct SimulatedCounterService {
    repository: InMemoryCounterRepository,
    delay: Duration,
}

impl SimulatedCounterService {
    pub fn new(repository: InMemoryCounterRepository, delay: Duration) -> Self {
        Self { repository, delay }
    }

    pub fn repository(&self) -> &InMemoryCounterRepository {
        &self.repository
    }
}

impl Default for SimulatedCounterService {
    fn default() -> Self {
        Self::new(InMemoryCounterRepository::default(), DEFAULT_SIMULATED_DELAY)
    }
}

#[async_trait]
impl CounterService for SimulatedCounterService {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn get_counter(&self) -> Result<Counter, ServiceError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.repository.load())
    }

    async fn update_counter(&self, counter: Counter) -> Result<Counter, ServiceError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.repository.save(counter))
    }
}
