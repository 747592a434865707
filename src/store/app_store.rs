use std::sync::Arc;

use tokio::sync::watch;

use crate::app::CounterStore;
use crate::data::{CounterService, ServiceError};
use crate::domain::Counter;
use crate::store::counter::{CounterIntent, CounterReducer, CounterState};
use crate::store::mvi::Reducer;

/// Shared counter store backed by a [`CounterService`].
///
/// Every state change goes through [`CounterReducer`]. Clones share the same
/// state, and readers can follow changes through [`AppStore::subscribe`].
#[derive(Clone)]
pub struct AppStore {
    inner: Arc<AppStoreInner>,
}

struct AppStoreInner {
    state: watch::Sender<CounterState>,
    service: Arc<dyn CounterService>,
}

impl AppStore {
    pub fn new(service: Arc<dyn CounterService>) -> Self {
        let (state, _) = watch::channel(CounterState::default());
        Self {
            inner: Arc::new(AppStoreInner { state, service }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CounterState {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<CounterState> {
        self.inner.state.subscribe()
    }

    /// Run `intent` through the reducer. Subscribers are only woken when the
    /// state actually changed.
    pub fn dispatch(&self, intent: CounterIntent) {
        self.inner.state.send_if_modified(|state| {
            let next = CounterReducer::reduce(state.clone(), intent);
            if next == *state {
                return false;
            }
            *state = next;
            true
        });
    }

    /// Load the counter from the service into local state.
    pub async fn fetch_counter(&self) -> Result<Counter, ServiceError> {
        self.dispatch(CounterIntent::FetchStarted);

        match self.inner.service.get_counter().await {
            Ok(counter) => {
                tracing::info!(value = counter.value(), "Counter loaded");
                self.dispatch(CounterIntent::FetchSucceeded { counter });
                Ok(counter)
            }
            Err(err) => {
                tracing::warn!(
                    service = self.inner.service.name(),
                    error = %err,
                    "Counter fetch failed"
                );
                self.dispatch(CounterIntent::FetchFailed {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Persist `counter` and wait for the answer.
    ///
    /// [`CounterStore::update_counter`] is the fire-and-forget variant.
    pub async fn persist_counter(&self, counter: Counter) -> Result<Counter, ServiceError> {
        self.dispatch(CounterIntent::UpdateStarted);
        self.complete_update(counter).await
    }

    /// Wait until no fetch or update is in flight.
    pub async fn settled(&self) {
        let mut rx = self.subscribe();
        let _ = rx.wait_for(CounterState::is_settled).await;
    }

    async fn complete_update(&self, counter: Counter) -> Result<Counter, ServiceError> {
        match self.inner.service.update_counter(counter).await {
            Ok(stored) => {
                tracing::info!(
                    requested = counter.value(),
                    stored = stored.value(),
                    "Counter persisted"
                );
                self.dispatch(CounterIntent::UpdateSucceeded {
                    requested: counter,
                    stored,
                });
                Ok(stored)
            }
            Err(err) => {
                tracing::warn!(
                    service = self.inner.service.name(),
                    value = counter.value(),
                    status = ?err.status(),
                    error = %err,
                    "Counter update failed"
                );
                self.dispatch(CounterIntent::UpdateFailed {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }
}

impl CounterStore for AppStore {
    fn counter(&self) -> Option<Counter> {
        self.inner.state.borrow().counter
    }

    fn is_loading(&self) -> bool {
        self.inner.state.borrow().is_loading
    }

    fn is_updating(&self) -> bool {
        self.inner.state.borrow().is_updating()
    }

    fn set_counter(&self, counter: Counter) {
        self.dispatch(CounterIntent::Set { counter });
    }

    fn update_counter(&self, counter: Counter) {
        // Marked in flight before spawning so `settled()` cannot slip past it.
        self.dispatch(CounterIntent::UpdateStarted);
        let store = self.clone();
        tokio::spawn(async move {
            let _ = store.complete_update(counter).await;
        });
    }
}
