//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use counter_sync::app::CounterStore;
use counter_sync::domain::Counter;
use parking_lot::Mutex;
use tokio::time::Instant;

/// Store double that records every call a use case makes.
///
/// `update_counter` only records; nothing is persisted and local state is
/// left as it was.
pub struct RecordingStore {
    counter: Mutex<Option<Counter>>,
    sets: Mutex<Vec<Counter>>,
    updates: Mutex<Vec<(Instant, Counter)>>,
}

impl RecordingStore {
    pub fn new(initial: Option<Counter>) -> Self {
        Self {
            counter: Mutex::new(initial),
            sets: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn sets(&self) -> Vec<Counter> {
        self.sets.lock().clone()
    }

    pub fn updates(&self) -> Vec<(Instant, Counter)> {
        self.updates.lock().clone()
    }

    pub fn update_values(&self) -> Vec<Counter> {
        self.updates.lock().iter().map(|(_, c)| *c).collect()
    }
}

impl CounterStore for RecordingStore {
    fn counter(&self) -> Option<Counter> {
        *self.counter.lock()
    }

    fn set_counter(&self, counter: Counter) {
        *self.counter.lock() = Some(counter);
        self.sets.lock().push(counter);
    }

    fn update_counter(&self, counter: Counter) {
        self.updates.lock().push((Instant::now(), counter));
    }
}
