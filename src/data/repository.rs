//! In-memory counter storage.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::Counter;

/// Process-local stand-in for the row a real backend would keep.
///
/// Cloning shares the same storage, so a server and a simulated service can
/// hold handles to one repository. Constructed once at startup; only
/// [`InMemoryCounterRepository::reset`] puts it back to its initial value.
#[derive(Clone, Default)]
pub struct InMemoryCounterRepository {
    inner: Arc<RwLock<RepositoryInner>>,
}

#[derive(Default)]
struct RepositoryInner {
    initial: Counter,
    current: Counter,
    writes: u64,
}

impl InMemoryCounterRepository {
    pub fn new(initial: Counter) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RepositoryInner {
                initial,
                current: initial,
                writes: 0,
            })),
        }
    }

    pub fn load(&self) -> Counter {
        self.inner.read().current
    }

    /// Store `counter` and return what is now persisted.
    pub fn save(&self, counter: Counter) -> Counter {
        let mut inner = self.inner.write();
        inner.current = counter;
        inner.writes += 1;
        inner.current
    }

    /// Number of successful saves since construction or the last reset.
    pub fn write_count(&self) -> u64 {
        self.inner.read().writes
    }

    /// Restore the initial value and clear the write count.
    pub fn reset(&self) {
        let mut inner = self.inner.write();
        inner.current = inner.initial;
        inner.writes = 0;
    }
}
