//! Debounced remote writes.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::app::store::CounterStore;
use crate::domain::Counter;

/// Quiet period used when nothing else is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Coalesces rapid counter changes into a single remote write.
///
/// Each [`WriteScheduler::schedule`] call replaces whatever was pending and
/// restarts the window. When the window elapses without another call, the
/// latest value is handed to [`CounterStore::update_counter`]. At most one
/// write is ever pending.
///
/// Timers run on the tokio runtime, so `schedule` must be called from within
/// one. Dropping the scheduler cancels the pending write.
pub struct WriteScheduler {
    store: Arc<dyn CounterStore>,
    window: Duration,
    state: Arc<Mutex<SchedulerState>>,
}

#[derive(Default)]
struct SchedulerState {
    /// Bumped on every schedule, flush and cancel. A timer only fires if the
    /// generation it was armed with is still current.
    generation: u64,
    pending: Option<PendingWrite>,
}

struct PendingWrite {
    counter: Counter,
    timer: JoinHandle<()>,
}

impl WriteScheduler {
    pub fn new(store: Arc<dyn CounterStore>, window: Duration) -> Self {
        Self {
            store,
            window,
            state: Arc::new(Mutex::new(SchedulerState::default())),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Value waiting for its window to elapse, if any.
    pub fn pending(&self) -> Option<Counter> {
        self.state.lock().pending.as_ref().map(|p| p.counter)
    }

    /// Arm a write of `counter`, superseding any pending one.
    pub fn schedule(&self, counter: Counter) {
        let mut state = self.state.lock();
        state.generation += 1;
        let generation = state.generation;

        if let Some(previous) = state.pending.take() {
            previous.timer.abort();
            tracing::trace!(
                superseded = previous.counter.value(),
                value = counter.value(),
                "Pending counter write superseded"
            );
        }

        let shared = Arc::clone(&self.state);
        let store = Arc::clone(&self.store);
        let window = self.window;

        // The timer needs the lock to fire, and we hold it until `pending`
        // is set, so it can never observe the slot empty for its generation.
        let timer = tokio::spawn(async move {
            tokio::time::sleep(window).await;

            let due = {
                let mut state = shared.lock();
                if state.generation != generation {
                    return;
                }
                state.pending.take()
            };

            if let Some(write) = due {
                tracing::debug!(
                    value = write.counter.value(),
                    window_ms = window.as_millis() as u64,
                    "Debounce window elapsed, persisting counter"
                );
                store.update_counter(write.counter);
            }
        });

        state.pending = Some(PendingWrite { counter, timer });
    }

    /// Issue the pending write now instead of waiting for the window.
    ///
    /// Returns the value that was written, or `None` if nothing was pending.
    pub fn flush(&self) -> Option<Counter> {
        let write = self.take_pending()?;
        tracing::debug!(value = write.value(), "Flushing pending counter write");
        self.store.update_counter(write);
        Some(write)
    }

    /// Drop the pending write without issuing it.
    ///
    /// Returns the value that was discarded, or `None` if nothing was pending.
    pub fn cancel(&self) -> Option<Counter> {
        let write = self.take_pending()?;
        tracing::debug!(value = write.value(), "Cancelled pending counter write");
        Some(write)
    }

    fn take_pending(&self) -> Option<Counter> {
        let mut state = self.state.lock();
        state.generation += 1;
        let pending = state.pending.take()?;
        pending.timer.abort();
        Some(pending.counter)
    }
}

impl Drop for WriteScheduler {
    fn drop(&mut self) {
        let _ = self.take_pending();
    }
}
