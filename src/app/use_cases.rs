//! Increment and decrement use cases.
//!
//! Both follow the same shape: read the counter, write the next value
//! locally right away, then hand the value to the [`WriteScheduler`] so the
//! remote write happens once the user stops clicking. Local state is never
//! debounced. Failures of the eventual remote write belong to the store.

use crate::app::scheduler::WriteScheduler;
use crate::app::store::CounterStore;
use crate::domain::Counter;

/// Add one to the counter.
///
/// Returns the new local value, or `None` if the counter has not been
/// loaded yet.
pub fn increment_counter(store: &dyn CounterStore, scheduler: &WriteScheduler) -> Option<Counter> {
    let Some(current) = store.counter() else {
        tracing::debug!("Increment ignored, counter not loaded");
        return None;
    };

    let next = current.incremented();
    apply(store, scheduler, next);
    Some(next)
}

/// Subtract one from the counter.
///
/// Decrementing at zero does nothing: no local change and no remote write.
/// Returns the new local value, or `None` when nothing happened.
pub fn decrement_counter(store: &dyn CounterStore, scheduler: &WriteScheduler) -> Option<Counter> {
    let Some(current) = store.counter() else {
        tracing::debug!("Decrement ignored, counter not loaded");
        return None;
    };

    if !current.can_decrement() {
        tracing::debug!("Decrement ignored, counter already at zero");
        return None;
    }

    let next = current.decremented();
    apply(store, scheduler, next);
    Some(next)
}

fn apply(store: &dyn CounterStore, scheduler: &WriteScheduler, next: Counter) {
    store.set_counter(next);
    scheduler.schedule(next);
}
