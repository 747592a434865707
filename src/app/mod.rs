//! Application-logic layer.
//!
//! Use cases mutate the counter through the [`CounterStore`] abstraction and
//! coalesce remote writes with a [`WriteScheduler`].

mod scheduler;
mod store;
mod use_cases;

pub use scheduler::{WriteScheduler, DEFAULT_DEBOUNCE};
pub use store::CounterStore;
pub use use_cases::{decrement_counter, increment_counter};
