//! Application state.
//!
//! [`AppStore`] is the single owner of the counter. It implements the
//! [`CounterStore`](crate::app::CounterStore) view consumed by the use cases
//! and runs fetches and updates against a
//! [`CounterService`](crate::data::CounterService).

mod app_store;
pub mod counter;
pub mod mvi;

pub use app_store::AppStore;
pub use counter::{CounterIntent, CounterReducer, CounterState};
