use crate::domain::Counter;
use crate::store::mvi::StoreState;

/// Everything the application knows about the counter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterState {
    /// `None` until the first successful fetch or local set.
    pub counter: Option<Counter>,
    /// A fetch is in flight.
    pub is_loading: bool,
    /// Number of remote updates in flight.
    pub updates_in_flight: u32,
    /// Message of the most recent failed fetch or update.
    pub last_error: Option<String>,
}

impl StoreState for CounterState {}

impl CounterState {
    pub fn is_updating(&self) -> bool {
        self.updates_in_flight > 0
    }

    pub fn can_decrement(&self) -> bool {
        self.counter.is_some_and(|c| c.can_decrement())
    }

    /// Nothing is loading or being written.
    pub fn is_settled(&self) -> bool {
        !self.is_loading && !self.is_updating()
    }
}
