use crate::domain::Counter;
use crate::store::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    FetchStarted,
    FetchSucceeded { counter: Counter },
    FetchFailed { message: String },
    /// Local, synchronous edit. Never touches the backend.
    Set { counter: Counter },
    UpdateStarted,
    /// The backend stored `requested` and answered with `stored`. The answer
    /// replaces local state only while local state still equals `requested`.
    UpdateSucceeded { requested: Counter, stored: Counter },
    UpdateFailed { message: String },
}

impl Intent for CounterIntent {}
