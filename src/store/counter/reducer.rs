use crate::store::counter::intent::CounterIntent;
use crate::store::counter::state::CounterState;
use crate::store::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::FetchStarted => CounterState {
                is_loading: true,
                last_error: None,
                ..state
            },
            CounterIntent::FetchSucceeded { counter } => CounterState {
                counter: Some(counter),
                is_loading: false,
                ..state
            },
            CounterIntent::FetchFailed { message } => CounterState {
                is_loading: false,
                last_error: Some(message),
                ..state
            },
            CounterIntent::Set { counter } => CounterState {
                counter: Some(counter),
                ..state
            },
            CounterIntent::UpdateStarted => CounterState {
                updates_in_flight: state.updates_in_flight + 1,
                last_error: None,
                ..state
            },
            CounterIntent::UpdateSucceeded { requested, stored } => {
                // A newer local edit made while the write was in flight wins.
                let counter = if state.counter == Some(requested) {
                    Some(stored)
                } else {
                    state.counter
                };
                CounterState {
                    counter,
                    updates_in_flight: state.updates_in_flight.saturating_sub(1),
                    ..state
                }
            }
            CounterIntent::UpdateFailed { message } => CounterState {
                updates_in_flight: state.updates_in_flight.saturating_sub(1),
                last_error: Some(message),
                ..state
            },
        }
    }
}
