use counter_sync::domain::Counter;
use counter_sync::store::mvi::Reducer;
use counter_sync::store::{CounterIntent, CounterReducer, CounterState};

fn loaded(value: u32) -> CounterState {
    CounterState {
        counter: Some(Counter::new(value)),
        ..CounterState::default()
    }
}

#[test]
fn default_state_is_not_loaded() {
    let state = CounterState::default();
    assert_eq!(state.counter, None);
    assert!(!state.is_loading);
    assert!(!state.is_updating());
    assert!(!state.can_decrement());
    assert!(state.is_settled());
}

#[test]
fn fetch_started_sets_loading_and_clears_error() {
    let state = CounterState {
        last_error: Some("old".to_string()),
        ..CounterState::default()
    };
    let state = CounterReducer::reduce(state, CounterIntent::FetchStarted);
    assert!(state.is_loading);
    assert_eq!(state.last_error, None);
    assert!(!state.is_settled());
}

#[test]
fn fetch_succeeded_stores_counter() {
    let state = CounterReducer::reduce(CounterState::default(), CounterIntent::FetchStarted);
    let state = CounterReducer::reduce(
        state,
        CounterIntent::FetchSucceeded {
            counter: Counter::new(3),
        },
    );
    assert_eq!(state.counter, Some(Counter::new(3)));
    assert!(!state.is_loading);
    assert!(state.can_decrement());
}

#[test]
fn fetch_failed_keeps_previous_counter() {
    let state = CounterReducer::reduce(loaded(2), CounterIntent::FetchStarted);
    let state = CounterReducer::reduce(
        state,
        CounterIntent::FetchFailed {
            message: "offline".to_string(),
        },
    );
    assert_eq!(state.counter, Some(Counter::new(2)));
    assert!(!state.is_loading);
    assert_eq!(state.last_error.as_deref(), Some("offline"));
}

#[test]
fn set_replaces_counter_without_touching_flags() {
    let state = CounterReducer::reduce(loaded(1), CounterIntent::UpdateStarted);
    let state = CounterReducer::reduce(
        state,
        CounterIntent::Set {
            counter: Counter::new(9),
        },
    );
    assert_eq!(state.counter, Some(Counter::new(9)));
    assert!(state.is_updating());
}

#[test]
fn set_zero_disables_decrement() {
    let state = CounterReducer::reduce(
        loaded(1),
        CounterIntent::Set {
            counter: Counter::new(0),
        },
    );
    assert!(!state.can_decrement());
}

#[test]
fn overlapping_updates_stay_updating_until_all_finish() {
    let state = CounterReducer::reduce(loaded(2), CounterIntent::UpdateStarted);
    let state = CounterReducer::reduce(state, CounterIntent::UpdateStarted);
    assert_eq!(state.updates_in_flight, 2);

    let state = CounterReducer::reduce(
        state,
        CounterIntent::UpdateSucceeded {
            requested: Counter::new(1),
            stored: Counter::new(1),
        },
    );
    assert!(state.is_updating());
    assert_eq!(state.counter, Some(Counter::new(2)));

    let state = CounterReducer::reduce(
        state,
        CounterIntent::UpdateSucceeded {
            requested: Counter::new(2),
            stored: Counter::new(2),
        },
    );
    assert!(!state.is_updating());
    assert_eq!(state.counter, Some(Counter::new(2)));
}

#[test]
fn update_succeeded_adopts_server_value_when_local_unchanged() {
    let state = CounterReducer::reduce(loaded(5), CounterIntent::UpdateStarted);
    let state = CounterReducer::reduce(
        state,
        CounterIntent::UpdateSucceeded {
            requested: Counter::new(5),
            stored: Counter::new(4),
        },
    );
    assert_eq!(state.counter, Some(Counter::new(4)));
}

#[test]
fn stale_update_reply_does_not_overwrite_newer_local_edit() {
    let state = CounterReducer::reduce(loaded(1), CounterIntent::UpdateStarted);
    let state = CounterReducer::reduce(
        state,
        CounterIntent::Set {
            counter: Counter::new(2),
        },
    );
    let state = CounterReducer::reduce(
        state,
        CounterIntent::UpdateSucceeded {
            requested: Counter::new(1),
            stored: Counter::new(1),
        },
    );
    assert_eq!(state.counter, Some(Counter::new(2)));
    assert!(!state.is_updating());
}

#[test]
fn update_failed_records_error_and_keeps_local_value() {
    let state = CounterReducer::reduce(loaded(5), CounterIntent::UpdateStarted);
    let state = CounterReducer::reduce(
        state,
        CounterIntent::UpdateFailed {
            message: "503".to_string(),
        },
    );
    assert_eq!(state.counter, Some(Counter::new(5)));
    assert!(!state.is_updating());
    assert_eq!(state.last_error.as_deref(), Some("503"));
}

#[test]
fn stray_completion_does_not_underflow() {
    let state = CounterReducer::reduce(
        loaded(1),
        CounterIntent::UpdateFailed {
            message: "late".to_string(),
        },
    );
    assert_eq!(state.updates_in_flight, 0);
}
