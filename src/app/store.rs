use crate::domain::Counter;

/// The narrow view of application state that use cases work through.
///
/// Implementations own the counter. Use cases read it, request a local
/// change, and later request that a value be persisted; they never hold on
/// to the counter themselves.
pub trait CounterStore: Send + Sync {
    /// Current counter, or `None` before the first load.
    fn counter(&self) -> Option<Counter>;

    fn is_loading(&self) -> bool {
        false
    }

    fn is_updating(&self) -> bool {
        false
    }

    /// Replace the local value immediately.
    fn set_counter(&self, counter: Counter);

    /// Ask for `counter` to be persisted remotely.
    ///
    /// Returns at once. The implementation runs the write in the background,
    /// refreshes local state from the answer, and handles any failure.
    fn update_counter(&self, counter: Counter);
}
