/// Marker trait for intent objects.
///
/// Intents represent local edits requested by a use case and the
/// lifecycle events of async work (a fetch starting, an update failing).
/// They are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
