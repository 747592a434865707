/// Marker trait for store state.
///
/// States are cloned out to readers, compared to detect changes and
/// start from `Default` before anything has been loaded.
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}
