/// Marker for reducer-owned UI state.
///
/// `Default` lets callers `std::mem::take` the state into the reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
