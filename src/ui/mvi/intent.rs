/// Marker for values a reducer consumes: key presses, clicks, fetch results.
pub trait Intent: Send + 'static {}
