/// Marker for values fed to a [`Reducer`](super::Reducer): key actions and
/// store results alike.
pub trait Intent: Send + 'static {}
