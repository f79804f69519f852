/// Marker for state owned by a reducer.
///
/// `Default` lets the owner `mem::take` the state while reducing;
/// `PartialEq` lets tests compare whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
