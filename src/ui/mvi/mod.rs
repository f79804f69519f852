//! Model-View-Intent primitives shared by the deck and form state.
//!
//! ```text
//! key / store event ──→ Intent ──→ Reducer ──→ State ──→ view model ──→ frame
//! ```
//!
//! Reducers are the only code that changes view state. Side effects
//! (network commands, speech) happen in `App` around a dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
