mod intent;
mod reducer;
mod state;

pub use intent::DeckIntent;
pub use reducer::DeckReducer;
pub use state::DeckState;
