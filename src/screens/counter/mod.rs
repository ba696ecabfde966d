//! Counter screen: a single unbounded counter with Increase/Decrease buttons.

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::{CounterScreenState, COUNT_CHANNEL};
