//! Square screen: three RGB counters feeding a live color preview.
//!
//! Each color has an Increase and a Decrease button that move the channel
//! by a fixed step. Values are clamped to the channel bounds, so the
//! preview never leaves the legal intensity range.

mod intent;
mod reducer;
mod state;

pub use intent::MixerIntent;
pub use reducer::MixerReducer;
pub use state::{MixerState, DEFAULT_COLOR_STEP};
