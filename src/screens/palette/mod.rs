//! Color screen: an "Add a Color" button appending random swatches.
//!
//! The reducer stays pure; callers draw the color with [`Rgb::random`]
//! and dispatch it.
//!
//! [`Rgb::random`]: crate::screens::Rgb::random

mod intent;
mod reducer;
mod state;

pub use intent::PaletteIntent;
pub use reducer::PaletteReducer;
pub use state::PaletteState;
