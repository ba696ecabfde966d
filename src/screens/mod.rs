//! Presentation-free models of the demo screens.
//!
//! Each screen is a feature module in MVI layout:
//! - `state.rs` - Snapshot the view renders from
//! - `intent.rs` - Button presses the view can dispatch
//! - `reducer.rs` - State transitions (pure, no side effects)

pub mod color;
pub mod counter;
pub mod palette;
pub mod square;

pub use color::{Color, Direction, Rgb};
