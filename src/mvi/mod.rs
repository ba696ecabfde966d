//! Model-View-Intent (MVI) primitives.
//!
//! Every screen model in this crate follows the same unidirectional flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot, owned by the caller
//! - **Intent**: A discrete user action (a button press)
//! - **Reducer**: Pure function producing the next snapshot

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
