//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It
/// borrows the current snapshot and returns the next one, so every
/// earlier snapshot stays valid for the caller to inspect.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Error returned when an intent cannot be applied.
    type Error: std::error::Error;

    /// Process an intent and return the new state.
    ///
    /// Must be pure: no I/O, no shared state. On error the input
    /// snapshot is untouched, so there is nothing to roll back.
    fn reduce(state: &Self::State, intent: Self::Intent) -> Result<Self::State, Self::Error>;
}
