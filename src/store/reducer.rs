//! Reducer over raw counter snapshots.

use crate::mvi::{Intent, Reducer};
use crate::store::error::StoreError;
use crate::store::state::CounterState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreIntent {
    /// Add `delta` to a channel. `channel: None` targets the sole channel.
    Apply {
        channel: Option<String>,
        delta: i64,
    },
}

impl Intent for StoreIntent {}

/// Generic reducer used by the screen models.
pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = CounterState;
    type Intent = StoreIntent;
    type Error = StoreError;

    fn reduce(state: &Self::State, intent: Self::Intent) -> Result<Self::State, Self::Error> {
        match intent {
            StoreIntent::Apply { channel, delta } => state.apply(channel.as_deref(), delta),
        }
    }
}
