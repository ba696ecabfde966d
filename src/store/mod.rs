//! Bounded counter store.
//!
//! Holds one or more named integer channels and applies deltas to them,
//! clamping each result to the channel's inclusive bounds. Every operation
//! is a pure function of its inputs: snapshots are values owned by the
//! caller, and there is no global state.

mod channel;
mod error;
mod reducer;
mod state;

pub use channel::{Bounds, Channel, ChannelSpec, COLOR_MAX, COLOR_MIN};
pub use error::StoreError;
pub use reducer::{StoreIntent, StoreReducer};
pub use state::CounterState;

/// Create a snapshot with one channel per descriptor.
pub fn initialize<I>(specs: I) -> Result<CounterState, StoreError>
where
    I: IntoIterator<Item = ChannelSpec>,
{
    CounterState::initialize(specs)
}

/// Apply `delta` to the named (or sole) channel, returning a new snapshot.
pub fn apply(
    state: &CounterState,
    channel: Option<&str>,
    delta: i64,
) -> Result<CounterState, StoreError> {
    state.apply(channel, delta)
}

/// Read the named (or sole) channel.
pub fn read(state: &CounterState, channel: Option<&str>) -> Result<i64, StoreError> {
    state.read(channel)
}
