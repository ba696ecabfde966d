use serde::Serialize;

use crate::mvi::UiState;
use crate::store::{Channel, ChannelSpec, CounterState, StoreError};

/// Name of the counter screen's only channel.
pub const COUNT_CHANNEL: &str = "count";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterScreenState {
    /// Amount added or removed per button press.
    pub step: i64,
    pub counter: CounterState,
}

impl UiState for CounterScreenState {}

impl CounterScreenState {
    /// Fresh screen with the counter at 0. `step` must be positive.
    pub fn new(step: i64) -> Result<Self, StoreError> {
        if step <= 0 {
            return Err(StoreError::InvalidStep { step });
        }
        let counter = CounterState::initialize([ChannelSpec::unbounded(COUNT_CHANNEL, 0)])?;
        Ok(Self { step, counter })
    }

    pub fn value(&self) -> i64 {
        self.counter.get(COUNT_CHANNEL).map_or(0, Channel::value)
    }

    /// Text rendered under the buttons.
    pub fn caption(&self) -> String {
        format!("Current Counter {}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_at_zero() {
        let state = CounterScreenState::new(1).unwrap();
        assert_eq!(state.value(), 0);
        assert_eq!(state.counter.len(), 1);
    }

    #[test]
    fn new_rejects_non_positive_step() {
        assert_eq!(
            CounterScreenState::new(0).unwrap_err(),
            StoreError::InvalidStep { step: 0 }
        );
        assert_eq!(
            CounterScreenState::new(-5).unwrap_err(),
            StoreError::InvalidStep { step: -5 }
        );
        assert!(CounterScreenState::new(i64::MIN).is_err());
    }

    #[test]
    fn caption_shows_value() {
        let state = CounterScreenState::new(1).unwrap();
        assert_eq!(state.caption(), "Current Counter 0");
    }
}
