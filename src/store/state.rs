//! Immutable counter snapshots.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace};

use crate::mvi::UiState;
use crate::store::channel::{Channel, ChannelSpec};
use crate::store::error::StoreError;

/// Complete state of a screen's counters at one point in time.
///
/// Channels keep their declaration order. A snapshot is never edited:
/// [`CounterState::apply`] borrows it and returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CounterState {
    channels: Vec<Channel>,
}

impl UiState for CounterState {}

impl CounterState {
    /// Build a snapshot with one channel per descriptor.
    ///
    /// Fails with [`StoreError::InvalidInitialValue`] when an initial value
    /// lies outside its own bounds and with [`StoreError::DuplicateChannel`]
    /// when two descriptors share a name.
    pub fn initialize<I>(specs: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = ChannelSpec>,
    {
        let mut seen = HashSet::new();
        let mut channels = Vec::new();

        for spec in specs {
            if !spec.bounds.contains(spec.initial) {
                return Err(StoreError::InvalidInitialValue {
                    name: spec.name,
                    value: spec.initial,
                    bounds: spec.bounds,
                });
            }
            if !seen.insert(spec.name.clone()) {
                return Err(StoreError::DuplicateChannel { name: spec.name });
            }
            channels.push(Channel::from_spec(spec));
        }

        debug!(channels = channels.len(), "Initialized counter state");
        Ok(Self { channels })
    }

    /// Apply `delta` to a channel and return the resulting snapshot.
    ///
    /// With `channel = None` the state must hold exactly one channel.
    /// Results that would cross a bound are absorbed at the bound.
    pub fn apply(&self, channel: Option<&str>, delta: i64) -> Result<Self, StoreError> {
        let index = self.position(channel)?;
        let target = &self.channels[index];

        let raw = target.value().saturating_add(delta);
        let clamped = target.bounds().clamp(raw);
        if clamped != raw {
            trace!(
                channel = target.name(),
                raw,
                clamped,
                "Clamped channel value"
            );
        }

        let channels = self
            .channels
            .iter()
            .enumerate()
            .map(|(i, c)| if i == index { c.with_value(clamped) } else { c.clone() })
            .collect();

        debug!(
            channel = target.name(),
            delta,
            from = target.value(),
            to = clamped,
            "Applied delta"
        );
        Ok(Self { channels })
    }

    /// Current value of the named channel (or the sole channel).
    pub fn read(&self, channel: Option<&str>) -> Result<i64, StoreError> {
        let index = self.position(channel)?;
        Ok(self.channels[index].value())
    }

    pub fn get(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name() == name)
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// `(name, value)` pairs in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.channels.iter().map(|c| (c.name(), c.value()))
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    fn position(&self, channel: Option<&str>) -> Result<usize, StoreError> {
        match channel {
            Some(name) => self
                .channels
                .iter()
                .position(|c| c.name() == name)
                .ok_or_else(|| StoreError::UnknownChannel {
                    name: Some(name.to_string()),
                }),
            None if self.channels.len() == 1 => Ok(0),
            None => Err(StoreError::UnknownChannel { name: None }),
        }
    }
}
