//! Channels and their bounds.

use std::fmt;

use serde::Serialize;

/// Lower bound used by color channels.
pub const COLOR_MIN: i64 = 0;
/// Upper bound used by color channels.
pub const COLOR_MAX: i64 = 255;

/// Inclusive range a channel value must stay within.
///
/// `None` on either side means unbounded in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Bounds {
    /// Bounded on both sides, `[min, max]`.
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// `[0, 255]`, the legal range of a color intensity.
    pub fn color() -> Self {
        Self::new(COLOR_MIN, COLOR_MAX)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Check whether `value` lies within the range.
    ///
    /// Always false when `min > max`, since no value can satisfy both.
    pub fn contains(&self, value: i64) -> bool {
        self.min.map_or(true, |min| min <= value) && self.max.map_or(true, |max| value <= max)
    }

    /// Absorb `value` at the nearest bound.
    pub fn clamp(&self, value: i64) -> i64 {
        let value = match self.max {
            Some(max) => value.min(max),
            None => value,
        };
        match self.min {
            Some(min) => value.max(min),
            None => value,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.min {
            Some(min) => write!(f, "[{}, ", min)?,
            None => f.write_str("[-inf, ")?,
        }
        match self.max {
            Some(max) => write!(f, "{}]", max),
            None => f.write_str("+inf]"),
        }
    }
}

/// Descriptor used to build a channel in [`initialize`](crate::store::initialize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSpec {
    pub name: String,
    pub initial: i64,
    pub bounds: Bounds,
}

impl ChannelSpec {
    pub fn new(name: impl Into<String>, initial: i64, bounds: Bounds) -> Self {
        Self {
            name: name.into(),
            initial,
            bounds,
        }
    }

    pub fn bounded(name: impl Into<String>, initial: i64, min: i64, max: i64) -> Self {
        Self::new(name, initial, Bounds::new(min, max))
    }

    pub fn unbounded(name: impl Into<String>, initial: i64) -> Self {
        Self::new(name, initial, Bounds::unbounded())
    }
}

/// A named integer value inside a [`CounterState`](crate::store::CounterState).
///
/// Channels are only created by `initialize`, so a bounded channel's value
/// is always inside its bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Channel {
    name: String,
    value: i64,
    bounds: Bounds,
}

impl Channel {
    pub(crate) fn from_spec(spec: ChannelSpec) -> Self {
        Self {
            name: spec.name,
            value: spec.initial,
            bounds: spec.bounds,
        }
    }

    /// Copy of this channel holding `value`.
    pub(crate) fn with_value(&self, value: i64) -> Self {
        Self {
            name: self.name.clone(),
            value,
            bounds: self.bounds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}
