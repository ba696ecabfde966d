use serde::Serialize;

use crate::mvi::UiState;
use crate::screens::color::{Color, Rgb};
use crate::store::{Bounds, Channel, ChannelSpec, CounterState, StoreError, COLOR_MAX, COLOR_MIN};

/// Channel change per button press.
pub const DEFAULT_COLOR_STEP: i64 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MixerState {
    pub step: i64,
    pub channels: CounterState,
}

impl UiState for MixerState {}

impl MixerState {
    /// Red, green and blue at 0, bounded to `[0, 255]`.
    pub fn new(step: i64) -> Result<Self, StoreError> {
        Self::with_bounds(step, Bounds::color())
    }

    /// Red, green and blue starting at the lower bound.
    ///
    /// `step` must be positive and `bounds` must pass [`MixerState::check_bounds`].
    pub fn with_bounds(step: i64, bounds: Bounds) -> Result<Self, StoreError> {
        if step <= 0 {
            return Err(StoreError::InvalidStep { step });
        }
        let initial = Self::check_bounds(bounds)?;
        let channels = CounterState::initialize(
            Color::ALL.map(|color| ChannelSpec::new(color.channel(), initial, bounds)),
        )?;
        Ok(Self { step, channels })
    }

    /// Bounds must be closed, ordered and inside `[0, 255]` so every channel
    /// value is a legal intensity. Returns the lower bound.
    pub fn check_bounds(bounds: Bounds) -> Result<i64, StoreError> {
        match (bounds.min, bounds.max) {
            (Some(min), Some(max)) if COLOR_MIN <= min && min <= max && max <= COLOR_MAX => {
                Ok(min)
            }
            _ => Err(StoreError::InvalidColorBounds { bounds }),
        }
    }

    pub fn value(&self, color: Color) -> i64 {
        self.channels.get(color.channel()).map_or(0, Channel::value)
    }

    /// Preview color composed from the three channels.
    pub fn rgb(&self) -> Rgb {
        Rgb::from_channels(
            self.value(Color::Red),
            self.value(Color::Green),
            self.value(Color::Blue),
        )
    }

    /// Label shown under each counter, e.g. `Red: 30`.
    pub fn caption(&self, color: Color) -> String {
        format!("{}: {}", color.label(), self.rgb().component(color))
    }
}
