use thiserror::Error;

use crate::store::channel::Bounds;

/// Errors raised by the counter store.
///
/// Delta application itself never fails: out-of-range results are clamped.
/// Every variant below indicates a caller bug, not a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Initial value {value} for channel '{name}' is outside {bounds}")]
    InvalidInitialValue {
        name: String,
        value: i64,
        bounds: Bounds,
    },

    #[error("Unknown channel '{}'", .name.as_deref().unwrap_or("<unnamed>"))]
    UnknownChannel { name: Option<String> },

    #[error("Channel '{name}' is declared more than once")]
    DuplicateChannel { name: String },

    #[error("Step must be positive, got {step}")]
    InvalidStep { step: i64 },

    #[error("Color bounds {bounds} must be ordered and lie within [0, 255]")]
    InvalidColorBounds { bounds: Bounds },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_channel_message_names_channel() {
        let err = StoreError::UnknownChannel {
            name: Some("purple".to_string()),
        };
        assert_eq!(err.to_string(), "Unknown channel 'purple'");
    }

    #[test]
    fn unknown_unnamed_channel_message() {
        let err = StoreError::UnknownChannel { name: None };
        assert_eq!(err.to_string(), "Unknown channel '<unnamed>'");
    }

    #[test]
    fn invalid_color_bounds_message_shows_bounds() {
        let err = StoreError::InvalidColorBounds {
            bounds: Bounds::unbounded(),
        };
        assert_eq!(
            err.to_string(),
            "Color bounds [-inf, +inf] must be ordered and lie within [0, 255]"
        );
    }

    #[test]
    fn invalid_initial_value_message_shows_bounds() {
        let err = StoreError::InvalidInitialValue {
            name: "red".to_string(),
            value: 300,
            bounds: Bounds::new(0, 255),
        };
        assert_eq!(
            err.to_string(),
            "Initial value 300 for channel 'red' is outside [0, 255]"
        );
    }
}
