//! Base trait for intents (user actions).

/// Marker trait for intent objects.
///
/// Intents are the only way a screen's state moves forward. They are
/// consumed by a [`Reducer`](super::Reducer).
pub trait Intent: Send + 'static {}
