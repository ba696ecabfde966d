//! Base trait for screen state.

use std::fmt::Debug;

/// Marker trait for state snapshots.
///
/// States should be:
/// - Immutable (a reducer returns a fresh value, never edits in place)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Debug + Send + 'static {}
