use serde::Serialize;

use crate::mvi::UiState;
use crate::screens::color::Rgb;

/// Swatches in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PaletteState {
    pub colors: Vec<Rgb>,
}

impl UiState for PaletteState {}

impl PaletteState {
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
