use crate::mvi::Intent;
use crate::screens::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteIntent {
    AddColor(Rgb),
}

impl Intent for PaletteIntent {}
