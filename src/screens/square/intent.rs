use crate::mvi::Intent;
use crate::screens::color::{Color, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixerIntent {
    /// One of the six buttons was pressed.
    Change { color: Color, direction: Direction },
}

impl MixerIntent {
    pub fn increase(color: Color) -> Self {
        MixerIntent::Change {
            color,
            direction: Direction::Increase,
        }
    }

    pub fn decrease(color: Color) -> Self {
        MixerIntent::Change {
            color,
            direction: Direction::Decrease,
        }
    }
}

impl Intent for MixerIntent {}
