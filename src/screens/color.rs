//! Color primitives shared by the mixer and palette screens.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::store::{COLOR_MAX, COLOR_MIN};

/// One of the three mixable color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Channel name used in the counter store.
    pub fn channel(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }

    /// Capitalized label, as shown next to the buttons.
    pub fn label(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown color '{0}' (expected red, green or blue)")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Color::Red),
            "green" | "g" => Ok(Color::Green),
            "blue" | "b" => Ok(Color::Blue),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

/// Which of the two buttons was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    /// Signed delta for a button press of magnitude `step`.
    pub fn delta(self, step: i64) -> i64 {
        match self {
            Direction::Increase => step,
            Direction::Decrease => step.saturating_neg(),
        }
    }
}

/// A composed color. Displays as `rgb(r, g, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Draw each component uniformly from `0..=255`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            red: rng.gen(),
            green: rng.gen(),
            blue: rng.gen(),
        }
    }

    /// Build from channel values, absorbing anything outside `[0, 255]`.
    pub fn from_channels(red: i64, green: i64, blue: i64) -> Self {
        Self {
            red: to_intensity(red),
            green: to_intensity(green),
            blue: to_intensity(blue),
        }
    }

    pub fn component(&self, color: Color) -> u8 {
        match color {
            Color::Red => self.red,
            Color::Green => self.green,
            Color::Blue => self.blue,
        }
    }
}

fn to_intensity(value: i64) -> u8 {
    u8::try_from(value.clamp(COLOR_MIN, COLOR_MAX)).unwrap_or(u8::MAX)
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}
