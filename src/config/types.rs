use serde::{Deserialize, Serialize};

use crate::screens::square::DEFAULT_COLOR_STEP;
use crate::store::{Bounds, COLOR_MAX, COLOR_MIN};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub square: SquareConfig,
}

/// Settings for the counter screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Amount per Increase/Decrease press (default: 1).
    #[serde(default = "default_counter_step")]
    pub step: i64,
}

/// Settings for the RGB mixer screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareConfig {
    /// Amount per button press (default: 15).
    #[serde(default = "default_color_step")]
    pub step: i64,
    /// Lowest channel value (default: 0).
    #[serde(default = "default_color_min")]
    pub min: i64,
    /// Highest channel value (default: 255).
    #[serde(default = "default_color_max")]
    pub max: i64,
}

impl SquareConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min, self.max)
    }
}

fn default_counter_step() -> i64 {
    1
}

fn default_color_step() -> i64 {
    DEFAULT_COLOR_STEP
}

fn default_color_min() -> i64 {
    COLOR_MIN
}

fn default_color_max() -> i64 {
    COLOR_MAX
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            step: default_counter_step(),
        }
    }
}

impl Default for SquareConfig {
    fn default() -> Self {
        Self {
            step: default_color_step(),
            min: default_color_min(),
            max: default_color_max(),
        }
    }
}
