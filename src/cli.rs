//! Command-line driver: replays button presses against the screen models.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::Config;
use crate::mvi::Reducer;
use crate::screens::counter::{CounterIntent, CounterReducer, CounterScreenState};
use crate::screens::palette::{PaletteIntent, PaletteReducer, PaletteState};
use crate::screens::square::{MixerIntent, MixerReducer, MixerState};
use crate::screens::{Color, Direction, Rgb};

#[derive(Debug, Parser)]
#[command(name = "colormix", version, about = "Counter and color mixing screens")]
pub struct Cli {
    /// Path to a config file (default: ~/.config/colormix/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Press the counter's buttons: `inc`/`+` or `dec`/`-`
    Counter {
        #[arg(value_parser = parse_counter_press)]
        presses: Vec<CounterIntent>,
    },
    /// Press the RGB mixer's buttons, e.g. `red+` or `blue-`
    Square {
        #[arg(value_parser = parse_mixer_press)]
        presses: Vec<MixerIntent>,
    },
    /// Add random colors to the palette
    Palette {
        /// How many colors to add
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Seed for reproducible colors
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn parse_counter_press(s: &str) -> Result<CounterIntent, String> {
    match s.to_ascii_lowercase().as_str() {
        "inc" | "increase" | "+" => Ok(CounterIntent::Increment),
        "dec" | "decrease" | "-" => Ok(CounterIntent::Decrement),
        _ => Err(format!("'{}' is not a counter press (use inc or dec)", s)),
    }
}

pub fn parse_mixer_press(s: &str) -> Result<MixerIntent, String> {
    let (name, direction) = if let Some(name) = s.strip_suffix('+') {
        (name, Direction::Increase)
    } else if let Some(name) = s.strip_suffix('-') {
        (name, Direction::Decrease)
    } else {
        return Err(format!("'{}' must end with + or -", s));
    };

    let color: Color = name.parse().map_err(|e| format!("{}", e))?;
    Ok(MixerIntent::Change { color, direction })
}

/// Resolve the configuration for a run.
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}

/// Execute a command and return what should be printed.
pub fn run(cli: &Cli, config: &Config) -> Result<String> {
    match &cli.command {
        Command::Counter { presses } => {
            let state = presses.iter().try_fold(
                CounterScreenState::new(config.counter.step)?,
                |state, press| CounterReducer::reduce(&state, *press),
            )?;
            info!(value = state.value(), presses = presses.len(), "Counter done");

            if cli.json {
                return Ok(serde_json::to_string_pretty(&state)?);
            }
            Ok(state.caption())
        }
        Command::Square { presses } => {
            let initial = MixerState::with_bounds(config.square.step, config.square.bounds())?;
            let state = presses
                .iter()
                .try_fold(initial, |state, press| MixerReducer::reduce(&state, *press))?;
            info!(color = %state.rgb(), presses = presses.len(), "Mixer done");

            if cli.json {
                return Ok(serde_json::to_string_pretty(&state)?);
            }
            let mut lines: Vec<String> = Color::ALL.iter().map(|c| state.caption(*c)).collect();
            lines.push(state.rgb().to_string());
            Ok(lines.join("\n"))
        }
        Command::Palette { count, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };

            let mut state = PaletteState::default();
            for _ in 0..*count {
                let rgb = Rgb::random(&mut rng);
                state = PaletteReducer::reduce(&state, PaletteIntent::AddColor(rgb))?;
            }
            info!(colors = state.len(), "Palette done");

            if cli.json {
                return Ok(serde_json::to_string_pretty(&state)?);
            }
            let lines: Vec<String> = state.colors.iter().map(Rgb::to_string).collect();
            Ok(lines.join("\n"))
        }
    }
}
