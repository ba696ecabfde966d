//! Shared test utilities.

#![allow(dead_code)]

use colormix::store::{ChannelSpec, CounterState};
use std::path::PathBuf;
use tempfile::TempDir;

/// Three color channels at 0, bounded to `[0, 255]`.
pub fn rgb_state() -> CounterState {
    CounterState::initialize([
        ChannelSpec::bounded("red", 0, 0, 255),
        ChannelSpec::bounded("green", 0, 0, 255),
        ChannelSpec::bounded("blue", 0, 0, 255),
    ])
    .expect("rgb state should initialize")
}

/// Write `contents` to a config file inside a fresh temp dir.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, contents).expect("Failed to write config");
    (temp_dir, config_path)
}
