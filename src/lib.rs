//! Bounded counters and the screen models built on them.
//!
//! The [`store`] module is the core: immutable snapshots of named integer
//! channels, updated by clamped deltas. The [`screens`] module models the
//! counter, RGB mixer and palette screens as MVI reducers over it.

pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod screens;
pub mod store;
