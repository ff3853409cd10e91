// src/config/mod.rs
//! Configuration system for cyphergrid
//!
//! Built-in defaults, overlaid by an optional TOML file, overlaid by env vars.

pub use app::{load, AlphabetSettings, Config, KeySettings};

mod app;
mod defaults;
