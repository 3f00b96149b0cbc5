//! Terminal output for logtally
//!
//! This crate renders the level count table and the filtered record lines,
//! colored according to a small TOML display configuration.

pub mod config;
pub mod render;
pub mod theme;

pub use config::{ColorConfig, Config, ConfigError, DisplayConfig};
pub use render::{CountTable, render_record};
pub use theme::{Theme, parse_color};
