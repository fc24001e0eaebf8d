//! Configuration model for promptcraft.
//!
//! This module defines the Config struct loaded from `config.yaml`. It
//! supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;


pub use model::Config;
pub use operations::{CONFIG_ENV, default_config_path};
