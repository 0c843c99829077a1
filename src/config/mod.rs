//! Configuration for tfprompt.
//!
//! This module defines the Config struct that represents `tfprompt.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::Config;
pub use operations::{CONFIG_ENV, DEFAULT_CONFIG_FILE};
