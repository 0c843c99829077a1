//! Config struct definition and default implementation.

use crate::prompt::Variant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration for tfprompt.
///
/// This struct represents the contents of `tfprompt.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Variant used when a command does not name one.
    pub default_variant: Variant,

    /// Default value for the `working_directory` slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,

    /// NDJSON file each successful render is appended to (disabled when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_log: Option<PathBuf>,

    /// Extra default slot values. Command-line values take precedence.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}
