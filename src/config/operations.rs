//! Config loading, discovery, and validation.

use super::model::Config;
use crate::error::{PromptError, Result};
use crate::prompt::{RenderParameters, WORKING_DIRECTORY, is_system_slot};
use std::path::Path;

/// Config file picked up from the current directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "tfprompt.yaml";

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "TFPROMPT_CONFIG";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicitly named file must exist. Otherwise `tfprompt.yaml` in
    /// `dir` is used if present, and defaults apply if not.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| PromptError::UserError(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PromptError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `working_directory` and `render_log` must be non-empty when set
    /// - `params` keys must be non-empty and must not name a system slot
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.working_directory {
            if dir.trim().is_empty() {
                return Err(PromptError::UserError(
                    "config validation failed: working_directory must be non-empty".to_string(),
                ));
            }
        }

        if let Some(log) = &self.render_log {
            if log.as_os_str().is_empty() {
                return Err(PromptError::UserError(
                    "config validation failed: render_log must be non-empty".to_string(),
                ));
            }
        }

        for key in self.params.keys() {
            if key.trim().is_empty() {
                return Err(PromptError::UserError(
                    "config validation failed: params keys must be non-empty".to_string(),
                ));
            }
            if is_system_slot(key) {
                return Err(PromptError::UserError(format!(
                    "config validation failed: params cannot set '{}', it is computed at render time",
                    key
                )));
            }
        }

        Ok(())
    }

    /// Fill unset slots in `params` from the config defaults.
    pub fn apply_defaults(&self, params: &mut RenderParameters) {
        if let Some(dir) = &self.working_directory {
            params.insert_default(WORKING_DIRECTORY, dir.clone());
        }
        for (key, value) in &self.params {
            params.insert_default(key.clone(), value.clone());
        }
    }
}
