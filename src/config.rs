use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BxError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: DefaultsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Profile fields applied when the CLI does not pass them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub visa_status: String,
    #[serde(default = "default_true")]
    pub remote_ok: bool,
    #[serde(default = "default_employment_types")]
    pub employment_types: Vec<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            location: String::new(),
            visa_status: String::new(),
            remote_ok: true,
            employment_types: default_employment_types(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// "human" or "json".
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: true,
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("BX_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let path = dirs::config_dir()
            .ok_or_else(|| BxError::MissingConfig("config directory not found".to_string()))?
            .join("bx/config.toml");
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| BxError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| BxError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.defaults {
            self.defaults.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(value) = env_string("BX_DEFAULT_LOCATION") {
            self.defaults.location = value;
        }
        if let Some(value) = env_string("BX_DEFAULT_VISA") {
            self.defaults.visa_status = value;
        }
        if let Some(value) = env_bool("BX_REMOTE_OK") {
            self.defaults.remote_ok = value;
        }
        if let Some(values) = env_list("BX_EMPLOYMENT_TYPES") {
            self.defaults.employment_types = values;
        }
        if let Some(value) = env_string("BX_OUTPUT_FORMAT") {
            self.output.format = value;
        }
        if let Some(value) = env_bool("BX_COLOR") {
            self.output.color = value;
        }
    }
}

impl DefaultsConfig {
    fn merge(&mut self, patch: DefaultsPatch) {
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(visa_status) = patch.visa_status {
            self.visa_status = visa_status;
        }
        if let Some(remote_ok) = patch.remote_ok {
            self.remote_ok = remote_ok;
        }
        if let Some(employment_types) = patch.employment_types {
            self.employment_types = employment_types;
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(format) = patch.format {
            self.format = format;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    defaults: Option<DefaultsPatch>,
    output: Option<OutputPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct DefaultsPatch {
    location: Option<String>,
    visa_status: Option<String>,
    remote_ok: Option<bool>,
    employment_types: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputPatch {
    format: Option<String>,
    color: Option<bool>,
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_bool(name: &str) -> Option<bool> {
    env_string(name).map(|v| matches!(v.as_str(), "1" | "true" | "yes" | "on"))
}

fn env_list(name: &str) -> Option<Vec<String>> {
    env_string(name).map(|v| {
        v.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    })
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "human".to_string()
}

fn default_employment_types() -> Vec<String> {
    vec!["C2C".to_string()]
}
