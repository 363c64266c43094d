// tooling/cyclops-core/src/config.rs
//
// `.cyclops.toml`. Every field has a default, so a partial file (or none at
// all) yields a usable configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const CONFIG_FILE_NAME: &str = ".cyclops.toml";
pub const DEFAULT_MAX_COMPLEXITY: u32 = 6;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CyclopsConfig {
    #[serde(default = "default_ignore_paths")]
    pub ignore_paths: Vec<String>,
    #[serde(default)]
    pub cyclomatic_complexity: CyclomaticConfig,
    #[serde(default)]
    pub ascii_identifiers: AsciiIdentifiersConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CyclomaticConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_max", alias = "Max")]
    pub max: u32,
    /// Method names never reported.
    #[serde(default)]
    pub allowed_methods: Vec<String>,
    /// Regexes over method names never reported.
    #[serde(default)]
    pub allowed_patterns: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AsciiIdentifiersConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_ignore_paths() -> Vec<String> {
    vec!["target".to_string(), ".git".to_string()]
}

fn default_enabled() -> bool {
    true
}

fn default_max() -> u32 {
    DEFAULT_MAX_COMPLEXITY
}

impl Default for CyclopsConfig {
    fn default() -> Self {
        Self {
            ignore_paths: default_ignore_paths(),
            cyclomatic_complexity: CyclomaticConfig::default(),
            ascii_identifiers: AsciiIdentifiersConfig::default(),
        }
    }
}

impl Default for CyclomaticConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max: default_max(),
            allowed_methods: vec![],
            allowed_patterns: vec![],
        }
    }
}

impl Default for AsciiIdentifiersConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

impl CyclopsConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
