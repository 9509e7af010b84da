use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod loader;

pub use loader::{DEFAULT_CONFIG_FILE, get_default_config, load_configuration, write_config_to};

/// Default location of the swagger document.
pub const DEFAULT_SWAGGER_DEFINITION_FILE: &str = "./swagger/swagger.json";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SwaggifyConfig {
    pub swagger_definition_file: PathBuf,
    pub info: DocumentInfo,
}

impl Default for SwaggifyConfig {
    fn default() -> Self {
        Self {
            swagger_definition_file: PathBuf::from(DEFAULT_SWAGGER_DEFINITION_FILE),
            info: DocumentInfo::default(),
        }
    }
}

/// `info` block of a newly created document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DocumentInfo {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            title: "API".to_string(),
            version: "1.0.0".to_string(),
            description: None,
        }
    }
}

/// Command line values that take precedence over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub swagger_definition_file: Option<PathBuf>,
    pub title: Option<String>,
    pub version: Option<String>,
}

impl SwaggifyConfig {
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(path) = &overrides.swagger_definition_file {
            self.swagger_definition_file = path.clone();
        }
        if let Some(title) = &overrides.title {
            self.info.title = title.clone();
        }
        if let Some(version) = &overrides.version {
            self.info.version = version.clone();
        }
    }
}
