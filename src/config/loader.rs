use std::{fs, fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment, FileFormat};
use log::{debug, info};

use crate::config::SwaggifyConfig;

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "swaggify.toml";

/// Prefix of environment variables overriding configuration keys.
const ENV_PREFIX: &str = "SWAGGIFY";

pub fn get_default_config() -> &'static str {
    include_str!("../../config/swaggify.toml")
}

/// Loads configuration from `path` (optional) layered under `SWAGGIFY_*` environment variables.
///
/// A missing file is not an error: defaults apply to every key it would have set.
pub fn load_configuration(path: &Path) -> Result<SwaggifyConfig> {
    let filename = path.to_str().context("Invalid config file path")?;

    if path.exists() {
        info!(path:% = path.display(); "Loading configuration");
    } else {
        debug!(path:% = path.display(); "No configuration file, using defaults");
    }

    let cfg = Config::builder()
        .add_source(config::File::new(filename, FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__"))
        .build()
        .context("Could not build configuration")?;

    cfg.try_deserialize::<SwaggifyConfig>()
        .context("Invalid configuration")
}

pub fn write_config_to(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    };

    let mut file = File::create(path).context("Failed to create config file")?;
    file.write_all(source.as_bytes())
        .context("Failed to write config content")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_matches_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("swaggify.toml");
        write_config_to(&path, get_default_config()).unwrap();

        let config = load_configuration(&path).unwrap();
        assert_eq!(config.swagger_definition_file, PathBuf::from("./swagger/swagger.json"));
        assert_eq!(config.info.version, "1.0.0");
    }

    #[test]
    fn test_file_values_are_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        write_config_to(
            &path,
            "swagger_definition_file = \"docs/openapi.json\"\n\n[info]\nversion = \"3.1.4\"\n",
        )
        .unwrap();

        let config = load_configuration(&path).unwrap();
        assert_eq!(config.swagger_definition_file, PathBuf::from("docs/openapi.json"));
        assert_eq!(config.info.version, "3.1.4");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config = load_configuration(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.swagger_definition_file, PathBuf::from("./swagger/swagger.json"));
    }

    #[test]
    fn test_write_config_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("swaggify.toml");
        write_config_to(&path, get_default_config()).unwrap();
        assert!(path.exists());
    }
}
