pub mod kv_console_encoder;

use std::path::Path;

use log::{debug, info};
use log4rs::{
    Config,
    config::{Deserializers, RawConfig},
};

use crate::log::kv_console_encoder::KvConsoleEncoderDeserializer;

/// Logging configuration file picked up from the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Encoder `kind` for the key-value console encoder in log4rs configuration.
pub const KV_CONSOLE_ENCODER_KIND: &str = "kv_console";

const EMBEDDED_CONFIG: &str = include_str!("../../resources/default_log4rs.yml");

fn deserializers() -> Deserializers {
    let mut deserializers = Deserializers::default();
    deserializers.insert(KV_CONSOLE_ENCODER_KIND, KvConsoleEncoderDeserializer);
    deserializers
}

/// Initializes logging from `log4rs.yml` if present, otherwise from the embedded defaults.
pub fn init_logging() -> anyhow::Result<()> {
    let path = Path::new(LOG_CONFIG_FILE);

    if path.exists() {
        log4rs::init_file(path, deserializers())?;
        info!(path = LOG_CONFIG_FILE; "Logging initialized from external configuration");
        return Ok(());
    }

    let config = embedded_config()?;
    log4rs::init_config(config)?;

    debug!("Logging initialized from embedded defaults (no external log4rs.yml found)");
    Ok(())
}

fn embedded_config() -> anyhow::Result<Config> {
    let raw_config: RawConfig = serde_yaml::from_str(EMBEDDED_CONFIG)?;

    let (appenders, errors) = raw_config.appenders_lossy(&deserializers());
    if !errors.is_empty() {
        anyhow::bail!("Errors parsing embedded appenders: {:?}", errors);
    }

    Ok(Config::builder()
        .appenders(appenders)
        .loggers(raw_config.loggers())
        .build(raw_config.root())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_builds() {
        embedded_config().unwrap();
    }

    #[test]
    fn test_embedded_config_uses_registered_encoder() {
        let raw: serde_yaml::Value = serde_yaml::from_str(EMBEDDED_CONFIG).unwrap();
        let kind = &raw["appenders"]["console"]["encoder"]["kind"];
        assert_eq!(kind.as_str(), Some(KV_CONSOLE_ENCODER_KIND));
    }
}
