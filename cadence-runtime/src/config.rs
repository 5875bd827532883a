use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::RegistryError;
use crate::registry::ExecutionPolicy;

/// Typed view of the `registry` section of the application config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    /// Facade default used when a task does not name a policy.
    pub default_policy: Option<ExecutionPolicy>,
}

impl RegistrySettings {
    /// Extract the `registry` section; an absent section means all defaults.
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        match config.get::<RegistrySettings>("registry") {
            Ok(settings) => Ok(settings),
            Err(config::ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Load config from a specific TOML file
pub fn load_toml_config<P: AsRef<Path>>(path: P) -> Result<Config, RegistryError> {
    let config = Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .add_source(Environment::with_prefix("APP").separator("_"))
        .build()?;
    Ok(config)
}

/// Load config from a specific YAML file
pub fn load_yaml_config<P: AsRef<Path>>(path: P) -> Result<Config, RegistryError> {
    let config = Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Yaml))
        .add_source(Environment::with_prefix("APP").separator("_"))
        .build()?;
    Ok(config)
}

/// Resolve a `${key}` or `${key:default}` placeholder against the config;
/// anything else passes through unchanged.
pub fn resolve_config_value(value: &str, config: &Config) -> Result<String, RegistryError> {
    let Some(inner) = value.strip_prefix("${").and_then(|v| v.strip_suffix('}')) else {
        return Ok(value.to_string());
    };

    if let Some((key, default_value)) = inner.split_once(':') {
        match config.get_string(key) {
            Ok(resolved) => Ok(resolved),
            Err(_) => Ok(default_value.to_string()),
        }
    } else {
        config
            .get_string(inner)
            .map_err(|_| RegistryError::UnresolvedKey(inner.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(key: &str, value: &str) -> Config {
        Config::builder()
            .set_override(key, value)
            .and_then(|b| b.build())
            .unwrap()
    }

    #[test]
    fn literals_pass_through() {
        let config = Config::default();
        assert_eq!(resolve_config_value("500ms", &config).unwrap(), "500ms");
    }

    #[test]
    fn placeholders_resolve_from_config() {
        let config = config_with("app.period", "2s");
        assert_eq!(
            resolve_config_value("${app.period}", &config).unwrap(),
            "2s"
        );
    }

    #[test]
    fn missing_key_falls_back_to_default() {
        let config = Config::default();
        assert_eq!(
            resolve_config_value("${app.period:750ms}", &config).unwrap(),
            "750ms"
        );
    }

    #[test]
    fn missing_key_without_default_errors() {
        let config = Config::default();
        assert!(matches!(
            resolve_config_value("${app.period}", &config),
            Err(RegistryError::UnresolvedKey(key)) if key == "app.period"
        ));
    }
}
