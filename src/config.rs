use std::fs;

use serde::Deserialize;

use crate::curler::DEFAULT_TIMEOUT_MS;
use crate::error::Result;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub providers: ProvidersConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Provider names to query; empty means all registered providers.
    pub enabled: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            enabled: Vec::new(),
        }
    }
}

impl Config {
    /// Loads `config.toml` from the working directory. A missing file is not
    /// an error; the defaults apply.
    pub fn load() -> Result<Self> {
        let config_path = "config.toml";
        match fs::read_to_string(config_path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_missing_sections() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.fetch.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.providers.enabled.is_empty());
    }

    #[test]
    fn partial_config_parses() {
        let config: Config = toml::from_str("[fetch]\ntimeout_ms = 2500\n").unwrap();
        assert_eq!(config.fetch.timeout_ms, 2500);
    }
}
