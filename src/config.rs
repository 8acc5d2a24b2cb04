use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

use crate::account::Address;
use crate::builtins::SaveUserName;
use crate::error::BuiltinError;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct BuiltinsConfig {
    #[serde(default)]
    pub username: UserNameConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct UserNameConfig {
    #[serde(default = "default_gas_cost")]
    pub gas_cost: u64,
    #[serde(default)]
    pub enable_change: bool,
    /// Hex-encoded DNS contract addresses
    #[serde(default)]
    pub dns_addresses: Vec<String>,
}

fn default_gas_cost() -> u64 {
    1_000_000
}

impl Default for UserNameConfig {
    fn default() -> Self {
        Self {
            gas_cost: default_gas_cost(),
            enable_change: false,
            dns_addresses: vec![],
        }
    }
}

impl BuiltinsConfig {
    pub fn from_toml(s: &str) -> Result<Self, BuiltinError> {
        toml::from_str(s).map_err(|e| BuiltinError::Configuration(format!("parse: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String, BuiltinError> {
        toml::to_string_pretty(self)
            .map_err(|e| BuiltinError::Configuration(format!("serialize: {}", e)))
    }

    /// Read and parse a config file, failing on any error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BuiltinError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            BuiltinError::Configuration(format!("read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&s)?;
        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Load the config, falling back to defaults. A missing file is created.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.exists() {
            match Self::load(path) {
                Ok(config) => config,
                Err(e) => {
                    warn!("{}. Using defaults.", e);
                    Self::default()
                }
            }
        } else {
            info!("Config file not found at '{}'. Creating default.", path.display());
            let config = Self::default();
            if let Err(e) = config.save(path) {
                warn!("Could not write default config: {}", e);
            }
            config
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), BuiltinError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml()?).map_err(|e| {
            BuiltinError::Configuration(format!("write {}: {}", path.display(), e))
        })
    }

    pub fn dns_addresses(&self) -> Result<HashSet<Address>, BuiltinError> {
        self.username
            .dns_addresses
            .iter()
            .map(|a| {
                hex::decode(a.trim()).map_err(|e| {
                    BuiltinError::Configuration(format!("invalid DNS address {}: {}", a, e))
                })
            })
            .collect()
    }

    pub fn build_save_user_name(&self) -> Result<SaveUserName, BuiltinError> {
        let dns_addresses = self.dns_addresses()?;
        SaveUserName::new(
            self.username.gas_cost,
            Some(&dns_addresses),
            self.username.enable_change,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = BuiltinsConfig::from_toml(
            r#"
            [username]
            gas_cost = 500
            enable_change = true
            dns_addresses = ["aabb", "ccdd"]
            "#,
        )
        .unwrap();

        assert_eq!(config.username.gas_cost, 500);
        assert!(config.username.enable_change);

        let function = config.build_save_user_name().unwrap();
        assert_eq!(function.gas_cost(), 500);
        assert!(function.enable_change());
        assert!(function.dns_addresses().contains(&[0xaa, 0xbb]));
        assert!(function.dns_addresses().contains(&[0xcc, 0xdd]));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = BuiltinsConfig::from_toml("").unwrap();
        assert_eq!(config, BuiltinsConfig::default());
        assert_eq!(config.username.gas_cost, 1_000_000);
        assert!(!config.username.enable_change);
    }

    #[test]
    fn test_bad_dns_address() {
        let config = BuiltinsConfig::from_toml("[username]\ndns_addresses = [\"xyz\"]").unwrap();
        assert!(matches!(
            config.build_save_user_name(),
            Err(BuiltinError::Configuration(_))
        ));
    }

    #[test]
    fn test_bad_toml() {
        assert!(BuiltinsConfig::from_toml("[username\n").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("builtins.toml");

        let mut config = BuiltinsConfig::default();
        config.username.dns_addresses.push("0102".to_string());
        config.save(&path).unwrap();

        assert_eq!(BuiltinsConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_default_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let config = BuiltinsConfig::load_or_default(&path);
        assert_eq!(config, BuiltinsConfig::default());
        assert!(path.exists());
        assert!(BuiltinsConfig::load(&path).is_ok());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(BuiltinsConfig::load(dir.path().join("nope.toml")).is_err());
    }
}
