//! Process configuration loaded from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `BRIGHTID_NODE_URL` | [`DEFAULT_NODE_URL`] |
//! | `BRIGHTID_APP` | [`DEFAULT_APP`] |
//! | `BRIGHTID_TIMEOUT_SECS` | 30 |
//! | `BRIGHTID_PRIVATE_KEY` | unset (sponsorship disabled) |
//!
//! The private key is decoded here, once, so a bad secret fails at startup.

use std::time::Duration;

use crate::error::ConfigError;
use crate::network::{DEFAULT_APP, DEFAULT_NODE_URL};
use crate::signing::SigningKeyMaterial;

pub const ENV_NODE_URL: &str = "BRIGHTID_NODE_URL";
pub const ENV_APP: &str = "BRIGHTID_APP";
pub const ENV_TIMEOUT_SECS: &str = "BRIGHTID_TIMEOUT_SECS";
pub const ENV_PRIVATE_KEY: &str = "BRIGHTID_PRIVATE_KEY";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub struct BrightIdConfig {
    pub node_url: String,
    pub app: String,
    pub timeout: Duration,
    pub signing_key: Option<SigningKeyMaterial>,
}

impl Default for BrightIdConfig {
    fn default() -> Self {
        Self {
            node_url: DEFAULT_NODE_URL.to_string(),
            app: DEFAULT_APP.to_string(),
            timeout: DEFAULT_TIMEOUT,
            signing_key: None,
        }
    }
}

impl BrightIdConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_NODE_URL) {
            config.node_url = url;
        }
        if let Some(app) = get(ENV_APP) {
            config.app = app;
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: ENV_TIMEOUT_SECS,
                    reason: e.to_string(),
                }
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secret) = get(ENV_PRIVATE_KEY) {
            let key = SigningKeyMaterial::from_base64(&secret).map_err(|source| {
                ConfigError::InvalidKey {
                    key: ENV_PRIVATE_KEY,
                    source,
                }
            })?;
            config.signing_key = Some(key);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BrightIdConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.node_url, DEFAULT_NODE_URL);
        assert_eq!(config.app, "Gitcoin");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.signing_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let secret = SigningKeyMaterial::from_bytes(&[8u8; 32])
            .unwrap()
            .export_secret_base64();
        let config = BrightIdConfig::from_lookup(lookup(&[
            (ENV_NODE_URL, "http://localhost:3000/node/v5"),
            (ENV_APP, "TestApp"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_PRIVATE_KEY, secret.as_str()),
        ]))
        .unwrap();
        assert_eq!(config.node_url, "http://localhost:3000/node/v5");
        assert_eq!(config.app, "TestApp");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.signing_key.is_some());
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = BrightIdConfig::from_lookup(lookup(&[(ENV_APP, ""), (ENV_PRIVATE_KEY, "  ")])).unwrap();
        assert_eq!(config.app, "Gitcoin");
        assert!(config.signing_key.is_none());
    }

    #[test]
    fn test_invalid_key_fails_fast() {
        let err = BrightIdConfig::from_lookup(lookup(&[(ENV_PRIVATE_KEY, "c2hvcnQ=")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKey { key: ENV_PRIVATE_KEY, .. }));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = BrightIdConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_TIMEOUT_SECS, .. }));
    }
}
