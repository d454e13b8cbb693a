//! High-level client: `BrightIdClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared HTTP client and the signing codec.

use std::time::Duration;

use crate::config::{BrightIdConfig, DEFAULT_TIMEOUT};
use crate::domain::sponsorship::client::Sponsorships;
use crate::domain::sponsorship::QuotaChecker;
use crate::domain::verification::client::Verifications;
use crate::domain::verification::BrightIdProvider;
use crate::error::{SdkError, SigningError};
use crate::http::BrightIdHttp;
use crate::provider::ProviderRegistry;
use crate::signing::{SigningCodec, SigningKeyMaterial};

// Re-export sub-client types for convenience.
pub use crate::domain::sponsorship::client::Sponsorships as SponsorshipsClient;
pub use crate::domain::verification::client::Verifications as VerificationsClient;

/// The primary entry point: uniqueness verification and sponsorship.
///
/// Cheap to clone; clones share the HTTP connection pool and the signing key.
#[derive(Debug, Clone)]
pub struct BrightIdClient {
    pub(crate) http: BrightIdHttp,
    app: String,
    codec: Option<SigningCodec>,
}

impl BrightIdClient {
    pub fn builder() -> BrightIdClientBuilder {
        BrightIdClientBuilder::default()
    }

    /// Build from a loaded [`BrightIdConfig`].
    pub fn from_config(config: BrightIdConfig) -> Result<Self, SdkError> {
        BrightIdClientBuilder::from_config(config).build()
    }

    /// Load [`BrightIdConfig`] from the process environment and build.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        Self::from_config(BrightIdConfig::from_lookup(lookup)?)
    }

    /// App namespace used for verifications and sponsorships.
    pub fn app(&self) -> &str {
        &self.app
    }

    /// Public half of the sponsor key, if one is configured.
    pub fn sponsor_public_key(&self) -> Option<String> {
        self.codec.as_ref().map(SigningCodec::public_key_base64)
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn verifications(&self) -> Verifications<'_> {
        Verifications { client: self }
    }

    /// Quota reads need no signing key.
    pub fn quota(&self) -> QuotaChecker<'_> {
        QuotaChecker::new(&self.http)
    }

    /// Sponsorship operations need a signing key; without one this fails.
    pub fn sponsorships(&self) -> Result<Sponsorships<'_>, SdkError> {
        let codec = self.codec.as_ref().ok_or(SigningError::MissingKey)?;
        Ok(Sponsorships {
            client: self,
            codec,
        })
    }

    /// A standalone BrightID provider sharing this client's connection pool.
    pub fn provider(&self) -> BrightIdProvider {
        BrightIdProvider::new(self.http.clone(), self.app.clone())
    }

    /// A registry with the BrightID provider registered.
    pub fn provider_registry(&self) -> ProviderRegistry {
        ProviderRegistry::new().with(self.provider())
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BrightIdClientBuilder {
    base_url: String,
    app: String,
    timeout: Option<Duration>,
    signing_key: Option<SigningKeyMaterial>,
    require_signing_key: bool,
}

impl Default for BrightIdClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_NODE_URL.to_string(),
            app: crate::network::DEFAULT_APP.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            signing_key: None,
            require_signing_key: false,
        }
    }
}

impl BrightIdClientBuilder {
    /// Builder seeded from a loaded [`BrightIdConfig`].
    pub fn from_config(config: BrightIdConfig) -> Self {
        let mut builder = Self::default()
            .base_url(&config.node_url)
            .app(&config.app)
            .timeout(config.timeout);
        if let Some(key) = config.signing_key {
            builder = builder.signing_key(key);
        }
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn app(mut self, app: &str) -> Self {
        self.app = app.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use the transport's own timeout behaviour (none).
    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Key used to sign sponsorship operations.
    pub fn signing_key(mut self, key: SigningKeyMaterial) -> Self {
        self.signing_key = Some(key);
        self
    }

    /// Make `build` fail with [`SigningError::MissingKey`] when no key is set.
    pub fn require_signing_key(mut self) -> Self {
        self.require_signing_key = true;
        self
    }

    pub fn build(self) -> Result<BrightIdClient, SdkError> {
        if self.require_signing_key && self.signing_key.is_none() {
            return Err(SigningError::MissingKey.into());
        }
        Ok(BrightIdClient {
            http: BrightIdHttp::new(&self.base_url, self.timeout)?,
            app: self.app,
            codec: self.signing_key.map(SigningCodec::new),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_PRIVATE_KEY;
    use crate::error::{ConfigError, HttpError};

    #[test]
    fn test_builder_defaults() {
        let client = BrightIdClient::builder().build().unwrap();
        assert_eq!(client.app(), "Gitcoin");
        assert_eq!(client.http.base_url(), "https://app.brightid.org/node/v5");
        assert!(client.sponsor_public_key().is_none());
    }

    #[test]
    fn test_sponsorships_require_key() {
        let client = BrightIdClient::builder().build().unwrap();
        let err = client.sponsorships().err().unwrap();
        assert!(matches!(err, SdkError::Signing(SigningError::MissingKey)));

        let key = SigningKeyMaterial::from_bytes(&[1u8; 32]).unwrap();
        let public = key.public_key_base64();
        let client = BrightIdClient::builder().signing_key(key).build().unwrap();
        assert!(client.sponsorships().is_ok());
        assert_eq!(client.sponsor_public_key(), Some(public));
    }

    #[test]
    fn test_required_key_fails_build() {
        let err = BrightIdClient::builder()
            .require_signing_key()
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Signing(SigningError::MissingKey)));

        let client = BrightIdClient::builder()
            .signing_key(SigningKeyMaterial::from_bytes(&[2u8; 32]).unwrap())
            .require_signing_key()
            .build()
            .unwrap();
        assert!(client.sponsorships().is_ok());
    }

    #[test]
    fn test_required_key_from_config() {
        let err = BrightIdClientBuilder::from_config(BrightIdConfig::default())
            .require_signing_key()
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Signing(SigningError::MissingKey)));
    }

    #[test]
    fn test_invalid_key_surfaces_as_config_error() {
        let err = BrightIdClient::from_lookup(|key: &str| {
            (key == ENV_PRIVATE_KEY).then(|| "c2hvcnQ=".to_string())
        })
        .unwrap_err();
        assert!(matches!(
            err,
            SdkError::Config(ConfigError::InvalidKey { key: ENV_PRIVATE_KEY, .. })
        ));
    }

    #[test]
    fn test_from_lookup_applies_config() {
        let client = BrightIdClient::from_lookup(|key: &str| {
            (key == "BRIGHTID_APP").then(|| "TestApp".to_string())
        })
        .unwrap();
        assert_eq!(client.app(), "TestApp");
    }

    #[test]
    fn test_invalid_base_url_fails_build() {
        let err = BrightIdClient::builder().base_url("::nope").build().unwrap_err();
        assert!(matches!(err, SdkError::Http(HttpError::InvalidUrl(_))));
    }

    #[test]
    fn test_registry_contains_brightid() {
        let client = BrightIdClient::builder().build().unwrap();
        assert_eq!(client.provider_registry().provider_types(), vec!["Brightid"]);
    }
}
