//! Verification provider capability.
//!
//! A provider turns a [`RequestPayload`] into a [`VerifiedPayload`]. Providers
//! never fail: any problem reaching or understanding the remote source is an
//! invalid result. [`ProviderRegistry`] dispatches payloads by their `type` tag.

pub mod registry;

pub use registry::ProviderRegistry;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Proof key holding the user's decentralized identifier.
pub const DID_PROOF: &str = "did";

/// Verification request as sent by the credential issuer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestPayload {
    #[serde(rename = "type")]
    pub provider_type: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proofs: Option<BTreeMap<String, String>>,
}

impl RequestPayload {
    pub fn new(provider_type: impl Into<String>) -> Self {
        Self {
            provider_type: provider_type.into(),
            ..Default::default()
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_proof(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.proofs
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn proof(&self, key: &str) -> Option<&str> {
        self.proofs.as_ref()?.get(key).map(String::as_str)
    }

    /// The identity proof (`proofs.did`).
    pub fn did(&self) -> Option<&str> {
        self.proof(DID_PROOF)
    }
}

/// Provider-agnostic verification result. `record` is present iff `valid`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedPayload {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<BTreeMap<String, String>>,
}

impl VerifiedPayload {
    pub fn invalid() -> Self {
        Self::default()
    }
}

/// An interchangeable attestation source.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Type tag used to select this provider (e.g. `"Brightid"`).
    fn provider_type(&self) -> &str;

    /// Query the source and adjudicate the payload.
    async fn verify(&self, payload: &RequestPayload) -> VerifiedPayload;
}
