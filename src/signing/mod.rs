//! Canonical encoding and detached Ed25519 signatures for node operations.
//!
//! The node recomputes the signed message itself: it drops the signature
//! fields from the submitted object and `JSON.stringify`s what is left. The
//! canonical encoding here must produce those exact bytes:
//!
//! - Field order: the serialized field order of the payload, unchanged
//! - Excluded fields: [`EXCLUDED_FIELDS`] (`sig`, `sig1`, `sig2`, `hash`)
//! - Format: compact JSON, no whitespace
//!
//! Signatures are standard padded base64, written into the payload only after
//! the canonical bytes have been signed.

pub mod keys;

pub use keys::SigningKeyMaterial;

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SigningError;

/// Fields never covered by a signature.
pub const EXCLUDED_FIELDS: &[&str] = &["sig", "sig1", "sig2", "hash"];

/// Canonical bytes of `value` with [`EXCLUDED_FIELDS`] removed.
pub fn canonicalize<T: Serialize>(value: &T) -> Result<Vec<u8>, SigningError> {
    canonicalize_excluding(value, EXCLUDED_FIELDS)
}

/// Canonical bytes of `value` with a caller-supplied exclusion list.
pub fn canonicalize_excluding<T: Serialize>(
    value: &T,
    excluded: &[&str],
) -> Result<Vec<u8>, SigningError> {
    let Value::Object(fields) = serde_json::to_value(value)? else {
        return Err(SigningError::NotAnObject);
    };

    let signed: Map<String, Value> = fields
        .into_iter()
        .filter(|(key, _)| !excluded.contains(&key.as_str()))
        .collect();

    Ok(serde_json::to_vec(&Value::Object(signed))?)
}

/// Verify a base64 detached signature over `message`.
///
/// Returns `false` for malformed signatures as well as wrong ones.
pub fn verify_detached(message: &[u8], signature_b64: &str, public_key: &VerifyingKey) -> bool {
    let Ok(bytes) = STANDARD.decode(signature_b64) else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(&bytes) else {
        return false;
    };
    public_key.verify(message, &signature).is_ok()
}

/// Signs canonical payloads with the process-wide sponsor key.
///
/// Cloning shares the same decoded key.
#[derive(Debug, Clone)]
pub struct SigningCodec {
    key: Arc<SigningKeyMaterial>,
}

impl SigningCodec {
    pub fn new(key: SigningKeyMaterial) -> Self {
        Self { key: Arc::new(key) }
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.key.verifying_key()
    }

    pub fn public_key_base64(&self) -> String {
        self.key.public_key_base64()
    }

    /// Detached signature over raw bytes, base64 encoded.
    pub fn sign_detached(&self, message: &[u8]) -> String {
        STANDARD.encode(self.key.sign(message).to_bytes())
    }

    /// Canonicalize `payload` and sign the result.
    pub fn sign_payload<T: Serialize>(&self, payload: &T) -> Result<String, SigningError> {
        let message = canonicalize(payload)?;
        Ok(self.sign_detached(&message))
    }

    /// Check a detached signature over the canonical form of `payload`.
    pub fn verify_payload<T: Serialize>(
        &self,
        payload: &T,
        signature_b64: &str,
    ) -> Result<bool, SigningError> {
        let message = canonicalize(payload)?;
        Ok(verify_detached(&message, signature_b64, &self.verifying_key()))
    }
}
