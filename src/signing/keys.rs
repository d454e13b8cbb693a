//! Ed25519 sponsor key material.
//!
//! The node expects tweetnacl-style keys: a base64 string holding either the
//! 64-byte `seed || public_key` secret key or the bare 32-byte seed.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey, KEYPAIR_LENGTH, SECRET_KEY_LENGTH};

use crate::error::SigningError;

/// Private key plus derived public key, decoded once at startup.
///
/// `Debug` never prints secret bytes.
pub struct SigningKeyMaterial {
    signing_key: SigningKey,
}

impl SigningKeyMaterial {
    /// Decode a base64 secret (32-byte seed or 64-byte keypair).
    pub fn from_base64(secret: &str) -> Result<Self, SigningError> {
        let bytes = STANDARD
            .decode(secret.trim())
            .map_err(|e| SigningError::InvalidEncoding(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Build from raw bytes. A 64-byte keypair must carry the public key that
    /// matches its seed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SigningError> {
        let signing_key = match bytes.len() {
            SECRET_KEY_LENGTH => {
                let seed = <[u8; SECRET_KEY_LENGTH]>::try_from(bytes)
                    .map_err(|_| SigningError::InvalidKeyLength(bytes.len()))?;
                SigningKey::from_bytes(&seed)
            }
            KEYPAIR_LENGTH => {
                let keypair = <[u8; KEYPAIR_LENGTH]>::try_from(bytes)
                    .map_err(|_| SigningError::InvalidKeyLength(bytes.len()))?;
                SigningKey::from_keypair_bytes(&keypair)
                    .map_err(|_| SigningError::KeypairMismatch)?
            }
            other => return Err(SigningError::InvalidKeyLength(other)),
        };
        Ok(Self { signing_key })
    }

    /// Generate a fresh key from the OS random source.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut rand::rngs::OsRng),
        }
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// Base64 public key, the form registered with the node.
    pub fn public_key_base64(&self) -> String {
        STANDARD.encode(self.verifying_key().to_bytes())
    }

    /// Export the 64-byte keypair as base64, for provisioning only.
    pub fn export_secret_base64(&self) -> String {
        STANDARD.encode(self.signing_key.to_keypair_bytes())
    }

    pub(crate) fn sign(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }
}

impl std::fmt::Debug for SigningKeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKeyMaterial")
            .field("public_key", &self.public_key_base64())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_and_keypair_forms_agree() {
        let key = SigningKeyMaterial::from_bytes(&[7u8; 32]).unwrap();
        let exported = key.export_secret_base64();
        let reloaded = SigningKeyMaterial::from_base64(&exported).unwrap();
        assert_eq!(key.public_key_base64(), reloaded.public_key_base64());
    }

    #[test]
    fn test_seed_from_base64() {
        let secret = STANDARD.encode([9u8; 32]);
        let key = SigningKeyMaterial::from_base64(&secret).unwrap();
        let expected = SigningKey::from_bytes(&[9u8; 32]).verifying_key();
        assert_eq!(key.verifying_key(), expected);
    }

    #[test]
    fn test_rejects_bad_length() {
        let err = SigningKeyMaterial::from_bytes(&[1u8; 48]).unwrap_err();
        assert!(matches!(err, SigningError::InvalidKeyLength(48)));
    }

    #[test]
    fn test_rejects_bad_base64() {
        let err = SigningKeyMaterial::from_base64("not base64!!").unwrap_err();
        assert!(matches!(err, SigningError::InvalidEncoding(_)));
    }

    #[test]
    fn test_rejects_mismatched_keypair() {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&[3u8; 32]);
        bytes[32..].copy_from_slice(&SigningKey::from_bytes(&[4u8; 32]).verifying_key().to_bytes());
        let err = SigningKeyMaterial::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, SigningError::KeypairMismatch));
    }

    #[test]
    fn test_debug_hides_secret() {
        let key = SigningKeyMaterial::from_bytes(&[5u8; 32]).unwrap();
        let debug = format!("{:?}", key);
        assert!(debug.contains(&key.public_key_base64()));
        assert!(!debug.contains(&key.export_secret_base64()));
    }
}
