//! # BrightID attestation
//!
//! Rust client for BrightID uniqueness verification and sponsorship.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Domain types, canonical signing, provider capability (no I/O)
//! 2. **HTTP API**: `BrightIdHttp`, one method per node endpoint
//! 3. **High-Level Client**: `BrightIdClient` with verification and sponsorship sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use brightid_attestation::prelude::*;
//!
//! let client = BrightIdClient::from_env()?;
//!
//! let verdict = client.verifications().verify_did("did:3:kjzl...").await;
//! let outcome = client.sponsorships()?.trigger("0x1234...").await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Node URL and namespace constants.
pub mod network;

/// Environment configuration.
pub mod config;

/// Canonical encoding and detached Ed25519 signatures.
pub mod signing;

/// Verification provider capability and registry.
pub mod provider;

/// Domain modules: verification, sponsorship.
pub mod domain;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level node HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `BrightIdClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::{ConfigError, HttpError, ProviderError, SdkError, SigningError};

    // Network + config
    pub use crate::config::BrightIdConfig;
    pub use crate::network::{DEFAULT_APP, DEFAULT_NODE_URL};

    // Signing
    pub use crate::signing::{canonicalize, verify_detached, SigningCodec, SigningKeyMaterial};

    // Provider capability
    pub use crate::provider::{Provider, ProviderRegistry, RequestPayload, VerifiedPayload};

    // Domain types: verification
    pub use crate::domain::verification::{AdjudicationResult, VerificationRecord, VerifiedRecord};

    // Domain types: sponsorship
    pub use crate::domain::sponsorship::{
        QuotaStatus, SponsorshipOperation, SponsorshipOutcome, SponsorshipStatus, SubmissionReceipt,
    };

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        BrightIdClient, BrightIdClientBuilder, SponsorshipsClient, VerificationsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::domain::sponsorship::{QuotaChecker, SponsorshipOperationBuilder};
    #[cfg(feature = "http")]
    pub use crate::domain::verification::BrightIdProvider;
    #[cfg(feature = "http")]
    pub use crate::http::BrightIdHttp;
}
