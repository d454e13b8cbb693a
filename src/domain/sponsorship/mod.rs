//! Sponsorship domain: quota, signed `Sponsor` operations, trigger outcomes.
//!
//! Flow: quota check on the app's context, then one signed `Sponsor`
//! operation posted to the node. Nothing is retried.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
#[cfg(feature = "http")]
pub mod operation;
#[cfg(feature = "http")]
pub mod quota;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::error::SigningError;
use crate::network::OPERATION_VERSION;
use crate::signing::SigningCodec;

#[cfg(feature = "http")]
pub use operation::SponsorshipOperationBuilder;
#[cfg(feature = "http")]
pub use quota::QuotaChecker;

/// Operation name understood by the node.
pub const SPONSOR_OPERATION: &str = "Sponsor";

/// Outcome reason when the app has no sponsorships left.
pub const REASON_NO_SPONSORSHIPS: &str = "no available sponsorships";
/// Outcome reason when the quota could not be read.
pub const REASON_QUOTA_FAILED: &str = "quota check failed";
/// Outcome reason when the node did not accept the operation.
pub const REASON_SUBMISSION_FAILED: &str = "sponsorship submission failed";
/// Outcome reason when the node accepted but returned no operation hash.
pub const REASON_SUBMITTED: &str = "sponsorship submitted";

// ─── Quota ───────────────────────────────────────────────────────────────────

/// Remaining sponsorship capacity for an app context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaStatus {
    /// At least one unused sponsorship.
    Available(u64),
    /// Zero or unreported unused sponsorships.
    Unavailable,
    /// The node could not be queried or answered with an unreadable body.
    QueryFailed,
}

impl QuotaStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, QuotaStatus::Available(_))
    }
}

// ─── Operation ───────────────────────────────────────────────────────────────

/// A `Sponsor` operation as posted to `/operations`.
///
/// Field order is the signed order: `name, app, contextId, timestamp, v`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorshipOperation {
    pub name: String,
    pub app: String,
    pub context_id: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    #[serde(rename = "v")]
    pub version: u32,
    #[serde(rename = "sig", default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl SponsorshipOperation {
    /// Unsigned `Sponsor` operation for `context_id`.
    pub fn sponsor(app: &str, context_id: &str, timestamp_ms: i64) -> Self {
        Self {
            name: SPONSOR_OPERATION.to_string(),
            app: app.to_string(),
            context_id: context_id.to_string(),
            timestamp: timestamp_ms,
            version: OPERATION_VERSION,
            signature: None,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// Sign the canonical encoding and store the signature.
    ///
    /// An operation is signed once; re-signing is an error.
    pub fn sign(mut self, codec: &SigningCodec) -> Result<Self, SigningError> {
        if self.is_signed() {
            return Err(SigningError::AlreadySigned);
        }
        let signature = codec.sign_payload(&self)?;
        self.signature = Some(signature);
        Ok(self)
    }
}

/// Result of one operation submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    /// The node answered 200 with a JSON body.
    pub accepted: bool,
    /// `data.hash` from the acknowledgment, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_hash: Option<String>,
    /// Acknowledgment body as received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<serde_json::Value>,
}

impl SubmissionReceipt {
    pub fn accepted(raw_response: serde_json::Value) -> Self {
        Self {
            accepted: true,
            operation_hash: convert::operation_hash(&raw_response),
            raw_response: Some(raw_response),
        }
    }

    pub fn rejected() -> Self {
        Self::default()
    }
}

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// Coarse trigger status reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SponsorshipStatus {
    Error,
    Success,
    Fail,
}

impl SponsorshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Fail => "fail",
        }
    }
}

impl std::fmt::Display for SponsorshipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What `trigger` returns: a status and a short human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SponsorshipOutcome {
    pub status: SponsorshipStatus,
    pub reason: String,
}

impl SponsorshipOutcome {
    pub fn error(reason: &str) -> Self {
        Self {
            status: SponsorshipStatus::Error,
            reason: reason.to_string(),
        }
    }

    /// Outcome for a gated quota; `None` when sponsorship may proceed.
    pub fn from_quota(quota: QuotaStatus) -> Option<Self> {
        match quota {
            QuotaStatus::Available(_) => None,
            QuotaStatus::Unavailable => Some(Self::error(REASON_NO_SPONSORSHIPS)),
            QuotaStatus::QueryFailed => Some(Self::error(REASON_QUOTA_FAILED)),
        }
    }

    /// Outcome for a finished submission.
    pub fn from_receipt(receipt: &SubmissionReceipt) -> Self {
        if receipt.accepted {
            Self {
                status: SponsorshipStatus::Success,
                reason: receipt
                    .operation_hash
                    .clone()
                    .unwrap_or_else(|| REASON_SUBMITTED.to_string()),
            }
        } else {
            Self {
                status: SponsorshipStatus::Fail,
                reason: REASON_SUBMISSION_FAILED.to_string(),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SponsorshipStatus::Success
    }
}
