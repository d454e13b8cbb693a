//! Verification domain: uniqueness records and their adjudication.
//!
//! Adjudication is flat: a record is valid only when the node
//! answered 200 with `unique: true`. Every other outcome (not unique, non-200,
//! unreachable node, malformed body) is the same `valid: false` with no record.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
#[cfg(feature = "http")]
pub mod provider;
pub mod wire;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::provider::VerifiedPayload;

#[cfg(feature = "http")]
pub use provider::{BrightIdProvider, PROVIDER_TYPE};

/// A uniqueness verification as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRecord {
    pub uniqueness: bool,
    pub app_namespace: String,
    pub context: String,
    pub context_ids: Vec<String>,
}

/// The attested facts carried by a valid adjudication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedRecord {
    pub context: String,
    pub context_id: String,
    pub meets_uniqueness: String,
}

/// Verdict of one verification. `record` is present iff `valid`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjudicationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<VerifiedRecord>,
}

impl AdjudicationResult {
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Adjudicate a record the node returned with HTTP 200.
    ///
    /// Uniqueness alone decides validity. Only `contextIds[0]` is attested;
    /// an empty list attests an empty context id.
    pub fn from_record(record: &VerificationRecord, app: &str) -> Self {
        if !record.uniqueness {
            return Self::invalid();
        }
        Self {
            valid: true,
            record: Some(VerifiedRecord {
                context: app.to_string(),
                context_id: record.context_ids.first().cloned().unwrap_or_default(),
                meets_uniqueness: record.uniqueness.to_string(),
            }),
        }
    }
}

impl From<AdjudicationResult> for VerifiedPayload {
    fn from(result: AdjudicationResult) -> Self {
        let record = result.record.map(|r| {
            BTreeMap::from([
                ("context".to_string(), r.context),
                ("contextId".to_string(), r.context_id),
                ("meetsUniqueness".to_string(), r.meets_uniqueness),
            ])
        });
        VerifiedPayload {
            valid: result.valid && record.is_some(),
            record,
        }
    }
}
