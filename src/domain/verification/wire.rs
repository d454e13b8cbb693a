//! Wire types for `GET /verifications/<app>/<did>`.

use serde::{Deserialize, Serialize};

/// Response envelope; the node nests the payload under `data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationEnvelope {
    pub data: VerificationResponse,
}

/// A user's verification for an app.
///
/// `unique` is required; a body without it is malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResponse {
    pub unique: bool,
    #[serde(default)]
    pub app: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub context_ids: Vec<String>,
}
