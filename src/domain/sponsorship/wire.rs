//! Wire types for sponsorship endpoints (`/apps/<context>`, `/operations`).

use serde::{Deserialize, Serialize};

/// Envelope for `GET /apps/<context>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppEnvelope {
    pub data: AppResponse,
}

/// App metadata registered with the node.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub verification: Option<serde_json::Value>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub assigned_sponsorships: Option<i64>,
    #[serde(default)]
    pub unused_sponsorships: Option<i64>,
    #[serde(default)]
    pub testing: Option<bool>,
    #[serde(default)]
    pub soulbound: Option<bool>,
}

/// Envelope for the `POST /operations` acknowledgment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OperationEnvelope {
    #[serde(default)]
    pub data: Option<OperationResponse>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OperationResponse {
    #[serde(default)]
    pub hash: Option<String>,
}
