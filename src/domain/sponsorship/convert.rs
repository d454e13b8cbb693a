//! Conversions: AppResponse → QuotaStatus, raw acknowledgment → operation hash.

use super::wire;
use super::QuotaStatus;

impl From<&wire::AppResponse> for QuotaStatus {
    fn from(source: &wire::AppResponse) -> Self {
        match source.unused_sponsorships {
            Some(unused) if unused > 0 => QuotaStatus::Available(unused as u64),
            _ => QuotaStatus::Unavailable,
        }
    }
}

/// Pull `data.hash` out of an acknowledgment body, ignoring any other shape.
pub fn operation_hash(raw: &serde_json::Value) -> Option<String> {
    serde_json::from_value::<wire::OperationEnvelope>(raw.clone())
        .ok()
        .and_then(|envelope| envelope.data)
        .and_then(|data| data.hash)
        .filter(|hash| !hash.is_empty())
}
