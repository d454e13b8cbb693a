//! Conversion: VerificationResponse → VerificationRecord.

use super::wire;
use super::VerificationRecord;

impl From<wire::VerificationResponse> for VerificationRecord {
    fn from(source: wire::VerificationResponse) -> Self {
        Self {
            uniqueness: source.unique,
            app_namespace: source.app.unwrap_or_default(),
            context: source.context.unwrap_or_default(),
            context_ids: source.context_ids,
        }
    }
}

impl From<wire::VerificationEnvelope> for VerificationRecord {
    fn from(source: wire::VerificationEnvelope) -> Self {
        source.data.into()
    }
}
