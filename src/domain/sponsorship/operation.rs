//! Builds, signs and submits `Sponsor` operations.

use chrono::Utc;

use super::{SponsorshipOperation, SubmissionReceipt};
use crate::error::SigningError;
use crate::http::BrightIdHttp;
use crate::signing::SigningCodec;

pub struct SponsorshipOperationBuilder<'a> {
    http: &'a BrightIdHttp,
    codec: &'a SigningCodec,
    app: &'a str,
}

impl<'a> SponsorshipOperationBuilder<'a> {
    pub fn new(http: &'a BrightIdHttp, codec: &'a SigningCodec, app: &'a str) -> Self {
        Self { http, codec, app }
    }

    /// Signed operation for `context_id` at `timestamp_ms`.
    pub fn build(&self, context_id: &str, timestamp_ms: i64) -> Result<SponsorshipOperation, SigningError> {
        SponsorshipOperation::sponsor(self.app, context_id, timestamp_ms).sign(self.codec)
    }

    /// Build a fresh operation stamped now, sign it and post it once.
    ///
    /// Transport and status failures come back as a rejected receipt; only a
    /// signing problem is an error.
    pub async fn submit_sponsorship(&self, context_id: &str) -> Result<SubmissionReceipt, SigningError> {
        let operation = self.build(context_id, Utc::now().timestamp_millis())?;

        match self.http.submit_operation(&operation).await {
            Ok(raw) => {
                let receipt = SubmissionReceipt::accepted(raw);
                tracing::debug!(
                    context_id,
                    hash = receipt.operation_hash.as_deref().unwrap_or("-"),
                    "Sponsor operation accepted"
                );
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(context_id, error = %e, "Sponsor operation submission failed");
                Ok(SubmissionReceipt::rejected())
            }
        }
    }
}
