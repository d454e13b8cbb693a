//! `BrightIdProvider`: the BrightID implementation of [`Provider`].

use async_trait::async_trait;

use super::{AdjudicationResult, VerificationRecord};
use crate::error::HttpError;
use crate::http::BrightIdHttp;
use crate::provider::{Provider, RequestPayload, VerifiedPayload};

/// Type tag the credential issuer uses to select BrightID.
pub const PROVIDER_TYPE: &str = "Brightid";

/// Verifies BrightID uniqueness for an app namespace.
///
/// Holds no state beyond its HTTP client; every call is a fresh query.
#[derive(Debug, Clone)]
pub struct BrightIdProvider {
    http: BrightIdHttp,
    app: String,
}

impl BrightIdProvider {
    pub fn new(http: BrightIdHttp, app: impl Into<String>) -> Self {
        Self {
            http,
            app: app.into(),
        }
    }

    pub fn app(&self) -> &str {
        &self.app
    }

    /// Fetch the raw verification record for `did`.
    pub async fn record(&self, did: &str) -> Result<VerificationRecord, HttpError> {
        let envelope = self.http.get_verification(&self.app, did).await?;
        Ok(envelope.into())
    }

    /// Query and adjudicate `did`. Never fails; see the module docs of
    /// [`crate::domain::verification`] for the flattening rules.
    pub async fn adjudicate(&self, did: &str) -> AdjudicationResult {
        if did.is_empty() {
            tracing::debug!("No identity proof supplied, skipping BrightID query");
            return AdjudicationResult::invalid();
        }

        match self.record(did).await {
            Ok(record) => {
                let result = AdjudicationResult::from_record(&record, &self.app);
                tracing::debug!(
                    did,
                    unique = record.uniqueness,
                    valid = result.valid,
                    "BrightID verification adjudicated"
                );
                result
            }
            Err(e) => {
                tracing::warn!(did, error = %e, "BrightID verification query failed");
                AdjudicationResult::invalid()
            }
        }
    }

    /// Adjudicate the identity proof (`proofs.did`) of a request payload.
    pub async fn verify_payload(&self, payload: &RequestPayload) -> AdjudicationResult {
        self.adjudicate(payload.did().unwrap_or_default()).await
    }
}

#[async_trait]
impl Provider for BrightIdProvider {
    fn provider_type(&self) -> &str {
        PROVIDER_TYPE
    }

    async fn verify(&self, payload: &RequestPayload) -> VerifiedPayload {
        self.verify_payload(payload).await.into()
    }
}
