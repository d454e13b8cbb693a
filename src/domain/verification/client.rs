//! Verifications sub-client: uniqueness checks for the client's app.

use crate::client::BrightIdClient;
use crate::domain::verification::{AdjudicationResult, BrightIdProvider, VerificationRecord};
use crate::error::SdkError;
use crate::provider::RequestPayload;

pub struct Verifications<'a> {
    pub(crate) client: &'a BrightIdClient,
}

impl<'a> Verifications<'a> {
    fn provider(&self) -> BrightIdProvider {
        BrightIdProvider::new(self.client.http.clone(), self.client.app())
    }

    /// Adjudicate a verification request payload.
    pub async fn verify(&self, payload: &RequestPayload) -> AdjudicationResult {
        self.provider().verify_payload(payload).await
    }

    /// Adjudicate a bare DID.
    pub async fn verify_did(&self, did: &str) -> AdjudicationResult {
        self.provider().adjudicate(did).await
    }

    /// Raw verification record, with transport and status errors surfaced.
    pub async fn record(&self, did: &str) -> Result<VerificationRecord, SdkError> {
        Ok(self.provider().record(did).await?)
    }
}
