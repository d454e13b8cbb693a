//! Sponsorships sub-client: the sponsorship trigger entry point.
//!
//! `trigger` is linear: quota check, then a single signed submission. A
//! submission failure is not re-checked against quota and nothing is retried.

use super::wire::AppResponse;
use super::{
    QuotaChecker, QuotaStatus, SponsorshipOperationBuilder, SponsorshipOutcome, SponsorshipStatus,
    SubmissionReceipt,
};
use crate::client::BrightIdClient;
use crate::error::SdkError;
use crate::signing::SigningCodec;

const REASON_SIGNING_FAILED: &str = "sponsorship signing failed";

pub struct Sponsorships<'a> {
    pub(crate) client: &'a BrightIdClient,
    pub(crate) codec: &'a SigningCodec,
}

impl<'a> Sponsorships<'a> {
    pub fn quota(&self) -> QuotaChecker<'a> {
        QuotaChecker::new(&self.client.http)
    }

    pub fn operations(&self) -> SponsorshipOperationBuilder<'a> {
        SponsorshipOperationBuilder::new(&self.client.http, self.codec, self.client.app())
    }

    /// Metadata of the client's app, including sponsorship counters.
    pub async fn app_info(&self) -> Result<AppResponse, SdkError> {
        Ok(self.quota().app_info(self.client.app()).await?)
    }

    /// Remaining sponsorships of the client's app.
    pub async fn check_availability(&self) -> QuotaStatus {
        self.quota().check_availability(self.client.app()).await
    }

    /// Sign and post a `Sponsor` operation without the quota gate.
    pub async fn submit(&self, context_id: &str) -> Result<SubmissionReceipt, SdkError> {
        Ok(self.operations().submit_sponsorship(context_id).await?)
    }

    /// Sponsor `context_id` if the app still has sponsorships.
    pub async fn trigger(&self, context_id: &str) -> SponsorshipOutcome {
        let quota = self.check_availability().await;
        if let Some(outcome) = SponsorshipOutcome::from_quota(quota) {
            tracing::info!(context_id, status = %outcome.status, reason = %outcome.reason, "Sponsorship not attempted");
            return outcome;
        }

        let outcome = match self.operations().submit_sponsorship(context_id).await {
            Ok(receipt) => SponsorshipOutcome::from_receipt(&receipt),
            Err(e) => {
                tracing::error!(context_id, error = %e, "Sponsor operation could not be signed");
                SponsorshipOutcome {
                    status: SponsorshipStatus::Fail,
                    reason: REASON_SIGNING_FAILED.to_string(),
                }
            }
        };
        tracing::info!(context_id, status = %outcome.status, "Sponsorship triggered");
        outcome
    }
}
