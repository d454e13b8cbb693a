//! Sponsorship quota check against `GET /apps/<context>`.

use super::wire::AppResponse;
use super::QuotaStatus;
use crate::error::HttpError;
use crate::http::BrightIdHttp;

/// Reads the remaining sponsorship capacity of an app context.
pub struct QuotaChecker<'a> {
    http: &'a BrightIdHttp,
}

impl<'a> QuotaChecker<'a> {
    pub fn new(http: &'a BrightIdHttp) -> Self {
        Self { http }
    }

    /// Full app metadata for `context`.
    pub async fn app_info(&self, context: &str) -> Result<AppResponse, HttpError> {
        Ok(self.http.get_app(context).await?.data)
    }

    /// Never fails: transport and parse errors become `QueryFailed`.
    pub async fn check_availability(&self, context: &str) -> QuotaStatus {
        match self.app_info(context).await {
            Ok(app) => {
                let status = QuotaStatus::from(&app);
                tracing::debug!(context, ?status, "Sponsorship quota checked");
                status
            }
            Err(e) => {
                tracing::warn!(context, error = %e, "Sponsorship quota query failed");
                QuotaStatus::QueryFailed
            }
        }
    }
}
