//! Low-level HTTP client: `BrightIdHttp`.
//!
//! One method per node endpoint. Returns wire types; adjudication and outcome
//! mapping happen in the domain layer. Only HTTP 200 is treated as success.
//! Requests are sent once; there is no retry layer.

use crate::domain::sponsorship::wire::AppEnvelope;
use crate::domain::sponsorship::SponsorshipOperation;
use crate::domain::verification::wire::VerificationEnvelope;
use crate::error::HttpError;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Error body returned by the node on failures.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    #[serde(default)]
    error_num: Option<i64>,
    #[serde(default)]
    error_message: Option<String>,
}

impl ErrorResponse {
    /// Best human-readable message for a failure body.
    fn message_from(body: &str) -> String {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(ErrorResponse {
                error_message: Some(message),
                error_num,
            }) => match error_num {
                Some(num) => format!("{} (errorNum {})", message, num),
                None => message,
            },
            _ => body.to_string(),
        }
    }
}

/// Low-level HTTP client for the BrightID node REST API.
#[derive(Debug, Clone)]
pub struct BrightIdHttp {
    base_url: Url,
    client: Client,
}

impl BrightIdHttp {
    /// Create a client for `base_url`. `timeout` bounds each request; `None`
    /// leaves reqwest's default (no timeout).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, HttpError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| HttpError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(HttpError::InvalidUrl(base_url.to_string()));
        }

        let mut builder = Client::builder().pool_max_idle_per_host(10);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    // ── Verifications ────────────────────────────────────────────────────

    pub async fn get_verification(
        &self,
        app: &str,
        did: &str,
    ) -> Result<VerificationEnvelope, HttpError> {
        let url = self.endpoint(&["verifications", app, did])?;
        self.get(url).await
    }

    // ── Apps ─────────────────────────────────────────────────────────────

    pub async fn get_app(&self, context: &str) -> Result<AppEnvelope, HttpError> {
        let url = self.endpoint(&["apps", context])?;
        self.get(url).await
    }

    // ── Operations ───────────────────────────────────────────────────────

    /// Post a signed operation; the acknowledgment is returned unparsed.
    pub async fn submit_operation(
        &self,
        operation: &SponsorshipOperation,
    ) -> Result<serde_json::Value, HttpError> {
        let url = self.endpoint(&["operations"])?;
        self.post(url, operation).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, HttpError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| HttpError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::GET, url, None::<&()>).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::POST, url, Some(body)).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        tracing::debug!(method = %method, url = %url, "BrightID node request");

        let mut req = self.client.request(method, url.clone());
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status == StatusCode::OK {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        let message = ErrorResponse::message_from(&body_text);
        tracing::debug!(status = status_code, url = %url, "BrightID node returned non-200");

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(message)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest(message)),
            500..=599 => Err(HttpError::ServerError {
                status: status_code,
                body: message,
            }),
            _ => Err(HttpError::UnexpectedStatus {
                status: status_code,
                body: message,
            }),
        }
    }
}
