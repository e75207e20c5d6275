//! Drumline Client Implementation

use std::time::Duration;

use reqwest::StatusCode;

use crate::error::{Result, SdkError};
use crate::types::{
    DetailedPattern, ErrorBody, NewPattern, PatternOnly, QueuedPattern, SubmitOutcome,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Drumline service client
///
/// # Example
///
/// ```no_run
/// use drumline_sdk::DrumlineClient;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DrumlineClient::new("http://127.0.0.1:8080")?;
/// # Ok(())
/// # }
/// ```
pub struct DrumlineClient {
    http: reqwest::Client,
    base_url: String,
}

impl DrumlineClient {
    /// Build a client for the given base URL. Include the API prefix if
    /// the server mounts one (e.g. `http://127.0.0.1:8080/1.0`).
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {e}")))?;

        Ok(Self { http, base_url })
    }

    /// Liveness probe. `Ok(())` means the service answered.
    pub async fn health(&self) -> Result<()> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(generic_error(response).await)
        }
    }

    /// Submit a pattern for admission.
    ///
    /// Distinguishes the two non-error outcomes — queued, or declined by
    /// capacity — and surfaces duplicates and validation failures as
    /// typed errors.
    pub async fn submit(&self, request: NewPattern) -> Result<SubmitOutcome> {
        let response = self
            .http
            .post(format!("{}/patterns", self.base_url))
            .json(&request)
            .send()
            .await?;

        match response.status() {
            StatusCode::CREATED => {
                let queued: QueuedPattern = response.json().await?;
                Ok(SubmitOutcome::Queued(queued))
            }
            StatusCode::ACCEPTED => Ok(SubmitOutcome::QueueFull),
            StatusCode::UNPROCESSABLE_ENTITY => {
                Err(SdkError::AlreadyPresent(message_of(response).await))
            }
            StatusCode::BAD_REQUEST => {
                Err(SdkError::InvalidSubmission(message_of(response).await))
            }
            _ => Err(generic_error(response).await),
        }
    }

    /// Queued patterns as `(id, name)` summaries, oldest first.
    pub async fn list(&self) -> Result<Vec<QueuedPattern>> {
        let response = self
            .http
            .get(format!("{}/patterns", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(generic_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// The oldest queued pattern, without removing it.
    pub async fn peek_head(&self) -> Result<DetailedPattern> {
        self.head_request(reqwest::Method::GET, "/patterns/head")
            .await
    }

    /// Remove and return the oldest queued pattern.
    pub async fn pop_head(&self) -> Result<DetailedPattern> {
        self.head_request(reqwest::Method::DELETE, "/patterns/head")
            .await
    }

    /// Base64 payload of the head pattern, without removing it.
    pub async fn peek_head_payload(&self) -> Result<String> {
        self.payload_request(reqwest::Method::GET).await
    }

    /// Remove the head pattern, returning only its base64 payload.
    pub async fn pop_head_payload(&self) -> Result<String> {
        self.payload_request(reqwest::Method::DELETE).await
    }

    async fn head_request(&self, method: reqwest::Method, path: &str) -> Result<DetailedPattern> {
        let response = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(SdkError::QueueEmpty),
            status if status.is_success() => Ok(response.json().await?),
            _ => Err(generic_error(response).await),
        }
    }

    async fn payload_request(&self, method: reqwest::Method) -> Result<String> {
        let response = self
            .http
            .request(
                method,
                format!("{}/patterns/head/pattern", self.base_url),
            )
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(SdkError::QueueEmpty),
            status if status.is_success() => {
                let body: PatternOnly = response.json().await?;
                Ok(body.pattern)
            }
            _ => Err(generic_error(response).await),
        }
    }
}

/// Message string from an error body, or the status line if unreadable.
async fn message_of(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    }
}

async fn generic_error(response: reqwest::Response) -> SdkError {
    let status = response.status().as_u16();
    SdkError::Api {
        status,
        message: message_of(response).await,
    }
}
