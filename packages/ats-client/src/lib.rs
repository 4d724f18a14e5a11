//! Pure REST API client for the applicant-tracking backend.
//!
//! A minimal client for the ATS API. Supports listing and creating
//! candidates, jobs, and interviews, and deleting job postings.
//!
//! # Example
//!
//! ```rust,ignore
//! use ats_client::AtsClient;
//!
//! let client = AtsClient::from_env();
//!
//! let candidates = client.list_candidates().await?;
//! for candidate in &candidates {
//!     println!("{} ({})", candidate.name, candidate.position);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{ApiError, Result};
pub use types::{
    Candidate, CandidateStatus, Interview, Job, JobStatus, JobType, NewCandidate, NewInterview,
    NewJob,
};

use serde::de::DeserializeOwned;
use serde::Serialize;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

pub struct AtsClient {
    client: reqwest::Client,
    base_url: String,
}

impl AtsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from the `ATS_API_URL` environment variable,
    /// falling back to the local development backend.
    pub fn from_env() -> Self {
        let url = std::env::var("ATS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(url)
    }

    pub async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        self.get_collection("candidates").await
    }

    pub async fn create_candidate(&self, candidate: &NewCandidate) -> Result<Candidate> {
        self.post_resource("candidates", candidate).await
    }

    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        self.get_collection("jobs").await
    }

    pub async fn create_job(&self, job: &NewJob) -> Result<Job> {
        self.post_resource("jobs", job).await
    }

    /// Delete a job posting. Returns once the server has confirmed the removal.
    pub async fn delete_job(&self, id: i64) -> Result<()> {
        let url = format!("{}/jobs/{}", self.base_url, id);
        let resp = self.client.delete(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: body,
            });
        }

        tracing::info!(id, "Deleted job posting");
        Ok(())
    }

    pub async fn list_interviews(&self) -> Result<Vec<Interview>> {
        self.get_collection("interviews").await
    }

    pub async fn schedule_interview(&self, interview: &NewInterview) -> Result<Interview> {
        self.post_resource("interviews", interview).await
    }

    /// Fetch the full collection for one resource kind.
    async fn get_collection<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, resource);
        tracing::debug!(%url, "Fetching collection");

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: body,
            });
        }

        // Decode from text so a schema mismatch surfaces as a decode error
        // rather than being folded into the transport error.
        let body = resp.text().await?;
        let items: Vec<T> = serde_json::from_str(&body)?;
        tracing::info!(resource, count = items.len(), "Fetched collection");
        Ok(items)
    }

    /// Create one record. Returns the server's copy, which carries the
    /// assigned id and any defaulted fields.
    async fn post_resource<B, T>(&self, resource: &str, payload: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, resource);
        let resp = self.client.post(&url).json(payload).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let created: T = serde_json::from_str(&body)?;
        tracing::info!(resource, "Created record");
        Ok(created)
    }
}
