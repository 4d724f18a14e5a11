// Trait definitions for dependency injection
//
// Infrastructure trait only - no caching or lifecycle logic. AppState owns
// the stores and goes through this seam for every network call, so tests
// can swap in MockAtsApi.

use async_trait::async_trait;

use ats_client::{
    Candidate, Interview, Job, NewCandidate, NewInterview, NewJob, Result,
};

#[async_trait]
pub trait BaseAtsApi: Send + Sync {
    /// Fetch the full candidate collection, in server order.
    async fn list_candidates(&self) -> Result<Vec<Candidate>>;

    /// Create a candidate; returns the server's copy with the assigned id.
    async fn create_candidate(&self, candidate: &NewCandidate) -> Result<Candidate>;

    /// Fetch the full job posting collection, in server order.
    async fn list_jobs(&self) -> Result<Vec<Job>>;

    /// Create a job posting; returns the server's copy with the assigned id.
    async fn create_job(&self, job: &NewJob) -> Result<Job>;

    /// Delete a job posting on the server.
    async fn delete_job(&self, id: i64) -> Result<()>;

    /// Fetch the full interview collection, in server order.
    async fn list_interviews(&self) -> Result<Vec<Interview>>;

    /// Schedule an interview; returns the server's copy with the assigned id.
    async fn schedule_interview(&self, interview: &NewInterview) -> Result<Interview>;
}
