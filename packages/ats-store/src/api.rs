//! Implementation of the `BaseAtsApi` seam for the HTTP client.

use async_trait::async_trait;

use ats_client::{
    AtsClient, Candidate, Interview, Job, NewCandidate, NewInterview, NewJob, Result,
};

use crate::traits::BaseAtsApi;

#[async_trait]
impl BaseAtsApi for AtsClient {
    async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        AtsClient::list_candidates(self).await
    }

    async fn create_candidate(&self, candidate: &NewCandidate) -> Result<Candidate> {
        AtsClient::create_candidate(self, candidate).await
    }

    async fn list_jobs(&self) -> Result<Vec<Job>> {
        AtsClient::list_jobs(self).await
    }

    async fn create_job(&self, job: &NewJob) -> Result<Job> {
        AtsClient::create_job(self, job).await
    }

    async fn delete_job(&self, id: i64) -> Result<()> {
        AtsClient::delete_job(self, id).await
    }

    async fn list_interviews(&self) -> Result<Vec<Interview>> {
        AtsClient::list_interviews(self).await
    }

    async fn schedule_interview(&self, interview: &NewInterview) -> Result<Interview> {
        AtsClient::schedule_interview(self, interview).await
    }
}
