// MockAtsApi - mock backend for testing
//
// Queued responses are consumed in order; when a queue is empty the mock
// falls back to a benign default (empty collection, echoed create payload,
// confirmed delete). Calls are recorded for assertions.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ats_client::{
    ApiError, Candidate, Interview, Job, NewCandidate, NewInterview, NewJob, Result,
};

use crate::traits::BaseAtsApi;

/// Build the server-style error the mock uses for injected failures.
pub fn server_error(message: &str) -> ApiError {
    ApiError::Server {
        status: 500,
        message: message.to_string(),
    }
}

pub struct MockAtsApi {
    candidate_lists: Arc<Mutex<Vec<Result<Vec<Candidate>>>>>,
    job_lists: Arc<Mutex<Vec<Result<Vec<Job>>>>>,
    interview_lists: Arc<Mutex<Vec<Result<Vec<Interview>>>>>,
    create_failures: Arc<Mutex<Vec<ApiError>>>,
    delete_failures: Arc<Mutex<Vec<ApiError>>>,
    list_calls: Arc<Mutex<Vec<String>>>,
    delete_calls: Arc<Mutex<Vec<i64>>>,
    next_id: AtomicI64,
}

impl MockAtsApi {
    pub fn new() -> Self {
        Self {
            candidate_lists: Arc::new(Mutex::new(Vec::new())),
            job_lists: Arc::new(Mutex::new(Vec::new())),
            interview_lists: Arc::new(Mutex::new(Vec::new())),
            create_failures: Arc::new(Mutex::new(Vec::new())),
            delete_failures: Arc::new(Mutex::new(Vec::new())),
            list_calls: Arc::new(Mutex::new(Vec::new())),
            delete_calls: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Queue a successful candidate list response.
    pub fn with_candidates(self, candidates: Vec<Candidate>) -> Self {
        self.candidate_lists.lock().unwrap().push(Ok(candidates));
        self
    }

    pub fn with_candidates_failure(self, message: &str) -> Self {
        self.candidate_lists
            .lock()
            .unwrap()
            .push(Err(server_error(message)));
        self
    }

    /// Queue a successful job list response.
    pub fn with_jobs(self, jobs: Vec<Job>) -> Self {
        self.job_lists.lock().unwrap().push(Ok(jobs));
        self
    }

    pub fn with_jobs_failure(self, message: &str) -> Self {
        self.job_lists.lock().unwrap().push(Err(server_error(message)));
        self
    }

    /// Queue a successful interview list response.
    pub fn with_interviews(self, interviews: Vec<Interview>) -> Self {
        self.interview_lists.lock().unwrap().push(Ok(interviews));
        self
    }

    pub fn with_interviews_failure(self, message: &str) -> Self {
        self.interview_lists
            .lock()
            .unwrap()
            .push(Err(server_error(message)));
        self
    }

    /// Fail the next create call, whatever the resource kind.
    pub fn with_create_failure(self, message: &str) -> Self {
        self.create_failures.lock().unwrap().push(server_error(message));
        self
    }

    /// Fail the next delete call.
    pub fn with_delete_failure(self, message: &str) -> Self {
        self.delete_failures.lock().unwrap().push(server_error(message));
        self
    }

    /// Set the id the mock assigns to the next created record.
    pub fn with_next_id(self, id: i64) -> Self {
        self.next_id.store(id, Ordering::SeqCst);
        self
    }

    /// Get all resources that were listed, in call order.
    pub fn list_calls(&self) -> Vec<String> {
        self.list_calls.lock().unwrap().clone()
    }

    /// Get all ids passed to delete, in call order.
    pub fn delete_calls(&self) -> Vec<i64> {
        self.delete_calls.lock().unwrap().clone()
    }

    /// Check if a resource collection was listed.
    pub fn was_listed(&self, resource: &str) -> bool {
        self.list_calls.lock().unwrap().iter().any(|r| r == resource)
    }

    fn assign_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    fn pop_create_failure(&self) -> Option<ApiError> {
        let mut failures = self.create_failures.lock().unwrap();
        if failures.is_empty() {
            None
        } else {
            Some(failures.remove(0))
        }
    }
}

impl Default for MockAtsApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAtsApi for MockAtsApi {
    async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        self.list_calls.lock().unwrap().push("candidates".to_string());

        let mut responses = self.candidate_lists.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            Ok(Vec::new())
        }
    }

    async fn create_candidate(&self, candidate: &NewCandidate) -> Result<Candidate> {
        if let Some(failure) = self.pop_create_failure() {
            return Err(failure);
        }

        Ok(Candidate {
            id: self.assign_id(),
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            phone: candidate.phone.clone(),
            position: candidate.position.clone(),
            status: candidate.status,
            notes: candidate.notes.clone(),
        })
    }

    async fn list_jobs(&self) -> Result<Vec<Job>> {
        self.list_calls.lock().unwrap().push("jobs".to_string());

        let mut responses = self.job_lists.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            Ok(Vec::new())
        }
    }

    async fn create_job(&self, job: &NewJob) -> Result<Job> {
        if let Some(failure) = self.pop_create_failure() {
            return Err(failure);
        }

        Ok(Job {
            id: self.assign_id(),
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            job_type: job.job_type,
            status: job.status,
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            posted_date: job.posted_date,
        })
    }

    async fn delete_job(&self, id: i64) -> Result<()> {
        self.delete_calls.lock().unwrap().push(id);

        let mut failures = self.delete_failures.lock().unwrap();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures.remove(0))
        }
    }

    async fn list_interviews(&self) -> Result<Vec<Interview>> {
        self.list_calls.lock().unwrap().push("interviews".to_string());

        let mut responses = self.interview_lists.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            Ok(Vec::new())
        }
    }

    async fn schedule_interview(&self, interview: &NewInterview) -> Result<Interview> {
        if let Some(failure) = self.pop_create_failure() {
            return Err(failure);
        }

        Ok(Interview {
            id: self.assign_id(),
            scheduled_time: interview.scheduled_time,
            candidate_id: interview.candidate_id,
            job_id: interview.job_id,
        })
    }
}
