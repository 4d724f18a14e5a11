//! Process-wide state container composing one store per resource kind.

use std::future::Future;
use std::sync::{Arc, Mutex};

use ats_client::{
    Candidate, Interview, Job, NewCandidate, NewInterview, NewJob, Result,
};

use crate::store::{ResourceStore, StoreSnapshot};
use crate::traits::BaseAtsApi;

/// Single source of truth for the three ATS collections.
///
/// Created once at startup and passed by reference to consumers; there is
/// no ambient global. Each store is guarded by its own mutex, and a lock
/// is never held across a network await: loads take the generation token,
/// release the lock, await the request, then re-lock to apply the outcome.
///
/// Load failures are absorbed into store state (`Failed` + message) since
/// the collection view renders from them. Mutation failures propagate to
/// the caller, which owns form-level display; they never touch the fetch
/// status.
pub struct AppState {
    api: Arc<dyn BaseAtsApi>,
    candidates: Mutex<ResourceStore<Candidate>>,
    jobs: Mutex<ResourceStore<Job>>,
    interviews: Mutex<ResourceStore<Interview>>,
}

impl AppState {
    pub fn new(api: Arc<dyn BaseAtsApi>) -> Self {
        Self {
            api,
            candidates: Mutex::new(ResourceStore::new()),
            jobs: Mutex::new(ResourceStore::new()),
            interviews: Mutex::new(ResourceStore::new()),
        }
    }

    // ------------------------------------------------------------------
    // Candidates
    // ------------------------------------------------------------------

    pub async fn load_candidates(&self) {
        run_load(&self.candidates, "candidates", self.api.list_candidates()).await;
    }

    pub async fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate> {
        let created = self.api.create_candidate(&candidate).await?;
        self.candidates.lock().unwrap().append(created.clone());
        Ok(created)
    }

    pub fn select_candidate(&self, candidate: Candidate) {
        self.candidates.lock().unwrap().select(candidate);
    }

    pub fn clear_selected_candidate(&self) {
        self.candidates.lock().unwrap().clear_selection();
    }

    pub fn candidates_snapshot(&self) -> StoreSnapshot<Candidate> {
        self.candidates.lock().unwrap().snapshot()
    }

    // ------------------------------------------------------------------
    // Jobs
    // ------------------------------------------------------------------

    pub async fn load_jobs(&self) {
        run_load(&self.jobs, "jobs", self.api.list_jobs()).await;
    }

    pub async fn create_job(&self, job: NewJob) -> Result<Job> {
        let created = self.api.create_job(&job).await?;
        self.jobs.lock().unwrap().append(created.clone());
        Ok(created)
    }

    /// Delete a job posting. The local copy is removed only after the
    /// server confirms; a confirmed delete of an id that is not cached
    /// is a no-op, not a fault.
    pub async fn delete_job(&self, id: i64) -> Result<()> {
        self.api.delete_job(id).await?;

        let removed = self.jobs.lock().unwrap().remove_first_where(|job| job.id == id);
        if removed.is_none() {
            tracing::debug!(id, "Deleted job was not in the local cache");
        }
        Ok(())
    }

    pub fn select_job(&self, job: Job) {
        self.jobs.lock().unwrap().select(job);
    }

    pub fn clear_selected_job(&self) {
        self.jobs.lock().unwrap().clear_selection();
    }

    pub fn jobs_snapshot(&self) -> StoreSnapshot<Job> {
        self.jobs.lock().unwrap().snapshot()
    }

    // ------------------------------------------------------------------
    // Interviews
    // ------------------------------------------------------------------

    pub async fn load_interviews(&self) {
        run_load(&self.interviews, "interviews", self.api.list_interviews()).await;
    }

    pub async fn schedule_interview(&self, interview: NewInterview) -> Result<Interview> {
        let created = self.api.schedule_interview(&interview).await?;
        self.interviews.lock().unwrap().append(created.clone());
        Ok(created)
    }

    pub fn select_interview(&self, interview: Interview) {
        self.interviews.lock().unwrap().select(interview);
    }

    pub fn clear_selected_interview(&self) {
        self.interviews.lock().unwrap().clear_selection();
    }

    pub fn interviews_snapshot(&self) -> StoreSnapshot<Interview> {
        self.interviews.lock().unwrap().snapshot()
    }
}

/// Drive one load through the store's generation fence.
///
/// `begin_load` runs before the request future is polled, so the store is
/// observably `Loading` from the moment the operation starts. Overlapping
/// loads are allowed; a completion that lost the race is discarded.
async fn run_load<T, F>(store: &Mutex<ResourceStore<T>>, resource: &'static str, request: F)
where
    F: Future<Output = Result<Vec<T>>>,
{
    let generation = store.lock().unwrap().begin_load();
    tracing::debug!(resource, "Loading collection");

    let result = request.await.map_err(|e| e.to_string());
    if let Err(message) = &result {
        tracing::warn!(resource, %message, "Load failed");
    }

    let applied = store.lock().unwrap().finish_load(generation, result);
    if !applied {
        tracing::debug!(resource, "Discarded stale load response");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ats_client::{CandidateStatus, JobStatus, JobType};
    use chrono::{NaiveDate, TimeZone, Utc};

    use crate::store::FetchStatus;
    use crate::testing::MockAtsApi;

    fn candidate(id: i64, name: &str) -> Candidate {
        Candidate {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555-0100".to_string(),
            position: "Backend Engineer".to_string(),
            status: CandidateStatus::Screening,
            notes: None,
        }
    }

    fn job(id: i64, title: &str) -> Job {
        Job {
            id,
            title: title.to_string(),
            department: "Engineering".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::FullTime,
            status: JobStatus::Open,
            description: "Build things".to_string(),
            requirements: vec!["Rust".to_string()],
            posted_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        }
    }

    fn new_job(title: &str) -> NewJob {
        NewJob {
            title: title.to_string(),
            department: "Engineering".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::FullTime,
            status: JobStatus::Open,
            description: "Build things".to_string(),
            requirements: vec!["Rust".to_string()],
            posted_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        }
    }

    fn new_interview(candidate_id: i64, job_id: i64) -> NewInterview {
        NewInterview {
            scheduled_time: Utc.with_ymd_and_hms(2026, 9, 1, 10, 0, 0).unwrap(),
            candidate_id,
            job_id,
        }
    }

    #[test]
    fn fresh_state_has_empty_uninitialized_stores() {
        let state = AppState::new(Arc::new(MockAtsApi::new()));

        for status in [
            state.candidates_snapshot().status,
            state.jobs_snapshot().status,
            state.interviews_snapshot().status,
        ] {
            assert_eq!(status, FetchStatus::Uninitialized);
        }
        assert!(state.candidates_snapshot().items.is_empty());
        assert!(state.candidates_snapshot().selected.is_none());
    }

    #[tokio::test]
    async fn load_candidates_publishes_server_order() {
        let api = MockAtsApi::new().with_candidates(vec![candidate(1, "Ada"), candidate(2, "Brian")]);
        let state = AppState::new(Arc::new(api));

        state.load_candidates().await;

        let snapshot = state.candidates_snapshot();
        assert_eq!(snapshot.status, FetchStatus::Ready);
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.items[0].name, "Ada");
        assert_eq!(snapshot.items[1].name, "Brian");
    }

    #[tokio::test]
    async fn failed_load_records_message_and_keeps_items() {
        let api = MockAtsApi::new().with_jobs_failure("internal server error");
        let state = AppState::new(Arc::new(api));

        state.load_jobs().await;

        let snapshot = state.jobs_snapshot();
        assert_eq!(snapshot.status, FetchStatus::Failed);
        assert!(snapshot.items.is_empty());
        assert!(!snapshot.error.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reload_overwrites_instead_of_appending() {
        let jobs = vec![job(1, "Engineer"), job(2, "Designer")];
        let api = MockAtsApi::new()
            .with_jobs(jobs.clone())
            .with_jobs(jobs);
        let state = AppState::new(Arc::new(api));

        state.load_jobs().await;
        state.load_jobs().await;

        let snapshot = state.jobs_snapshot();
        assert_eq!(snapshot.status, FetchStatus::Ready);
        assert_eq!(snapshot.items.len(), 2);
    }

    #[tokio::test]
    async fn retry_after_failure_recovers() {
        let api = MockAtsApi::new()
            .with_candidates_failure("connection reset")
            .with_candidates(vec![candidate(1, "Ada")]);
        let state = AppState::new(Arc::new(api));

        state.load_candidates().await;
        assert_eq!(state.candidates_snapshot().status, FetchStatus::Failed);

        state.load_candidates().await;
        let snapshot = state.candidates_snapshot();
        assert_eq!(snapshot.status, FetchStatus::Ready);
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.items.len(), 1);
    }

    #[tokio::test]
    async fn create_job_appends_server_copy_at_end() {
        let api = MockAtsApi::new()
            .with_jobs(vec![job(1, "Engineer")])
            .with_next_id(42);
        let state = AppState::new(Arc::new(api));

        state.load_jobs().await;
        let created = state.create_job(new_job("Staff Engineer")).await.unwrap();
        assert_eq!(created.id, 42);

        let snapshot = state.jobs_snapshot();
        assert_eq!(snapshot.status, FetchStatus::Ready);
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.items[0].id, 1);
        assert_eq!(snapshot.items[1].id, 42);
        assert_eq!(snapshot.items[1].title, "Staff Engineer");
    }

    #[tokio::test]
    async fn create_failure_propagates_without_touching_store() {
        let api = MockAtsApi::new().with_create_failure("title already exists");
        let state = AppState::new(Arc::new(api));

        let result = state.create_job(new_job("Engineer")).await;
        assert!(result.is_err());

        let snapshot = state.jobs_snapshot();
        assert_eq!(snapshot.status, FetchStatus::Uninitialized);
        assert!(snapshot.items.is_empty());
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn delete_job_removes_only_the_confirmed_id() {
        let api = MockAtsApi::new().with_jobs(vec![job(1, "Engineer"), job(42, "Designer"), job(3, "PM")]);
        let state = AppState::new(Arc::new(api));

        state.load_jobs().await;
        state.delete_job(42).await.unwrap();

        let snapshot = state.jobs_snapshot();
        let ids: Vec<i64> = snapshot.items.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_a_noop() {
        let api = MockAtsApi::new().with_jobs(vec![job(1, "Engineer")]);
        let state = AppState::new(Arc::new(api));

        state.load_jobs().await;
        state.delete_job(999).await.unwrap();

        assert_eq!(state.jobs_snapshot().items.len(), 1);
    }

    #[tokio::test]
    async fn delete_failure_leaves_local_copy_in_place() {
        let api = Arc::new(
            MockAtsApi::new()
                .with_jobs(vec![job(1, "Engineer")])
                .with_delete_failure("job is referenced by interviews"),
        );
        let state = AppState::new(api.clone());

        state.load_jobs().await;
        let result = state.delete_job(1).await;
        assert!(result.is_err());

        assert_eq!(state.jobs_snapshot().items.len(), 1);
        assert_eq!(api.delete_calls(), vec![1]);
    }

    #[tokio::test]
    async fn schedule_interview_appends_confirmed_record() {
        let api = MockAtsApi::new().with_next_id(7);
        let state = AppState::new(Arc::new(api));

        state.load_interviews().await;
        let created = state.schedule_interview(new_interview(1, 2)).await.unwrap();
        assert_eq!(created.id, 7);

        let snapshot = state.interviews_snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].candidate_id, 1);
    }

    #[tokio::test]
    async fn selection_is_independent_of_membership() {
        let state = AppState::new(Arc::new(MockAtsApi::new()));

        // Never loaded, so this candidate is not in items.
        state.select_candidate(candidate(5, "Eve"));
        assert_eq!(state.candidates_snapshot().selected.unwrap().id, 5);

        state.clear_selected_candidate();
        assert!(state.candidates_snapshot().selected.is_none());
    }
}
