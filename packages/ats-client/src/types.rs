use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline stage of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStatus {
    #[serde(rename = "New Application")]
    NewApplication,
    #[serde(rename = "Screening")]
    Screening,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    #[serde(rename = "Technical Assessment")]
    TechnicalAssessment,
    #[serde(rename = "Offer Extended")]
    OfferExtended,
    #[serde(rename = "Hired")]
    Hired,
    #[serde(rename = "Rejected")]
    Rejected,
}

/// A candidate record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub status: CandidateStatus,
    pub notes: Option<String>,
}

/// Write payload for creating a candidate. The server assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub status: CandidateStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Employment type of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
    #[serde(rename = "Internship")]
    Internship,
    #[serde(rename = "Temporary")]
    Temporary,
}

/// Lifecycle state of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    #[serde(rename = "Open")]
    Open,
    #[serde(rename = "On Hold")]
    OnHold,
    #[serde(rename = "Closed")]
    Closed,
}

/// A job posting as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub status: JobStatus,
    pub description: String,
    pub requirements: Vec<String>,
    #[serde(rename = "postedDate")]
    pub posted_date: NaiveDate,
}

/// Write payload for creating a job posting.
#[derive(Debug, Clone, Serialize)]
pub struct NewJob {
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub status: JobStatus,
    pub description: String,
    pub requirements: Vec<String>,
    #[serde(rename = "postedDate")]
    pub posted_date: NaiveDate,
}

/// A scheduled interview linking a candidate to a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: i64,
    #[serde(rename = "scheduledTime")]
    pub scheduled_time: DateTime<Utc>,
    #[serde(rename = "candidateId")]
    pub candidate_id: i64,
    #[serde(rename = "jobId")]
    pub job_id: i64,
}

/// Write payload for scheduling an interview.
#[derive(Debug, Clone, Serialize)]
pub struct NewInterview {
    #[serde(rename = "scheduledTime")]
    pub scheduled_time: DateTime<Utc>,
    #[serde(rename = "candidateId")]
    pub candidate_id: i64,
    #[serde(rename = "jobId")]
    pub job_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_decodes_wire_status_strings() {
        let body = r#"{
            "id": 1,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "555-0100",
            "position": "Backend Engineer",
            "status": "New Application"
        }"#;

        let candidate: Candidate = serde_json::from_str(body).unwrap();
        assert_eq!(candidate.status, CandidateStatus::NewApplication);
        assert!(candidate.notes.is_none());
    }

    #[test]
    fn candidate_with_unknown_status_fails_to_decode() {
        let body = r#"{
            "id": 1,
            "name": "Ada",
            "email": "ada@example.com",
            "phone": "555-0100",
            "position": "Engineer",
            "status": "Ghosted"
        }"#;

        assert!(serde_json::from_str::<Candidate>(body).is_err());
    }

    #[test]
    fn job_decodes_renamed_fields() {
        let body = r#"{
            "id": 42,
            "title": "Staff Engineer",
            "department": "Engineering",
            "location": "Remote",
            "type": "Full-time",
            "status": "On Hold",
            "description": "Build things",
            "requirements": ["Rust", "HTTP"],
            "postedDate": "2026-08-01"
        }"#;

        let job: Job = serde_json::from_str(body).unwrap();
        assert_eq!(job.job_type, JobType::FullTime);
        assert_eq!(job.status, JobStatus::OnHold);
        assert_eq!(job.requirements, vec!["Rust", "HTTP"]);
    }

    #[test]
    fn new_candidate_omits_absent_notes() {
        let payload = NewCandidate {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            position: "Engineer".to_string(),
            status: CandidateStatus::Screening,
            notes: None,
        };

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["status"], "Screening");
        assert!(body.get("notes").is_none());
    }

    #[test]
    fn new_job_serializes_wire_names() {
        let payload = NewJob {
            title: "Engineer".to_string(),
            department: "Engineering".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::Contract,
            status: JobStatus::Open,
            description: "Build things".to_string(),
            requirements: vec![],
            posted_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        };

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["type"], "Contract");
        assert_eq!(body["postedDate"], "2026-08-01");
    }
}
