//! Load all three collections from a running backend and print a summary.

use std::sync::Arc;

use ats_client::AtsClient;
use ats_store::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let state = AppState::new(Arc::new(AtsClient::from_env()));

    state.load_candidates().await;
    state.load_jobs().await;
    state.load_interviews().await;

    let candidates = state.candidates_snapshot();
    let jobs = state.jobs_snapshot();
    let interviews = state.interviews_snapshot();

    println!("=== Pipeline Summary ===");
    println!(
        "candidates: {} ({})",
        candidates.items.len(),
        candidates.status.label()
    );
    println!("jobs: {} ({})", jobs.items.len(), jobs.status.label());
    println!(
        "interviews: {} ({})",
        interviews.items.len(),
        interviews.status.label()
    );

    for (resource, error) in [
        ("candidates", candidates.error),
        ("jobs", jobs.error),
        ("interviews", interviews.error),
    ] {
        if let Some(message) = error {
            eprintln!("{resource}: load failed: {message}");
        }
    }
}
