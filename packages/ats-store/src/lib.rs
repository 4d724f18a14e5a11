//! Client-side caches and fetch lifecycle tracking for ATS resources.
//!
//! One [`ResourceStore`] per resource kind (candidates, jobs, interviews),
//! composed inside an explicit [`AppState`] container. The presentation
//! layer reads [`StoreSnapshot`]s and invokes the async operations; it
//! never mutates store state directly. Network access goes through the
//! [`BaseAtsApi`] seam so tests can inject [`testing::MockAtsApi`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ats_client::AtsClient;
//! use ats_store::AppState;
//!
//! let state = AppState::new(Arc::new(AtsClient::from_env()));
//! state.load_candidates().await;
//!
//! let candidates = state.candidates_snapshot();
//! println!("{} candidates ({})", candidates.items.len(), candidates.status.label());
//! ```

pub mod api;
pub mod state;
pub mod store;
pub mod testing;
pub mod traits;

pub use state::AppState;
pub use store::{FetchStatus, ResourceStore, StoreSnapshot};
pub use traits::BaseAtsApi;
