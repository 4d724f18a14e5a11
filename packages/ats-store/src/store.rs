//! Fetch lifecycle state machine for one cached resource collection.

/// Fetch lifecycle state of a [`ResourceStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

impl FetchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FetchStatus::Uninitialized => "uninitialized",
            FetchStatus::Loading => "loading",
            FetchStatus::Ready => "ready",
            FetchStatus::Failed => "failed",
        }
    }
}

/// Cloned read view of a store, handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct StoreSnapshot<T> {
    pub items: Vec<T>,
    pub status: FetchStatus,
    pub error: Option<String>,
    pub selected: Option<T>,
}

/// Client-side authoritative cache for one resource kind.
///
/// The store is a synchronous state machine; the async boundary lives in
/// the caller ([`AppState`](crate::AppState)). A load is split into
/// [`begin_load`](Self::begin_load), which hands out a generation token,
/// and [`finish_load`](Self::finish_load), which applies the outcome only
/// if no newer load has started since. Records are opaque: the store never
/// inspects fields, so removal goes through a caller-supplied predicate.
#[derive(Debug)]
pub struct ResourceStore<T> {
    items: Vec<T>,
    status: FetchStatus,
    error: Option<String>,
    selected: Option<T>,
    generation: u64,
}

impl<T> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            status: FetchStatus::Uninitialized,
            error: None,
            selected: None,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Start a load: transition to `Loading`, clear any previous error,
    /// and return the generation token for the matching `finish_load`.
    pub fn begin_load(&mut self) -> u64 {
        self.status = FetchStatus::Loading;
        self.error = None;
        self.generation += 1;
        self.generation
    }

    /// Apply the outcome of the load started with `generation`.
    ///
    /// Returns `false` when a newer load superseded this one; the stale
    /// response is discarded and the store is left untouched. On success
    /// the collection is replaced wholesale; on failure the cached items
    /// survive and only `status`/`error` change.
    pub fn finish_load(&mut self, generation: u64, result: Result<Vec<T>, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.status = FetchStatus::Ready;
                self.error = None;
            }
            Err(message) => {
                self.status = FetchStatus::Failed;
                self.error = Some(message);
            }
        }
        true
    }

    /// Append a server-confirmed record. Fetch status is untouched.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the first item matching `predicate`, preserving
    /// the order of the rest. No match is a no-op.
    pub fn remove_first_where<F>(&mut self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let index = self.items.iter().position(predicate)?;
        Some(self.items.remove(index))
    }

    /// Set the selection. Membership in `items` is not validated.
    pub fn select(&mut self, item: T) {
        self.selected = Some(item);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

impl<T: Clone> ResourceStore<T> {
    pub fn snapshot(&self) -> StoreSnapshot<T> {
        StoreSnapshot {
            items: self.items.clone(),
            status: self.status,
            error: self.error.clone(),
            selected: self.selected.clone(),
        }
    }
}
