//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::Repository;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    repository: Repository,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(repository: Repository) -> Self {
        Self {
            inner: Arc::new(AppStateInner { repository }),
        }
    }

    /// Get the repository.
    #[must_use]
    pub fn repository(&self) -> &Repository {
        &self.inner.repository
    }
}
