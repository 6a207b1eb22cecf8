//! Lookup flow: confirm a typed slug exists before opening its details.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::navigation::Route;
use crate::domain::repositories::LinkRepository;
use crate::domain::request::{Generation, RequestStatus};
use crate::error::{ClientError, EMPTY_SLUG, LINK_NOT_FOUND};

pub const SEARCH_LABEL: &str = "Search";
pub const SEARCH_PENDING_LABEL: &str = "Searching...";

#[derive(Debug, Default)]
struct LookupState {
    slug: String,
    status: RequestStatus,
    error: Option<String>,
    generation: Generation,
}

/// Snapshot of the search form for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupView {
    pub slug: String,
    pub status: RequestStatus,
    pub error: Option<String>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
}

/// State machine behind the "find a link" form.
///
/// The statistics fetch is only an existence check; its payload is discarded
/// and the details flow fetches again after navigation.
pub struct LookupFlow<L: LinkRepository> {
    repository: Arc<L>,
    state: Mutex<LookupState>,
}

impl<L: LinkRepository> LookupFlow<L> {
    pub fn new(repository: Arc<L>) -> Self {
        Self {
            repository,
            state: Mutex::new(LookupState::default()),
        }
    }

    pub async fn set_slug(&self, slug: impl Into<String>) {
        self.state.lock().await.slug = slug.into();
    }

    /// Checks that the typed slug resolves and returns where to navigate.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] for a blank slug (no request is sent)
    /// - [`ClientError::Pending`] if a search is already in flight
    /// - [`ClientError::Server`] / [`ClientError::Transport`] from the backend
    /// - [`ClientError::Superseded`] if the form was reset meanwhile
    pub async fn search(&self) -> Result<Route, ClientError> {
        let (slug, generation) = {
            let mut state = self.state.lock().await;
            if state.status.is_pending() {
                return Err(ClientError::Pending);
            }

            state.error = None;
            let slug = state.slug.trim().to_string();
            if slug.is_empty() {
                state.status = RequestStatus::Failed;
                state.error = Some(EMPTY_SLUG.to_string());
                return Err(ClientError::validation(EMPTY_SLUG));
            }

            state.status = RequestStatus::Pending;
            (slug, state.generation.advance())
        };

        tracing::debug!(slug = %slug, generation = generation.value(), "Looking up link");
        let result = self.repository.find_stats(&slug).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::warn!(slug = %slug, "Discarding superseded lookup response");
            return Err(ClientError::Superseded);
        }

        match result {
            Ok(_) => {
                state.status = RequestStatus::Succeeded;
                Ok(Route::Details(slug))
            }
            Err(e) => {
                tracing::warn!(slug = %slug, error = %e, "Lookup failed");
                state.status = RequestStatus::Failed;
                state.error = Some(e.user_message(LINK_NOT_FOUND));
                Err(e)
            }
        }
    }

    /// Clears the form; an in-flight search is discarded when it completes.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        let generation = state.generation.advance();
        *state = LookupState {
            generation,
            ..LookupState::default()
        };
    }

    pub async fn view(&self) -> LookupView {
        let state = self.state.lock().await;
        LookupView {
            slug: state.slug.clone(),
            status: state.status,
            error: state.error.clone(),
            submit_label: state.status.label(SEARCH_LABEL, SEARCH_PENDING_LABEL),
            submit_enabled: state.status.control_enabled(),
        }
    }
}
