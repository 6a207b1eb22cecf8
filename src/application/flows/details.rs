//! Details flow: show statistics for a slug and delete it on confirmation.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::LinkRecord;
use crate::domain::navigation::Route;
use crate::domain::repositories::LinkRepository;
use crate::domain::request::{Generation, RequestStatus};
use crate::error::{ClientError, EMPTY_SLUG, GENERIC_FAILURE};
use crate::utils::timestamp::format_local;

pub const DELETE_LABEL: &str = "Delete";
pub const DELETE_PENDING_LABEL: &str = "Deleting...";
pub const DELETE_CONFIRMATION: &str =
    "Are you sure you want to delete this link? This cannot be undone.";

const NOT_LOADED: &str = "Link details are not loaded yet.";

#[derive(Debug, Default)]
enum Load {
    #[default]
    Idle,
    Loading,
    Loaded(LinkRecord),
    Failed(ClientError),
}

#[derive(Debug, Default)]
struct DetailsState {
    slug: Option<String>,
    load: Load,
    generation: Generation,
    delete_status: RequestStatus,
    delete_error: Option<String>,
}

/// Statistics ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDetails {
    pub record: LinkRecord,
    /// `created_at` rendered in the viewer's local time.
    pub created_at_local: String,
    pub expires_at_local: Option<String>,
    pub delete_label: &'static str,
    pub delete_enabled: bool,
    pub delete_error: Option<String>,
}

/// What the details view shows. A load error replaces everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsView {
    /// No slug mounted.
    Empty,
    Loading { slug: String },
    Error { slug: String, message: String },
    Loaded(Box<LoadedDetails>),
}

/// Result of a delete request the user was asked about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent.
    Cancelled,
    /// The link is gone; navigate to the given route.
    Deleted(Route),
}

/// State machine behind the statistics page.
///
/// Every fetch is tagged with the generation current at dispatch. Switching
/// to another slug, reloading or resetting advances the generation, so a
/// response for an older context is dropped instead of rendered.
pub struct DetailsFlow<L: LinkRepository> {
    repository: Arc<L>,
    state: Mutex<DetailsState>,
}

impl<L: LinkRepository> DetailsFlow<L> {
    pub fn new(repository: Arc<L>) -> Self {
        Self {
            repository,
            state: Mutex::new(DetailsState::default()),
        }
    }

    /// Mounts the view for `slug` and fetches its statistics.
    ///
    /// Fetches once per distinct slug. Loading the slug that is already
    /// mounted sends nothing: it succeeds while the statistics are loading or
    /// shown, and returns the stored error if the fetch failed. Use
    /// [`DetailsFlow::reload`] to fetch again.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] for a blank slug
    /// - [`ClientError::Server`] / [`ClientError::Transport`] from the backend
    /// - [`ClientError::Superseded`] if another slug was mounted meanwhile
    pub async fn load(&self, slug: &str) -> Result<(), ClientError> {
        if slug.trim().is_empty() {
            return Err(ClientError::validation(EMPTY_SLUG));
        }

        let generation = {
            let mut state = self.state.lock().await;
            if state.slug.as_deref() == Some(slug) {
                match &state.load {
                    Load::Idle => {}
                    Load::Failed(e) => return Err(e.clone()),
                    Load::Loading | Load::Loaded(_) => {
                        tracing::debug!(slug, "Details already mounted, skipping fetch");
                        return Ok(());
                    }
                }
            }
            state.slug = Some(slug.to_string());
            Self::begin_fetch(&mut state)
        };

        self.fetch(slug, generation).await
    }

    /// Fetches the mounted slug again.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] when no slug is mounted, otherwise
    /// the same errors as [`DetailsFlow::load`].
    pub async fn reload(&self) -> Result<(), ClientError> {
        let (slug, generation) = {
            let mut state = self.state.lock().await;
            let slug = state
                .slug
                .clone()
                .ok_or_else(|| ClientError::validation(EMPTY_SLUG))?;
            (slug, Self::begin_fetch(&mut state))
        };

        self.fetch(&slug, generation).await
    }

    /// A delete still in flight keeps its pending status so the control
    /// stays disabled until it completes.
    fn begin_fetch(state: &mut DetailsState) -> Generation {
        state.load = Load::Loading;
        if !state.delete_status.is_pending() {
            state.delete_status = RequestStatus::Idle;
            state.delete_error = None;
        }
        state.generation.advance()
    }

    async fn fetch(&self, slug: &str, generation: Generation) -> Result<(), ClientError> {
        tracing::debug!(slug, generation = generation.value(), "Loading link details");
        let result = self.repository.find_stats(slug).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::warn!(
                slug,
                generation = generation.value(),
                "Discarding stale statistics response"
            );
            return Err(ClientError::Superseded);
        }

        match result {
            Ok(record) => {
                tracing::info!(slug, clicks = record.click_count, "Link details loaded");
                state.load = Load::Loaded(record);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(slug, error = %e, "Failed to load link details");
                state.load = Load::Failed(e.clone());
                Err(e)
            }
        }
    }

    /// Deletes the mounted link after asking `confirm`.
    ///
    /// `confirm` receives the question to put to the user; nothing is sent
    /// unless it returns `true`. On success the view is unmounted and the
    /// caller should navigate to the returned route. On failure the
    /// statistics stay on screen with the error next to the delete control.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] if no statistics are loaded
    /// - [`ClientError::Pending`] if a delete is already in flight
    /// - [`ClientError::Server`] / [`ClientError::Transport`] from the backend
    /// - [`ClientError::Superseded`] if the view changed meanwhile
    pub async fn delete<F>(&self, confirm: F) -> Result<DeleteOutcome, ClientError>
    where
        F: FnOnce(&str) -> bool,
    {
        let (slug, generation) = self.deletable().await?;

        if !confirm(DELETE_CONFIRMATION) {
            tracing::info!(slug = %slug, "Deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        {
            let mut state = self.state.lock().await;
            if state.generation != generation {
                return Err(ClientError::Superseded);
            }
            if state.delete_status.is_pending() {
                return Err(ClientError::Pending);
            }
            state.delete_status = RequestStatus::Pending;
            state.delete_error = None;
        }

        tracing::debug!(slug = %slug, "Deleting link");
        let result = self.repository.delete(&slug).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::warn!(slug = %slug, "Discarding superseded delete response");
            state.delete_status = RequestStatus::Idle;
            return Err(ClientError::Superseded);
        }

        match result {
            Ok(()) => {
                tracing::info!(slug = %slug, "Link deleted");
                let generation = state.generation.advance();
                *state = DetailsState {
                    generation,
                    ..DetailsState::default()
                };
                Ok(DeleteOutcome::Deleted(Route::Home))
            }
            Err(e) => {
                tracing::warn!(slug = %slug, error = %e, "Link deletion failed");
                state.delete_status = RequestStatus::Failed;
                state.delete_error = Some(e.user_message(GENERIC_FAILURE));
                Err(e)
            }
        }
    }

    async fn deletable(&self) -> Result<(String, Generation), ClientError> {
        let state = self.state.lock().await;
        let slug = match (&state.slug, &state.load) {
            (Some(slug), Load::Loaded(_)) => slug.clone(),
            _ => return Err(ClientError::validation(NOT_LOADED)),
        };
        if state.delete_status.is_pending() {
            return Err(ClientError::Pending);
        }
        Ok((slug, state.generation))
    }

    /// Unmounts the view; in-flight responses are discarded.
    ///
    /// A delete still in flight keeps blocking new deletes until it completes.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        let generation = state.generation.advance();
        let delete_status = match state.delete_status {
            RequestStatus::Pending => RequestStatus::Pending,
            _ => RequestStatus::Idle,
        };
        *state = DetailsState {
            generation,
            delete_status,
            ..DetailsState::default()
        };
    }

    pub async fn view(&self) -> DetailsView {
        let state = self.state.lock().await;
        let Some(slug) = state.slug.clone() else {
            return DetailsView::Empty;
        };

        match &state.load {
            Load::Idle | Load::Loading => DetailsView::Loading { slug },
            Load::Failed(e) => DetailsView::Error {
                slug,
                message: e.user_message(GENERIC_FAILURE),
            },
            Load::Loaded(record) => DetailsView::Loaded(Box::new(LoadedDetails {
                record: record.clone(),
                created_at_local: format_local(&record.created_at),
                expires_at_local: record.expires_at.as_ref().map(format_local),
                delete_label: state
                    .delete_status
                    .label(DELETE_LABEL, DELETE_PENDING_LABEL),
                delete_enabled: state.delete_status.control_enabled(),
                delete_error: state.delete_error.clone(),
            })),
        }
    }
}
