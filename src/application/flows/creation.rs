//! Creation flow: turn raw user text into a short link.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::domain::entities::{NewLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::domain::request::{Generation, RequestStatus};
use crate::error::{ClientError, EXPIRATION_NOT_IN_FUTURE, GENERIC_FAILURE, INVALID_URL};
use crate::infrastructure::clipboard::ClipboardService;
use crate::utils::expiration::validate_expiration;
use crate::utils::url_normalizer::{normalize, validate};

pub const SUBMIT_LABEL: &str = "Generate";
pub const SUBMIT_PENDING_LABEL: &str = "Generating...";

/// How long the "copied" acknowledgement stays visible.
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_secs(3);

/// Validates form input and builds the creation request.
///
/// Runs synchronously and never touches the network. The expiration input is
/// optional; blank means "no expiration".
///
/// # Errors
///
/// Returns [`ClientError::Validation`] with the user-facing message when the
/// URL is malformed or the expiration is not strictly after `now`.
pub fn prepare_submission(
    input: &str,
    expires_at: Option<&str>,
    now: DateTime<Utc>,
) -> Result<NewLink, ClientError> {
    let url = normalize(input);
    if !validate(&url) {
        return Err(ClientError::validation(INVALID_URL));
    }

    let expires_at = validate_expiration(expires_at, now)
        .map_err(|_| ClientError::validation(EXPIRATION_NOT_IN_FUTURE))?;

    Ok(NewLink { url, expires_at })
}

#[derive(Debug, Default)]
struct CreationState {
    input: String,
    expires_at: String,
    show_options: bool,
    status: RequestStatus,
    error: Option<String>,
    short_url: Option<String>,
    generation: Generation,
    copied: bool,
    copy_generation: Generation,
    copy_reset: Option<JoinHandle<()>>,
}

/// Snapshot of the creation form for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationView {
    pub input: String,
    /// Derived from `input` on every snapshot, never stored.
    pub normalized_url: String,
    pub expires_at: String,
    pub show_options: bool,
    pub status: RequestStatus,
    pub error: Option<String>,
    pub short_url: Option<String>,
    pub copied: bool,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
}

/// State machine behind the "shorten a link" form.
///
/// `Idle -> Pending -> (Succeeded | Failed)`. While pending, further submits
/// are refused with [`ClientError::Pending`]. Responses that arrive after
/// [`CreationFlow::reset`] are discarded.
pub struct CreationFlow<L: LinkRepository> {
    repository: Arc<L>,
    clipboard: Arc<dyn ClipboardService>,
    copy_feedback: Duration,
    state: Arc<Mutex<CreationState>>,
}

impl<L: LinkRepository> CreationFlow<L> {
    pub fn new(repository: Arc<L>, clipboard: Arc<dyn ClipboardService>) -> Self {
        Self {
            repository,
            clipboard,
            copy_feedback: DEFAULT_COPY_FEEDBACK,
            state: Arc::new(Mutex::new(CreationState::default())),
        }
    }

    /// Overrides how long the "copied" flag stays set.
    pub fn with_copy_feedback(mut self, copy_feedback: Duration) -> Self {
        self.copy_feedback = copy_feedback;
        self
    }

    pub async fn set_input(&self, input: impl Into<String>) {
        self.state.lock().await.input = input.into();
    }

    pub async fn set_expires_at(&self, expires_at: impl Into<String>) {
        self.state.lock().await.expires_at = expires_at.into();
    }

    /// Shows or hides the additional options. Returns the new visibility.
    ///
    /// Hiding the options keeps whatever expiration was typed.
    pub async fn toggle_options(&self) -> bool {
        let mut state = self.state.lock().await;
        state.show_options = !state.show_options;
        state.show_options
    }

    /// Validates and submits the form.
    ///
    /// On success the expiration field and the options toggle are cleared and
    /// the short URL is stored. On failure the form values are kept so the
    /// user can retry.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Pending`] if a submission is already in flight
    /// - [`ClientError::Validation`] for local validation failures (no request is sent)
    /// - [`ClientError::Server`] / [`ClientError::Transport`] from the backend
    /// - [`ClientError::Superseded`] if the form was reset while the request was in flight
    pub async fn submit(&self) -> Result<ShortLink, ClientError> {
        let (new_link, generation) = {
            let mut state = self.state.lock().await;
            if state.status.is_pending() {
                return Err(ClientError::Pending);
            }

            state.error = None;
            state.short_url = None;

            match prepare_submission(&state.input, Some(state.expires_at.as_str()), Utc::now()) {
                Ok(new_link) => {
                    state.status = RequestStatus::Pending;
                    (new_link, state.generation.advance())
                }
                Err(e) => {
                    state.status = RequestStatus::Failed;
                    state.error = Some(e.user_message(GENERIC_FAILURE));
                    return Err(e);
                }
            }
        };

        tracing::debug!(
            url = %new_link.url,
            expires_at = ?new_link.expires_at,
            generation = generation.value(),
            "Submitting link"
        );

        let result = self.repository.create(new_link).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::warn!(
                generation = generation.value(),
                "Discarding superseded creation response"
            );
            return Err(ClientError::Superseded);
        }

        match result {
            Ok(link) => {
                tracing::info!(short_url = %link.short_url, "Short link created");
                state.expires_at.clear();
                state.show_options = false;
                state.short_url = Some(link.short_url.clone());
                state.status = RequestStatus::Succeeded;
                Ok(link)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Short link creation failed");
                state.status = RequestStatus::Failed;
                state.error = Some(e.user_message(GENERIC_FAILURE));
                Err(e)
            }
        }
    }

    /// Copies the current short URL to the clipboard.
    ///
    /// On success the "copied" flag is set and a deferred clear is scheduled.
    /// A newer copy cancels the previous clear, so the flag always stays up
    /// for the full feedback period after the latest copy.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] when there is nothing to copy,
    /// [`ClientError::Clipboard`] when the write fails and
    /// [`ClientError::Superseded`] when the form was reset or resubmitted
    /// during the write. None of them touches the flag.
    pub async fn copy(&self) -> Result<(), ClientError> {
        let (short_url, generation) = {
            let state = self.state.lock().await;
            let short_url = state
                .short_url
                .clone()
                .ok_or_else(|| ClientError::validation("There is no short link to copy yet"))?;
            (short_url, state.generation)
        };

        self.clipboard.write_text(&short_url).await.map_err(|e| {
            tracing::warn!(error = %e, "Copy to clipboard failed");
            ClientError::Clipboard(e.to_string())
        })?;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::debug!(
                generation = generation.value(),
                "Form changed during copy, not acknowledging"
            );
            return Err(ClientError::Superseded);
        }
        state.copied = true;
        let copy_generation = state.copy_generation.advance();
        if let Some(previous) = state.copy_reset.take() {
            previous.abort();
        }

        let shared = Arc::clone(&self.state);
        let delay = self.copy_feedback;
        state.copy_reset = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = shared.lock().await;
            if state.copy_generation == copy_generation {
                state.copied = false;
                state.copy_reset = None;
            }
        }));

        Ok(())
    }

    /// Returns the form to its initial state, as when navigating away.
    ///
    /// Any in-flight response is discarded when it arrives.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        if let Some(timer) = state.copy_reset.take() {
            timer.abort();
        }
        let generation = state.generation.advance();
        let copy_generation = state.copy_generation.advance();
        *state = CreationState {
            generation,
            copy_generation,
            ..CreationState::default()
        };
    }

    pub async fn view(&self) -> CreationView {
        let state = self.state.lock().await;
        CreationView {
            input: state.input.clone(),
            normalized_url: normalize(&state.input),
            expires_at: state.expires_at.clone(),
            show_options: state.show_options,
            status: state.status,
            error: state.error.clone(),
            short_url: state.short_url.clone(),
            copied: state.copied,
            submit_label: state.status.label(SUBMIT_LABEL, SUBMIT_PENDING_LABEL),
            submit_enabled: state.status.control_enabled(),
        }
    }
}
