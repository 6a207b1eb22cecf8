//! Link entities as seen by the client.

use chrono::{DateTime, Utc};

/// A link record owned by the backend and fetched read-only.
///
/// The click counter is maintained server-side; the client never writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub slug: String,
    pub url: String,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl LinkRecord {
    /// Creates a new LinkRecord instance.
    pub fn new(
        slug: String,
        url: String,
        click_count: u64,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            slug,
            url,
            click_count,
            created_at,
            expires_at,
        }
    }
}

/// Result of a successful creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub short_url: String,
}

/// Input for a creation request, already normalized and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub url: String,
    pub expires_at: Option<DateTime<Utc>>,
}
