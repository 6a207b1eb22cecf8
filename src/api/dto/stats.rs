//! DTOs for the link statistics endpoint.

use serde::Deserialize;

use crate::domain::entities::LinkRecord;
use crate::utils::timestamp::{TimestampError, parse_instant};

/// Successful response of `GET /api/stats/{slug}`.
///
/// Backends disagree on naming, so both camelCase and snake_case fields are
/// accepted. A missing `slug` falls back to the slug that was requested.
#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub slug: Option<String>,
    pub url: String,
    #[serde(alias = "clickCount", alias = "click_count")]
    pub clicks: u64,
    #[serde(rename = "createdAt", alias = "created_at")]
    pub created_at: String,
    #[serde(rename = "expiresAt", alias = "expires_at", default)]
    pub expires_at: Option<String>,
}

impl StatsResponse {
    /// Converts the payload into a [`LinkRecord`], parsing timestamps as instants.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError`] if a timestamp is not a recognised instant.
    pub fn into_record(self, requested_slug: &str) -> Result<LinkRecord, TimestampError> {
        let created_at = parse_instant(&self.created_at)?;
        let expires_at = self
            .expires_at
            .as_deref()
            .map(parse_instant)
            .transpose()?;

        Ok(LinkRecord::new(
            self.slug.unwrap_or_else(|| requested_slug.to_string()),
            self.url,
            self.clicks,
            created_at,
            expires_at,
        ))
    }
}
