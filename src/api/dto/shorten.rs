//! DTOs for the link shortening endpoint.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewLink, ShortLink};

/// Body of `POST /api/shorten`.
///
/// `expiresAt` is always present on the wire, `null` when no expiration was given.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub url: String,
    pub expires_at: Option<String>,
}

impl From<&NewLink> for ShortenRequest {
    fn from(new_link: &NewLink) -> Self {
        Self {
            url: new_link.url.clone(),
            expires_at: new_link
                .expires_at
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

/// Successful response of `POST /api/shorten`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    #[serde(alias = "short_url")]
    pub short_url: String,
}

impl From<ShortenResponse> for ShortLink {
    fn from(response: ShortenResponse) -> Self {
        Self {
            short_url: response.short_url,
        }
    }
}
