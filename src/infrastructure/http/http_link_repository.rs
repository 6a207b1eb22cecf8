//! HTTP/JSON implementation of the link repository.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::dto::error::ErrorBody;
use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::dto::stats::StatsResponse;
use crate::api::routes;
use crate::domain::entities::{LinkRecord, NewLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::ClientError;

/// Repository talking to the link backend over HTTP.
///
/// The base URL is injected at construction; nothing is read from the
/// environment here. No client-side timeout is configured, so a slow backend
/// keeps the calling flow pending until the transport gives up.
#[derive(Debug, Clone)]
pub struct HttpLinkRepository {
    client: Client,
    base_url: Url,
}

impl HttpLinkRepository {
    /// Creates a repository with a default HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if `base_url` is not an absolute
    /// HTTP(S) URL, or [`ClientError::Transport`] if the client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::validation(format!("Invalid API base URL: {e}")))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::validation(format!(
                "API base URL must use http or https, got '{}'",
                base_url.scheme()
            )));
        }

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, base_url))
    }

    /// Creates a repository around an existing client.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Turns a non-2xx response into [`ClientError::Server`], extracting the
    /// `error` field when the body carries one.
    async fn ensure_success(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let bytes = response.bytes().await.unwrap_or_default();
        let message = ErrorBody::from_slice(&bytes).message();
        tracing::warn!(status = status.as_u16(), message = ?message, "Backend returned an error");

        Err(ClientError::server(status.as_u16(), message))
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::transport(format!("Malformed response body: {e}")))
    }
}

#[async_trait]
impl LinkRepository for HttpLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<ShortLink, ClientError> {
        let url = routes::shorten(&self.base_url);
        tracing::debug!(%url, long_url = %new_link.url, "Creating short link");

        let response = self
            .client
            .post(url)
            .json(&ShortenRequest::from(&new_link))
            .send()
            .await?;

        let body: ShortenResponse = Self::read_json(response).await?;
        Ok(body.into())
    }

    async fn find_stats(&self, slug: &str) -> Result<LinkRecord, ClientError> {
        let url = routes::stats(&self.base_url, slug);
        tracing::debug!(%url, slug, "Fetching link statistics");

        let response = self.client.get(url).send().await?;
        let body: StatsResponse = Self::read_json(response).await?;

        body.into_record(slug)
            .map_err(|e| ClientError::transport(format!("Malformed statistics payload: {e}")))
    }

    async fn delete(&self, slug: &str) -> Result<(), ClientError> {
        let url = routes::link(&self.base_url, slug);
        tracing::debug!(%url, slug, "Deleting link");

        let response = self.client.delete(url).send().await?;
        Self::ensure_success(response).await?;

        tracing::debug!(slug, "Link deleted");
        Ok(())
    }
}
