//! Hand-driven repository for exercising request races in unit tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc, oneshot};

use crate::domain::entities::{LinkRecord, NewLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::ClientError;

type Reply<T> = oneshot::Receiver<Result<T, ClientError>>;

/// Repository whose responses are released by the test.
///
/// Every call is announced on the channel returned by [`ScriptedRepository::new`]
/// (`"create"`, the slug for statistics, `"delete <slug>"`) and then waits for
/// the reply scripted for it.
pub(crate) struct ScriptedRepository {
    calls: mpsc::UnboundedSender<String>,
    creates: Mutex<VecDeque<Reply<ShortLink>>>,
    stats: Mutex<HashMap<String, Reply<LinkRecord>>>,
    deletes: Mutex<HashMap<String, Reply<()>>>,
}

impl ScriptedRepository {
    pub(crate) fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<String>) {
        let (calls, rx) = mpsc::unbounded_channel();
        let repo = Self {
            calls,
            creates: Mutex::new(VecDeque::new()),
            stats: Mutex::new(HashMap::new()),
            deletes: Mutex::new(HashMap::new()),
        };
        (Arc::new(repo), rx)
    }

    pub(crate) async fn script_create(&self) -> oneshot::Sender<Result<ShortLink, ClientError>> {
        let (tx, rx) = oneshot::channel();
        self.creates.lock().await.push_back(rx);
        tx
    }

    pub(crate) async fn script_stats(
        &self,
        slug: &str,
    ) -> oneshot::Sender<Result<LinkRecord, ClientError>> {
        let (tx, rx) = oneshot::channel();
        self.stats.lock().await.insert(slug.to_string(), rx);
        tx
    }

    pub(crate) async fn script_delete(&self, slug: &str) -> oneshot::Sender<Result<(), ClientError>> {
        let (tx, rx) = oneshot::channel();
        self.deletes.lock().await.insert(slug.to_string(), rx);
        tx
    }

    async fn wait<T>(reply: Option<Reply<T>>, call: &str) -> Result<T, ClientError> {
        let reply = reply.unwrap_or_else(|| panic!("unscripted call: {call}"));
        reply
            .await
            .unwrap_or_else(|_| Err(ClientError::transport("reply dropped")))
    }
}

#[async_trait]
impl LinkRepository for ScriptedRepository {
    async fn create(&self, _new_link: NewLink) -> Result<ShortLink, ClientError> {
        let _ = self.calls.send("create".to_string());
        let reply = self.creates.lock().await.pop_front();
        Self::wait(reply, "create").await
    }

    async fn find_stats(&self, slug: &str) -> Result<LinkRecord, ClientError> {
        let _ = self.calls.send(slug.to_string());
        let reply = self.stats.lock().await.remove(slug);
        Self::wait(reply, slug).await
    }

    async fn delete(&self, slug: &str) -> Result<(), ClientError> {
        let call = format!("delete {slug}");
        let _ = self.calls.send(call.clone());
        let reply = self.deletes.lock().await.remove(slug);
        Self::wait(reply, &call).await
    }
}

/// A record created at 2024-01-01T00:00:00Z.
pub(crate) fn record(slug: &str, clicks: u64) -> LinkRecord {
    LinkRecord::new(
        slug.to_string(),
        format!("https://example.com/{slug}"),
        clicks,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        None,
    )
}
