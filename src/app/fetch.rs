//! Background task running the mount-time fetch sequence.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::AppMessage;
use crate::catalog::{fetch_catalog, CatalogClient};
use crate::config::FetchMode;
use crate::traits::HttpClient;

/// Handle to the spawned fetch sequence.
///
/// Dropping the handle aborts the task, so an in-flight request never
/// outlives the view that started it.
#[derive(Debug)]
pub struct FetchTask {
    handle: JoinHandle<()>,
}

impl FetchTask {
    /// Spawn the fetch sequence on the current tokio runtime.
    ///
    /// The result is sent as a single [`AppMessage::CatalogLoaded`].
    pub fn spawn<C>(
        client: CatalogClient<C>,
        mode: FetchMode,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self
    where
        C: HttpClient + 'static,
    {
        let handle = tokio::spawn(async move {
            let snapshot = fetch_catalog(&client, mode).await;
            if message_tx.send(AppMessage::CatalogLoaded(snapshot)).is_err() {
                tracing::debug!("View closed before the catalog arrived; result dropped");
            }
        });
        Self { handle }
    }

    /// Abort the task. Requests still in flight are dropped.
    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            tracing::debug!("Cancelling catalog fetch");
        }
        self.handle.abort();
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::config::ClientConfig;
    use std::time::Duration;

    fn mock_client() -> (MockHttpClient, CatalogClient<MockHttpClient>) {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(serde_json::json!([])));
        let client = CatalogClient::with_http(mock.clone(), &ClientConfig::new("http://api.test"));
        (mock, client)
    }

    #[tokio::test]
    async fn test_spawned_task_sends_one_message() {
        let (_mock, client) = mock_client();
        let (tx, mut rx) = mpsc::unbounded_channel();

        let _task = FetchTask::spawn(client, FetchMode::Sequential, tx);

        let msg = rx.recv().await.unwrap();
        let AppMessage::CatalogLoaded(snapshot) = msg;
        assert!(snapshot.is_complete());
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_result() {
        let (mock, client) = mock_client();
        mock.set_delay(Duration::from_secs(30));
        let (tx, mut rx) = mpsc::unbounded_channel();

        let task = FetchTask::spawn(client, FetchMode::Sequential, tx);
        tokio::task::yield_now().await;
        task.cancel();

        // The sender lives in the aborted task, so the channel closes empty.
        assert!(rx.recv().await.is_none());
        assert_eq!(mock.request_count("http://api.test/items/"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let (mock, client) = mock_client();
        mock.set_delay(Duration::from_secs(30));
        let (tx, mut rx) = mpsc::unbounded_channel();

        let task = FetchTask::spawn(client, FetchMode::Sequential, tx);
        drop(task);

        assert!(rx.recv().await.is_none());
    }
}
