//! Application state and lifecycle of the catalog view.
//!
//! [`App`] owns the [`CatalogView`] and the background fetch that fills it.
//! The fetch is started once by [`App::mount`] and is tied to the view's
//! lifetime: [`App::unmount`], or dropping the `App`, aborts it and any
//! result that still arrives is discarded.

mod fetch;
mod handlers;
mod messages;

pub use fetch::FetchTask;
pub use messages::AppMessage;

use tokio::sync::mpsc;

use crate::adapters::ReqwestHttpClient;
use crate::catalog::CatalogClient;
use crate::traits::HttpClient;
use crate::view_state::CatalogView;

/// Where the view is in its mount lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created, fetch not started
    Created,
    /// Fetch started; messages are applied
    Mounted,
    /// Torn down; messages are discarded
    Unmounted,
}

/// Root of the catalog client.
pub struct App<C = ReqwestHttpClient> {
    /// Data rendered by the UI
    pub view: CatalogView,
    /// Flag indicating if the app should quit
    pub should_quit: bool,
    /// Set when state changed since the last draw
    pub needs_redraw: bool,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver drained by the event loop (taken by it at startup)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    client: CatalogClient<C>,
    fetch_task: Option<FetchTask>,
    lifecycle: Lifecycle,
}

impl<C: HttpClient + 'static> App<C> {
    /// The fetch ordering comes from the client's configuration.
    pub fn new(client: CatalogClient<C>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            view: CatalogView::new(),
            should_quit: false,
            needs_redraw: true,
            message_tx,
            message_rx: Some(message_rx),
            client,
            fetch_task: None,
            lifecycle: Lifecycle::Created,
        }
    }

    /// Start the fetch sequence. Only the first call has an effect.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Created {
            return false;
        }
        let mode = self.client.fetch_mode();
        tracing::info!(base = self.client.base_url(), %mode, "Mounting catalog view");
        self.fetch_task = Some(FetchTask::spawn(
            self.client.clone(),
            mode,
            self.message_tx.clone(),
        ));
        self.lifecycle = Lifecycle::Mounted;
        true
    }

    /// Tear the view down and cancel a fetch that is still running.
    pub fn unmount(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            task.cancel();
        }
        if self.lifecycle == Lifecycle::Mounted {
            tracing::debug!("Catalog view unmounted");
        }
        self.lifecycle = Lifecycle::Unmounted;
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Mark the app as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply incoming messages until both lists have settled.
    ///
    /// Returns immediately if the receiver was already taken by an event
    /// loop.
    pub async fn wait_until_settled(&mut self) {
        let Some(mut rx) = self.message_rx.take() else {
            return;
        };
        while self.is_mounted() && !self.view.is_settled() {
            match rx.recv().await {
                Some(msg) => self.handle_message(msg),
                None => break,
            }
        }
        self.message_rx = Some(rx);
    }
}
