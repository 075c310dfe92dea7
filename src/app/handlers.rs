//! Message and key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, AppMessage};
use crate::traits::HttpClient;

impl<C: HttpClient + 'static> App<C> {
    /// Handle an incoming async message.
    ///
    /// Messages that arrive after the view was unmounted are discarded.
    pub fn handle_message(&mut self, msg: AppMessage) {
        if !self.is_mounted() {
            tracing::debug!("Discarding message for unmounted view: {:?}", msg);
            return;
        }

        match msg {
            AppMessage::CatalogLoaded(snapshot) => {
                let categories = snapshot.categories.as_ref().map(Vec::len).ok();
                let items = snapshot.items.as_ref().map(Vec::len).ok();
                if self.view.apply(snapshot) {
                    tracing::info!(?categories, ?items, "Catalog view updated");
                    self.mark_dirty();
                }
            }
        }
    }

    /// Handle a key press. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let handled = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                true
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit();
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.view.toggle_focus();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.view.select_next();
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.view.select_previous();
                true
            }
            _ => false,
        };
        if handled {
            self.mark_dirty();
        }
        handled
    }
}
