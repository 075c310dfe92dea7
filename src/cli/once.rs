//! `--once`: fetch the catalog, render it as text and report the outcome.

use std::process::ExitCode;

use crate::app::App;
use crate::catalog::CatalogClient;
use crate::traits::HttpClient;
use crate::ui::render_plain;

/// Result of a single non-interactive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnceReport {
    /// Plain-text catalog, ready to print
    pub text: String,
    /// Whether either list failed to load
    pub failed: bool,
}

impl OnceReport {
    /// `FAILURE` if either list failed, `SUCCESS` otherwise.
    pub fn exit_code(&self) -> ExitCode {
        if self.failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Mount a view, wait for both lists to settle, then tear it down.
pub async fn run_once<C: HttpClient + 'static>(client: CatalogClient<C>) -> OnceReport {
    let mut app = App::new(client);
    app.mount();
    app.wait_until_settled().await;
    app.unmount();

    OnceReport {
        text: render_plain(&app.view),
        failed: app.view.has_failures(),
    }
}
