use gimme::app::App;
use gimme::catalog::CatalogClient;
use gimme::cli::{handle_version_command, parse_args, run_once, CliCommand, VERSION};
use gimme::config::ClientConfig;
use gimme::terminal::{setup_panic_hook, TerminalManager};
use gimme::{logging, ui};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let options = parse_args(std::env::args())?;
    if options.command == CliCommand::Version {
        handle_version_command();
    }

    let config = options.apply(ClientConfig::from_env()?);
    let client = CatalogClient::from_config(&config)?;
    let runtime = tokio::runtime::Runtime::new()?;

    match options.command {
        CliCommand::Once => {
            logging::init_stderr()?;
            let report = runtime.block_on(run_once(client));
            print!("{}", report.text);
            Ok(report.exit_code())
        }
        _ => {
            let log_path = logging::log_path_from_env()
                .ok_or_else(|| eyre!("no cache directory; set GIMME_LOG_FILE"))?;
            logging::init_file(&log_path)?;
            tracing::info!(log = %log_path.display(), "Starting gimme {}", VERSION);

            setup_panic_hook();
            let mut manager = TerminalManager::new()?;
            let mut app = App::new(client);

            let result = runtime.block_on(async {
                app.mount();
                run_app(manager.terminal(), &mut app).await
            });

            app.unmount();
            manager.restore();
            if let Err(e) = &result {
                tracing::error!("Event loop failed: {}", e);
            }
            result.map(|()| ExitCode::SUCCESS)
        }
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &app.view))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
