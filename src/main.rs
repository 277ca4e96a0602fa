use lingodeck::adapters::SystemSpeech;
use lingodeck::app::{App, AppMessage};
use lingodeck::cli::{parse_args, run_cli_command, CliCommand};
use lingodeck::config::AppConfig;
use lingodeck::error::DrillError;
use lingodeck::input::{handle_key_event, CommandRegistry};
use lingodeck::logging::{default_log_path, init_logging};
use lingodeck::provider::build_provider;
use lingodeck::terminal::{setup_panic_hook, TerminalManager};
use lingodeck::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(command.clone()) {
        return result;
    }
    let offline = matches!(command, CliCommand::RunTui { offline: true });

    color_eyre::install()?;

    let config = match AppConfig::from_env() {
        Ok(config) => config.with_offline(offline),
        Err(err) => {
            let err = DrillError::from(err);
            eprintln!("{}\n{}", err.user_message(), err.recovery_hint());
            return Err(err.into());
        }
    };

    if let Some(path) = default_log_path() {
        // Best-effort; the TUI owns the terminal.
        let _ = init_logging(&path);
    }
    tracing::info!(
        version = lingodeck::cli::VERSION,
        live = config.uses_live_provider(),
        model = %config.model,
        "starting lingodeck"
    );

    setup_panic_hook();

    let provider = build_provider(&config);
    let speech = Arc::new(SystemSpeech::detect());
    let mut app = App::new(config, provider, speech);

    let runtime = tokio::runtime::Runtime::new()?;
    let mut manager = TerminalManager::new()?;

    let result = runtime.block_on(async {
        app.start_background_tasks();
        run_app(manager.terminal(), &mut app).await
    });

    manager.restore()?;
    drop(manager);

    if let Err(ref err) = result {
        tracing::error!(error = %err, "event loop failed");
    }
    result
}

/// Drive the app until it asks to quit.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let registry = CommandRegistry::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        // 16ms tick drives the loading spinner
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        handle_key_event(app, &registry, key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "terminal event error");
                    }
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
