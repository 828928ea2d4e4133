use swipedeck::adapters::{
    CatalogSupplier, HttpCardSupplier, HttpFeedbackSink, LogFeedbackSink, ReqwestHttpClient,
};
use swipedeck::app::{App, AppMessage};
use swipedeck::config::{parse_args, CliCommand, DeckConfig};
use swipedeck::logging::{init_logging, LogConfig};
use swipedeck::terminal::{setup_panic_hook, TerminalManager};
use swipedeck::traits::{CardSupplier, FeedbackSink};
use swipedeck::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
Usage: swipedeck [OPTIONS]

Options:
      --offline              Use the built-in card catalog
      --supplier-url <URL>   Card service base URL (GET <URL>/cards?count=N)
      --feedback-url <URL>   Feedback service base URL (POST <URL>/feedback)
  -h, --help                 Print help
  -V, --version              Print version

Environment:
  SWIPEDECK_THRESHOLD, SWIPEDECK_EXIT_DELAY_MS, SWIPEDECK_REFILL_FLOOR,
  SWIPEDECK_REFILL_BUFFER, SWIPEDECK_CELL_WIDTH, SWIPEDECK_CELL_HEIGHT,
  SWIPEDECK_SUPPLIER_URL, SWIPEDECK_FEEDBACK_URL, SWIPEDECK_LOG, SWIPEDECK_LOG_FILE";

fn main() -> Result<()> {
    // Handle --version / --help before any initialization
    let options = match parse_args(std::env::args().skip(1))? {
        CliCommand::Version => {
            println!("swipedeck {}", VERSION);
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Run(options) => options,
    };

    color_eyre::install()?;

    let config = options.apply(DeckConfig::from_env()?);
    config.validate()?;

    // Logging must be up before the TUI takes over stderr.
    match init_logging(&LogConfig::from(&config)) {
        Ok(Some(_)) => {}
        Ok(None) => eprintln!("Warning: no data directory; logging disabled"),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

fn build_supplier(config: &DeckConfig) -> Arc<dyn CardSupplier> {
    match &config.supplier_url {
        Some(url) => {
            tracing::info!("Using card service at {}", url);
            Arc::new(HttpCardSupplier::new(ReqwestHttpClient::new(), url.as_str()))
        }
        None => {
            tracing::info!("Using offline card catalog");
            Arc::new(CatalogSupplier::new())
        }
    }
}

fn build_feedback_sink(config: &DeckConfig) -> Arc<dyn FeedbackSink> {
    match &config.feedback_url {
        Some(url) => Arc::new(HttpFeedbackSink::new(ReqwestHttpClient::new(), url.as_str())),
        None => Arc::new(LogFeedbackSink),
    }
}

async fn run(config: DeckConfig) -> Result<()> {
    let supplier = build_supplier(&config);
    let feedback = build_feedback_sink(&config);
    let mut app = App::new(config, supplier, feedback);

    let mut manager = TerminalManager::new()?;
    app.mount();
    let result = run_app(manager.terminal(), &mut app).await;

    app.shutdown();
    manager.restore()?;
    tracing::info!(
        "Exited with {} card(s) kept, {} left on the stack",
        app.deck.stack().queue_len(),
        app.deck.stack().len()
    );
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    // Fixed deadline so a steady stream of mouse events cannot starve the tick.
    let mut next_tick = tokio::time::Instant::now() + app.config.tick_interval;

    loop {
        if app.needs_redraw {
            let now = Instant::now();
            terminal.draw(|f| ui::render(f, &mut *app, now))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep_until(next_tick);

        tokio::select! {
            _ = timeout => {
                next_tick = tokio::time::Instant::now() + app.config.tick_interval;
                app.tick(Instant::now());
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key, Instant::now());
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        app.handle_mouse(mouse, Instant::now());
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    None => {
                        tracing::warn!("Terminal event stream closed");
                        app.quit();
                    }
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
