//! Storefront - platter widget demo
//!
//! Event flow:
//! 1. Pointer-downs go to the listener registry (open menus close on
//!    outside clicks)
//! 2. `StorefrontUi::map_event` turns the event into actions
//! 3. Those actions go through the store before the next event is read
//! 4. Timer ticks arrive on a channel and are routed back to the widget
//!    that scheduled them
//!
//! # Usage
//!
//! ```sh
//! cargo run -p storefront-demo
//! cargo run -p storefront-demo -- --config storefront.json --no-autoplay
//! ```

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use platter::{process_raw_event, spawn_event_poller, PointerListeners, RawEvent, Store};
use ratatui::{backend::CrosstermBackend, Terminal};
use storefront::{handle_input, reducer, Action, AppState, Config, StorefrontUi};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Food-delivery storefront built from platter widgets
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "A storefront TUI demonstrating platter widgets")]
struct Args {
    /// JSON config file (taglines, timer periods, menu placement)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Tagline rotation period in milliseconds
    #[arg(long)]
    tagline_interval_ms: Option<u64>,

    /// Disable carousel auto-play
    #[arg(long)]
    no_autoplay: bool,

    /// Log file (the terminal is taken by the UI)
    #[arg(long, default_value = "storefront.log")]
    log_file: PathBuf,

    /// Log filter, e.g. `debug` or `platter=trace`; falls back to RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn load_config(args: &Args) -> Result<Config, storefront::ConfigError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(ms) = args.tagline_interval_ms {
        config.tagline_interval_ms = ms;
    }
    if args.no_autoplay {
        config.carousel_autoplay = false;
    }
    Ok(config)
}

fn init_logging(args: &Args) -> io::Result<tracing_appender::non_blocking::WorkerGuard> {
    let file = File::create(&args.log_file)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("storefront: {err}");
            process::exit(1);
        }
    };
    let _log_guard = init_logging(&args)?;
    info!(?config, "Starting storefront");

    let listeners = PointerListeners::new();
    let ui = match StorefrontUi::new(&config, &listeners) {
        Ok(ui) => ui,
        Err(err) => {
            eprintln!("storefront: {err}");
            process::exit(1);
        }
    };

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, ui, &listeners).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("storefront: {err}");
    }
    info!("Storefront stopped");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut ui: StorefrontUi,
    listeners: &PointerListeners,
) -> io::Result<()> {
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<Action>();
    let mut store = Store::new(AppState::default(), reducer);

    ui.activate(tick_tx).map_err(io::Error::other)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| ui.render(frame, store.state()))?;
            should_render = false;
        }

        tokio::select! {
            Some(raw_event) = event_rx.recv() => {
                let event = process_raw_event(raw_event);
                let actions = handle_input(&mut ui, listeners, &mut store, &event);
                if actions.contains(&Action::Quit) {
                    break;
                }
                // Menus, cursor and highlight live in the widgets, not the store
                should_render = true;
            }

            Some(tick) = tick_rx.recv() => {
                match tick {
                    Action::TaglineTick => should_render |= ui.tick_tagline(),
                    Action::CarouselTick => should_render |= ui.tick_carousel(),
                    other => warn!(action = ?other, "Ignoring non-timer action on tick channel"),
                }
            }
        }
    }

    ui.deactivate();
    cancel_token.cancel();
    Ok(())
}
