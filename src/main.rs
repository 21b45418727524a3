//! # jobscout CLI Entry Point
//!
//! Terminal client for a job search backend that scrapes postings and
//! summarizes them with an LLM.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive TUI against the default backend (http://127.0.0.1:8000)
//! jobscout
//!
//! # Prefill the form and search right away
//! jobscout --query "rust developer" --location Berlin --remote
//!
//! # Headless: search and write the results as an HTML page
//! jobscout -q "data engineer" -l Paris --export jobs.html
//!
//! # Check that the backend is up
//! jobscout --server https://jobs.internal --check
//! ```
//!
//! ## Architecture
//!
//! 1. **State**: [`App`] owns everything on screen and is only touched by
//!    the event loop.
//! 2. **Input**: key and mouse events are mapped onto the state by
//!    [`ui::input`], which hands back a [`Command`] for anything with side
//!    effects.
//! 3. **Backend**: searches and summaries run as tokio tasks against a
//!    [`JobBackend`] and report back over an mpsc channel. Each result
//!    carries the generation of the request that produced it; the state
//!    ignores superseded ones.
//!
//! Logs go to `<data dir>/jobscout.log` since the TUI owns the terminal.
//! Set `JOBSCOUT_LOG=debug` for more detail.

use jobscout::api::{HttpJobBackend, JobBackend};
use jobscout::ui;
use jobscout::ui::app::{BackendEvent, SearchTicket, SummaryTicket};
use jobscout::ui::clipboard::osc52_sequence;
use jobscout::ui::config::{self, Config};
use jobscout::ui::form::SearchForm;
use jobscout::ui::input::{self, Command};
use jobscout::ui::theme::Theme;
use jobscout::ui::App;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

/// Where `Ctrl+E` writes the current results.
const EXPORT_FILE_NAME: &str = "jobscout-results.html";

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// jobscout - search job postings and get AI summaries from the terminal
#[derive(Parser, Debug)]
#[command(name = "jobscout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search job postings and summarize them with AI", long_about = None)]
struct Args {
    /// Base URL of the job search backend
    #[arg(short, long, value_name = "URL", env = "JOBSCOUT_SERVER")]
    server: Option<String>,

    /// Job title or keywords to prefill
    #[arg(short, long)]
    query: Option<String>,

    /// Location to prefill
    #[arg(short, long)]
    location: Option<String>,

    /// Only search for remote jobs
    #[arg(long)]
    remote: bool,

    /// Number of jobs to request (10, 20, 30 or 50)
    #[arg(short, long, value_name = "N")]
    num_jobs: Option<u32>,

    /// Colour theme, e.g. "Dracula"
    #[arg(long)]
    theme: Option<String>,

    /// Run the search without a UI and write the results as HTML to FILE
    #[arg(long, value_name = "FILE", conflicts_with = "check")]
    export: Option<PathBuf>,

    /// Check that the backend is healthy and exit
    #[arg(long)]
    check: bool,

    /// Write logs to FILE instead of the default location
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_file.clone()) {
        eprintln!("Warning: Could not initialize logging: {e:#}");
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

fn init_logging(log_file: Option<PathBuf>) -> Result<()> {
    let path = match log_file {
        Some(path) => path,
        None => config::default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env("JOBSCOUT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(())
}

fn resolve_theme(requested: Option<&str>, config: &Config) -> Result<Theme> {
    if let Some(name) = requested {
        let Some(theme) = Theme::by_name(name) else {
            let available: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
            bail!("Unknown theme: {name}. Available: {}", available.join(", "));
        };
        return Ok(theme.clone());
    }
    Ok(Theme::by_name(&config.theme)
        .unwrap_or_else(Theme::default_theme)
        .clone())
}

fn build_form(args: &Args, config: &Config) -> SearchForm {
    let mut form = SearchForm::new(args.num_jobs.unwrap_or(config.default_num_jobs));
    form.query = args.query.clone().unwrap_or_default();
    form.location = args
        .location
        .clone()
        .unwrap_or_else(|| config.default_location.clone());
    form.remote_only = args.remote;
    form
}

fn build_backend(args: &Args, config: &Config) -> Result<HttpJobBackend> {
    let server = args.server.as_deref().unwrap_or(&config.server_url);
    match config.request_timeout() {
        Some(timeout) => HttpJobBackend::with_timeout(server, timeout)
            .with_context(|| format!("Failed to create HTTP client for {server}")),
        None => Ok(HttpJobBackend::new(server)),
    }
}

async fn run_application(args: Args) -> Result<()> {
    let mut config = Config::load();
    let theme = resolve_theme(args.theme.as_deref(), &config)?;
    let http = build_backend(&args, &config)?;
    tracing::info!(server = http.base_url(), "starting jobscout");
    let backend: Arc<dyn JobBackend> = Arc::new(http);

    if args.check {
        return check_health(backend.as_ref()).await;
    }

    let mut app = App::new(build_form(&args, &config), theme);

    if let Some(path) = &args.export {
        return export_headless(&mut app, backend.as_ref(), path).await;
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let terminal_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(terminal_backend).context("Failed to create terminal")?;

    let (tx, rx) = mpsc::unbounded_channel();

    // Search right away when both fields came from the command line
    if args.query.is_some() && app.form.to_request().is_ok() {
        if let Some(ticket) = app.submit_search(Instant::now()) {
            spawn_search(Arc::clone(&backend), ticket, tx.clone());
        }
    }

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(
        &mut terminal,
        &mut app,
        backend,
        &mut event_reader,
        (tx, rx),
        &mut config,
    )
    .await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    Ok(())
}

async fn check_health(backend: &dyn JobBackend) -> Result<()> {
    let health = backend.health().await.context("Health check failed")?;
    println!("{}: {}", health.service, health.status);
    if !health.is_healthy() {
        bail!("Backend reported status \"{}\"", health.status);
    }
    Ok(())
}

/// Search once with the prefilled form and write the results page.
async fn export_headless(app: &mut App, backend: &dyn JobBackend, path: &Path) -> Result<()> {
    let Some(ticket) = app.submit_search(Instant::now()) else {
        bail!("{}", app.toast.message());
    };
    let result = backend.search(&ticket.request).await;
    app.apply_search(ticket.generation, result, Instant::now());

    let html = app
        .export_html()
        .ok_or_else(|| anyhow!("{}", app.toast.message()))?;
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Exported {} jobs to {}", app.cards.len(), path.display());
    Ok(())
}

fn spawn_search(
    backend: Arc<dyn JobBackend>,
    ticket: SearchTicket,
    tx: UnboundedSender<BackendEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = backend.search(&ticket.request).await;
        let _ = tx.send(BackendEvent::SearchSettled {
            generation: ticket.generation,
            result,
        });
    })
}

fn spawn_summary(
    backend: Arc<dyn JobBackend>,
    ticket: SummaryTicket,
    tx: UnboundedSender<BackendEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = backend.summarize(&ticket.request).await;
        let _ = tx.send(BackendEvent::SummarySettled {
            generation: ticket.generation,
            job: ticket.job,
            result,
        });
    })
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

fn export_current(app: &mut App, path: &Path, now: Instant) {
    let Some(html) = app.export_html() else {
        app.show_error("Nothing to export yet, run a search first", now);
        return;
    };
    match fs::write(path, html) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "exported results");
            app.show_notice(format!("Exported results to {}", path.display()), now);
        }
        Err(e) => app.show_error(format!("Export failed: {e}"), now),
    }
}

fn execute_command(
    command: Command,
    app: &mut App,
    backend: &Arc<dyn JobBackend>,
    tx: &UnboundedSender<BackendEvent>,
    config: &mut Config,
) -> Result<()> {
    let now = Instant::now();
    match command {
        Command::Search(ticket) => {
            spawn_search(Arc::clone(backend), ticket, tx.clone());
        }
        Command::Summarize(ticket) => {
            spawn_summary(Arc::clone(backend), ticket, tx.clone());
        }
        Command::CopyToClipboard(text) => {
            execute!(io::stdout(), Print(osc52_sequence(&text)))
                .context("Failed to write clipboard sequence")?;
            app.show_notice("Apply link copied to clipboard", now);
        }
        Command::ExportHtml => export_current(app, Path::new(EXPORT_FILE_NAME), now),
        Command::SaveTheme => {
            config.theme = app.theme.name.to_string();
            if let Err(e) = config.save() {
                tracing::warn!(error = %e, "failed to save theme");
            }
        }
    }
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    backend: Arc<dyn JobBackend>,
    event_reader: &mut dyn EventReader,
    (tx, mut rx): (UnboundedSender<BackendEvent>, UnboundedReceiver<BackendEvent>),
    config: &mut Config,
) -> Result<()> {
    let mut frame_area = Rect::default();

    loop {
        while let Ok(event) = rx.try_recv() {
            app.apply_backend_event(event, Instant::now());
        }
        app.on_tick(Instant::now());

        terminal
            .draw(|f| {
                frame_area = f.area();
                ui::render(f, app);
            })
            .context("Failed to draw terminal UI")?;

        // Short timeout keeps spinners and particles moving
        let Some(event) = event_reader.read_event(Duration::from_millis(80))? else {
            continue;
        };

        let command = match event {
            Event::Key(key) => input::handle_key(app, key, Instant::now()),
            Event::Mouse(mouse) => input::handle_mouse(app, mouse, frame_area),
            _ => None,
        };

        if let Some(command) = command {
            execute_command(command, app, &backend, &tx, config)?;
        }

        if app.should_quit {
            tracing::info!("quitting");
            break;
        }
    }

    Ok(())
}
