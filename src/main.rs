mod api;
mod app;
mod config;
mod fetch;
mod input;
mod logging;
mod modal;
mod model;
mod render;
mod ui;

use api::Gateway;
use app::App;
use clap::Parser;
use config::Config;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use fetch::FetchResponse;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// TUI explorer for ski-resort rankings and snow conditions
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Base URL of the resort API (overrides the config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Number of resorts in the inline top list
    #[arg(long)]
    top: Option<usize>,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(long)]
    timeout: Option<u64>,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the log file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    config.apply_overrides(cli.api_url, cli.top, cli.timeout);
    let base_url = match config.validate() {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init(cli.log_file);
    tracing::info!(api = %base_url, top = config.top_count, "resort explorer starting");

    let gateway = Gateway::new(base_url, &config)?;
    let (tx, rx) = mpsc::unbounded_channel();

    // Create app and issue the startup top list request
    let mut app = App::new(config.top_count);
    fetch::spawn(gateway.clone(), app.startup_request(), tx.clone());

    // Init terminal
    let mut terminal = ratatui::init();
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;

    let size = terminal.size()?;
    app.resize(size.width, size.height);

    // Main loop
    let result = run_app(&mut terminal, &mut app, &gateway, tx, rx).await;

    // Restore terminal
    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    if let Err(e) = result {
        tracing::error!(error = %e, "event loop failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    tracing::info!("resort explorer exited");

    Ok(())
}

async fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    gateway: &Gateway,
    tx: UnboundedSender<FetchResponse>,
    mut rx: UnboundedReceiver<FetchResponse>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Apply every response that arrived since the last frame
        while let Ok(response) = rx.try_recv() {
            app.apply(response);
        }

        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(POLL_INTERVAL)? {
            let request = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Resize(width, height) => {
                    app.resize(width, height);
                    None
                }
                _ => None,
            };
            if let Some(request) = request {
                fetch::spawn(gateway.clone(), request, tx.clone());
            }
        }
    }
}
