use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::OpenOptions,
    io,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// LEPEVA lesson materials browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/lepeva-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Start with a theme: default, jungle, ocean or space
    #[arg(short, long)]
    theme: Option<String>,

    /// Open the materials dashboard directly
    #[arg(long)]
    skip_landing: bool,
}

mod app;
mod handlers;
mod ui;
mod utils;

use lepeva::config::{self, Config};
use lepeva::logic::{self, upload::UploadPolicy};
use lepeva::model::{self, Library};
use lepeva::services::{self, SimulatedUploader, UploadRequest, UploadResponse};
use lepeva::{IconMode, Theme};
use ui::icons::{IconRenderer, IconTheme};

pub struct App {
    pub model: model::Model,

    upload_tx: mpsc::UnboundedSender<UploadRequest>,
    upload_rx: mpsc::UnboundedReceiver<UploadResponse>,
    upload_policy: UploadPolicy,
    next_batch_id: u64,

    icon_renderer: IconRenderer,

    /// Cards per row in the contents grid, updated on every draw
    grid_columns: usize,
}

impl App {
    fn new(config: Config) -> Self {
        let now = chrono::Utc::now();
        let library = Library::from_records(
            model::mock::generate_mock_folders(now),
            model::mock::generate_mock_materials(now),
        );
        let mut model = model::Model::new(config.vim_mode, config.theme);
        model.ui.confetti_enabled = config.confetti;

        let uploader = Arc::new(SimulatedUploader::new(config.upload.delay_ms));
        let (upload_tx, upload_rx) = services::spawn_upload_service(uploader);

        let icon_mode = IconMode::from_config(&config.icon_mode);
        tracing::debug!(?icon_mode, theme = config.theme.as_str(), "app initialized");

        Self::from_parts(
            model,
            library,
            upload_tx,
            upload_rx,
            config.upload.policy(),
            IconRenderer::new(icon_mode, IconTheme::default()),
        )
    }

    /// Assemble an app around an existing library and upload channels
    fn from_parts(
        mut model: model::Model,
        library: Library,
        upload_tx: mpsc::UnboundedSender<UploadRequest>,
        upload_rx: mpsc::UnboundedReceiver<UploadResponse>,
        upload_policy: UploadPolicy,
        icon_renderer: IconRenderer,
    ) -> Self {
        model.library = library;
        Self {
            model,
            upload_tx,
            upload_rx,
            upload_policy,
            next_batch_id: 0,
            icon_renderer,
            grid_columns: 1,
        }
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key).await
    }
}

fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let path = utils::get_debug_log_path();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lepeva=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(path = %path.display(), "debug logging enabled");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(args.debug)?;

    // Determine config file path
    let config_path = config::find_config_path(args.config.as_deref())?;
    tracing::debug!(?config_path, "loading config");

    // Load configuration
    let mut config = Config::load(config_path.as_deref())?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(name) = &args.theme {
        match Theme::from_name(name) {
            Some(theme) => config.theme = theme,
            None => anyhow::bail!(
                "Unknown theme '{}'. Expected one of: default, jungle, ocean, space",
                name
            ),
        }
    }

    // Initialize app
    let mut app = App::new(config);
    if args.skip_landing {
        app.open_dashboard();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::debug!("exiting");

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Toasts, banners, confetti and tips run on deadlines
        app.tick(Instant::now());

        if app.model.ui.should_quit {
            break;
        }

        // Process finished uploads (non-blocking)
        app.drain_upload_responses();

        // Short poll keeps the confetti and bobbing letters moving
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key).await?;
                }
            }
        }
    }

    Ok(())
}
