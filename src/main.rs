use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

mod app;
mod catalog;
mod color;
mod config;
mod error;
mod icons;
mod logging;
mod marker;
mod theme;
mod tree;
mod ui;
mod working_set;

#[derive(Parser)]
#[command(name = "glyphtree")]
#[command(about = "Project tree and open-file list with colored file-type glyphs")]
#[command(version)]
struct Cli {
    /// Project root (defaults to current directory)
    root: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.config/glyphtree/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the built-in icon table and exit
    #[arg(long)]
    list_icons: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_icons {
        return print_icons();
    }

    let log_dir = config::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("logs");
    let _guard = logging::init(&log_dir, cli.verbose).context("initializing logging")?;

    let config = config::Config::load(cli.config.as_deref()).context("loading config")?;
    let root = match cli.root {
        Some(p) => p,
        None => std::env::current_dir().context("reading current directory")?,
    };
    let mut app = app::App::new(&root, config)
        .with_context(|| format!("opening project {}", root.display()))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("event loop failed: {e}");
    }
    result.context("running event loop")
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut app::App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                _ => {}
            }
        }

        if app.should_quit {
            tracing::info!("quit");
            return Ok(());
        }
    }
}

fn print_icons() -> Result<()> {
    let table = catalog::builtin_table();
    let mut out = io::stdout().lock();
    catalog::write_listing(&table, &mut out).context("writing icon listing")
}
