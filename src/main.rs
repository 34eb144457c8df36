//! Vitrine - terminal personal showcase
//!
//! A two-view portfolio "site" rendered in the terminal: a home page and a
//! filterable design gallery, with a palette that follows the time of day.

mod app;
mod catalog;
mod config;
mod content;
mod frontend;
mod gallery;
mod lightbox;
mod scrollspy;
mod style;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use std::path::PathBuf;

use app::App;
use catalog::Catalog;
use config::Config;
use content::HomeContent;
use frontend::Tui;

#[derive(ClapParser)]
#[command(name = "vitrine")]
#[command(about = "Terminal personal showcase", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Catalog file path (overrides the user/default catalog)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Custom data directory (default: ~/.vitrine)
    /// Can also be set via VITRINE_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a catalog file for structural problems without starting the UI
    ValidateCatalog {
        /// Catalog file to validate (default: the active catalog)
        #[arg(value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Log to a file (use RUST_LOG to control the level); a TUI owns stdout
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("vitrine.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    // Custom data directory (CLI flag wins over the environment variable)
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(config::DATA_DIR_ENV, data_dir);
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var(config::DATA_DIR_ENV) {
        tracing::info!("Using data directory from {}: {}", config::DATA_DIR_ENV, env_dir);
    }

    if let Some(Commands::ValidateCatalog { catalog }) = cli.command {
        return validate_catalog(catalog.or(cli.catalog));
    }

    let config = Config::load(cli.config.as_deref())?;
    let catalog = Catalog::load(cli.catalog.as_deref(), &Config::catalog_path()?)?;
    let content = HomeContent::load(&Config::content_path()?)?;

    run_tui(config, catalog, content)
}

/// Load and structurally check a catalog, reporting findings to stdout.
fn validate_catalog(path: Option<PathBuf>) -> Result<()> {
    let catalog = if let Some(path) = path {
        println!("Validating catalog file: {:?}", path);
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog file {:?}", path))?;
        Catalog::parse(&text)?
    } else {
        println!("Validating active catalog");
        Catalog::load(None, &Config::catalog_path()?)?
    };

    println!("✓ Catalog loaded successfully");
    println!("  {} items, {} categories", catalog.items.len(), catalog.categories().len());

    let problems = catalog.validate();
    if problems.is_empty() {
        println!("✓ Catalog is valid with no issues");
        return Ok(());
    }
    for problem in &problems {
        eprintln!("✗ {}", problem);
    }
    eprintln!("\n✗ Found {} problem(s)", problems.len());
    std::process::exit(1);
}

/// Run the terminal frontend.
fn run_tui(config: Config, catalog: Catalog, content: HomeContent) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_run_tui(config, catalog, content))
}

/// Main event loop: drain input, run periodic work, redraw when state
/// changed.
async fn async_run_tui(config: Config, catalog: Catalog, content: HomeContent) -> Result<()> {
    let mut app = App::new(config, catalog, content);
    let mut tui = Tui::new()?;
    let (width, height) = tui.size();
    tracing::info!(width, height, "terminal ready");

    while app.running {
        let events = tui.poll_events()?;
        for event in events {
            app.handle_event(event);
        }

        // Periodic theme re-evaluation
        app.tick();

        if app.needs_render {
            tui.draw(|f| ui::render(f, &mut app))?;
            app.needs_render = false;
        }
    }

    tui.cleanup()?;
    tracing::info!("exited cleanly");
    Ok(())
}
