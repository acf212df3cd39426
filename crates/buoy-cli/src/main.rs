//! Buoy - popover button widget demo
//!
//! A small terminal app showcasing the buoy popover widget:
//! - Toolbar buttons that toggle anchored popover panels
//! - Escape and outside clicks close an open panel
//! - Button attributes and panel content load from a TOML config

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod config;
mod tui;

use config::DemoConfig;

/// Buoy - popover button demo
#[derive(Parser)]
#[command(name = "buoy")]
#[command(about = "A popover button widget for terminal UIs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Theme name
    #[arg(short, long, default_value = "buoy")]
    theme: String,

    /// TOML file with button attributes and panel content
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo (default)
    Demo,

    /// List available themes
    Themes,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    // Initialize logging to file (not stdout/stderr which would mess up TUI)
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("buoy");
    std::fs::create_dir_all(&log_dir).ok();

    // Create null device path based on platform
    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = std::fs::File::create(log_dir.join("buoy.log"))
        .unwrap_or_else(|_| std::fs::File::create(null_device).unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    // Verify theme exists
    let theme = tui::THEME_REGISTRY.get_or_default(&cli.theme);
    tracing::info!("Using theme: {} ({})", theme.display_name, theme.name);

    match cli.command {
        Some(Commands::Themes) => {
            println!("Available themes ({}):", tui::THEME_REGISTRY.count());
            for theme in tui::THEME_REGISTRY.list() {
                println!("  {} - {}", theme.name, theme.display_name);
            }
        }
        Some(Commands::Demo) | None => {
            let config = match &cli.config {
                Some(path) => {
                    let config = DemoConfig::load(path)?;
                    tracing::info!(path = %path.display(), "Loaded demo config");
                    config
                }
                None => DemoConfig::builtin(),
            };

            let mut app = tui::App::new(&cli.theme, config);
            app.run().await?;
        }
    }

    Ok(())
}
