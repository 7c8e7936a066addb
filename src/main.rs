//! pagetour - Terminal Onboarding Tour
//!
//! Shows the onboarding pages until the user dismisses or quits the tour.

use anyhow::{Context, Result};
use clap::Parser;
use pagetour::config::ThemeName;
use pagetour::render::ui::{ColorTheme, TerminalUI};
use pagetour::{Application, Outcome, TourConfig, TourError};
use std::fs::File;
use std::path::PathBuf;

/// A paged onboarding tour for the terminal
#[derive(Debug, Parser)]
#[command(name = "pagetour", version = pagetour::VERSION)]
#[command(
    long_about = "pagetour shows a short sequence of introduction pages. Swipe with the arrow \
                  keys or the mouse wheel, jump with the number keys or by clicking the \
                  indicator dots, and press Enter to dismiss."
)]
struct Cli {
    /// Configuration file (defaults to $CONFIG_DIR/pagetour/config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeName>,

    /// Page slide duration in milliseconds
    #[arg(long)]
    transition_ms: Option<u64>,

    /// Background crossfade duration in milliseconds
    #[arg(long)]
    crossfade_ms: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command line overrides on top of the file configuration
    fn apply(&self, config: &mut TourConfig) -> Result<()> {
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(ms) = self.transition_ms {
            if ms == 0 {
                return Err(TourError::invalid_argument("--transition-ms must be positive").into());
            }
            config.transition_ms = ms;
        }
        if let Some(ms) = self.crossfade_ms {
            if ms == 0 {
                return Err(TourError::invalid_argument("--crossfade-ms must be positive").into());
            }
            config.crossfade_ms = ms;
        }
        Ok(())
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let mut config = TourConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config)?;
    log::debug!("configuration: {:?}", config);

    let ui_renderer = Box::new(TerminalUI::with_theme(ColorTheme::from_name(config.theme))?);
    let mut app = Application::new(config, ui_renderer)?;

    match app.run().await? {
        Outcome::Dismissed => log::info!("onboarding dismissed"),
        Outcome::Quit => log::info!("onboarding quit"),
    }

    Ok(())
}
