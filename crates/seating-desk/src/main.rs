//! Exam Seating Desk entry point.
//!
//! Wires configuration, logging, and the terminal form together.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ Cli::parse()            -- flags + env overrides
//!  └─ load_config_from()      -- TOML file or defaults
//!  └─ logging::init()         -- tracing subscriber on stderr
//!  └─ AppState::new()         -- builds the arrangement
//!  └─ SeatingForm::run()      -- menu loop on stdin / stdout
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use seating_desk::infrastructure::console::form::SeatingForm;
use seating_desk::infrastructure::console::TerminalDialog;
use seating_desk::infrastructure::logging;
use seating_desk::infrastructure::storage::config::{
    config_file_path, load_config_from, save_config_to, AppConfig,
};
use seating_desk::infrastructure::ui_bridge::AppState;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Exam seating desk.
///
/// Assigns students to numbered seats while capping how many students of the
/// same domain may be seated at once.
#[derive(Debug, Parser)]
#[command(
    name = "seating-desk",
    about = "Assign exam seats with a per-domain occupancy cap",
    version
)]
struct Cli {
    /// Path to the TOML configuration file.
    ///
    /// Defaults to `config.toml` in the platform config directory.
    #[arg(long, env = "SEATING_CONFIG")]
    config: Option<PathBuf>,

    /// Number of seats in the hall (overrides the config file).
    #[arg(long, env = "SEATING_TOTAL_SEATS")]
    total_seats: Option<i32>,

    /// Maximum seats one domain may hold at once (overrides the config file).
    #[arg(long, env = "SEATING_DOMAIN_CAP")]
    domain_cap: Option<u32>,

    /// Log filter, e.g. `info` or `seating_desk=debug` (overrides the config
    /// file; `RUST_LOG` overrides both).
    #[arg(long, env = "SEATING_LOG_LEVEL")]
    log_level: Option<String>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    init_config: bool,
}

impl Cli {
    fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => config_file_path().context("no --config given and no platform config directory"),
        }
    }

    /// Applies command-line overrides on top of the file configuration.
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(total_seats) = self.total_seats {
            config.arrangement.total_seats = total_seats;
        }
        if let Some(domain_cap) = self.domain_cap {
            config.arrangement.domain_cap = domain_cap;
        }
        if let Some(log_level) = &self.log_level {
            config.desk.log_level = log_level.clone();
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path()?;
    let mut config = load_config_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    cli.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;

    logging::init(&config.desk.log_level).context("failed to initialise logging")?;
    info!(path = %config_path.display(), "configuration loaded");

    if cli.init_config {
        save_config_to(&config_path, &config)
            .with_context(|| format!("failed to write config to {}", config_path.display()))?;
        println!("Wrote configuration to {}", config_path.display());
        return Ok(());
    }

    let mut state = AppState::new(config).context("failed to build seating arrangement")?;
    info!(
        total_seats = state.config.arrangement.total_seats,
        domain_cap = state.config.arrangement.domain_cap,
        "seating desk ready"
    );

    let dialog = TerminalDialog::new(io::stdin().lock(), io::stdout());
    SeatingForm::new(&mut state, dialog).run();

    Ok(())
}
