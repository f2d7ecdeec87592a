//! Field Hockey Scoreboard CLI
//!
//! Interactive scoreboard: goals, cards and penalty corners over four quarters.

mod console;
mod menu;

use std::{env, io};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use hockey_core::{ScoreboardConfig, CONFIG_PATH_ENV};
use tracing_subscriber::EnvFilter;

use crate::console::{Console, ConsoleOptions};

#[derive(Parser, Debug)]
#[command(name = "hockey-scoreboard")]
#[command(version, about = "Interactive field hockey scoreboard", long_about = None)]
struct Cli {
    /// Home team name (prompted when omitted)
    #[arg(long)]
    home: Option<String>,

    /// Away team name (prompted when omitted)
    #[arg(long)]
    away: Option<String>,

    /// Record "Start of Q1" when the match begins
    #[arg(long)]
    start_marker: bool,

    /// Do not record "Start of Qn" after quarter breaks
    #[arg(long)]
    no_quarter_start: bool,

    /// Ask for the scorer's name after each goal
    #[arg(long)]
    ask_scorer: bool,

    /// Keep previous screens instead of clearing the terminal
    #[arg(long)]
    no_clear: bool,

    /// Pause after feedback messages, in milliseconds (0 disables)
    #[arg(long, default_value_t = 800)]
    pause_ms: u64,

    /// Print the final match summary as JSON
    #[arg(long)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// CLI flags layered over the file/env config.
    fn resolve_config(&self, mut config: ScoreboardConfig) -> ScoreboardConfig {
        if self.start_marker {
            config.log_match_start = true;
        }
        if self.no_quarter_start {
            config.log_quarter_start = false;
        }
        config
    }

    fn console_options(&self, config: ScoreboardConfig) -> ConsoleOptions {
        ConsoleOptions {
            home: self.home.clone(),
            away: self.away.clone(),
            config,
            ask_scorer: self.ask_scorer,
            clear_screen: !self.no_clear,
            pause: Duration::from_millis(self.pause_ms),
            print_json: self.json,
        }
    }
}

/// Config file named by the environment; an unreadable file falls back to defaults.
fn load_config(env_value: Option<&str>) -> ScoreboardConfig {
    match ScoreboardConfig::from_env_value(env_value) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "ignoring scoreboard config");
            ScoreboardConfig::default()
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let env_value = env::var(CONFIG_PATH_ENV).ok();
    let config = cli.resolve_config(load_config(env_value.as_deref()));
    tracing::debug!(?config, "scoreboard config");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), cli.console_options(config));
    console.run()?;

    Ok(())
}
