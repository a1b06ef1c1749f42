//! treenav: a line-oriented shell over the in-memory file tree.
//!
//! Reads one command per line from stdin, hands it to the core and prints
//! the refreshed view. Logs go to a file so they never mix with the output.

mod app;
mod input;
mod render;

use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use treenav_core::config::settings::{Config, LogConfig};
use treenav_core::{CoreError, SystemClock};

use crate::app::App;
use crate::input::resolve_line;

fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config/treenav/default.toml"))
}

/// Loads the config from the first argument or the default location,
/// falling back to defaults when the file is missing or broken.
fn load_config() -> Config {
    let Some(path) = std::env::args().nth(1).map(PathBuf::from).or_else(default_config_path)
    else {
        return Config::default();
    };
    match Config::load(&path) {
        Ok(config) => config,
        Err(CoreError::NotFound(_)) => Config::default(),
        Err(e) => {
            eprintln!("treenav: ignoring {}: {e}", path.display());
            Config::default()
        }
    }
}

fn init_tracing(log: &LogConfig) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log.file)
        .with_context(|| format!("failed to open log file {}", log.file))?;
    let level = log.level.parse::<tracing::Level>().unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = load_config();
    init_tracing(&config.log)?;

    let mut app = App::new(config, SystemClock::shared())?;
    tracing::info!(root = %app.explorer().tree().root(), "session started");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    render::render_view(&mut stdout, &app)?;

    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let action = resolve_line(&line, app.explorer(), &app.scope());
        if !app.apply(action, &mut stdout)? {
            break;
        }
    }

    tracing::info!("session ended");
    Ok(())
}
