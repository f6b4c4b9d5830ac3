//! Poster - random image + quote poster CLI.

mod adapters;
mod cassette;
mod cli;
mod config;
mod context;
mod display;
mod error;
mod ports;
mod updater;

use std::path::Path;
use std::process;
use std::time::Duration;

use clap::Parser;

use crate::adapters::console::ConsoleView;
use crate::cli::Cli;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::display::DisplayState;
use crate::updater::PosterUpdater;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), error::PosterError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let mut config = Config::load(&config_path).map_err(error::PosterError::Config)?;

    // CLI endpoint overrides
    if let Some(url) = cli.image_url {
        config.endpoints.image = url;
    }
    if let Some(url) = cli.quote_url {
        config.endpoints.quote = url;
    }

    // Create context based on mode (live / recording / replaying)
    let replay_path = std::env::var("POSTER_REPLAY").ok();
    let is_recording = std::env::var("POSTER_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        if cli.verbose {
            eprintln!("Replaying from: {cassette_path}");
        }
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        if cli.verbose {
            eprintln!("Recording mode enabled");
        }
        let (ctx, session) = ServiceContext::recording(&config)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config)?, None)
    };

    let defaults = DisplayState {
        image_url: config.defaults.image.clone(),
        quote_text: config.defaults.quote.clone(),
    };
    let delay = Duration::from_millis(config.timing.reenable_delay_ms);
    let view = ConsoleView::stdout();
    let mut updater = PosterUpdater::new(ctx, Box::new(view), defaults, delay);

    if cli.interactive {
        run_interactive(&mut updater).await?;
    } else {
        updater.run_cycle().await;
    }

    // Finish recording if active
    if let Some(session) = recording_session {
        // The recording adapters inside the updater hold recorder handles;
        // release them before the session takes sole ownership.
        drop(updater);
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    Ok(())
}

/// Trigger loop: one cycle per Enter press, `q` or EOF to quit.
///
/// Input is read only between cycles, so a trigger cannot land while a
/// cycle is still in flight.
async fn run_interactive(updater: &mut PosterUpdater) -> Result<(), error::PosterError> {
    use tokio::io::{AsyncBufReadExt, BufReader};

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        eprintln!("Press Enter for a new poster (q to quit)");
        let Some(line) = lines.next_line().await? else { break };
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }
        updater.run_cycle().await;
    }
    Ok(())
}
