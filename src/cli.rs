//! CLI argument parsing with clap.

use clap::Parser;

/// Poster CLI - pairs a random image with a random quote.
#[derive(Parser, Debug)]
#[command(name = "poster", version, about)]
pub struct Cli {
    /// Image endpoint URL override.
    #[arg(short = 'i', long)]
    pub image_url: Option<String>,

    /// Quote endpoint URL override.
    #[arg(short = 'q', long)]
    pub quote_url: Option<String>,

    /// Keep running: each Enter press generates a new poster.
    #[arg(long)]
    pub interactive: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
