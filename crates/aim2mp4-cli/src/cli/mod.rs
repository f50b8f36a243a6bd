//! CLI for aim2mp4: argument surface, exit-code mapping, diagnostics.
//!
//! Diagnostics go to stderr; the only stdout line is the success message.

mod pipeline;

use aim2mp4_core::config;
use clap::Parser;
use std::path::PathBuf;

use pipeline::RunError;

/// Exit code for any runtime failure (fetch, extraction, download, encoder).
const EXIT_FAILURE: i32 = 1;
/// Exit code for a usage error (no usable input after prompting).
const EXIT_USAGE: i32 = 2;

/// Download the audio referenced by a share page and wrap it into an MP4
/// with a static black video track.
#[derive(Debug, Parser)]
#[command(name = "aim2mp4")]
#[command(about = "Download share-page audio and wrap it in an MP4", long_about = None)]
pub struct Cli {
    /// Share-page URL expected to reference a playable audio track.
    pub share_url: Option<String>,

    /// Direct audio URL (mp3/m4a/wav/aac); bypasses page fetch and extraction.
    #[arg(long)]
    pub audio_url: Option<String>,

    /// Output MP4 path.
    #[arg(long, default_value = "aimusic.mp4")]
    pub output: PathBuf,
}

pub fn run_from_args() -> i32 {
    let cli = Cli::parse();

    let cfg = match config::load_or_init() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Failed to load configuration: {err:#}");
            return EXIT_FAILURE;
        }
    };
    tracing::debug!("loaded config: {:?}", cfg);

    match pipeline::run(&cli, &cfg, pipeline::prompt_for_share_url) {
        Ok(()) => 0,
        Err(err) => {
            err.report();
            err.exit_code()
        }
    }
}

impl RunError {
    fn exit_code(&self) -> i32 {
        match self {
            RunError::Usage => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests;
