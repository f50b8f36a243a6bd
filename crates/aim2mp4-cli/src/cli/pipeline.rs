//! The linear pipeline: resolve input → fetch/extract → download → encode.
//!
//! One pass, no retries. Each stage failure is reported once on stderr and
//! mapped to an exit code by the caller.

use aim2mp4_core::config::Aim2Mp4Config;
use aim2mp4_core::download::{self, DownloadError};
use aim2mp4_core::encode::{self, EncodeError};
use aim2mp4_core::extract;
use aim2mp4_core::fetch::{self, FetchError};
use aim2mp4_core::filename;
use std::io::{self, BufRead, Write};

use super::Cli;

/// Where the direct audio URL comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Source {
    /// Supplied directly; fetch and extraction are skipped entirely.
    Direct(String),
    /// Share-page URL to fetch and scan.
    SharePage(String),
}

/// Failure of any pipeline stage.
#[derive(Debug)]
pub(super) enum RunError {
    /// No share URL and no direct audio URL, even after prompting.
    Usage,
    Fetch(FetchError),
    /// The extraction heuristic found nothing usable (absence, not a fault).
    NoAudioUrl,
    Download(DownloadError),
    Encode(EncodeError),
    /// The scoped working directory could not be created.
    Workdir(io::Error),
}

impl RunError {
    /// Prints a short human-readable description of the failure on stderr.
    pub(super) fn report(&self) {
        match self {
            RunError::Usage => eprintln!("Provide a share URL or --audio-url."),
            RunError::Fetch(err) => eprintln!("Failed to fetch share page: {err}"),
            RunError::NoAudioUrl => eprintln!(
                "Could not find audio URL in share page. Try --audio-url with a direct link."
            ),
            RunError::Download(err) => eprintln!("Failed to download audio: {err}"),
            RunError::Encode(EncodeError::Missing { binary }) => {
                eprintln!("{binary} not found. Please install ffmpeg.")
            }
            RunError::Encode(err) => eprintln!("Encoder failed: {err}"),
            RunError::Workdir(err) => eprintln!("Failed to create working directory: {err}"),
        }
    }
}

impl From<FetchError> for RunError {
    fn from(err: FetchError) -> Self {
        RunError::Fetch(err)
    }
}

impl From<DownloadError> for RunError {
    fn from(err: DownloadError) -> Self {
        RunError::Download(err)
    }
}

impl From<EncodeError> for RunError {
    fn from(err: EncodeError) -> Self {
        RunError::Encode(err)
    }
}

/// Resolves the input source from the parsed arguments.
///
/// A direct `--audio-url` wins outright (the share URL, if any, is ignored).
/// With neither argument, `prompt` is consulted once; a blank or failed
/// answer is a usage error. No network I/O happens here.
pub(super) fn resolve_source(
    share_url: Option<&str>,
    audio_url: Option<&str>,
    prompt: impl FnOnce() -> io::Result<String>,
) -> Result<Source, RunError> {
    if let Some(url) = audio_url {
        return Ok(Source::Direct(url.to_string()));
    }
    if let Some(url) = share_url {
        return Ok(Source::SharePage(url.to_string()));
    }

    let answer = prompt().unwrap_or_default();
    let answer = answer.trim();
    if answer.is_empty() {
        Err(RunError::Usage)
    } else {
        Ok(Source::SharePage(answer.to_string()))
    }
}

/// Interactive fallback: one prompt on stderr, one line from stdin.
/// End-of-input yields an empty answer, which the caller treats as usage.
pub(super) fn prompt_for_share_url() -> io::Result<String> {
    eprint!("Paste the share URL (or leave blank to use --audio-url): ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Runs the whole pipeline for the parsed arguments.
pub(super) fn run(
    cli: &Cli,
    cfg: &Aim2Mp4Config,
    prompt: impl FnOnce() -> io::Result<String>,
) -> Result<(), RunError> {
    let source = resolve_source(cli.share_url.as_deref(), cli.audio_url.as_deref(), prompt)?;

    let audio_url = match source {
        Source::Direct(url) => url,
        Source::SharePage(url) => {
            let page = fetch::fetch_page_text(&url, cfg)?;
            extract::find_audio_url(&page).ok_or(RunError::NoAudioUrl)?
        }
    };
    tracing::info!(%audio_url, "resolved audio URL");

    // Scoped working area: removed on every exit path when dropped.
    let workdir = tempfile::tempdir().map_err(RunError::Workdir)?;
    let audio_path = workdir.path().join(filename::derive_audio_filename(&audio_url));

    let bytes = download::download_to_file(&audio_url, &audio_path, cfg)?;
    tracing::info!(bytes, path = %audio_path.display(), "audio downloaded");

    encode::wrap_audio(&audio_path, &cli.output, &cfg.encoder_or_default())?;

    println!("Saved MP4 to {}", cli.output.display());
    Ok(())
}
