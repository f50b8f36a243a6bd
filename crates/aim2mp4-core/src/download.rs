//! Sequential media download: streams the response body to a local file.
//!
//! One GET, chunks written to the destination as they arrive; the payload is
//! never buffered whole in memory.

use crate::config::Aim2Mp4Config;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Error from downloading the resolved audio URL.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// libcurl reported an error (connect failure, timeout, TLS, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Transfer completed with a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Destination file could not be created or written.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Downloads `url` into `dest` (created or overwritten), streaming the body
/// in chunks bounded by `download_chunk_bytes`. Returns the bytes written.
///
/// No partial-file cleanup on failure; the caller's temp-dir scope owns the
/// destination.
pub fn download_to_file(url: &str, dest: &Path, cfg: &Aim2Mp4Config) -> Result<u64, DownloadError> {
    let file = File::create(dest)?;
    let mut out = BufWriter::new(file);
    let mut written: u64 = 0;
    let mut write_error: Option<std::io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.useragent(&cfg.user_agent)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.buffer_size(cfg.download_chunk_bytes)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(cfg.download_timeout_secs))?;

    let perform_result = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match out.write_all(data) {
            Ok(()) => {
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(e) => {
                write_error = Some(e);
                Ok(0) // abort the transfer
            }
        })?;
        transfer.perform()
    };

    // A file write failure surfaces from libcurl as an aborted transfer;
    // report the underlying I/O cause instead.
    if let Some(e) = write_error {
        return Err(DownloadError::Io(e));
    }
    perform_result?;

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(DownloadError::Http(code));
    }

    out.flush()?;
    tracing::debug!(bytes = written, dest = %dest.display(), "download complete");
    Ok(written)
}
