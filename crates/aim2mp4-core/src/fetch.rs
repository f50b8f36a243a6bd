//! Share-page fetch: HTTP GET returning the body decoded as text.
//!
//! Uses the curl crate (libcurl). Follows redirects, sends the configured
//! User-Agent, and checks for a 2xx status after the transfer completes.

use crate::config::Aim2Mp4Config;
use std::time::Duration;
use thiserror::Error;

/// Error from fetching the share page. Callers treat all variants uniformly:
/// report the message and stop the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl reported an error (connect failure, timeout, TLS, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Transfer completed with a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

/// Fetches `url` and returns the response body as text.
///
/// Undecodable byte sequences in the body are replaced rather than reported
/// as errors.
pub fn fetch_page_text(url: &str, cfg: &Aim2Mp4Config) -> Result<String, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.useragent(&cfg.user_agent)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(cfg.fetch_timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    tracing::debug!(bytes = body.len(), "fetched share page");
    Ok(String::from_utf8_lossy(&body).into_owned())
}
