//! Audio-URL extraction heuristic for share-page text.
//!
//! Two phases, first match wins: a bare-URL scan over the whole text, then a
//! best-effort probe of brace-delimited JSON fragments. Share pages expose
//! no stable API, so the scan tolerates arbitrary surrounding markup and
//! malformed embedded JSON. The non-greedy, non-recursive matching is a
//! known limitation: audio URLs nested more than one brace level deep, or
//! split across a quote boundary, are missed.

mod entities;

pub use entities::unescape;

use regex::Regex;
use serde_json::Value;

/// Recognized direct-audio extensions (lowercase, with dot).
pub const AUDIO_EXTENSIONS: [&str; 4] = [".mp3", ".m4a", ".wav", ".aac"];

/// JSON keys probed for a direct audio URL, in priority order.
const AUDIO_JSON_KEYS: [&str; 3] = ["audio_url", "audioUrl", "audio"];

/// Finds the most plausible direct audio URL in `page`, or `None` when the
/// heuristic comes up empty (absence, not an error).
///
/// Phase 1 scans for bare `http(s)` URLs and returns the first one with a
/// recognized audio extension, HTML entities unescaped. Phase 2 scans for
/// minimal `{...}` fragments, parses each as JSON (parse failures are
/// silently dropped from the candidate sequence), and returns the first
/// string value under a known audio key, unmodified.
pub fn find_audio_url(page: &str) -> Option<String> {
    // Pattern literals; construction cannot fail.
    let url_re = Regex::new(r#"https?://[^"'\s]+"#).expect("url pattern");
    for candidate in url_re.find_iter(page) {
        let candidate = candidate.as_str();
        if has_audio_extension(candidate) {
            return Some(unescape(candidate));
        }
    }

    // `.` does not match newlines, so candidates never span lines.
    let blob_re = Regex::new(r"\{.*?\}").expect("json fragment pattern");
    let parsed = blob_re
        .find_iter(page)
        .filter_map(|m| serde_json::from_str::<Value>(m.as_str()).ok());
    for value in parsed {
        for key in AUDIO_JSON_KEYS {
            if let Some(s) = value.get(key).and_then(Value::as_str) {
                if has_audio_extension(s) {
                    return Some(s.to_string());
                }
            }
        }
    }

    None
}

/// True when the candidate's path portion (query and fragment trimmed) ends
/// with a recognized audio extension, case-insensitively.
pub fn has_audio_extension(candidate: &str) -> bool {
    let end = candidate.find(['?', '#']).unwrap_or(candidate.len());
    let path = candidate[..end].to_ascii_lowercase();
    AUDIO_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
