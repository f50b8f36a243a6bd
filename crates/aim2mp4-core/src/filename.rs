//! Temp-file naming: derive a safe local filename from the audio URL path.
//!
//! Cosmetic only; the encoder probes the downloaded file by content, not by
//! extension.

/// Fallback when the URL path yields nothing usable.
const DEFAULT_FILENAME: &str = "audio";

/// Derives a filename for the temporary audio download from the last path
/// segment of `url`, sanitized for Linux filesystems. Unparseable URLs,
/// empty paths, and reserved names fall back to `"audio"`.
pub fn derive_audio_filename(url: &str) -> String {
    let raw = match last_path_segment(url) {
        Some(s) => s,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}

fn last_path_segment(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    Some(segment.to_string())
}

/// Drops NUL, `/`, and control characters; trims leading/trailing dots and
/// whitespace.
fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| *c != '\0' && *c != '/' && !c.is_control())
        .collect();
    cleaned
        .trim_matches(|c: char| c == '.' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_from_url_path() {
        assert_eq!(derive_audio_filename("https://cdn.example.com/track.mp3"), "track.mp3");
        assert_eq!(derive_audio_filename("https://cdn.example.com/a/b/song.m4a"), "song.m4a");
    }

    #[test]
    fn query_is_not_part_of_the_name() {
        assert_eq!(
            derive_audio_filename("https://cdn.example.com/track.mp3?x=1&sig=abc"),
            "track.mp3"
        );
    }

    #[test]
    fn root_or_empty_path_falls_back() {
        assert_eq!(derive_audio_filename("https://cdn.example.com/"), "audio");
        assert_eq!(derive_audio_filename("https://cdn.example.com"), "audio");
    }

    #[test]
    fn unparseable_url_falls_back() {
        assert_eq!(derive_audio_filename("/files/track.mp3"), "audio");
        assert_eq!(derive_audio_filename("not a url"), "audio");
    }

    #[test]
    fn reserved_names_fall_back() {
        assert_eq!(derive_audio_filename("https://cdn.example.com/.."), "audio");
        assert_eq!(derive_audio_filename("https://cdn.example.com/..."), "audio");
    }
}
