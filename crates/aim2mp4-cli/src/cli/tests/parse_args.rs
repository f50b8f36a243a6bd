//! Tests for the argument surface.

use super::parse;
use std::path::Path;

#[test]
fn cli_parse_share_url_only() {
    let cli = parse(&["aim2mp4", "https://aimusicgen.ai/share/abc"]);
    assert_eq!(cli.share_url.as_deref(), Some("https://aimusicgen.ai/share/abc"));
    assert!(cli.audio_url.is_none());
    assert_eq!(cli.output, Path::new("aimusic.mp4"));
}

#[test]
fn cli_parse_no_args() {
    let cli = parse(&["aim2mp4"]);
    assert!(cli.share_url.is_none());
    assert!(cli.audio_url.is_none());
    assert_eq!(cli.output, Path::new("aimusic.mp4"));
}

#[test]
fn cli_parse_audio_url() {
    let cli = parse(&["aim2mp4", "--audio-url", "https://cdn.example.com/a.mp3"]);
    assert!(cli.share_url.is_none());
    assert_eq!(cli.audio_url.as_deref(), Some("https://cdn.example.com/a.mp3"));
}

#[test]
fn cli_parse_output_override() {
    let cli = parse(&[
        "aim2mp4",
        "https://aimusicgen.ai/share/abc",
        "--output",
        "song.mp4",
    ]);
    assert_eq!(cli.output, Path::new("song.mp4"));
}

#[test]
fn cli_parse_share_and_audio_url_together() {
    let cli = parse(&[
        "aim2mp4",
        "https://aimusicgen.ai/share/abc",
        "--audio-url",
        "https://cdn.example.com/a.mp3",
    ]);
    assert!(cli.share_url.is_some());
    assert!(cli.audio_url.is_some());
}
