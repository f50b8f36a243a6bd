//! Container build: pairs the downloaded audio with a synthetic black video
//! stream and writes an MP4, via the external encoder (ffmpeg by default).
//!
//! Invocation shape:
//! `ffmpeg -y -f lavfi -i color=c=black:s=WxH:r=FPS -i <audio>
//!  -c:v libx264 -tune stillimage -c:a aac -shortest <output>`

use crate::config::EncoderConfig;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Lines of encoder stderr kept in `EncodeError::Failed` (ffmpeg prints the
/// failure reason last).
const STDERR_TAIL_LINES: usize = 12;

/// Error from the container build stage. `Missing` and `Failed` are reported
/// differently by callers: the former warrants install guidance, the latter
/// carries the encoder's own diagnostic.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Encoder binary not found on PATH (or at the configured path).
    #[error("`{binary}` not found on PATH")]
    Missing { binary: String },
    /// Encoder ran but exited non-zero.
    #[error("exited with {status}\n{stderr_tail}")]
    Failed {
        status: std::process::ExitStatus,
        stderr_tail: String,
    },
    /// Encoder could not be spawned or its output collected.
    #[error("could not run encoder: {0}")]
    Spawn(io::Error),
}

/// Resolves the encoder binary named in `cfg` via PATH lookup.
pub fn locate_encoder(cfg: &EncoderConfig) -> Result<PathBuf, EncodeError> {
    which::which(&cfg.binary).map_err(|_| EncodeError::Missing {
        binary: cfg.binary.clone(),
    })
}

/// Wraps `audio` into an MP4 at `output`, overwriting any existing file and
/// truncating to the shorter of the two streams.
pub fn wrap_audio(audio: &Path, output: &Path, cfg: &EncoderConfig) -> Result<(), EncodeError> {
    let binary = locate_encoder(cfg)?;
    let args = build_args(audio, output, cfg);
    tracing::debug!(encoder = %binary.display(), ?args, "invoking encoder");

    let out = match Command::new(&binary).args(&args).output() {
        Ok(out) => out,
        // Binary vanished between PATH lookup and spawn.
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(EncodeError::Missing {
                binary: cfg.binary.clone(),
            })
        }
        Err(e) => return Err(EncodeError::Spawn(e)),
    };

    if !out.status.success() {
        return Err(EncodeError::Failed {
            status: out.status,
            stderr_tail: stderr_tail(&out.stderr),
        });
    }

    tracing::info!(output = %output.display(), "container build complete");
    Ok(())
}

/// Builds the encoder argument list: synthetic color source as the video
/// input, the audio file as the second input, still-image video profile,
/// AAC audio, output truncated to the shorter stream, overwrite allowed.
fn build_args(audio: &Path, output: &Path, cfg: &EncoderConfig) -> Vec<OsString> {
    let color_source = format!(
        "color=c=black:s={}x{}:r={}",
        cfg.width, cfg.height, cfg.frame_rate
    );
    let mut args: Vec<OsString> = ["-y", "-f", "lavfi", "-i"]
        .iter()
        .map(OsString::from)
        .collect();
    args.push(color_source.into());
    args.push("-i".into());
    args.push(audio.as_os_str().to_os_string());
    for flag in ["-c:v", "libx264", "-tune", "stillimage", "-c:a", "aac", "-shortest"] {
        args.push(flag.into());
    }
    args.push(output.as_os_str().to_os_string());
    args
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
