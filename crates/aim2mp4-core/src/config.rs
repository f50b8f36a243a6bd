use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User-Agent sent with every HTTP request.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; AimAudioBot/1.0)";

/// Encoder parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Encoder binary name or path; resolved on PATH when not absolute.
    pub binary: String,
    /// Width of the synthetic video stream in pixels.
    pub width: u32,
    /// Height of the synthetic video stream in pixels.
    pub height: u32,
    /// Frame rate of the synthetic video stream.
    pub frame_rate: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            binary: "ffmpeg".to_string(),
            width: 1280,
            height: 720,
            frame_rate: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/aim2mp4/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aim2Mp4Config {
    /// User-Agent header sent with every HTTP request.
    pub user_agent: String,
    /// Total timeout for the share-page fetch, in seconds.
    pub fetch_timeout_secs: u64,
    /// Total timeout for the media download, in seconds.
    pub download_timeout_secs: u64,
    /// Receive buffer size for the media download, in bytes.
    pub download_chunk_bytes: usize,
    /// Optional encoder overrides; if missing, built-in defaults are used.
    #[serde(default)]
    pub encoder: Option<EncoderConfig>,
}

impl Default for Aim2Mp4Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fetch_timeout_secs: 30,
            download_timeout_secs: 60,
            download_chunk_bytes: 1024 * 1024,
            encoder: None,
        }
    }
}

impl Aim2Mp4Config {
    /// Encoder settings with the built-in defaults filled in when the
    /// `[encoder]` section is absent.
    pub fn encoder_or_default(&self) -> EncoderConfig {
        self.encoder.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("aim2mp4")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Aim2Mp4Config> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = Aim2Mp4Config::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: Aim2Mp4Config = toml::from_str(&data)?;
    Ok(cfg)
}
