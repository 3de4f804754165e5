use crate::error::{PlayerError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "single-track-player";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_EXTENSIONS: [&str; 5] = ["mp3", "wav", "flac", "ogg", "m4a"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// How often the elapsed position is re-read while playing.
    pub refresh_interval_ms: u64,
    /// Extensions offered by the file picker.
    pub audio_extensions: Vec<String>,
    pub window_width: f32,
    pub window_height: f32,
    /// Used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 500,
            audio_extensions: default_extensions(),
            window_width: 420.0,
            window_height: 220.0,
            log_filter: "single_track_player=info".to_string(),
        }
    }
}

impl PlayerConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text)?;

        config.audio_extensions = config
            .audio_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        if config.audio_extensions.is_empty() {
            config.audio_extensions = default_extensions();
        }

        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&text)
    }

    /// Reads the user config if there is one.
    ///
    /// A broken file still yields defaults; its error is handed back so the
    /// caller can report it once logging is up.
    pub fn load_or_default() -> (Self, Option<(PathBuf, PlayerError)>) {
        let Some(path) = Self::default_path().filter(|path| path.exists()) else {
            return (Self::default(), None);
        };

        match Self::load_from_file(&path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some((path, err))),
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms.max(1))
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}
