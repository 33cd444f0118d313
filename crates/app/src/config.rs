//! Run configuration. Loaded from config.ron at startup.

use std::path::{Path, PathBuf};

use orrery::{SessionConfig, TimeCommand};
use serde::{Deserialize, Serialize};

/// A time command issued at the start of a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptedCommand {
    pub frame: u64,
    pub command: TimeCommand,
}

/// Headless run settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seed for orbital phases, belts, prominences, meteors and textures.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Number of frames to simulate.
    #[serde(default = "default_frames")]
    pub frames: u64,
    /// Wall-clock seconds per frame.
    #[serde(default = "default_frame_delta")]
    pub frame_delta: f64,
    /// Write generated textures as PNG files here.
    #[serde(default)]
    pub texture_dir: Option<PathBuf>,
    /// Body to fly to and follow from the first frame.
    #[serde(default)]
    pub follow: Option<String>,
    #[serde(default)]
    pub time_commands: Vec<ScriptedCommand>,
    #[serde(default = "default_prominence_count")]
    pub prominence_count: usize,
    /// Frames between state summaries; 0 disables them.
    #[serde(default = "default_log_every")]
    pub log_every: u64,
}

fn default_seed() -> u64 {
    42
}
fn default_frames() -> u64 {
    600
}
fn default_frame_delta() -> f64 {
    1.0 / 60.0
}
fn default_prominence_count() -> usize {
    5
}
fn default_log_every() -> u64 {
    120
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            frames: default_frames(),
            frame_delta: default_frame_delta(),
            texture_dir: None,
            follow: None,
            time_commands: Vec::new(),
            prominence_count: default_prominence_count(),
            log_every: default_log_every(),
        }
    }
}

impl AppConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(data) = std::fs::read_to_string(path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            seed: self.seed,
            prominence_count: self.prominence_count,
            ..Default::default()
        }
    }

    /// Commands scheduled for `frame`, in file order.
    pub fn commands_at(&self, frame: u64) -> impl Iterator<Item = TimeCommand> + '_ {
        self.time_commands
            .iter()
            .filter(move |c| c.frame == frame)
            .map(|c| c.command)
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("config.ron")
}
