use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const CONFIG_FILENAME: &str = "padstate_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RumbleConfig {
    pub left: f32,
    pub right: f32,
    pub duration_ms: u64,
}

impl Default for RumbleConfig {
    fn default() -> Self {
        Self {
            left: 0.6,
            right: 0.3,
            duration_ms: 150,
        }
    }
}

impl RumbleConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Which connected gamepad to drive, in enumeration order
    pub slot: usize,
    pub tick_rate_hz: u32,
    /// evdev path for rumble; looked up through udev when unset
    pub force_feedback_device: Option<String>,
    /// Played when the jump button goes down
    pub jump_rumble: RumbleConfig,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            slot: 0,
            tick_rate_hz: 60,
            force_feedback_device: None,
            jump_rumble: RumbleConfig::default(),
        }
    }
}

impl PadConfig {
    pub fn load() -> Option<Self> {
        let path = Self::config_path();
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match Self::from_json(&contents) {
                    Ok(config) => {
                        log::info!("Loaded config from {:?}", path);
                        return Some(config);
                    }
                    Err(e) => {
                        log::error!("Failed to parse config: {}", e);
                    }
                },
                Err(e) => {
                    log::error!("Failed to read config file: {}", e);
                }
            }
        }
        None
    }

    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path();
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;
        log::info!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILENAME)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }
}
