/// Kiosk configuration
///
/// A small JSON file lets an installation tune the auto-advance cadence and
/// the window size without rebuilding. Missing file means defaults, and the
/// defaults are written back so the file is there to edit next time.
///
/// The config file lives in the user's config directory:
/// - Linux: ~/.config/powerfit-kiosk/config.json
/// - macOS: ~/Library/Application Support/powerfit-kiosk/config.json
/// - Windows: %APPDATA%\powerfit-kiosk\config.json
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::state::carousel::DEFAULT_INTERVAL;

/// Floor for the auto-advance interval. Anything faster than this flips
/// images before anyone can look at them.
const MIN_ADVANCE_MS: u64 = 250;

/// Tunable kiosk settings. Unknown or missing fields fall back to defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct KioskConfig {
    /// Milliseconds between automatic tour advances.
    pub auto_advance_ms: u64,
    /// Initial window width in logical pixels.
    pub window_width: f32,
    /// Initial window height in logical pixels.
    pub window_height: f32,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: DEFAULT_INTERVAL.as_millis() as u64,
            window_width: 1280.0,
            window_height: 860.0,
        }
    }
}

impl KioskConfig {
    /// The auto-advance interval, clamped to the sane floor.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms.max(MIN_ADVANCE_MS))
    }

    /// Load the config file, or fall back to defaults.
    ///
    /// A missing file is the normal first-run case: defaults are written
    /// back so the installation has a file to edit. A file that fails to
    /// parse is left alone and reported, and defaults are used instead.
    pub fn load_or_default() -> Self {
        let path = Self::config_path();

        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    println!("⚙️  Loaded kiosk config from {}", path.display());
                    config
                }
                Err(e) => {
                    eprintln!("⚠️  Ignoring malformed config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                let config = Self::default();
                if let Err(e) = config.save() {
                    eprintln!("⚠️  Could not write default config: {}", e);
                }
                config
            }
        }
    }

    /// Write this config to the config file as pretty JSON.
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(&path, json).map_err(|e| format!("Failed to write config: {}", e))
    }

    /// Where the config file lives.
    fn config_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user config directory");

        path.push("powerfit-kiosk");
        path.push("config.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_observed_site() {
        let config = KioskConfig::default();
        assert_eq!(config.auto_advance_ms, 3000);
        assert_eq!(config.interval(), Duration::from_millis(3000));
    }

    #[test]
    fn test_interval_is_clamped() {
        let config = KioskConfig {
            auto_advance_ms: 0,
            ..KioskConfig::default()
        };
        assert_eq!(config.interval(), Duration::from_millis(MIN_ADVANCE_MS));
    }

    #[test]
    fn test_json_round_trip() {
        let config = KioskConfig {
            auto_advance_ms: 4500,
            window_width: 1920.0,
            window_height: 1080.0,
        };

        let json = serde_json::to_string(&config).unwrap();
        let restored: KioskConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        // An installation that only tunes the cadence keeps default sizing.
        let config: KioskConfig = serde_json::from_str(r#"{"auto_advance_ms": 5000}"#).unwrap();
        assert_eq!(config.auto_advance_ms, 5000);
        assert_eq!(config.window_width, KioskConfig::default().window_width);
    }
}
