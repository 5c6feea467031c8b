//! Player preferences
//!
//! Persisted in LocalStorage on the web. Scores are never stored.

use serde::{Deserialize, Serialize};

use crate::sim::Difficulty;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty picked for the last game started
    pub difficulty: Difficulty,
    /// Fixed simulation rate. `None` runs one tick per display refresh.
    pub tick_rate_hz: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            tick_rate_hz: None,
        }
    }
}

impl Settings {
    /// Seconds per simulation tick when a fixed rate is configured
    pub fn fixed_dt(&self) -> Option<f32> {
        self.tick_rate_hz
            .filter(|&hz| hz > 0)
            .map(|hz| 1.0 / hz as f32)
    }

    /// Decode stored settings, falling back to defaults on bad data
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "retro_pong_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip_and_fallback() {
        let settings = Settings {
            difficulty: Difficulty::Hard,
            tick_rate_hz: Some(60),
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json), settings);

        assert_eq!(Settings::from_json("garbage"), Settings::default());
        // Missing fields take defaults
        let partial = Settings::from_json(r#"{ "difficulty": "Impossible" }"#);
        assert_eq!(partial.difficulty, Difficulty::Impossible);
        assert_eq!(partial.tick_rate_hz, None);
    }

    #[test]
    fn test_fixed_dt() {
        assert_eq!(Settings::default().fixed_dt(), None);
        let fixed = Settings {
            tick_rate_hz: Some(120),
            ..Default::default()
        };
        assert_eq!(fixed.fixed_dt(), Some(1.0 / 120.0));
        let zero = Settings {
            tick_rate_hz: Some(0),
            ..Default::default()
        };
        assert_eq!(zero.fixed_dt(), None);
    }
}
