//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. The
//! defaults reproduce the classic feel; a JSON override may replace any subset.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, ConfigResult};

/// Gameplay constants, all in canvas pixels and pixels per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each paddle and its side wall
    pub paddle_margin: f32,
    pub player_speed: f32,
    pub ball_size: f32,
    /// Horizontal serve speed (sign chosen at random on every serve)
    pub serve_speed: f32,
    /// Serve vertical speed is uniform in `[-serve_spin / 2, serve_spin / 2)`
    pub serve_spin: f32,
    /// Vertical speed after a hit at the paddle tip
    pub paddle_spin: f32,
    pub win_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            player_speed: PLAYER_SPEED,
            ball_size: BALL_SIZE,
            serve_speed: BALL_SERVE_SPEED,
            serve_spin: BALL_SERVE_SPIN,
            paddle_spin: PADDLE_SPIN,
            win_score: WIN_SCORE,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override; missing fields keep defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read an override file (native hosts)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Use `loaded` if it parsed and fits the court, otherwise the defaults
    pub fn or_default(loaded: ConfigResult<Self>, width: f32, height: f32) -> Self {
        match loaded.and_then(|tuning| tuning.check_court(width, height).map(|_| tuning)) {
            Ok(tuning) => {
                log::info!("Using tuning override: win score {}", tuning.win_score);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning override: {}", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key for an optional override
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "retro_pong_tuning";

    /// Load an override from LocalStorage, falling back to defaults (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(width: f32, height: f32) -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok().flatten());

        match stored {
            Some(json) => Self::or_default(Self::from_json(&json), width, height),
            None => Self::default(),
        }
    }

    /// Reject values that would break the simulation invariants.
    ///
    /// A zero serve speed would park the ball, so it is rejected with the
    /// other sizes and speeds.
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("player_speed", self.player_speed),
            ("ball_size", self.ball_size),
            ("serve_speed", self.serve_speed),
        ];
        for (field, value) in positive {
            // NaN fails this comparison too
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }

    /// Check that this tuning leaves room for play on a court of the given size.
    pub fn check_court(&self, width: f32, height: f32) -> ConfigResult<()> {
        if self.paddle_height > height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                court_height: height,
            });
        }
        let occupied = 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size;
        if occupied >= width {
            return Err(ConfigError::CourtTooNarrow { width, height });
        }
        Ok(())
    }
}
