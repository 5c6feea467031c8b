//! Retro Pong - classic two-paddle Pong against a reactive bot
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring, bot)
//! - `renderer`: Draw projection plus the WebGPU rectangle pipeline
//! - `platform`: Keyboard mapping and the per-frame driver
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (difficulty, pacing)

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, ConfigResult};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Default court size (canvas pixels)
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 70.0;
    /// Gap between each paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Player paddle speed (pixels per tick)
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Horizontal serve speed (pixels per tick, sign picked at random)
    pub const BALL_SERVE_SPEED: f32 = 4.0;
    /// Width of the random vertical serve range, centered on zero
    pub const BALL_SERVE_SPIN: f32 = 6.0;
    /// Vertical speed imparted by a hit at the very tip of a paddle
    pub const PADDLE_SPIN: f32 = 5.0;

    /// First to this many points wins
    pub const WIN_SCORE: u32 = 5;

    /// Upper bound on simulation ticks per rendered frame in fixed-step pacing
    pub const MAX_SUBSTEPS: u32 = 8;
}
