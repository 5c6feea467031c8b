use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Tuning value '{field}' must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("Win score must be at least 1")]
    ZeroWinScore,

    #[error("Paddle of height {paddle_height} does not fit a court {court_height} high")]
    PaddleTooTall {
        paddle_height: f32,
        court_height: f32,
    },

    #[error("Court {width}x{height} cannot hold both paddles")]
    CourtTooNarrow { width: f32, height: f32 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
