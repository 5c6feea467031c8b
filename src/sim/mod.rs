//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Randomness only through the injected RNG
//! - No rendering or platform dependencies

pub mod bot;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{left_paddle_contact, paddle_spin, right_paddle_contact, touches_wall};
pub use state::{
    Ball, Bot, BotParams, Court, Difficulty, GameEvent, GamePhase, GameState, Paddle, Score, Side,
};
pub use tick::{TickInput, tick};
