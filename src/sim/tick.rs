//! Per-frame simulation tick
//!
//! Advances one frame in a fixed order: player, bot, ball, walls, paddles,
//! scoring. The order matters when several things happen in one frame.

use rand::Rng;

use super::collision::{bounce_off_paddle, left_paddle_contact, right_paddle_contact, touches_wall};
use super::state::{GameEvent, GamePhase, GameState, Side};

/// Input held during a single tick, sampled once at tick entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up_held: bool,
    pub down_held: bool,
}

/// Advance the session by one frame and report what happened.
///
/// A no-op outside [`GamePhase::Playing`]. `rng` is only drawn from when a
/// point is scored and the ball is served again.
pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    let court_height = state.court.height;

    // Both keys held cancel out
    let player = &mut state.player;
    if input.up_held {
        player.pos.y -= player.speed;
    }
    if input.down_held {
        player.pos.y += player.speed;
    }
    player.clamp_to(court_height);

    state.bot.track(&state.ball, court_height);

    // One Euler step; fast balls may tunnel through a paddle
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Reflect without pushing the ball back inside
    if touches_wall(ball, court_height) {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    // Each paddle is checked independently
    let spin = state.tuning.paddle_spin;
    if left_paddle_contact(ball, &state.player) {
        bounce_off_paddle(ball, &state.player, spin);
        events.push(GameEvent::PaddleHit(Side::Player));
    }
    if right_paddle_contact(ball, &state.bot.paddle) {
        bounce_off_paddle(ball, &state.bot.paddle, spin);
        events.push(GameEvent::PaddleHit(Side::Bot));
    }

    let scorer = if state.ball.pos.x < 0.0 {
        Some(Side::Bot)
    } else if state.ball.pos.x > state.court.width {
        Some(Side::Player)
    } else {
        None
    };

    if let Some(side) = scorer {
        let total = state.score.award(side);
        events.push(GameEvent::PointScored(side));
        log::debug!(
            "{:?} scored ({} - {})",
            side,
            state.score.player,
            state.score.bot
        );

        if total >= state.tuning.win_score {
            state.phase = GamePhase::Over;
            events.push(GameEvent::GameOver { winner: side });
            log::info!(
                "Game over: {:?} wins {} - {}",
                side,
                state.score.player,
                state.score.bot
            );
        } else {
            state.reset_positions(rng);
        }
    }

    events
}
