//! Draw projection: turns the current session into draw calls
//!
//! Read-only over the state. No validation; the simulation keeps its own
//! invariants.

use super::vertex::colors;
use super::Renderer;
use crate::sim::{GamePhase, GameState, Side};

/// Net dash size and vertical pitch
const NET_DASH_WIDTH: f32 = 2.0;
const NET_DASH_HEIGHT: f32 = 10.0;
const NET_PITCH: f32 = 20.0;

/// Baseline of the score digits
const SCORE_Y: f32 = 40.0;
const SCORE_FONT_SIZE: f32 = 32.0;

/// Draw one full frame of the court
pub fn draw_frame<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    let w = state.court.width;
    let h = state.court.height;

    renderer.clear();
    draw_net(renderer, w, h);

    let player = &state.player;
    renderer.fill_rect(player.pos.x, player.pos.y, player.width, player.height);
    let bot = &state.bot.paddle;
    renderer.fill_rect(bot.pos.x, bot.pos.y, bot.width, bot.height);
    let ball = &state.ball;
    renderer.fill_rect(ball.pos.x, ball.pos.y, ball.size, ball.size);

    renderer.draw_centered_text(
        &state.score.player.to_string(),
        w / 4.0,
        SCORE_Y,
        SCORE_FONT_SIZE,
        colors::WHITE,
    );
    renderer.draw_centered_text(
        &state.score.bot.to_string(),
        3.0 * w / 4.0,
        SCORE_Y,
        SCORE_FONT_SIZE,
        colors::WHITE,
    );

    if state.phase == GamePhase::Over {
        draw_game_over(state, renderer, w, h);
    }
}

fn draw_net<R: Renderer + ?Sized>(renderer: &mut R, w: f32, h: f32) {
    let x = w / 2.0 - NET_DASH_WIDTH / 2.0;
    let mut y = 0.0;
    while y < h {
        renderer.draw_filled_rect(x, y, NET_DASH_WIDTH, NET_DASH_HEIGHT, colors::NET);
        y += NET_PITCH;
    }
}

fn draw_game_over<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R, w: f32, h: f32) {
    let headline = match state.winner() {
        Some(Side::Player) => "You Win!",
        _ => "Bot Wins!",
    };
    renderer.draw_centered_text("Game Over", w / 2.0, h / 2.0 - 20.0, 36.0, colors::GAME_OVER);
    renderer.draw_centered_text(headline, w / 2.0, h / 2.0 + 20.0, 28.0, colors::WINNER);
    renderer.draw_centered_text(
        "Press Start to Play Again",
        w / 2.0,
        h / 2.0 + 60.0,
        20.0,
        colors::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::sim::{Court, Score};
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state() -> GameState {
        let mut rng = Pcg32::seed_from_u64(3);
        GameState::new(Court::new(800.0, 400.0), Tuning::default(), &mut rng)
    }

    #[test]
    fn test_menu_frame() {
        let state = state();
        let mut list = DrawList::new();
        draw_frame(&state, &mut list);

        assert_eq!(list.commands[0], DrawCommand::Clear);
        // 20 net dashes, two paddles, one ball
        assert_eq!(list.rect_count(), 23);
        assert!(list.has_rect(399.0, 0.0, 2.0, 10.0));
        assert!(list.has_rect(399.0, 380.0, 2.0, 10.0));
        assert!(list.has_rect(10.0, 165.0, 10.0, 70.0));
        assert!(list.has_rect(780.0, 165.0, 10.0, 70.0));
        assert!(list.has_rect(395.0, 195.0, 10.0, 10.0));
        assert_eq!(list.texts(), vec!["0", "0"]);
    }

    #[test]
    fn test_score_positions() {
        let mut state = state();
        state.score = Score { player: 3, bot: 1 };
        let mut list = DrawList::new();
        draw_frame(&state, &mut list);

        let scores: Vec<_> = list
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, x, y, font_size, .. } => {
                    Some((text.clone(), *x, *y, *font_size))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            scores,
            vec![
                ("3".to_string(), 200.0, 40.0, 32.0),
                ("1".to_string(), 600.0, 40.0, 32.0),
            ]
        );
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = state();
        state.phase = GamePhase::Over;
        state.score = Score { player: 2, bot: 5 };
        let mut list = DrawList::new();
        draw_frame(&state, &mut list);
        assert_eq!(
            list.texts(),
            vec!["2", "5", "Game Over", "Bot Wins!", "Press Start to Play Again"]
        );

        state.score = Score { player: 5, bot: 4 };
        draw_frame(&state, &mut list);
        assert!(list.texts().contains(&"You Win!"));
    }

    #[test]
    fn test_no_overlay_while_playing() {
        let mut state = state();
        state.phase = GamePhase::Playing;
        state.score = Score { player: 4, bot: 4 };
        let mut list = DrawList::new();
        draw_frame(&state, &mut list);
        assert_eq!(list.texts(), vec!["4", "4"]);
    }
}
