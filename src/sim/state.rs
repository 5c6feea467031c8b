//! Game state and core simulation types
//!
//! One session owns exactly one player paddle, one bot, one ball and one
//! score pair. Nothing here touches the renderer or the platform.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first start signal
    Menu,
    /// Active gameplay (the only phase that ticks)
    Playing,
    /// Someone reached the win score; entities are frozen
    Over,
}

/// Which end of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left paddle, keyboard controlled
    Player,
    /// Right paddle, driven by the bot
    Bot,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce,
    PaddleHit(Side),
    PointScored(Side),
    GameOver { winner: Side },
}

/// Bot reaction threshold and speed for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotParams {
    /// Dead zone half-height as a fraction of court height
    pub reaction: f32,
    /// Pixels per tick
    pub speed: f32,
}

/// Bot difficulty levels, easiest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    /// Level for a start-control index, clamped into the table
    pub fn from_index(index: i64) -> Self {
        let clamped = index.clamp(0, Self::ALL.len() as i64 - 1);
        Self::ALL[clamped as usize]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn params(&self) -> BotParams {
        match self {
            Difficulty::Easy => BotParams {
                reaction: 0.12,
                speed: 3.0,
            },
            Difficulty::Medium => BotParams {
                reaction: 0.08,
                speed: 4.0,
            },
            Difficulty::Hard => BotParams {
                reaction: 0.04,
                speed: 5.0,
            },
            Difficulty::Impossible => BotParams {
                reaction: 0.01,
                speed: 7.0,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Impossible => "Impossible",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "impossible" => Some(Difficulty::Impossible),
            _ => None,
        }
    }
}

/// Playing field size in canvas pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Court {
    fn default() -> Self {
        Self::new(crate::consts::COURT_WIDTH, crate::consts::COURT_HEIGHT)
    }
}

/// A paddle; `pos` is the top-left corner and only `pos.y` changes in play
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels per tick
    pub speed: f32,
}

impl Paddle {
    /// Paddle vertically centered in the court at column `x`
    pub fn centered(x: f32, court: Court, tuning: &Tuning, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, court.height / 2.0 - tuning.paddle_height / 2.0),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            speed,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    /// Keep the paddle inside the court. A paddle taller than the court is
    /// pinned to the top edge.
    pub fn clamp_to(&mut self, court_height: f32) {
        self.pos.y = self.pos.y.min(court_height - self.height).max(0.0);
    }
}

/// The bot's paddle plus how eagerly it chases the ball
#[derive(Debug, Clone, PartialEq)]
pub struct Bot {
    pub paddle: Paddle,
    /// Dead zone half-height as a fraction of court height
    pub reaction: f32,
}

/// The ball; `pos` is the top-left corner of its square
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per tick; `vel.x` is never zero
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    /// Ball centered in the court with a random serve
    pub fn serve<R: Rng + ?Sized>(court: Court, tuning: &Tuning, rng: &mut R) -> Self {
        let dir = if rng.random::<f32>() > 0.5 { 1.0 } else { -1.0 };
        let spin = (rng.random::<f32>() - 0.5) * tuning.serve_spin;
        Self {
            pos: Vec2::new(
                court.width / 2.0 - tuning.ball_size / 2.0,
                court.height / 2.0 - tuning.ball_size / 2.0,
            ),
            vel: Vec2::new(dir * tuning.serve_speed, spin),
            size: tuning.ball_size,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }
}

/// Points won this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub bot: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Bot => self.bot,
        }
    }

    /// Add one point and return the new total
    pub fn award(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Player => &mut self.player,
            Side::Bot => &mut self.bot,
        };
        *slot += 1;
        *slot
    }
}

/// Complete session state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub court: Court,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub player: Paddle,
    pub bot: Bot,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    /// A fresh session sitting in the menu with entities at their serve positions
    pub fn new<R: Rng + ?Sized>(court: Court, tuning: Tuning, rng: &mut R) -> Self {
        let difficulty = Difficulty::default();
        let params = difficulty.params();
        let bot_x = court.width - tuning.paddle_margin - tuning.paddle_width;
        Self {
            court,
            phase: GamePhase::Menu,
            difficulty,
            player: Paddle::centered(tuning.paddle_margin, court, &tuning, tuning.player_speed),
            bot: Bot {
                paddle: Paddle::centered(bot_x, court, &tuning, params.speed),
                reaction: params.reaction,
            },
            ball: Ball::serve(court, &tuning, rng),
            score: Score::default(),
            tuning,
        }
    }

    /// Re-center paddles and serve a new ball. Scores are kept.
    pub fn reset_positions<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let tuning = self.tuning;
        let court = self.court;
        let params = self.difficulty.params();

        self.player = Paddle::centered(tuning.paddle_margin, court, &tuning, tuning.player_speed);
        let bot_x = court.width - tuning.paddle_margin - tuning.paddle_width;
        self.bot = Bot {
            paddle: Paddle::centered(bot_x, court, &tuning, params.speed),
            reaction: params.reaction,
        };
        self.ball = Ball::serve(court, &tuning, rng);
    }

    /// Zero the scores and reset positions
    pub fn reset_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.score = Score::default();
        self.reset_positions(rng);
    }

    /// Handle the start signal. Accepted from `Menu` and `Over` only; returns
    /// whether a new game began. Out-of-range levels are clamped.
    ///
    /// A start during play does not restart the match: the score, difficulty
    /// and positions are left as they are.
    pub fn start<R: Rng + ?Sized>(&mut self, level: i64, rng: &mut R) -> bool {
        if self.phase == GamePhase::Playing {
            log::info!(
                "Start ignored: game in progress at {} - {}",
                self.score.player,
                self.score.bot
            );
            return false;
        }

        let difficulty = Difficulty::from_index(level);
        if difficulty.index() as i64 != level {
            log::warn!("Difficulty index {} out of range, using {}", level, difficulty.as_str());
        }

        self.difficulty = difficulty;
        self.reset_game(rng);
        self.phase = GamePhase::Playing;
        log::info!("New game started on {}", difficulty.as_str());
        true
    }

    /// The side that won, once the game is over
    pub fn winner(&self) -> Option<Side> {
        if self.phase != GamePhase::Over {
            return None;
        }
        if self.score.player > self.score.bot {
            Some(Side::Player)
        } else {
            Some(Side::Bot)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn new_state() -> (GameState, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(7);
        let state = GameState::new(Court::default(), Tuning::default(), &mut rng);
        (state, rng)
    }

    #[test]
    fn test_initial_layout() {
        let (state, _) = new_state();
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.player.pos, Vec2::new(10.0, 165.0));
        assert_eq!(state.bot.paddle.pos, Vec2::new(780.0, 165.0));
        assert_eq!(state.ball.pos, Vec2::new(395.0, 195.0));
        assert_eq!(state.bot.paddle.speed, 3.0);
        assert_eq!(state.bot.reaction, 0.12);
    }

    #[test]
    fn test_serve_ranges() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let mut saw_left = false;
        let mut saw_right = false;
        for _ in 0..200 {
            let ball = Ball::serve(Court::default(), &Tuning::default(), &mut rng);
            assert_eq!(ball.vel.x.abs(), 4.0);
            assert!(ball.vel.y >= -3.0 && ball.vel.y < 3.0);
            saw_left |= ball.vel.x < 0.0;
            saw_right |= ball.vel.x > 0.0;
        }
        assert!(saw_left && saw_right);
    }

    #[test]
    fn test_reset_positions_keeps_score() {
        let (mut state, mut rng) = new_state();
        state.score = Score { player: 3, bot: 2 };
        state.player.pos.y = 0.0;
        state.ball.pos = Vec2::new(-5.0, 12.0);

        state.reset_positions(&mut rng);
        assert_eq!(state.score, Score { player: 3, bot: 2 });
        assert_eq!(state.player.pos.y, 165.0);
        assert_eq!(state.ball.pos, Vec2::new(395.0, 195.0));
    }

    #[test]
    fn test_start_from_menu_and_over() {
        let (mut state, mut rng) = new_state();
        assert!(state.start(2, &mut rng));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.bot.paddle.speed, 5.0);

        // Ignored while playing
        assert!(!state.start(0, &mut rng));
        assert_eq!(state.difficulty, Difficulty::Hard);

        state.phase = GamePhase::Over;
        state.score = Score { player: 5, bot: 4 };
        assert!(state.start(3, &mut rng));
        assert_eq!(state.score, Score::default());
        assert_eq!(state.difficulty, Difficulty::Impossible);
        assert_eq!(state.bot.reaction, 0.01);
    }

    #[test]
    fn test_start_while_playing_keeps_match() {
        let (mut state, mut rng) = new_state();
        state.start(0, &mut rng);
        state.score = Score { player: 3, bot: 2 };
        state.ball.pos = Vec2::new(120.0, 40.0);
        let before = state.clone();

        assert!(!state.start(3, &mut rng));
        assert_eq!(state, before);
        assert_eq!(state.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_paddle_taller_than_court_pins_to_top() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut state = GameState::new(Court::new(800.0, 50.0), Tuning::default(), &mut rng);
        state.start(1, &mut rng);
        crate::sim::tick(
            &mut state,
            &crate::sim::TickInput {
                up_held: false,
                down_held: true,
            },
            &mut rng,
        );
        assert_eq!(state.player.pos.y, 0.0);
        assert_eq!(state.bot.paddle.pos.y, 0.0);
    }

    #[test]
    fn test_difficulty_index_clamped() {
        assert_eq!(Difficulty::from_index(-3), Difficulty::Easy);
        assert_eq!(Difficulty::from_index(1), Difficulty::Medium);
        assert_eq!(Difficulty::from_index(42), Difficulty::Impossible);

        let (mut state, mut rng) = new_state();
        state.start(9, &mut rng);
        assert_eq!(state.difficulty, Difficulty::Impossible);
    }

    #[test]
    fn test_difficulty_table_ordering() {
        for pair in Difficulty::ALL.windows(2) {
            let (easier, harder) = (pair[0].params(), pair[1].params());
            assert!(harder.reaction < easier.reaction);
            assert!(harder.speed > easier.speed);
        }
        assert_eq!(Difficulty::from_str("MED"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_winner_only_when_over() {
        let (mut state, _) = new_state();
        state.score = Score { player: 5, bot: 1 };
        assert_eq!(state.winner(), None);
        state.phase = GamePhase::Over;
        assert_eq!(state.winner(), Some(Side::Player));
        state.score = Score { player: 2, bot: 5 };
        assert_eq!(state.winner(), Some(Side::Bot));
    }
}
