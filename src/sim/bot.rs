//! Bot paddle targeting
//!
//! A dead-zone tracker: outside the zone the bot moves at constant speed
//! toward the ball, inside it holds still. No prediction, no easing.

use super::state::{Ball, Bot};

impl Bot {
    /// Half-height of the zone around the paddle center where the bot rests
    pub fn dead_zone(&self, court_height: f32) -> f32 {
        self.reaction * court_height
    }

    /// Vertical step the bot wants this tick (0, `+speed` or `-speed`).
    ///
    /// Compares the ball's top edge against the paddle center.
    pub fn step_toward(&self, ball: &Ball, court_height: f32) -> f32 {
        let center = self.paddle.center_y();
        let target = ball.pos.y;
        if (target - center).abs() <= self.dead_zone(court_height) {
            return 0.0;
        }
        if target < center {
            -self.paddle.speed
        } else if target > center {
            self.paddle.speed
        } else {
            0.0
        }
    }

    /// Move one step toward the ball and stay inside the court
    pub fn track(&mut self, ball: &Ball, court_height: f32) {
        self.paddle.pos.y += self.step_toward(ball, court_height);
        self.paddle.clamp_to(court_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Difficulty, Paddle};
    use glam::Vec2;

    fn bot(level: Difficulty) -> Bot {
        let params = level.params();
        Bot {
            paddle: Paddle {
                pos: Vec2::new(780.0, 165.0),
                width: 10.0,
                height: 70.0,
                speed: params.speed,
            },
            reaction: params.reaction,
        }
    }

    fn ball_at_y(y: f32) -> Ball {
        Ball {
            pos: Vec2::new(400.0, y),
            vel: Vec2::new(4.0, 0.0),
            size: 10.0,
        }
    }

    #[test]
    fn test_holds_inside_dead_zone() {
        // Easy: zone is 0.12 * 400 = 48 px around center 200
        let bot = bot(Difficulty::Easy);
        assert_eq!(bot.step_toward(&ball_at_y(240.0), 400.0), 0.0);
        assert_eq!(bot.step_toward(&ball_at_y(160.0), 400.0), 0.0);
        assert_eq!(bot.step_toward(&ball_at_y(249.0), 400.0), 3.0);
        assert_eq!(bot.step_toward(&ball_at_y(100.0), 400.0), -3.0);
    }

    #[test]
    fn test_impossible_bot_closes_in() {
        let mut bot = bot(Difficulty::Impossible);
        // 40% of the court height above the paddle center
        let ball = ball_at_y(200.0 - 160.0);

        let mut last_gap = (ball.pos.y - bot.paddle.center_y()).abs();
        let mut ticks = 0;
        while last_gap > bot.dead_zone(400.0) {
            bot.track(&ball, 400.0);
            let gap = (ball.pos.y - bot.paddle.center_y()).abs();
            assert!(gap < last_gap || gap <= bot.dead_zone(400.0));
            last_gap = gap;
            ticks += 1;
            assert!(ticks < 100, "bot never reached the ball");
        }
        assert_eq!(ticks, 23);

        // Settled: further ticks do not move it
        let settled = bot.paddle.pos.y;
        bot.track(&ball, 400.0);
        assert_eq!(bot.paddle.pos.y, settled);
    }

    #[test]
    fn test_track_clamps_to_court() {
        let mut bot = bot(Difficulty::Impossible);
        bot.paddle.pos.y = 2.0;
        bot.track(&ball_at_y(0.0), 400.0);
        assert_eq!(bot.paddle.pos.y, 0.0);

        bot.paddle.pos.y = 328.0;
        bot.track(&ball_at_y(400.0), 400.0);
        assert_eq!(bot.paddle.pos.y, 330.0);
    }
}
