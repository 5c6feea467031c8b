//! Collision detection and response for axis-aligned rectangles
//!
//! The ball and both paddles are boxes. Paddle contact is one-sided: each
//! test only fires while the ball's leading edge is between the paddle's
//! faces, so a ball that already passed through is left alone.
//!
//! The edge comparisons mix strict and inclusive bounds (strict on the far
//! face, inclusive on the near face and vertical overlap). Under rare
//! alignments a ball can graze past a paddle; that behaviour is kept.

use super::state::{Ball, Paddle};

/// Ball touches the top or bottom wall (inclusive on both edges)
#[inline]
pub fn touches_wall(ball: &Ball, court_height: f32) -> bool {
    ball.pos.y <= 0.0 || ball.pos.y + ball.size >= court_height
}

/// Ball overlaps the paddle vertically (inclusive)
#[inline]
fn overlaps_vertically(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.size >= paddle.pos.y && ball.pos.y <= paddle.pos.y + paddle.height
}

/// Contact with a paddle guarding the left wall: the ball's left edge is at
/// or behind the paddle's right face but still ahead of its left face.
pub fn left_paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x <= paddle.pos.x + paddle.width
        && overlaps_vertically(ball, paddle)
        && ball.pos.x > paddle.pos.x
}

/// Contact with a paddle guarding the right wall: the ball's right edge is at
/// or past the paddle's left face while its left edge is short of the right face.
pub fn right_paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x + ball.size >= paddle.pos.x
        && overlaps_vertically(ball, paddle)
        && ball.pos.x < paddle.pos.x + paddle.width
}

/// Vertical speed after a paddle hit.
///
/// Linear in the offset of the ball's center from the paddle's center,
/// `-spin_factor` at the top tip and `+spin_factor` at the bottom tip.
/// Incoming vertical speed is discarded.
#[inline]
pub fn paddle_spin(ball: &Ball, paddle: &Paddle, spin_factor: f32) -> f32 {
    let offset = ball.center_y() - paddle.center_y();
    offset / (paddle.height / 2.0) * spin_factor
}

/// Send the ball back the way it came with spin from the contact point
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, spin_factor: f32) {
    ball.vel.x = -ball.vel.x;
    ball.vel.y = paddle_spin(ball, paddle, spin_factor);
}
