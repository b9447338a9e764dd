//! Collision detection and response
//!
//! Walls reflect the vertical speed. Paddles reflect the horizontal speed and
//! aim the ball by where it struck: the further from the paddle center, the
//! steeper the return. Each check is independent; the caller decides what a
//! hit means for sound and scoring.

use super::state::{Ball, Surface};
use crate::consts::PADDLE_DEFLECTION;
use crate::settings::Settings;

/// Which horizontal wall to test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

impl Wall {
    pub fn surface(self) -> Surface {
        match self {
            Wall::Top => Surface::Top,
            Wall::Bottom => Surface::Bottom,
        }
    }
}

/// Bounce the ball off `wall` if it has crossed it.
///
/// Clamps the ball back inside, flips the vertical speed and flattens the
/// squash. Returns whether a bounce happened.
pub fn collide_wall(ball: &mut Ball, wall: Wall, settings: &Settings) -> bool {
    let boundary = match wall {
        Wall::Top if ball.pos.y < ball.radius => ball.radius,
        Wall::Bottom if ball.pos.y > settings.court_height - ball.radius => {
            settings.court_height - ball.radius
        }
        _ => return false,
    };

    ball.pos.y = boundary;
    ball.vel.y = -ball.vel.y;
    ball.squash = 1.0 / settings.collision_factor;
    true
}

/// x the ball center is clamped to when it meets the paddle on `surface`
pub fn paddle_plane(surface: Surface, ball_radius: f32, settings: &Settings) -> f32 {
    let reach = ball_radius + settings.paddle_width / 2.0;
    match surface {
        Surface::RightPaddle => settings.court_width - reach,
        _ => reach,
    }
}

/// Bounce the ball off a paddle whose top edge is at `paddle_y`.
///
/// Hits when the ball has crossed the paddle plane and its center lies
/// strictly inside `(paddle_y - r, paddle_y + height + r)`. On a hit the ball
/// is clamped to the plane, its horizontal speed flips and its vertical
/// speed is set from the offset to the paddle center.
pub fn collide_paddle(
    ball: &mut Ball,
    paddle_y: f32,
    surface: Surface,
    settings: &Settings,
) -> bool {
    let plane = paddle_plane(surface, ball.radius, settings);
    let crossed = match surface {
        Surface::LeftPaddle => ball.pos.x < plane,
        Surface::RightPaddle => ball.pos.x > plane,
        Surface::Top | Surface::Bottom => return false,
    };
    let height = settings.paddle_height;
    let in_reach =
        ball.pos.y > paddle_y - ball.radius && ball.pos.y < paddle_y + height + ball.radius;
    if !crossed || !in_reach {
        return false;
    }

    ball.pos.x = plane;
    ball.vel.x = -ball.vel.x;

    let dy = ball.pos.y - (paddle_y + height / 2.0);
    ball.vel.y = dy * PADDLE_DEFLECTION;
    ball.squash = settings.collision_factor - 0.1 + 0.3 * dy.abs() / height;
    true
}
