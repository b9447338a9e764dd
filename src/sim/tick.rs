//! Per-frame simulation step
//!
//! Frame order matters: squash decay, integration, AI move, walls, paddles,
//! then scoring. The AI paddle moves before the collision tests, so a hit
//! in this frame uses its updated position.

use rand::Rng;

use super::collision::{Wall, collide_paddle, collide_wall};
use super::state::{GameEvent, GameState, RoundState, Side, Surface};
use crate::consts::*;

impl<R: Rng> GameState<R> {
    /// Advance to the animation frame at `timestamp` (milliseconds).
    ///
    /// Returns the events this frame produced.
    pub fn advance(&mut self, timestamp: f64) -> &[GameEvent] {
        let dtime = self.clock.tick(timestamp);
        tick(self, dtime);
        &self.events
    }
}

/// Advance the game state by `dtime` milliseconds
pub fn tick<R: Rng>(state: &mut GameState<R>, dtime: f32) {
    state.events.clear();

    // Relax the squash toward rest, even on the win screen
    let decay = state.settings.collision_decay;
    state.ball.squash += (1.0 - state.ball.squash) * decay;

    if state.phase == RoundState::WinDisplay {
        return;
    }

    let ball = &mut state.ball;
    ball.pos += ball.vel * dtime;

    state
        .ai
        .update_position(&mut state.right_paddle, &state.ball, &state.settings, dtime);

    for wall in [Wall::Bottom, Wall::Top] {
        if collide_wall(&mut state.ball, wall, &state.settings) {
            bounce(state, wall.surface());
        }
    }

    let paddles = [
        (Surface::LeftPaddle, state.left_paddle.y),
        (Surface::RightPaddle, state.right_paddle.y),
    ];
    for (surface, paddle_y) in paddles {
        if collide_paddle(&mut state.ball, paddle_y, surface, &state.settings) {
            bounce(state, surface);
        }
    }

    // Out past the AI paddle: point to the human, and vice versa
    let radius = state.ball.radius;
    if state.ball.pos.x > state.settings.court_width + radius {
        score_point(state, Side::Left);
    }
    if state.ball.pos.x < -radius {
        score_point(state, Side::Right);
    }
}

/// Roll for a special bounce and report the collision
fn bounce<R: Rng>(state: &mut GameState<R>, surface: Surface) {
    let special = state.rng.random::<f32>() < SPECIAL_BOUNCE_CHANCE;
    if special {
        state.ball.squash += SPECIAL_BOUNCE_BOOST * (state.ball.squash - 1.0);
    }

    log::trace!(
        "Bounce off {:?} at ({:.1}, {:.1}){}",
        surface,
        state.ball.pos.x,
        state.ball.pos.y,
        if special { " (special)" } else { "" }
    );
    state.events.push(GameEvent::Collision { surface, special });
}

fn score_point<R: Rng>(state: &mut GameState<R>, side: Side) {
    state.score.add_point(side);
    log::debug!(
        "Point to {:?}: {}-{}",
        side,
        state.score.left,
        state.score.right
    );
    state.events.push(GameEvent::Scored { side });
    state.reset_ball(SCORE_SPEEDUP);
}
