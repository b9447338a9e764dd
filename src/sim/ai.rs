//! Computer paddle
//!
//! Once the ball heads toward the AI and enters its reaction zone, the AI
//! predicts where the ball will meet its side by unfolding the bounces off
//! the top and bottom walls. Before that it simply follows the ball's y.
//! The paddle chases its target at a capped speed.

use super::state::{AiState, Ball, Paddle};
use crate::rmod;
use crate::settings::Settings;

/// Predict the y at which the ball reaches the right edge of the court.
///
/// Pure: only depends on the ball and the court. The ball is projected in a
/// straight line to `x = width`; the resulting y is folded back into the
/// court, mirroring on every odd number of wall reflections.
pub fn predict_impact_y(ball: &Ball, width: f32, height: f32, difficulty: f32) -> f32 {
    if ball.vel.x <= 0.0 || ball.pos.x <= (1.0 - difficulty) * width {
        return ball.pos.y;
    }

    let time = (width - ball.pos.x) / ball.vel.x;
    let unfolded = ball.vel.y * time + ball.pos.y;

    let mut hits = unfolded / height;
    if hits < 0.0 {
        hits = 1.0 - hits;
    }

    let folded = rmod(unfolded + 10.0 * height, height);
    if hits % 2.0 < 1.0 {
        folded
    } else {
        height - folded
    }
}

impl AiState {
    /// Where the AI thinks the ball will arrive
    pub fn predict(&self, ball: &Ball, settings: &Settings) -> f32 {
        predict_impact_y(
            ball,
            settings.court_width,
            settings.court_height,
            self.difficulty,
        )
    }

    /// Move `paddle` toward the predicted impact, at most `paddle_speed`
    /// pixels per millisecond. Does nothing on an empty frame.
    pub fn update_position(
        &mut self,
        paddle: &mut Paddle,
        ball: &Ball,
        settings: &Settings,
        dtime: f32,
    ) {
        if dtime <= 0.0 {
            return;
        }

        self.target = self.predict(ball, settings);

        let max_step = self.paddle_speed * dtime;
        let mut dy = self.target - paddle.y - settings.paddle_height / 2.0;
        if dy.abs() > max_step {
            dy = dy.signum() * max_step;
        }

        paddle.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: 15.0,
            squash: 1.0,
            animate: false,
        }
    }

    fn predict(ball: &Ball) -> f32 {
        predict_impact_y(ball, 800.0, 600.0, 0.4)
    }

    #[test]
    fn test_prediction_without_bounce() {
        let down = ball_at(790.0, 300.0, 0.2, 0.1);
        assert!((predict(&down) - 305.0).abs() < 1e-2);

        let up = ball_at(790.0, 300.0, 0.2, -0.1);
        assert!((predict(&up) - 295.0).abs() < 1e-2);
    }

    #[test]
    fn test_prediction_off_bottom_wall() {
        // Unfolded y = 1000 -> one bounce off the bottom -> 200
        let ball = ball_at(700.0, 500.0, 0.1, 0.5);
        assert!((predict(&ball) - 200.0).abs() < 1e-2);
    }

    #[test]
    fn test_prediction_off_top_wall() {
        // Unfolded y = -400 -> one bounce off the top -> 400
        let ball = ball_at(700.0, 100.0, 0.1, -0.5);
        assert!((predict(&ball) - 400.0).abs() < 1e-2);
    }

    #[test]
    fn test_prediction_two_bounces() {
        // Unfolded y = -900 -> top then bottom -> 300
        let ball = ball_at(700.0, 100.0, 0.1, -1.0);
        assert!((predict(&ball) - 300.0).abs() < 1e-2);
    }

    #[test]
    fn test_naive_tracking_outside_reaction_zone() {
        // Zone starts at x = 480
        let ball = ball_at(400.0, 123.0, 0.2, 0.5);
        assert_eq!(predict(&ball), 123.0);

        let receding = ball_at(700.0, 222.0, -0.2, 0.5);
        assert_eq!(predict(&receding), 222.0);
    }

    #[test]
    fn test_zero_horizontal_speed_tracks_ball() {
        let ball = ball_at(790.0, 50.0, 0.0, 0.3);
        assert_eq!(predict(&ball), 50.0);
    }

    #[test]
    fn test_higher_difficulty_reacts_earlier() {
        let ball = ball_at(300.0, 100.0, 0.1, -0.5);
        assert_eq!(predict_impact_y(&ball, 800.0, 600.0, 0.4), 100.0);
        assert_ne!(predict_impact_y(&ball, 800.0, 600.0, 0.9), 100.0);
    }

    #[test]
    fn test_update_moves_at_capped_speed() {
        let settings = Settings::default();
        let mut ai = AiState::new(&settings);
        let mut paddle = Paddle { y: 350.0 };
        // Target 100 is far above the paddle center (400)
        let ball = ball_at(400.0, 100.0, -0.2, 0.0);

        ai.update_position(&mut paddle, &ball, &settings, 16.0);
        assert_eq!(ai.target, 100.0);
        assert!((paddle.y - (350.0 - 3.2)).abs() < 1e-4);
    }

    #[test]
    fn test_update_snaps_when_close() {
        let settings = Settings::default();
        let mut ai = AiState::new(&settings);
        let mut paddle = Paddle { y: 350.0 };
        let ball = ball_at(400.0, 402.0, -0.2, 0.0);

        ai.update_position(&mut paddle, &ball, &settings, 16.0);
        assert_eq!(paddle.y, 352.0);
    }

    #[test]
    fn test_update_skips_empty_frame() {
        let settings = Settings::default();
        let mut ai = AiState::new(&settings);
        let mut paddle = Paddle { y: 350.0 };
        let ball = ball_at(400.0, 100.0, -0.2, 0.0);

        ai.update_position(&mut paddle, &ball, &settings, 0.0);
        assert_eq!(paddle.y, 350.0);
        assert_eq!(ai.target, 300.0);
    }

    #[test]
    fn test_ai_paddle_can_leave_court() {
        // Known quirk: the AI centers on the ball even past the bottom edge
        let settings = Settings::default();
        let mut ai = AiState::new(&settings);
        let mut paddle = Paddle { y: 480.0 };
        let ball = ball_at(400.0, 590.0, -0.2, 0.0);

        for _ in 0..100 {
            ai.update_position(&mut paddle, &ball, &settings, 16.0);
        }
        assert!((paddle.y - 540.0).abs() < 1e-3);
        assert!(paddle.y + settings.paddle_height > settings.court_height);
    }

    proptest! {
        #[test]
        fn prediction_is_pure(
            x in 0.0f32..800.0,
            y in 0.0f32..600.0,
            vx in -1.0f32..1.0,
            vy in -1.0f32..1.0,
            difficulty in 0.01f32..1.0,
        ) {
            let ball = ball_at(x, y, vx, vy);
            let first = predict_impact_y(&ball, 800.0, 600.0, difficulty);
            let second = predict_impact_y(&ball, 800.0, 600.0, difficulty);
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }

        #[test]
        fn prediction_lands_in_court(
            x in 481.0f32..800.0,
            y in 0.0f32..600.0,
            vx in 0.05f32..1.0,
            vy in -1.0f32..1.0,
        ) {
            let ball = ball_at(x, y, vx, vy);
            let target = predict_impact_y(&ball, 800.0, 600.0, 0.4);
            prop_assert!((0.0..=600.0).contains(&target), "target {}", target);
        }
    }
}
