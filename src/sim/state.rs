//! Game state and core simulation types
//!
//! A [`GameState`] owns everything that changes during a session. It is
//! created once, mutated in place every frame, and dropped as a whole.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::SimClock;
use crate::settings::Settings;

/// Whether the round is in progress or showing the win screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Ball in play
    Playing,
    /// A player reached the winning score; frozen until restart
    WinDisplay,
}

/// Court side. The human plays left, the AI plays right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Something the ball can bounce off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Top,
    Bottom,
    LeftPaddle,
    RightPaddle,
}

/// Discrete things that happened during a frame (audio, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced; `special` selects the rare sound and extra squash
    Collision { surface: Surface, special: bool },
    /// `side` won a point
    Scored { side: Side },
    /// `side` reached the winning score
    Won { side: Side },
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per millisecond
    pub vel: Vec2,
    pub radius: f32,
    /// Squash/stretch factor, relaxes toward 1 every frame
    pub squash: f32,
    /// Render the squash effect
    pub animate: bool,
}

impl Ball {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: Vec2::new(settings.court_width / 2.0, settings.court_height / 2.0),
            vel: Vec2::splat(settings.ball_speed),
            radius: settings.ball_radius,
            squash: 1.0,
            animate: settings.animate_squash,
        }
    }
}

/// A paddle; width and height are shared session constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top edge. Never clamped to the court.
    pub y: f32,
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn add_point(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Computer opponent state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiState {
    pub difficulty: f32,
    /// Pixels per millisecond
    pub paddle_speed: f32,
    /// Last predicted impact y
    pub target: f32,
    pub debug: bool,
}

impl AiState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            difficulty: settings.ai_difficulty,
            paddle_speed: settings.ai_paddle_speed,
            target: settings.court_height / 2.0,
            debug: settings.ai_debug,
        }
    }
}

/// Ball fields a renderer needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub squash: f32,
    pub animate: bool,
}

/// Read-only view of a frame for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub court_width: f32,
    pub court_height: f32,
    pub ball: BallView,
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub score: Score,
    pub round: RoundState,
    pub winner: Option<Side>,
    pub ai_target: f32,
    pub ai_debug: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R: Rng = Pcg32> {
    pub settings: Settings,
    pub ball: Ball,
    /// Human paddle
    pub left_paddle: Paddle,
    /// AI paddle
    pub right_paddle: Paddle,
    pub score: Score,
    pub phase: RoundState,
    pub ai: AiState,
    pub clock: SimClock,
    /// Serve angles and special bounces
    pub rng: R,
    /// Events produced by the current frame
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session with a seeded RNG
    pub fn new(settings: Settings, seed: u64) -> Self {
        log::info!("Session seed: {}", seed);
        Self::with_rng(settings, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a session drawing randomness from `rng`, and serve
    pub fn with_rng(settings: Settings, rng: R) -> Self {
        log::info!(
            "New session: {}x{} court, first to {}, AI difficulty {}",
            settings.court_width,
            settings.court_height,
            settings.winning_score,
            settings.ai_difficulty
        );

        let start = Paddle {
            y: settings.paddle_start_y,
        };
        let mut state = Self {
            ball: Ball::new(&settings),
            left_paddle: start,
            right_paddle: start,
            score: Score::default(),
            phase: RoundState::Playing,
            ai: AiState::new(&settings),
            clock: SimClock::new(),
            rng,
            events: Vec::new(),
            settings,
        };

        state.reset_ball(0.0);
        state
    }

    /// Re-center the ball and serve it back the other way.
    ///
    /// The horizontal speed is scaled by `multiplier`, so repeated points
    /// keep speeding the ball up. A multiplier of 0 restores the configured
    /// serve speed first and then serves with a multiplier of 1.
    /// Also enters [`RoundState::WinDisplay`] when either side has reached
    /// the winning score.
    pub fn reset_ball(&mut self, multiplier: f32) {
        let multiplier = if multiplier == 0.0 {
            self.ball.vel.x = self.settings.ball_speed;
            1.0
        } else {
            multiplier
        };

        let winning = self.settings.winning_score;
        if self.score.left >= winning || self.score.right >= winning {
            if self.phase == RoundState::Playing {
                self.phase = RoundState::WinDisplay;
                if let Some(side) = self.winner() {
                    log::info!(
                        "{:?} player wins {}-{}",
                        side,
                        self.score.left,
                        self.score.right
                    );
                    self.events.push(GameEvent::Won { side });
                }
            }
        }

        self.ball.pos = Vec2::new(
            self.settings.court_width / 2.0,
            self.settings.court_height / 2.0,
        );
        self.ball.vel.x *= -multiplier;
        let spread = 2.0 * self.rng.random::<f32>() - 1.0;
        self.ball.vel.y = multiplier * spread * self.ball.vel.x;

        log::debug!(
            "Serve: vel=({:.4}, {:.4}) multiplier={}",
            self.ball.vel.x,
            self.ball.vel.y,
            multiplier
        );
    }

    /// Zero both scores and serve a fresh round
    pub fn restart(&mut self) {
        log::info!("Restarting round");
        self.score = Score::default();
        self.phase = RoundState::Playing;
        self.reset_ball(0.0);
    }

    /// Restart if the win screen is showing (click to continue).
    ///
    /// Returns whether a restart happened.
    pub fn request_restart(&mut self) -> bool {
        if self.phase != RoundState::WinDisplay {
            return false;
        }
        self.restart();
        true
    }

    /// Move the human paddle's top edge. No clamping.
    pub fn set_human_paddle_y(&mut self, y: f32) {
        self.left_paddle.y = y;
    }

    /// Center the human paddle on a pointer position
    pub fn point_human_paddle(&mut self, pointer_y: f32) {
        self.set_human_paddle_y(pointer_y - self.settings.paddle_height / 2.0);
    }

    /// Side shown as the winner while the win screen is up
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            RoundState::Playing => None,
            RoundState::WinDisplay if self.score.left >= self.settings.winning_score => {
                Some(Side::Left)
            }
            RoundState::WinDisplay => Some(Side::Right),
        }
    }

    /// Copy out what a renderer needs for this frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            court_width: self.settings.court_width,
            court_height: self.settings.court_height,
            ball: BallView {
                x: self.ball.pos.x,
                y: self.ball.pos.y,
                radius: self.ball.radius,
                squash: self.ball.squash,
                animate: self.ball.animate,
            },
            left_paddle_y: self.left_paddle.y,
            right_paddle_y: self.right_paddle.y,
            paddle_width: self.settings.paddle_width,
            paddle_height: self.settings.paddle_height,
            score: self.score,
            round: self.phase,
            winner: self.winner(),
            ai_target: self.ai.target,
            ai_debug: self.ai.debug,
        }
    }
}
