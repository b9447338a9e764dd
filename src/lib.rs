//! Pong Sim - a frame-driven two-player Pong engine
//!
//! Core modules:
//! - `sim`: Simulation (clock, physics, collisions, scoring, AI paddle)
//! - `settings`: Per-session configuration and AI presets
//!
//! Rendering, input and audio live outside this crate. They read
//! [`sim::Snapshot`]s, push paddle/restart commands, and react to
//! [`sim::GameEvent`]s.

pub mod settings;
pub mod sim;

pub use settings::{AiPreset, Settings};
pub use sim::{GameEvent, GameState, RoundState, Side, Snapshot, tick};

/// Game configuration constants
pub mod consts {
    /// Court dimensions (canvas pixels)
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Serve speed in pixels per millisecond
    pub const BALL_SPEED: f32 = 0.2;
    /// Squash applied on impact (walls divide by it, paddles scale from it)
    pub const COLLISION_FACTOR: f32 = 1.6;
    /// Fraction of the remaining squash relaxed each frame
    pub const COLLISION_DECAY: f32 = 0.2;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_START_Y: f32 = 350.0;
    /// Vertical speed imparted per pixel of offset from the paddle center
    pub const PADDLE_DEFLECTION: f32 = 0.01;

    /// Points needed to win a round
    pub const WINNING_SCORE: u32 = 3;
    /// Serve multiplier applied after every point (compounds over a session)
    pub const SCORE_SPEEDUP: f32 = 1.1;

    /// AI defaults
    pub const AI_DIFFICULTY: f32 = 0.4;
    pub const AI_PADDLE_SPEED: f32 = 0.2;

    /// Chance that a bounce plays the special sound and overshoots the squash
    pub const SPECIAL_BOUNCE_CHANCE: f32 = 0.042;
    /// Extra squash on a special bounce, relative to the distance from rest
    pub const SPECIAL_BOUNCE_BOOST: f32 = 0.2;
}

/// `a mod b` normalized into `[0, b)` for positive `b`, including negative `a`
#[inline]
pub fn rmod(a: f32, b: f32) -> f32 {
    let c = a % b;
    let c = if c < 0.0 { c + b } else { c };
    // A tiny negative remainder plus b can round up to b
    if c >= b { 0.0 } else { c }
}
