//! Simulation module
//!
//! All gameplay logic lives here. Given the same settings, RNG seed and
//! frame timestamps, a session plays out identically:
//! - Single owner: one `GameState` per game
//! - Randomness only through the injected RNG
//! - No rendering, input or audio dependencies

pub mod ai;
pub mod clock;
pub mod collision;
pub mod state;
pub mod tick;

#[cfg(test)]
pub(crate) mod testing;

pub use ai::predict_impact_y;
pub use clock::SimClock;
pub use collision::{Wall, collide_paddle, collide_wall, paddle_plane};
pub use state::{
    AiState, Ball, BallView, GameEvent, GameState, Paddle, RoundState, Score, Side, Snapshot,
    Surface,
};
pub use tick::tick;
