//! Session settings
//!
//! Fixed when a [`GameState`](crate::sim::GameState) is created. Stored as
//! JSON so a driver can keep them next to its own preferences.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Named AI difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AiPreset {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl AiPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiPreset::Easy => "Easy",
            AiPreset::Normal => "Normal",
            AiPreset::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(AiPreset::Easy),
            "normal" | "medium" | "med" => Some(AiPreset::Normal),
            "hard" => Some(AiPreset::Hard),
            _ => None,
        }
    }

    /// Fraction of the court width in which the AI starts predicting
    pub fn difficulty(&self) -> f32 {
        match self {
            AiPreset::Easy => 0.2,
            AiPreset::Normal => AI_DIFFICULTY,
            AiPreset::Hard => 0.7,
        }
    }
}

/// Per-session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Court ===
    pub court_width: f32,
    pub court_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Serve speed restored on a fresh serve (pixels per millisecond)
    pub ball_speed: f32,
    pub collision_factor: f32,
    pub collision_decay: f32,
    /// Render the squash/stretch effect
    pub animate_squash: bool,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Initial top edge of both paddles
    pub paddle_start_y: f32,

    // === Rules ===
    pub winning_score: u32,

    // === AI ===
    /// In (0, 1]: larger values let the AI predict from further away
    pub ai_difficulty: f32,
    /// Maximum AI paddle speed (pixels per millisecond)
    pub ai_paddle_speed: f32,
    /// Expose the AI target marker to the renderer
    pub ai_debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            collision_factor: COLLISION_FACTOR,
            collision_decay: COLLISION_DECAY,
            animate_squash: false,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_start_y: PADDLE_START_Y,

            winning_score: WINNING_SCORE,

            ai_difficulty: AI_DIFFICULTY,
            ai_paddle_speed: AI_PADDLE_SPEED,
            ai_debug: true,
        }
    }
}

impl Settings {
    /// Create settings from an AI preset
    pub fn from_preset(preset: AiPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    pub fn apply_preset(&mut self, preset: AiPreset) {
        self.ai_difficulty = preset.difficulty();
    }

    /// Override the court size; non-positive values keep the current size
    pub fn with_court(mut self, width: f32, height: f32) -> Self {
        if width > 0.0 {
            self.court_width = width;
        }
        if height > 0.0 {
            self.court_height = height;
        }
        self
    }

    /// Override the AI difficulty; non-positive values keep the current one
    pub fn with_difficulty(mut self, difficulty: f32) -> Self {
        if difficulty > 0.0 {
            self.ai_difficulty = difficulty;
        }
        self
    }

    /// Left edge of the zone in which the AI predicts the impact point
    pub fn reaction_zone_start(&self) -> f32 {
        (1.0 - self.ai_difficulty) * self.court_width
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_court() {
        let settings = Settings::default();
        assert_eq!(settings.court_width, 800.0);
        assert_eq!(settings.court_height, 600.0);
        assert_eq!(settings.winning_score, 3);
        assert!((settings.reaction_zone_start() - 480.0).abs() < 1e-3);
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!(AiPreset::from_str("HARD"), Some(AiPreset::Hard));
        assert_eq!(AiPreset::from_str("med"), Some(AiPreset::Normal));
        assert_eq!(AiPreset::from_str("impossible"), None);
        assert_eq!(AiPreset::Easy.as_str(), "Easy");

        let settings = Settings::from_preset(AiPreset::Hard);
        assert_eq!(settings.ai_difficulty, 0.7);
    }

    #[test]
    fn test_overrides_ignore_non_positive_values() {
        let settings = Settings::default()
            .with_court(1024.0, 0.0)
            .with_difficulty(0.0);
        assert_eq!(settings.court_width, 1024.0);
        assert_eq!(settings.court_height, 600.0);
        assert_eq!(settings.ai_difficulty, AI_DIFFICULTY);

        let settings = Settings::default().with_difficulty(0.9);
        assert_eq!(settings.ai_difficulty, 0.9);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "winning_score": 5, "ai_debug": false }"#)
            .expect("valid json");
        assert_eq!(settings.winning_score, 5);
        assert!(!settings.ai_debug);
        assert_eq!(settings.ball_radius, BALL_RADIUS);
    }

    #[test]
    fn test_json_round_trip_and_invalid_input() {
        let settings = Settings::from_preset(AiPreset::Easy).with_court(640.0, 480.0);
        let json = settings.to_json().expect("serializable");
        assert_eq!(Settings::from_json(&json).expect("valid json"), settings);

        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "winning_score": -1 }"#).is_err());
    }
}
