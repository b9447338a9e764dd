//! Pong Sim headless driver
//!
//! Plays the human side with a simple tracking script, feeds the engine
//! 60 Hz frame timestamps and prints the final snapshot as JSON.
//!
//! Usage: `pong-sim [--preset easy|normal|hard] [--seed N] [--settings FILE] [--frames N]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use pong_sim::sim::{GameEvent, GameState, RoundState};
    use pong_sim::{AiPreset, Settings};

    /// Frame interval of a 60 Hz display (milliseconds)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// How fast the scripted human can move the pointer (pixels per millisecond)
    const HUMAN_POINTER_SPEED: f32 = 0.25;

    /// Command line options
    pub struct Options {
        pub settings: Settings,
        pub seed: u64,
        pub max_frames: u32,
    }

    impl Default for Options {
        fn default() -> Self {
            Self {
                settings: Settings::default(),
                seed: 0x5EED,
                max_frames: 60 * 60 * 5,
            }
        }
    }

    impl Options {
        pub fn from_args(args: impl IntoIterator<Item = String>) -> Self {
            let mut options = Self::default();
            let mut preset = None;
            let mut args = args.into_iter();

            while let Some(arg) = args.next() {
                let value = args.next();
                match (arg.as_str(), value) {
                    ("--preset", Some(v)) => match AiPreset::from_str(&v) {
                        Some(p) => preset = Some(p),
                        None => log::warn!("Unknown preset '{}', keeping default", v),
                    },
                    ("--seed", Some(v)) => match v.parse() {
                        Ok(seed) => options.seed = seed,
                        Err(_) => log::warn!("Invalid seed '{}'", v),
                    },
                    ("--frames", Some(v)) => match v.parse() {
                        Ok(frames) => options.max_frames = frames,
                        Err(_) => log::warn!("Invalid frame count '{}'", v),
                    },
                    ("--settings", Some(path)) => options.settings = load_settings(&path),
                    (other, _) => log::warn!("Ignoring argument '{}'", other),
                }
            }

            if let Some(preset) = preset {
                log::info!("AI preset: {}", preset.as_str());
                options.settings.apply_preset(preset);
            }
            options
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    fn load_settings(path: &str) -> Settings {
        match std::fs::read_to_string(path) {
            Ok(json) => match Settings::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path, e),
            },
            Err(e) => log::warn!("Cannot read {}: {}", path, e),
        }

        log::info!("Using default settings");
        Settings::default()
    }

    /// Drives one session frame by frame
    pub struct Game {
        state: GameState,
        now: f64,
        frames: u32,
        bounces: u32,
        pointer_y: f32,
    }

    impl Game {
        pub fn new(options: &Options) -> Self {
            let pointer_y = options.settings.court_height / 2.0;
            Self {
                state: GameState::new(options.settings.clone(), options.seed),
                now: 0.0,
                frames: 0,
                bounces: 0,
                pointer_y,
            }
        }

        /// Move the scripted pointer toward the ball, at a limited speed
        fn steer_human(&mut self, dtime: f32) {
            let max_step = HUMAN_POINTER_SPEED * dtime;
            let mut dy = self.state.ball.pos.y - self.pointer_y;
            if dy.abs() > max_step {
                dy = dy.signum() * max_step;
            }
            self.pointer_y += dy;
            self.state.point_human_paddle(self.pointer_y);
        }

        /// Run one frame; returns false once someone has won
        fn update(&mut self) -> bool {
            self.steer_human(FRAME_MS as f32);
            self.now += FRAME_MS;
            self.frames += 1;

            let events = self.state.advance(self.now).to_vec();
            for event in events {
                match event {
                    GameEvent::Collision { special, .. } => {
                        self.bounces += 1;
                        if special {
                            log::debug!("Special bounce on frame {}", self.frames);
                        }
                    }
                    GameEvent::Scored { side } => log::info!(
                        "{:?} scores: {}-{}",
                        side,
                        self.state.score.left,
                        self.state.score.right
                    ),
                    GameEvent::Won { side } => log::info!("{:?} player won", side),
                }
            }

            self.state.phase == RoundState::Playing
        }

        pub fn run(&mut self, max_frames: u32) {
            while self.frames < max_frames && self.update() {}
            log::info!(
                "Stopped after {} frames ({:.1}s simulated), {} bounces",
                self.frames,
                self.now / 1000.0,
                self.bounces
            );
        }

        pub fn report(&self) -> Result<String, serde_json::Error> {
            serde_json::to_string_pretty(&self.state.snapshot())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pong Sim (headless) starting...");

    let options = headless::Options::from_args(std::env::args().skip(1));
    let mut game = headless::Game::new(&options);
    game.run(options.max_frames);

    match game.report() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The engine is driven by the host page on the web
}
