//! Game tunables
//!
//! Compiled defaults live in [`crate::consts`]. A page can override any subset
//! by embedding JSON in `<script id="game-config" type="application/json">`;
//! the native binary reads the file named by `BALL_DODGE_CONFIG`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How the launch planner guesses where the target will be two seconds out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PredictionMode {
    /// Aim at the pointer, which is where the spring settles
    #[default]
    Pointer,
    /// Extrapolate past the pointer by twice the current spring stretch
    Lead,
}

/// Colors for game elements (linear RGBA for the GPU, CSS strings for the HUD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: [f32; 4],
    pub target: [f32; 4],
    pub ball: [f32; 4],
    /// Ball color while it is touching the target
    pub ball_hit: [f32; 4],
    pub hud_counter: String,
    pub hud_label: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0.83, 0.82, 0.78, 1.0],
            target: [0.47, 1.0, 0.48, 1.0],
            ball: [1.0, 0.47, 0.99, 1.0],
            ball_hit: [0.0, 0.0, 0.0, 1.0],
            hud_counter: "#FF0000".to_string(),
            hud_label: "#000000".to_string(),
        }
    }
}

/// Everything the simulation and frontend read at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Square canvas edge (logical pixels)
    pub canvas_size: f32,

    // === Balls ===
    pub ball_radius: f32,
    /// Downward acceleration in pixels/s²
    pub gravity: f32,
    /// Frames between relaunches
    pub ball_lifetime: u32,
    /// Initial age step between consecutive balls
    pub ball_age_stagger: u32,
    /// Seconds the planner gives a ball to reach its aim point
    pub flight_time: f32,
    pub prediction: PredictionMode,

    // === Spring target ===
    pub target_start: Vec2,
    pub target_radius: f32,
    pub spring_damping: f32,
    pub spring_mass: f32,
    pub spring_k: f32,

    // === HUD ===
    pub hud_digits: usize,
    pub hud_labels: Vec<String>,

    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,

            ball_radius: BALL_RADIUS,
            gravity: GRAVITY,
            ball_lifetime: BALL_LIFETIME,
            ball_age_stagger: BALL_AGE_STAGGER,
            flight_time: FLIGHT_TIME,
            prediction: PredictionMode::default(),

            target_start: Vec2::new(TARGET_START.0, TARGET_START.1),
            target_radius: TARGET_RADIUS,
            spring_damping: SPRING_DAMPING,
            spring_mass: SPRING_MASS,
            spring_k: SPRING_K,

            hud_digits: HUD_DIGITS,
            hud_labels: vec!["Ball Dodge".to_string(), "press x to snap".to_string()],

            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Element id of the optional page config block
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "game-config";

    /// Environment variable naming a JSON config file for the native binary
    #[allow(dead_code)]
    const ENV_VAR: &'static str = "BALL_DODGE_CONFIG";

    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: GameConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Replace values the integrators cannot run with by their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            log::warn!("canvas_size {} invalid, using {}", self.canvas_size, defaults.canvas_size);
            self.canvas_size = defaults.canvas_size;
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            log::warn!("ball_radius {} invalid, using {}", self.ball_radius, defaults.ball_radius);
            self.ball_radius = defaults.ball_radius;
        }
        if !self.gravity.is_finite() {
            log::warn!("gravity {} invalid, using {}", self.gravity, defaults.gravity);
            self.gravity = defaults.gravity;
        }
        if self.ball_lifetime == 0 {
            log::warn!("ball_lifetime must be positive, using {}", defaults.ball_lifetime);
            self.ball_lifetime = defaults.ball_lifetime;
        }
        // Every initial age must fall inside one lifetime
        if self.ball_age_stagger >= self.ball_lifetime {
            let stagger = if defaults.ball_age_stagger < self.ball_lifetime {
                defaults.ball_age_stagger
            } else {
                0
            };
            log::warn!(
                "ball_age_stagger {} not below ball_lifetime {}, using {}",
                self.ball_age_stagger,
                self.ball_lifetime,
                stagger
            );
            self.ball_age_stagger = stagger;
        }
        if !(self.flight_time.is_finite() && self.flight_time > 0.0) {
            log::warn!("flight_time {} invalid, using {}", self.flight_time, defaults.flight_time);
            self.flight_time = defaults.flight_time;
        }
        if !self.target_start.is_finite() {
            log::warn!("target_start {} invalid, using {}", self.target_start, defaults.target_start);
            self.target_start = defaults.target_start;
        }
        if !(self.target_radius.is_finite() && self.target_radius > 0.0) {
            log::warn!("target_radius {} invalid, using {}", self.target_radius, defaults.target_radius);
            self.target_radius = defaults.target_radius;
        }
        // The spring only settles for damping strictly inside (0, 1)
        if !(self.spring_damping > 0.0 && self.spring_damping < 1.0) {
            log::warn!("spring_damping {} invalid, using {}", self.spring_damping, defaults.spring_damping);
            self.spring_damping = defaults.spring_damping;
        }
        if !(self.spring_mass.is_finite() && self.spring_mass > 0.0) {
            log::warn!("spring_mass {} invalid, using {}", self.spring_mass, defaults.spring_mass);
            self.spring_mass = defaults.spring_mass;
        }
        if !(self.spring_k.is_finite() && self.spring_k > 0.0) {
            log::warn!("spring_k {} invalid, using {}", self.spring_k, defaults.spring_k);
            self.spring_k = defaults.spring_k;
        }
        if !(1..=MAX_HUD_DIGITS).contains(&self.hud_digits) {
            log::warn!("hud_digits {} out of range, using {}", self.hud_digits, defaults.hud_digits);
            self.hud_digits = defaults.hud_digits;
        }

        self
    }

    /// Load overrides from the page's config block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from #{}", Self::ELEMENT_ID);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring malformed #{}: {}", Self::ELEMENT_ID, e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default config");
                Self::default()
            }
        }
    }

    /// Load overrides from the file named by `BALL_DODGE_CONFIG` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default config");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring malformed config {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read config {}: {}", path, e);
                Self::default()
            }
        }
    }
}
