//! Ball Dodge - keep the spring-mounted target away from lobbed balls
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spring target, ballistic balls, collisions)
//! - `renderer`: WebGPU rendering pipeline
//! - `config`: Data-driven tunables with compiled defaults
//! - `hud`: Text shown over the canvas
//! - `pacer`: 30 Hz frame gate

pub mod config;
pub mod hud;
pub mod pacer;
pub mod renderer;
pub mod sim;

pub use config::{GameConfig, Palette, PredictionMode};
pub use pacer::FramePacer;

/// Game configuration constants
pub mod consts {
    /// Target frame rate; the simulation advances one fixed step per frame
    pub const FRAME_RATE: f32 = 30.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / FRAME_RATE;

    /// Square canvas edge in logical pixels
    pub const CANVAS_SIZE: f32 = 600.0;

    /// Ball roster
    pub const BALL_COUNT: usize = 8;
    pub const BALL_RADIUS: f32 = 25.0;
    /// Downward acceleration (pixels/s², screen y grows downward)
    pub const GRAVITY: f32 = 300.0;
    /// Frames a ball flies before it is sent home and relaunched
    pub const BALL_LIFETIME: u32 = 120;
    /// Initial age offset between consecutive balls
    pub const BALL_AGE_STAGGER: u32 = 15;
    /// Flight time the launch planner aims for (seconds)
    pub const FLIGHT_TIME: f32 = 2.0;

    /// Spring target defaults
    pub const TARGET_START: (f32, f32) = (300.0, 300.0);
    pub const TARGET_RADIUS: f32 = 25.0;
    pub const SPRING_DAMPING: f32 = 0.95;
    pub const SPRING_MASS: f32 = 40.0;
    pub const SPRING_K: f32 = 0.1;

    /// HUD hit counter width (zero padded)
    pub const HUD_DIGITS: usize = 3;
    /// Widest HUD counter accepted from config (digits in `u32::MAX`)
    pub const MAX_HUD_DIGITS: usize = 10;
    /// Screenshot counter width (zero padded)
    pub const SCREENSHOT_DIGITS: usize = 4;
}
