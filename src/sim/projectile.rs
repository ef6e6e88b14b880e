//! Ballistic balls lobbed from the bottom corners

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::launch::{LaunchOrigin, plan_launch};
use crate::config::GameConfig;

/// Ball tint, looked up in the palette at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallTint {
    #[default]
    Normal,
    /// Touching the target
    Hit,
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Roster slot (0-based)
    pub slot: usize,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Constant acceleration, only the vertical component is integrated
    pub accel: Vec2,
    pub radius: f32,
    pub tint: BallTint,
    /// Frames since the last relaunch
    pub age: u32,
    /// Where the ball waits between flights
    pub home: Vec2,
    pub origin: LaunchOrigin,
    /// Set while this ball is counted as touching the target
    pub colliding: bool,
}

impl Projectile {
    /// Build the ball for a roster slot: sides alternate, ages are staggered
    pub fn new(slot: usize, config: &GameConfig) -> Self {
        let origin = LaunchOrigin::for_slot(slot);
        let home = origin.anchor(config.canvas_size);
        Self {
            slot,
            pos: home,
            vel: Vec2::ZERO,
            accel: Vec2::new(0.0, config.gravity),
            radius: config.ball_radius,
            tint: BallTint::Normal,
            age: (slot as u32).saturating_mul(config.ball_age_stagger) % config.ball_lifetime.max(1),
            home,
            origin,
            colliding: false,
        }
    }

    /// Send the ball home and aim it at `aim`
    pub fn relaunch(&mut self, aim: Vec2, config: &GameConfig) {
        self.pos = self.home;
        self.vel = plan_launch(
            self.origin,
            aim,
            config.canvas_size,
            self.accel.y,
            config.flight_time,
        );
        self.age = 0;
    }

    /// Advance one frame. Returns true when the ball was relaunched instead of moved.
    pub fn step(&mut self, dt: f32, aim: Vec2, config: &GameConfig) -> bool {
        self.age += 1;
        if self.age >= config.ball_lifetime {
            self.relaunch(aim, config);
            return true;
        }

        // x uses the velocity from before this frame (vx is never accelerated)
        self.vel.y += dt * self.accel.y;
        self.pos.x += dt * self.vel.x;
        self.pos.y += 0.5 * self.accel.y * dt * dt + dt * self.vel.y;
        false
    }
}
