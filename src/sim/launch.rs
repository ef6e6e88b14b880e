//! Launch planning
//!
//! Solves `d = v * t + 0.5 * g * t^2` for the initial velocity `v` so a ball
//! reaches the aim point after the configured flight time. Horizontal motion
//! is unaccelerated, so only the vertical axis carries the gravity term.
//!
//! The displacement is measured from the bottom canvas corner of the ball's
//! side, not from the ball itself. Homes sit exactly on those corners, which
//! is the only reason the two agree.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::target::Target;
use crate::config::PredictionMode;

/// Which bottom corner a ball is lobbed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchOrigin {
    /// Bottom-left corner `(0, H)`
    Left,
    /// Bottom-right corner `(W, H)`
    Right,
}

impl LaunchOrigin {
    /// Roster alternates sides, starting on the left
    pub fn for_slot(slot: usize) -> Self {
        if slot % 2 == 0 {
            LaunchOrigin::Left
        } else {
            LaunchOrigin::Right
        }
    }

    /// Corner the launch formula is anchored at
    pub fn anchor(&self, canvas_size: f32) -> Vec2 {
        match self {
            LaunchOrigin::Left => Vec2::new(0.0, canvas_size),
            LaunchOrigin::Right => Vec2::new(canvas_size, canvas_size),
        }
    }
}

/// Initial velocity that lands on `aim` after `flight_time` seconds
///
/// With the default two-second flight this is
/// `((T.x - W) / 2, (T.y - H - 2g) / 2)` from the right corner and
/// `(T.x / 2, (T.y - H - 2g) / 2)` from the left.
pub fn plan_launch(
    origin: LaunchOrigin,
    aim: Vec2,
    canvas_size: f32,
    gravity: f32,
    flight_time: f32,
) -> Vec2 {
    let anchor = origin.anchor(canvas_size);
    let displacement = aim - anchor;
    let drop = 0.5 * gravity * flight_time * flight_time;

    Vec2::new(
        displacement.x / flight_time,
        (displacement.y - drop) / flight_time,
    )
}

/// Where the target is expected to be once a ball launched now arrives
pub fn predict(target: &Target, mode: PredictionMode, flight_time: f32) -> Vec2 {
    match mode {
        PredictionMode::Pointer => target.rest,
        PredictionMode::Lead => target.rest + flight_time * target.stretch(),
    }
}
