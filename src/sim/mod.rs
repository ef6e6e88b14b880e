//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Pointer position passed in explicitly, never read from a global
//! - Stable iteration order (by roster slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod launch;
pub mod projectile;
pub mod state;
pub mod target;
pub mod tick;

pub use collision::{contact_distance, detect_collisions};
pub use launch::{LaunchOrigin, plan_launch, predict};
pub use projectile::{BallTint, Projectile};
pub use state::{GameEvent, GameState};
pub use target::Target;
pub use tick::{TickInput, tick};
