//! Target/ball contact scoring
//!
//! Each contact episode scores once. Latches on both sides suppress recounts
//! while a pair stays inside the threshold, and clear once it separates.
//!
//! The two tests are deliberately asymmetric: a hit needs `d < 2r`, a release
//! needs `d > 2r`. At exactly `2r` neither fires and the latches hold their
//! previous value.

use super::projectile::{BallTint, Projectile};
use super::state::GameEvent;
use super::target::Target;

/// Contact threshold for a ball: twice its radius
#[inline]
pub fn contact_distance(ball: &Projectile) -> f32 {
    ball.radius * 2.0
}

/// Test every ball against the target in roster order
///
/// Each score bumps `hits` and appends a [`GameEvent::Hit`] to `events`.
/// Returns how many balls scored this frame.
pub fn detect_collisions(
    target: &mut Target,
    balls: &mut [Projectile],
    hits: &mut u32,
    events: &mut Vec<GameEvent>,
) -> usize {
    let mut scored = 0;

    for ball in balls.iter_mut() {
        let d = target.pos.distance(ball.pos);
        let threshold = contact_distance(ball);

        if d < threshold && !target.colliding && !ball.colliding {
            target.colliding = true;
            ball.colliding = true;
            ball.tint = BallTint::Hit;
            *hits += 1;
            events.push(GameEvent::Hit {
                slot: ball.slot,
                hits: *hits,
            });
            scored += 1;
        }

        if d > threshold {
            target.colliding = false;
            ball.colliding = false;
            ball.tint = BallTint::Normal;
        }
    }

    scored
}
