//! Per-frame draw list built from the simulation state
//!
//! Draw order follows the frame loop: target first, then every ball in slot
//! order, so a ball passing over the target is drawn on top of it.

use super::shapes::{push_circle, segments_for_radius};
use super::vertex::Vertex;
use crate::config::Palette;
use crate::sim::{BallTint, GameState};

/// Palette color for a ball tint
pub fn tint_color(tint: BallTint, palette: &Palette) -> [f32; 4] {
    match tint {
        BallTint::Normal => palette.ball,
        BallTint::Hit => palette.ball_hit,
    }
}

/// Triangle list for one frame (canvas coordinates, palette colors as configured)
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let palette = &state.config.palette;
    let target = &state.target;

    let mut vertices = Vec::new();
    push_circle(
        &mut vertices,
        target.pos,
        target.radius,
        palette.target,
        segments_for_radius(target.radius),
    );

    for ball in &state.balls {
        push_circle(
            &mut vertices,
            ball.pos,
            ball.radius,
            tint_color(ball.tint, palette),
            segments_for_radius(ball.radius),
        );
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BALL_COUNT;

    #[test]
    fn test_scene_draws_target_then_balls() {
        let mut state = GameState::default();
        state.balls[2].tint = BallTint::Hit;

        let vertices = build_scene(&state);
        let per_circle = (segments_for_radius(25.0) * 3) as usize;
        assert_eq!(vertices.len(), per_circle * (BALL_COUNT + 1));

        let palette = &state.config.palette;
        assert_eq!(vertices[0].color, palette.target);
        assert_eq!(vertices[0].position, state.target.pos.to_array());
        assert_eq!(vertices[per_circle].color, palette.ball);
        assert_eq!(vertices[per_circle * 3].color, palette.ball_hit);
        assert_eq!(vertices[per_circle * 3].position, state.balls[2].pos.to_array());
    }
}
