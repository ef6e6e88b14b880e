//! Frame rate cap
//!
//! Animation frames arrive at whatever rate the host delivers (usually 60 Hz).
//! The game advances one fixed step per 1/30 s of wall time, but never more
//! than one step per animation frame: a slow host slows the game down instead
//! of making it take bigger or repeated steps.

use crate::consts::FRAME_RATE;

#[derive(Debug, Clone)]
pub struct FramePacer {
    /// Milliseconds per simulation step
    interval_ms: f64,
    /// Wall time banked toward the next step
    accumulator_ms: f64,
    last_time_ms: Option<f64>,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(FRAME_RATE)
    }
}

impl FramePacer {
    pub fn new(frame_rate: f32) -> Self {
        Self {
            interval_ms: 1000.0 / frame_rate as f64,
            accumulator_ms: 0.0,
            last_time_ms: None,
        }
    }

    /// Feed an animation-frame timestamp; returns true if a step should run now
    pub fn ready(&mut self, now_ms: f64) -> bool {
        let Some(last) = self.last_time_ms.replace(now_ms) else {
            // First frame always steps so there is something to draw
            return true;
        };

        // Clamp so a backgrounded tab does not bank a huge delta
        let elapsed = (now_ms - last).clamp(0.0, 100.0);
        self.accumulator_ms += elapsed;

        if self.accumulator_ms < self.interval_ms {
            return false;
        }

        // No catch-up: keep at most one interval of debt
        self.accumulator_ms = (self.accumulator_ms - self.interval_ms).min(self.interval_ms);
        true
    }

    /// Forget timing history, used when the page becomes visible again
    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
        self.last_time_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_steps(pacer: &mut FramePacer, frame_ms: f64, frames: usize) -> usize {
        (0..frames)
            .filter(|&i| pacer.ready(i as f64 * frame_ms))
            .count()
    }

    #[test]
    fn test_sixty_hz_host_steps_every_other_frame() {
        let mut pacer = FramePacer::default();
        let steps = count_steps(&mut pacer, 1000.0 / 60.0, 61);
        // First frame plus one step per two animation frames
        assert!((30..=31).contains(&steps), "steps = {}", steps);
    }

    #[test]
    fn test_slow_host_gets_one_step_per_frame() {
        let mut pacer = FramePacer::default();
        let mut steps = 0;
        for i in 0..10 {
            if pacer.ready(i as f64 * 100.0) {
                steps += 1;
            }
        }
        // Ten frames at 10 Hz: ten steps, not thirty
        assert_eq!(steps, 10);
    }

    #[test]
    fn test_no_step_before_interval() {
        let mut pacer = FramePacer::default();
        assert!(pacer.ready(0.0));
        assert!(!pacer.ready(10.0));
        assert!(!pacer.ready(30.0));
        assert!(pacer.ready(34.0));
    }

    #[test]
    fn test_reset_restarts_timing() {
        let mut pacer = FramePacer::default();
        assert!(pacer.ready(0.0));
        assert!(!pacer.ready(5.0));
        pacer.reset();
        assert!(pacer.ready(6.0));
    }
}
