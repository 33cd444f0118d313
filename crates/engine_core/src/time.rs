//! Frame timing for the simulation loop.

use std::time::{Duration, Instant};

/// Largest frame delta handed to the simulation; longer stalls (debugger, suspended window) are clipped.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Measures the unscaled wall-clock delta between frames.
///
/// `tick` reads the system clock; `tick_by` advances by a fixed amount so headless
/// runs and tests are reproducible.
#[derive(Debug)]
pub struct FrameClock {
    /// Time of the last frame.
    last_frame: Instant,
    /// Duration of the last frame.
    delta: Duration,
    /// Total elapsed time since start.
    elapsed: Duration,
    /// Frame count since start.
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new frame clock.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Update timing at the start of a new frame from the system clock.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        self.advance(delta);
    }

    /// Advance by a fixed frame delta instead of reading the system clock.
    pub fn tick_by(&mut self, delta: Duration) {
        self.advance(delta);
    }

    fn advance(&mut self, delta: Duration) {
        if delta > MAX_FRAME_DELTA {
            log::debug!("Frame stall of {:?} clipped to {:?}", delta, MAX_FRAME_DELTA);
        }
        self.delta = delta.min(MAX_FRAME_DELTA);
        self.elapsed += self.delta;
        self.frame_count += 1;
    }

    /// Get the delta time in seconds.
    pub fn delta_seconds(&self) -> f64 {
        self.delta.as_secs_f64()
    }

    /// Get the delta time as a Duration.
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Get total elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the current FPS (from the last frame).
    pub fn fps(&self) -> f64 {
        let secs = self.delta.as_secs_f64();
        if secs > 0.0 {
            1.0 / secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ticks_accumulate() {
        let mut clock = FrameClock::new();
        clock.tick_by(Duration::from_millis(16));
        clock.tick_by(Duration::from_millis(16));
        assert_eq!(clock.frame_count(), 2);
        assert!((clock.elapsed_seconds() - 0.032).abs() < 1e-9);
        assert!((clock.fps() - 62.5).abs() < 1e-6);
    }

    #[test]
    fn wall_clock_ticks_measure_real_time() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(5));
        clock.tick();
        assert_eq!(clock.frame_count(), 1);
        assert!(clock.delta() >= Duration::from_millis(5));
        assert!(clock.delta() <= MAX_FRAME_DELTA);

        let first = clock.delta();
        clock.tick();
        assert_eq!(clock.frame_count(), 2);
        assert!((clock.elapsed_seconds() - (first + clock.delta()).as_secs_f64()).abs() < 1e-9);
    }

    #[test]
    fn long_stalls_are_clipped() {
        let mut clock = FrameClock::new();
        clock.tick_by(Duration::from_secs(5));
        assert_eq!(clock.delta(), MAX_FRAME_DELTA);
    }
}
