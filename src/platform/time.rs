//! Frame pacing
//!
//! Spawn timers, the restart debounce and shark movement all read time from
//! the same `FrameTime` stream.

use std::time::{Duration, Instant};

use crate::consts::{MAX_FRAME_DT, MIN_FRAME_DT};

/// Clock reading for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Milliseconds since the clock started
    pub now_ms: u64,
    /// Seconds since the previous frame, clamped to a sane range
    pub dt: f32,
}

/// Source of frame times
pub trait FrameClock {
    /// Block until the next frame is due and return its time
    fn next_frame(&mut self) -> FrameTime;
}

/// Wall-clock pacer that caps the loop at a target frame rate
#[derive(Debug)]
pub struct FramePacer {
    start: Instant,
    last: Instant,
    frame_budget: Duration,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_budget: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
        }
    }
}

impl FrameClock for FramePacer {
    fn next_frame(&mut self) -> FrameTime {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame_budget {
            std::thread::sleep(self.frame_budget - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        FrameTime {
            now_ms: now.duration_since(self.start).as_millis() as u64,
            dt: dt.clamp(MIN_FRAME_DT, MAX_FRAME_DT),
        }
    }
}

/// Simulated clock: every frame is exactly `dt` later, no sleeping.
/// Used for headless runs and tests.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    elapsed_secs: f64,
    dt: f32,
}

impl FixedStepClock {
    pub fn new(dt: f32) -> Self {
        Self {
            elapsed_secs: 0.0,
            dt: dt.clamp(MIN_FRAME_DT, MAX_FRAME_DT),
        }
    }
}

impl FrameClock for FixedStepClock {
    fn next_frame(&mut self) -> FrameTime {
        self.elapsed_secs += self.dt as f64;
        FrameTime {
            now_ms: (self.elapsed_secs * 1000.0).round() as u64,
            dt: self.dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_clock() {
        let mut clock = FixedStepClock::new(0.05);
        assert_eq!(clock.next_frame(), FrameTime { now_ms: 50, dt: 0.05 });
        assert_eq!(clock.next_frame(), FrameTime { now_ms: 100, dt: 0.05 });
    }

    #[test]
    fn test_fixed_step_clamps_delta() {
        let mut clock = FixedStepClock::new(5.0);
        assert_eq!(clock.next_frame().dt, MAX_FRAME_DT);
        let mut clock = FixedStepClock::new(0.0);
        assert_eq!(clock.next_frame().dt, MIN_FRAME_DT);
    }

    #[test]
    fn test_pacer_is_monotonic_and_capped() {
        let mut pacer = FramePacer::new(200);
        let a = pacer.next_frame();
        let b = pacer.next_frame();
        assert!(b.now_ms >= a.now_ms);
        assert!(b.now_ms >= 5);
        assert!(b.dt >= MIN_FRAME_DT && b.dt <= MAX_FRAME_DT);
    }
}
