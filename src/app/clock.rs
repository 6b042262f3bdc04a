use std::time::{Duration, Instant};

/// Measures time between frames so movement is frame-rate independent.
pub struct FrameClock {
    last_frame: Option<Instant>,
    max_delta: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: None,
            // window drags and breakpoints stall the loop
            max_delta: Duration::from_millis(250),
        }
    }

    /// Seconds since the previous tick; zero on the first tick.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).min(self.max_delta),
            None => Duration::ZERO,
        };
        self.last_frame = Some(now);
        delta.as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
