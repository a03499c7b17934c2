use std::time::{Duration, Instant};

/// Paces the main loop at a fixed frame rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_time: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    #[must_use]
    pub fn new(fps: u32) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / fps.max(1),
            last_tick: None,
        }
    }

    #[must_use]
    pub const fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Earliest instant the next frame may run, `None` before the first tick.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.last_tick.map(|last| last + self.frame_time)
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        !matches!(self.next_deadline(), Some(deadline) if now < deadline)
    }

    /// Start a new frame at `now`, returning the seconds since the previous one.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let elapsed = self
            .last_tick
            .map_or(self.frame_time, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);
        elapsed.as_secs_f32()
    }
}
