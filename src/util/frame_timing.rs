use web_time::{Duration, Instant};

/// Measures the time between host frames and keeps a smoothed FPS figure.
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Call once per frame. Returns the time since the previous call (or
    /// since construction) and restarts the measurement.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed);
        elapsed
    }

    fn record(&mut self, elapsed: Duration) {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
