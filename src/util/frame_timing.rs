use web_time::{Duration, Instant};

/// Frame timing with a once-per-second FPS report.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Frames since the last report
    frames: u32,
    /// Time since the last report
    elapsed: Duration,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a new frame timer starting now.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            frames: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Call once per frame. Returns the wall-clock frame time in
    /// milliseconds and, once a second has accumulated, the average FPS
    /// over that second.
    pub fn end_frame(&mut self) -> (f32, Option<f32>) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        let report = self.record(elapsed);
        (elapsed.as_secs_f32() * 1000.0, report)
    }

    /// Account for one frame of the given length (wall-clock or simulated).
    ///
    /// Returns the average FPS over the last second once a full second has
    /// accumulated, then starts a new reporting window.
    pub fn record(&mut self, frame_time: Duration) -> Option<f32> {
        self.frames += 1;
        self.elapsed += frame_time;
        if self.elapsed < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames as f32 / self.elapsed.as_secs_f32();
        self.frames = 0;
        self.elapsed = Duration::ZERO;
        Some(fps)
    }
}
