use std::time::Instant;

/// Per-frame time step and FPS bookkeeping for the render loop.
pub struct FrameTimer {
    last: Instant,
    max_dt: f32,
    frame_count: u32,
    fps_timer: f32,
    pub fps: f32,
}

impl FrameTimer {
    pub fn new(max_dt: f32) -> Self {
        Self::starting_at(Instant::now(), max_dt)
    }

    pub fn starting_at(start: Instant, max_dt: f32) -> Self {
        Self {
            last: start,
            max_dt,
            frame_count: 0,
            fps_timer: 0.0,
            fps: 0.0,
        }
    }

    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Seconds since the previous tick, clamped to `[0, max_dt]` so a stall
    /// (window drag, breakpoint) does not teleport the camera.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).as_secs_f32().clamp(0.0, self.max_dt);
        self.last = now;

        self.frame_count += 1;
        self.fps_timer += dt;
        if self.fps_timer >= 1.0 {
            self.fps = self.frame_count as f32 / self.fps_timer;
            self.frame_count = 0;
            self.fps_timer = 0.0;
        }
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_dt_is_time_since_last_tick() {
        let start = Instant::now();
        let mut timer = FrameTimer::starting_at(start, 0.1);
        let dt = timer.tick_at(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_dt_is_clamped() {
        let start = Instant::now();
        let mut timer = FrameTimer::starting_at(start, 0.1);
        assert_eq!(timer.tick_at(start + Duration::from_secs(5)), 0.1);
        // a clock that appears to run backwards gives a zero step
        assert_eq!(timer.tick_at(start), 0.0);
    }

    #[test]
    fn test_fps_estimate() {
        let start = Instant::now();
        let mut timer = FrameTimer::starting_at(start, 0.1);
        for i in 1..=25 {
            timer.tick_at(start + Duration::from_millis(50 * i));
        }
        assert!((timer.fps - 20.0).abs() < 0.5, "fps was {}", timer.fps);
    }
}
