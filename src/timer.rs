//! Frame and tick rate counters.

use instant::{Duration, Instant};

/// Counts rendered frames and simulation ticks per second.
///
/// Counters roll over once a full second of time has been fed through
/// [`delta`](Self::delta) or [`advance`](Self::advance) and
/// [`update`](Self::update) has been called.
#[derive(Debug, Clone)]
pub struct Timer {
    last_loop_time: Instant,
    time_count: Duration,
    fps: u32,
    fps_count: u32,
    tps: u32,
    tick_count: u32,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            last_loop_time: Instant::now(),
            time_count: Duration::ZERO,
            fps: 0,
            fps_count: 0,
            tps: 0,
            tick_count: 0,
        }
    }

    /// Wall-clock time since the previous call (or since construction).
    pub fn delta(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now - self.last_loop_time;
        self.last_loop_time = now;
        self.advance(dt);
        dt
    }

    pub fn advance(&mut self, dt: Duration) {
        self.time_count += dt;
    }

    pub fn update(&mut self) {
        if self.time_count > Duration::from_secs(1) {
            self.fps = self.fps_count;
            self.fps_count = 0;

            self.tps = self.tick_count;
            self.tick_count = 0;

            self.time_count -= Duration::from_secs(1);
        }
    }

    pub fn count_frame(&mut self) {
        self.fps_count += 1;
    }

    pub fn count_tick(&mut self) {
        self.tick_count += 1;
    }

    /// Frames in the last full second, or the running count before the
    /// first second has passed.
    pub fn fps(&self) -> u32 {
        if self.fps > 0 { self.fps } else { self.fps_count }
    }

    pub fn tps(&self) -> u32 {
        if self.tps > 0 { self.tps } else { self.tick_count }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
