use std::time::Instant;

/// Per-frame timer. Each `tick` yields the seconds since the previous
/// frame and counts the frame.
#[derive(Debug)]
pub struct FrameClock {
    started: Instant,
    last_frame: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            frames: 0,
        }
    }

    /// Frame delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frames += 1;
        delta
    }

    /// Restart delta measurement, e.g. after a stall such as window creation.
    /// Frame count and elapsed time are kept.
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Seconds since the clock was created
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Number of ticks so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_tick_reports_sleep_and_counts_frames() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));

        assert!(clock.tick() >= 0.009);
        assert_eq!(clock.frames(), 1);
    }

    #[test]
    fn test_reset_drops_stall_but_keeps_totals() {
        let mut clock = FrameClock::new();
        clock.tick();
        thread::sleep(Duration::from_millis(20));
        clock.reset();

        assert!(clock.tick() < 0.019);
        assert_eq!(clock.frames(), 2);
        assert!(clock.elapsed() >= 0.019);
    }

    #[test]
    fn test_deltas_never_exceed_elapsed() {
        let mut clock = FrameClock::new();
        let mut total = 0.0;
        for _ in 0..3 {
            thread::sleep(Duration::from_millis(2));
            total += clock.tick();
        }

        assert!(total <= clock.elapsed() + 1e-4);
    }
}
