/// Averages frame rate over a fixed reporting interval
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    accumulator: f32,
    frames: u32,
}

impl FpsCounter {
    /// Create counter that reports once every `interval` seconds
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
            frames: 0,
        }
    }

    /// Record one frame; returns the average FPS when an interval completes
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.accumulator += delta;

        if self.accumulator >= self.interval {
            let fps = self.frames as f32 / self.accumulator;
            self.frames = 0;
            self.accumulator = 0.0;
            Some(fps)
        } else {
            None
        }
    }
}
