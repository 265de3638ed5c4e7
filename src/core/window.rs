/// Viewport dimensions in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or None while either side is zero (minimized window)
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(self.width as f32 / self.height as f32)
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for Viewport {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_aspect_ratio() {
        let test_cases = [
            (640, 480, 4.0 / 3.0),
            (1280, 720, 16.0 / 9.0),
            (768, 768, 1.0),
            (1366, 768, 1366.0 / 768.0),
        ];

        for (width, height, expected) in test_cases {
            let aspect = Viewport::new(width, height).aspect_ratio().unwrap();
            assert!((aspect - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_viewport_zero_dimension_has_no_aspect() {
        assert_eq!(Viewport::new(0, 600).aspect_ratio(), None);
        assert_eq!(Viewport::new(800, 0).aspect_ratio(), None);
    }

    #[test]
    fn test_viewport_from_physical_size() {
        let viewport = Viewport::from(winit::dpi::PhysicalSize::new(1920, 1080));
        assert_eq!(viewport, Viewport::new(1920, 1080));
    }
}
