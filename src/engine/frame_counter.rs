//! Frames-per-second counter

/// Counts frames and reports the rate once per second
#[derive(Debug, Default, Clone)]
pub struct FrameCounter {
    accumulated: f32,
    frames: u32,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame that took `elapsed` seconds
    ///
    /// Returns the number of frames in the last second once a full second
    /// has accumulated.
    pub fn tick(&mut self, elapsed: f32) -> Option<u32> {
        self.accumulated += elapsed;
        self.frames += 1;

        if self.accumulated >= 1.0 {
            self.accumulated -= 1.0;
            let fps = self.frames;
            self.frames = 0;
            Some(fps)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_after_one_second() {
        let mut counter = FrameCounter::new();
        for _ in 0..59 {
            assert_eq!(counter.tick(1.0 / 60.0), None);
        }
        // Float accumulation may land just under 1.0; one more frame crosses it
        let reported = counter.tick(1.0 / 60.0).or_else(|| counter.tick(1.0 / 60.0));
        assert!(matches!(reported, Some(60) | Some(61)));
    }

    #[test]
    fn test_resets_after_report() {
        let mut counter = FrameCounter::new();
        assert_eq!(counter.tick(0.5), None);
        assert_eq!(counter.tick(0.5), Some(2));
        assert_eq!(counter.tick(0.25), None);
        assert_eq!(counter.tick(0.75), Some(2));
    }

    #[test]
    fn test_slow_frame_reports_one() {
        let mut counter = FrameCounter::new();
        assert_eq!(counter.tick(1.5), Some(1));
    }
}
