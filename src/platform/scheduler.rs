//! Frame scheduling
//!
//! The browser drives frames itself through `requestAnimationFrame`; these
//! schedulers drive [`crate::Game::run`] everywhere else.

/// Decides whether another frame runs, waiting for it if needed
pub trait FrameScheduler {
    /// Block until the next frame is due; `false` ends the loop
    fn next_frame(&mut self) -> bool;
}

/// Grants exactly `n` frames with no waiting
#[derive(Debug, Clone, Copy)]
pub struct FixedFrames {
    remaining: u64,
}

impl FixedFrames {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameScheduler for FixedFrames {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Grants frames at a fixed interval, sleeping the thread in between
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct Paced {
    frames: FixedFrames,
    interval: std::time::Duration,
    last: Option<std::time::Instant>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Paced {
    /// Roughly one display refresh at 60 Hz
    pub const REFRESH: std::time::Duration = std::time::Duration::from_micros(16_667);

    pub fn new(frames: u64, interval: std::time::Duration) -> Self {
        Self {
            frames: FixedFrames::new(frames),
            interval,
            last: None,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FrameScheduler for Paced {
    fn next_frame(&mut self) -> bool {
        if !self.frames.next_frame() {
            return false;
        }
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        }
        self.last = Some(std::time::Instant::now());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_frames() {
        let mut frames = FixedFrames::new(3);
        assert!(frames.next_frame());
        assert!(frames.next_frame());
        assert!(frames.next_frame());
        assert!(!frames.next_frame());
        assert!(!frames.next_frame());
    }

    #[test]
    fn test_zero_frames() {
        assert!(!FixedFrames::new(0).next_frame());
    }

    #[test]
    fn test_paced_waits_between_frames() {
        let interval = std::time::Duration::from_millis(5);
        let mut paced = Paced::new(3, interval);
        let start = std::time::Instant::now();
        let mut granted = 0;
        while paced.next_frame() {
            granted += 1;
        }
        assert_eq!(granted, 3);
        assert!(start.elapsed() >= interval * 2);
    }
}
