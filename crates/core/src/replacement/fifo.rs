//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy replaces pages in the order they were loaded, regardless of how
//! recently they were referenced. It operates as a circular buffer over the
//! frames: a single pointer names the next victim, starting at frame 0, and
//! advances by one after every placement. Hits never move the pointer.
//!
//! While frames are still empty the pointer walks over them in index order, so
//! the initial fill and later evictions follow the same rotation.
//!
//! # Performance
//!
//! - **Time Complexity:** O(1) per fault
//! - **Space Complexity:** O(1)
//! - **Anomaly:** Subject to Belady's anomaly (more frames can mean more faults)

use super::ReplacementPolicy;

/// FIFO Policy state.
#[derive(Debug)]
pub struct FifoPolicy {
    /// Frame to be replaced on the next fault.
    next_victim: usize,
    /// Number of frames.
    frames: usize,
}

impl FifoPolicy {
    /// Creates a new FIFO policy over `frames` frames.
    pub const fn new(frames: usize) -> Self {
        Self {
            next_victim: 0,
            frames,
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn touch(&mut self, _frame: usize) {}

    /// Returns the rotation pointer, whether that frame is empty or occupied.
    fn victim(&mut self, _frames: &[Option<u32>], _position: usize) -> usize {
        self.next_victim
    }

    fn installed(&mut self, frame: usize) {
        if frame == self.next_victim {
            self.next_victim = (self.next_victim + 1) % self.frames;
        }
    }
}
