//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the page that has not been referenced for the longest time.
//! Each frame carries the value of a logical clock taken at its last use; the
//! clock advances on every hit and every placement. The victim is the frame
//! with the smallest timestamp, ties going to the lowest frame index. Empty
//! frames have never been used and therefore sort before every occupied frame,
//! so they are filled first in index order.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(1)
//!   - `victim()`: O(F) where F is the number of frames
//! - **Space Complexity:** O(F)

use super::ReplacementPolicy;

/// LRU Policy state.
#[derive(Debug)]
pub struct LruPolicy {
    /// Last-use timestamp per frame; `None` for a frame that was never filled.
    last_used: Vec<Option<u64>>,
    /// Monotonic logical clock.
    clock: u64,
}

impl LruPolicy {
    /// Creates a new LRU policy over `frames` frames.
    pub fn new(frames: usize) -> Self {
        Self {
            last_used: vec![None; frames],
            clock: 0,
        }
    }

    /// Stamps `frame` with the next clock value.
    fn stamp(&mut self, frame: usize) {
        if let Some(slot) = self.last_used.get_mut(frame) {
            *slot = Some(self.clock);
            self.clock += 1;
        }
    }

    /// Last-use timestamps in frame order.
    pub fn timestamps(&self) -> &[Option<u64>] {
        &self.last_used
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Marks the frame as most recently used.
    fn touch(&mut self, frame: usize) {
        self.stamp(frame);
    }

    /// Returns the frame with the oldest timestamp.
    fn victim(&mut self, _frames: &[Option<u32>], _position: usize) -> usize {
        // `None < Some(_)`, and `min_by_key` keeps the first of equal minima.
        self.last_used
            .iter()
            .enumerate()
            .min_by_key(|&(_, &t)| t)
            .map_or(0, |(frame, _)| frame)
    }

    fn installed(&mut self, frame: usize) {
        self.stamp(frame);
    }
}
