//! Optimal (Belady MIN) Replacement Policy.
//!
//! This policy looks ahead in the reference string and evicts the page whose
//! next use is farthest in the future. A page that is never referenced again
//! outranks any finite distance. Ties, including several never-reused pages,
//! go to the lowest frame index.
//!
//! Lookahead eviction only starts once every frame is occupied; until then a
//! fault fills the lowest-indexed empty frame.
//!
//! # Performance
//!
//! - **Time Complexity:** O(F × N) per fault for F frames and N remaining references
//! - **Space Complexity:** O(1) beyond the borrowed reference string

use super::ReplacementPolicy;

/// Optimal Policy state: the full reference string being simulated.
#[derive(Debug)]
pub struct OptimalPolicy<'a> {
    references: &'a [u32],
}

impl<'a> OptimalPolicy<'a> {
    /// Creates an optimal policy that looks ahead in `references`.
    pub const fn new(references: &'a [u32]) -> Self {
        Self { references }
    }

    /// Index of the next reference to `page` strictly after `position`, if any.
    pub fn next_use(&self, page: u32, position: usize) -> Option<usize> {
        let start = position.saturating_add(1).min(self.references.len());
        self.references[start..]
            .iter()
            .position(|&p| p == page)
            .map(|offset| start + offset)
    }
}

impl ReplacementPolicy for OptimalPolicy<'_> {
    fn touch(&mut self, _frame: usize) {}

    fn victim(&mut self, frames: &[Option<u32>], position: usize) -> usize {
        if let Some(empty) = frames.iter().position(Option::is_none) {
            return empty;
        }

        let mut victim = 0;
        let mut farthest = 0;
        for (frame, page) in frames.iter().enumerate() {
            let Some(page) = *page else { continue };
            let distance = self.next_use(page, position).unwrap_or(usize::MAX);
            if frame == 0 || distance > farthest {
                victim = frame;
                farthest = distance;
            }
        }
        victim
    }

    fn installed(&mut self, _frame: usize) {}
}
