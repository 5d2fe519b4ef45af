//! Physical frame table.
//!
//! Records which page, if any, occupies each physical frame. Allocation is
//! first-fit in frame-index order; the translation path never evicts.

/// Frame table indexed by frame number.
#[derive(Clone, Debug)]
pub struct FrameTable {
    frames: Vec<Option<usize>>,
}

impl FrameTable {
    /// Creates `num_frames` empty frames.
    pub fn new(num_frames: usize) -> Self {
        Self {
            frames: vec![None; num_frames],
        }
    }

    /// Returns the lowest-indexed empty frame, if any.
    pub fn first_free(&self) -> Option<usize> {
        self.frames.iter().position(Option::is_none)
    }

    /// Places `page` into the first free frame and returns its index.
    ///
    /// Returns `None` without modifying the table when every frame is occupied.
    pub fn allocate(&mut self, page: usize) -> Option<usize> {
        let frame = self.first_free()?;
        self.frames[frame] = Some(page);
        Some(frame)
    }

    /// Page currently resident in `frame`.
    #[inline]
    pub fn occupant(&self, frame: usize) -> Option<usize> {
        self.frames.get(frame).copied().flatten()
    }

    /// Frame currently holding `page`.
    pub fn frame_of(&self, page: usize) -> Option<usize> {
        self.frames.iter().position(|&p| p == Some(page))
    }

    /// Empties every frame.
    pub fn reset(&mut self) {
        self.frames.fill(None);
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if there are no frames at all.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of occupied frames.
    pub fn resident(&self) -> usize {
        self.frames.iter().filter(|f| f.is_some()).count()
    }

    /// Read-only view of every frame in index order.
    pub fn frames(&self) -> &[Option<usize>] {
        &self.frames
    }
}
