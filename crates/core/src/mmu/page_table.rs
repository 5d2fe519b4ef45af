//! Single-level page table.
//!
//! One entry per logical page. An entry is either invalid (`None`, page not
//! resident) or holds the frame the page occupies. Entries become valid on
//! the first fault for their page and never revert in the translation path.

/// Page table indexed by page number.
#[derive(Clone, Debug)]
pub struct PageTable {
    entries: Vec<Option<usize>>,
}

impl PageTable {
    /// Creates a page table with `num_pages` invalid entries.
    pub fn new(num_pages: usize) -> Self {
        Self {
            entries: vec![None; num_pages],
        }
    }

    /// Returns the frame mapped for `page`, or `None` if the page is not resident.
    ///
    /// Pages outside the table are reported as not resident.
    #[inline]
    pub fn lookup(&self, page: usize) -> Option<usize> {
        self.entries.get(page).copied().flatten()
    }

    /// Marks `page` as resident in `frame`.
    pub fn map(&mut self, page: usize, frame: usize) {
        if let Some(entry) = self.entries.get_mut(page) {
            *entry = Some(frame);
        }
    }

    /// Invalidates every entry.
    pub fn reset(&mut self) {
        self.entries.fill(None);
    }

    /// Number of pages covered by the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table covers no pages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only view of every entry in page order.
    pub fn entries(&self) -> &[Option<usize>] {
        &self.entries
    }
}
