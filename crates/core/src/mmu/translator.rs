//! Logical-to-physical address translation.
//!
//! Each call walks the same fixed sequence against the session's memory state:
//!
//! 1. Split the address into page number and offset. Pages beyond the
//!    configured count are rejected before anything is touched.
//! 2. Scan the TLB. A hit completes the translation.
//! 3. On a miss, count it and consult the page table. A non-resident page is a
//!    page fault and gets the first free frame. If no frame is free the fault
//!    cannot be serviced and the call fails, leaving the tables unchanged.
//! 4. Install the mapping in the TLB and compute `frame * page_size + offset`.

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::common::{Error, LogicalAddr, PhysAddr, Result};

use super::MemoryState;

/// Which level of the lookup produced the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TranslationOutcome {
    /// The TLB held the mapping.
    TlbHit,
    /// TLB miss; the page table entry was valid.
    PageTableHit,
    /// TLB miss and page fault; a free frame was allocated.
    PageFault,
}

/// Result of one successful translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    /// Address that was translated.
    pub logical_address: LogicalAddr,
    /// `logical_address / page_size`.
    pub page_number: usize,
    /// `logical_address % page_size`.
    pub offset: u64,
    /// Frame holding the page.
    pub frame: usize,
    /// `frame * page_size + offset`.
    pub physical_address: PhysAddr,
    /// Lookup path taken.
    pub outcome: TranslationOutcome,
}

impl TranslationResult {
    /// Returns `true` if the TLB satisfied the lookup.
    pub fn is_tlb_hit(&self) -> bool {
        self.outcome == TranslationOutcome::TlbHit
    }

    /// Returns `true` if the lookup faulted and allocated a frame.
    pub fn is_page_fault(&self) -> bool {
        self.outcome == TranslationOutcome::PageFault
    }
}

impl MemoryState {
    /// Translates a logical address to a physical address.
    ///
    /// # Arguments
    ///
    /// * `address` - Logical address to translate.
    ///
    /// # Errors
    ///
    /// * [`Error::AddressOutOfRange`] if the page number is not below `num_pages`.
    ///   No state is modified.
    /// * [`Error::FrameTableExhausted`] if the page faults and every frame is
    ///   occupied. The TLB miss is counted; page table, frames and TLB are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use mmusim_core::config::Config;
    /// use mmusim_core::mmu::{MemoryState, TranslationOutcome};
    ///
    /// let config = Config { page_size: 100, ..Config::default() };
    /// let mut mmu = MemoryState::new(&config).unwrap();
    ///
    /// let first = mmu.translate(250).unwrap();
    /// assert_eq!((first.page_number, first.offset), (2, 50));
    /// assert_eq!(first.outcome, TranslationOutcome::PageFault);
    /// assert_eq!(first.physical_address.val(), 50); // page 2 lands in frame 0
    ///
    /// let again = mmu.translate(250).unwrap();
    /// assert!(again.is_tlb_hit());
    /// assert_eq!(again.physical_address, first.physical_address);
    /// ```
    pub fn translate(&mut self, address: u64) -> Result<TranslationResult> {
        let logical = LogicalAddr::new(address);
        let page_size = self.config.page_size;
        let (page, offset) = logical.split(page_size);

        let num_pages = self.page_table.len();
        if page >= num_pages as u64 {
            return Err(Error::AddressOutOfRange {
                address,
                page,
                num_pages,
            });
        }
        let page = page as usize;

        if let Some(frame) = self.tlb.lookup(page) {
            self.counters.tlb_hits += 1;
            trace!(address, page, frame, "tlb hit");
            return Ok(TranslationResult {
                logical_address: logical,
                page_number: page,
                offset,
                frame,
                physical_address: PhysAddr::from_frame(frame, page_size, offset),
                outcome: TranslationOutcome::TlbHit,
            });
        }

        self.counters.tlb_misses += 1;
        trace!(address, page, "tlb miss");

        let (frame, outcome) = match self.page_table.lookup(page) {
            Some(frame) => (frame, TranslationOutcome::PageTableHit),
            None => (self.service_fault(page)?, TranslationOutcome::PageFault),
        };

        if let Some(slot) = self.tlb.insert(page, frame) {
            trace!(page, frame, slot, "tlb install");
        }

        Ok(TranslationResult {
            logical_address: logical,
            page_number: page,
            offset,
            frame,
            physical_address: PhysAddr::from_frame(frame, page_size, offset),
            outcome,
        })
    }

    /// Loads a non-resident page into the first free frame.
    fn service_fault(&mut self, page: usize) -> Result<usize> {
        let Some(frame) = self.frames.allocate(page) else {
            let num_frames = self.frames.len();
            warn!(page, num_frames, "page fault with no free frame");
            return Err(Error::FrameTableExhausted { page, num_frames });
        };
        self.page_table.map(page, frame);
        self.counters.page_faults += 1;
        debug!(page, frame, "page fault serviced");
        Ok(frame)
    }
}
