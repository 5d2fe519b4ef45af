//! Memory Management Unit (MMU).
//!
//! This module holds the live memory state of one simulation session and the
//! translator that mutates it. It provides:
//! 1. **Page table:** page → optional frame, one entry per logical page.
//! 2. **Frame table:** frame → optional resident page, first-fit allocation.
//! 3. **TLB:** a small cache of recent translations in front of the page table.
//! 4. **Translator:** logical → physical translation (see [`MemoryState::translate`]).
//!
//! The state is exclusively owned by its session and is never shared with
//! the replacement simulator, which works on its own frames.

/// Physical frame table.
pub mod frame_table;

/// Single-level page table.
pub mod page_table;

/// Translation Lookaside Buffer (TLB) for caching page-to-frame mappings.
pub mod tlb;

/// Logical-to-physical address translation.
pub mod translator;

use serde::Serialize;
use tracing::debug;

use crate::common::Result;
use crate::config::Config;
use crate::stats::{HitCounters, TlbStatistics};

use self::frame_table::FrameTable;
use self::page_table::PageTable;
use self::tlb::{Tlb, TlbEntry};

pub use self::translator::{TranslationOutcome, TranslationResult};

/// Page table, frame table, TLB and hit counters of one session.
#[derive(Clone, Debug)]
pub struct MemoryState {
    config: Config,
    page_table: PageTable,
    frames: FrameTable,
    tlb: Tlb,
    counters: HitCounters,
}

/// Read-only copy of the memory state for the reporting layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemorySnapshot {
    /// Frame of each page in page order; `None` is an invalid entry.
    pub page_table: Vec<Option<usize>>,
    /// Resident page of each frame in frame order; `None` is an empty frame.
    pub frames: Vec<Option<usize>>,
    /// TLB slots in slot order; `None` is an empty slot.
    pub tlb: Vec<Option<TlbEntry>>,
    /// Counters at the time of the snapshot.
    pub counters: HitCounters,
}

impl MemoryState {
    /// Validates `config` and builds an initialized memory state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`](crate::common::Error::InvalidConfiguration)
    /// if any bound is non-positive or exceeds the simulator's capacity.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        debug!(
            page_size = config.page_size,
            num_pages = config.num_pages,
            num_frames = config.num_frames,
            tlb_size = config.tlb_size,
            tlb_policy = ?config.tlb_policy,
            "memory state created"
        );
        Ok(Self {
            config: config.clone(),
            page_table: PageTable::new(config.num_pages),
            frames: FrameTable::new(config.num_frames),
            tlb: Tlb::new(config.tlb_size, config.tlb_policy),
            counters: HitCounters::default(),
        })
    }

    /// Invalidates every page, empties every frame and TLB slot and zeroes the counters.
    ///
    /// Idempotent.
    pub fn initialize(&mut self) {
        self.page_table.reset();
        self.frames.reset();
        self.tlb.flush();
        self.counters = HitCounters::default();
        debug!("memory state initialized");
    }

    /// Empties the TLB, leaving the page table, frames and counters untouched.
    pub fn flush_tlb(&mut self) {
        self.tlb.flush();
        debug!("tlb flushed");
    }

    /// Copies the current tables for display. No side effects.
    pub fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            page_table: self.page_table.entries().to_vec(),
            frames: self.frames.frames().to_vec(),
            tlb: self.tlb.entries().to_vec(),
            counters: self.counters,
        }
    }

    /// TLB hit/miss summary, or `None` if no translation has completed a lookup yet.
    pub fn tlb_statistics(&self) -> Option<TlbStatistics> {
        TlbStatistics::from_counters(
            &self.counters,
            self.config.memory_access_time,
            self.config.tlb_access_time,
        )
    }

    /// Session configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Current counters.
    pub const fn counters(&self) -> &HitCounters {
        &self.counters
    }

    /// The page table.
    pub const fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    /// The frame table.
    pub const fn frames(&self) -> &FrameTable {
        &self.frames
    }

    /// The TLB.
    pub const fn tlb(&self) -> &Tlb {
        &self.tlb
    }
}
