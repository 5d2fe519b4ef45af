//! Translation Lookaside Buffer (TLB).
//!
//! A small fully associative cache of page→frame mappings consulted before the
//! page table. Lookups scan slots in index order and the first match wins.
//! The slot that receives a new mapping is chosen by [`TlbPolicy`]:
//!
//! - `FixedSlotZero`: every insertion overwrites slot 0, so at most one mapping
//!   is ever cached regardless of capacity.
//! - `RoundRobin`: insertions rotate through all slots, wrapping after the last.
//!
//! A zero-capacity TLB caches nothing and every lookup misses.

use serde::Serialize;

use crate::config::TlbPolicy;

/// A single cached translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TlbEntry {
    /// Page number (tag).
    pub page: usize,
    /// Frame number (data).
    pub frame: usize,
}

/// Translation Lookaside Buffer structure.
#[derive(Clone, Debug)]
pub struct Tlb {
    /// Slots in index order; `None` is an empty slot.
    entries: Vec<Option<TlbEntry>>,
    /// Insertion policy.
    policy: TlbPolicy,
    /// Next slot to fill under `RoundRobin`.
    next: usize,
}

impl Tlb {
    /// Creates an empty TLB with `size` slots.
    pub fn new(size: usize, policy: TlbPolicy) -> Self {
        Self {
            entries: vec![None; size],
            policy,
            next: 0,
        }
    }

    /// Looks up `page`, returning the cached frame on a hit.
    #[inline]
    pub fn lookup(&self, page: usize) -> Option<usize> {
        self.entries
            .iter()
            .flatten()
            .find(|e| e.page == page)
            .map(|e| e.frame)
    }

    /// Installs a mapping and returns the slot it was written to.
    ///
    /// Returns `None` for a zero-capacity TLB.
    pub fn insert(&mut self, page: usize, frame: usize) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let slot = match self.policy {
            TlbPolicy::FixedSlotZero => 0,
            TlbPolicy::RoundRobin => {
                let slot = self.next;
                self.next = (self.next + 1) % self.entries.len();
                slot
            }
        };
        self.entries[slot] = Some(TlbEntry { page, frame });
        Some(slot)
    }

    /// Flushes all entries from the TLB and rewinds the insertion pointer.
    pub fn flush(&mut self) {
        self.entries.fill(None);
        self.next = 0;
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Active insertion policy.
    pub const fn policy(&self) -> TlbPolicy {
        self.policy
    }

    /// Read-only view of every slot in index order.
    pub fn entries(&self) -> &[Option<TlbEntry>] {
        &self.entries
    }
}
