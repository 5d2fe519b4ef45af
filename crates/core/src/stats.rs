//! Simulation statistics collection and reporting.
//!
//! This module tracks translation metrics and derives access-time figures. It provides:
//! 1. **Hit counters:** TLB hits, TLB misses and serviced page faults for one session.
//! 2. **EMAT:** Effective memory access time for replacement runs and for the TLB.
//! 3. **TLB statistics:** A structured summary for the reporting layer.

use serde::Serialize;

/// Translation counters for one memory-state lifetime.
///
/// Counters only grow; they are cleared by [`MemoryState::initialize`](crate::mmu::MemoryState::initialize).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HitCounters {
    /// Lookups satisfied by the TLB.
    pub tlb_hits: u64,
    /// Lookups that had to consult the page table.
    pub tlb_misses: u64,
    /// TLB misses that also found the page non-resident and allocated a frame.
    pub page_faults: u64,
}

impl HitCounters {
    /// Total number of completed TLB lookups.
    pub const fn lookups(&self) -> u64 {
        self.tlb_hits + self.tlb_misses
    }

    /// Fraction of lookups that hit in the TLB, or `None` before the first lookup.
    pub fn hit_ratio(&self) -> Option<f64> {
        let total = self.lookups();
        if total == 0 {
            return None;
        }
        Some(self.tlb_hits as f64 / total as f64)
    }
}

/// Effective memory access time calculations.
///
/// Both formulas are weighted averages of a fast path and a slow path. The slow
/// path of a page fault is modeled as [`FAULT_SERVICE_FACTOR`](crate::common::constants::FAULT_SERVICE_FACTOR)
/// memory accesses.
pub mod emat {
    use crate::common::constants::FAULT_SERVICE_FACTOR;

    /// EMAT of a replacement run.
    ///
    /// `rate = faults / total`;
    /// `EMAT = (1 - rate) * mem + rate * (2 * mem)`.
    ///
    /// An empty run (`total == 0`) has no faults and costs one memory access.
    pub fn replacement(faults: usize, total: usize, memory_access_time: f64) -> f64 {
        let rate = if total == 0 {
            0.0
        } else {
            faults as f64 / total as f64
        };
        weighted(rate, memory_access_time, FAULT_SERVICE_FACTOR * memory_access_time)
    }

    /// EMAT of TLB-assisted translation.
    ///
    /// `EMAT = h * (tlb + mem) + (1 - h) * (tlb + 2 * mem)`.
    pub fn tlb(hit_ratio: f64, memory_access_time: f64, tlb_access_time: f64) -> f64 {
        let fast = tlb_access_time + memory_access_time;
        let slow = tlb_access_time + FAULT_SERVICE_FACTOR * memory_access_time;
        weighted(1.0 - hit_ratio, fast, slow)
    }

    /// Blends `fast` and `slow` by the probability of taking the slow path.
    fn weighted(slow_rate: f64, fast: f64, slow: f64) -> f64 {
        let slow_rate = slow_rate.clamp(0.0, 1.0);
        (1.0 - slow_rate) * fast + slow_rate * slow
    }
}

/// TLB summary handed to the reporting layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TlbStatistics {
    /// TLB hits.
    pub hits: u64,
    /// TLB misses.
    pub misses: u64,
    /// `hits / (hits + misses)`.
    pub hit_ratio: f64,
    /// Effective memory access time (ns).
    pub emat: f64,
}

impl TlbStatistics {
    /// Derives statistics from raw counters, or `None` when no lookup has happened yet.
    pub fn from_counters(
        counters: &HitCounters,
        memory_access_time: f64,
        tlb_access_time: f64,
    ) -> Option<Self> {
        let hit_ratio = counters.hit_ratio()?;
        Some(Self {
            hits: counters.tlb_hits,
            misses: counters.tlb_misses,
            hit_ratio,
            emat: emat::tlb(hit_ratio, memory_access_time, tlb_access_time),
        })
    }
}
