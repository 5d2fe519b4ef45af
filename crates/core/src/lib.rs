//! Paged virtual memory / MMU simulator library.
//!
//! This crate models address translation and page replacement with the following:
//! 1. **Memory state:** Page table, frame table, TLB and hit counters for one session.
//! 2. **Translation:** Logical → physical lookup through TLB, page table and first-fit frame allocation.
//! 3. **Replacement:** FIFO, LRU and Optimal policies run against independent frame sets.
//! 4. **Statistics:** TLB hit ratios and effective memory access time (EMAT).
//! 5. **Configuration:** Validated simulation parameters, loadable from JSON.
//!
//! Input prompting and text rendering are left to the caller (see the `mmusim` binary).

/// Common types and constants (addresses, capacity bounds, errors).
pub mod common;
/// Simulator configuration (defaults, TLB policy, validation).
pub mod config;
/// Live memory state and the translator (page table, frames, TLB).
pub mod mmu;
/// Page replacement simulation (FIFO, LRU, Optimal).
pub mod replacement;
/// Hit counters, EMAT calculator and TLB statistics.
pub mod stats;

/// Crate-wide error and result types.
pub use crate::common::{Error, Result};
/// Root configuration type; use `Config::default()` or [`Config::from_json_str`].
pub use crate::config::Config;
/// Session memory state; construct with `MemoryState::new`.
pub use crate::mmu::MemoryState;
/// One-shot replacement runner and its entry point.
pub use crate::replacement::{PolicyKind, ReplacementSimulator, run_replacement};
