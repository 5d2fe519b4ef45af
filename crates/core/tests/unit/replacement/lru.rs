//! LRU Replacement Tests.
//!
//! Timestamp bookkeeping and tie-breaking in isolation, then full runs.

use crate::common::harness::{BELADY, SILBERSCHATZ};
use mmusim_core::replacement::{LruPolicy, PolicyKind, ReplacementPolicy, run_replacement};
use pretty_assertions::assert_eq;

// ══════════════════════════════════════════════════════════
// 1. Policy
// ══════════════════════════════════════════════════════════

/// Never-used frames sort before every timestamp; lowest index first.
#[test]
fn lru_fills_empty_frames_in_index_order() {
    let mut policy = LruPolicy::new(3);
    let frames: [Option<u32>; 3] = [None; 3];
    assert_eq!(policy.victim(&frames, 0), 0);
    policy.installed(0);
    assert_eq!(policy.victim(&frames, 0), 1);
    policy.installed(1);
    assert_eq!(policy.victim(&frames, 0), 2);
}

/// Accessing frames in order 0,1,2 makes 0 the LRU.
#[test]
fn lru_sequential_fill_evicts_first() {
    let mut policy = LruPolicy::new(3);
    for frame in 0..3 {
        policy.installed(frame);
    }
    assert_eq!(policy.timestamps(), &[Some(0), Some(1), Some(2)]);
    assert_eq!(policy.victim(&[Some(1), Some(2), Some(3)], 0), 0);
}

/// Re-accessing a frame promotes it past the others.
#[test]
fn lru_hit_refreshes_timestamp() {
    let mut policy = LruPolicy::new(3);
    for frame in 0..3 {
        policy.installed(frame);
    }
    policy.touch(0);
    assert_eq!(policy.victim(&[Some(1), Some(2), Some(3)], 0), 1);
    policy.touch(1);
    assert_eq!(policy.victim(&[Some(1), Some(2), Some(3)], 0), 2);
}

// ══════════════════════════════════════════════════════════
// 2. Full Runs
// ══════════════════════════════════════════════════════════

#[test]
fn belady_three_frames_ten_faults() {
    let report = run_replacement(PolicyKind::Lru, &BELADY, 3, 100.0).unwrap();
    assert_eq!(report.faults, 10);
    assert_eq!(
        report.steps.last().unwrap().frames,
        vec![Some(3), Some(4), Some(5)]
    );
}

#[test]
fn belady_four_frames_eight_faults() {
    let report = run_replacement(PolicyKind::Lru, &BELADY, 4, 100.0).unwrap();
    assert_eq!(report.faults, 8);
}

#[test]
fn silberschatz_three_frames_twelve_faults() {
    let report = run_replacement(PolicyKind::Lru, &SILBERSCHATZ, 3, 100.0).unwrap();
    assert_eq!(report.faults, 12);
}

/// Where LRU and FIFO diverge: a hit on page 1 protects it from eviction.
#[test]
fn lru_keeps_recently_hit_page() {
    let pages = [1, 2, 3, 1, 4];
    let lru = run_replacement(PolicyKind::Lru, &pages, 3, 100.0).unwrap();
    let fifo = run_replacement(PolicyKind::Fifo, &pages, 3, 100.0).unwrap();

    assert_eq!(lru.steps[4].frames, vec![Some(1), Some(4), Some(3)]);
    assert_eq!(fifo.steps[4].frames, vec![Some(4), Some(2), Some(3)]);
}
