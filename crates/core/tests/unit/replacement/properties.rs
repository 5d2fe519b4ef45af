//! Property tests across replacement policies.

use std::collections::HashSet;

use mmusim_core::common::{MAX_FRAMES, MAX_REFERENCES};
use mmusim_core::replacement::{PolicyKind, ReplacementSimulator};
use proptest::prelude::*;

fn references() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..12, 1..=MAX_REFERENCES)
}

proptest! {
    /// Optimal never faults more than any other policy on the same input.
    #[test]
    fn optimal_is_a_lower_bound(pages in references(), frames in 1usize..=MAX_FRAMES) {
        let sim = ReplacementSimulator::new(frames, 100.0).unwrap();
        let reports = sim.compare(&pages).unwrap();
        let optimal = reports.iter().find(|r| r.policy == PolicyKind::Optimal).unwrap();
        for report in &reports {
            prop_assert!(
                optimal.faults <= report.faults,
                "optimal {} > {} {}", optimal.faults, report.policy, report.faults
            );
        }
    }

    /// Every policy takes exactly one fault per distinct page when all pages fit,
    /// and at least one per distinct page otherwise.
    #[test]
    fn compulsory_faults(pages in references(), frames in 1usize..=MAX_FRAMES) {
        let distinct = pages.iter().collect::<HashSet<_>>().len();
        let sim = ReplacementSimulator::new(frames, 100.0).unwrap();
        for policy in PolicyKind::ALL {
            let report = sim.run(policy, &pages).unwrap();
            prop_assert!(report.faults >= distinct);
            prop_assert!(report.faults <= pages.len());
            if distinct <= frames {
                prop_assert_eq!(report.faults, distinct);
            }
        }
    }

    /// No page is ever resident in two frames at once.
    #[test]
    fn frames_never_hold_duplicates(pages in references(), frames in 1usize..=MAX_FRAMES) {
        let sim = ReplacementSimulator::new(frames, 100.0).unwrap();
        for policy in PolicyKind::ALL {
            let report = sim.run(policy, &pages).unwrap();
            for step in &report.steps {
                let resident: Vec<u32> = step.frames.iter().flatten().copied().collect();
                let unique: HashSet<u32> = resident.iter().copied().collect();
                prop_assert_eq!(resident.len(), unique.len());
            }
        }
    }

    /// Replacement EMAT stays within [mem, 2 * mem].
    #[test]
    fn replacement_emat_is_bounded(
        pages in references(),
        frames in 1usize..=MAX_FRAMES,
        memory in 1.0f64..1_000.0,
    ) {
        let sim = ReplacementSimulator::new(frames, memory).unwrap();
        for report in sim.compare(&pages).unwrap() {
            prop_assert!(report.emat >= memory);
            prop_assert!(report.emat <= 2.0 * memory);
        }
    }
}
