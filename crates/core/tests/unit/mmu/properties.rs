//! Property tests for the translator and the memory state.

use mmusim_core::Error;
use mmusim_core::config::{Config, TlbPolicy};
use mmusim_core::mmu::MemoryState;
use mmusim_core::replacement::{PolicyKind, run_replacement};
use proptest::prelude::*;

fn tlb_policy() -> impl Strategy<Value = TlbPolicy> {
    prop_oneof![Just(TlbPolicy::FixedSlotZero), Just(TlbPolicy::RoundRobin)]
}

prop_compose! {
    fn config()(
        page_size in 1u64..=512,
        num_pages in 1usize..=50,
        num_frames in 1usize..=20,
        tlb_size in 0usize..=10,
        tlb_policy in tlb_policy(),
    ) -> Config {
        Config { page_size, num_pages, num_frames, tlb_size, tlb_policy, ..Config::default() }
    }
}

proptest! {
    /// Page number and offset come from integer division, and the physical
    /// address is built from the frame the page table ends up holding.
    #[test]
    fn translation_is_frame_times_page_size_plus_offset(
        config in config(),
        seed in any::<u64>(),
    ) {
        let mut mmu = MemoryState::new(&config).unwrap();
        let address = seed % config.address_space();
        let r = mmu.translate(address).unwrap();

        prop_assert_eq!(r.page_number as u64, address / config.page_size);
        prop_assert_eq!(r.offset, address % config.page_size);
        prop_assert_eq!(mmu.page_table().lookup(r.page_number), Some(r.frame));
        prop_assert_eq!(r.physical_address.val(), r.frame as u64 * config.page_size + r.offset);
    }

    /// A repeated address hits the TLB and yields the same physical address.
    #[test]
    fn repeated_translation_hits_tlb(
        config in config().prop_filter("needs a TLB", |c| c.tlb_size > 0),
        seed in any::<u64>(),
    ) {
        let mut mmu = MemoryState::new(&config).unwrap();
        let address = seed % config.address_space();
        let first = mmu.translate(address).unwrap();
        let second = mmu.translate(address).unwrap();

        prop_assert!(second.is_tlb_hit());
        prop_assert_eq!(second.physical_address, first.physical_address);
    }

    /// Every completed lookup counts exactly once as a hit or a miss;
    /// out-of-range addresses are rejected before the lookup.
    #[test]
    fn hits_plus_misses_equals_lookups(
        config in config(),
        addresses in prop::collection::vec(0u64..30_000, 1..64),
    ) {
        let mut mmu = MemoryState::new(&config).unwrap();
        let mut lookups = 0u64;

        for address in addresses {
            let before = *mmu.counters();
            let result = mmu.translate(address);
            let after = *mmu.counters();

            prop_assert!(after.tlb_hits >= before.tlb_hits);
            prop_assert!(after.tlb_misses >= before.tlb_misses);
            match result {
                Ok(r) if r.is_tlb_hit() => {
                    prop_assert_eq!(after.tlb_hits, before.tlb_hits + 1);
                    prop_assert_eq!(after.tlb_misses, before.tlb_misses);
                    lookups += 1;
                }
                Ok(_) | Err(Error::FrameTableExhausted { .. }) => {
                    prop_assert_eq!(after.tlb_misses, before.tlb_misses + 1);
                    prop_assert_eq!(after.tlb_hits, before.tlb_hits);
                    lookups += 1;
                }
                Err(Error::AddressOutOfRange { .. }) => prop_assert_eq!(after, before),
                Err(e) => prop_assert!(false, "unexpected error {}", e),
            }
        }
        prop_assert_eq!(mmu.counters().lookups(), lookups);
    }

    /// Resident pages never exceed the frame count, and the page table and
    /// frame table agree after any sequence of translations.
    #[test]
    fn page_table_and_frames_agree(
        config in config(),
        addresses in prop::collection::vec(any::<u64>(), 1..64),
    ) {
        let mut mmu = MemoryState::new(&config).unwrap();
        for address in addresses {
            let _ = mmu.translate(address % config.address_space());
        }
        let snap = mmu.snapshot();
        prop_assert!(mmu.frames().resident() <= config.num_frames);
        for (page, entry) in snap.page_table.iter().enumerate() {
            if let Some(frame) = *entry {
                prop_assert_eq!(snap.frames[frame], Some(page));
            }
        }
        for entry in snap.tlb.iter().flatten() {
            prop_assert_eq!(snap.page_table[entry.page], Some(entry.frame));
        }
    }

    /// Replacement runs use their own frames and leave the session untouched.
    #[test]
    fn replacement_runs_do_not_touch_memory_state(
        config in config(),
        addresses in prop::collection::vec(any::<u64>(), 0..16),
        pages in prop::collection::vec(0u32..10, 1..=50),
    ) {
        let mut mmu = MemoryState::new(&config).unwrap();
        for address in addresses {
            let _ = mmu.translate(address % config.address_space());
        }
        let before = mmu.snapshot();

        for policy in PolicyKind::ALL {
            let _ = run_replacement(policy, &pages, config.num_frames, config.memory_access_time)
                .unwrap();
        }
        prop_assert_eq!(mmu.snapshot(), before);
    }
}
