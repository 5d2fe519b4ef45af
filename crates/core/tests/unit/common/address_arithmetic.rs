//! # Address Arithmetic Tests
//!
//! Verifies construction, value retrieval and page/offset decomposition of
//! `LogicalAddr`, and frame-based construction of `PhysAddr`.

use mmusim_core::common::addr::{LogicalAddr, PhysAddr};
use rstest::rstest;

#[test]
fn logical_addr_new_and_val() {
    let la = LogicalAddr::new(1234);
    assert_eq!(la.val(), 1234);
    assert_eq!(LogicalAddr::from(1234), la);
}

#[rstest]
#[case(0, 100, 0, 0)]
#[case(99, 100, 0, 99)]
#[case(100, 100, 1, 0)]
#[case(250, 100, 2, 50)]
#[case(4097, 4096, 1, 1)]
#[case(7, 1, 7, 0)]
fn logical_addr_split(
    #[case] addr: u64,
    #[case] page_size: u64,
    #[case] page: u64,
    #[case] offset: u64,
) {
    assert_eq!(LogicalAddr::new(addr).split(page_size), (page, offset));
}

#[test]
fn phys_addr_from_frame() {
    assert_eq!(PhysAddr::from_frame(0, 100, 42), PhysAddr::new(42));
    assert_eq!(PhysAddr::from_frame(3, 100, 42).val(), 342);
}

#[test]
fn addresses_display_as_decimal() {
    assert_eq!(LogicalAddr::new(1030).to_string(), "1030");
    assert_eq!(PhysAddr::new(6).to_string(), "6");
}

#[test]
fn addresses_order_by_value() {
    assert!(PhysAddr::new(1) < PhysAddr::new(2));
    assert!(LogicalAddr::new(10) > LogicalAddr::new(9));
}
