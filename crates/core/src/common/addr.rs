//! Logical and Physical Address types.
//!
//! This module defines strong types for logical and physical addresses to prevent
//! accidental mixing of address spaces. It provides the following:
//! 1. **Type Safety:** Distinguishes between logical and physical addresses at compile time.
//! 2. **Address Decomposition:** Splits a logical address into page number and offset.
//! 3. **MMU Integration:** Acts as the primary interface for translation operations.

use serde::Serialize;

/// A logical address as issued by a program.
///
/// Logical addresses must be translated to physical addresses through the
/// memory state (TLB, page table, frame table) before they refer to memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LogicalAddr(pub u64);

/// A physical address in main memory.
///
/// Physical addresses are produced by a completed translation:
/// `frame * page_size + offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PhysAddr(pub u64);

impl LogicalAddr {
    /// Creates a new logical address from a raw value.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw address value.
    #[inline(always)]
    pub const fn val(&self) -> u64 {
        self.0
    }

    /// Splits the address into `(page_number, offset)` for the given page size.
    ///
    /// # Arguments
    ///
    /// * `page_size` - Page size in bytes; must be non-zero (enforced by
    ///   [`Config::validate`](crate::config::Config::validate)).
    pub const fn split(&self, page_size: u64) -> (u64, u64) {
        (self.0 / page_size, self.0 % page_size)
    }
}

impl PhysAddr {
    /// Creates a new physical address from a raw value.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Builds the physical address of `offset` inside `frame`.
    #[inline(always)]
    pub const fn from_frame(frame: usize, page_size: u64, offset: u64) -> Self {
        Self(frame as u64 * page_size + offset)
    }

    /// Returns the raw address value.
    #[inline(always)]
    pub const fn val(&self) -> u64 {
        self.0
    }
}

impl From<u64> for LogicalAddr {
    fn from(addr: u64) -> Self {
        Self(addr)
    }
}

impl std::fmt::Display for LogicalAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
