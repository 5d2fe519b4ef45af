//! Common utilities and types used throughout the MMU simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Address Types:** Strong types for logical and physical addresses.
//! 2. **Constants:** Capacity bounds for pages, frames, TLB slots and reference strings.
//! 3. **Error Handling:** The crate-wide error enum and result alias.

/// Address type definitions (logical and physical addresses).
pub mod addr;

/// Capacity constants.
pub mod constants;

/// Error types.
pub mod error;

pub use addr::{LogicalAddr, PhysAddr};
pub use constants::{MAX_FRAMES, MAX_PAGES, MAX_REFERENCES, MAX_TLB};
pub use error::{Error, Result};
