//! Global Capacity Constants.
//!
//! Upper bounds on every table the simulator allocates. Configurations and
//! reference strings are checked against these before any state is touched.

/// Maximum number of logical pages in one address space.
pub const MAX_PAGES: usize = 50;

/// Maximum number of physical frames.
pub const MAX_FRAMES: usize = 20;

/// Maximum number of TLB slots.
pub const MAX_TLB: usize = 10;

/// Maximum length of a single page-reference string.
pub const MAX_REFERENCES: usize = 50;

/// Page-fault service time as a multiple of the memory access time.
///
/// No backing store is modeled, so servicing a fault costs one extra memory access.
pub const FAULT_SERVICE_FACTOR: f64 = 2.0;
