//! Error definitions.
//!
//! Every fallible operation in the simulator reports failure through [`Error`].
//! None of these are fatal to the process:
//! 1. **Configuration:** `InvalidConfiguration` rejects a setup before any state exists.
//! 2. **Translation:** `AddressOutOfRange` and `FrameTableExhausted` fail a single lookup.
//! 3. **Replacement:** `InvalidReference` and `ReferenceTooLong` reject a run before its first step.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Simulator error types.
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value is non-positive, non-finite or exceeds a capacity bound.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },

    /// The logical address maps to a page beyond the configured page count.
    #[error("logical address {address} maps to page {page}, but only {num_pages} pages exist")]
    AddressOutOfRange {
        /// The rejected logical address.
        address: u64,
        /// Page number derived from the address.
        page: u64,
        /// Configured number of pages.
        num_pages: usize,
    },

    /// A page fault could not be serviced because every frame is occupied.
    #[error("page fault on page {page} cannot be serviced: all {num_frames} frames are occupied")]
    FrameTableExhausted {
        /// Page that faulted.
        page: usize,
        /// Configured number of frames.
        num_frames: usize,
    },

    /// A replacement run was given an unusable reference string or frame count.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// The reference string is longer than the simulator accepts.
    #[error("reference string has {len} entries, maximum is {max}")]
    ReferenceTooLong {
        /// Supplied length.
        len: usize,
        /// Accepted maximum.
        max: usize,
    },

    /// A replacement policy name did not match any known policy.
    #[error("unknown replacement policy `{0}` (expected fifo, lru or optimal)")]
    UnknownPolicy(String),

    /// A JSON configuration could not be parsed.
    #[error("configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidConfiguration`].
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// Returns `true` if the caller can retry with corrected input against the same state.
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidConfiguration { .. } | Self::Json(_))
    }
}
