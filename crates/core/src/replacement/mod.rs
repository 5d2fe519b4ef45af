//! Page Replacement Simulator.
//!
//! Runs a page-reference string against a fresh set of frames under one of
//! the classic replacement algorithms and records every step.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//! - `Optimal`: Belady's MIN (farthest next use).
//!
//! Each run owns its frames. The live [`MemoryState`](crate::mmu::MemoryState)
//! is never read or written, so independent runs can execute in parallel.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Optimal (farthest next use) replacement policy.
pub mod optimal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::common::constants::{MAX_FRAMES, MAX_REFERENCES};
use crate::common::{Error, Result};
use crate::stats::emat;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

/// Trait for page replacement policies.
///
/// Defines the interface for updating usage state and selecting victim frames.
/// The simulator calls `touch` on every hit, and `victim` followed by
/// `installed` on every fault.
pub trait ReplacementPolicy {
    /// Updates the policy state when the page in `frame` is referenced again.
    fn touch(&mut self, frame: usize);

    /// Selects the frame that receives the faulting reference.
    ///
    /// # Arguments
    ///
    /// * `frames` - Current frame contents in index order.
    /// * `position` - Index of the faulting reference in the reference string.
    ///
    /// # Returns
    ///
    /// The index of the frame to fill (empty) or evict (occupied).
    fn victim(&mut self, frames: &[Option<u32>], position: usize) -> usize;

    /// Updates the policy state after a page has been placed in `frame`.
    fn installed(&mut self, frame: usize);
}

/// Replacement algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum PolicyKind {
    /// First-In, First-Out.
    Fifo,
    /// Least Recently Used.
    Lru,
    /// Farthest next use.
    Optimal,
}

impl PolicyKind {
    /// Every policy, in menu order.
    pub const ALL: [Self; 3] = [Self::Fifo, Self::Lru, Self::Optimal];
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fifo => write!(f, "FIFO"),
            Self::Lru => write!(f, "LRU"),
            Self::Optimal => write!(f, "Optimal"),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            "optimal" | "opt" | "min" => Ok(Self::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_owned())),
        }
    }
}

/// Frame contents and fault bookkeeping after one reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReplacementStep {
    /// Page referenced at this step.
    pub page: u32,
    /// Whether the reference faulted.
    pub fault: bool,
    /// Frame contents in index order after the reference; `None` is empty.
    pub frames: Vec<Option<u32>>,
    /// Faults so far, including this step.
    pub faults_so_far: usize,
}

/// Outcome of one replacement run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReplacementReport {
    /// Policy that produced the run.
    pub policy: PolicyKind,
    /// One entry per reference, in order.
    pub steps: Vec<ReplacementStep>,
    /// Total page faults.
    pub faults: usize,
    /// Total hits.
    pub hits: usize,
    /// Effective memory access time (ns).
    pub emat: f64,
}

impl ReplacementReport {
    /// `faults / references`.
    pub fn fault_rate(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        self.faults as f64 / self.steps.len() as f64
    }
}

/// One-shot replacement runner bound to a frame count and a memory access time.
#[derive(Clone, Copy, Debug)]
pub struct ReplacementSimulator {
    num_frames: usize,
    memory_access_time: f64,
}

impl ReplacementSimulator {
    /// Creates a simulator for `num_frames` frames.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReference`] if `num_frames` is outside
    /// `1..=MAX_FRAMES` or the access time is not a positive finite number.
    pub fn new(num_frames: usize, memory_access_time: f64) -> Result<Self> {
        if num_frames == 0 || num_frames > MAX_FRAMES {
            return Err(Error::InvalidReference(format!(
                "frame count must be in 1..={MAX_FRAMES}, got {num_frames}"
            )));
        }
        if !memory_access_time.is_finite() || memory_access_time <= 0.0 {
            return Err(Error::InvalidReference(format!(
                "memory access time must be positive, got {memory_access_time}"
            )));
        }
        Ok(Self {
            num_frames,
            memory_access_time,
        })
    }

    /// Number of frames each run uses.
    pub const fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// Runs `pages` under `kind`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReference`] for an empty reference string.
    /// * [`Error::ReferenceTooLong`] if `pages` exceeds [`MAX_REFERENCES`].
    ///
    /// Both are reported before the first step runs.
    pub fn run(&self, kind: PolicyKind, pages: &[u32]) -> Result<ReplacementReport> {
        validate_references(pages)?;
        let report = match kind {
            PolicyKind::Fifo => self.simulate(kind, pages, FifoPolicy::new(self.num_frames)),
            PolicyKind::Lru => self.simulate(kind, pages, LruPolicy::new(self.num_frames)),
            PolicyKind::Optimal => self.simulate(kind, pages, OptimalPolicy::new(pages)),
        };
        debug!(
            policy = %kind,
            references = pages.len(),
            frames = self.num_frames,
            faults = report.faults,
            emat = report.emat,
            "replacement run finished"
        );
        Ok(report)
    }

    /// Runs every policy on the same input, in [`PolicyKind::ALL`] order.
    ///
    /// # Errors
    ///
    /// Same as [`ReplacementSimulator::run`].
    pub fn compare(&self, pages: &[u32]) -> Result<Vec<ReplacementReport>> {
        PolicyKind::ALL
            .iter()
            .map(|&kind| self.run(kind, pages))
            .collect()
    }

    /// The shared hit/fault loop.
    fn simulate<P: ReplacementPolicy>(
        &self,
        kind: PolicyKind,
        pages: &[u32],
        mut policy: P,
    ) -> ReplacementReport {
        let mut frames: Vec<Option<u32>> = vec![None; self.num_frames];
        let mut steps = Vec::with_capacity(pages.len());
        let mut faults = 0;

        for (position, &page) in pages.iter().enumerate() {
            let resident = frames.iter().position(|&f| f == Some(page));
            let fault = match resident {
                Some(frame) => {
                    policy.touch(frame);
                    false
                }
                None => {
                    let frame = policy.victim(&frames, position);
                    trace!(policy = %kind, page, frame, evicted = ?frames[frame], "page fault");
                    frames[frame] = Some(page);
                    policy.installed(frame);
                    faults += 1;
                    true
                }
            };
            steps.push(ReplacementStep {
                page,
                fault,
                frames: frames.clone(),
                faults_so_far: faults,
            });
        }

        ReplacementReport {
            policy: kind,
            steps,
            faults,
            hits: pages.len() - faults,
            emat: emat::replacement(faults, pages.len(), self.memory_access_time),
        }
    }
}

fn validate_references(pages: &[u32]) -> Result<()> {
    if pages.is_empty() {
        return Err(Error::InvalidReference(
            "reference string is empty".to_owned(),
        ));
    }
    if pages.len() > MAX_REFERENCES {
        return Err(Error::ReferenceTooLong {
            len: pages.len(),
            max: MAX_REFERENCES,
        });
    }
    Ok(())
}

/// Runs `pages` under `policy` with `num_frames` fresh frames.
///
/// # Errors
///
/// See [`ReplacementSimulator::new`] and [`ReplacementSimulator::run`].
///
/// # Examples
///
/// ```
/// use mmusim_core::replacement::{run_replacement, PolicyKind};
///
/// let pages = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
/// let report = run_replacement(PolicyKind::Fifo, &pages, 3, 100.0).unwrap();
/// assert_eq!(report.faults, 9);
/// assert_eq!(report.emat, 175.0);
/// ```
pub fn run_replacement(
    policy: PolicyKind,
    pages: &[u32],
    num_frames: usize,
    memory_access_time: f64,
) -> Result<ReplacementReport> {
    ReplacementSimulator::new(num_frames, memory_access_time)?.run(policy, pages)
}
