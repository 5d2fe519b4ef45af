//! Text rendering of simulator results.
//!
//! Every function returns the finished text so the output format can be
//! tested without capturing stdout. Empty frames, invalid page-table entries
//! and empty TLB slots print as `-1`.

use std::fmt::Write as _;

use mmusim_core::mmu::{MemorySnapshot, TranslationOutcome, TranslationResult};
use mmusim_core::replacement::ReplacementReport;
use mmusim_core::stats::TlbStatistics;

fn slot<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-1".to_owned(), |v| v.to_string())
}

/// Page number, offset, lookup path and physical address of one translation.
pub fn translation(result: &TranslationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Page Number: {}", result.page_number);
    let _ = writeln!(out, "Offset: {}", result.offset);
    match result.outcome {
        TranslationOutcome::TlbHit => out.push_str("TLB HIT\n"),
        TranslationOutcome::PageTableHit => out.push_str("TLB MISS\n"),
        TranslationOutcome::PageFault => out.push_str("TLB MISS\nPage Fault Occurred!\n"),
    }
    let _ = writeln!(out, "Physical Address: {}", result.physical_address);
    out
}

/// TLB hit/miss summary, or the no-data message.
pub fn tlb_statistics(stats: Option<&TlbStatistics>) -> String {
    let Some(stats) = stats else {
        return "No memory access yet.\n".to_owned();
    };
    let mut out = String::new();
    let _ = writeln!(out, "TLB Hits: {}", stats.hits);
    let _ = writeln!(out, "TLB Misses: {}", stats.misses);
    let _ = writeln!(out, "Hit Ratio: {:.2}", stats.hit_ratio);
    let _ = writeln!(out, "Effective Memory Access Time: {:.2} ns", stats.emat);
    out
}

/// Per-step frame contents followed by the fault total and EMAT.
pub fn replacement(report: &ReplacementReport) -> String {
    let mut out = String::new();
    for step in &report.steps {
        let frames: Vec<String> = step.frames.iter().map(|f| slot(*f)).collect();
        let _ = writeln!(out, "Page {} -> {}", step.page, frames.join(" "));
    }
    let _ = writeln!(out, "Total Page Faults: {}", report.faults);
    let _ = writeln!(
        out,
        "Effective Memory Access Time ({}): {:.2} ns",
        report.policy, report.emat
    );
    out
}

/// One line per policy: faults, hits and EMAT.
pub fn comparison(reports: &[ReplacementReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:>6} {:>6} {:>10}", "Policy", "Faults", "Hits", "EMAT (ns)");
    for report in reports {
        let _ = writeln!(
            out,
            "{:<8} {:>6} {:>6} {:>10.2}",
            report.policy.to_string(),
            report.faults,
            report.hits,
            report.emat
        );
    }
    out
}

/// Page table, frames and TLB.
pub fn snapshot(snapshot: &MemorySnapshot) -> String {
    let mut out = String::from("Page Table:\n");
    for (page, frame) in snapshot.page_table.iter().enumerate() {
        let _ = writeln!(out, "Page {page} -> Frame {}", slot(*frame));
    }

    out.push_str("\nFrames:\n");
    let frames: Vec<String> = snapshot.frames.iter().map(|f| slot(*f)).collect();
    let _ = writeln!(out, "{}", frames.join(" "));

    out.push_str("\nTLB:\n");
    for entry in &snapshot.tlb {
        let _ = writeln!(
            out,
            "Page {} -> Frame {}",
            slot(entry.map(|e| e.page)),
            slot(entry.map(|e| e.frame))
        );
    }
    out
}
