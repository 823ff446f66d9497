//! batch.rs — Convenience helpers for the presenting collaborator: score a
//! working set, order it for display, and compute the URGENT KPI.
//! The scorer itself imposes no ordering; this module does.

use crate::normalize::{segment_from_row, RawRow};
use crate::priority::{PriorityBand, PriorityResult};
use crate::record::SegmentRecord;
use crate::scorer::PriorityScorer;
use serde::Serialize;

/// One scored segment, kept with its input for tabular display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSegment {
    pub segment: SegmentRecord,
    pub result: PriorityResult,
}

/// Score a working set and sort it descending by risk. The sort is stable,
/// so equal-risk segments keep their input order.
pub fn score_all(scorer: &PriorityScorer, segments: &[SegmentRecord]) -> Vec<ScoredSegment> {
    let mut scored: Vec<ScoredSegment> = segments
        .iter()
        .map(|seg| ScoredSegment {
            segment: seg.clone(),
            result: scorer.score(seg),
        })
        .collect();
    scored.sort_by(|a, b| b.result.risk_score.cmp(&a.result.risk_score));
    scored
}

/// Normalize raw spreadsheet rows, then score and order them.
pub fn score_rows(scorer: &PriorityScorer, rows: &[RawRow]) -> Vec<ScoredSegment> {
    let segments: Vec<SegmentRecord> = rows.iter().map(segment_from_row).collect();
    score_all(scorer, &segments)
}

/// Dashboard KPI: number of URGENT records in a scored set.
pub fn urgent_count(scored: &[ScoredSegment]) -> usize {
    scored
        .iter()
        .filter(|s| s.result.band == PriorityBand::Urgent)
        .count()
}
