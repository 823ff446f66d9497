//! record.rs — Canonical per-segment input record and lenient value parsing.
//!
//! The scorer never sees raw spreadsheet noise: by the time a
//! `SegmentRecord` exists, every field has been parsed with degrade-to-zero
//! semantics. Nothing in this module can fail — unparseable numbers become
//! 0.0, unknown class text becomes `Unspecified`, and the pothole flag is
//! only set by an explicit affirmative token.

use serde::{Deserialize, Serialize};

/// Administrative road class of a segment.
///
/// Matching is ordered: "primaire" is tested before "secondaire", so a
/// value containing both only ever counts as `Primaire`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoadClass {
    Primaire,
    Secondaire,
    Tertiaire,
    #[default]
    Unspecified,
}

impl RoadClass {
    /// Ordinal rank used as a numeric feature in learned mode
    /// (higher = more important road).
    pub fn rank(self) -> f64 {
        match self {
            RoadClass::Primaire => 3.0,
            RoadClass::Secondaire => 2.0,
            RoadClass::Tertiaire => 1.0,
            RoadClass::Unspecified => 0.0,
        }
    }
}

/// One road/street stretch as handed to the scorer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// Segment length in meters; 0.0 when missing or unparseable.
    pub road_length_m: f64,
    pub road_class: RoadClass,
    /// Number of lighting points on the stretch; 0.0 when missing.
    pub lighting_point_count: f64,
    pub has_pothole: bool,
}

/// Parse a free-text length/count cell. Accepts a comma decimal separator
/// (French spreadsheets); anything unparseable or negative degrades to 0.0.
pub fn parse_quantity(raw: &str) -> f64 {
    let cleaned = raw.trim().replace(',', ".");
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Parse free-text road class. Trim + casefold, then ordered containment.
pub fn parse_class(raw: &str) -> RoadClass {
    let s = raw.trim().to_lowercase();
    if s.contains("primaire") {
        RoadClass::Primaire
    } else if s.contains("secondaire") {
        RoadClass::Secondaire
    } else if s.contains("tertiaire") {
        RoadClass::Tertiaire
    } else {
        RoadClass::Unspecified
    }
}

/// Pothole flag. Only explicit affirmative tokens count; a non-empty cell
/// holding "non" is NOT a pothole. (The observed data mixes French and
/// English entry habits, hence the bilingual token set.)
pub fn parse_pothole(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "oui" | "yes" | "vrai" | "true" | "1"
    )
}
