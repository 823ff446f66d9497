//! # Priority scorer
//! Pure, testable logic that maps one `SegmentRecord` → `PriorityResult`.
//! No I/O on the scoring path, suitable for unit tests and batch reuse.
//!
//! Policy: additive rule scoring with fixed weights, clamped to [0,100],
//! then banded on inclusive cut points. An optional learned classifier can
//! replace the rule engine; the mode is chosen once at construction, never
//! per call.

use crate::config::ScorerConfig;
use crate::model::{features, ClassifierArtifact};
use crate::priority::{PriorityBand, PriorityResult};
use crate::record::{RoadClass, SegmentRecord};
use tracing::{debug, info, warn};

/// Rule weights — fixed by design, named so the table reads like the
/// maintenance policy it encodes.
const POTHOLE_POINTS: u32 = 50;
const PRIMARY_CLASS_POINTS: u32 = 20;
const SECONDARY_CLASS_POINTS: u32 = 10;
const UNLIT_STRETCH_POINTS: u32 = 15;
const LONG_STRETCH_POINTS: u32 = 10;

/// A stretch longer than this with fewer than `UNLIT_MAX_LIGHTS` lighting
/// points is a safety concern.
const UNLIT_MIN_LENGTH_M: f64 = 500.0;
const UNLIT_MAX_LIGHTS: f64 = 5.0;
/// Long stretches cost more and matter more.
const LONG_MIN_LENGTH_M: f64 = 2000.0;

/// Band cut points on the clamped score, inclusive on the upper band:
/// exactly 60 is URGENT, exactly 30 is Priority.
pub const URGENT_CUTOFF: u8 = 60;
pub const PRIORITY_CUTOFF: u8 = 30;

const MAX_RISK: u32 = 100;
const RULE_CONFIDENCE: u8 = 100;

/// Fixed neutral result substituted when a learned-mode prediction faults
/// at call time (mid level: Priority band).
const NEUTRAL_RISK: u8 = 50;
const NEUTRAL_CONFIDENCE: u8 = 50;

/// Additive rule score for one segment, clamped to [0,100].
/// All qualifying rules fire independently; only the class rules are
/// mutually exclusive (Primaire tested first).
pub fn rule_score(seg: &SegmentRecord) -> u8 {
    let mut score: u32 = 0;

    if seg.has_pothole {
        score += POTHOLE_POINTS;
    }

    match seg.road_class {
        RoadClass::Primaire => score += PRIMARY_CLASS_POINTS,
        RoadClass::Secondaire => score += SECONDARY_CLASS_POINTS,
        RoadClass::Tertiaire | RoadClass::Unspecified => {}
    }

    if seg.road_length_m > UNLIT_MIN_LENGTH_M && seg.lighting_point_count < UNLIT_MAX_LIGHTS {
        score += UNLIT_STRETCH_POINTS;
    }
    if seg.road_length_m > LONG_MIN_LENGTH_M {
        score += LONG_STRETCH_POINTS;
    }

    score.min(MAX_RISK) as u8
}

/// Band for a clamped risk score.
pub fn band_for(score: u8) -> PriorityBand {
    if score >= URGENT_CUTOFF {
        PriorityBand::Urgent
    } else if score >= PRIORITY_CUTOFF {
        PriorityBand::Priority
    } else {
        PriorityBand::Monitoring
    }
}

/// How a scorer produces results. Selected once at construction from
/// artifact availability; both modes are total functions.
#[derive(Debug, Clone)]
pub enum ScoringMode {
    Rules,
    Learned(ClassifierArtifact),
}

/// Stateless-per-call scorer. Its only state is the immutable mode;
/// `score` is reentrant and safe to share across threads.
#[derive(Debug, Clone)]
pub struct PriorityScorer {
    mode: ScoringMode,
}

impl Default for PriorityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityScorer {
    /// Rule-mode scorer.
    pub fn new() -> Self {
        Self {
            mode: ScoringMode::Rules,
        }
    }

    /// Learned-mode scorer with an already-loaded artifact.
    pub fn with_artifact(artifact: ClassifierArtifact) -> Self {
        Self {
            mode: ScoringMode::Learned(artifact),
        }
    }

    /// Build from configuration: try the artifact path if one is set, fall
    /// back to rule mode on any load failure. The fallback is logged as a
    /// degradation, not surfaced as an error.
    pub fn from_config(cfg: &ScorerConfig) -> Self {
        match &cfg.model_path {
            Some(path) => match ClassifierArtifact::load_from_file(path) {
                Ok(artifact) => {
                    info!(path = %path.display(), "classifier artifact loaded; learned mode");
                    Self::with_artifact(artifact)
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "classifier artifact unavailable; rule mode");
                    Self::new()
                }
            },
            None => Self::new(),
        }
    }

    pub fn is_learned(&self) -> bool {
        matches!(self.mode, ScoringMode::Learned(_))
    }

    /// Score one segment. Total: never fails, whatever the input or mode.
    pub fn score(&self, seg: &SegmentRecord) -> PriorityResult {
        match &self.mode {
            ScoringMode::Rules => {
                let risk = rule_score(seg);
                PriorityResult::new(risk, band_for(risk), RULE_CONFIDENCE)
            }
            ScoringMode::Learned(artifact) => match artifact.predict(features(seg)) {
                Ok(pred) => {
                    let pct = (pred.probability * 100.0).round().clamp(0.0, 100.0) as u8;
                    PriorityResult::new(pct, pred.level.band(), pct)
                }
                Err(e) => {
                    debug!(error = %e, "classifier prediction fault; neutral fallback");
                    PriorityResult::new(NEUTRAL_RISK, PriorityBand::Priority, NEUTRAL_CONFIDENCE)
                }
            },
        }
    }
}
