// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod batch;
pub mod config;
pub mod model;
pub mod normalize;
pub mod priority;
pub mod record;
pub mod scorer;

// ---- Re-exports for stable public API ----
pub use crate::batch::{score_all, score_rows, urgent_count, ScoredSegment};
pub use crate::config::ScorerConfig;
pub use crate::model::{ClassifierArtifact, MaintenanceLevel};
pub use crate::normalize::{segment_from_row, RawRow};
pub use crate::priority::{PriorityBand, PriorityResult};
pub use crate::record::{RoadClass, SegmentRecord};
pub use crate::scorer::{band_for, rule_score, PriorityScorer, ScoringMode};
