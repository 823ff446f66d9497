//! # Learned-classifier artifact
//!
//! Optional substitute for the rule engine: a linear softmax classifier
//! over four ordinal maintenance levels, persisted as JSON. Loading is
//! best-effort at startup; a missing or corrupt artifact is a degradation,
//! never an error. Per-call prediction faults are recovered by the caller
//! with a fixed neutral mid-level result.
//!
//! JSON shape:
//! {
//!   "classes": [
//!     { "level": "low", "weights": [w_len, w_lights, w_pothole, w_class], "bias": b },
//!     ...
//!   ]
//! }

use crate::priority::PriorityBand;
use crate::record::SegmentRecord;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Number of numeric features fed to the classifier.
pub const FEATURE_COUNT: usize = 4;

/// Ordinal severity levels the classifier distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceLevel {
    Low,
    Medium,
    High,
    Urgent,
}

impl MaintenanceLevel {
    /// Collapse the four ordinal levels onto the three presenter bands.
    /// Only `Urgent` drives the URGENT KPI; `High` still lands in the
    /// schedulable band.
    pub fn band(self) -> PriorityBand {
        match self {
            MaintenanceLevel::Low => PriorityBand::Monitoring,
            MaintenanceLevel::Medium | MaintenanceLevel::High => PriorityBand::Priority,
            MaintenanceLevel::Urgent => PriorityBand::Urgent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassWeights {
    pub level: MaintenanceLevel,
    pub weights: [f64; FEATURE_COUNT],
    pub bias: f64,
}

/// A pre-trained classifier loaded from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub classes: Vec<ClassWeights>,
}

/// Top-class outcome of one prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub level: MaintenanceLevel,
    /// Top-class probability in [0,1].
    pub probability: f64,
}

/// Numeric feature vector for one segment:
/// `[length_m, lighting_points, has_pothole, class_rank]`.
pub fn features(seg: &SegmentRecord) -> [f64; FEATURE_COUNT] {
    [
        seg.road_length_m,
        seg.lighting_point_count,
        if seg.has_pothole { 1.0 } else { 0.0 },
        seg.road_class.rank(),
    ]
}

impl ClassifierArtifact {
    /// Load and validate an artifact. The caller decides whether a failure
    /// is fatal; in this crate it never is (rule-mode fallback).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .with_context(|| format!("reading classifier artifact {}", path.display()))?;
        let artifact: ClassifierArtifact = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing classifier artifact {}", path.display()))?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.classes.is_empty() {
            bail!("classifier artifact has no classes");
        }
        for c in &self.classes {
            if !c.bias.is_finite() || c.weights.iter().any(|w| !w.is_finite()) {
                bail!("classifier artifact has non-finite weights");
            }
        }
        Ok(())
    }

    /// Softmax over per-class linear scores; returns the top class.
    /// Errors here are per-call faults the scorer recovers from.
    pub fn predict(&self, x: [f64; FEATURE_COUNT]) -> anyhow::Result<Prediction> {
        let mut scores = Vec::with_capacity(self.classes.len());
        for c in &self.classes {
            let s: f64 = c.bias + c.weights.iter().zip(x.iter()).map(|(w, v)| w * v).sum::<f64>();
            if !s.is_finite() {
                bail!("non-finite class score for level {:?}", c.level);
            }
            scores.push(s);
        }

        // Shift by the max before exponentiating to keep softmax stable.
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let denom: f64 = exps.iter().sum();
        if !(denom.is_finite() && denom > 0.0) {
            bail!("degenerate probability distribution");
        }

        let (top_idx, top_exp) = exps
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .ok_or_else(|| anyhow::anyhow!("empty class list"))?;

        Ok(Prediction {
            level: self.classes[top_idx].level,
            probability: top_exp / denom,
        })
    }
}
