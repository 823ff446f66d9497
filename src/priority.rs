//! priority.rs — Output vocabulary: severity bands, action text, and the
//! result record returned to the presenting collaborator.

use serde::{Deserialize, Serialize};

/// Severity band of a scored segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityBand {
    #[serde(rename = "URGENT")]
    Urgent,
    Priority,
    Monitoring,
}

impl PriorityBand {
    /// Display/serialization label of the band.
    pub fn label(self) -> &'static str {
        match self {
            PriorityBand::Urgent => "URGENT",
            PriorityBand::Priority => "Priority",
            PriorityBand::Monitoring => "Monitoring",
        }
    }

    /// Recommended action, tied 1:1 to the band.
    pub fn recommended_action(self) -> &'static str {
        match self {
            PriorityBand::Urgent => "Immediate patching & reinforcement",
            PriorityBand::Priority => "Schedule resurfacing (next quarter)",
            PriorityBand::Monitoring => "Standard preventive maintenance",
        }
    }
}

/// Classification of one segment. Immutable; one per scoring call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityResult {
    /// Risk score in [0,100].
    pub risk_score: u8,
    #[serde(rename = "priorityLabel")]
    pub band: PriorityBand,
    #[serde(rename = "recommendedAction")]
    pub action: &'static str,
    /// Certainty in [0,100]; always 100 in rule mode.
    pub confidence: u8,
}

impl PriorityResult {
    pub fn new(risk_score: u8, band: PriorityBand, confidence: u8) -> Self {
        Self {
            risk_score: clamp100(risk_score),
            band,
            action: band.recommended_action(),
            confidence: clamp100(confidence),
        }
    }
}

fn clamp100(x: u8) -> u8 {
    x.min(100)
}
