use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::vitals::Vital;

/// Overall wellness banding derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub enum WellnessStatus {
    Excellent,
    Good,
    Fair,
    NeedsAttention,
}

impl WellnessStatus {
    /// Band a 0-100 wellness score.
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            WellnessStatus::Excellent
        } else if score >= 75 {
            WellnessStatus::Good
        } else if score >= 60 {
            WellnessStatus::Fair
        } else {
            WellnessStatus::NeedsAttention
        }
    }

    /// Text shown beside the score on the summary screen.
    pub fn label(&self) -> &'static str {
        match self {
            WellnessStatus::Excellent => "Excellent",
            WellnessStatus::Good => "Good",
            WellnessStatus::Fair => "Fair",
            WellnessStatus::NeedsAttention => "Needs Attention",
        }
    }
}

/// One card on the health-summary screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VitalSummary {
    pub vital: Vital,

    /// Formatted reading with units; `None` when the vital was not measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Display label for the normal range
    pub normal: String,

    /// Whether the reading fell outside the normal range
    pub abnormal: bool,

    /// Guidance line for the card, chosen by the reading's direction
    pub tip: String,
}

/// Snapshot handed to the summary screen: score, banding, and one card per
/// evaluable vital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HealthSummary {
    /// Wellness score in [0, 100]
    pub score: u8,

    /// Banding derived from the score
    pub status: WellnessStatus,

    /// Vitals that produced an evaluable reading this session
    pub measured_count: usize,

    /// Measured vitals that fell outside their normal range
    pub abnormal_count: usize,

    /// Per-vital cards in evaluation order
    pub vitals: Vec<VitalSummary>,

    /// When the snapshot was generated
    pub generated_at: DateTime<Utc>,
}
