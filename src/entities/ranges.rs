use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::vitals::Deviation;

/// Inclusive normal range for a single vital.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct VitalRange {
    pub min: f64,
    pub max: f64,
}

impl VitalRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bounds are inclusive: a value exactly at min or max is normal.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Direction of deviation, if the value falls outside the range.
    pub fn deviation_of(&self, value: f64) -> Option<Deviation> {
        if value > self.max {
            Some(Deviation::High)
        } else if value < self.min {
            Some(Deviation::Low)
        } else {
            None
        }
    }

    /// Display label, e.g. "60-100" or "18.5-24.9".
    pub fn label(&self) -> String {
        format!("{}-{}", fmt_bound(self.min), fmt_bound(self.max))
    }
}

fn fmt_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Normal ranges for the two sides of a blood pressure reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureRange {
    pub systolic: VitalRange,
    pub diastolic: VitalRange,
}

impl BloodPressureRange {
    /// Display label, e.g. "90-120/60-80 mmHg".
    pub fn label(&self) -> String {
        format!("{}/{} mmHg", self.systolic.label(), self.diastolic.label())
    }
}

/// Normal-range configuration shared by the classifier, the recommendation
/// evaluator, and the summary screen.
///
/// The shape is serde-loadable so deployments can override thresholds
/// without a rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRanges {
    #[serde(rename = "BMI")]
    pub bmi: VitalRange,
    pub blood_pressure: BloodPressureRange,
    pub temperature: VitalRange,
    pub heart_rate: VitalRange,
    pub sp_o2: VitalRange,
    pub glucose: VitalRange,
}

impl ReferenceRanges {
    /// Screening thresholds used by the questionnaire flow.
    ///
    /// This is the authoritative default profile; glucose is intentionally
    /// tolerant of non-fasting readings.
    pub const fn screening() -> Self {
        Self {
            bmi: VitalRange::new(18.5, 24.9),
            blood_pressure: BloodPressureRange {
                systolic: VitalRange::new(90.0, 120.0),
                diastolic: VitalRange::new(60.0, 80.0),
            },
            temperature: VitalRange::new(36.0, 37.2),
            heart_rate: VitalRange::new(60.0, 100.0),
            sp_o2: VitalRange::new(95.0, 100.0),
            glucose: VitalRange::new(70.0, 140.0),
        }
    }

    /// Monitoring thresholds: wider blood pressure bounds and a fasting
    /// glucose window, as used historically by the summary screen. Offered
    /// as a named alternative until the clinical owners settle on one set.
    pub const fn monitoring() -> Self {
        Self {
            bmi: VitalRange::new(18.5, 24.9),
            blood_pressure: BloodPressureRange {
                systolic: VitalRange::new(90.0, 140.0),
                diastolic: VitalRange::new(60.0, 90.0),
            },
            temperature: VitalRange::new(36.1, 37.2),
            heart_rate: VitalRange::new(60.0, 100.0),
            sp_o2: VitalRange::new(95.0, 100.0),
            glucose: VitalRange::new(70.0, 100.0),
        }
    }
}

impl Default for ReferenceRanges {
    fn default() -> Self {
        Self::screening()
    }
}
