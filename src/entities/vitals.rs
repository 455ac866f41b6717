use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// A single evaluable vital sign.
///
/// Declaration order is the engine's fixed evaluation order; the derived
/// `Ord` and the `AbnormalityMap` key order both rely on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub enum Vital {
    /// Body-mass index derived from height and weight
    #[serde(rename = "BMI")]
    Bmi,

    /// Systolic/diastolic blood pressure in mmHg
    BloodPressure,

    /// Resting heart rate in beats per minute
    HeartRate,

    /// Body temperature in °C
    Temperature,

    /// Peripheral oxygen saturation percentage
    #[serde(rename = "spO2")]
    SpO2,

    /// Blood glucose in mg/dL
    Glucose,
}

impl Vital {
    /// All vitals in evaluation order.
    pub const ALL: [Vital; 6] = [
        Vital::Bmi,
        Vital::BloodPressure,
        Vital::HeartRate,
        Vital::Temperature,
        Vital::SpO2,
        Vital::Glucose,
    ];

    /// Display label used on recommendation and summary cards.
    pub fn label(&self) -> &'static str {
        match self {
            Vital::Bmi => "BMI",
            Vital::BloodPressure => "Blood Pressure",
            Vital::HeartRate => "Heart Rate",
            Vital::Temperature => "Temperature",
            Vital::SpO2 => "Oxygen Saturation",
            Vital::Glucose => "Blood Sugar",
        }
    }
}

impl fmt::Display for Vital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of a vital's deviation from its normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Deviation {
    High,
    Low,
}

/// Map from vital to deviation.
///
/// A missing key means the vital was normal or not measured. Iteration
/// follows the fixed evaluation order of [`Vital`].
pub type AbnormalityMap = BTreeMap<Vital, Deviation>;

/// Systolic/diastolic pair. Either side may be missing when entry was
/// partial; the classifier only evaluates blood pressure when both are
/// present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureValue {
    /// Systolic blood pressure (the higher number)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 40, max = 300, message = "Systolic must be between 40 and 300"))]
    pub systolic: Option<u16>,

    /// Diastolic blood pressure (the lower number)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 20, max = 200, message = "Diastolic must be between 20 and 200"))]
    pub diastolic: Option<u16>,
}

impl BloodPressureValue {
    /// Build a complete reading.
    pub fn new(systolic: u16, diastolic: u16) -> Self {
        Self {
            systolic: Some(systolic),
            diastolic: Some(diastolic),
        }
    }

    /// Both sides of the reading, when the measurement is complete.
    pub fn pair(&self) -> Option<(u16, u16)> {
        Some((self.systolic?, self.diastolic?))
    }
}

/// The set of measured values captured in one kiosk session.
///
/// Every field is optional: a missing value means the vital was not measured
/// and is treated as "not evaluated", never as zero or abnormal. The
/// plausibility bounds are a tool for the capture boundary; the engine itself
/// only performs presence checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct VitalsReading {
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 40.0, max = 250.0, message = "Height must be between 40 and 250 cm"))]
    pub height: Option<f64>,

    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 20.0, max = 500.0, message = "Weight must be between 20 and 500 kg"))]
    pub weight: Option<f64>,

    /// Blood pressure in mmHg
    #[validate]
    pub blood_pressure: BloodPressureValue,

    /// Body temperature in °C
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 30.0, max = 45.0, message = "Temperature must be between 30 and 45 °C"))]
    pub temperature: Option<f64>,

    /// Resting heart rate in beats per minute
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 20, max = 250, message = "Heart rate must be between 20 and 250 bpm"))]
    pub heart_rate: Option<u16>,

    /// Peripheral oxygen saturation percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 100, message = "SpO2 must be between 1 and 100%"))]
    pub sp_o2: Option<u8>,

    /// Blood glucose in mg/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 10, max = 1000, message = "Glucose must be between 10 and 1000 mg/dL"))]
    pub glucose: Option<u16>,
}
