//! Health-summary snapshot for the kiosk's summary screen.
//!
//! One card per evaluable vital: formatted value, the normal-range label
//! rendered from the same configuration the classifier uses, and a tip line
//! chosen by the reading's direction.

use chrono::Utc;

use crate::entities::ranges::ReferenceRanges;
use crate::entities::summary::{HealthSummary, VitalSummary, WellnessStatus};
use crate::entities::vitals::{AbnormalityMap, Deviation, Vital, VitalsReading};
use crate::services::bmi::compute_bmi;
use crate::services::classifier::abnormal_vitals;
use crate::services::scoring::{measured_count, wellness_score};

/// Build the summary-screen snapshot for a reading.
pub fn health_summary(vitals: &VitalsReading, ranges: &ReferenceRanges) -> HealthSummary {
    let abnormalities = abnormal_vitals(vitals, ranges);
    let score = wellness_score(vitals, ranges);

    let cards = Vital::ALL
        .iter()
        .map(|&vital| card(vital, vitals, ranges, &abnormalities))
        .collect();

    HealthSummary {
        score,
        status: WellnessStatus::from_score(score),
        measured_count: measured_count(vitals),
        abnormal_count: abnormalities.len(),
        vitals: cards,
        generated_at: Utc::now(),
    }
}

fn card(
    vital: Vital,
    vitals: &VitalsReading,
    ranges: &ReferenceRanges,
    abnormalities: &AbnormalityMap,
) -> VitalSummary {
    let value = formatted_value(vital, vitals);
    let deviation = abnormalities.get(&vital).copied();

    VitalSummary {
        vital,
        abnormal: deviation.is_some(),
        normal: normal_label(vital, ranges),
        tip: tip(vital, value.is_some(), deviation).to_string(),
        value,
    }
}

fn formatted_value(vital: Vital, vitals: &VitalsReading) -> Option<String> {
    match vital {
        Vital::Bmi => compute_bmi(vitals.height, vitals.weight).map(|bmi| format!("{bmi}")),
        Vital::BloodPressure => vitals
            .blood_pressure
            .pair()
            .map(|(systolic, diastolic)| format!("{systolic}/{diastolic} mmHg")),
        Vital::HeartRate => vitals.heart_rate.map(|rate| format!("{rate} bpm")),
        Vital::Temperature => vitals.temperature.map(|celsius| format!("{celsius}°C")),
        Vital::SpO2 => vitals.sp_o2.map(|percent| format!("{percent}%")),
        Vital::Glucose => vitals.glucose.map(|level| format!("{level} mg/dL")),
    }
}

fn normal_label(vital: Vital, ranges: &ReferenceRanges) -> String {
    match vital {
        Vital::Bmi => ranges.bmi.label(),
        Vital::BloodPressure => ranges.blood_pressure.label(),
        Vital::HeartRate => format!("{} bpm", ranges.heart_rate.label()),
        Vital::Temperature => format!("{}°C", ranges.temperature.label()),
        Vital::SpO2 => format!("{}%", ranges.sp_o2.label()),
        Vital::Glucose => format!("{} mg/dL", ranges.glucose.label()),
    }
}

fn tip(vital: Vital, measured: bool, deviation: Option<Deviation>) -> &'static str {
    if !measured {
        return "No measurement was captured during this session.";
    }
    match (vital, deviation) {
        (Vital::Bmi, Some(Deviation::High)) => {
            "Focus on balanced nutrition and regular physical activity."
        }
        (Vital::Bmi, Some(Deviation::Low)) => {
            "Consider a balanced diet with adequate calories to reach a healthy weight."
        }
        (Vital::Bmi, None) => "Your BMI is within the healthy range. Maintain your healthy lifestyle!",

        (Vital::BloodPressure, Some(Deviation::High)) => {
            "Consider reducing sodium intake, regular exercise, and stress management techniques."
        }
        (Vital::BloodPressure, Some(Deviation::Low)) => {
            "Low blood pressure may cause dizziness. Stay hydrated and consult with a healthcare provider."
        }
        (Vital::BloodPressure, None) => {
            "Your blood pressure is within normal range, reflecting good cardiovascular health."
        }

        (Vital::HeartRate, Some(Deviation::High)) => {
            "Elevated heart rate may indicate stress or anxiety. Practice relaxation techniques and moderate exercise."
        }
        (Vital::HeartRate, Some(Deviation::Low)) => {
            "Low resting heart rate may indicate good fitness, but if accompanied by symptoms, consult a doctor."
        }
        (Vital::HeartRate, None) => {
            "Your heart rate is within normal range, indicating good cardiovascular health."
        }

        (Vital::Temperature, Some(Deviation::High)) => {
            "Elevated temperature may indicate infection or illness. Rest and stay hydrated."
        }
        (Vital::Temperature, Some(Deviation::Low)) => {
            "Low body temperature may need medical attention if persistent."
        }
        (Vital::Temperature, None) => "Your temperature is normal, indicating good health.",

        // saturation never classifies high
        (Vital::SpO2, Some(_)) => {
            "Low oxygen levels require medical attention. Practice deep breathing and avoid high altitudes."
        }
        (Vital::SpO2, None) => {
            "Your oxygen levels are excellent, indicating good respiratory function."
        }

        (Vital::Glucose, Some(Deviation::High)) => {
            "Consider reducing simple carbohydrates and sugar intake. Regular exercise can help lower blood glucose."
        }
        (Vital::Glucose, Some(Deviation::Low)) => {
            "Low blood sugar may cause weakness. Consider having a small, balanced snack."
        }
        (Vital::Glucose, None) => {
            "Your glucose levels are healthy, indicating good metabolic function."
        }
    }
}
