//! Abnormality classification against the shared reference ranges.

use tracing::debug;

use crate::entities::ranges::ReferenceRanges;
use crate::entities::vitals::{AbnormalityMap, Deviation, Vital, VitalsReading};
use crate::services::bmi::compute_bmi;

/// Classify each measured vital as high or low against its normal range.
///
/// Vitals without a reading are omitted from the result, as are vitals
/// within range. The classification is a pure function of its inputs:
/// identical readings always produce an identical map.
pub fn abnormal_vitals(vitals: &VitalsReading, ranges: &ReferenceRanges) -> AbnormalityMap {
    let mut abnormalities = AbnormalityMap::new();

    if let Some(bmi) = compute_bmi(vitals.height, vitals.weight) {
        if let Some(deviation) = ranges.bmi.deviation_of(bmi) {
            abnormalities.insert(Vital::Bmi, deviation);
        }
    }

    // Blood pressure is only evaluated when both sides were measured. The
    // high branch is checked first: either bound crossing upward flags the
    // whole reading as high.
    if let Some((systolic, diastolic)) = vitals.blood_pressure.pair() {
        let bp = &ranges.blood_pressure;
        if f64::from(systolic) > bp.systolic.max || f64::from(diastolic) > bp.diastolic.max {
            abnormalities.insert(Vital::BloodPressure, Deviation::High);
        } else if f64::from(systolic) < bp.systolic.min || f64::from(diastolic) < bp.diastolic.min
        {
            abnormalities.insert(Vital::BloodPressure, Deviation::Low);
        }
    }

    if let Some(rate) = vitals.heart_rate {
        if let Some(deviation) = ranges.heart_rate.deviation_of(f64::from(rate)) {
            abnormalities.insert(Vital::HeartRate, deviation);
        }
    }

    if let Some(temperature) = vitals.temperature {
        if let Some(deviation) = ranges.temperature.deviation_of(temperature) {
            abnormalities.insert(Vital::Temperature, deviation);
        }
    }

    // Saturation cannot exceed 100%, so only a low reading is abnormal.
    if let Some(sp_o2) = vitals.sp_o2 {
        if f64::from(sp_o2) < ranges.sp_o2.min {
            abnormalities.insert(Vital::SpO2, Deviation::Low);
        }
    }

    if let Some(glucose) = vitals.glucose {
        if let Some(deviation) = ranges.glucose.deviation_of(f64::from(glucose)) {
            abnormalities.insert(Vital::Glucose, deviation);
        }
    }

    for (vital, deviation) in &abnormalities {
        debug!(%vital, ?deviation, "vital outside normal range");
    }

    abnormalities
}
