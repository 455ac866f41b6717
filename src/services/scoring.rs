//! Wellness score derivation.

use crate::entities::ranges::ReferenceRanges;
use crate::entities::summary::WellnessStatus;
use crate::entities::vitals::VitalsReading;
use crate::services::bmi::compute_bmi;
use crate::services::classifier::abnormal_vitals;

/// Count the vitals the classifier can evaluate for this reading.
pub(crate) fn measured_count(vitals: &VitalsReading) -> usize {
    let scalars = [
        compute_bmi(vitals.height, vitals.weight).is_some(),
        vitals.blood_pressure.pair().is_some(),
        vitals.heart_rate.is_some(),
        vitals.temperature.is_some(),
        vitals.sp_o2.is_some(),
        vitals.glucose.is_some(),
    ];
    scalars.into_iter().filter(|measured| *measured).count()
}

/// Wellness score in [0, 100]: the rounded share of measured vitals that are
/// within their normal range. Unmeasured vitals are excluded entirely; a
/// reading with nothing measured scores 0.
pub fn wellness_score(vitals: &VitalsReading, ranges: &ReferenceRanges) -> u8 {
    let measured = measured_count(vitals);
    if measured == 0 {
        return 0;
    }
    let abnormal = abnormal_vitals(vitals, ranges).len();
    let normal = measured - abnormal;
    ((normal as f64 / measured as f64) * 100.0).round() as u8
}

/// Score and band in one step, for callers that only show the banding.
pub fn wellness_status(vitals: &VitalsReading, ranges: &ReferenceRanges) -> WellnessStatus {
    WellnessStatus::from_score(wellness_score(vitals, ranges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::reading;

    fn score(vitals: &VitalsReading) -> u8 {
        wellness_score(vitals, &ReferenceRanges::screening())
    }

    #[test]
    fn all_normal_scores_100() {
        assert_eq!(score(&reading::normal()), 100);
    }

    #[test]
    fn no_measurements_scores_zero() {
        assert_eq!(score(&VitalsReading::default()), 0);
    }

    #[test]
    fn partial_reading_only_counts_measured_vitals() {
        // two vitals measured, one abnormal -> 50
        let vitals = reading::builder().heart_rate(120).glucose(90).build();
        assert_eq!(score(&vitals), 50);
    }

    #[test]
    fn score_rounds_to_nearest_integer() {
        // six measured, one abnormal -> 5/6 = 83.33 -> 83
        let vitals = reading::builder()
            .height(170.0)
            .weight(70.0)
            .blood_pressure(150, 95)
            .temperature(36.6)
            .heart_rate(72)
            .sp_o2(98)
            .glucose(90)
            .build();
        assert_eq!(score(&vitals), 83);

        // three measured, two abnormal -> 1/3 = 33.33 -> 33
        let vitals = reading::builder()
            .heart_rate(120)
            .glucose(180)
            .temperature(36.6)
            .build();
        assert_eq!(score(&vitals), 33);
    }

    #[test]
    fn partial_blood_pressure_is_not_counted_as_measured() {
        use crate::entities::vitals::BloodPressureValue;

        let vitals = VitalsReading {
            blood_pressure: BloodPressureValue {
                systolic: Some(150),
                diastolic: None,
            },
            heart_rate: Some(72),
            ..VitalsReading::default()
        };
        // only the heart rate counts, and it is normal
        assert_eq!(score(&vitals), 100);
    }

    #[test]
    fn status_derives_from_the_score() {
        let status = wellness_status(&reading::normal(), &ReferenceRanges::screening());
        assert_eq!(status, WellnessStatus::Excellent);

        let vitals = reading::builder().heart_rate(120).glucose(180).build();
        let status = wellness_status(&vitals, &ReferenceRanges::screening());
        assert_eq!(status, WellnessStatus::NeedsAttention);
    }
}
