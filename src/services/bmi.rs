//! Body-mass-index derivation.

/// Compute BMI from height in centimeters and weight in kilograms.
///
/// Returns `None` when either measurement is missing; an incomplete reading
/// is not an error. The result is rounded to one decimal place. Callers must
/// ensure height is positive; the engine does not guard against implausible
/// inputs.
pub fn compute_bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    let height_m = height_cm? / 100.0;
    let weight = weight_kg?;
    Some(round_to_tenth(weight / (height_m * height_m)))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_height_or_weight_yields_none() {
        assert_eq!(compute_bmi(None, Some(70.0)), None);
        assert_eq!(compute_bmi(Some(170.0), None), None);
        assert_eq!(compute_bmi(None, None), None);
    }

    #[test]
    fn computes_and_rounds_to_one_decimal() {
        // 70 / 1.7^2 = 24.221... -> 24.2
        assert_eq!(compute_bmi(Some(170.0), Some(70.0)), Some(24.2));
        // 65 / 1.6^2 = 25.390625 -> 25.4
        assert_eq!(compute_bmi(Some(160.0), Some(65.0)), Some(25.4));
        // 90 / 2.0^2 = 22.5 exactly
        assert_eq!(compute_bmi(Some(200.0), Some(90.0)), Some(22.5));
    }

    #[test]
    fn underweight_and_obese_extremes() {
        assert_eq!(compute_bmi(Some(180.0), Some(50.0)), Some(15.4));
        assert_eq!(compute_bmi(Some(165.0), Some(110.0)), Some(40.4));
    }
}
