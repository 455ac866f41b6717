//! Test fixtures and builders.
//!
//! Compiled into the crate's own unit tests, and exposed to downstream
//! consumers (the API layer's test suites) through the `mock` feature.

pub mod reading {
    use crate::entities::vitals::{BloodPressureValue, VitalsReading};

    /// Builder for assembling partial readings in tests.
    #[derive(Debug, Default)]
    pub struct VitalsReadingBuilder {
        reading: VitalsReading,
    }

    impl VitalsReadingBuilder {
        pub fn height(mut self, cm: f64) -> Self {
            self.reading.height = Some(cm);
            self
        }

        pub fn weight(mut self, kg: f64) -> Self {
            self.reading.weight = Some(kg);
            self
        }

        pub fn blood_pressure(mut self, systolic: u16, diastolic: u16) -> Self {
            self.reading.blood_pressure = BloodPressureValue::new(systolic, diastolic);
            self
        }

        pub fn temperature(mut self, celsius: f64) -> Self {
            self.reading.temperature = Some(celsius);
            self
        }

        pub fn heart_rate(mut self, bpm: u16) -> Self {
            self.reading.heart_rate = Some(bpm);
            self
        }

        pub fn sp_o2(mut self, percent: u8) -> Self {
            self.reading.sp_o2 = Some(percent);
            self
        }

        pub fn glucose(mut self, mg_dl: u16) -> Self {
            self.reading.glucose = Some(mg_dl);
            self
        }

        pub fn build(self) -> VitalsReading {
            self.reading
        }
    }

    pub fn builder() -> VitalsReadingBuilder {
        VitalsReadingBuilder::default()
    }

    /// A reading with every vital measured and within range.
    pub fn normal() -> VitalsReading {
        builder()
            .height(170.0)
            .weight(70.0)
            .blood_pressure(110, 70)
            .temperature(36.6)
            .heart_rate(72)
            .sp_o2(98)
            .glucose(90)
            .build()
    }

    /// High BMI and high blood pressure, everything else normal.
    pub fn hypertensive_overweight() -> VitalsReading {
        builder()
            .height(170.0)
            .weight(95.0)
            .blood_pressure(150, 95)
            .temperature(36.6)
            .heart_rate(72)
            .sp_o2(98)
            .glucose(90)
            .build()
    }
}
