// Domain entities and value objects
pub mod questionnaire;
pub mod ranges;
pub mod recommendation;
pub mod summary;
pub mod vitals;

// Re-export common types for easier imports
pub use questionnaire::{Answers, FollowUpQuestion, QuestionOption};
pub use ranges::{BloodPressureRange, ReferenceRanges, VitalRange};
pub use recommendation::{Recommendation, RecommendationReport, SaveOnceGuard};
pub use summary::{HealthSummary, VitalSummary, WellnessStatus};
pub use vitals::{AbnormalityMap, BloodPressureValue, Deviation, Vital, VitalsReading};
