// Reviva Wellness Engine
// This crate contains the vitals rules engine for the Reviva kiosk:
// abnormality classification, follow-up question generation, recommendation
// evaluation, and wellness scoring.

// Domain entities and value objects
pub mod entities;

// Services that implement the rules
pub mod services;

// Testing utilities - available in unit tests and with the mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;

// Re-export common types for easier imports
pub use entities::questionnaire::{
    AnswerDecodeError, Answers, Confirmation, DietaryIntake, ExerciseHabits, FollowUpQuestion,
    QuestionOption, SymptomSeverity, ThyroidHistory, WeightChangeSeverity,
};
pub use entities::ranges::{BloodPressureRange, ReferenceRanges, VitalRange};
pub use entities::recommendation::{
    Recommendation, RecommendationReport, SaveGuardError, SaveOnceGuard, SaveTicket,
};
pub use entities::summary::{HealthSummary, VitalSummary, WellnessStatus};
pub use entities::vitals::{
    AbnormalityMap, BloodPressureValue, Deviation, Vital, VitalsReading,
};
pub use services::bmi::compute_bmi;
pub use services::engine::{RulesEngine, WellnessEngine};

/// Classify a reading against the default screening ranges.
pub fn get_abnormal_vitals(vitals: &VitalsReading) -> AbnormalityMap {
    services::classifier::abnormal_vitals(vitals, &ReferenceRanges::screening())
}

/// Derive the follow-up questions for a set of abnormalities.
pub fn generate_follow_up_questions(abnormalities: &AbnormalityMap) -> Vec<FollowUpQuestion> {
    services::questionnaire::follow_up_questions(abnormalities)
}

/// Evaluate all recommendation rules against the default screening ranges.
pub fn evaluate_recommendations(
    vitals: &VitalsReading,
    answers: &Answers,
) -> Vec<Recommendation> {
    services::recommendations::evaluate(vitals, answers, &ReferenceRanges::screening())
}
