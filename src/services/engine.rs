//! Engine façade binding the rule services to one shared range
//! configuration.

use tracing::instrument;

use crate::entities::questionnaire::{Answers, FollowUpQuestion};
use crate::entities::ranges::ReferenceRanges;
use crate::entities::recommendation::{Recommendation, RecommendationReport};
use crate::entities::summary::HealthSummary;
use crate::entities::vitals::{AbnormalityMap, VitalsReading};
use crate::services::{bmi, classifier, questionnaire, recommendations, scoring, summary};

/// Operations the kiosk UI drives, in session order: classify, question,
/// evaluate, summarize.
pub trait RulesEngine {
    /// Derive BMI from height (cm) and weight (kg); `None` when either is
    /// missing.
    fn compute_bmi(&self, height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64>;

    /// Classify each measured vital against its normal range.
    fn abnormal_vitals(&self, vitals: &VitalsReading) -> AbnormalityMap;

    /// Derive the follow-up questions for a set of abnormalities.
    fn follow_up_questions(&self, abnormalities: &AbnormalityMap) -> Vec<FollowUpQuestion>;

    /// Evaluate every recommendation rule for a reading and its answers.
    fn evaluate(&self, vitals: &VitalsReading, answers: &Answers) -> Vec<Recommendation>;

    /// Wellness score in [0, 100] for the measured vitals.
    fn wellness_score(&self, vitals: &VitalsReading) -> u8;

    /// Build the summary-screen snapshot for a reading.
    fn health_summary(&self, vitals: &VitalsReading) -> HealthSummary;
}

/// Rules engine bound to one reference-range configuration.
///
/// The engine holds no mutable state; a single instance can serve any number
/// of concurrent kiosk sessions.
#[derive(Debug, Clone, Default)]
pub struct WellnessEngine {
    ranges: ReferenceRanges,
}

impl WellnessEngine {
    pub fn new(ranges: ReferenceRanges) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &ReferenceRanges {
        &self.ranges
    }

    /// Evaluate and wrap the result in the shape handed to the external save
    /// operation, under a fresh session id.
    #[instrument(skip_all)]
    pub fn report(&self, vitals: &VitalsReading, answers: &Answers) -> RecommendationReport {
        RecommendationReport::new(self.evaluate(vitals, answers))
    }
}

impl RulesEngine for WellnessEngine {
    fn compute_bmi(&self, height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
        bmi::compute_bmi(height_cm, weight_kg)
    }

    #[instrument(skip_all)]
    fn abnormal_vitals(&self, vitals: &VitalsReading) -> AbnormalityMap {
        classifier::abnormal_vitals(vitals, &self.ranges)
    }

    fn follow_up_questions(&self, abnormalities: &AbnormalityMap) -> Vec<FollowUpQuestion> {
        questionnaire::follow_up_questions(abnormalities)
    }

    fn evaluate(&self, vitals: &VitalsReading, answers: &Answers) -> Vec<Recommendation> {
        recommendations::evaluate(vitals, answers, &self.ranges)
    }

    fn wellness_score(&self, vitals: &VitalsReading) -> u8 {
        scoring::wellness_score(vitals, &self.ranges)
    }

    #[instrument(skip_all)]
    fn health_summary(&self, vitals: &VitalsReading) -> HealthSummary {
        summary::health_summary(vitals, &self.ranges)
    }
}
