use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::vitals::Vital;

/// One selectable answer for a follow-up question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct QuestionOption {
    /// Machine value submitted back by the questionnaire UI
    pub value: String,

    /// Text shown on the kiosk button
    pub label: String,

    /// Optional clarifying text under the label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A follow-up question derived from an abnormal vital, ready for the
/// questionnaire UI to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct FollowUpQuestion {
    /// The abnormal vital this question probes
    pub vital: Vital,

    /// Stable key identifying the question within its vital
    pub key: String,

    /// Question text
    pub text: String,

    /// Choices offered to the user
    pub options: Vec<QuestionOption>,
}

/// Yes / no / unsure selection used by most follow-up questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Confirmation {
    Yes,
    No,
    Unsure,
}

/// Weekly exercise frequency reported for a high BMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ExerciseHabits {
    None,
    Light,
    Moderate,
    Active,
}

/// How pronounced recent unintended weight loss has been.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum WeightChangeSeverity {
    None,
    Mild,
    Moderate,
    Significant,
}

/// Self-reported adequacy of daily calorie intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum DietaryIntake {
    Sufficient,
    Insufficient,
    Unsure,
}

/// Severity scale for symptom questions (shortness of breath, low-sugar
/// symptoms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SymptomSeverity {
    None,
    Mild,
    Moderate,
    Severe,
}

/// Known or suspected thyroid involvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ThyroidHistory {
    Yes,
    No,
    Suspected,
}

/// Answers to the BMI follow-up questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct BmiAnswers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_history_obesity: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_habits: Option<ExerciseHabits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unintended_weight_loss: Option<WeightChangeSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_intake: Option<DietaryIntake>,
}

/// Answers to the blood pressure follow-up questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct BloodPressureAnswers {
    #[serde(rename = "familyHistoryBP", skip_serializing_if = "Option::is_none")]
    pub family_history_bp: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_salt_diet: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bp_meds: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dizziness: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydration: Option<Confirmation>,
}

/// Answers to the heart rate follow-up questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct HeartRateAnswers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_exercise: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anxiety: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fatigue: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete: Option<Confirmation>,
}

/// Answers to the temperature follow-up questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct TemperatureAnswers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infection_symptoms: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medication_fever: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeling_cold: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thyroid: Option<ThyroidHistory>,
}

/// Answers to the oxygen saturation follow-up questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct OxygenAnswers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breathing_issues: Option<SymptomSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_lung_issues: Option<Confirmation>,
}

/// Answers to the glucose follow-up questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct GlucoseAnswers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_meal: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequent_urination: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diabetes_medication: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptoms_low_sugar: Option<SymptomSeverity>,
}

/// Questionnaire submission, grouped per vital.
///
/// Every field is optional at every level: an unanswered question simply
/// leaves the evaluator on its generic message branch. The wire keys match
/// the question bank (`{"BMI": {"exerciseHabits": "light"}}`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct Answers {
    #[serde(rename = "BMI")]
    pub bmi: BmiAnswers,
    pub blood_pressure: BloodPressureAnswers,
    pub heart_rate: HeartRateAnswers,
    pub temperature: TemperatureAnswers,
    pub sp_o2: OxygenAnswers,
    pub glucose: GlucoseAnswers,
}

/// Error decoding a questionnaire submission.
#[derive(Debug, Error)]
pub enum AnswerDecodeError {
    /// Payload was not valid JSON, or a value fell outside a question's
    /// vocabulary
    #[error("Invalid questionnaire payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl Answers {
    /// Decode a questionnaire submission from the UI's JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, AnswerDecodeError> {
        Ok(serde_json::from_str(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_kiosk_payload() {
        let answers = Answers::from_json(
            r#"{
                "BMI": {"exerciseHabits": "light"},
                "bloodPressure": {"highSaltDiet": "yes", "familyHistoryBP": "yes"},
                "glucose": {"recentMeal": "no"}
            }"#,
        )
        .unwrap();

        assert_eq!(answers.bmi.exercise_habits, Some(ExerciseHabits::Light));
        assert_eq!(
            answers.blood_pressure.high_salt_diet,
            Some(Confirmation::Yes)
        );
        assert_eq!(
            answers.blood_pressure.family_history_bp,
            Some(Confirmation::Yes)
        );
        assert_eq!(answers.glucose.recent_meal, Some(Confirmation::No));
        // unanswered groups stay at their defaults
        assert_eq!(answers.sp_o2, OxygenAnswers::default());
    }

    #[test]
    fn rejects_out_of_vocabulary_values() {
        let result = Answers::from_json(r#"{"BMI": {"exerciseHabits": "sometimes"}}"#);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .starts_with("Invalid questionnaire payload"));
    }

    #[test]
    fn empty_object_is_a_valid_submission() {
        let answers = Answers::from_json("{}").unwrap();
        assert_eq!(answers, Answers::default());
    }
}
