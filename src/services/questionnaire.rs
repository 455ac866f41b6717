//! Follow-up question bank and generator.
//!
//! The bank is static configuration: one list of questions per abnormal
//! vital and direction, plus bespoke option sets for questions whose answers
//! feed graded recommendation branches. Keys and texts match what the
//! questionnaire UI submits back as answers.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::entities::questionnaire::{FollowUpQuestion, QuestionOption};
use crate::entities::vitals::{AbnormalityMap, Deviation, Vital};

struct QuestionSpec {
    key: &'static str,
    text: &'static str,
}

struct OptionSpec {
    value: &'static str,
    label: &'static str,
    description: Option<&'static str>,
}

impl OptionSpec {
    fn to_option(&self) -> QuestionOption {
        QuestionOption {
            value: self.value.to_string(),
            label: self.label.to_string(),
            description: self.description.map(str::to_string),
        }
    }
}

const BMI_HIGH: &[QuestionSpec] = &[
    QuestionSpec {
        key: "familyHistoryObesity",
        text: "Do you have a family history of obesity or related conditions?",
    },
    QuestionSpec {
        key: "exerciseHabits",
        text: "How often do you exercise in a typical week?",
    },
];

const BMI_LOW: &[QuestionSpec] = &[
    QuestionSpec {
        key: "unintendedWeightLoss",
        text: "Have you experienced any unintended weight loss recently?",
    },
    QuestionSpec {
        key: "dietaryIntake",
        text: "Are you getting sufficient daily calorie intake?",
    },
];

const BLOOD_PRESSURE_HIGH: &[QuestionSpec] = &[
    QuestionSpec {
        key: "familyHistoryBP",
        text: "Do you have a family history of high blood pressure?",
    },
    QuestionSpec {
        key: "highSaltDiet",
        text: "Would you consider your diet high in salt?",
    },
    QuestionSpec {
        key: "bpMeds",
        text: "Are you currently on any blood pressure medication?",
    },
];

const BLOOD_PRESSURE_LOW: &[QuestionSpec] = &[
    QuestionSpec {
        key: "dizziness",
        text: "Have you felt dizzy or lightheaded recently?",
    },
    QuestionSpec {
        key: "hydration",
        text: "Are you well hydrated today?",
    },
];

const HEART_RATE_HIGH: &[QuestionSpec] = &[
    QuestionSpec {
        key: "recentExercise",
        text: "Were you engaged in physical activity in the past hour?",
    },
    QuestionSpec {
        key: "anxiety",
        text: "Are you feeling stressed or anxious right now?",
    },
];

const HEART_RATE_LOW: &[QuestionSpec] = &[
    QuestionSpec {
        key: "fatigue",
        text: "Do you feel unusually tired or fatigued?",
    },
    QuestionSpec {
        key: "athlete",
        text: "Are you an athlete or someone who exercises a lot?",
    },
];

const TEMPERATURE_HIGH: &[QuestionSpec] = &[
    QuestionSpec {
        key: "infectionSymptoms",
        text: "Are you experiencing any symptoms of infection (e.g., cough, sore throat)?",
    },
    QuestionSpec {
        key: "medicationFever",
        text: "Have you taken any fever-reducing medication?",
    },
];

const TEMPERATURE_LOW: &[QuestionSpec] = &[
    QuestionSpec {
        key: "feelingCold",
        text: "Do you feel cold or have you been in a cold environment recently?",
    },
    QuestionSpec {
        key: "thyroid",
        text: "Do you have any known thyroid issues affecting body temperature?",
    },
];

const SPO2_LOW: &[QuestionSpec] = &[
    QuestionSpec {
        key: "breathingIssues",
        text: "Are you experiencing any shortness of breath?",
    },
    QuestionSpec {
        key: "knownLungIssues",
        text: "Do you have any known lung or respiratory conditions?",
    },
];

const GLUCOSE_HIGH: &[QuestionSpec] = &[
    QuestionSpec {
        key: "recentMeal",
        text: "Have you eaten in the last 2 hours?",
    },
    QuestionSpec {
        key: "frequentUrination",
        text: "Have you noticed frequent urination or thirst lately?",
    },
];

const GLUCOSE_LOW: &[QuestionSpec] = &[
    QuestionSpec {
        key: "diabetesMedication",
        text: "If you are diabetic, did you take insulin or medication recently?",
    },
    QuestionSpec {
        key: "symptomsLowSugar",
        text: "Are you feeling shaky, sweaty, or have other low sugar symptoms?",
    },
];

/// Bank lookup. A vital/direction pair without questions yields an empty
/// slice and is skipped silently; a bank without a high/low split would
/// point both directions at the same list.
fn bank_questions(vital: Vital, deviation: Deviation) -> &'static [QuestionSpec] {
    match (vital, deviation) {
        (Vital::Bmi, Deviation::High) => BMI_HIGH,
        (Vital::Bmi, Deviation::Low) => BMI_LOW,
        (Vital::BloodPressure, Deviation::High) => BLOOD_PRESSURE_HIGH,
        (Vital::BloodPressure, Deviation::Low) => BLOOD_PRESSURE_LOW,
        (Vital::HeartRate, Deviation::High) => HEART_RATE_HIGH,
        (Vital::HeartRate, Deviation::Low) => HEART_RATE_LOW,
        (Vital::Temperature, Deviation::High) => TEMPERATURE_HIGH,
        (Vital::Temperature, Deviation::Low) => TEMPERATURE_LOW,
        // saturation cannot read high
        (Vital::SpO2, Deviation::High) => &[],
        (Vital::SpO2, Deviation::Low) => SPO2_LOW,
        (Vital::Glucose, Deviation::High) => GLUCOSE_HIGH,
        (Vital::Glucose, Deviation::Low) => GLUCOSE_LOW,
    }
}

/// Default choices for questions without a bespoke option set.
const DEFAULT_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        value: "yes",
        label: "Yes",
        description: None,
    },
    OptionSpec {
        value: "no",
        label: "No",
        description: None,
    },
    OptionSpec {
        value: "unsure",
        label: "Not sure",
        description: None,
    },
];

const EXERCISE_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        value: "none",
        label: "Rarely or never",
        description: None,
    },
    OptionSpec {
        value: "light",
        label: "1-2 times a week",
        description: Some("Light activity such as walking"),
    },
    OptionSpec {
        value: "moderate",
        label: "3-4 times a week",
        description: None,
    },
    OptionSpec {
        value: "active",
        label: "5 or more times a week",
        description: None,
    },
];

const WEIGHT_LOSS_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        value: "none",
        label: "No",
        description: None,
    },
    OptionSpec {
        value: "mild",
        label: "A little",
        description: Some("Up to 2-3 kg"),
    },
    OptionSpec {
        value: "moderate",
        label: "A noticeable amount",
        description: Some("Around 3-5 kg"),
    },
    OptionSpec {
        value: "significant",
        label: "A lot",
        description: Some("More than 5 kg"),
    },
];

const DIETARY_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        value: "sufficient",
        label: "Yes, I eat enough",
        description: None,
    },
    OptionSpec {
        value: "insufficient",
        label: "No, probably not",
        description: None,
    },
    OptionSpec {
        value: "unsure",
        label: "Not sure",
        description: None,
    },
];

const BREATHING_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        value: "none",
        label: "No",
        description: None,
    },
    OptionSpec {
        value: "mild",
        label: "Slightly breathless",
        description: None,
    },
    OptionSpec {
        value: "moderate",
        label: "Noticeably short of breath",
        description: None,
    },
    OptionSpec {
        value: "severe",
        label: "Struggling to breathe",
        description: None,
    },
];

const LOW_SUGAR_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        value: "none",
        label: "No symptoms",
        description: None,
    },
    OptionSpec {
        value: "mild",
        label: "Mild",
        description: Some("Slightly shaky or hungry"),
    },
    OptionSpec {
        value: "moderate",
        label: "Moderate",
        description: Some("Sweaty, shaky, or lightheaded"),
    },
    OptionSpec {
        value: "severe",
        label: "Severe",
        description: Some("Confused, very weak, or near fainting"),
    },
];

const THYROID_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        value: "yes",
        label: "Yes, diagnosed",
        description: None,
    },
    OptionSpec {
        value: "no",
        label: "No",
        description: None,
    },
    OptionSpec {
        value: "suspected",
        label: "Suspected, not diagnosed",
        description: None,
    },
];

static OPTION_SETS: Lazy<HashMap<&'static str, &'static [OptionSpec]>> = Lazy::new(|| {
    HashMap::from([
        ("exerciseHabits", EXERCISE_OPTIONS),
        ("unintendedWeightLoss", WEIGHT_LOSS_OPTIONS),
        ("dietaryIntake", DIETARY_OPTIONS),
        ("breathingIssues", BREATHING_OPTIONS),
        ("symptomsLowSugar", LOW_SUGAR_OPTIONS),
        ("thyroid", THYROID_OPTIONS),
    ])
});

fn options_for(key: &str) -> &'static [OptionSpec] {
    OPTION_SETS.get(key).copied().unwrap_or(DEFAULT_OPTIONS)
}

/// Derive the follow-up questions for a set of abnormalities.
///
/// Questions follow the abnormality map's key order; within a vital they
/// keep their declared bank order. Questions without a bespoke option set
/// get the default yes/no/unsure choices.
pub fn follow_up_questions(abnormalities: &AbnormalityMap) -> Vec<FollowUpQuestion> {
    let mut questions = Vec::new();
    for (&vital, &deviation) in abnormalities {
        for spec in bank_questions(vital, deviation) {
            questions.push(FollowUpQuestion {
                vital,
                key: spec.key.to_string(),
                text: spec.text.to_string(),
                options: options_for(spec.key).iter().map(OptionSpec::to_option).collect(),
            });
        }
    }
    questions
}
