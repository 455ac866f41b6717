//! Recommendation rule tables and evaluator.
//!
//! Rules are declarative records: a fixed-order table of per-vital rules
//! followed by a fixed-order table of cross-vital rules, each an independent
//! function from the evaluation context to at most one recommendation.
//! Rules only append; nothing a later rule produces removes or rewrites an
//! earlier message. Missing answers fall back to generic message branches
//! and missing vitals produce nothing, so evaluation never fails.

use tracing::{info, instrument};

use crate::entities::questionnaire::{
    Answers, Confirmation, DietaryIntake, ExerciseHabits, SymptomSeverity, ThyroidHistory,
    WeightChangeSeverity,
};
use crate::entities::ranges::ReferenceRanges;
use crate::entities::recommendation::Recommendation;
use crate::entities::vitals::{AbnormalityMap, Deviation, Vital, VitalsReading};
use crate::services::bmi::compute_bmi;
use crate::services::classifier::abnormal_vitals;

/// Everything a rule may consult when deciding whether to fire.
struct RuleContext<'a> {
    answers: &'a Answers,
    abnormalities: &'a AbnormalityMap,
    bmi: Option<f64>,
}

impl RuleContext<'_> {
    fn deviation(&self, vital: Vital) -> Option<Deviation> {
        self.abnormalities.get(&vital).copied()
    }

    fn is_high(&self, vital: Vital) -> bool {
        self.deviation(vital) == Some(Deviation::High)
    }

    fn is_low(&self, vital: Vital) -> bool {
        self.deviation(vital) == Some(Deviation::Low)
    }
}

fn yes(answer: Option<Confirmation>) -> bool {
    answer == Some(Confirmation::Yes)
}

fn no(answer: Option<Confirmation>) -> bool {
    answer == Some(Confirmation::No)
}

type Rule = fn(&RuleContext) -> Option<Recommendation>;

/// Per-vital rules in the engine's fixed evaluation order.
const VITAL_RULES: &[Rule] = &[
    bmi_rule,
    blood_pressure_rule,
    heart_rate_rule,
    temperature_rule,
    oxygen_rule,
    glucose_rule,
];

/// Cross-vital rules, evaluated after every per-vital rule.
const CROSS_RULES: &[Rule] = &[
    weight_and_pressure_rule,
    diet_and_genetics_rule,
    metabolic_risk_rule,
    cardiorespiratory_rule,
    infection_pressure_rule,
];

/// Evaluate every recommendation rule for a reading and its questionnaire
/// answers.
#[instrument(skip_all)]
pub fn evaluate(
    vitals: &VitalsReading,
    answers: &Answers,
    ranges: &ReferenceRanges,
) -> Vec<Recommendation> {
    let abnormalities = abnormal_vitals(vitals, ranges);
    let ctx = RuleContext {
        answers,
        abnormalities: &abnormalities,
        bmi: compute_bmi(vitals.height, vitals.weight),
    };

    let recommendations: Vec<Recommendation> = VITAL_RULES
        .iter()
        .chain(CROSS_RULES)
        .filter_map(|rule| rule(&ctx))
        .collect();

    info!(
        abnormal = abnormalities.len(),
        recommendations = recommendations.len(),
        "recommendation evaluation complete"
    );
    recommendations
}

fn bmi_rule(ctx: &RuleContext) -> Option<Recommendation> {
    let deviation = ctx.deviation(Vital::Bmi)?;
    // the deviation can only exist when the BMI was computable
    let bmi = ctx.bmi?;
    let answers = &ctx.answers.bmi;

    let message = match deviation {
        Deviation::High => {
            let mut message = format!(
                "Your BMI is {bmi}, which is above the normal range. \
                 Consider a healthier diet and regular exercise to lose weight."
            );
            message.push(' ');
            message.push_str(match answers.exercise_habits {
                Some(ExerciseHabits::None) => {
                    "Start with gentle activity such as daily walks and build up gradually."
                }
                Some(ExerciseHabits::Light) => {
                    "Try increasing how many days a week you are active."
                }
                Some(ExerciseHabits::Moderate) => {
                    "Keep up your routine and add strength training to support weight loss."
                }
                Some(ExerciseHabits::Active) => {
                    "Keep up your activity level and focus on nutrition to reach a healthy weight."
                }
                None => "Start with a manageable exercise routine and gradually increase activity.",
            });
            message
        }
        Deviation::Low => {
            let mut message = format!("Your BMI is {bmi}, which is below the normal range.");
            if answers.dietary_intake == Some(DietaryIntake::Insufficient) {
                message.push_str(
                    " Your reported calorie intake looks insufficient; \
                     increase it with regular, nutrient-dense meals.",
                );
            } else {
                message.push_str(
                    " You might need to increase calorie intake or check for underlying issues.",
                );
            }
            if matches!(
                answers.unintended_weight_loss,
                Some(WeightChangeSeverity::Moderate | WeightChangeSeverity::Significant)
            ) {
                message.push_str(
                    " Unintended weight loss of this degree should be discussed with a doctor.",
                );
            } else {
                message.push_str(" Consider consulting a nutritionist for a diet plan.");
            }
            message
        }
    };

    Some(Recommendation::single(Vital::Bmi, message))
}

fn blood_pressure_rule(ctx: &RuleContext) -> Option<Recommendation> {
    let deviation = ctx.deviation(Vital::BloodPressure)?;
    let answers = &ctx.answers.blood_pressure;

    let message = match deviation {
        Deviation::High => {
            let mut message = String::from(
                "Your blood pressure is high. We recommend reducing salt intake, \
                 regular exercise, and stress management.",
            );
            if yes(answers.high_salt_diet) {
                message.push_str(
                    " Cutting back on salty and processed foods should be your first priority.",
                );
            }
            message.push_str(match answers.bp_meds {
                Some(Confirmation::Yes) => {
                    " Continue taking your blood pressure medication as prescribed."
                }
                Some(Confirmation::No) => {
                    " Consider consulting a doctor about whether treatment is appropriate."
                }
                _ => " Consider consulting a doctor for guidance.",
            });
            if yes(answers.family_history_bp) {
                message.push_str(
                    " Since you have a family history of hypertension, be especially vigilant.",
                );
            }
            message
        }
        Deviation::Low => {
            let mut message = String::from(
                "Your blood pressure is lower than normal. Make sure you're staying \
                 hydrated and not skipping meals.",
            );
            if yes(answers.dizziness) {
                message.push_str(
                    " You reported feeling dizzy; sit or lie down when it happens and \
                     consult a healthcare provider if it continues.",
                );
            } else {
                message.push_str(
                    " If you experience dizziness or fainting, consult a healthcare provider.",
                );
            }
            if no(answers.hydration) {
                message.push_str(" Start by drinking water regularly through the day.");
            }
            message
        }
    };

    Some(Recommendation::single(Vital::BloodPressure, message))
}

fn heart_rate_rule(ctx: &RuleContext) -> Option<Recommendation> {
    let deviation = ctx.deviation(Vital::HeartRate)?;
    let answers = &ctx.answers.heart_rate;

    let message = match deviation {
        Deviation::High => {
            let mut message = String::from("Your heart rate is above normal.");
            if yes(answers.recent_exercise) {
                message.push_str(
                    " It might be elevated due to recent activity; \
                     try rechecking after resting.",
                );
            } else {
                message.push_str(
                    " This could be due to stress, caffeine, or other factors; \
                     consider relaxing and monitoring it.",
                );
            }
            if yes(answers.anxiety) {
                message.push_str(
                    " Feeling stressed or anxious raises heart rate; \
                     a few minutes of slow breathing may help.",
                );
            }
            message
        }
        Deviation::Low => {
            let mut message = String::from("Your heart rate is below normal.");
            if yes(answers.athlete) {
                message.push_str(
                    " For someone who trains regularly this is often normal and \
                     no cause for concern.",
                );
            } else {
                message.push_str(
                    " If you feel fine and are athletic, a low resting heart rate can be normal.",
                );
            }
            if yes(answers.fatigue) {
                message.push_str(
                    " Because you also feel unusually tired, have a doctor review this reading.",
                );
            } else {
                message.push_str(" If you experience fatigue or dizziness, consult a doctor.");
            }
            message
        }
    };

    Some(Recommendation::single(Vital::HeartRate, message))
}

fn temperature_rule(ctx: &RuleContext) -> Option<Recommendation> {
    let deviation = ctx.deviation(Vital::Temperature)?;
    let answers = &ctx.answers.temperature;

    let message = match deviation {
        Deviation::High => {
            let mut message =
                String::from("You have a fever (elevated body temperature). Stay hydrated and rest.");
            if yes(answers.infection_symptoms) {
                message.push_str(
                    " Your symptoms point to a possible infection; monitor them closely.",
                );
            }
            if yes(answers.medication_fever) {
                message.push_str(
                    " You have already taken fever-reducing medication; \
                     wait the recommended interval before another dose.",
                );
            } else {
                message.push_str(" Consider taking fever-reducing medication.");
            }
            message.push_str(" If the fever persists or is very high, seek medical advice.");
            message
        }
        Deviation::Low => {
            let mut message = String::from("Your body temperature is below normal.");
            if yes(answers.feeling_cold) {
                message.push_str(
                    " Warm up with extra layers and a warm drink, then measure again.",
                );
            }
            if matches!(
                answers.thyroid,
                Some(ThyroidHistory::Yes | ThyroidHistory::Suspected)
            ) {
                message.push_str(
                    " Thyroid issues can lower body temperature; \
                     consider having your thyroid function checked.",
                );
            } else {
                message.push_str(
                    " Ensure you're warm and consider checking your thyroid function \
                     if this persists.",
                );
            }
            message
        }
    };

    Some(Recommendation::single(Vital::Temperature, message))
}

fn oxygen_rule(ctx: &RuleContext) -> Option<Recommendation> {
    // saturation only ever classifies low
    ctx.deviation(Vital::SpO2)?;
    let answers = &ctx.answers.sp_o2;

    let mut message = String::from("Your oxygen saturation is below the normal range.");
    message.push_str(match answers.breathing_issues {
        Some(SymptomSeverity::Severe) => {
            " You reported severe shortness of breath; seek immediate medical attention."
        }
        Some(SymptomSeverity::Moderate) => {
            " Given your breathing difficulty, arrange prompt medical care rather than waiting."
        }
        Some(SymptomSeverity::Mild) => {
            " Take deep breaths and relax; if the breathlessness continues, contact a provider."
        }
        _ => {
            " Take deep breaths and relax. If it stays low or you have trouble breathing, \
             seek medical attention."
        }
    });
    if yes(answers.known_lung_issues) {
        message.push_str(
            " Follow the action plan for your existing lung condition and keep any \
             prescribed inhaler or oxygen nearby.",
        );
    }

    Some(Recommendation::single(Vital::SpO2, message))
}

fn glucose_rule(ctx: &RuleContext) -> Option<Recommendation> {
    let deviation = ctx.deviation(Vital::Glucose)?;
    let answers = &ctx.answers.glucose;

    let message = match deviation {
        Deviation::High => {
            let mut message = String::from("Your blood sugar reading is high.");
            if yes(answers.recent_meal) {
                message.push_str(
                    " Since you recently ate, it may be a normal post-meal spike. \
                     Try measuring again when fasting.",
                );
            } else {
                message.push_str(
                    " This could indicate a risk of diabetes. Consider a proper fasting \
                     glucose test or consult a doctor.",
                );
            }
            if yes(answers.frequent_urination) && yes(answers.diabetes_medication) {
                message.push_str(
                    " Frequent urination while on diabetes medication warrants a prompt \
                     medical evaluation.",
                );
            }
            message
        }
        Deviation::Low => {
            let mut message =
                String::from("Your blood sugar is low. Please eat or drink something with sugar.");
            if answers.symptoms_low_sugar == Some(SymptomSeverity::Severe) {
                message.push_str(" Your symptoms sound severe; seek medical help right away.");
            } else {
                message.push_str(" If symptoms persist, seek medical help.");
            }
            if yes(answers.diabetes_medication) {
                message.push_str(
                    " Since you take insulin or diabetes medication, review your dosing \
                     with your doctor to avoid repeated lows.",
                );
            }
            message
        }
    };

    Some(Recommendation::single(Vital::Glucose, message))
}

fn weight_and_pressure_rule(ctx: &RuleContext) -> Option<Recommendation> {
    (ctx.is_high(Vital::Bmi) && ctx.is_high(Vital::BloodPressure)).then(|| {
        Recommendation::combined(
            "BMI & Blood Pressure",
            &[Vital::Bmi, Vital::BloodPressure],
            "Because both your BMI and blood pressure are high, losing weight will \
             likely help reduce your blood pressure. Focus on diet and exercise as a \
             combined approach for improvement in both areas.",
        )
    })
}

fn diet_and_genetics_rule(ctx: &RuleContext) -> Option<Recommendation> {
    let answers = &ctx.answers.blood_pressure;
    (ctx.is_high(Vital::BloodPressure)
        && yes(answers.high_salt_diet)
        && yes(answers.family_history_bp))
    .then(|| {
        Recommendation::combined(
            "Diet & Genetics",
            &[Vital::BloodPressure],
            "You indicated a high-salt diet and a family history of high blood \
             pressure. With genetics already raising your risk, reducing salt matters \
             even more; make low-sodium eating a daily habit.",
        )
    })
}

fn metabolic_risk_rule(ctx: &RuleContext) -> Option<Recommendation> {
    (ctx.is_high(Vital::Glucose) && ctx.is_high(Vital::Bmi)).then(|| {
        Recommendation::combined(
            "BMI & Blood Sugar",
            &[Vital::Bmi, Vital::Glucose],
            "Elevated blood sugar combined with a high BMI raises the risk of \
             metabolic syndrome. Weight loss through diet and activity improves both \
             readings; consider discussing screening with your doctor.",
        )
    })
}

fn cardiorespiratory_rule(ctx: &RuleContext) -> Option<Recommendation> {
    (ctx.is_low(Vital::SpO2) && ctx.is_high(Vital::HeartRate)).then(|| {
        Recommendation::combined(
            "Oxygen & Heart Rate",
            &[Vital::SpO2, Vital::HeartRate],
            "Low oxygen saturation together with a fast heart rate can signal \
             cardiorespiratory distress. Rest now and seek medical attention if \
             either reading does not settle.",
        )
    })
}

fn infection_pressure_rule(ctx: &RuleContext) -> Option<Recommendation> {
    (ctx.is_high(Vital::Temperature) && ctx.is_low(Vital::BloodPressure)).then(|| {
        Recommendation::combined(
            "Temperature & Blood Pressure",
            &[Vital::Temperature, Vital::BloodPressure],
            "A fever together with low blood pressure can accompany infection. Drink \
             fluids, rest, and contact a healthcare provider promptly if you feel worse.",
        )
    })
}
