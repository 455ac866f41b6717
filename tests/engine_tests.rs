//! Integration tests driving the engine the way the kiosk UI does: capture a
//! reading, classify it, render the follow-up questionnaire, submit answers,
//! evaluate recommendations, and hand the report to the save boundary.

use reviva_wellness_engine::{
    compute_bmi, evaluate_recommendations, generate_follow_up_questions, get_abnormal_vitals,
    Answers, BloodPressureValue, Deviation, ReferenceRanges, RulesEngine, SaveOnceGuard,
    Vital, VitalsReading, WellnessEngine, WellnessStatus,
};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn full_reading() -> VitalsReading {
    VitalsReading {
        height: Some(170.0),
        weight: Some(95.0),
        blood_pressure: BloodPressureValue::new(150, 95),
        temperature: Some(36.6),
        heart_rate: Some(72),
        sp_o2: Some(98),
        glucose: Some(90),
    }
}

#[test]
fn bmi_contract_examples() {
    assert_eq!(compute_bmi(None, Some(70.0)), None);
    assert_eq!(compute_bmi(Some(170.0), None), None);
    assert_eq!(compute_bmi(Some(170.0), Some(70.0)), Some(24.2));
}

#[test]
fn absent_vitals_never_appear_in_the_abnormality_map() {
    let vitals = VitalsReading {
        sp_o2: Some(90),
        ..VitalsReading::default()
    };
    let abnormalities = get_abnormal_vitals(&vitals);
    assert_eq!(abnormalities.get(&Vital::SpO2), Some(&Deviation::Low));
    assert_eq!(abnormalities.len(), 1);
}

#[test]
fn hypertensive_reading_classifies_high() {
    let vitals = VitalsReading {
        blood_pressure: BloodPressureValue::new(150, 95),
        ..VitalsReading::default()
    };
    let abnormalities = get_abnormal_vitals(&vitals);
    assert_eq!(
        abnormalities.get(&Vital::BloodPressure),
        Some(&Deviation::High)
    );
}

#[test]
fn spo2_boundary_behavior() {
    let low = VitalsReading {
        sp_o2: Some(90),
        ..VitalsReading::default()
    };
    assert_eq!(
        get_abnormal_vitals(&low).get(&Vital::SpO2),
        Some(&Deviation::Low)
    );

    let normal = VitalsReading {
        sp_o2: Some(96),
        ..VitalsReading::default()
    };
    assert!(get_abnormal_vitals(&normal).is_empty());
}

#[test]
fn full_kiosk_session_flow() {
    init_tracing();

    let vitals = full_reading();

    // step 1: classify
    let abnormalities = get_abnormal_vitals(&vitals);
    assert_eq!(abnormalities.len(), 2);
    assert_eq!(abnormalities.get(&Vital::Bmi), Some(&Deviation::High));
    assert_eq!(
        abnormalities.get(&Vital::BloodPressure),
        Some(&Deviation::High)
    );

    // step 2: the questionnaire renders one question set per abnormality
    let questions = generate_follow_up_questions(&abnormalities);
    let keys: Vec<&str> = questions.iter().map(|q| q.key.as_str()).collect();
    assert_eq!(
        keys,
        [
            "familyHistoryObesity",
            "exerciseHabits",
            "familyHistoryBP",
            "highSaltDiet",
            "bpMeds",
        ]
    );
    assert!(questions.iter().all(|q| !q.options.is_empty()));

    // step 3: the UI posts back selected option values as JSON
    let answers = Answers::from_json(
        r#"{
            "BMI": {"exerciseHabits": "none", "familyHistoryObesity": "yes"},
            "bloodPressure": {"highSaltDiet": "yes", "familyHistoryBP": "yes", "bpMeds": "no"}
        }"#,
    )
    .unwrap();

    // step 4: evaluate
    let recommendations = evaluate_recommendations(&vitals, &answers);
    let labels: Vec<&str> = recommendations.iter().map(|r| r.vital.as_str()).collect();
    assert_eq!(
        labels,
        [
            "BMI",
            "Blood Pressure",
            "BMI & Blood Pressure",
            "Diet & Genetics",
        ]
    );

    // step 5: wrap and save exactly once
    let engine = WellnessEngine::default();
    let report = engine.report(&vitals, &answers);
    assert_eq!(report.recommendations, recommendations);

    let mut guard = SaveOnceGuard::for_report(&report);
    assert!(guard.claim().is_ok());
    assert!(guard.claim().is_err());
}

#[test]
fn fully_normal_session_is_quiet() {
    let vitals = VitalsReading {
        height: Some(170.0),
        weight: Some(70.0),
        blood_pressure: BloodPressureValue::new(110, 70),
        temperature: Some(36.6),
        heart_rate: Some(72),
        sp_o2: Some(98),
        glucose: Some(90),
    };

    assert!(get_abnormal_vitals(&vitals).is_empty());
    assert!(generate_follow_up_questions(&get_abnormal_vitals(&vitals)).is_empty());
    assert!(evaluate_recommendations(&vitals, &Answers::default()).is_empty());

    let engine = WellnessEngine::default();
    assert_eq!(engine.wellness_score(&vitals), 100);

    let summary = engine.health_summary(&vitals);
    assert_eq!(summary.status, WellnessStatus::Excellent);
    assert_eq!(summary.abnormal_count, 0);
}

#[test]
fn recommendation_wire_format_is_flat_vital_message_records() {
    let vitals = full_reading();
    let recommendations = evaluate_recommendations(&vitals, &Answers::default());
    let json = serde_json::to_value(&recommendations).unwrap();

    for record in json.as_array().unwrap() {
        assert!(record["vital"].is_string());
        assert!(record["message"].is_string());
        assert!(record["sources"].is_array());
    }
}

#[test]
fn engine_profiles_share_one_configuration() {
    // the classifier and the summary screen must agree on what is abnormal
    let vitals = VitalsReading {
        blood_pressure: BloodPressureValue::new(135, 85),
        ..VitalsReading::default()
    };

    for ranges in [ReferenceRanges::screening(), ReferenceRanges::monitoring()] {
        let engine = WellnessEngine::new(ranges);
        let classified = engine.abnormal_vitals(&vitals);
        let summary = engine.health_summary(&vitals);
        let bp_card = summary
            .vitals
            .iter()
            .find(|card| card.vital == Vital::BloodPressure)
            .unwrap();
        assert_eq!(
            bp_card.abnormal,
            classified.contains_key(&Vital::BloodPressure)
        );
    }
}

#[test]
fn questionnaire_round_trip_through_the_wire() {
    // every emitted option value must be acceptable as an answer
    let vitals = VitalsReading {
        height: Some(170.0),
        weight: Some(50.0),
        sp_o2: Some(90),
        glucose: Some(55),
        ..VitalsReading::default()
    };
    let questions = generate_follow_up_questions(&get_abnormal_vitals(&vitals));

    for question in &questions {
        for option in &question.options {
            let vital_key = serde_json::to_value(question.vital).unwrap();
            let payload = format!(
                r#"{{"{}": {{"{}": "{}"}}}}"#,
                vital_key.as_str().unwrap(),
                question.key,
                option.value
            );
            let decoded = Answers::from_json(&payload);
            assert!(
                decoded.is_ok(),
                "option {:?} for {:?}/{} should decode",
                option.value,
                question.vital,
                question.key
            );
        }
    }
}
