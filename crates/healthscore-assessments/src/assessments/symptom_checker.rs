use healthscore_core::models::definition::{
    AssessmentDefinition, ScaleDirection, ScorePolarity, TierThresholds,
};
use healthscore_core::models::result::Priority;

use crate::Assessment;
use crate::build::{
    any_of, at_least, at_most, emergency, equals, factor, free_number, free_text, multi_select,
    numeric_scale, rec, required, single_select, standard_tier_recommendations, text_contains,
};

/// Symptom checker: current complaint, pain, breathing, temperature and
/// context. Higher score = riskier.
pub struct SymptomChecker;

const SHORT_OF_BREATH: &str = "slightly short of breath";
const CANNOT_CATCH_BREATH: &str = "cannot catch breath";

impl Assessment for SymptomChecker {
    fn definition(&self) -> &AssessmentDefinition {
        static DEFINITION: std::sync::LazyLock<AssessmentDefinition> =
            std::sync::LazyLock::new(|| {
                let questions = vec![
                    single_select(
                        "primarySymptom",
                        "What is your main symptom?",
                        1.0,
                        &[
                            ("headache", 2.0),
                            ("fever", 3.0),
                            ("cough", 2.0),
                            ("stomach pain", 3.0),
                            ("fatigue", 2.0),
                            ("chest pain", 5.0),
                            ("other", 2.0),
                        ],
                    ),
                    required(numeric_scale(
                        "painLevel",
                        "How would you rate your pain from 0 (none) to 10 (worst)?",
                        1.5,
                        (0.0, 10.0),
                        ScaleDirection::RiskAscending,
                    )),
                    required(single_select(
                        "breathing",
                        "How is your breathing?",
                        1.5,
                        &[
                            ("normal", 1.0),
                            (SHORT_OF_BREATH, 3.0),
                            (CANNOT_CATCH_BREATH, 5.0),
                        ],
                    )),
                    free_number("temperature", "What is your temperature in °F?"),
                    required(single_select(
                        "severity",
                        "How severe are your symptoms overall?",
                        1.5,
                        &[("mild", 1.0), ("moderate", 3.0), ("severe", 5.0)],
                    )),
                    single_select(
                        "duration",
                        "How long have you had these symptoms?",
                        1.0,
                        &[
                            ("less than a day", 1.0),
                            ("1-3 days", 2.0),
                            ("4-7 days", 3.0),
                            ("1-2 weeks", 4.0),
                            ("more than 2 weeks", 5.0),
                        ],
                    ),
                    multi_select(
                        "associatedSymptoms",
                        "Are you experiencing any of these as well?",
                        1.0,
                        &[
                            ("none", 1.0),
                            ("nausea", 2.0),
                            ("vomiting", 3.0),
                            ("rash", 2.0),
                            ("dizziness", 3.0),
                            ("chest tightness", 5.0),
                            ("confusion", 5.0),
                        ],
                    ),
                    multi_select(
                        "chronicConditions",
                        "Do you have any ongoing conditions?",
                        1.0,
                        &[
                            ("none", 1.0),
                            ("asthma", 3.0),
                            ("diabetes", 3.0),
                            ("hypertension", 3.0),
                            ("heart disease", 4.0),
                            ("immunocompromised", 4.0),
                        ],
                    ),
                    single_select(
                        "ageGroup",
                        "What is your age group?",
                        0.5,
                        &[
                            ("under 18", 2.0),
                            ("18-39", 1.0),
                            ("40-64", 2.0),
                            ("65 or older", 4.0),
                        ],
                    ),
                    free_text("additionalNotes", "Anything else we should know?"),
                ];

                let emergency_rules = vec![
                    emergency(
                        "severe-breathing",
                        "Severe difficulty breathing",
                        vec![equals("breathing", CANNOT_CATCH_BREATH)],
                    ),
                    emergency(
                        "chest-pain-with-breathlessness",
                        "Chest pain with shortness of breath",
                        vec![
                            equals("primarySymptom", "chest pain"),
                            any_of("breathing", &[SHORT_OF_BREATH, CANNOT_CATCH_BREATH]),
                        ],
                    ),
                    emergency(
                        "very-high-fever",
                        "Very high fever",
                        vec![at_least("temperature", 103.0)],
                    ),
                    emergency(
                        "hypothermia",
                        "Dangerously low body temperature",
                        vec![at_most("temperature", 95.0)],
                    ),
                    emergency(
                        "acute-confusion",
                        "Sudden confusion",
                        vec![equals("associatedSymptoms", "confusion")],
                    ),
                    emergency(
                        "red-flag-description",
                        "Red-flag symptom described",
                        vec![text_contains(
                            "additionalNotes",
                            &[
                                "unconscious",
                                "fainted",
                                "seizure",
                                "coughing blood",
                                "slurred speech",
                            ],
                        )],
                    ),
                ];

                let risk_factor_rules = vec![
                    factor(
                        "Breathing difficulty",
                        vec![any_of("breathing", &[SHORT_OF_BREATH, CANNOT_CATCH_BREATH])],
                        Some(rec(
                            "Avoid exertion and sit upright to ease breathing",
                            Priority::High,
                            "now",
                        )),
                    ),
                    factor(
                        "High pain level",
                        vec![at_least("painLevel", 7.0)],
                        Some(rec(
                            "Discuss pain management with a clinician",
                            Priority::Medium,
                            "within 24 hours",
                        )),
                    ),
                    factor(
                        "Fever",
                        vec![at_least("temperature", 100.4)],
                        Some(rec(
                            "Track your temperature every 4 hours",
                            Priority::Medium,
                            "next 48 hours",
                        )),
                    ),
                    factor(
                        "Chest pain",
                        vec![equals("primarySymptom", "chest pain")],
                        None,
                    ),
                    factor(
                        "Persistent symptoms",
                        vec![any_of("duration", &["1-2 weeks", "more than 2 weeks"])],
                        Some(rec(
                            "Have persistent symptoms evaluated",
                            Priority::Medium,
                            "within 1 week",
                        )),
                    ),
                    factor(
                        "Concerning associated symptoms",
                        vec![any_of(
                            "associatedSymptoms",
                            &["dizziness", "chest tightness", "confusion"],
                        )],
                        None,
                    ),
                    factor(
                        "Underlying chronic condition",
                        vec![any_of(
                            "chronicConditions",
                            &[
                                "asthma",
                                "diabetes",
                                "hypertension",
                                "heart disease",
                                "immunocompromised",
                            ],
                        )],
                        Some(rec(
                            "Follow your care plan for existing conditions",
                            Priority::Medium,
                            "ongoing",
                        )),
                    ),
                    factor(
                        "Age-related risk",
                        vec![equals("ageGroup", "65 or older")],
                        None,
                    ),
                ];

                AssessmentDefinition {
                    id: "symptom-checker".to_string(),
                    name: "Symptom Checker".to_string(),
                    version: 2,
                    polarity: ScorePolarity::HigherIsRiskier,
                    questions,
                    tier_thresholds: TierThresholds {
                        low: 35.0,
                        medium: 55.0,
                        high: 75.0,
                    },
                    emergency_rules,
                    risk_factor_rules,
                    tier_recommendations: standard_tier_recommendations(),
                }
            });
        &DEFINITION
    }
}
