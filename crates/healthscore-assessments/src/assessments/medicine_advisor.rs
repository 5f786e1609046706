use healthscore_core::models::definition::{
    AssessmentDefinition, ScaleDirection, ScorePolarity, TierThresholds,
};
use healthscore_core::models::result::Priority;

use crate::Assessment;
use crate::build::{
    any_of, at_most, emergency, equals, factor, free_text, multi_select, numeric_scale, rec,
    required, single_select, standard_tier_recommendations, text_contains,
};

/// Medicine advisor: medication load, interactions, side effects and
/// adherence. Higher score = riskier.
pub struct MedicineAdvisor;

impl Assessment for MedicineAdvisor {
    fn definition(&self) -> &AssessmentDefinition {
        static DEFINITION: std::sync::LazyLock<AssessmentDefinition> =
            std::sync::LazyLock::new(|| {
                let questions = vec![
                    free_text("currentMedications", "Which medications are you taking?"),
                    required(single_select(
                        "medicationCount",
                        "How many prescription medications do you take daily?",
                        1.0,
                        &[("none", 1.0), ("1-2", 2.0), ("3-4", 3.0), ("5 or more", 5.0)],
                    )),
                    single_select(
                        "supplements",
                        "Do you take supplements or herbal remedies?",
                        0.5,
                        &[("no", 1.0), ("occasionally", 2.0), ("daily", 3.0)],
                    ),
                    multi_select(
                        "allergies",
                        "Are you allergic to any of these?",
                        1.0,
                        &[
                            ("none", 1.0),
                            ("penicillin", 3.0),
                            ("sulfa drugs", 3.0),
                            ("nsaids", 3.0),
                            ("other", 2.0),
                        ],
                    ),
                    required(single_select(
                        "sideEffects",
                        "Have you noticed side effects?",
                        1.5,
                        &[
                            ("none", 1.0),
                            ("mild", 2.0),
                            ("moderate", 3.0),
                            ("severe", 4.0),
                            ("swelling or trouble breathing", 5.0),
                        ],
                    )),
                    required(single_select(
                        "adherence",
                        "How often do you take medication exactly as prescribed?",
                        1.0,
                        &[
                            ("always", 1.0),
                            ("usually", 2.0),
                            ("sometimes", 4.0),
                            ("rarely", 5.0),
                        ],
                    )),
                    single_select(
                        "doseTaken",
                        "Have you taken more than the prescribed dose recently?",
                        1.5,
                        &[
                            ("no", 1.0),
                            ("slightly more", 3.0),
                            ("significantly more", 5.0),
                        ],
                    ),
                    multi_select(
                        "organConditions",
                        "Do you have any of these conditions?",
                        1.0,
                        &[
                            ("none", 1.0),
                            ("kidney disease", 4.0),
                            ("liver disease", 4.0),
                            ("heart disease", 4.0),
                        ],
                    ),
                    single_select(
                        "pregnancy",
                        "Are you pregnant or breastfeeding?",
                        1.0,
                        &[("no", 1.0), ("breastfeeding", 3.0), ("pregnant", 4.0)],
                    ),
                    single_select(
                        "alcoholWithMedication",
                        "Do you drink alcohol while on medication?",
                        1.0,
                        &[("never", 1.0), ("occasionally", 3.0), ("regularly", 5.0)],
                    ),
                    required(numeric_scale(
                        "understanding",
                        "How well do you understand what each medication is for, from 1 to 5?",
                        0.5,
                        (1.0, 5.0),
                        ScaleDirection::RiskDescending,
                    )),
                ];

                let emergency_rules = vec![
                    emergency(
                        "allergic-reaction",
                        "Possible severe allergic reaction",
                        vec![equals("sideEffects", "swelling or trouble breathing")],
                    ),
                    emergency(
                        "possible-overdose",
                        "Possible overdose",
                        vec![equals("doseTaken", "significantly more")],
                    ),
                    emergency(
                        "overdose-described",
                        "Overdose described",
                        vec![text_contains(
                            "currentMedications",
                            &["overdose", "whole bottle", "too many pills"],
                        )],
                    ),
                ];

                let risk_factor_rules = vec![
                    factor(
                        "Polypharmacy",
                        vec![equals("medicationCount", "5 or more")],
                        Some(rec(
                            "Ask a pharmacist for a full medication review",
                            Priority::High,
                            "within 2 weeks",
                        )),
                    ),
                    factor(
                        "Significant side effects",
                        vec![any_of("sideEffects", &["moderate", "severe"])],
                        Some(rec(
                            "Report side effects to your prescriber",
                            Priority::High,
                            "within 48 hours",
                        )),
                    ),
                    factor(
                        "Missed doses",
                        vec![any_of("adherence", &["sometimes", "rarely"])],
                        Some(rec(
                            "Use a pill organiser or phone reminders",
                            Priority::Medium,
                            "starting today",
                        )),
                    ),
                    factor(
                        "Alcohol and medication interaction risk",
                        vec![any_of("alcoholWithMedication", &["occasionally", "regularly"])],
                        Some(rec(
                            "Check each medication's alcohol interactions",
                            Priority::Medium,
                            "this week",
                        )),
                    ),
                    factor(
                        "Reduced drug clearance",
                        vec![any_of("organConditions", &["kidney disease", "liver disease"])],
                        Some(rec(
                            "Confirm doses are adjusted for kidney or liver function",
                            Priority::High,
                            "at your next visit",
                        )),
                    ),
                    factor(
                        "Pregnancy or breastfeeding",
                        vec![any_of("pregnancy", &["pregnant", "breastfeeding"])],
                        Some(rec(
                            "Confirm every medication is safe in pregnancy or breastfeeding",
                            Priority::High,
                            "within 1 week",
                        )),
                    ),
                    factor(
                        "Drug allergy",
                        vec![any_of(
                            "allergies",
                            &["penicillin", "sulfa drugs", "nsaids", "other"],
                        )],
                        None,
                    ),
                    factor(
                        "Low medication understanding",
                        vec![at_most("understanding", 2.0)],
                        None,
                    ),
                    factor(
                        "Supplement interaction risk",
                        vec![
                            equals("supplements", "daily"),
                            any_of("medicationCount", &["3-4", "5 or more"]),
                        ],
                        None,
                    ),
                ];

                AssessmentDefinition {
                    id: "medicine-advisor".to_string(),
                    name: "Medicine Advisor".to_string(),
                    version: 1,
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
