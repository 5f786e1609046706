use healthscore_core::models::definition::{
    AssessmentDefinition, Question, ScaleDirection, ScorePolarity, TierRecommendations,
    TierThresholds,
};
use healthscore_core::models::result::Priority::{High, Low, Medium};

use crate::Assessment;
use crate::build::{
    any_of, at_least, emergency, equals, factor, free_text, multi_select, numeric_scale, rec,
    required, single_select, standard_tier_recommendations,
};

/// 30-question general health assessment covering lifestyle, symptoms and
/// prevention. Higher score = healthier.
pub struct HealthAssessment;

/// Something worth doing often: rarer is riskier.
const HABIT: &[(&str, f64)] = &[
    ("daily", 1.0),
    ("several times a week", 2.0),
    ("weekly", 3.0),
    ("rarely", 4.0),
    ("never", 5.0),
];

/// Something harmful or a symptom: more frequent is riskier.
const EXPOSURE: &[(&str, f64)] = &[
    ("never", 1.0),
    ("rarely", 2.0),
    ("weekly", 3.0),
    ("several times a week", 4.0),
    ("daily", 5.0),
];

const RATING: &[(&str, f64)] = &[
    ("excellent", 1.0),
    ("good", 2.0),
    ("fair", 3.0),
    ("poor", 4.0),
    ("very poor", 5.0),
];

const FREQUENT: &[&str] = &["several times a week", "daily"];

impl Assessment for HealthAssessment {
    fn definition(&self) -> &AssessmentDefinition {
        static DEFINITION: std::sync::LazyLock<AssessmentDefinition> =
            std::sync::LazyLock::new(|| {
                let habits = [
                    ("exercise", "How often do you exercise for 30 minutes or more?"),
                    ("fruitVegetables", "How often do you eat fruit or vegetables?"),
                    ("waterIntake", "How often do you drink 8 glasses of water a day?"),
                    ("stretching", "How often do you stretch or do mobility work?"),
                    ("outdoorTime", "How often do you spend time outdoors?"),
                    ("socialContact", "How often do you connect with friends or family?"),
                ];
                let exposures = [
                    ("smoking", "How often do you smoke or vape?"),
                    ("alcohol", "How often do you drink alcohol?"),
                    ("processedFood", "How often do you eat fast or processed food?"),
                    ("sugaryDrinks", "How often do you have sugary drinks?"),
                    ("lateScreenTime", "How often are you on screens within an hour of bed?"),
                    ("headaches", "How often do you have headaches?"),
                    ("jointPain", "How often do you have joint or back pain?"),
                    ("digestiveIssues", "How often do you have digestive problems?"),
                    (
                        "shortnessOfBreath",
                        "How often are you short of breath during light activity?",
                    ),
                    ("chestPainExertion", "How often do you feel chest pain when active?"),
                    ("dizziness", "How often do you feel dizzy or light-headed?"),
                ];
                let ratings = [
                    ("overallHealth", "How would you rate your overall health?"),
                    ("sleepQuality", "How would you rate your sleep quality?"),
                    ("mood", "How would you rate your mood lately?"),
                    ("dietQuality", "How would you rate your diet?"),
                ];

                let mut questions: Vec<Question> = Vec::new();
                questions.extend(
                    habits
                        .iter()
                        .map(|(id, prompt)| required(single_select(id, prompt, 1.0, HABIT))),
                );
                questions.extend(
                    exposures
                        .iter()
                        .map(|(id, prompt)| required(single_select(id, prompt, 1.0, EXPOSURE))),
                );
                questions.extend(
                    ratings
                        .iter()
                        .map(|(id, prompt)| required(single_select(id, prompt, 1.0, RATING))),
                );
                questions.extend([
                    required(numeric_scale(
                        "energyLevel",
                        "How is your energy level from 1 (exhausted) to 10 (energetic)?",
                        1.0,
                        (1.0, 10.0),
                        ScaleDirection::RiskDescending,
                    )),
                    required(numeric_scale(
                        "stressLevel",
                        "How stressed do you feel from 0 (calm) to 10 (overwhelmed)?",
                        1.0,
                        (0.0, 10.0),
                        ScaleDirection::RiskAscending,
                    )),
                    required(single_select(
                        "sleepHours",
                        "How many hours do you usually sleep?",
                        1.0,
                        &[
                            ("less than 5", 5.0),
                            ("5-6", 3.0),
                            ("7-9", 1.0),
                            ("more than 9", 2.0),
                        ],
                    )),
                    required(single_select(
                        "sittingHours",
                        "How many hours a day do you sit?",
                        0.5,
                        &[
                            ("less than 4", 1.0),
                            ("4-8", 2.0),
                            ("8-10", 4.0),
                            ("more than 10", 5.0),
                        ],
                    )),
                    required(single_select(
                        "bodyWeight",
                        "Which best describes your weight?",
                        1.0,
                        &[
                            ("underweight", 3.0),
                            ("healthy", 1.0),
                            ("overweight", 3.0),
                            ("obese", 5.0),
                        ],
                    )),
                    single_select(
                        "bloodPressure",
                        "What was your last blood pressure reading?",
                        1.5,
                        &[
                            ("normal", 1.0),
                            ("elevated", 3.0),
                            ("high", 5.0),
                            ("unknown", 3.0),
                        ],
                    ),
                    required(single_select(
                        "lastCheckup",
                        "When was your last medical check-up?",
                        0.5,
                        &[
                            ("within a year", 1.0),
                            ("1-2 years", 2.0),
                            ("2-5 years", 4.0),
                            ("more than 5 years", 5.0),
                        ],
                    )),
                    multi_select(
                        "familyHistory",
                        "Has a close relative had any of these?",
                        1.0,
                        &[
                            ("none", 1.0),
                            ("heart disease", 4.0),
                            ("diabetes", 3.0),
                            ("cancer", 3.0),
                            ("stroke", 4.0),
                        ],
                    ),
                    free_text("healthGoals", "What would you most like to improve?"),
                ]);

                let emergency_rules = vec![
                    emergency(
                        "exertional-chest-pain",
                        "Chest pain and breathlessness on exertion",
                        vec![
                            any_of("chestPainExertion", FREQUENT),
                            any_of("shortnessOfBreath", FREQUENT),
                        ],
                    ),
                    emergency(
                        "hypertensive-symptoms",
                        "High blood pressure with daily headaches and dizziness",
                        vec![
                            equals("bloodPressure", "high"),
                            equals("headaches", "daily"),
                            equals("dizziness", "daily"),
                        ],
                    ),
                ];

                let risk_factor_rules = vec![
                    factor(
                        "Tobacco use",
                        vec![any_of(
                            "smoking",
                            &["rarely", "weekly", "several times a week", "daily"],
                        )],
                        Some(rec(
                            "Talk to a clinician about quitting support",
                            High,
                            "within 1 month",
                        )),
                    ),
                    factor(
                        "Physical inactivity",
                        vec![any_of("exercise", &["rarely", "never"])],
                        Some(rec(
                            "Build up to 150 minutes of activity a week",
                            Medium,
                            "next 8 weeks",
                        )),
                    ),
                    factor(
                        "Elevated blood pressure",
                        vec![any_of("bloodPressure", &["elevated", "high"])],
                        Some(rec("Recheck your blood pressure", High, "within 2 weeks")),
                    ),
                    factor(
                        "High stress",
                        vec![at_least("stressLevel", 7.0)],
                        Some(rec(
                            "Try a daily stress-reduction practice",
                            Medium,
                            "starting this week",
                        )),
                    ),
                    factor(
                        "Insufficient sleep",
                        vec![any_of("sleepHours", &["less than 5", "5-6"])],
                        Some(rec(
                            "Aim for a consistent 7-9 hour sleep window",
                            Medium,
                            "next 2 weeks",
                        )),
                    ),
                    factor(
                        "Heavy alcohol use",
                        vec![any_of("alcohol", FREQUENT)],
                        Some(rec(
                            "Cut back to no more than a few drinks a week",
                            Medium,
                            "next month",
                        )),
                    ),
                    factor("Obesity", vec![equals("bodyWeight", "obese")], None),
                    factor(
                        "Family history of cardiovascular disease",
                        vec![any_of("familyHistory", &["heart disease", "stroke"])],
                        Some(rec(
                            "Ask about cardiovascular screening",
                            Medium,
                            "at your next check-up",
                        )),
                    ),
                    factor(
                        "Overdue check-up",
                        vec![any_of("lastCheckup", &["2-5 years", "more than 5 years"])],
                        None,
                    ),
                    factor(
                        "Frequent exertional symptoms",
                        vec![any_of("chestPainExertion", FREQUENT)],
                        None,
                    ),
                ];

                AssessmentDefinition {
                    id: "health-assessment".to_string(),
                    name: "30-Question Health Assessment".to_string(),
                    version: 1,
                    polarity: ScorePolarity::HigherIsHealthier,
                    questions,
                    tier_thresholds: TierThresholds {
                        low: 35.0,
                        medium: 55.0,
                        high: 72.0,
                    },
                    emergency_rules,
                    risk_factor_rules,
                    tier_recommendations: TierRecommendations {
                        self_care: vec![
                            rec("Keep up your current routine", Low, "ongoing"),
                            rec("Schedule your annual check-up", Medium, "within 12 months"),
                        ],
                        routine: vec![
                            rec(
                                "Discuss lifestyle changes with your primary care provider",
                                High,
                                "within 1 month",
                            ),
                            rec("Pick one habit to improve and track it", Medium, "this week"),
                        ],
                        urgent: vec![
                            rec("Book a comprehensive check-up", High, "within 1 week"),
                            rec(
                                "Get blood pressure and blood work checked",
                                High,
                                "within 2 weeks",
                            ),
                            rec("Pick one habit to improve and track it", Medium, "this week"),
                        ],
                        emergency: standard_tier_recommendations().emergency,
                    },
                }
            });
        &DEFINITION
    }
}
