use healthscore_core::models::definition::{
    AssessmentDefinition, Question, ScaleDirection, ScorePolarity, TierRecommendations,
    TierThresholds,
};
use healthscore_core::models::result::Priority::{High, Low, Medium};

use crate::Assessment;
use crate::build::{
    any_of, at_least, emergency, factor, free_text, numeric_scale, rec, required, single_select,
    text_contains,
};

/// Mental health screen over the last two weeks. Higher score = riskier.
pub struct MentalHealth;

const OVER_TWO_WEEKS: &[(&str, f64)] = &[
    ("not at all", 1.0),
    ("several days", 2.0),
    ("more than half the days", 4.0),
    ("nearly every day", 5.0),
];

const OFTEN: &[&str] = &["more than half the days", "nearly every day"];

impl Assessment for MentalHealth {
    fn definition(&self) -> &AssessmentDefinition {
        static DEFINITION: std::sync::LazyLock<AssessmentDefinition> =
            std::sync::LazyLock::new(|| {
                let items = [
                    ("lowInterest", "Little interest or pleasure in doing things"),
                    ("lowMood", "Feeling down, depressed, or hopeless"),
                    ("sleepTrouble", "Trouble falling or staying asleep, or sleeping too much"),
                    ("tiredness", "Feeling tired or having little energy"),
                    ("appetite", "Poor appetite or overeating"),
                    ("selfWorth", "Feeling bad about yourself"),
                    ("concentration", "Trouble concentrating"),
                    ("nervousness", "Feeling nervous, anxious, or on edge"),
                    ("uncontrolledWorry", "Not being able to stop or control worrying"),
                    ("irritability", "Becoming easily annoyed or irritable"),
                ];

                let mut questions: Vec<Question> = items
                    .iter()
                    .map(|(id, prompt)| required(single_select(id, prompt, 1.0, OVER_TWO_WEEKS)))
                    .collect();
                questions.extend([
                    required(single_select(
                        "selfHarmThoughts",
                        "Thoughts that you would be better off dead, or of hurting yourself",
                        2.0,
                        OVER_TWO_WEEKS,
                    )),
                    numeric_scale(
                        "stressLevel",
                        "How stressed do you feel from 0 (calm) to 10 (overwhelmed)?",
                        1.0,
                        (0.0, 10.0),
                        ScaleDirection::RiskAscending,
                    ),
                    single_select(
                        "supportNetwork",
                        "Do you have people you can talk to?",
                        1.0,
                        &[("yes, several", 1.0), ("one or two", 2.0), ("no one", 5.0)],
                    ),
                    single_select(
                        "dailyFunctioning",
                        "How hard have these problems made work, home or relationships?",
                        1.5,
                        &[
                            ("not difficult", 1.0),
                            ("somewhat difficult", 2.0),
                            ("very difficult", 4.0),
                            ("extremely difficult", 5.0),
                        ],
                    ),
                    free_text("notes", "Is there anything else you want to share?"),
                ]);

                let emergency_rules = vec![
                    emergency(
                        "self-harm-thoughts",
                        "Thoughts of self-harm",
                        vec![any_of("selfHarmThoughts", OFTEN)],
                    ),
                    emergency(
                        "crisis-language",
                        "Crisis language in notes",
                        vec![text_contains(
                            "notes",
                            &["suicide", "kill myself", "end my life", "hurt myself"],
                        )],
                    ),
                ];

                let risk_factor_rules = vec![
                    factor(
                        "Occasional thoughts of self-harm",
                        vec![any_of("selfHarmThoughts", &["several days"])],
                        Some(rec(
                            "Contact a crisis line or mental health professional",
                            High,
                            "today",
                        )),
                    ),
                    factor(
                        "Persistent low mood",
                        vec![any_of("lowMood", OFTEN)],
                        Some(rec("Talk to a clinician about low mood", High, "within 1 week")),
                    ),
                    factor(
                        "Loss of interest",
                        vec![any_of("lowInterest", OFTEN)],
                        None,
                    ),
                    factor(
                        "Persistent anxiety",
                        vec![any_of("nervousness", OFTEN), any_of("uncontrolledWorry", OFTEN)],
                        Some(rec("Try a guided breathing or grounding exercise", Medium, "daily")),
                    ),
                    factor(
                        "Sleep disturbance",
                        vec![any_of("sleepTrouble", OFTEN)],
                        Some(rec("Keep a regular sleep and wake time", Medium, "next 2 weeks")),
                    ),
                    factor(
                        "High stress",
                        vec![at_least("stressLevel", 8.0)],
                        None,
                    ),
                    factor(
                        "Social isolation",
                        vec![any_of("supportNetwork", &["no one"])],
                        Some(rec("Reach out to one person you trust", Medium, "this week")),
                    ),
                    factor(
                        "Impaired daily functioning",
                        vec![any_of(
                            "dailyFunctioning",
                            &["very difficult", "extremely difficult"],
                        )],
                        None,
                    ),
                ];

                AssessmentDefinition {
                    id: "mental-health".to_string(),
                    name: "Mental Health Check-in".to_string(),
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
                    tier_recommendations: TierRecommendations {
                        self_care: vec![
                            rec("Keep up routines that support your wellbeing", Low, "ongoing"),
                            rec("Check in with yourself again", Low, "in 2 weeks"),
                        ],
                        routine: vec![
                            rec(
                                "Talk to your primary care provider or a counsellor",
                                High,
                                "within 2 weeks",
                            ),
                            rec("Build in daily movement and time outdoors", Medium, "this week"),
                        ],
                        urgent: vec![
                            rec(
                                "Book an appointment with a mental health professional",
                                High,
                                "within 48 hours",
                            ),
                            rec("Let someone you trust know how you are feeling", High, "today"),
                        ],
                        emergency: vec![
                            rec(
                                "Call your local emergency number or a crisis line",
                                High,
                                "immediately",
                            ),
                            rec("Stay with someone you trust", High, "immediately"),
                            rec("Remove anything you could use to hurt yourself", High, "now"),
                        ],
                    },
                }
            });
        &DEFINITION
    }
}
