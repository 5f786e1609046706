#![allow(dead_code)]

use healthscore_core::models::condition::{Condition, EmergencyRule, RiskFactorRule};
use healthscore_core::models::definition::{
    AnswerOption, AnswerType, AssessmentDefinition, NumericScale, Question, ScaleDirection,
    ScorePolarity, TierRecommendations, TierThresholds,
};
use healthscore_core::models::response::{Response, ResponseValue};
use healthscore_core::models::result::{Priority, Recommendation};

pub fn option(value: &str, weight: f64) -> AnswerOption {
    AnswerOption {
        value: value.to_string(),
        weight,
    }
}

pub fn question(id: &str, answer_type: AnswerType) -> Question {
    Question {
        id: id.to_string(),
        prompt: format!("{id}?"),
        answer_type,
        weight: 1.0,
        required: false,
        options: vec![],
        scale: None,
    }
}

pub fn rec(title: &str, priority: Priority, timeframe: &str) -> Recommendation {
    Recommendation::new(title, priority, timeframe)
}

/// Small definition exercising every answer type.
pub fn fixture(polarity: ScorePolarity) -> AssessmentDefinition {
    let questions = vec![
        Question {
            required: true,
            options: vec![
                option("calm", 1.0),
                option("uneasy", 3.0),
                option("distressed", 5.0),
            ],
            ..question("mood", AnswerType::SingleSelect)
        },
        Question {
            options: vec![
                option("none", 1.0),
                option("cough", 2.0),
                option("rash", 3.0),
                option("fainting", 5.0),
            ],
            ..question("symptoms", AnswerType::MultiSelect)
        },
        Question {
            weight: 2.0,
            required: true,
            scale: Some(NumericScale {
                min: 0.0,
                max: 10.0,
                direction: ScaleDirection::RiskAscending,
            }),
            ..question("pain", AnswerType::NumericScale)
        },
        Question {
            scale: Some(NumericScale {
                min: 0.0,
                max: 10.0,
                direction: ScaleDirection::RiskDescending,
            }),
            ..question("energy", AnswerType::NumericScale)
        },
        question("temperature", AnswerType::FreeNumber),
        question("notes", AnswerType::FreeText),
    ];

    AssessmentDefinition {
        id: "fixture".to_string(),
        name: "Fixture".to_string(),
        version: 1,
        polarity,
        questions,
        tier_thresholds: TierThresholds {
            low: 30.0,
            medium: 50.0,
            high: 70.0,
        },
        emergency_rules: vec![
            EmergencyRule {
                id: "fever".to_string(),
                label: "Very high fever".to_string(),
                conditions: vec![Condition::AtLeast {
                    question_id: "temperature".to_string(),
                    threshold: 103.0,
                }],
            },
            EmergencyRule {
                id: "fainting-with-pain".to_string(),
                label: "Fainting with severe pain".to_string(),
                conditions: vec![
                    Condition::Equals {
                        question_id: "symptoms".to_string(),
                        value: "fainting".to_string(),
                    },
                    Condition::AtLeast {
                        question_id: "pain".to_string(),
                        threshold: 8.0,
                    },
                ],
            },
        ],
        risk_factor_rules: vec![
            RiskFactorRule {
                label: "High pain".to_string(),
                when: vec![Condition::AtLeast {
                    question_id: "pain".to_string(),
                    threshold: 7.0,
                }],
                recommendation: Some(rec("Pain review", Priority::Medium, "within 24 hours")),
            },
            RiskFactorRule {
                label: "Distress".to_string(),
                when: vec![Condition::Equals {
                    question_id: "mood".to_string(),
                    value: "distressed".to_string(),
                }],
                recommendation: Some(rec("Talk to someone", Priority::High, "today")),
            },
            RiskFactorRule {
                label: "Fainting".to_string(),
                when: vec![Condition::AnyOf {
                    question_id: "symptoms".to_string(),
                    values: vec!["fainting".to_string()],
                }],
                recommendation: None,
            },
            RiskFactorRule {
                label: "High pain".to_string(),
                when: vec![Condition::TextContains {
                    question_id: "notes".to_string(),
                    keywords: vec!["pain".to_string()],
                }],
                recommendation: Some(rec("Shadowed", Priority::Low, "never")),
            },
        ],
        tier_recommendations: TierRecommendations {
            self_care: vec![
                rec("Rest", Priority::Low, "ongoing"),
                rec("Monitor", Priority::Medium, "48 hours"),
            ],
            routine: vec![
                rec("Diary", Priority::Low, "daily"),
                rec("Book a visit", Priority::High, "2 weeks"),
                rec("Pharmacist", Priority::Medium, "this week"),
            ],
            urgent: vec![
                rec("Talk to someone", Priority::Medium, "today"),
                rec("Urgent care", Priority::High, "24 hours"),
            ],
            emergency: vec![
                rec("Bring medications", Priority::Medium, "when leaving"),
                rec("Call emergency services", Priority::High, "immediately"),
            ],
        },
    }
}

pub fn answer(question_id: &str, value: impl Into<ResponseValue>) -> Response {
    Response::new(question_id, value)
}
