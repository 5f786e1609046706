//! Shorthand constructors for the built-in definitions.

use healthscore_core::models::condition::{Condition, EmergencyRule, RiskFactorRule};
use healthscore_core::models::definition::{
    AnswerOption, AnswerType, NumericScale, Question, ScaleDirection, TierRecommendations,
};
use healthscore_core::models::result::{Priority, Recommendation};

fn options(options: &[(&str, f64)]) -> Vec<AnswerOption> {
    options
        .iter()
        .map(|(value, weight)| AnswerOption {
            value: value.to_string(),
            weight: *weight,
        })
        .collect()
}

fn question(id: &str, prompt: &str, answer_type: AnswerType, weight: f64) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        answer_type,
        weight,
        required: false,
        options: vec![],
        scale: None,
    }
}

pub(crate) fn single_select(
    id: &str,
    prompt: &str,
    weight: f64,
    choices: &[(&str, f64)],
) -> Question {
    Question {
        options: options(choices),
        ..question(id, prompt, AnswerType::SingleSelect, weight)
    }
}

pub(crate) fn multi_select(
    id: &str,
    prompt: &str,
    weight: f64,
    choices: &[(&str, f64)],
) -> Question {
    Question {
        options: options(choices),
        ..question(id, prompt, AnswerType::MultiSelect, weight)
    }
}

pub(crate) fn numeric_scale(
    id: &str,
    prompt: &str,
    weight: f64,
    (min, max): (f64, f64),
    direction: ScaleDirection,
) -> Question {
    Question {
        scale: Some(NumericScale {
            min,
            max,
            direction,
        }),
        ..question(id, prompt, AnswerType::NumericScale, weight)
    }
}

pub(crate) fn free_number(id: &str, prompt: &str) -> Question {
    question(id, prompt, AnswerType::FreeNumber, 1.0)
}

pub(crate) fn free_text(id: &str, prompt: &str) -> Question {
    question(id, prompt, AnswerType::FreeText, 1.0)
}

pub(crate) fn required(question: Question) -> Question {
    Question {
        required: true,
        ..question
    }
}

pub(crate) fn equals(question_id: &str, value: &str) -> Condition {
    Condition::Equals {
        question_id: question_id.to_string(),
        value: value.to_string(),
    }
}

pub(crate) fn any_of(question_id: &str, values: &[&str]) -> Condition {
    Condition::AnyOf {
        question_id: question_id.to_string(),
        values: values.iter().map(|v| v.to_string()).collect(),
    }
}

pub(crate) fn at_least(question_id: &str, threshold: f64) -> Condition {
    Condition::AtLeast {
        question_id: question_id.to_string(),
        threshold,
    }
}

pub(crate) fn at_most(question_id: &str, threshold: f64) -> Condition {
    Condition::AtMost {
        question_id: question_id.to_string(),
        threshold,
    }
}

pub(crate) fn text_contains(question_id: &str, keywords: &[&str]) -> Condition {
    Condition::TextContains {
        question_id: question_id.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

pub(crate) fn emergency(id: &str, label: &str, conditions: Vec<Condition>) -> EmergencyRule {
    EmergencyRule {
        id: id.to_string(),
        label: label.to_string(),
        conditions,
    }
}

pub(crate) fn factor(
    label: &str,
    when: Vec<Condition>,
    recommendation: Option<Recommendation>,
) -> RiskFactorRule {
    RiskFactorRule {
        label: label.to_string(),
        when,
        recommendation,
    }
}

pub(crate) fn rec(title: &str, priority: Priority, timeframe: &str) -> Recommendation {
    Recommendation::new(title, priority, timeframe)
}

/// Tier items shared by the physical-health assessments.
pub(crate) fn standard_tier_recommendations() -> TierRecommendations {
    use Priority::{High, Low, Medium};

    TierRecommendations {
        self_care: vec![
            rec("Monitor your symptoms at home", Medium, "next 48 hours"),
            rec("Rest and stay hydrated", Low, "ongoing"),
            rec("Seek care if symptoms worsen", Medium, "as needed"),
        ],
        routine: vec![
            rec("Book an appointment with your primary care provider", High, "within 1-2 weeks"),
            rec("Keep a daily symptom diary", Medium, "until your appointment"),
            rec("Review over-the-counter options with a pharmacist", Low, "this week"),
        ],
        urgent: vec![
            rec("See a doctor or visit urgent care", High, "within 24 hours"),
            rec("Arrange for someone to stay with you", Medium, "today"),
            rec("Prepare a list of your symptoms and medications", Medium, "before your visit"),
        ],
        emergency: vec![
            rec(
                "Call emergency services or go to the nearest emergency department",
                High,
                "immediately",
            ),
            rec("Do not drive yourself", High, "immediately"),
            rec("Bring a list of your current medications", Medium, "when seeking care"),
        ],
    }
}
