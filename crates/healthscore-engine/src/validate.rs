use std::collections::{HashMap, HashSet};

use healthscore_core::error::ValidationError;
use healthscore_core::models::definition::{AnswerType, AssessmentDefinition, Question};
use healthscore_core::models::response::{Response, ResponseValue};

/// Answers that passed validation against one definition, keyed by
/// question id. Skipped (`null`) answers are not present.
#[derive(Debug, Clone)]
pub struct ResponseSet<'a> {
    answers: HashMap<&'a str, &'a ResponseValue>,
}

impl<'a> ResponseSet<'a> {
    /// Check every response against `definition`. Any problem rejects the
    /// whole set.
    pub fn new(
        definition: &'a AssessmentDefinition,
        responses: &'a [Response],
    ) -> Result<Self, ValidationError> {
        let questions: HashMap<&str, &Question> = definition
            .questions
            .iter()
            .map(|q| (q.id.as_str(), q))
            .collect();

        let mut seen = HashSet::with_capacity(responses.len());
        let mut answers = HashMap::with_capacity(responses.len());
        for response in responses {
            let question_id = response.question_id.as_str();
            let Some(question) = questions.get(question_id) else {
                return Err(ValidationError::UnknownQuestion {
                    assessment_id: definition.id.clone(),
                    question_id: question_id.to_string(),
                });
            };
            if !seen.insert(question_id) {
                return Err(ValidationError::DuplicateResponse(question_id.to_string()));
            }
            if let Some(value) = &response.value {
                check_value(question, value)?;
                answers.insert(question_id, value);
            }
        }
        Ok(Self { answers })
    }

    pub fn get(&self, question_id: &str) -> Option<&'a ResponseValue> {
        self.answers.get(question_id).copied()
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

fn check_value(question: &Question, value: &ResponseValue) -> Result<(), ValidationError> {
    let mismatch = || ValidationError::TypeMismatch {
        question_id: question.id.clone(),
        expected: question.answer_type,
    };
    let unknown_option = |value: &str| ValidationError::UnknownOption {
        question_id: question.id.clone(),
        value: value.to_string(),
    };

    match (question.answer_type, value) {
        (AnswerType::SingleSelect, ResponseValue::Text(choice)) => {
            if question.option(choice).is_none() {
                return Err(unknown_option(choice));
            }
        }
        (AnswerType::MultiSelect, ResponseValue::Choices(choices)) => {
            if let Some(choice) = choices.iter().find(|c| question.option(c).is_none()) {
                return Err(unknown_option(choice));
            }
        }
        (AnswerType::NumericScale | AnswerType::FreeNumber, ResponseValue::Number(n)) => {
            if !n.is_finite() {
                return Err(ValidationError::NotFinite(question.id.clone()));
            }
            if let Some(scale) = question.scale
                && !scale.contains(*n)
            {
                return Err(ValidationError::OutOfRange {
                    question_id: question.id.clone(),
                    value: *n,
                    min: scale.min,
                    max: scale.max,
                });
            }
        }
        (AnswerType::FreeText, ResponseValue::Text(_)) => {}
        _ => return Err(mismatch()),
    }
    Ok(())
}
