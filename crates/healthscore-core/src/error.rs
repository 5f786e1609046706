use thiserror::Error;

use crate::models::definition::AnswerType;

/// A malformed assessment definition. Raised once at registry load; the
/// affected assessment type is not offered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("assessment definition has an empty id")]
    EmptyId,

    #[error("duplicate assessment id '{0}'")]
    DuplicateAssessment(String),

    #[error("{assessment_id}: duplicate question id '{question_id}'")]
    DuplicateQuestion {
        assessment_id: String,
        question_id: String,
    },

    #[error(
        "{assessment_id}: tier thresholds must satisfy 0 <= low < medium < high <= 100 \
         (got low={low}, medium={medium}, high={high})"
    )]
    UnorderedThresholds {
        assessment_id: String,
        low: f64,
        medium: f64,
        high: f64,
    },

    #[error(
        "{assessment_id}: question '{question_id}' must be weighted by a positive finite number"
    )]
    InvalidQuestionWeight {
        assessment_id: String,
        question_id: String,
    },

    #[error("{assessment_id}: select question '{question_id}' declares no options")]
    NoOptions {
        assessment_id: String,
        question_id: String,
    },

    #[error("{assessment_id}: question '{question_id}' declares option '{value}' more than once")]
    DuplicateOption {
        assessment_id: String,
        question_id: String,
        value: String,
    },

    #[error(
        "{assessment_id}: option '{value}' of question '{question_id}' has weight {weight} \
         outside [{min}, {max}]"
    )]
    OptionWeightOutOfRange {
        assessment_id: String,
        question_id: String,
        value: String,
        weight: f64,
        min: f64,
        max: f64,
    },

    #[error("{assessment_id}: question '{question_id}' has no valid min < max scale")]
    InvalidScale {
        assessment_id: String,
        question_id: String,
    },

    #[error("{assessment_id}: rule '{rule}' has no conditions")]
    EmptyRule { assessment_id: String, rule: String },

    #[error("{assessment_id}: emergency rule id '{rule}' is declared more than once")]
    DuplicateRule { assessment_id: String, rule: String },

    #[error("{assessment_id}: rule '{rule}' references unknown question '{question_id}'")]
    RuleUnknownQuestion {
        assessment_id: String,
        rule: String,
        question_id: String,
    },

    #[error(
        "{assessment_id}: rule '{rule}' applies '{op}' to question '{question_id}' \
         of type {answer_type}"
    )]
    RuleTypeMismatch {
        assessment_id: String,
        rule: String,
        question_id: String,
        op: &'static str,
        answer_type: AnswerType,
    },

    #[error(
        "{assessment_id}: rule '{rule}' expects option '{value}' which question \
         '{question_id}' does not declare"
    )]
    RuleUnknownOption {
        assessment_id: String,
        rule: String,
        question_id: String,
        value: String,
    },
}

/// A per-call rejection of a response set. No result is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("unknown assessment type: {0}")]
    UnknownAssessment(String),

    #[error("unknown question '{question_id}' for assessment '{assessment_id}'")]
    UnknownQuestion {
        assessment_id: String,
        question_id: String,
    },

    #[error("question '{0}' was answered more than once")]
    DuplicateResponse(String),

    #[error("question '{question_id}' expects a {expected} answer")]
    TypeMismatch {
        question_id: String,
        expected: AnswerType,
    },

    #[error("'{value}' is not an option of question '{question_id}'")]
    UnknownOption { question_id: String, value: String },

    #[error("question '{0}' was answered with a non-finite number")]
    NotFinite(String),

    #[error("question '{question_id}': {value} is outside [{min}, {max}]")]
    OutOfRange {
        question_id: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}
