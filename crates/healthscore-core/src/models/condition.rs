use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::result::Recommendation;

/// A single predicate over one question's raw answer.
///
/// Shared by emergency rules and risk-factor rules. A condition over an
/// unanswered question never holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "op", rename_all = "snake_case")]
#[ts(export)]
pub enum Condition {
    /// Single-select answer equals `value`, or multi-select answer contains it.
    #[serde(rename_all = "camelCase")]
    Equals { question_id: String, value: String },
    /// Like `Equals`, for any of `values`.
    #[serde(rename_all = "camelCase")]
    AnyOf {
        question_id: String,
        values: Vec<String>,
    },
    /// Numeric answer is `>= threshold`.
    #[serde(rename_all = "camelCase")]
    AtLeast { question_id: String, threshold: f64 },
    /// Numeric answer is `<= threshold`.
    #[serde(rename_all = "camelCase")]
    AtMost { question_id: String, threshold: f64 },
    /// Free-text answer contains any keyword, case-insensitively.
    #[serde(rename_all = "camelCase")]
    TextContains {
        question_id: String,
        keywords: Vec<String>,
    },
}

impl Condition {
    pub fn question_id(&self) -> &str {
        match self {
            Condition::Equals { question_id, .. }
            | Condition::AnyOf { question_id, .. }
            | Condition::AtLeast { question_id, .. }
            | Condition::AtMost { question_id, .. }
            | Condition::TextContains { question_id, .. } => question_id,
        }
    }

    /// Operator name as it appears in definition files.
    pub fn op(&self) -> &'static str {
        match self {
            Condition::Equals { .. } => "equals",
            Condition::AnyOf { .. } => "any_of",
            Condition::AtLeast { .. } => "at_least",
            Condition::AtMost { .. } => "at_most",
            Condition::TextContains { .. } => "text_contains",
        }
    }
}

/// Red-flag pattern that forces the `emergency` tier when every condition
/// holds, regardless of the aggregate score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EmergencyRule {
    pub id: String,
    /// Reported as a risk factor when the rule matches.
    pub label: String,
    pub conditions: Vec<Condition>,
}

impl EmergencyRule {
    pub fn source_question_id(&self) -> Option<&str> {
        self.conditions.first().map(Condition::question_id)
    }
}

/// Row of the risk-factor table: when every condition holds, `label` is
/// reported and `recommendation` (if any) is appended after the tier items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskFactorRule {
    pub label: String,
    pub when: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}

impl RiskFactorRule {
    pub fn source_question_id(&self) -> Option<&str> {
        self.when.first().map(Condition::question_id)
    }
}
