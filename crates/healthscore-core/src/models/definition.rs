use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::condition::{Condition, EmergencyRule, RiskFactorRule};
use super::result::{Recommendation, Tier};
use crate::error::{ConfigurationError, CoreError};

/// Lowest allowed option weight (least risk).
pub const OPTION_WEIGHT_MIN: f64 = 1.0;
/// Highest allowed option weight (most risk).
pub const OPTION_WEIGHT_MAX: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum AnswerType {
    SingleSelect,
    MultiSelect,
    NumericScale,
    FreeNumber,
    FreeText,
}

impl AnswerType {
    pub fn is_select(self) -> bool {
        matches!(self, AnswerType::SingleSelect | AnswerType::MultiSelect)
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, AnswerType::NumericScale | AnswerType::FreeNumber)
    }
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AnswerType::SingleSelect => "single-select",
            AnswerType::MultiSelect => "multi-select",
            AnswerType::NumericScale => "numeric-scale",
            AnswerType::FreeNumber => "free-number",
            AnswerType::FreeText => "free-text",
        })
    }
}

/// One selectable answer. Higher weight means higher risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleDirection {
    /// Higher values are riskier (e.g. pain level).
    RiskAscending,
    /// Lower values are riskier (e.g. energy level).
    RiskDescending,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericScale {
    pub min: f64,
    pub max: f64,
    pub direction: ScaleDirection,
}

impl NumericScale {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Finite bounds with `min < max`.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub answer_type: AnswerType,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<AnswerOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<NumericScale>,
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }

    pub fn min_option_weight(&self) -> Option<f64> {
        self.options.iter().map(|o| o.weight).reduce(f64::min)
    }

    pub fn max_option_weight(&self) -> Option<f64> {
        self.options.iter().map(|o| o.weight).reduce(f64::max)
    }
}

/// Score cut points, read in the definition's own polarity.
///
/// Under `higher_is_healthier` the bands are `>= high` self care,
/// `[medium, high)` routine and `< medium` urgent, so `low` is unused.
/// Under `higher_is_riskier` they mirror to `< low` self care,
/// `[low, medium)` routine and `>= medium` urgent, so `high` is unused.
/// The unused cut point still has to keep the three ordered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierThresholds {
    /// Self care / routine boundary when higher is riskier.
    pub low: f64,
    /// Routine / urgent boundary in both polarities.
    pub medium: f64,
    /// Self care / routine boundary when higher is healthier.
    pub high: f64,
}

impl TierThresholds {
    pub fn is_ordered(&self) -> bool {
        0.0 <= self.low && self.low < self.medium && self.medium < self.high && self.high <= 100.0
    }
}

/// Which end of the 0–100 scale is the healthy one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScorePolarity {
    HigherIsHealthier,
    HigherIsRiskier,
}

impl ScorePolarity {
    /// Convert a risk-oriented score into this polarity.
    pub fn orient(self, risk_score: u8) -> u8 {
        match self {
            ScorePolarity::HigherIsRiskier => risk_score,
            ScorePolarity::HigherIsHealthier => 100u8.saturating_sub(risk_score),
        }
    }
}

/// Fixed, ordered recommendation list per tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TierRecommendations {
    #[serde(default)]
    pub self_care: Vec<Recommendation>,
    #[serde(default)]
    pub routine: Vec<Recommendation>,
    #[serde(default)]
    pub urgent: Vec<Recommendation>,
    #[serde(default)]
    pub emergency: Vec<Recommendation>,
}

impl TierRecommendations {
    pub fn for_tier(&self, tier: Tier) -> &[Recommendation] {
        match tier {
            Tier::SelfCare => &self.self_care,
            Tier::Routine => &self.routine,
            Tier::Urgent => &self.urgent,
            Tier::Emergency => &self.emergency,
        }
    }
}

fn default_version() -> u32 {
    1
}

/// Immutable description of one assessment type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentDefinition {
    pub id: String,
    pub name: String,
    #[serde(default = "default_version")]
    pub version: u32,
    pub polarity: ScorePolarity,
    pub questions: Vec<Question>,
    pub tier_thresholds: TierThresholds,
    #[serde(default)]
    pub emergency_rules: Vec<EmergencyRule>,
    #[serde(default)]
    pub risk_factor_rules: Vec<RiskFactorRule>,
    #[serde(default)]
    pub tier_recommendations: TierRecommendations,
}

impl AssessmentDefinition {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn required_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.required)
    }

    /// Check the well-formedness invariants. Returns the first violation.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.id.trim().is_empty() {
            return Err(ConfigurationError::EmptyId);
        }
        let assessment_id = || self.id.clone();

        if !self.tier_thresholds.is_ordered() {
            return Err(ConfigurationError::UnorderedThresholds {
                assessment_id: assessment_id(),
                low: self.tier_thresholds.low,
                medium: self.tier_thresholds.medium,
                high: self.tier_thresholds.high,
            });
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id.as_str()) {
                return Err(ConfigurationError::DuplicateQuestion {
                    assessment_id: assessment_id(),
                    question_id: question.id.clone(),
                });
            }
            self.validate_question(question)?;
        }

        let mut rule_ids = HashSet::new();
        for rule in &self.emergency_rules {
            if !rule_ids.insert(rule.id.as_str()) {
                return Err(ConfigurationError::DuplicateRule {
                    assessment_id: assessment_id(),
                    rule: rule.id.clone(),
                });
            }
            self.validate_conditions(&rule.id, &rule.conditions)?;
        }
        for rule in &self.risk_factor_rules {
            self.validate_conditions(&rule.label, &rule.when)?;
        }
        Ok(())
    }

    fn validate_question(&self, question: &Question) -> Result<(), ConfigurationError> {
        if !question.weight.is_finite() || question.weight <= 0.0 {
            return Err(ConfigurationError::InvalidQuestionWeight {
                assessment_id: self.id.clone(),
                question_id: question.id.clone(),
            });
        }

        match question.answer_type {
            AnswerType::SingleSelect | AnswerType::MultiSelect => {
                if question.options.is_empty() {
                    return Err(ConfigurationError::NoOptions {
                        assessment_id: self.id.clone(),
                        question_id: question.id.clone(),
                    });
                }
                let mut values = HashSet::new();
                for option in &question.options {
                    if !values.insert(option.value.as_str()) {
                        return Err(ConfigurationError::DuplicateOption {
                            assessment_id: self.id.clone(),
                            question_id: question.id.clone(),
                            value: option.value.clone(),
                        });
                    }
                    if !(OPTION_WEIGHT_MIN..=OPTION_WEIGHT_MAX).contains(&option.weight) {
                        return Err(ConfigurationError::OptionWeightOutOfRange {
                            assessment_id: self.id.clone(),
                            question_id: question.id.clone(),
                            value: option.value.clone(),
                            weight: option.weight,
                            min: OPTION_WEIGHT_MIN,
                            max: OPTION_WEIGHT_MAX,
                        });
                    }
                }
            }
            AnswerType::NumericScale | AnswerType::FreeNumber | AnswerType::FreeText => {}
        }

        // A numeric-scale question needs a scale; any declared scale bounds
        // the accepted answers, so it must be usable whatever the type.
        let scale_ok = match question.scale {
            Some(scale) => scale.is_valid(),
            None => question.answer_type != AnswerType::NumericScale,
        };
        if !scale_ok {
            return Err(ConfigurationError::InvalidScale {
                assessment_id: self.id.clone(),
                question_id: question.id.clone(),
            });
        }
        Ok(())
    }

    fn validate_conditions(
        &self,
        rule: &str,
        conditions: &[Condition],
    ) -> Result<(), ConfigurationError> {
        if conditions.is_empty() {
            return Err(ConfigurationError::EmptyRule {
                assessment_id: self.id.clone(),
                rule: rule.to_string(),
            });
        }

        for condition in conditions {
            let question_id = condition.question_id();
            let Some(question) = self.question(question_id) else {
                return Err(ConfigurationError::RuleUnknownQuestion {
                    assessment_id: self.id.clone(),
                    rule: rule.to_string(),
                    question_id: question_id.to_string(),
                });
            };

            let type_ok = match condition {
                Condition::Equals { .. } | Condition::AnyOf { .. } => {
                    question.answer_type.is_select()
                }
                Condition::AtLeast { .. } | Condition::AtMost { .. } => {
                    question.answer_type.is_numeric()
                }
                Condition::TextContains { keywords, .. } => {
                    question.answer_type == AnswerType::FreeText && !keywords.is_empty()
                }
            };
            if !type_ok {
                return Err(ConfigurationError::RuleTypeMismatch {
                    assessment_id: self.id.clone(),
                    rule: rule.to_string(),
                    question_id: question_id.to_string(),
                    op: condition.op(),
                    answer_type: question.answer_type,
                });
            }

            let expected: &[String] = match condition {
                Condition::Equals { value, .. } => std::slice::from_ref(value),
                Condition::AnyOf { values, .. } => values,
                _ => &[],
            };
            if let Some(missing) = expected.iter().find(|v| question.option(v).is_none()) {
                return Err(ConfigurationError::RuleUnknownOption {
                    assessment_id: self.id.clone(),
                    rule: rule.to_string(),
                    question_id: question_id.to_string(),
                    value: missing.clone(),
                });
            }
        }
        Ok(())
    }
}
