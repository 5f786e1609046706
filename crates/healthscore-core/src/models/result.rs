use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Ordinal urgency classification, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tier {
    SelfCare,
    Routine,
    Urgent,
    Emergency,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::SelfCare, Tier::Routine, Tier::Urgent, Tier::Emergency];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::SelfCare => "self_care",
            Tier::Routine => "routine",
            Tier::Urgent => "urgent",
            Tier::Emergency => "emergency",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort key: high first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Recommendation {
    pub title: String,
    pub priority: Priority,
    pub timeframe: String,
}

impl Recommendation {
    pub fn new(title: impl Into<String>, priority: Priority, timeframe: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority,
            timeframe: timeframe.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskFactor {
    pub label: String,
    pub source_question_id: String,
}

/// The engine's authoritative output for one response set.
///
/// `score` is in `[0, 100]` and `confidence` in `[0, 1]`. Recommendations
/// list the tier-level items first (high, medium, low), then the
/// factor-specific items in the order their risk factors were found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoringResult {
    pub assessment_id: String,
    pub score: u8,
    pub tier: Tier,
    pub is_emergency: bool,
    pub confidence: f64,
    /// Ids of the emergency rules that matched, in declaration order.
    pub triggered_rules: Vec<String>,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendations: Vec<Recommendation>,
}
