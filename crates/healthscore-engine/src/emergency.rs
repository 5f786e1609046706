use healthscore_core::models::condition::EmergencyRule;
use tracing::info;

use crate::predicate::all_hold;
use crate::validate::ResponseSet;

/// Rules whose conditions all hold, in declaration order.
///
/// Evaluated independently of the aggregate score: a low score never
/// suppresses a match, and a high score alone never produces one.
pub fn triggered_rules<'d>(
    responses: &ResponseSet<'_>,
    rules: &'d [EmergencyRule],
) -> Vec<&'d EmergencyRule> {
    let triggered: Vec<&EmergencyRule> = rules
        .iter()
        .filter(|rule| all_hold(&rule.conditions, responses))
        .collect();

    for rule in &triggered {
        info!(rule = %rule.id, label = %rule.label, "emergency rule matched");
    }
    triggered
}

/// True when any rule matches.
pub fn detect_emergency(responses: &ResponseSet<'_>, rules: &[EmergencyRule]) -> bool {
    rules
        .iter()
        .any(|rule| all_hold(&rule.conditions, responses))
}
