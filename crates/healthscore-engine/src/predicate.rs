use healthscore_core::models::condition::Condition;

use crate::validate::ResponseSet;

/// Evaluate one condition. Unanswered questions never satisfy a condition.
pub fn condition_holds(condition: &Condition, responses: &ResponseSet<'_>) -> bool {
    let Some(value) = responses.get(condition.question_id()) else {
        return false;
    };

    match condition {
        Condition::Equals { value: expected, .. } => value.selects(expected),
        Condition::AnyOf { values, .. } => values.iter().any(|v| value.selects(v)),
        Condition::AtLeast { threshold, .. } => value.as_number().is_some_and(|n| n >= *threshold),
        Condition::AtMost { threshold, .. } => value.as_number().is_some_and(|n| n <= *threshold),
        Condition::TextContains { keywords, .. } => value.as_text().is_some_and(|text| {
            let text = text.to_lowercase();
            keywords
                .iter()
                .any(|k| !k.is_empty() && text.contains(&k.to_lowercase()))
        }),
    }
}

/// True when `conditions` is non-empty and every condition holds.
pub fn all_hold(conditions: &[Condition], responses: &ResponseSet<'_>) -> bool {
    !conditions.is_empty() && conditions.iter().all(|c| condition_holds(c, responses))
}
