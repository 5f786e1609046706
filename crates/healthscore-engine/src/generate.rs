use std::collections::HashSet;

use healthscore_core::models::condition::EmergencyRule;
use healthscore_core::models::definition::AssessmentDefinition;
use healthscore_core::models::result::{Recommendation, RiskFactor, Tier};

use crate::predicate::all_hold;
use crate::validate::ResponseSet;

#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub risk_factors: Vec<RiskFactor>,
    pub recommendations: Vec<Recommendation>,
}

/// Build the risk factors and recommendations for a classified response set.
///
/// Risk factors: triggered emergency rules first, then every matching row
/// of the risk-factor table. Labels are deduplicated keeping the first.
///
/// Recommendations: the tier's items sorted high → medium → low (stable),
/// then the recommendations attached to the surviving risk factors in
/// discovery order. A title already listed is not repeated.
pub fn generate(
    definition: &AssessmentDefinition,
    tier: Tier,
    responses: &ResponseSet<'_>,
    triggered: &[&EmergencyRule],
) -> Generated {
    let mut labels = HashSet::new();
    let mut risk_factors = Vec::new();
    let mut targeted: Vec<&Recommendation> = Vec::new();

    for rule in triggered {
        if labels.insert(rule.label.as_str()) {
            risk_factors.push(RiskFactor {
                label: rule.label.clone(),
                source_question_id: rule.source_question_id().unwrap_or_default().to_string(),
            });
        }
    }

    for rule in &definition.risk_factor_rules {
        if !all_hold(&rule.when, responses) || !labels.insert(rule.label.as_str()) {
            continue;
        }
        risk_factors.push(RiskFactor {
            label: rule.label.clone(),
            source_question_id: rule.source_question_id().unwrap_or_default().to_string(),
        });
        if let Some(rec) = &rule.recommendation {
            targeted.push(rec);
        }
    }

    let mut tier_items: Vec<&Recommendation> =
        definition.tier_recommendations.for_tier(tier).iter().collect();
    tier_items.sort_by_key(|r| r.priority.rank());

    let mut titles = HashSet::new();
    let recommendations = tier_items
        .into_iter()
        .chain(targeted)
        .filter(|r| titles.insert(r.title.as_str()))
        .cloned()
        .collect();

    Generated {
        risk_factors,
        recommendations,
    }
}
