use healthscore_core::error::ValidationError;
use healthscore_core::models::definition::AssessmentDefinition;
use healthscore_core::models::response::Response;
use healthscore_core::models::result::ScoringResult;
use tracing::debug;

use crate::aggregate::aggregate;
use crate::classify::classify;
use crate::emergency::triggered_rules;
use crate::generate::generate;
use crate::normalize::normalize;
use crate::validate::ResponseSet;

/// Score one response set against a definition.
///
/// `definition` is expected to have passed [`AssessmentDefinition::validate`]
/// (the [`Registry`](crate::Registry) guarantees this). The call is pure:
/// identical inputs give identical results, and nothing is retained.
pub fn score(
    definition: &AssessmentDefinition,
    responses: &[Response],
) -> Result<ScoringResult, ValidationError> {
    let answers = ResponseSet::new(definition, responses)?;

    let risk_score = aggregate(
        definition
            .questions
            .iter()
            .filter_map(|q| normalize(q, answers.get(&q.id))),
    );
    let score = definition.polarity.orient(risk_score);

    let triggered = triggered_rules(&answers, &definition.emergency_rules);
    let is_emergency = !triggered.is_empty();
    let tier = classify(
        score,
        is_emergency,
        &definition.tier_thresholds,
        definition.polarity,
    );

    let generated = generate(definition, tier, &answers, &triggered);
    let confidence = confidence(definition, &answers);

    debug!(
        assessment = %definition.id,
        score,
        tier = %tier,
        is_emergency,
        confidence,
        answered = answers.len(),
        "scored assessment"
    );

    Ok(ScoringResult {
        assessment_id: definition.id.clone(),
        score,
        tier,
        is_emergency,
        confidence,
        triggered_rules: triggered.iter().map(|r| r.id.clone()).collect(),
        risk_factors: generated.risk_factors,
        recommendations: generated.recommendations,
    })
}

/// Fraction of required questions answered; 1 when none are required.
fn confidence(definition: &AssessmentDefinition, answers: &ResponseSet<'_>) -> f64 {
    let (answered, total) = definition
        .required_questions()
        .fold((0usize, 0usize), |(answered, total), q| {
            (answered + usize::from(answers.is_answered(&q.id)), total + 1)
        });

    if total == 0 {
        1.0
    } else {
        answered as f64 / total as f64
    }
}
