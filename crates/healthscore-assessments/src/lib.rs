//! healthscore-assessments
//!
//! Built-in assessment definitions. Pure data, no scoring behavior.
//! Each assessment declares its questions, option weights, tier
//! thresholds, emergency rules, risk-factor rules and tier
//! recommendations.

mod build;
pub mod assessments;

use healthscore_core::models::definition::AssessmentDefinition;
use healthscore_core::models::result::ScoringResult;

/// Trait implemented by each built-in assessment type.
pub trait Assessment: Send + Sync {
    /// The static definition this assessment is scored against.
    fn definition(&self) -> &AssessmentDefinition;

    /// Unique identifier (e.g., "symptom-checker").
    fn id(&self) -> &str {
        &self.definition().id
    }

    /// Human-readable name (e.g., "Symptom Checker").
    fn name(&self) -> &str {
        &self.definition().name
    }

    /// Format a scoring result as plain structured text for a narrative
    /// service prompt. The text grounds generated prose; it carries no
    /// authority over the classification itself.
    fn to_structured_input(&self, result: &ScoringResult) -> String {
        let mut output = format!("## {}\n\n", self.name());
        output.push_str(&format!("- Score: {}/100\n", result.score));
        output.push_str(&format!("- Tier: {}\n", result.tier));
        output.push_str(&format!("- Emergency: {}\n", result.is_emergency));
        output.push_str(&format!("- Confidence: {:.0}%\n", result.confidence * 100.0));

        if !result.risk_factors.is_empty() {
            output.push_str("\n### Risk factors\n");
            for factor in &result.risk_factors {
                let prompt = self
                    .definition()
                    .question(&factor.source_question_id)
                    .map(|q| q.prompt.as_str())
                    .unwrap_or(factor.source_question_id.as_str());
                output.push_str(&format!("- {} ({})\n", factor.label, prompt));
            }
        }

        if !result.recommendations.is_empty() {
            output.push_str("\n### Recommendations\n");
            for rec in &result.recommendations {
                output.push_str(&format!(
                    "- [{}] {} ({})\n",
                    rec.priority, rec.title, rec.timeframe
                ));
            }
        }
        output
    }
}

/// Definitions loaded at runtime render the same way as the built-ins.
impl Assessment for AssessmentDefinition {
    fn definition(&self) -> &AssessmentDefinition {
        self
    }
}

/// Return all built-in assessments.
pub fn all_assessments() -> Vec<Box<dyn Assessment>> {
    vec![
        Box::new(assessments::symptom_checker::SymptomChecker),
        Box::new(assessments::health_assessment::HealthAssessment),
        Box::new(assessments::medicine_advisor::MedicineAdvisor),
        Box::new(assessments::mental_health::MentalHealth),
    ]
}

/// Look up a built-in assessment by ID.
pub fn get_assessment(id: &str) -> Option<Box<dyn Assessment>> {
    all_assessments().into_iter().find(|a| a.id() == id)
}
