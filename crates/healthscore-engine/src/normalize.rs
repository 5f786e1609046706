use healthscore_core::models::definition::{
    AnswerType, OPTION_WEIGHT_MAX, OPTION_WEIGHT_MIN, Question, ScaleDirection,
};
use healthscore_core::models::response::ResponseValue;

/// A question's normalized input to the aggregate and its ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub contribution: f64,
    pub max_contribution: f64,
}

/// Normalize one answer against its question.
///
/// Returns `None` when the question does not take part in the aggregate:
/// unanswered questions, free-number and free-text answers, and answers
/// that do not fit the question. Never panics.
pub fn normalize(question: &Question, value: Option<&ResponseValue>) -> Option<Contribution> {
    let value = value?;
    let weight = question.weight;

    match question.answer_type {
        AnswerType::SingleSelect => {
            let chosen = question.option(value.as_text()?)?;
            let max = question.max_option_weight()?;
            Some(Contribution {
                contribution: chosen.weight * weight,
                max_contribution: max * weight,
            })
        }
        AnswerType::MultiSelect => {
            let choices = value.as_choices()?;
            let max = question.max_option_weight()?;
            // Mean of the selected weights, not the sum.
            let selected: Vec<f64> = question
                .options
                .iter()
                .filter(|o| choices.iter().any(|c| *c == o.value))
                .map(|o| o.weight)
                .collect();
            let base = if selected.is_empty() {
                question.min_option_weight()?
            } else {
                selected.iter().sum::<f64>() / selected.len() as f64
            };
            Some(Contribution {
                contribution: base * weight,
                max_contribution: max * weight,
            })
        }
        AnswerType::NumericScale => {
            let scale = question.scale.filter(|s| s.max > s.min)?;
            let raw = value.as_number()?;
            let position = ((raw - scale.min) / (scale.max - scale.min)).clamp(0.0, 1.0);
            let span = OPTION_WEIGHT_MAX - OPTION_WEIGHT_MIN;
            let mapped = match scale.direction {
                ScaleDirection::RiskAscending => OPTION_WEIGHT_MIN + span * position,
                ScaleDirection::RiskDescending => OPTION_WEIGHT_MAX - span * position,
            };
            Some(Contribution {
                contribution: mapped * weight,
                max_contribution: OPTION_WEIGHT_MAX * weight,
            })
        }
        AnswerType::FreeNumber | AnswerType::FreeText => None,
    }
}
