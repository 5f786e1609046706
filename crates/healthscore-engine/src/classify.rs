use healthscore_core::models::definition::{ScorePolarity, TierThresholds};
use healthscore_core::models::result::Tier;

/// Map a score to a tier.
///
/// `is_emergency` wins unconditionally. Otherwise the thresholds are read
/// in the definition's polarity, and the worst score band is `Urgent`:
/// only an emergency rule can produce `Emergency`.
///
/// | polarity | self_care | routine | urgent |
/// |---|---|---|---|
/// | higher is healthier | `>= high` | `[medium, high)` | `< medium` |
/// | higher is riskier | `< low` | `[low, medium)` | `>= medium` |
pub fn classify(
    score: u8,
    is_emergency: bool,
    thresholds: &TierThresholds,
    polarity: ScorePolarity,
) -> Tier {
    if is_emergency {
        return Tier::Emergency;
    }

    let score = f64::from(score);
    match polarity {
        ScorePolarity::HigherIsHealthier => {
            if score >= thresholds.high {
                Tier::SelfCare
            } else if score >= thresholds.medium {
                Tier::Routine
            } else {
                Tier::Urgent
            }
        }
        ScorePolarity::HigherIsRiskier => {
            if score < thresholds.low {
                Tier::SelfCare
            } else if score < thresholds.medium {
                Tier::Routine
            } else {
                Tier::Urgent
            }
        }
    }
}
