use crate::normalize::Contribution;

/// Score reported when nothing normalizable was answered.
pub const NEUTRAL_SCORE: u8 = 50;

/// Sum contributions into a risk-oriented 0–100 score: 0 is the lowest
/// possible risk ratio, 100 the highest.
pub fn aggregate<I>(contributions: I) -> u8
where
    I: IntoIterator<Item = Contribution>,
{
    let (total, ceiling) = contributions
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(total, ceiling), c| {
            (total + c.contribution, ceiling + c.max_contribution)
        });

    if ceiling <= 0.0 || !ceiling.is_finite() || !total.is_finite() {
        return NEUTRAL_SCORE;
    }

    (100.0 * total / ceiling).round().clamp(0.0, 100.0) as u8
}
