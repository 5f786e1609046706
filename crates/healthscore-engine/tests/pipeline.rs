mod common;

use healthscore_core::models::definition::{ScorePolarity, TierThresholds};
use healthscore_core::models::response::ResponseValue;
use healthscore_core::models::result::Tier;
use healthscore_engine::aggregate::{NEUTRAL_SCORE, aggregate};
use healthscore_engine::classify::classify;
use healthscore_engine::normalize::{Contribution, normalize};

use common::fixture;

fn contribution(contribution: f64, max_contribution: f64) -> Contribution {
    Contribution {
        contribution,
        max_contribution,
    }
}

fn normalized(question_id: &str, value: ResponseValue) -> Option<Contribution> {
    let def = fixture(ScorePolarity::HigherIsRiskier);
    let question = def.question(question_id).expect("fixture question");
    normalize(question, Some(&value))
}

#[test]
fn single_select_uses_option_weight() {
    assert_eq!(
        normalized("mood", ResponseValue::from("uneasy")),
        Some(contribution(3.0, 5.0))
    );
}

#[test]
fn multi_select_averages_selected_weights() {
    assert_eq!(
        normalized("symptoms", ResponseValue::from(vec!["cough", "fainting"])),
        Some(contribution(3.5, 5.0))
    );
}

#[test]
fn multi_select_with_nothing_selected_uses_minimum_weight() {
    assert_eq!(
        normalized("symptoms", ResponseValue::Choices(vec![])),
        Some(contribution(1.0, 5.0))
    );
}

#[test]
fn ascending_scale_maps_linearly_onto_weight_range() {
    assert_eq!(normalized("pain", 0.0.into()), Some(contribution(2.0, 10.0)));
    assert_eq!(normalized("pain", 5.0.into()), Some(contribution(6.0, 10.0)));
    assert_eq!(normalized("pain", 10.0.into()), Some(contribution(10.0, 10.0)));
}

#[test]
fn descending_scale_is_riskier_at_the_bottom() {
    assert_eq!(normalized("energy", 0.0.into()), Some(contribution(5.0, 5.0)));
    assert_eq!(normalized("energy", 10.0.into()), Some(contribution(1.0, 5.0)));
}

#[test]
fn free_answers_and_unanswered_questions_are_excluded() {
    let def = fixture(ScorePolarity::HigherIsRiskier);
    assert_eq!(normalized("temperature", 101.0.into()), None);
    assert_eq!(normalized("notes", "feeling off".into()), None);
    assert_eq!(normalize(def.question("mood").unwrap(), None), None);
}

#[test]
fn mismatched_answer_is_excluded_not_fatal() {
    assert_eq!(normalized("pain", "a lot".into()), None);
    assert_eq!(normalized("mood", "unlisted".into()), None);
}

#[test]
fn aggregate_without_contributions_is_neutral() {
    assert_eq!(aggregate(Vec::new()), NEUTRAL_SCORE);
    assert_eq!(aggregate(vec![contribution(0.0, 0.0)]), NEUTRAL_SCORE);
}

#[test]
fn aggregate_is_ratio_of_sums() {
    assert_eq!(
        aggregate(vec![contribution(3.0, 5.0), contribution(6.0, 10.0)]),
        60
    );
}

#[test]
fn aggregate_rounds_to_nearest() {
    assert_eq!(aggregate(vec![contribution(1.0, 3.0)]), 33);
    assert_eq!(aggregate(vec![contribution(2.0, 3.0)]), 67);
    assert_eq!(aggregate(vec![contribution(1.0, 8.0)]), 13);
}

#[test]
fn aggregate_is_clamped() {
    assert_eq!(aggregate(vec![contribution(12.0, 10.0)]), 100);
    assert_eq!(aggregate(vec![contribution(-3.0, 10.0)]), 0);
}

const THRESHOLDS: TierThresholds = TierThresholds {
    low: 30.0,
    medium: 50.0,
    high: 70.0,
};

#[test]
fn emergency_overrides_any_score() {
    for polarity in [ScorePolarity::HigherIsHealthier, ScorePolarity::HigherIsRiskier] {
        for score in [0, 50, 100] {
            assert_eq!(classify(score, true, &THRESHOLDS, polarity), Tier::Emergency);
        }
    }
}

#[test]
fn healthier_polarity_bands() {
    let tier = |score| classify(score, false, &THRESHOLDS, ScorePolarity::HigherIsHealthier);
    assert_eq!(tier(100), Tier::SelfCare);
    assert_eq!(tier(70), Tier::SelfCare);
    assert_eq!(tier(69), Tier::Routine);
    assert_eq!(tier(50), Tier::Routine);
    assert_eq!(tier(49), Tier::Urgent);
    assert_eq!(tier(29), Tier::Urgent);
    assert_eq!(tier(0), Tier::Urgent);
}

#[test]
fn riskier_polarity_bands() {
    let tier = |score| classify(score, false, &THRESHOLDS, ScorePolarity::HigherIsRiskier);
    assert_eq!(tier(0), Tier::SelfCare);
    assert_eq!(tier(29), Tier::SelfCare);
    assert_eq!(tier(30), Tier::Routine);
    assert_eq!(tier(49), Tier::Routine);
    assert_eq!(tier(50), Tier::Urgent);
    assert_eq!(tier(100), Tier::Urgent);
}

#[test]
fn each_polarity_ignores_its_collapsed_cut_point() {
    let moved_high = TierThresholds {
        high: 95.0,
        ..THRESHOLDS
    };
    let moved_low = TierThresholds {
        low: 5.0,
        ..THRESHOLDS
    };

    for score in (0..=100).step_by(5) {
        assert_eq!(
            classify(score, false, &moved_high, ScorePolarity::HigherIsRiskier),
            classify(score, false, &THRESHOLDS, ScorePolarity::HigherIsRiskier)
        );
        assert_eq!(
            classify(score, false, &moved_low, ScorePolarity::HigherIsHealthier),
            classify(score, false, &THRESHOLDS, ScorePolarity::HigherIsHealthier)
        );
    }
}
