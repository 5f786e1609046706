mod common;

use std::sync::Arc;
use std::thread;

use healthscore_core::error::{ConfigurationError, ValidationError};
use healthscore_core::models::definition::ScorePolarity;
use healthscore_engine::error::EngineError;
use healthscore_engine::registry::{Registry, SharedRegistry, builtin_definitions};

use common::{answer, fixture};

#[test]
fn builtin_registry_offers_every_assessment() {
    let registry = Registry::builtin().expect("built-ins load");
    let ids: Vec<&str> = registry.ids().collect();
    assert_eq!(
        ids,
        vec![
            "health-assessment",
            "medicine-advisor",
            "mental-health",
            "symptom-checker",
        ]
    );
    assert_eq!(registry.len(), builtin_definitions().len());
}

#[test]
fn malformed_definition_is_not_offered() {
    let good = fixture(ScorePolarity::HigherIsRiskier);
    let mut bad = fixture(ScorePolarity::HigherIsRiskier);
    bad.id = "broken".to_string();
    bad.tier_thresholds.medium = bad.tier_thresholds.high;

    let (registry, rejected) = Registry::load([good, bad]);
    assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["fixture"]);
    assert!(matches!(
        rejected.as_slice(),
        [ConfigurationError::UnorderedThresholds { assessment_id, .. }] if assessment_id == "broken"
    ));
    assert_eq!(
        registry.score("broken", &[]),
        Err(ValidationError::UnknownAssessment("broken".to_string()))
    );
}

#[test]
fn duplicate_assessment_ids_keep_the_first() {
    let first = fixture(ScorePolarity::HigherIsRiskier);
    let second = fixture(ScorePolarity::HigherIsHealthier);

    let (registry, rejected) = Registry::load([first, second]);
    assert_eq!(
        registry.get("fixture").map(|d| d.polarity),
        Some(ScorePolarity::HigherIsRiskier)
    );
    assert_eq!(
        rejected,
        vec![ConfigurationError::DuplicateAssessment("fixture".to_string())]
    );
    assert!(
        Registry::strict([
            fixture(ScorePolarity::HigherIsRiskier),
            fixture(ScorePolarity::HigherIsRiskier),
        ])
        .is_err()
    );
}

#[test]
fn loads_definitions_from_a_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let def = fixture(ScorePolarity::HigherIsRiskier);
    std::fs::write(
        dir.path().join("fixture.json"),
        serde_json::to_string_pretty(&def).expect("serializes"),
    )
    .expect("write definition");
    std::fs::write(dir.path().join("README.txt"), "ignored").expect("write readme");

    let (registry, rejected) = Registry::from_dir(dir.path()).expect("directory loads");
    assert!(rejected.is_empty());
    assert_eq!(registry.get("fixture").map(|d| d.as_ref()), Some(&def));
}

#[test]
fn unparseable_definition_file_reports_its_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").expect("write");

    match Registry::from_dir(dir.path()) {
        Err(EngineError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope");
    assert!(matches!(
        Registry::from_dir(&missing),
        Err(EngineError::Io { .. })
    ));
}

#[test]
fn swap_is_atomic_for_readers() {
    let shared = Arc::new(SharedRegistry::new(
        Registry::strict([fixture(ScorePolarity::HigherIsRiskier)]).expect("loads"),
    ));
    let snapshot = shared.snapshot();

    let mut replacement = fixture(ScorePolarity::HigherIsRiskier);
    replacement.id = "replacement".to_string();
    let previous = shared.replace(Registry::strict([replacement]).expect("loads"));

    assert!(Arc::ptr_eq(&previous, &snapshot));
    assert!(snapshot.get("fixture").is_some());
    assert!(shared.snapshot().get("fixture").is_none());
    assert!(shared.score("replacement", &[answer("mood", "calm")]).is_ok());
}

#[test]
fn concurrent_scoring_sees_consistent_results() {
    let shared = Arc::new(SharedRegistry::new(Registry::builtin().expect("built-ins load")));
    let responses = vec![
        answer("painLevel", 6.0),
        answer("breathing", "slightly short of breath"),
        answer("severity", "moderate"),
    ];
    let expected = shared
        .score("symptom-checker", &responses)
        .expect("valid responses");

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let shared = Arc::clone(&shared);
            let responses = responses.clone();
            thread::spawn(move || {
                if i % 4 == 0 {
                    shared.replace(Registry::builtin().expect("built-ins load"));
                }
                shared
                    .score("symptom-checker", &responses)
                    .expect("valid responses")
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread finished"), expected);
    }
}
