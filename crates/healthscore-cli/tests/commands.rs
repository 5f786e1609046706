use healthscore_cli::commands;
use healthscore_cli::config::HealthscoreConfig;
use healthscore_engine::registry::builtin_definitions;

fn output(f: impl FnOnce(&mut Vec<u8>) -> eyre::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).expect("command succeeds");
    String::from_utf8(buf).expect("utf-8 output")
}

fn builtin_only() -> healthscore_engine::Registry {
    commands::build_registry(&HealthscoreConfig::default(), None).expect("registry builds")
}

#[test]
fn list_prints_every_builtin() {
    let registry = builtin_only();
    let text = output(|out| commands::list(&registry, out));
    let ids: Vec<&str> = text
        .lines()
        .filter_map(|line| line.split('\t').next())
        .collect();
    assert_eq!(
        ids,
        vec![
            "health-assessment",
            "medicine-advisor",
            "mental-health",
            "symptom-checker",
        ]
    );
}

#[test]
fn show_prints_parseable_definition() {
    let registry = builtin_only();
    let text = output(|out| commands::show(&registry, "mental-health", out));
    let value: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(value["id"], "mental-health");

    let mut sink = Vec::new();
    assert!(commands::show(&registry, "astrology", &mut sink).is_err());
}

#[test]
fn builtins_can_be_disabled_in_favour_of_a_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut custom = builtin_definitions()
        .into_iter()
        .find(|d| d.id == "symptom-checker")
        .expect("built-in present");
    custom.id = "custom-checker".to_string();
    std::fs::write(
        dir.path().join("custom.json"),
        serde_json::to_string(&custom).expect("serializes"),
    )
    .expect("write");

    let config = HealthscoreConfig {
        include_builtin: false,
        ..HealthscoreConfig::default()
    };
    let registry = commands::build_registry(&config, Some(dir.path())).expect("registry builds");
    assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["custom-checker"]);
}

#[test]
fn validate_reports_rejected_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let good = builtin_definitions().remove(0);
    let mut bad = good.clone();
    bad.id = "bad".to_string();
    bad.tier_thresholds.low = 90.0;
    std::fs::write(
        dir.path().join("a.json"),
        serde_json::to_string(&good).expect("serializes"),
    )
    .expect("write");
    std::fs::write(
        dir.path().join("b.json"),
        serde_json::to_string(&bad).expect("serializes"),
    )
    .expect("write");

    let mut buf = Vec::new();
    let ok = commands::validate(dir.path(), &mut buf).expect("directory readable");
    let text = String::from_utf8(buf).expect("utf-8 output");

    assert!(!ok);
    assert!(text.contains(&format!("ok\t{}", good.id)));
    assert!(text.lines().any(|l| l.starts_with("rejected\t") && l.contains("bad")));
}

#[test]
fn score_accepts_object_sheet() {
    let registry = builtin_only();
    let sheet = r#"{"painLevel": 9, "breathing": "cannot catch breath", "temperature": 101}"#;
    let text = output(|out| commands::score(&registry, "symptom-checker", sheet, false, out));

    let value: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(value["tier"], "emergency");
    assert_eq!(value["isEmergency"], true);
    assert_eq!(value["score"], 96);
}

#[test]
fn score_context_renders_grounding_text() {
    let registry = builtin_only();
    let sheet = r#"[
        {"questionId": "painLevel", "value": 2},
        {"questionId": "breathing", "value": "normal"}
    ]"#;
    let text = output(|out| commands::score(&registry, "symptom-checker", sheet, true, out));

    assert!(text.starts_with("## "));
    assert!(text.contains("- Score: "));
    assert!(text.contains("### Recommendations"));
}

#[test]
fn score_rejects_invalid_responses() {
    let registry = builtin_only();
    let mut sink = Vec::new();
    assert!(commands::score(&registry, "symptom-checker", "not json", false, &mut sink).is_err());
    assert!(
        commands::score(&registry, "symptom-checker", r#"{"shoeSize": 42}"#, false, &mut sink)
            .is_err()
    );
}
