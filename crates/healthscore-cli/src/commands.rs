use std::io::Write;
use std::path::Path;

use eyre::WrapErr;
use healthscore_assessments::Assessment;
use healthscore_core::models::response::ResponseSheet;
use healthscore_engine::Registry;
use healthscore_engine::registry::{builtin_definitions, read_definitions};

use crate::config::HealthscoreConfig;

/// Build the registry the binary serves: built-ins (unless disabled) plus
/// every definition file in `definitions_dir`. Malformed definitions are
/// logged and left out.
pub fn build_registry(
    config: &HealthscoreConfig,
    definitions_dir: Option<&Path>,
) -> eyre::Result<Registry> {
    let mut definitions = Vec::new();
    if config.include_builtin {
        definitions.extend(builtin_definitions());
    }
    if let Some(dir) = definitions_dir {
        definitions.extend(read_definitions(dir)?);
    }

    let (registry, rejected) = Registry::load(definitions);
    if !rejected.is_empty() {
        tracing::warn!(
            rejected = rejected.len(),
            "some assessment definitions are not offered"
        );
    }
    Ok(registry)
}

pub fn list(registry: &Registry, out: &mut impl Write) -> eyre::Result<()> {
    for definition in registry.definitions() {
        writeln!(
            out,
            "{}\t{} (v{})",
            definition.id, definition.name, definition.version
        )?;
    }
    Ok(())
}

pub fn show(registry: &Registry, id: &str, out: &mut impl Write) -> eyre::Result<()> {
    let definition = registry
        .get(id)
        .ok_or_else(|| eyre::eyre!("unknown assessment type: {id}"))?;
    writeln!(out, "{}", serde_json::to_string_pretty(definition.as_ref())?)?;
    Ok(())
}

/// Check every definition file in `dir`. Returns `false` when any is rejected.
pub fn validate(dir: &Path, out: &mut impl Write) -> eyre::Result<bool> {
    let (registry, rejected) = Registry::from_dir(dir)?;
    for id in registry.ids() {
        writeln!(out, "ok\t{id}")?;
    }
    for error in &rejected {
        writeln!(out, "rejected\t{error}")?;
    }
    Ok(rejected.is_empty())
}

/// Score a response sheet (list or `{questionId: value}` object) and print
/// the result as JSON, or as narrative grounding text when `context` is set.
pub fn score(
    registry: &Registry,
    id: &str,
    sheet: &str,
    context: bool,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let responses = ResponseSheet::from_json(sheet).wrap_err("invalid response sheet")?;
    let result = registry.score(id, &responses)?;

    if context {
        let definition = registry
            .get(id)
            .ok_or_else(|| eyre::eyre!("unknown assessment type: {id}"))?;
        write!(out, "{}", definition.to_structured_input(&result))?;
    } else {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    }
    Ok(())
}
