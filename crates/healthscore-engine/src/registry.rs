use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use healthscore_core::error::{ConfigurationError, ValidationError};
use healthscore_core::models::definition::AssessmentDefinition;
use healthscore_core::models::response::Response;
use healthscore_core::models::result::ScoringResult;
use tracing::{error, info};

use crate::error::EngineError;
use crate::orchestrate;

/// Validated assessment definitions, keyed by id. Never mutated after
/// construction; hot reload builds a new registry and swaps it in through
/// [`SharedRegistry`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    definitions: BTreeMap<String, Arc<AssessmentDefinition>>,
}

impl Registry {
    /// Keep every well-formed definition. Rejected definitions are returned
    /// and their assessment types are not offered.
    pub fn load<I>(definitions: I) -> (Self, Vec<ConfigurationError>)
    where
        I: IntoIterator<Item = AssessmentDefinition>,
    {
        let mut registry = Self::default();
        let mut rejected = Vec::new();

        for definition in definitions {
            let outcome = definition.validate().and_then(|()| {
                if registry.definitions.contains_key(&definition.id) {
                    Err(ConfigurationError::DuplicateAssessment(definition.id.clone()))
                } else {
                    Ok(())
                }
            });
            match outcome {
                Ok(()) => {
                    registry
                        .definitions
                        .insert(definition.id.clone(), Arc::new(definition));
                }
                Err(e) => {
                    error!(
                        assessment = %definition.id,
                        error = %e,
                        "rejected assessment definition"
                    );
                    rejected.push(e);
                }
            }
        }

        info!(
            loaded = registry.definitions.len(),
            rejected = rejected.len(),
            "assessment registry loaded"
        );
        (registry, rejected)
    }

    /// Like [`Registry::load`], but any malformed definition fails the load.
    pub fn strict<I>(definitions: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = AssessmentDefinition>,
    {
        let (registry, rejected) = Self::load(definitions);
        match rejected.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(registry),
        }
    }

    /// The built-in assessments.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::strict(builtin_definitions())
    }

    /// Load every `*.json` file in `dir`, one definition per file, in file
    /// name order.
    pub fn from_dir(dir: &Path) -> Result<(Self, Vec<ConfigurationError>), EngineError> {
        Ok(Self::load(read_definitions(dir)?))
    }

    pub fn get(&self, id: &str) -> Option<&Arc<AssessmentDefinition>> {
        self.definitions.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &AssessmentDefinition> {
        self.definitions.values().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Score `responses` against the assessment registered as `id`.
    pub fn score(
        &self,
        id: &str,
        responses: &[Response],
    ) -> Result<ScoringResult, ValidationError> {
        let definition = self
            .get(id)
            .ok_or_else(|| ValidationError::UnknownAssessment(id.to_string()))?;
        orchestrate::score(definition, responses)
    }
}

/// Definitions of the built-in assessments, unvalidated.
pub fn builtin_definitions() -> Vec<AssessmentDefinition> {
    healthscore_assessments::all_assessments()
        .iter()
        .map(|a| a.definition().clone())
        .collect()
}

/// Parse every `*.json` file in `dir`, sorted by file name.
pub fn read_definitions(dir: &Path) -> Result<Vec<AssessmentDefinition>, EngineError> {
    let io_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source| EngineError::Io { path, source }
    };

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(io_error(dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()
        .map_err(io_error(dir))?;
    paths.retain(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"));
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            let contents = std::fs::read_to_string(&path).map_err(io_error(&path))?;
            serde_json::from_str(&contents).map_err(|source| EngineError::Parse { path, source })
        })
        .collect()
}

/// A registry that can be replaced while readers are scoring.
///
/// Readers take an `Arc` snapshot; a swap never exposes a partially
/// loaded registry to an in-flight call.
#[derive(Debug, Default)]
pub struct SharedRegistry {
    current: RwLock<Arc<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    pub fn snapshot(&self) -> Arc<Registry> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Install `registry` and return the one it replaced.
    pub fn replace(&self, registry: Registry) -> Arc<Registry> {
        let next = Arc::new(registry);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        info!(assessments = guard.len(), "assessment registry swapped");
        previous
    }

    pub fn score(
        &self,
        id: &str,
        responses: &[Response],
    ) -> Result<ScoringResult, ValidationError> {
        self.snapshot().score(id, responses)
    }
}
