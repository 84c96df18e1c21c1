use crate::engine::EngineConfig;
use crate::error::InputError;
use crate::model::CalculationContext;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

/// Loads a calculation context (selection, dimensions, region, season)
/// from a JSON file as produced by the estimate form.
///
/// # Errors
///
/// Returns [`InputError::FileRead`] if the file cannot be read.
/// Returns [`InputError::InvalidJson`] if the document does not describe a context.
///
/// # Example
///
/// ```no_run
/// use pool_estimator::input::load_context;
///
/// let context = load_context("estimate.json")?;
/// println!("{} additional items", context.selection.additional.len());
/// # Ok::<(), pool_estimator::error::InputError>(())
/// ```
pub fn load_context<P: AsRef<Path>>(path: P) -> Result<CalculationContext, InputError> {
    let context: CalculationContext = load(path.as_ref())?;
    info!(path = %path.as_ref().display(), "calculation context loaded");
    Ok(context)
}

/// Loads engine options; keys missing from the file keep their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig, InputError> {
    let config: EngineConfig = load(path.as_ref())?;
    info!(path = %path.as_ref().display(), ?config, "engine config loaded");
    Ok(config)
}

/// Parses a context from an in-memory JSON document.
pub fn parse_context(content: &str) -> Result<CalculationContext, serde_json::Error> {
    serde_json::from_str(content)
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| InputError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
