use crate::error::ExportError;
use crate::model::CalculationResult;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Numbered estimate as handed to document renderers and storage.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateDocument<'a> {
    pub number: &'a str,
    pub total_sum: f64,
    #[serde(flatten)]
    pub result: &'a CalculationResult,
}

impl<'a> EstimateDocument<'a> {
    #[must_use]
    pub fn new(number: &'a str, result: &'a CalculationResult) -> Self {
        Self {
            number,
            total_sum: result.total,
            result,
        }
    }
}

pub fn export_json<P: AsRef<Path>>(
    document: &EstimateDocument<'_>,
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(document)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;
    info!(path = %path_ref.display(), number = document.number, "estimate exported to JSON");

    Ok(())
}
