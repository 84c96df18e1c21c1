//! Sequential commercial-offer numbers, `КП-NNN/YYYY`, restarting each year.

use crate::error::ExportError;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use tracing::debug;

/// Source of per-year sequence numbers.
pub trait DocumentCounter {
    /// Advances the counter for `year` and returns the new value, starting at 1.
    fn next(&mut self, year: i32) -> Result<u32, ExportError>;
}

#[derive(Debug, Default)]
pub struct InMemoryCounter {
    counters: HashMap<i32, u32>,
}

impl DocumentCounter for InMemoryCounter {
    fn next(&mut self, year: i32) -> Result<u32, ExportError> {
        let counter = self.counters.entry(year).or_insert(0);
        *counter += 1;
        Ok(*counter)
    }
}

/// Counter persisted as a JSON object of `{"<year>": last_number}`.
/// A missing file counts as all years at zero.
#[derive(Debug, Clone)]
pub struct FileCounter {
    path: PathBuf,
}

impl FileCounter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<BTreeMap<String, u32>, ExportError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(ExportError::WriteError {
                message: format!("cannot read counter '{}': {e}", self.path.display()),
            }),
        }
    }
}

impl DocumentCounter for FileCounter {
    fn next(&mut self, year: i32) -> Result<u32, ExportError> {
        let mut counters = self.read()?;
        let counter = counters.entry(year.to_string()).or_insert(0);
        *counter += 1;
        let value = *counter;

        let json = serde_json::to_string_pretty(&counters)?;
        std::fs::write(&self.path, json).map_err(|source| ExportError::FileCreate {
            path: self.path.clone(),
            source,
        })?;
        debug!(year, value, path = %self.path.display(), "document counter advanced");

        Ok(value)
    }
}

#[derive(Debug)]
pub struct DocumentNumberer<C> {
    counter: C,
}

impl<C: DocumentCounter> DocumentNumberer<C> {
    #[must_use]
    pub fn new(counter: C) -> Self {
        Self { counter }
    }

    pub fn next_number(&mut self, year: i32) -> Result<String, ExportError> {
        let value = self.counter.next(year)?;
        Ok(format!("КП-{value:03}/{year}"))
    }
}
