use super::{Dimensions, Selection};
use crate::tables::{Complexity, Region, Season};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Individual,
    Company,
}

/// Everything one `calculate` call depends on besides engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationContext {
    pub selection: Selection,
    pub dimensions: Option<Dimensions>,
    pub client_type: Option<ClientType>,
    pub region: Option<Region>,
    pub season: Option<Season>,
    pub complexity: Option<Complexity>,
}

impl CalculationContext {
    #[must_use]
    pub fn new(selection: Selection, dimensions: Dimensions) -> Self {
        Self {
            selection,
            dimensions: Some(dimensions),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    #[must_use]
    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    #[must_use]
    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    /// Pool dimensions, normalized. Explicit context dimensions win, then the
    /// selection's, then the catalog bowl's, then the 8 × 4 × 1.5 default.
    #[must_use]
    pub fn resolved_dimensions(&self) -> Dimensions {
        self.dimensions
            .or(self.selection.dimensions)
            .or_else(|| self.selection.bowl.as_ref().and_then(|b| b.dimensions()))
            .unwrap_or_default()
            .normalized()
    }
}
