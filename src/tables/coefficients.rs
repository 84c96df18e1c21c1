//! Static multiplier and discount tables.

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const REGIONAL: &[(&str, f64)] = &[("moscow", 1.2), ("spb", 1.15), ("regions", 1.0)];

/// Multiplier used when the region is unset or not in the table.
pub const DEFAULT_REGIONAL: f64 = 1.0;

const SEASONAL: &[(Season, f64)] = &[
    (Season::Summer, 1.15), // high season
    (Season::Spring, 1.0),
    (Season::Fall, 0.95),
    (Season::Winter, 0.85), // low season
];

const COMPLEXITY: &[(Complexity, f64)] = &[
    (Complexity::Standard, 1.0),
    (Complexity::Premium, 1.25),
    (Complexity::Custom, 1.5),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeDiscount {
    pub min_volume: f64,
    pub percent: f64,
}

/// Tiers are sorted by `min_volume` with non-decreasing `percent`.
pub const VOLUME_DISCOUNTS: &[VolumeDiscount] = &[
    VolumeDiscount {
        min_volume: 50.0,
        percent: 3.0,
    },
    VolumeDiscount {
        min_volume: 100.0,
        percent: 5.0,
    },
    VolumeDiscount {
        min_volume: 200.0,
        percent: 8.0,
    },
];

/// Highest discount percent among the tiers whose lower bound the volume reaches.
///
/// Tiers do not stack. Returns `0.0` when no tier matches.
#[must_use]
pub fn volume_discount_percent(volume: f64) -> f64 {
    VOLUME_DISCOUNTS
        .iter()
        .filter(|tier| volume >= tier.min_volume)
        .fold(0.0, |max, tier| f64::max(max, tier.percent))
}

/// Delivery region. Keys outside the table are kept verbatim and priced at
/// [`DEFAULT_REGIONAL`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    Moscow,
    Spb,
    Regions,
    Other(String),
}

impl Region {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Region::Moscow => "moscow",
            Region::Spb => "spb",
            Region::Regions => "regions",
            Region::Other(key) => key,
        }
    }

    #[must_use]
    pub fn coefficient(&self) -> f64 {
        let key = self.key();
        REGIONAL
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(DEFAULT_REGIONAL, |(_, c)| *c)
    }
}

impl From<String> for Region {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "moscow" => Region::Moscow,
            "spb" => Region::Spb,
            "regions" => Region::Regions,
            _ => Region::Other(value),
        }
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.key().to_string()
    }
}

impl FromStr for Region {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Region::from(s.to_string()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Summer,
    Spring,
    Fall,
    Winter,
}

impl Season {
    #[must_use]
    pub fn coefficient(self) -> f64 {
        lookup(SEASONAL, self)
    }
}

impl FromStr for Season {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "summer" => Ok(Season::Summer),
            "spring" => Ok(Season::Spring),
            "fall" | "autumn" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(InputError::UnknownKeyword {
                kind: "season",
                value: s.to_string(),
            }),
        }
    }
}

/// Work complexity grade, applied to works only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Standard,
    Premium,
    Custom,
}

impl Complexity {
    #[must_use]
    pub fn coefficient(self) -> f64 {
        lookup(COMPLEXITY, self)
    }
}

impl FromStr for Complexity {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Complexity::Standard),
            "premium" => Ok(Complexity::Premium),
            "custom" => Ok(Complexity::Custom),
            _ => Err(InputError::UnknownKeyword {
                kind: "complexity",
                value: s.to_string(),
            }),
        }
    }
}

fn lookup<K: PartialEq + Copy>(table: &[(K, f64)], key: K) -> f64 {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(1.0, |(_, c)| *c)
}
