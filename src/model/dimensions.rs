use serde::{Deserialize, Serialize};

pub const DEFAULT_LENGTH: f64 = 8.0;
pub const DEFAULT_WIDTH: f64 = 4.0;
pub const DEFAULT_DEPTH: f64 = 1.5;

/// Rectangular pool bowl in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default = "default_length")]
    pub length: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_depth")]
    pub depth: f64,
}

fn default_length() -> f64 {
    DEFAULT_LENGTH
}

fn default_width() -> f64 {
    DEFAULT_WIDTH
}

fn default_depth() -> f64 {
    DEFAULT_DEPTH
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            width: DEFAULT_WIDTH,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl Dimensions {
    #[must_use]
    pub fn new(length: f64, width: f64, depth: f64) -> Self {
        Self {
            length,
            width,
            depth,
        }
    }

    /// Replaces any non-finite or non-positive side with its default.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            length: usable_or(self.length, DEFAULT_LENGTH),
            width: usable_or(self.width, DEFAULT_WIDTH),
            depth: usable_or(self.depth, DEFAULT_DEPTH),
        }
    }

    #[must_use]
    pub fn is_normalized(&self) -> bool {
        *self == self.normalized()
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.depth
    }

    #[must_use]
    pub fn floor_area(&self) -> f64 {
        self.length * self.width
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }

    #[must_use]
    pub fn wall_area(&self) -> f64 {
        self.perimeter() * self.depth
    }

    /// Floor plus walls, the area that gets lined or tiled.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.floor_area() + self.wall_area()
    }
}

fn usable_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
