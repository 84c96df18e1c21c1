//! # Pool Estimator
//!
//! Estimate engine for pool construction: turns pool dimensions and an
//! equipment selection into a priced, coefficient-adjusted, discounted
//! bill of materials.
//!
//! ## Features
//!
//! - Volume, surface area and advisory sizing figures
//! - Material stock, crew hours and build timeline
//! - Catalog, formula and manual line items with installation companions
//! - Regional, seasonal and complexity coefficients
//! - Volume discount tiers, tax and configurable rounding on decimal money
//! - Export to CSV, JSON and WhatsApp messages
//!
//! ## Example
//!
//! ```
//! use pool_estimator::engine::{EngineConfig, EstimateEngine};
//! use pool_estimator::model::CalculationContext;
//!
//! let engine = EstimateEngine::new(EngineConfig::default());
//! let result = engine.calculate(&CalculationContext::default());
//! println!("Volume: {} m³", result.volume);
//! println!("Total: {}", result.total);
//! ```

pub mod engine;
pub mod error;
pub mod export;
pub mod input;
pub mod model;
pub mod tables;
pub mod validation;
