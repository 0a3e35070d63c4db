//! Slab loads and load combinations
//!
//! # Overview
//!
//! - [`LoadType`] - Dead (G) and live (Q) area loads
//! - [`LoadCase`] - Unfactored load values for one slab
//! - [`LoadCombination`] - Factors applied to a load case
//! - [`LoadSummary`] - Self-weight, totals and the factored design load
//!
//! All area loads are in kN/m².
//!
//! # Example
//!
//! ```
//! use slab_core::loads::LoadSummary;
//!
//! // 120 mm slab, 1.5 kN/m² finishes, 5.0 kN/m² live
//! let loads = LoadSummary::compute(120.0, 1.5, 5.0);
//! assert!((loads.self_weight_kn_m2 - 3.0).abs() < 1e-9);
//! assert!((loads.dead_total_kn_m2 - 4.5).abs() < 1e-9);
//! assert!((loads.design_load_kn_m2 - 14.3).abs() < 1e-9);
//! ```

pub mod combinations;
pub mod load_types;

pub use combinations::{service_combination, ultimate_combination, LoadCombination};
pub use load_types::LoadType;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Meters, Millimeters};

/// Unit weight of reinforced concrete (kN/m³)
pub const CONCRETE_UNIT_WEIGHT_KN_M3: f64 = 25.0;

/// A collection of load values by type for one slab
///
/// # Example
/// ```
/// use slab_core::loads::{LoadCase, LoadType};
///
/// let case = LoadCase::new("Office floor")
///     .with_load(LoadType::Dead, 4.5)
///     .with_load(LoadType::Live, 3.5);
///
/// assert_eq!(case.get(LoadType::Dead), 4.5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCase {
    /// User-provided label for this load case
    pub label: String,

    /// Load values keyed by type (kN/m²)
    pub loads: HashMap<LoadType, f64>,
}

impl LoadCase {
    /// Create a new empty load case with a label
    pub fn new(label: impl Into<String>) -> Self {
        LoadCase {
            label: label.into(),
            loads: HashMap::new(),
        }
    }

    /// Add or update a load value (builder pattern)
    pub fn with_load(mut self, load_type: LoadType, value: f64) -> Self {
        self.loads.insert(load_type, value);
        self
    }

    /// Get the load value for a type, defaulting to 0.0 if not set
    pub fn get(&self, load_type: LoadType) -> f64 {
        self.loads.get(&load_type).copied().unwrap_or(0.0)
    }

    /// Validate the load case: gravity loads cannot be negative.
    pub fn validate(&self) -> CalcResult<()> {
        for (load_type, value) in &self.loads {
            if *value < 0.0 || !value.is_finite() {
                return Err(CalcError::invalid_input(
                    format!("load_{}", load_type.code()),
                    value.to_string(),
                    format!("{} must be a non-negative number", load_type.description()),
                ));
            }
        }
        Ok(())
    }
}

/// Load analysis of one slab panel (kN/m²).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Slab self-weight h · 25 kN/m³
    pub self_weight_kn_m2: f64,

    /// Additional dead load (finishes, partitions)
    pub additional_dead_kn_m2: f64,

    /// Total dead load G
    pub dead_total_kn_m2: f64,

    /// Live load Q
    pub live_kn_m2: f64,

    /// Unfactored G + Q
    pub service_load_kn_m2: f64,

    /// Factored design load pd
    pub design_load_kn_m2: f64,

    /// Governing combination label, e.g. "ULS-1: 1.4G + 1.6Q"
    pub combination: String,
}

impl LoadSummary {
    /// Compute the load summary for a slab of thickness `thickness_mm`.
    pub fn compute(thickness_mm: f64, additional_dead_kn_m2: f64, live_kn_m2: f64) -> Self {
        let thickness_m: Meters = Millimeters(thickness_mm).into();
        let self_weight_kn_m2 = thickness_m.0 * CONCRETE_UNIT_WEIGHT_KN_M3;
        let dead_total_kn_m2 = self_weight_kn_m2 + additional_dead_kn_m2;

        let case = LoadCase::new("Slab")
            .with_load(LoadType::Dead, dead_total_kn_m2)
            .with_load(LoadType::Live, live_kn_m2);
        let ultimate = ultimate_combination();

        LoadSummary {
            self_weight_kn_m2,
            additional_dead_kn_m2,
            dead_total_kn_m2,
            live_kn_m2,
            service_load_kn_m2: service_combination().apply(&case),
            design_load_kn_m2: ultimate.apply(&case),
            combination: ultimate.label(),
        }
    }

    /// Live-to-dead load ratio q/g (infinite when there is no dead load)
    pub fn live_to_dead_ratio(&self) -> f64 {
        if self.dead_total_kn_m2 > 0.0 {
            self.live_kn_m2 / self.dead_total_kn_m2
        } else {
            f64::INFINITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_summary() {
        // h=120mm, g_add=1.5, q=5.0
        let loads = LoadSummary::compute(120.0, 1.5, 5.0);
        assert!((loads.self_weight_kn_m2 - 3.0).abs() < 1e-9);
        assert!((loads.dead_total_kn_m2 - 4.5).abs() < 1e-9);
        // 1.4×4.5 + 1.6×5.0 = 6.3 + 8.0
        assert!((loads.design_load_kn_m2 - 14.3).abs() < 1e-9);
        assert!((loads.service_load_kn_m2 - 9.5).abs() < 1e-9);
        assert!(loads.combination.contains("1.4G + 1.6Q"));
    }

    #[test]
    fn test_zero_live_load() {
        let loads = LoadSummary::compute(150.0, 2.0, 0.0);
        assert!((loads.self_weight_kn_m2 - 3.75).abs() < 1e-9);
        assert!((loads.design_load_kn_m2 - 1.4 * 5.75).abs() < 1e-9);
        assert_eq!(loads.live_to_dead_ratio(), 0.0);
    }

    #[test]
    fn test_live_to_dead_ratio() {
        let loads = LoadSummary::compute(120.0, 1.0, 10.0);
        assert!((loads.live_to_dead_ratio() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_negative_load_rejected() {
        let case = LoadCase::new("Bad").with_load(LoadType::Live, -1.0);
        assert!(case.validate().is_err());
        let ok = LoadCase::new("Ok").with_load(LoadType::Live, 2.0);
        assert!(ok.validate().is_ok());
    }
}
