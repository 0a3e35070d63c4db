//! TS500 Load Combinations
//!
//! Slab flexure is designed for the gravity combination 1.4G + 1.6Q. The
//! unfactored G + Q combination is kept for service-level reporting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::load_types::LoadType;
use super::LoadCase;

/// A load combination with factors for each load type
///
/// # Example
/// ```
/// use slab_core::loads::{LoadCase, LoadType, ultimate_combination};
///
/// let case = LoadCase::new("Floor")
///     .with_load(LoadType::Dead, 4.5)
///     .with_load(LoadType::Live, 5.0);
///
/// let pd = ultimate_combination().apply(&case);
/// assert!((pd - 14.3).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "ULS-1")
    pub name: String,

    /// Human-readable equation for display (e.g., "1.4G + 1.6Q")
    pub equation: String,

    /// Load factors keyed by load type
    pub factors: HashMap<LoadType, f64>,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: HashMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.insert(load_type, factor);
        self
    }

    /// Apply this combination to a LoadCase, returning the total factored load
    ///
    /// Load types not in the combination are treated as having factor 0.
    pub fn apply(&self, case: &LoadCase) -> f64 {
        self.factors
            .iter()
            .map(|(load_type, factor)| factor * case.get(*load_type))
            .sum()
    }

    /// Get the factor for a specific load type (0.0 if not in combination)
    pub fn get_factor(&self, load_type: LoadType) -> f64 {
        self.factors.get(&load_type).copied().unwrap_or(0.0)
    }

    /// Label for reports, e.g. "ULS-1: 1.4G + 1.6Q"
    pub fn label(&self) -> String {
        format!("{}: {}", self.name, self.equation)
    }
}

/// Ultimate gravity combination 1.4G + 1.6Q
pub fn ultimate_combination() -> LoadCombination {
    LoadCombination::new("ULS-1", "1.4G + 1.6Q")
        .with_factor(LoadType::Dead, 1.4)
        .with_factor(LoadType::Live, 1.6)
}

/// Unfactored service combination G + Q
pub fn service_combination() -> LoadCombination {
    LoadCombination::new("SLS-1", "G + Q")
        .with_factor(LoadType::Dead, 1.0)
        .with_factor(LoadType::Live, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ultimate_factors() {
        let combo = ultimate_combination();
        assert_eq!(combo.get_factor(LoadType::Dead), 1.4);
        assert_eq!(combo.get_factor(LoadType::Live), 1.6);
        assert_eq!(combo.label(), "ULS-1: 1.4G + 1.6Q");
    }

    #[test]
    fn test_service_combination() {
        let case = LoadCase::new("Floor")
            .with_load(LoadType::Dead, 5.75)
            .with_load(LoadType::Live, 2.0);
        assert!((service_combination().apply(&case) - 7.75).abs() < 1e-12);
    }

    #[test]
    fn test_missing_load_type_is_zero() {
        let case = LoadCase::new("Dead only").with_load(LoadType::Dead, 5.75);
        assert!((ultimate_combination().apply(&case) - 1.4 * 5.75).abs() < 1e-12);
    }
}
