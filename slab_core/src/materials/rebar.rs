//! Reinforcing Bar Catalog
//!
//! The discrete set of bar diameters and spacings a slab may be detailed
//! with, and the precomputed table of provided steel area per metre width
//! for every (spacing, diameter) pair.
//!
//! The bar-selection search queries this table inside nested loops, so the
//! grid is computed once per process and shared read-only.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::materials::rebar::AreaGrid;
//!
//! let grid = AreaGrid::standard();
//! // Ø10 at 15 cm: 78.54 mm² × 1000 / 150 = 523.6 mm²/m
//! let area = grid.area_provided(15.0, 10).unwrap();
//! assert!((area - 523.6).abs() < 0.1);
//!
//! // Ø11 is not stocked
//! assert!(grid.area_provided(15.0, 11).is_none());
//! ```

use std::f64::consts::PI;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::units::{Centimeters, Millimeters};

/// Stocked bar diameters (mm), ascending
pub const BAR_DIAMETERS_MM: [u32; 10] = [6, 8, 10, 12, 14, 16, 18, 20, 22, 24];

/// Allowed centre-to-centre spacings (cm), ascending
pub const SPACINGS_CM: [f64; 24] = [
    7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0,
    19.0, 20.0, 21.0, 22.0, 23.0, 24.0, 25.0, 26.0, 27.0, 28.0, 29.0, 30.0,
];

/// Tolerance when matching a spacing value against the catalog (cm)
const SPACING_MATCH_TOL_CM: f64 = 1e-6;

static STANDARD_GRID: Lazy<AreaGrid> = Lazy::new(AreaGrid::build);

/// Cross-sectional area of one bar (mm²)
pub fn bar_area_mm2(diameter_mm: f64) -> f64 {
    PI * diameter_mm.powi(2) / 4.0
}

/// Steel area per metre width for bars of `diameter_mm` at `spacing_cm` (mm²/m)
pub fn area_per_meter_mm2(diameter_mm: f64, spacing_cm: f64) -> f64 {
    let spacing_mm: Millimeters = Centimeters(spacing_cm).into();
    bar_area_mm2(diameter_mm) * 1000.0 / spacing_mm.0
}

/// Precomputed provided-area table indexed by `[spacing][diameter]` (mm²/m).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGrid {
    diameters_mm: Vec<u32>,
    spacings_cm: Vec<f64>,
    areas_mm2_per_m: Vec<Vec<f64>>,
}

impl AreaGrid {
    /// Build the grid from the standard catalog.
    pub fn build() -> Self {
        Self::from_catalog(&BAR_DIAMETERS_MM, &SPACINGS_CM)
    }

    /// Build a grid from an arbitrary catalog (both slices ascending).
    pub fn from_catalog(diameters_mm: &[u32], spacings_cm: &[f64]) -> Self {
        let areas_mm2_per_m = spacings_cm
            .iter()
            .map(|&s| {
                diameters_mm
                    .iter()
                    .map(|&d| area_per_meter_mm2(f64::from(d), s))
                    .collect()
            })
            .collect();

        AreaGrid {
            diameters_mm: diameters_mm.to_vec(),
            spacings_cm: spacings_cm.to_vec(),
            areas_mm2_per_m,
        }
    }

    /// The process-wide grid for the standard catalog.
    pub fn standard() -> &'static AreaGrid {
        &STANDARD_GRID
    }

    /// Catalog diameters (mm), ascending
    pub fn diameters_mm(&self) -> &[u32] {
        &self.diameters_mm
    }

    /// Catalog spacings (cm), ascending
    pub fn spacings_cm(&self) -> &[f64] {
        &self.spacings_cm
    }

    /// Index of a stocked diameter
    pub fn diameter_index(&self, diameter_mm: u32) -> Option<usize> {
        self.diameters_mm.iter().position(|&d| d == diameter_mm)
    }

    /// Index of a catalog spacing
    pub fn spacing_index(&self, spacing_cm: f64) -> Option<usize> {
        self.spacings_cm
            .iter()
            .position(|&s| (s - spacing_cm).abs() < SPACING_MATCH_TOL_CM)
    }

    /// Area at grid indices. Panics on out-of-range indices.
    pub fn area_at(&self, spacing_idx: usize, diameter_idx: usize) -> f64 {
        self.areas_mm2_per_m[spacing_idx][diameter_idx]
    }

    /// Provided area per metre for a catalog (spacing, diameter) pair.
    ///
    /// Returns `None` when either value is not in the catalog.
    pub fn area_provided(&self, spacing_cm: f64, diameter_mm: u32) -> Option<f64> {
        let di = self.diameter_index(diameter_mm)?;
        let si = self.spacing_index(spacing_cm)?;
        Some(self.area_at(si, di))
    }

    /// Largest area the catalog can provide with one layer (largest bar at
    /// the tightest spacing).
    pub fn max_area(&self) -> f64 {
        match (self.spacings_cm.first(), self.diameters_mm.last()) {
            (Some(&s), Some(&d)) => area_per_meter_mm2(f64::from(d), s),
            _ => 0.0,
        }
    }
}
