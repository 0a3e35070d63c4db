//! # Bar Selection
//!
//! Picks reinforcing bars from the discrete catalog for a required steel area
//! per metre width. Every search is exhaustive over the (diameter, spacing)
//! grid, which holds at most a few hundred cells, and keeps the candidate with
//! the smallest provided/required ratio.
//!
//! ## Selections
//!
//! A search has three outcomes, carried by [`Selection`]:
//!
//! - `NotRequired` - the required area is zero or negative, no bars are placed
//! - `Chosen(..)` - a feasible choice with provided area ≥ required
//! - `Infeasible { .. }` - no catalog pair reaches the required area inside
//!   the spacing bounds; reports print it as "unresolved"
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::bar_selection::{choose_single_layer, Selection};
//! use slab_core::materials::AreaGrid;
//!
//! let grid = AreaGrid::standard();
//! let choice = choose_single_layer(grid, 400.0, 200.0, 70.0, 8);
//!
//! match choice {
//!     Selection::Chosen(bar) => {
//!         assert_eq!(bar.to_string(), "Ø10/19cm");
//!         assert!(bar.area_mm2_per_m >= 400.0);
//!     }
//!     _ => panic!("400 mm²/m is within the catalog"),
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::materials::AreaGrid;
use crate::units::{Centimeters, Cm2PerM, Millimeters, Mm2PerM};

/// Required areas at or below this are treated as not required (mm²/m)
pub const ZERO_AREA_TOL: f64 = 1e-12;

/// Relative slack allowed when testing provided ≥ required
pub const FEASIBILITY_REL_TOL: f64 = 1e-9;

/// Distribution bars: maximum spacing (mm)
pub const DISTRIBUTION_MAX_SPACING_MM: f64 = 300.0;

/// Distribution bars: minimum spacing (mm)
pub const DISTRIBUTION_MIN_SPACING_MM: f64 = 70.0;

/// Distribution bars: smallest diameter (mm)
pub const DISTRIBUTION_MIN_DIAMETER_MM: u32 = 6;

/// Outcome of a bar search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value")]
pub enum Selection<T> {
    /// Nothing to place
    NotRequired,
    /// A feasible selection
    Chosen(T),
    /// No catalog combination satisfies the requirement
    Infeasible {
        /// Area the search could not reach (mm²/m)
        required_mm2_per_m: f64,
    },
}

impl<T> Selection<T> {
    /// The chosen value, if any
    pub fn chosen(&self) -> Option<&T> {
        match self {
            Selection::Chosen(value) => Some(value),
            _ => None,
        }
    }

    /// True when the search failed
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Selection::Infeasible { .. })
    }

    /// True when bars were needed (chosen or not)
    pub fn is_required(&self) -> bool {
        !matches!(self, Selection::NotRequired)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::NotRequired => write!(f, "not required"),
            Selection::Chosen(value) => write!(f, "{}", value),
            Selection::Infeasible { required_mm2_per_m } => write!(
                f,
                "unresolved ({:.1} mm²/m; increase spacing bound or add bars)",
                required_mm2_per_m
            ),
        }
    }
}

/// One bar size at one spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChoice {
    /// Bar diameter (mm)
    pub diameter_mm: u32,
    /// Centre-to-centre spacing (cm)
    pub spacing_cm: f64,
    /// Provided area (mm²/m)
    pub area_mm2_per_m: f64,
    /// Provided / required
    pub ratio: f64,
}

impl BarChoice {
    /// Provided area in cm²/m
    pub fn area_cm2_per_m(&self) -> f64 {
        let area: Cm2PerM = Mm2PerM(self.area_mm2_per_m).into();
        area.0
    }

    /// Spacing in mm
    pub fn spacing_mm(&self) -> f64 {
        let spacing: Millimeters = Centimeters(self.spacing_cm).into();
        spacing.0
    }
}

impl fmt::Display for BarChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ø{}/{:.0}cm", self.diameter_mm, self.spacing_cm)
    }
}

/// Main bottom steel split into a straight layer and a bent (cranked) layer
/// of the same diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MainRebarLayout {
    /// Straight bars carrying half the requirement
    pub straight: BarChoice,
    /// Bent bars carrying the other half
    pub bent: BarChoice,
    /// Sum of both layers (mm²/m)
    pub total_provided_mm2_per_m: f64,
    /// Requirement the layout was chosen for (mm²/m)
    pub total_required_mm2_per_m: f64,
    /// Total provided / total required
    pub ratio: f64,
}

impl MainRebarLayout {
    /// Common bar diameter (mm)
    pub fn diameter_mm(&self) -> u32 {
        self.straight.diameter_mm
    }
}

impl fmt::Display for MainRebarLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} straight + {} bent", self.straight, self.bent)
    }
}

/// Zero and negative requirements need no steel.
fn needs_no_steel(required_mm2_per_m: f64) -> bool {
    required_mm2_per_m <= ZERO_AREA_TOL
}

fn spacing_in_range(spacing_cm: f64, s_min_mm: f64, s_max_mm: f64) -> bool {
    let spacing: Millimeters = Centimeters(spacing_cm).into();
    spacing.0 >= s_min_mm - 1e-9 && spacing.0 <= s_max_mm + 1e-9
}

/// Best spacing for one diameter index, or `None` when no spacing in range
/// provides enough steel.
fn best_spacing_for_diameter(
    grid: &AreaGrid,
    diameter_idx: usize,
    required_mm2_per_m: f64,
    s_max_mm: f64,
    s_min_mm: f64,
) -> Option<BarChoice> {
    let threshold = required_mm2_per_m * (1.0 - FEASIBILITY_REL_TOL);
    let diameter_mm = grid.diameters_mm()[diameter_idx];
    let mut best: Option<BarChoice> = None;

    // Widest spacing first; a later candidate replaces only on a strictly smaller ratio.
    for (spacing_idx, &spacing_cm) in grid.spacings_cm().iter().enumerate().rev() {
        if !spacing_in_range(spacing_cm, s_min_mm, s_max_mm) {
            continue;
        }
        let area = grid.area_at(spacing_idx, diameter_idx);
        if area < threshold {
            continue;
        }
        let ratio = area / required_mm2_per_m;
        if best.map_or(true, |b| ratio < b.ratio) {
            best = Some(BarChoice {
                diameter_mm,
                spacing_cm,
                area_mm2_per_m: area,
                ratio,
            });
        }
    }
    best
}

/// Single-layer bar choice with the least over-provision.
///
/// Searches every diameter ≥ `phi_min_mm` (ascending) and every catalog
/// spacing within `[s_min_mm, s_max_mm]` (descending). Ties keep the first
/// candidate found.
pub fn choose_single_layer(
    grid: &AreaGrid,
    required_mm2_per_m: f64,
    s_max_mm: f64,
    s_min_mm: f64,
    phi_min_mm: u32,
) -> Selection<BarChoice> {
    if needs_no_steel(required_mm2_per_m) {
        return Selection::NotRequired;
    }

    let mut best: Option<BarChoice> = None;
    for (diameter_idx, &diameter_mm) in grid.diameters_mm().iter().enumerate() {
        if diameter_mm < phi_min_mm {
            continue;
        }
        let candidate =
            best_spacing_for_diameter(grid, diameter_idx, required_mm2_per_m, s_max_mm, s_min_mm);
        if let Some(c) = candidate {
            if best.map_or(true, |b| c.ratio < b.ratio) {
                best = Some(c);
            }
        }
    }

    match best {
        Some(choice) => Selection::Chosen(choice),
        None => Selection::Infeasible { required_mm2_per_m },
    }
}

/// Main bottom steel as two half-area layers sharing one diameter.
///
/// For each diameter ≥ `phi_min_mm`, the straight and bent halves are each
/// given their own best spacing; the diameter whose combined layout has the
/// smallest total ratio wins.
pub fn choose_main_layout_half_half(
    grid: &AreaGrid,
    required_mm2_per_m: f64,
    s_max_mm: f64,
    s_min_mm: f64,
    phi_min_mm: u32,
) -> Selection<MainRebarLayout> {
    if needs_no_steel(required_mm2_per_m) {
        return Selection::NotRequired;
    }

    let straight_required = required_mm2_per_m / 2.0;
    let bent_required = required_mm2_per_m - straight_required;

    let mut best: Option<MainRebarLayout> = None;
    for (diameter_idx, &diameter_mm) in grid.diameters_mm().iter().enumerate() {
        if diameter_mm < phi_min_mm {
            continue;
        }
        let straight =
            best_spacing_for_diameter(grid, diameter_idx, straight_required, s_max_mm, s_min_mm);
        let bent = best_spacing_for_diameter(grid, diameter_idx, bent_required, s_max_mm, s_min_mm);
        let (Some(straight), Some(bent)) = (straight, bent) else {
            continue;
        };

        let total = straight.area_mm2_per_m + bent.area_mm2_per_m;
        let ratio = total / required_mm2_per_m;
        if best.map_or(true, |b| ratio < b.ratio) {
            best = Some(MainRebarLayout {
                straight,
                bent,
                total_provided_mm2_per_m: total,
                total_required_mm2_per_m: required_mm2_per_m,
                ratio,
            });
        }
    }

    match best {
        Some(layout) => Selection::Chosen(layout),
        None => Selection::Infeasible { required_mm2_per_m },
    }
}

/// Transverse distribution bars of a one-way slab (s ≤ 300 mm, s ≥ 70 mm, Ø ≥ 6).
pub fn choose_distribution_bars(grid: &AreaGrid, required_mm2_per_m: f64) -> Selection<BarChoice> {
    choose_single_layer(
        grid,
        required_mm2_per_m,
        DISTRIBUTION_MAX_SPACING_MM,
        DISTRIBUTION_MIN_SPACING_MM,
        DISTRIBUTION_MIN_DIAMETER_MM,
    )
}
