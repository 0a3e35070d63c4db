//! # Slab Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Modules
//!
//! - [`slab`] - Panel classification, thickness check and the design entry point
//! - [`reinforcement`] - Moments, minimum steel rules and per-direction designs
//! - [`bar_selection`] - Bar diameter/spacing search over the catalog
//! - [`record`] - Flat design summary with bar call-outs

pub mod bar_selection;
pub mod record;
pub mod reinforcement;
pub mod slab;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use bar_selection::{BarChoice, MainRebarLayout, Selection};
pub use record::SlabDesignRecord;
pub use reinforcement::{BottomReinforcement, Direction, DirectionDesign, MomentDesign};
pub use slab::{BeamWidths, SlabInput, SlabResult, SlabType, ThicknessCheck};

/// Enum wrapper for all calculation types stored in a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Beam-supported slab panel
    Slab(SlabInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Slab(s) => &s.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Slab(_) => "Slab",
        }
    }
}
