//! # Slab Design Record
//!
//! A flat, string-friendly summary of one slab design for report printers,
//! schedules and storage layers. Bar call-outs use the `Ø<d>/<s>cm` form;
//! `-` marks steel that is not required and `unresolved` a failed search.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::record::SlabDesignRecord;
//! use slab_core::calculations::slab::{calculate, BeamWidths, SlabInput};
//!
//! let input = SlabInput {
//!     label: "D-101".to_string(),
//!     lx_m: 4.5,
//!     ly_m: 5.0,
//!     beams_x: BeamWidths::uniform(300.0),
//!     beams_y: BeamWidths::uniform(300.0),
//!     thickness_mm: 140.0,
//!     cover_mm: 20.0,
//!     concrete: "C30".to_string(),
//!     steel: "S420".to_string(),
//!     additional_dead_kn_m2: 1.5,
//!     live_kn_m2: 3.5,
//!     support_case: 1,
//! };
//! let result = calculate(&input).unwrap();
//! let record = SlabDesignRecord::new(&input, &result);
//!
//! assert_eq!(record.label, "D-101");
//! assert!(record.x_bottom_straight.starts_with('Ø'));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bar_selection::{BarChoice, Selection};
use super::reinforcement::{BottomReinforcement, DirectionDesign};
use super::slab::{SlabInput, SlabResult, SlabType};

/// Call-out for steel that is not required
pub const NOT_REQUIRED_CALLOUT: &str = "-";

/// Call-out for a failed bar search
pub const UNRESOLVED_CALLOUT: &str = "unresolved";

/// Call-out string for a single-layer selection.
pub fn bar_callout(selection: &Selection<BarChoice>) -> String {
    match selection {
        Selection::NotRequired => NOT_REQUIRED_CALLOUT.to_string(),
        Selection::Chosen(bar) => bar.to_string(),
        Selection::Infeasible { .. } => UNRESOLVED_CALLOUT.to_string(),
    }
}

/// (straight, bent) call-outs of the bottom steel. Distribution bars occupy
/// the straight slot.
fn bottom_callouts(bottom: &BottomReinforcement) -> (String, String) {
    match bottom {
        BottomReinforcement::Main(Selection::Chosen(layout)) => {
            (layout.straight.to_string(), layout.bent.to_string())
        }
        BottomReinforcement::Main(Selection::NotRequired) => {
            (NOT_REQUIRED_CALLOUT.to_string(), NOT_REQUIRED_CALLOUT.to_string())
        }
        BottomReinforcement::Main(Selection::Infeasible { .. }) => {
            (UNRESOLVED_CALLOUT.to_string(), UNRESOLVED_CALLOUT.to_string())
        }
        BottomReinforcement::Distribution(selection) => {
            (bar_callout(selection), NOT_REQUIRED_CALLOUT.to_string())
        }
    }
}

/// Flat summary of one slab design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabDesignRecord {
    /// Unique slab identifier
    pub slab_id: Uuid,

    /// When the design was recorded
    pub created: DateTime<Utc>,

    /// User label
    pub label: String,

    /// Gross span X (m)
    pub lx_m: f64,

    /// Gross span Y (m)
    pub ly_m: f64,

    /// Thickness (mm)
    pub thickness_mm: f64,

    /// Cover (mm)
    pub cover_mm: f64,

    /// Concrete label
    pub concrete: String,

    /// Steel label
    pub steel: String,

    /// Additional dead load (kN/m²)
    pub additional_dead_kn_m2: f64,

    /// Live load (kN/m²)
    pub live_kn_m2: f64,

    /// Factored design load (kN/m²)
    pub design_load_kn_m2: f64,

    /// One-way or two-way
    pub slab_type: SlabType,

    /// Support case number (1-7)
    pub support_case: u8,

    /// Aspect ratio m
    pub aspect_ratio: f64,

    /// Net span X (m)
    pub net_span_x_m: f64,

    /// Net span Y (m)
    pub net_span_y_m: f64,

    /// X bottom, straight bars or distribution bars
    pub x_bottom_straight: String,

    /// X bottom, bent bars
    pub x_bottom_bent: String,

    /// X top bars
    pub x_top: String,

    /// Y bottom, straight bars or distribution bars
    pub y_bottom_straight: String,

    /// Y bottom, bent bars
    pub y_bottom_bent: String,

    /// Y top bars
    pub y_top: String,

    /// Thickness check passed
    pub thickness_ok: bool,

    /// Advisory notes
    pub warnings: Vec<String>,
}

impl SlabDesignRecord {
    /// Build a record with a fresh id and the current time.
    pub fn new(input: &SlabInput, result: &SlabResult) -> Self {
        Self::with_id(Uuid::new_v4(), Utc::now(), input, result)
    }

    /// Build a record with a given id and timestamp.
    pub fn with_id(
        slab_id: Uuid,
        created: DateTime<Utc>,
        input: &SlabInput,
        result: &SlabResult,
    ) -> Self {
        let (x_bottom_straight, x_bottom_bent) = bottom_callouts(&result.x.bottom);
        let (y_bottom_straight, y_bottom_bent) = bottom_callouts(&result.y.bottom);

        SlabDesignRecord {
            slab_id,
            created,
            label: input.label.clone(),
            lx_m: input.lx_m,
            ly_m: input.ly_m,
            thickness_mm: input.thickness_mm,
            cover_mm: input.cover_mm,
            concrete: input.concrete.clone(),
            steel: input.steel.clone(),
            additional_dead_kn_m2: input.additional_dead_kn_m2,
            live_kn_m2: input.live_kn_m2,
            design_load_kn_m2: result.loads.design_load_kn_m2,
            slab_type: result.slab_type,
            support_case: result.support_case.id(),
            aspect_ratio: result.aspect_ratio,
            net_span_x_m: result.net_span_x_m,
            net_span_y_m: result.net_span_y_m,
            x_bottom_straight,
            x_bottom_bent,
            x_top: bar_callout(&result.x.top),
            y_bottom_straight,
            y_bottom_bent,
            y_top: bar_callout(&result.y.top),
            thickness_ok: result.thickness.ok,
            warnings: result.warnings.clone(),
        }
    }

    /// One-line schedule entry
    pub fn schedule_line(&self) -> String {
        format!(
            "{} | {} | h={:.0} | X: {} + {} / top {} | Y: {} + {} / top {}",
            self.label,
            self.slab_type,
            self.thickness_mm,
            self.x_bottom_straight,
            self.x_bottom_bent,
            self.x_top,
            self.y_bottom_straight,
            self.y_bottom_bent,
            self.y_top,
        )
    }
}

/// Short description of a direction's bottom and top steel.
pub fn direction_summary(design: &DirectionDesign) -> String {
    format!("{}: bottom {} | top {}", design.direction, design.bottom, design.top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::slab::{calculate, BeamWidths};

    fn input(lx_m: f64, ly_m: f64, support_case: u8) -> SlabInput {
        SlabInput {
            label: "D-2".to_string(),
            lx_m,
            ly_m,
            beams_x: BeamWidths::uniform(300.0),
            beams_y: BeamWidths::uniform(300.0),
            thickness_mm: 150.0,
            cover_mm: 20.0,
            concrete: "C25".to_string(),
            steel: "S420".to_string(),
            additional_dead_kn_m2: 2.0,
            live_kn_m2: 2.0,
            support_case,
        }
    }

    #[test]
    fn test_callouts() {
        assert_eq!(bar_callout(&Selection::NotRequired), "-");
        assert_eq!(
            bar_callout(&Selection::Infeasible { required_mm2_per_m: 9000.0 }),
            "unresolved"
        );
        let bar = BarChoice {
            diameter_mm: 8,
            spacing_cm: 20.0,
            area_mm2_per_m: 251.3,
            ratio: 1.0,
        };
        assert_eq!(bar_callout(&Selection::Chosen(bar)), "Ø8/20cm");
    }

    #[test]
    fn test_two_way_record() {
        let input = input(4.3, 5.3, 7);
        let result = calculate(&input).unwrap();
        let record = SlabDesignRecord::new(&input, &result);

        assert_eq!(record.support_case, 7);
        // Case 7 has no continuous edge
        assert_eq!(record.x_top, "-");
        assert_eq!(record.y_top, "-");
        assert!(record.x_bottom_straight.starts_with('Ø'));
        assert!(record.x_bottom_bent.starts_with('Ø'));
        assert!(record.schedule_line().contains("two-way"));
    }

    #[test]
    fn test_one_way_record() {
        let input = input(2.8, 7.8, 7);
        let result = calculate(&input).unwrap();
        let record = SlabDesignRecord::new(&input, &result);

        // X is transverse: distribution bars only
        assert_eq!(record.slab_type, SlabType::OneWay);
        assert!(record.x_bottom_straight.starts_with('Ø'));
        assert_eq!(record.x_bottom_bent, "-");
        assert!(direction_summary(&result.x).contains("distribution"));
    }

    #[test]
    fn test_record_serialization() {
        let input = input(4.3, 5.3, 1);
        let result = calculate(&input).unwrap();
        let record = SlabDesignRecord::new(&input, &result);

        let json = serde_json::to_string(&record).unwrap();
        let back: SlabDesignRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.slab_id, record.slab_id);
        assert_eq!(back.created, record.created);
        assert_eq!(back.x_top, record.x_top);
    }
}
