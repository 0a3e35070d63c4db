//! # Beam-Supported Slab Panel Design
//!
//! Flexural design of a rectangular reinforced-concrete slab panel supported
//! on beams, using the moment-coefficient method.
//!
//! ## Procedure
//!
//! 1. Net spans: gross span minus half of each adjoining beam width
//! 2. Aspect ratio m = ln,long / ln,short; one-way when m > 2.0
//! 3. Loads: self-weight h·25, pd = 1.4G + 1.6Q
//! 4. Moments from the coefficient tables, steel from the K/ks chart
//! 5. Minimum steel rules, then bar selection from the catalog
//!
//! Thickness and method applicability are checked on the side. They only
//! add warnings and never stop the design.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::slab::{calculate, BeamWidths, SlabInput, SlabType};
//!
//! let input = SlabInput {
//!     label: "D-101".to_string(),
//!     lx_m: 5.0,
//!     ly_m: 6.0,
//!     beams_x: BeamWidths::new(300.0, 300.0),
//!     beams_y: BeamWidths::new(250.0, 350.0),
//!     thickness_mm: 150.0,
//!     cover_mm: 20.0,
//!     concrete: "C30".to_string(),
//!     steel: "S420".to_string(),
//!     additional_dead_kn_m2: 1.5,
//!     live_kn_m2: 5.0,
//!     support_case: 1,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.slab_type, SlabType::TwoWay);
//! assert!((result.net_span_x_m - 4.7).abs() < 1e-9);
//! assert!((result.net_span_y_m - 5.7).abs() < 1e-9);
//! println!("X bottom: {}", result.x.bottom);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::reinforcement::{
    design_one_way, design_two_way, Direction, DirectionDesign, SectionContext, Strip,
};
use crate::design_chart::DesignChart;
use crate::errors::{CalcError, CalcResult};
use crate::loads::{LoadCase, LoadSummary, LoadType};
use crate::materials::{AreaGrid, ConcreteGrade, SteelGrade};
use crate::moment_coefficients::{aspect_ratio, is_one_way, EdgeContinuity, SupportCase};
use crate::units::{Meters, Millimeters};

/// Smallest net span used in any calculation (m)
pub const MIN_NET_SPAN_M: f64 = 0.1;

/// Absolute floor on the minimum thickness (mm)
pub const MIN_THICKNESS_FLOOR_MM: f64 = 80.0;

/// One-way span/thickness divisor
pub const ONE_WAY_SPAN_DIVISOR: f64 = 30.0;

/// Beams narrower than this get an advisory warning (mm)
pub const MIN_BEAM_WIDTH_MM: f64 = 250.0;

/// Live/dead ratio above which the coefficient method is flagged
pub const MAX_LIVE_TO_DEAD_RATIO: f64 = 2.0;

/// Short/long span ratio at or below which the coefficient method is flagged
pub const MIN_SPAN_RATIO: f64 = 0.8;

/// Widths of the beams at both ends of one span (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamWidths {
    /// Beam at the start of the span
    pub left_mm: f64,
    /// Beam at the end of the span
    pub right_mm: f64,
}

impl BeamWidths {
    /// Create beam widths
    pub fn new(left_mm: f64, right_mm: f64) -> Self {
        BeamWidths { left_mm, right_mm }
    }

    /// Same width at both ends
    pub fn uniform(width_mm: f64) -> Self {
        BeamWidths::new(width_mm, width_mm)
    }
}

/// Input parameters for one slab panel.
///
/// Spans are gross (centre-line) lengths in metres; section dimensions are
/// in millimetres and area loads in kN/m².
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "D-101",
///   "lx_m": 5.0,
///   "ly_m": 6.0,
///   "beams_x": { "left_mm": 300.0, "right_mm": 300.0 },
///   "beams_y": { "left_mm": 250.0, "right_mm": 350.0 },
///   "thickness_mm": 150.0,
///   "cover_mm": 20.0,
///   "concrete": "C30",
///   "steel": "S420",
///   "additional_dead_kn_m2": 1.5,
///   "live_kn_m2": 5.0,
///   "support_case": 1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabInput {
    /// User label (e.g., "D-101")
    pub label: String,

    /// Gross span in X (m)
    pub lx_m: f64,

    /// Gross span in Y (m)
    pub ly_m: f64,

    /// Beams at the ends of the X span
    pub beams_x: BeamWidths,

    /// Beams at the ends of the Y span
    pub beams_y: BeamWidths,

    /// Slab thickness h (mm)
    pub thickness_mm: f64,

    /// Concrete cover to the bar centroid (mm)
    pub cover_mm: f64,

    /// Concrete grade label (e.g., "C30")
    pub concrete: String,

    /// Steel grade label (e.g., "S420", "B500C")
    pub steel: String,

    /// Finishes and partitions (kN/m²)
    pub additional_dead_kn_m2: f64,

    /// Live load (kN/m²)
    pub live_kn_m2: f64,

    /// Support case 1-7
    pub support_case: u8,
}

fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if value <= 0.0 || !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if value < 0.0 || !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

impl SlabInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("lx_m", self.lx_m, "Span must be positive")?;
        require_positive("ly_m", self.ly_m, "Span must be positive")?;
        for (field, value) in [
            ("beams_x.left_mm", self.beams_x.left_mm),
            ("beams_x.right_mm", self.beams_x.right_mm),
            ("beams_y.left_mm", self.beams_y.left_mm),
            ("beams_y.right_mm", self.beams_y.right_mm),
        ] {
            require_non_negative(field, value, "Beam width cannot be negative")?;
        }
        require_positive("thickness_mm", self.thickness_mm, "Thickness must be positive")?;
        require_non_negative("cover_mm", self.cover_mm, "Cover cannot be negative")?;
        if self.cover_mm >= self.thickness_mm {
            return Err(CalcError::invalid_input(
                "cover_mm",
                self.cover_mm.to_string(),
                "Cover must be less than the slab thickness",
            ));
        }

        LoadCase::new(&self.label)
            .with_load(LoadType::Dead, self.additional_dead_kn_m2)
            .with_load(LoadType::Live, self.live_kn_m2)
            .validate()?;

        SupportCase::from_id(self.support_case)?;
        ConcreteGrade::parse(&self.concrete)?;
        SteelGrade::parse(&self.steel)?;
        Ok(())
    }

    /// Net span in X (m)
    pub fn net_span_x_m(&self) -> f64 {
        net_span_m(self.lx_m, self.beams_x.left_mm, self.beams_x.right_mm)
    }

    /// Net span in Y (m)
    pub fn net_span_y_m(&self) -> f64 {
        net_span_m(self.ly_m, self.beams_y.left_mm, self.beams_y.right_mm)
    }

    /// Effective depth d = h - cover (m)
    pub fn effective_depth_m(&self) -> f64 {
        let d: Meters = Millimeters(self.thickness_mm - self.cover_mm).into();
        d.0
    }
}

/// Net span: gross span minus half of each adjoining beam width, at least 0.1 m.
///
/// # Example
///
/// ```rust
/// use slab_core::calculations::slab::net_span_m;
///
/// assert!((net_span_m(5.0, 300.0, 300.0) - 4.7).abs() < 1e-9);
/// assert!((net_span_m(6.0, 250.0, 350.0) - 5.7).abs() < 1e-9);
/// ```
pub fn net_span_m(gross_m: f64, left_beam_mm: f64, right_beam_mm: f64) -> f64 {
    let deduction: Meters = Millimeters((left_beam_mm + right_beam_mm) / 2.0).into();
    (gross_m - deduction.0).max(MIN_NET_SPAN_M)
}

/// Structural behaviour of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlabType {
    /// m > 2.0, carries load in one direction
    OneWay,
    /// m ≤ 2.0, carries load in both directions
    TwoWay,
}

impl SlabType {
    /// Classify by aspect ratio
    pub fn classify(m: f64) -> Self {
        if is_one_way(m) {
            SlabType::OneWay
        } else {
            SlabType::TwoWay
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SlabType::OneWay => "one-way",
            SlabType::TwoWay => "two-way",
        }
    }
}

impl fmt::Display for SlabType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Minimum thickness check (advisory).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThicknessCheck {
    /// Minimum thickness (mm)
    pub h_min_mm: f64,
    /// True when the slab is at least h_min thick
    pub ok: bool,
    /// Formula and values used
    pub note: String,
}

/// One-way minimum thickness h_min = ln/30, at least 80 mm.
///
/// # Example
///
/// ```rust
/// use slab_core::calculations::slab::thickness_check_one_way;
///
/// let check = thickness_check_one_way(6.0, 180.0);
/// assert!((check.h_min_mm - 200.0).abs() < 1e-9);
/// assert!(!check.ok);
/// ```
pub fn thickness_check_one_way(ln_m: f64, thickness_mm: f64) -> ThicknessCheck {
    let ln = ln_m.max(MIN_NET_SPAN_M);
    let ln_mm: Millimeters = Meters(ln).into();
    let h_min_mm = (ln_mm.0 / ONE_WAY_SPAN_DIVISOR).max(MIN_THICKNESS_FLOOR_MM);
    ThicknessCheck {
        h_min_mm,
        ok: thickness_mm >= h_min_mm,
        note: format!("One-way: h_min = ln/30, ln = {:.3} m → h_min = {:.1} mm", ln, h_min_mm),
    }
}

/// Two-way minimum thickness h_min = ln,short / (15 + 20/m) · (1 − αs/4), at least 80 mm.
///
/// `alpha_s` is the continuous edge length over the panel perimeter.
pub fn thickness_check_two_way(
    ln_short_m: f64,
    ln_long_m: f64,
    thickness_mm: f64,
    alpha_s: f64,
) -> ThicknessCheck {
    let ln_short = ln_short_m.max(MIN_NET_SPAN_M);
    let m = (ln_long_m / ln_short).max(1.0);
    let ln_mm: Millimeters = Meters(ln_short).into();
    let h_min_mm =
        (ln_mm.0 / (15.0 + 20.0 / m) * (1.0 - alpha_s / 4.0)).max(MIN_THICKNESS_FLOOR_MM);
    ThicknessCheck {
        h_min_mm,
        ok: thickness_mm >= h_min_mm,
        note: format!(
            "Two-way: h_min = ln,short/(15+20/m)·(1-αs/4), ln,short = {:.3} m, m = {:.3}, αs = {:.3} → h_min = {:.1} mm",
            ln_short, m, alpha_s, h_min_mm
        ),
    }
}

/// Coefficient-method applicability notes (empty when applicable).
pub fn applicability_warnings(loads: &LoadSummary, ln_short_m: f64, ln_long_m: f64) -> Vec<String> {
    let mut warnings = Vec::new();
    let live_to_dead = loads.live_to_dead_ratio();
    if live_to_dead > MAX_LIVE_TO_DEAD_RATIO {
        warnings.push(format!(
            "Coefficient method not applicable: q/g = {:.2} > {:.1}",
            live_to_dead, MAX_LIVE_TO_DEAD_RATIO
        ));
    }
    let span_ratio = ln_short_m / ln_long_m;
    if span_ratio <= MIN_SPAN_RATIO {
        warnings.push(format!(
            "Coefficient method not applicable: ln,short/ln,long = {:.2} ≤ {:.1}",
            span_ratio, MIN_SPAN_RATIO
        ));
    }
    warnings
}

/// Results of a slab panel design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabResult {
    /// Label copied from the input
    pub label: String,

    /// One-way or two-way
    pub slab_type: SlabType,

    /// Support case used
    pub support_case: SupportCase,

    /// Aspect ratio m = ln,long / ln,short
    pub aspect_ratio: f64,

    /// Net span in X (m)
    pub net_span_x_m: f64,

    /// Net span in Y (m)
    pub net_span_y_m: f64,

    /// Effective depth d (m)
    pub effective_depth_m: f64,

    /// X-direction design
    pub x: DirectionDesign,

    /// Y-direction design
    pub y: DirectionDesign,

    /// Minimum thickness check
    pub thickness: ThicknessCheck,

    /// Load analysis
    pub loads: LoadSummary,

    /// Edge continuity used for the panel
    pub edge_continuity: EdgeContinuity,

    /// Advisory notes (thickness, applicability, beam widths, unresolved bars)
    pub warnings: Vec<String>,
}

impl SlabResult {
    /// True when any bar search failed
    pub fn has_unresolved(&self) -> bool {
        self.x.has_unresolved() || self.y.has_unresolved()
    }

    /// Thickness is adequate and every requirement has bars
    pub fn passes(&self) -> bool {
        self.thickness.ok && !self.has_unresolved()
    }
}

/// Design a slab panel with the standard bar catalog and design chart.
pub fn calculate(input: &SlabInput) -> CalcResult<SlabResult> {
    calculate_with(input, AreaGrid::standard(), DesignChart::standard())
}

/// Design a slab panel against an explicit bar catalog and design chart.
pub fn calculate_with(
    input: &SlabInput,
    grid: &AreaGrid,
    chart: &DesignChart,
) -> CalcResult<SlabResult> {
    input.validate()?;

    let concrete = ConcreteGrade::parse(&input.concrete)?;
    let steel = SteelGrade::parse(&input.steel)?;
    let support_case = SupportCase::from_id(input.support_case)?;

    let lnx = input.net_span_x_m();
    let lny = input.net_span_y_m();
    let (ln_short, ln_long) = (lnx.min(lny), lnx.max(lny));
    let m = aspect_ratio(lnx, lny);
    let slab_type = SlabType::classify(m);
    let edge_continuity = support_case.edge_continuity(lnx, lny);

    debug!(
        label = %input.label,
        lnx,
        lny,
        m,
        slab_type = %slab_type,
        case = support_case.id(),
        "slab classified"
    );

    let loads = LoadSummary::compute(
        input.thickness_mm,
        input.additional_dead_kn_m2,
        input.live_kn_m2,
    );
    let pd = loads.design_load_kn_m2;
    debug!(pd, combination = %loads.combination, "design load");

    let ctx = SectionContext {
        grid,
        chart,
        concrete: &concrete,
        steel: &steel,
        thickness_mm: input.thickness_mm,
        effective_depth_m: input.effective_depth_m(),
    };
    let strip_x = Strip { direction: Direction::X, net_span_m: lnx };
    let strip_y = Strip { direction: Direction::Y, net_span_m: lny };
    let edge_note = edge_continuity.note();

    let (x, y, thickness) = match slab_type {
        SlabType::OneWay => {
            let x_is_long = lnx > lny;
            let (main, transverse) = if x_is_long { (strip_x, strip_y) } else { (strip_y, strip_x) };
            let (main_design, transverse_design) =
                design_one_way(&ctx, pd, main, transverse, support_case.one_way(), &edge_note);
            let thickness = thickness_check_one_way(ln_short, input.thickness_mm);
            if x_is_long {
                (main_design, transverse_design, thickness)
            } else {
                (transverse_design, main_design, thickness)
            }
        }
        SlabType::TwoWay => {
            let x_is_short = lnx <= lny;
            let (short, long) = if x_is_short { (strip_x, strip_y) } else { (strip_y, strip_x) };
            let (short_design, long_design) =
                design_two_way(&ctx, pd, short, long, support_case.two_way(), m, &edge_note);
            let thickness = thickness_check_two_way(
                ln_short,
                ln_long,
                input.thickness_mm,
                edge_continuity.continuous_ratio,
            );
            if x_is_short {
                (short_design, long_design, thickness)
            } else {
                (long_design, short_design, thickness)
            }
        }
    };

    let mut warnings = Vec::new();
    for (name, width) in [
        ("X start", input.beams_x.left_mm),
        ("X end", input.beams_x.right_mm),
        ("Y start", input.beams_y.left_mm),
        ("Y end", input.beams_y.right_mm),
    ] {
        if width > 0.0 && width < MIN_BEAM_WIDTH_MM {
            warnings.push(format!(
                "Beam width at {} is {:.0} mm, below the {:.0} mm minimum",
                name, width, MIN_BEAM_WIDTH_MM
            ));
        }
    }
    if !thickness.ok {
        warnings.push(format!(
            "Thickness {:.0} mm is below h_min = {:.1} mm",
            input.thickness_mm, thickness.h_min_mm
        ));
    }
    warnings.extend(applicability_warnings(&loads, ln_short, ln_long));
    for design in [&x, &y] {
        if design.has_unresolved() {
            warnings.push(format!(
                "{} direction: reinforcement unresolved, increase spacing bound or add bars",
                design.direction
            ));
        }
    }
    for message in &warnings {
        warn!(label = %input.label, "{}", message);
    }

    Ok(SlabResult {
        label: input.label.clone(),
        slab_type,
        support_case,
        aspect_ratio: m,
        net_span_x_m: lnx,
        net_span_y_m: lny,
        effective_depth_m: input.effective_depth_m(),
        x,
        y,
        thickness,
        loads,
        edge_continuity,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::bar_selection::Selection;
    use crate::calculations::reinforcement::BottomReinforcement;

    fn panel(lx_m: f64, ly_m: f64, support_case: u8) -> SlabInput {
        SlabInput {
            label: "D-1".to_string(),
            lx_m,
            ly_m,
            beams_x: BeamWidths::uniform(300.0),
            beams_y: BeamWidths::uniform(300.0),
            thickness_mm: 150.0,
            cover_mm: 20.0,
            concrete: "C30".to_string(),
            steel: "S420".to_string(),
            additional_dead_kn_m2: 1.5,
            live_kn_m2: 5.0,
            support_case,
        }
    }

    #[test]
    fn test_net_span() {
        assert!((net_span_m(5.0, 300.0, 300.0) - 4.7).abs() < 1e-9);
        assert!((net_span_m(6.0, 250.0, 350.0) - 5.7).abs() < 1e-9);
        // Floored at 0.1 m
        assert!((net_span_m(0.2, 300.0, 300.0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_classification() {
        assert_eq!(SlabType::classify(aspect_ratio(3.0, 8.0)), SlabType::OneWay);
        assert_eq!(SlabType::classify(aspect_ratio(3.0, 6.0)), SlabType::TwoWay);
        assert_eq!(SlabType::classify(1.0), SlabType::TwoWay);
    }

    #[test]
    fn test_thickness_one_way() {
        let check = thickness_check_one_way(6.0, 200.0);
        assert!((check.h_min_mm - 200.0).abs() < 1e-9);
        assert!(check.ok);

        // Short spans hit the 80 mm floor
        let check = thickness_check_one_way(1.5, 100.0);
        assert!((check.h_min_mm - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_thickness_two_way() {
        // m = 1.25 → 15 + 16 = 31
        let check = thickness_check_two_way(4.0, 5.0, 120.0, 0.0);
        assert!((check.h_min_mm - 4000.0 / 31.0).abs() < 1e-9);
        assert!(!check.ok);

        // Fully continuous: ×(1 − 1/4)
        let check = thickness_check_two_way(4.0, 5.0, 120.0, 1.0);
        assert!((check.h_min_mm - 4000.0 / 31.0 * 0.75).abs() < 1e-9);
        assert!(check.ok);
    }

    #[test]
    fn test_applicability() {
        let heavy_live = LoadSummary::compute(120.0, 0.5, 10.0);
        let warnings = applicability_warnings(&heavy_live, 4.0, 4.5);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("q/g"));

        let normal = LoadSummary::compute(120.0, 1.5, 2.0);
        assert!(applicability_warnings(&normal, 4.0, 4.5).is_empty());
        assert_eq!(applicability_warnings(&normal, 4.0, 5.0).len(), 1);
    }

    #[test]
    fn test_two_way_panel() {
        let mut input = panel(5.0, 6.0, 1);
        input.beams_y = BeamWidths::new(250.0, 350.0);
        let result = calculate(&input).unwrap();

        assert_eq!(result.slab_type, SlabType::TwoWay);
        assert!((result.net_span_x_m - 4.7).abs() < 1e-9);
        assert!((result.net_span_y_m - 5.7).abs() < 1e-9);
        assert!((result.aspect_ratio - 5.7 / 4.7).abs() < 1e-9);
        assert!((result.effective_depth_m - 0.13).abs() < 1e-12);

        // 1.4 × (3.75 + 1.5) + 1.6 × 5.0
        assert!((result.loads.design_load_kn_m2 - 15.35).abs() < 1e-9);

        // X is the short direction and carries the larger moment
        assert!(result.x.positive.moment_knm_per_m > result.y.positive.moment_knm_per_m);
        let base = 15.35 * 4.7 * 4.7;
        assert!((result.y.positive.moment_knm_per_m - 0.025 * base).abs() < 1e-9);

        // Case 1: continuous all round, top steel both ways
        assert!(result.x.top.chosen().is_some());
        assert!(result.y.top.chosen().is_some());
        assert!(matches!(result.x.bottom, BottomReinforcement::Main(Selection::Chosen(_))));
        assert!(!result.has_unresolved());
        assert!((result.edge_continuity.continuous_ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_one_way_panel() {
        // Net spans 3.0 × 8.0 → m = 8/3
        let input = panel(3.3, 8.3, 7);
        let result = calculate(&input).unwrap();

        assert_eq!(result.slab_type, SlabType::OneWay);
        assert!((result.aspect_ratio - 8.0 / 3.0).abs() < 1e-9);

        // Y is the long direction and carries the moment (case 7 → simple span)
        let expected = 15.35 * 64.0 / 8.0;
        assert!((result.y.positive.moment_knm_per_m - expected).abs() < 1e-9);
        assert!(result.y.negative.is_none());
        assert!(result.x.positive.is_zero());
        assert!(matches!(result.x.bottom, BottomReinforcement::Distribution(_)));

        // Thickness uses the short net span: 3000/30 = 100 → ok at 150
        assert!((result.thickness.h_min_mm - 100.0).abs() < 1e-9);
        assert!(result.thickness.ok);
    }

    #[test]
    fn test_one_way_ratio_exactly_two_is_two_way() {
        let mut input = panel(3.0, 6.0, 7);
        input.beams_x = BeamWidths::uniform(0.0);
        input.beams_y = BeamWidths::uniform(0.0);
        let result = calculate(&input).unwrap();
        assert!((result.aspect_ratio - 2.0).abs() < 1e-15);
        assert_eq!(result.slab_type, SlabType::TwoWay);
    }

    #[test]
    fn test_warnings() {
        let mut input = panel(4.0, 4.4, 7);
        input.beams_x = BeamWidths::new(200.0, 300.0);
        input.thickness_mm = 90.0;
        input.additional_dead_kn_m2 = 0.5;
        input.live_kn_m2 = 10.0;
        let result = calculate(&input).unwrap();

        assert!(result.warnings.iter().any(|w| w.contains("Beam width at X start")));
        assert!(result.warnings.iter().any(|w| w.contains("below h_min")));
        assert!(result.warnings.iter().any(|w| w.contains("q/g")));
        assert!(!result.passes());
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = panel(5.0, 6.0, 1);
        input.concrete = "C20".to_string();
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let mut input = panel(5.0, 6.0, 8);
        input.support_case = 8;
        assert!(calculate(&input).is_err());

        let mut input = panel(5.0, 6.0, 1);
        input.cover_mm = 150.0;
        assert!(calculate(&input).is_err());

        let mut input = panel(5.0, 6.0, 1);
        input.lx_m = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = panel(5.0, 6.0, 1);
        input.live_kn_m2 = -1.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_input_serialization() {
        let input = panel(5.0, 6.0, 2);
        let json = serde_json::to_string(&input).unwrap();
        let back: SlabInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"slab_type\":\"TwoWay\""));
    }
}
