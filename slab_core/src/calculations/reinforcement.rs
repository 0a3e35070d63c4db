//! # Moment & Reinforcement Design
//!
//! Turns coefficient-method moments into required steel per direction and
//! selects bars for them. The slab is designed as a 1 m wide strip in each
//! direction.
//!
//! ## Minimum Reinforcement
//!
//! | Rule | Area (mm²/m) | Applies to |
//! |------|--------------|------------|
//! | Main steel | ρmin·b·d (ρmin = 0.003 for S220, else 0.002) | bottom, every carrying direction |
//! | Combined two-way | Asx + Asy ≥ 0.0035·b·d | bottom, two-way slabs |
//! | Support steel | 0.002·b·d | top, only where negative moment exists |
//! | Distribution | max(0.2·As,main, 0.0012·b·h) | bottom, one-way transverse |
//!
//! ## Spacing Limits
//!
//! - Bottom main bars: s ≤ min(1.5h, 200 mm)
//! - Top bars: s ≤ min(2h, 200 mm)
//! - All bars: s ≥ 70 mm, main bars Ø ≥ 8

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::bar_selection::{
    choose_distribution_bars, choose_main_layout_half_half, choose_single_layer, BarChoice,
    MainRebarLayout, Selection, DISTRIBUTION_MAX_SPACING_MM, DISTRIBUTION_MIN_DIAMETER_MM,
    DISTRIBUTION_MIN_SPACING_MM,
};
use crate::design_chart::{flexural_demand_with, DesignChart, STRIP_WIDTH_MM, ZERO_MOMENT_TOL};
use crate::materials::{AreaGrid, ConcreteGrade, SteelGrade};
use crate::moment_coefficients::{OneWayCondition, TwoWayCoefficients};
use crate::units::{Meters, Millimeters};

/// Combined two-way bottom steel ratio (Asx + Asy)
pub const RHO_MIN_COMBINED_TWO_WAY: f64 = 0.0035;

/// Top steel floor where negative moment exists
pub const RHO_MIN_TOP: f64 = 0.002;

/// Distribution steel as a share of the gross section
pub const RHO_DISTRIBUTION_GROSS: f64 = 0.0012;

/// Distribution steel as a share of the main steel
pub const DISTRIBUTION_MAIN_FRACTION: f64 = 0.2;

/// Absolute cap on main and top bar spacing (mm)
pub const MAX_SPACING_CAP_MM: f64 = 200.0;

/// Smallest clear working spacing (mm)
pub const MIN_SPACING_MM: f64 = 70.0;

/// Smallest main bar diameter (mm)
pub const MAIN_MIN_DIAMETER_MM: u32 = 8;

/// Plan direction of a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Along the lx span
    X,
    /// Along the ly span
    Y,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::X => write!(f, "X"),
            Direction::Y => write!(f, "Y"),
        }
    }
}

/// Search bounds handed to bar selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingLimits {
    /// Maximum spacing (mm)
    pub max_mm: f64,
    /// Minimum spacing (mm)
    pub min_mm: f64,
    /// Smallest bar diameter (mm)
    pub min_diameter_mm: u32,
}

impl SpacingLimits {
    /// Bottom main bars: s ≤ min(1.5h, 200)
    pub fn bottom(thickness_mm: f64) -> Self {
        SpacingLimits {
            max_mm: (1.5 * thickness_mm).min(MAX_SPACING_CAP_MM),
            min_mm: MIN_SPACING_MM,
            min_diameter_mm: MAIN_MIN_DIAMETER_MM,
        }
    }

    /// Top bars: s ≤ min(2h, 200)
    pub fn top(thickness_mm: f64) -> Self {
        SpacingLimits {
            max_mm: (2.0 * thickness_mm).min(MAX_SPACING_CAP_MM),
            min_mm: MIN_SPACING_MM,
            min_diameter_mm: MAIN_MIN_DIAMETER_MM,
        }
    }

    /// One-way distribution bars
    pub fn distribution() -> Self {
        SpacingLimits {
            max_mm: DISTRIBUTION_MAX_SPACING_MM,
            min_mm: DISTRIBUTION_MIN_SPACING_MM,
            min_diameter_mm: DISTRIBUTION_MIN_DIAMETER_MM,
        }
    }
}

impl fmt::Display for SpacingLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} mm ≤ s ≤ {:.0} mm, Ø ≥ {}",
            self.min_mm, self.max_mm, self.min_diameter_mm
        )
    }
}

/// Section, materials and lookup tables shared by both directions.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    /// Bar catalog
    pub grid: &'a AreaGrid,
    /// K/ks chart
    pub chart: &'a DesignChart,
    /// Concrete grade
    pub concrete: &'a ConcreteGrade,
    /// Steel grade
    pub steel: &'a SteelGrade,
    /// Slab thickness h (mm)
    pub thickness_mm: f64,
    /// Effective depth d (m)
    pub effective_depth_m: f64,
}

impl SectionContext<'_> {
    fn effective_depth_mm(&self) -> f64 {
        let d: Millimeters = Meters(self.effective_depth_m).into();
        d.0
    }

    /// ρ·b·d (mm²/m)
    pub fn area_on_effective_depth(&self, rho: f64) -> f64 {
        rho * STRIP_WIDTH_MM * self.effective_depth_mm()
    }

    /// ρ·b·h (mm²/m)
    pub fn area_on_gross_section(&self, rho: f64) -> f64 {
        rho * STRIP_WIDTH_MM * self.thickness_mm
    }

    /// Moment `coefficient · pd · span²` and its chart values.
    pub fn moment_design(&self, coefficient: f64, pd_kn_m2: f64, span_m: f64) -> MomentDesign {
        let moment_knm_per_m = coefficient * pd_kn_m2 * span_m.powi(2);
        let demand = flexural_demand_with(
            self.chart,
            moment_knm_per_m,
            self.effective_depth_m,
            self.concrete,
            self.steel,
        );
        MomentDesign {
            coefficient,
            moment_knm_per_m,
            k_x1e5: demand.k_x1e5,
            ks: demand.ks,
            as_from_moment_mm2_per_m: demand.as_mm2_per_m,
        }
    }
}

/// One design moment on a 1 m strip.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MomentDesign {
    /// Moment coefficient used
    pub coefficient: f64,
    /// Design moment (kN·m/m)
    pub moment_knm_per_m: f64,
    /// K ×10⁵ (0 for a zero moment)
    pub k_x1e5: f64,
    /// Chart coefficient ks (0 for a zero moment)
    pub ks: f64,
    /// Steel area from the moment alone (mm²/m)
    pub as_from_moment_mm2_per_m: f64,
}

impl MomentDesign {
    /// True when the moment is (numerically) zero
    pub fn is_zero(&self) -> bool {
        self.moment_knm_per_m.abs() <= ZERO_MOMENT_TOL
    }
}

/// Bottom steel of one direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "selection")]
pub enum BottomReinforcement {
    /// Main steel, half straight and half bent bars
    Main(Selection<MainRebarLayout>),
    /// Transverse distribution bars of a one-way slab
    Distribution(Selection<BarChoice>),
}

impl BottomReinforcement {
    /// True when the bar search failed
    pub fn is_infeasible(&self) -> bool {
        match self {
            BottomReinforcement::Main(sel) => sel.is_infeasible(),
            BottomReinforcement::Distribution(sel) => sel.is_infeasible(),
        }
    }
}

impl fmt::Display for BottomReinforcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BottomReinforcement::Main(sel) => write!(f, "{}", sel),
            BottomReinforcement::Distribution(sel) => write!(f, "{} (distribution)", sel),
        }
    }
}

/// Complete design of one direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionDesign {
    /// Strip direction
    pub direction: Direction,

    /// Net span of this direction (m)
    pub net_span_m: f64,

    /// Midspan moment (zero for a one-way distribution direction)
    pub positive: MomentDesign,

    /// Support moment, when the direction has a continuous edge
    pub negative: Option<MomentDesign>,

    /// Required bottom steel after minimum rules (mm²/m)
    pub bottom_required_mm2_per_m: f64,

    /// Selected bottom steel
    pub bottom: BottomReinforcement,

    /// Required top steel (mm²/m); 0 without negative moment
    pub top_required_mm2_per_m: f64,

    /// Selected top steel
    pub top: Selection<BarChoice>,

    /// Which minimum rule governed the bottom steel
    pub minimum_note: String,

    /// Bounds used for the bottom search
    pub bottom_limits: SpacingLimits,

    /// Bounds used for the top search
    pub top_limits: SpacingLimits,

    /// Edge-continuity description of the panel
    pub edge_note: String,
}

impl DirectionDesign {
    /// True when any bar search of this direction failed
    pub fn has_unresolved(&self) -> bool {
        self.bottom.is_infeasible() || self.top.is_infeasible()
    }

    /// Spacing limits for reports
    pub fn spacing_note(&self) -> String {
        format!("Bottom: {} | Top: {}", self.bottom_limits, self.top_limits)
    }
}

/// Bottom steel of a two-way panel after both minimum rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoWayMinimum {
    /// Required short-direction bottom steel (mm²/m)
    pub short_mm2_per_m: f64,
    /// Required long-direction bottom steel (mm²/m)
    pub long_mm2_per_m: f64,
    /// Governing rule
    pub note: String,
}

/// Apply the per-direction and combined minimums to moment-derived areas.
///
/// The combined check uses the areas before the per-direction clamp. When
/// their sum is below `combined_min`, both are scaled up by the same factor
/// (split equally if the sum is zero). Each direction then takes the larger
/// of its rescaled area and `per_direction_min`.
///
/// # Example
///
/// ```rust
/// use slab_core::calculations::reinforcement::apply_two_way_minimums;
///
/// // d = 100 mm: ρmin·b·d = 200, 0.0035·b·d = 350
/// let min = apply_two_way_minimums(150.0, 50.0, 200.0, 350.0);
/// assert!((min.short_mm2_per_m - 262.5).abs() < 1e-9);
/// assert!((min.long_mm2_per_m - 200.0).abs() < 1e-9);
/// ```
pub fn apply_two_way_minimums(
    as_short_moment: f64,
    as_long_moment: f64,
    per_direction_min: f64,
    combined_min: f64,
) -> TwoWayMinimum {
    let sum = as_short_moment + as_long_moment;

    let (short, long, combined_note) = if sum >= combined_min {
        (
            as_short_moment,
            as_long_moment,
            format!("As,short+As,long = {:.0} ≥ {:.0} (0.0035·b·d)", sum, combined_min),
        )
    } else if sum > ZERO_MOMENT_TOL {
        let scale = combined_min / sum;
        (
            as_short_moment * scale,
            as_long_moment * scale,
            format!("As,short+As,long = {:.0} < {:.0} (0.0035·b·d), scaled ×{:.3}", sum, combined_min, scale),
        )
    } else {
        (
            combined_min / 2.0,
            combined_min / 2.0,
            format!("As,short+As,long ≈ 0, split 0.0035·b·d = {:.0} equally", combined_min),
        )
    };

    let mut note = combined_note;
    if short < per_direction_min || long < per_direction_min {
        note.push_str(&format!(" | ρmin·b·d = {:.0} governs", per_direction_min));
    }

    TwoWayMinimum {
        short_mm2_per_m: short.max(per_direction_min),
        long_mm2_per_m: long.max(per_direction_min),
        note,
    }
}

fn top_steel(
    ctx: &SectionContext<'_>,
    negative: Option<&MomentDesign>,
    limits: &SpacingLimits,
) -> (f64, Selection<BarChoice>) {
    let Some(neg) = negative.filter(|n| !n.is_zero()) else {
        return (0.0, Selection::NotRequired);
    };
    let required = neg
        .as_from_moment_mm2_per_m
        .max(ctx.area_on_effective_depth(RHO_MIN_TOP));
    let selection = choose_single_layer(
        ctx.grid,
        required,
        limits.max_mm,
        limits.min_mm,
        limits.min_diameter_mm,
    );
    (required, selection)
}

fn main_bottom(
    ctx: &SectionContext<'_>,
    required: f64,
    limits: &SpacingLimits,
) -> BottomReinforcement {
    BottomReinforcement::Main(choose_main_layout_half_half(
        ctx.grid,
        required,
        limits.max_mm,
        limits.min_mm,
        limits.min_diameter_mm,
    ))
}

fn log_direction(design: &DirectionDesign) {
    debug!(
        direction = %design.direction,
        m_pos = design.positive.moment_knm_per_m,
        as_bottom = design.bottom_required_mm2_per_m,
        as_top = design.top_required_mm2_per_m,
        bottom = %design.bottom,
        top = %design.top,
        "direction designed"
    );
    if design.has_unresolved() {
        warn!(
            direction = %design.direction,
            "no catalog bar satisfies the requirement within spacing limits"
        );
    }
}

/// A strip to design: its direction and net span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strip {
    /// Direction of the strip
    pub direction: Direction,
    /// Net span (m)
    pub net_span_m: f64,
}

/// One-way slab: `main` carries the moment, `transverse` gets distribution bars.
///
/// Returns `(main, transverse)` designs.
pub fn design_one_way(
    ctx: &SectionContext<'_>,
    pd_kn_m2: f64,
    main: Strip,
    transverse: Strip,
    condition: OneWayCondition,
    edge_note: &str,
) -> (DirectionDesign, DirectionDesign) {
    let bottom_limits = SpacingLimits::bottom(ctx.thickness_mm);
    let top_limits = SpacingLimits::top(ctx.thickness_mm);

    let positive = ctx.moment_design(condition.positive(), pd_kn_m2, main.net_span_m);
    let negative = (condition.negative() > 0.0)
        .then(|| ctx.moment_design(condition.negative(), pd_kn_m2, main.net_span_m));

    let as_min = ctx.area_on_effective_depth(ctx.steel.rho_min_one_way());
    let as_moment = positive.as_from_moment_mm2_per_m;
    let (main_required, minimum_note) = if as_moment < as_min {
        (
            as_min,
            format!(
                "As(M) = {:.0} < Asmin = {:.0} (ρmin = {}), Asmin used",
                as_moment,
                as_min,
                ctx.steel.rho_min_one_way()
            ),
        )
    } else {
        (as_moment, format!("As(M) = {:.0} ≥ Asmin = {:.0}", as_moment, as_min))
    };

    let (top_required, top) = top_steel(ctx, negative.as_ref(), &top_limits);
    let main_design = DirectionDesign {
        direction: main.direction,
        net_span_m: main.net_span_m,
        positive,
        negative,
        bottom_required_mm2_per_m: main_required,
        bottom: main_bottom(ctx, main_required, &bottom_limits),
        top_required_mm2_per_m: top_required,
        top,
        minimum_note,
        bottom_limits,
        top_limits,
        edge_note: format!("One-way, {}. {}", condition.display_name(), edge_note),
    };

    let dist_from_main = DISTRIBUTION_MAIN_FRACTION * main_required;
    let dist_from_gross = ctx.area_on_gross_section(RHO_DISTRIBUTION_GROSS);
    let dist_required = dist_from_main.max(dist_from_gross);
    let transverse_design = DirectionDesign {
        direction: transverse.direction,
        net_span_m: transverse.net_span_m,
        positive: MomentDesign::default(),
        negative: None,
        bottom_required_mm2_per_m: dist_required,
        bottom: BottomReinforcement::Distribution(choose_distribution_bars(ctx.grid, dist_required)),
        top_required_mm2_per_m: 0.0,
        top: Selection::NotRequired,
        minimum_note: format!(
            "Distribution: max(0.2·As = {:.0}, 0.0012·b·h = {:.0}) = {:.0}",
            dist_from_main, dist_from_gross, dist_required
        ),
        bottom_limits: SpacingLimits::distribution(),
        top_limits,
        edge_note: format!("One-way, transverse direction. {}", edge_note),
    };

    log_direction(&main_design);
    log_direction(&transverse_design);
    (main_design, transverse_design)
}

/// Two-way slab: both directions use `coefficient · pd · ln_short²`.
///
/// `short` takes the aspect-ratio dependent coefficients at `m`, `long` the
/// constant ones. Returns `(short, long)` designs.
pub fn design_two_way(
    ctx: &SectionContext<'_>,
    pd_kn_m2: f64,
    short: Strip,
    long: Strip,
    coefficients: &TwoWayCoefficients,
    m: f64,
    edge_note: &str,
) -> (DirectionDesign, DirectionDesign) {
    let bottom_limits = SpacingLimits::bottom(ctx.thickness_mm);
    let top_limits = SpacingLimits::top(ctx.thickness_mm);
    let reference_span = short.net_span_m;

    let short_pos = ctx.moment_design(coefficients.short_positive_at(m), pd_kn_m2, reference_span);
    let long_pos = ctx.moment_design(coefficients.long_positive, pd_kn_m2, reference_span);

    let short_neg_coef = coefficients.short_negative_at(m);
    let short_neg =
        (short_neg_coef > 0.0).then(|| ctx.moment_design(short_neg_coef, pd_kn_m2, reference_span));
    let long_neg = (coefficients.long_negative > 0.0)
        .then(|| ctx.moment_design(coefficients.long_negative, pd_kn_m2, reference_span));

    let minimum = apply_two_way_minimums(
        short_pos.as_from_moment_mm2_per_m,
        long_pos.as_from_moment_mm2_per_m,
        ctx.area_on_effective_depth(ctx.steel.rho_min_one_way()),
        ctx.area_on_effective_depth(RHO_MIN_COMBINED_TWO_WAY),
    );

    let build = |strip: Strip, positive: MomentDesign, negative: Option<MomentDesign>, required: f64| {
        let (top_required, top) = top_steel(ctx, negative.as_ref(), &top_limits);
        DirectionDesign {
            direction: strip.direction,
            net_span_m: strip.net_span_m,
            positive,
            negative,
            bottom_required_mm2_per_m: required,
            bottom: main_bottom(ctx, required, &bottom_limits),
            top_required_mm2_per_m: top_required,
            top,
            minimum_note: minimum.note.clone(),
            bottom_limits,
            top_limits,
            edge_note: edge_note.to_string(),
        }
    };

    let short_design = build(short, short_pos, short_neg, minimum.short_mm2_per_m);
    let long_design = build(long, long_pos, long_neg, minimum.long_mm2_per_m);

    log_direction(&short_design);
    log_direction(&long_design);
    (short_design, long_design)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moment_coefficients::SupportCase;

    struct Fixture {
        concrete: ConcreteGrade,
        steel: SteelGrade,
    }

    impl Fixture {
        fn new(steel: &str) -> Self {
            Fixture {
                concrete: ConcreteGrade::parse("C30").unwrap(),
                steel: SteelGrade::parse(steel).unwrap(),
            }
        }

        fn ctx(&self, thickness_mm: f64, d_m: f64) -> SectionContext<'_> {
            SectionContext {
                grid: AreaGrid::standard(),
                chart: DesignChart::standard(),
                concrete: &self.concrete,
                steel: &self.steel,
                thickness_mm,
                effective_depth_m: d_m,
            }
        }
    }

    fn strip(direction: Direction, net_span_m: f64) -> Strip {
        Strip { direction, net_span_m }
    }

    #[test]
    fn test_spacing_limits() {
        let bottom = SpacingLimits::bottom(120.0);
        assert!((bottom.max_mm - 180.0).abs() < 1e-9);
        let top = SpacingLimits::top(120.0);
        assert!((top.max_mm - 200.0).abs() < 1e-9);
        assert!((SpacingLimits::bottom(150.0).max_mm - 200.0).abs() < 1e-9);
        assert_eq!(SpacingLimits::distribution().min_diameter_mm, 6);
    }

    #[test]
    fn test_two_way_minimum_rescale() {
        // sum 200 < 350 → ×1.75
        let min = apply_two_way_minimums(150.0, 50.0, 100.0, 350.0);
        assert!((min.short_mm2_per_m - 262.5).abs() < 1e-9);
        assert!((min.long_mm2_per_m - 100.0).abs() < 1e-9);
        assert!(min.note.contains("scaled"));
    }

    #[test]
    fn test_two_way_minimum_zero_sum() {
        let min = apply_two_way_minimums(0.0, 0.0, 100.0, 350.0);
        assert!((min.short_mm2_per_m - 175.0).abs() < 1e-9);
        assert!((min.long_mm2_per_m - 175.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_way_minimum_not_governing() {
        let min = apply_two_way_minimums(400.0, 300.0, 200.0, 350.0);
        assert!((min.short_mm2_per_m - 400.0).abs() < 1e-9);
        assert!((min.long_mm2_per_m - 300.0).abs() < 1e-9);
        assert!(!min.note.contains("governs"));
    }

    #[test]
    fn test_one_way_simple_span() {
        let fx = Fixture::new("S420");
        let ctx = fx.ctx(200.0, 0.18);
        let (main, dist) = design_one_way(
            &ctx,
            14.3,
            strip(Direction::Y, 6.0),
            strip(Direction::X, 2.5),
            OneWayCondition::SimpleSpan,
            "",
        );

        // M = 14.3 × 36 / 8
        assert!((main.positive.moment_knm_per_m - 64.35).abs() < 1e-9);
        assert!(main.negative.is_none());
        assert_eq!(main.top, Selection::NotRequired);
        assert!(main.bottom_required_mm2_per_m >= 0.002 * 1000.0 * 180.0);
        match &main.bottom {
            BottomReinforcement::Main(Selection::Chosen(layout)) => {
                assert_eq!(layout.straight.diameter_mm, layout.bent.diameter_mm);
                assert!(layout.total_provided_mm2_per_m >= main.bottom_required_mm2_per_m * (1.0 - 1e-9));
            }
            other => panic!("expected main layout, got {:?}", other),
        }

        assert_eq!(dist.direction, Direction::X);
        assert!(dist.positive.is_zero());
        let expected = (0.2 * main.bottom_required_mm2_per_m).max(0.0012 * 1000.0 * 200.0);
        assert!((dist.bottom_required_mm2_per_m - expected).abs() < 1e-9);
        assert!(matches!(dist.bottom, BottomReinforcement::Distribution(Selection::Chosen(_))));
    }

    #[test]
    fn test_one_way_minimum_governs() {
        let fx = Fixture::new("S220");
        let ctx = fx.ctx(120.0, 0.10);
        let (main, _) = design_one_way(
            &ctx,
            1.0,
            strip(Direction::X, 3.0),
            strip(Direction::Y, 1.2),
            OneWayCondition::SimpleSpan,
            "",
        );
        // ρmin = 0.003 for S220 → 300 mm²/m
        assert!((main.bottom_required_mm2_per_m - 300.0).abs() < 1e-9);
        assert!(main.minimum_note.contains("Asmin used"));
    }

    #[test]
    fn test_one_way_continuous_has_top_steel() {
        let fx = Fixture::new("S420");
        let ctx = fx.ctx(150.0, 0.13);
        let (main, _) = design_one_way(
            &ctx,
            10.0,
            strip(Direction::X, 5.0),
            strip(Direction::Y, 2.0),
            OneWayCondition::BothEndsContinuous,
            "",
        );
        let neg = main.negative.unwrap();
        assert!((neg.moment_knm_per_m - 10.0 * 25.0 / 11.0).abs() < 1e-9);
        assert!(main.top_required_mm2_per_m >= 0.002 * 1000.0 * 130.0 - 1e-9);
        assert!(main.top.chosen().is_some());
    }

    #[test]
    fn test_two_way_all_discontinuous() {
        let fx = Fixture::new("S420");
        let ctx = fx.ctx(120.0, 0.10);
        let coefficients = SupportCase::AllDiscontinuous.two_way();
        let (short, long) = design_two_way(
            &ctx,
            10.0,
            strip(Direction::X, 4.0),
            strip(Direction::Y, 5.0),
            coefficients,
            1.25,
            "",
        );

        // No continuous edge: no negative moment, no top steel
        assert!(short.negative.is_none());
        assert!(long.negative.is_none());
        assert_eq!(short.top, Selection::NotRequired);
        assert_eq!(long.top, Selection::NotRequired);

        // Both directions use the short span
        let base = 10.0 * 16.0;
        assert!((long.positive.moment_knm_per_m - coefficients.long_positive * base).abs() < 1e-9);
        assert!(short.positive.moment_knm_per_m > long.positive.moment_knm_per_m);

        let as_min = 0.002 * 1000.0 * 100.0;
        assert!(short.bottom_required_mm2_per_m >= as_min - 1e-9);
        assert!(long.bottom_required_mm2_per_m >= as_min - 1e-9);
        assert!(
            short.bottom_required_mm2_per_m + long.bottom_required_mm2_per_m
                >= 0.0035 * 1000.0 * 100.0 - 1e-9
        );
    }

    #[test]
    fn test_two_way_continuous_top_floor() {
        let fx = Fixture::new("B500C");
        let ctx = fx.ctx(140.0, 0.12);
        let coefficients = SupportCase::AllContinuous.two_way();
        let (short, long) = design_two_way(
            &ctx,
            12.0,
            strip(Direction::Y, 4.5),
            strip(Direction::X, 5.4),
            coefficients,
            1.2,
            "",
        );
        for design in [&short, &long] {
            assert!(design.negative.is_some());
            assert!(design.top_required_mm2_per_m >= 0.002 * 1000.0 * 120.0 - 1e-9);
            assert!(design.top.chosen().is_some());
            assert!(!design.has_unresolved());
        }
    }
}
