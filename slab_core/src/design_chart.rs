//! # Flexural Design Chart (K – ks)
//!
//! Converts a bending moment on a 1 m wide strip into the required tension
//! steel using the classic tabulated K/ks chart.
//!
//! - `K = b·d² / M` (reported ×10⁵, in m²/kN) measures how lightly the
//!   section is loaded: large K means low flexural demand.
//! - `ks = As·d / M` (×10³, with As in mm², d in mm, M in N·mm) is read from
//!   the chart and gives `As = ks/1000 · M/d`.
//!
//! Each chart row corresponds to one compression-block depth ratio a/d of the
//! rectangular stress block. K depends on the concrete grade, ks only on the
//! steel group:
//!
//! ```text
//! K  = 10⁵ / (0.85·fcd·α·(1 − α/2))      fcd in kN/m²
//! ks = 1000 / (fyd·(1 − α/2))             fyd in MPa
//! ```
//!
//! ## Example
//!
//! ```rust
//! use slab_core::design_chart::flexural_demand;
//! use slab_core::materials::{ConcreteGrade, SteelGrade};
//!
//! let concrete = ConcreteGrade::parse("C30").unwrap();
//! let steel = SteelGrade::parse("S420").unwrap();
//!
//! // 20 kNm/m on d = 100 mm
//! let demand = flexural_demand(20.0, 0.100, &concrete, &steel);
//! assert!((demand.k_x1e5 - 50.0).abs() < 1e-9);
//! assert!(demand.as_mm2_per_m > 550.0 && demand.as_mm2_per_m < 620.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::interpolate::lerp;
use crate::materials::{ConcreteGrade, SteelGrade, SteelGroup};
use crate::units::{KnmPerM, Meters, Millimeters, NmmPerM};

/// Moments at or below this magnitude (kNm/m) are treated as zero
pub const ZERO_MOMENT_TOL: f64 = 1e-12;

/// Strip width used for all per-metre quantities (mm)
pub const STRIP_WIDTH_MM: f64 = 1000.0;

/// Concrete grades (fck, MPa) that have a K column in the chart
pub const CHART_GRADES_MPA: [f64; 6] = [25.0, 30.0, 35.0, 40.0, 45.0, 50.0];

/// One row of the design chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignChartRow {
    /// Compression-block depth ratio a/d that defines the row
    pub depth_ratio: f64,

    /// K ×10⁵ (m²/kN) for each grade in [`CHART_GRADES_MPA`]
    pub k_by_grade: [f64; 6],

    /// ks for the S420 group
    pub ks_s420: f64,

    /// ks for the B500 group
    pub ks_b500: f64,
}

impl DesignChartRow {
    /// ks column for a steel group
    pub fn ks(&self, group: SteelGroup) -> f64 {
        match group {
            SteelGroup::S420 => self.ks_s420,
            SteelGroup::B500 => self.ks_b500,
        }
    }

    /// K at an arbitrary concrete grade, linear between tabulated grades and
    /// clamped to the C25/C50 columns outside that range.
    pub fn k_at_grade(&self, fck_mpa: f64) -> f64 {
        let first = CHART_GRADES_MPA[0];
        let last = CHART_GRADES_MPA[CHART_GRADES_MPA.len() - 1];
        if fck_mpa <= first {
            return self.k_by_grade[0];
        }
        if fck_mpa >= last {
            return self.k_by_grade[self.k_by_grade.len() - 1];
        }

        let hi = CHART_GRADES_MPA
            .iter()
            .position(|&g| g >= fck_mpa)
            .unwrap_or(CHART_GRADES_MPA.len() - 1);
        let lo = hi - 1;
        let (f1, f2) = (CHART_GRADES_MPA[lo], CHART_GRADES_MPA[hi]);
        lerp(self.k_by_grade[lo], self.k_by_grade[hi], (fck_mpa - f1) / (f2 - f1))
    }
}

const fn row(depth_ratio: f64, k_by_grade: [f64; 6], ks_s420: f64, ks_b500: f64) -> DesignChartRow {
    DesignChartRow { depth_ratio, k_by_grade, ks_s420, ks_b500 }
}

/// Chart rows in descending K (ascending a/d and ks).
pub const DESIGN_CHART_ROWS: [DesignChartRow; 20] = [
    row(0.01, [709.4, 591.2, 506.7, 443.4, 394.1, 354.7], 2.752, 2.312),
    row(0.02, [356.5, 297.1, 254.6, 222.8, 198.1, 178.3], 2.766, 2.323),
    row(0.03, [238.9, 199.1, 170.6, 149.3, 132.7, 119.4], 2.780, 2.335),
    row(0.04, [180.1, 150.1, 128.6, 112.5, 100.0, 90.0], 2.794, 2.347),
    row(0.05, [144.8, 120.7, 103.4, 90.5, 80.4, 72.4], 2.808, 2.359),
    row(0.06, [121.3, 101.1, 86.6, 75.8, 67.4, 60.6], 2.823, 2.371),
    row(0.07, [104.5, 87.1, 74.6, 65.3, 58.1, 52.2], 2.837, 2.383),
    row(0.08, [91.9, 76.6, 65.7, 57.4, 51.1, 46.0], 2.852, 2.396),
    row(0.09, [82.1, 68.4, 58.7, 51.3, 45.6, 41.1], 2.867, 2.408),
    row(0.10, [74.3, 61.9, 53.1, 46.4, 41.3, 37.2], 2.882, 2.421),
    row(0.12, [62.6, 52.1, 44.7, 39.1, 34.8, 31.3], 2.913, 2.447),
    row(0.14, [54.2, 45.2, 38.7, 33.9, 30.1, 27.1], 2.944, 2.473),
    row(0.16, [48.0, 40.0, 34.3, 30.0, 26.6, 24.0], 2.976, 2.500),
    row(0.18, [43.1, 35.9, 30.8, 26.9, 23.9, 21.5], 3.009, 2.527),
    row(0.20, [39.2, 32.7, 28.0, 24.5, 21.8, 19.6], 3.042, 2.556),
    row(0.22, [36.1, 30.0, 25.8, 22.5, 20.0, 18.0], 3.077, 2.584),
    row(0.24, [33.4, 27.9, 23.9, 20.9, 18.6, 16.7], 3.111, 2.614),
    row(0.26, [31.2, 26.0, 22.3, 19.5, 17.3, 15.6], 3.147, 2.644),
    row(0.28, [29.3, 24.4, 20.9, 18.3, 16.3, 14.7], 3.184, 2.674),
    row(0.30, [27.7, 23.1, 19.8, 17.3, 15.4, 13.8], 3.221, 2.706),
];

static STANDARD_CHART: Lazy<DesignChart> = Lazy::new(|| DesignChart::new(DESIGN_CHART_ROWS.to_vec()));

/// The K/ks design chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignChart {
    rows: Vec<DesignChartRow>,
}

impl DesignChart {
    /// Wrap a set of rows (must be in descending K order).
    pub fn new(rows: Vec<DesignChartRow>) -> Self {
        DesignChart { rows }
    }

    /// The process-wide standard chart.
    pub fn standard() -> &'static DesignChart {
        &STANDARD_CHART
    }

    /// Chart rows
    pub fn rows(&self) -> &[DesignChartRow] {
        &self.rows
    }

    /// Read ks for a flexural parameter `k_x1e5` at concrete strength
    /// `fck_mpa` for a steel group.
    ///
    /// K beyond the lightly-loaded end of the chart returns the first row's
    /// ks; K beyond the heavily-loaded end returns the last row's ks.
    pub fn ks(&self, k_x1e5: f64, fck_mpa: f64, group: SteelGroup) -> f64 {
        let (first, last) = match (self.rows.first(), self.rows.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return 0.0,
        };

        let k_values: Vec<f64> = self.rows.iter().map(|r| r.k_at_grade(fck_mpa)).collect();
        let k_first = k_values[0];
        let k_last = k_values[k_values.len() - 1];

        if k_x1e5 >= k_first {
            return first.ks(group);
        }
        if k_x1e5 <= k_last {
            return last.ks(group);
        }

        // First row whose K has dropped to or below the input.
        let i2 = k_values
            .iter()
            .position(|&k| k <= k_x1e5)
            .unwrap_or(k_values.len() - 1);
        let i1 = i2 - 1;
        let (k1, k2) = (k_values[i1], k_values[i2]);
        let t = (k_x1e5 - k1) / (k2 - k1);
        lerp(self.rows[i1].ks(group), self.rows[i2].ks(group), t)
    }
}

/// Chart quantities for one moment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlexuralDemand {
    /// K ×10⁵ (m²/kN); 0 when the moment is zero
    pub k_x1e5: f64,

    /// Reinforcement coefficient read from the chart; 0 when the moment is zero
    pub ks: f64,

    /// Required tension steel (mm²/m)
    pub as_mm2_per_m: f64,
}

/// Steel demand of a moment on a 1 m strip using the standard chart.
///
/// The sign of the moment is ignored. A (near) zero moment bypasses the
/// chart and yields all zeros.
pub fn flexural_demand(
    moment_knm_per_m: f64,
    d_m: f64,
    concrete: &ConcreteGrade,
    steel: &SteelGrade,
) -> FlexuralDemand {
    flexural_demand_with(DesignChart::standard(), moment_knm_per_m, d_m, concrete, steel)
}

/// [`flexural_demand`] against an explicit chart.
pub fn flexural_demand_with(
    chart: &DesignChart,
    moment_knm_per_m: f64,
    d_m: f64,
    concrete: &ConcreteGrade,
    steel: &SteelGrade,
) -> FlexuralDemand {
    if moment_knm_per_m.abs() <= ZERO_MOMENT_TOL {
        return FlexuralDemand::default();
    }

    let d_mm: Millimeters = Meters(d_m).into();
    let m_nmm: NmmPerM = KnmPerM(moment_knm_per_m.abs()).into();

    let k_x1e5 = (STRIP_WIDTH_MM * d_mm.0.powi(2) / m_nmm.0) * 1e2;
    let ks = chart.ks(k_x1e5, concrete.fck_mpa, steel.group());
    let as_mm2_per_m = (ks / 1000.0) * (m_nmm.0 / d_mm.0);

    FlexuralDemand { k_x1e5, ks, as_mm2_per_m }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c30() -> ConcreteGrade {
        ConcreteGrade::parse("C30").unwrap()
    }

    fn s420() -> SteelGrade {
        SteelGrade::parse("S420").unwrap()
    }

    #[test]
    fn test_rows_strictly_monotonic() {
        let rows = DesignChart::standard().rows();
        for pair in rows.windows(2) {
            assert!(pair[1].depth_ratio > pair[0].depth_ratio);
            assert!(pair[1].ks_s420 > pair[0].ks_s420);
            assert!(pair[1].ks_b500 > pair[0].ks_b500);
            for g in 0..CHART_GRADES_MPA.len() {
                assert!(pair[1].k_by_grade[g] < pair[0].k_by_grade[g]);
            }
        }
        for r in rows {
            for pair in r.k_by_grade.windows(2) {
                assert!(pair[1] < pair[0], "K must fall with grade in row {}", r.depth_ratio);
            }
        }
    }

    #[test]
    fn test_rows_match_stress_block() {
        // Printed to 0.1 (K) and 0.001 (ks)
        let steels = [
            (SteelGrade::parse("S420").unwrap(), SteelGroup::S420),
            (SteelGrade::parse("B500C").unwrap(), SteelGroup::B500),
        ];
        for r in DESIGN_CHART_ROWS.iter() {
            let a = r.depth_ratio;
            let lever = 1.0 - a / 2.0;
            for (g, &fck) in CHART_GRADES_MPA.iter().enumerate() {
                let concrete = ConcreteGrade::parse(&format!("C{:.0}", fck)).unwrap();
                let fcd_kn_m2 = concrete.fcd_mpa() * 1000.0;
                let k = 1e5 / (0.85 * fcd_kn_m2 * a * lever);
                assert!(
                    (r.k_by_grade[g] - k).abs() <= 0.05 + 1e-6,
                    "K at a/d {} C{}: table {} formula {:.3}",
                    a,
                    fck,
                    r.k_by_grade[g],
                    k
                );
            }
            for (steel, group) in &steels {
                assert_eq!(steel.group(), *group);
                let ks = 1000.0 / (steel.fyd_mpa() * lever);
                assert!(
                    (r.ks(*group) - ks).abs() <= 0.0005 + 1e-7,
                    "ks at a/d {} {:?}: table {} formula {:.4}",
                    a,
                    group,
                    r.ks(*group),
                    ks
                );
            }
        }
    }

    #[test]
    fn test_grade_interpolation_and_clamping() {
        let r = DESIGN_CHART_ROWS[4];
        assert_eq!(r.k_at_grade(20.0), r.k_by_grade[0]);
        assert_eq!(r.k_at_grade(25.0), r.k_by_grade[0]);
        assert_eq!(r.k_at_grade(60.0), r.k_by_grade[5]);
        assert!((r.k_at_grade(30.0) - r.k_by_grade[1]).abs() < 1e-12);
        let mid = r.k_at_grade(32.5);
        assert!((mid - (r.k_by_grade[1] + r.k_by_grade[2]) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_ks_clamps_at_ends() {
        let chart = DesignChart::standard();
        let first = DESIGN_CHART_ROWS[0];
        let last = DESIGN_CHART_ROWS[DESIGN_CHART_ROWS.len() - 1];
        assert_eq!(chart.ks(5000.0, 30.0, SteelGroup::S420), first.ks_s420);
        assert_eq!(chart.ks(5000.0, 30.0, SteelGroup::B500), first.ks_b500);
        assert_eq!(chart.ks(1.0, 30.0, SteelGroup::S420), last.ks_s420);
    }

    #[test]
    fn test_ks_reproduces_row_values() {
        let chart = DesignChart::standard();
        for r in DESIGN_CHART_ROWS.iter() {
            let ks = chart.ks(r.k_by_grade[1], 30.0, SteelGroup::S420);
            assert!((ks - r.ks_s420).abs() < 1e-9, "row {}", r.depth_ratio);
        }
    }

    #[test]
    fn test_ks_monotonic_sweep() {
        // Rising demand (falling K) never lowers ks.
        let chart = DesignChart::standard();
        for fck in [25.0, 30.0, 32.0, 40.0, 50.0] {
            for group in [SteelGroup::S420, SteelGroup::B500] {
                let mut previous = f64::NEG_INFINITY;
                let mut k = 800.0;
                while k > 10.0 {
                    let ks = chart.ks(k, fck, group);
                    assert!(ks >= previous - 1e-12, "fck {} K {}", fck, k);
                    previous = ks;
                    k -= 0.5;
                }
            }
        }
    }

    #[test]
    fn test_b500_needs_less_steel() {
        let b500 = SteelGrade::parse("B500C").unwrap();
        let a = flexural_demand(15.0, 0.12, &c30(), &s420());
        let b = flexural_demand(15.0, 0.12, &c30(), &b500);
        assert!(b.as_mm2_per_m < a.as_mm2_per_m);
        assert_eq!(a.k_x1e5, b.k_x1e5);
    }

    #[test]
    fn test_zero_moment_bypasses_chart() {
        let demand = flexural_demand(0.0, 0.1, &c30(), &s420());
        assert_eq!(demand, FlexuralDemand::default());
        let tiny = flexural_demand(1e-14, 0.1, &c30(), &s420());
        assert_eq!(tiny.as_mm2_per_m, 0.0);
    }

    #[test]
    fn test_positive_moment() {
        // M = 20 kNm/m, d = 0.1 m, C30, S420
        let demand = flexural_demand(20.0, 0.1, &c30(), &s420());
        assert!((demand.k_x1e5 - 50.0).abs() < 1e-9);
        assert!(demand.ks > 2.9 && demand.ks < 2.95);
        let expected = demand.ks / 1000.0 * 20e6 / 100.0;
        assert!((demand.as_mm2_per_m - expected).abs() < 1e-9);
    }

    #[test]
    fn test_negative_moment_uses_magnitude() {
        let pos = flexural_demand(12.0, 0.13, &c30(), &s420());
        let neg = flexural_demand(-12.0, 0.13, &c30(), &s420());
        assert_eq!(pos, neg);
    }
}
