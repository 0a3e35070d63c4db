//! # Slab Moment Coefficients (TS500 Table 11.1 style)
//!
//! Two-way panels are designed with tabulated moment coefficients α:
//! `M = α · pd · ℓs²`, where ℓs is the short net span. Coefficients depend
//! on the support case (which panel edges are continuous) and, for the
//! short direction, on the aspect ratio m = ℓlong / ℓshort.
//!
//! One-way strips use the classic span coefficients 1/8, 1/11 and 1/16.
//!
//! ## Support cases
//!
//! | Case | Description |
//! |------|-------------|
//! | 1 | All four edges continuous |
//! | 2 | One edge discontinuous |
//! | 3 | Two adjacent edges discontinuous |
//! | 4 | Two short edges discontinuous |
//! | 5 | Two long edges discontinuous |
//! | 6 | Three edges discontinuous |
//! | 7 | All four edges discontinuous |
//!
//! The table does not say *which* edge is discontinuous for cases 2, 3 and
//! 6. We assume: case 2 loses one long edge; case 3 loses one long and one
//! short edge; case 6 keeps only one long edge continuous.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::interpolate::interp_clamped;

/// Aspect ratios at which the short-direction coefficients are tabulated
pub const ASPECT_BREAKPOINTS: [f64; 8] = [1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.75, 2.0];

/// Aspect ratio above which a panel acts one-way
pub const ONE_WAY_ASPECT_LIMIT: f64 = 2.0;

/// Coefficients of one support case for two-way action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoWayCoefficients {
    /// Short direction, midspan, at each breakpoint
    pub short_positive: [f64; 8],
    /// Short direction, continuous edge; `None` when both long edges are discontinuous
    pub short_negative: Option<[f64; 8]>,
    /// Long direction, midspan
    pub long_positive: f64,
    /// Long direction, continuous edge (0 when both short edges are discontinuous)
    pub long_negative: f64,
}

impl TwoWayCoefficients {
    /// Short-direction positive coefficient at aspect ratio `m`
    pub fn short_positive_at(&self, m: f64) -> f64 {
        interp_clamped(&breakpoints(&self.short_positive), m)
    }

    /// Short-direction negative coefficient at aspect ratio `m` (0 if none)
    pub fn short_negative_at(&self, m: f64) -> f64 {
        self.short_negative
            .map(|vals| interp_clamped(&breakpoints(&vals), m))
            .unwrap_or(0.0)
    }
}

fn breakpoints(values: &[f64; 8]) -> [(f64, f64); 8] {
    std::array::from_fn(|i| (ASPECT_BREAKPOINTS[i], values[i]))
}

const CASE_1: TwoWayCoefficients = TwoWayCoefficients {
    short_positive: [0.025, 0.030, 0.034, 0.038, 0.041, 0.045, 0.053, 0.062],
    short_negative: Some([0.033, 0.040, 0.045, 0.050, 0.054, 0.059, 0.071, 0.083]),
    long_positive: 0.025,
    long_negative: 0.033,
};

const CASE_2: TwoWayCoefficients = TwoWayCoefficients {
    short_positive: [0.031, 0.035, 0.040, 0.043, 0.046, 0.049, 0.056, 0.064],
    short_negative: Some([0.042, 0.047, 0.053, 0.057, 0.061, 0.065, 0.075, 0.085]),
    long_positive: 0.031,
    long_negative: 0.042,
};

const CASE_3: TwoWayCoefficients = TwoWayCoefficients {
    short_positive: [0.037, 0.042, 0.047, 0.050, 0.053, 0.055, 0.062, 0.068],
    short_negative: Some([0.049, 0.056, 0.062, 0.066, 0.070, 0.073, 0.082, 0.090]),
    long_positive: 0.037,
    long_negative: 0.049,
};

const CASE_4: TwoWayCoefficients = TwoWayCoefficients {
    short_positive: [0.044, 0.046, 0.049, 0.051, 0.053, 0.055, 0.058, 0.060],
    short_negative: Some([0.056, 0.061, 0.065, 0.069, 0.071, 0.073, 0.077, 0.080]),
    long_positive: 0.044,
    long_negative: 0.0,
};

const CASE_5: TwoWayCoefficients = TwoWayCoefficients {
    short_positive: [0.044, 0.053, 0.060, 0.065, 0.068, 0.071, 0.077, 0.080],
    short_negative: None,
    long_positive: 0.044,
    long_negative: 0.056,
};

const CASE_6: TwoWayCoefficients = TwoWayCoefficients {
    short_positive: [0.044, 0.049, 0.054, 0.058, 0.061, 0.064, 0.069, 0.074],
    short_negative: Some([0.058, 0.065, 0.071, 0.077, 0.081, 0.085, 0.092, 0.098]),
    long_positive: 0.044,
    long_negative: 0.0,
};

const CASE_7: TwoWayCoefficients = TwoWayCoefficients {
    short_positive: [0.050, 0.057, 0.062, 0.067, 0.071, 0.075, 0.081, 0.085],
    short_negative: None,
    long_positive: 0.050,
    long_negative: 0.0,
};

/// Standardized panel support condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportCase {
    /// 1: all four edges continuous
    AllContinuous,
    /// 2: one edge discontinuous
    OneEdgeDiscontinuous,
    /// 3: two adjacent edges discontinuous
    TwoAdjacentEdgesDiscontinuous,
    /// 4: both short edges discontinuous
    ShortEdgesDiscontinuous,
    /// 5: both long edges discontinuous
    LongEdgesDiscontinuous,
    /// 6: three edges discontinuous
    ThreeEdgesDiscontinuous,
    /// 7: all four edges discontinuous
    AllDiscontinuous,
}

impl SupportCase {
    /// All cases in id order
    pub const ALL: [SupportCase; 7] = [
        SupportCase::AllContinuous,
        SupportCase::OneEdgeDiscontinuous,
        SupportCase::TwoAdjacentEdgesDiscontinuous,
        SupportCase::ShortEdgesDiscontinuous,
        SupportCase::LongEdgesDiscontinuous,
        SupportCase::ThreeEdgesDiscontinuous,
        SupportCase::AllDiscontinuous,
    ];

    /// Look up a case by its table number (1–7).
    pub fn from_id(id: u8) -> CalcResult<Self> {
        match id {
            1..=7 => Ok(Self::ALL[usize::from(id - 1)]),
            _ => Err(CalcError::invalid_input(
                "support_case",
                id.to_string(),
                "Support case must be between 1 and 7",
            )),
        }
    }

    /// Table number (1–7)
    pub fn id(&self) -> u8 {
        match self {
            SupportCase::AllContinuous => 1,
            SupportCase::OneEdgeDiscontinuous => 2,
            SupportCase::TwoAdjacentEdgesDiscontinuous => 3,
            SupportCase::ShortEdgesDiscontinuous => 4,
            SupportCase::LongEdgesDiscontinuous => 5,
            SupportCase::ThreeEdgesDiscontinuous => 6,
            SupportCase::AllDiscontinuous => 7,
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportCase::AllContinuous => "All four edges continuous",
            SupportCase::OneEdgeDiscontinuous => "One edge discontinuous",
            SupportCase::TwoAdjacentEdgesDiscontinuous => "Two adjacent edges discontinuous",
            SupportCase::ShortEdgesDiscontinuous => "Two short edges discontinuous",
            SupportCase::LongEdgesDiscontinuous => "Two long edges discontinuous",
            SupportCase::ThreeEdgesDiscontinuous => "Three edges discontinuous",
            SupportCase::AllDiscontinuous => "All four edges discontinuous",
        }
    }

    /// Two-way coefficient set for this case
    pub fn two_way(&self) -> &'static TwoWayCoefficients {
        match self {
            SupportCase::AllContinuous => &CASE_1,
            SupportCase::OneEdgeDiscontinuous => &CASE_2,
            SupportCase::TwoAdjacentEdgesDiscontinuous => &CASE_3,
            SupportCase::ShortEdgesDiscontinuous => &CASE_4,
            SupportCase::LongEdgesDiscontinuous => &CASE_5,
            SupportCase::ThreeEdgesDiscontinuous => &CASE_6,
            SupportCase::AllDiscontinuous => &CASE_7,
        }
    }

    /// Continuity of (short edges, long edges) under the documented edge
    /// assignment. Index 0 of each pair is the edge at the origin.
    fn edge_flags(&self) -> ([bool; 2], [bool; 2]) {
        match self {
            SupportCase::AllContinuous => ([true, true], [true, true]),
            SupportCase::OneEdgeDiscontinuous => ([true, true], [true, false]),
            SupportCase::TwoAdjacentEdgesDiscontinuous => ([true, false], [true, false]),
            SupportCase::ShortEdgesDiscontinuous => ([false, false], [true, true]),
            SupportCase::LongEdgesDiscontinuous => ([true, true], [false, false]),
            SupportCase::ThreeEdgesDiscontinuous => ([false, false], [true, false]),
            SupportCase::AllDiscontinuous => ([false, false], [false, false]),
        }
    }

    /// One-way coefficient set for a strip spanning between the short edges.
    pub fn one_way(&self) -> OneWayCondition {
        let (short, _) = self.edge_flags();
        match short.iter().filter(|&&c| c).count() {
            2 => OneWayCondition::BothEndsContinuous,
            1 => OneWayCondition::OneEndContinuous,
            _ => OneWayCondition::SimpleSpan,
        }
    }

    /// Edge-by-edge continuity for a panel with net spans `lx` × `ly`.
    pub fn edge_continuity(&self, lx_m: f64, ly_m: f64) -> EdgeContinuity {
        // Short edges have the short span as their length.
        let short_is_x = lx_m <= ly_m;
        let (short_edges, long_edges) = if short_is_x {
            (["y=0", "y=ly"], ["x=0", "x=lx"])
        } else {
            (["x=0", "x=lx"], ["y=0", "y=ly"])
        };
        let (l_short, l_long) = (lx_m.min(ly_m), lx_m.max(ly_m));
        let (short_flags, long_flags) = self.edge_flags();

        let mut continuous = Vec::new();
        let mut discontinuous = Vec::new();
        let mut continuous_length = 0.0;
        let edges = short_edges
            .iter()
            .zip(short_flags)
            .map(|(e, c)| (*e, c, l_short))
            .chain(long_edges.iter().zip(long_flags).map(|(e, c)| (*e, c, l_long)));
        for (edge, is_continuous, length) in edges {
            if is_continuous {
                continuous.push(edge.to_string());
                continuous_length += length;
            } else {
                discontinuous.push(edge.to_string());
            }
        }

        let perimeter = 2.0 * (l_short + l_long);
        let continuous_ratio = if perimeter > 0.0 { continuous_length / perimeter } else { 0.0 };

        EdgeContinuity {
            continuous,
            discontinuous,
            continuous_ratio,
            assumed: matches!(
                self,
                SupportCase::OneEdgeDiscontinuous
                    | SupportCase::TwoAdjacentEdgesDiscontinuous
                    | SupportCase::ThreeEdgesDiscontinuous
            ),
        }
    }
}

impl fmt::Display for SupportCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case {}: {}", self.id(), self.display_name())
    }
}

/// Which panel edges are continuous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeContinuity {
    /// Continuous edges, e.g. `["y=0", "x=0"]`
    pub continuous: Vec<String>,
    /// Discontinuous edges
    pub discontinuous: Vec<String>,
    /// Continuous edge length over perimeter (αs)
    pub continuous_ratio: f64,
    /// True when the edge assignment is an assumption (cases 2, 3, 6)
    pub assumed: bool,
}

impl EdgeContinuity {
    /// One-line description for reports
    pub fn note(&self) -> String {
        let join = |edges: &[String]| {
            if edges.is_empty() {
                "none".to_string()
            } else {
                edges.join(", ")
            }
        };
        let mut note = format!(
            "Continuous edges: {} | Discontinuous edges: {}",
            join(&self.continuous),
            join(&self.discontinuous)
        );
        if self.assumed {
            note.push_str(" (assumed edge assignment for cases 2/3/6)");
        }
        note
    }
}

/// One-way strip end condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OneWayCondition {
    /// Simply supported at both ends
    SimpleSpan,
    /// Continuous over one support
    OneEndContinuous,
    /// Continuous over both supports
    BothEndsContinuous,
}

impl OneWayCondition {
    /// Midspan coefficient
    pub fn positive(&self) -> f64 {
        match self {
            OneWayCondition::SimpleSpan => 1.0 / 8.0,
            OneWayCondition::OneEndContinuous => 1.0 / 11.0,
            OneWayCondition::BothEndsContinuous => 1.0 / 16.0,
        }
    }

    /// Support coefficient (0 for a simple span)
    pub fn negative(&self) -> f64 {
        match self {
            OneWayCondition::SimpleSpan => 0.0,
            OneWayCondition::OneEndContinuous => 1.0 / 9.0,
            OneWayCondition::BothEndsContinuous => 1.0 / 11.0,
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            OneWayCondition::SimpleSpan => "simple span",
            OneWayCondition::OneEndContinuous => "one end continuous",
            OneWayCondition::BothEndsContinuous => "both ends continuous",
        }
    }
}

/// Aspect ratio m = longer / shorter span (≥ 1).
pub fn aspect_ratio(l1_m: f64, l2_m: f64) -> f64 {
    let (short, long) = (l1_m.min(l2_m), l1_m.max(l2_m));
    long / short
}

/// True when a panel with aspect ratio `m` acts one-way (m > 2.0).
pub fn is_one_way(m: f64) -> bool {
    m > ONE_WAY_ASPECT_LIMIT
}
