//! Reinforcing Steel Grades
//!
//! Labels follow the Turkish/European naming: `S220`, `S420`, `B420C`,
//! `B500C`. The yield strength is read from the digits in the label.
//!
//! Two grade groups matter to the design chart: anything containing "500"
//! uses the B500 coefficient column, everything else the S420 column.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Material factor applied to steel yield strength
pub const GAMMA_S: f64 = 1.15;

/// Coefficient column group in the design chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGroup {
    /// fyk = 420 MPa class (also used for S220 and B420C)
    S420,
    /// fyk = 500 MPa class
    B500,
}

impl SteelGroup {
    /// Select the group from a steel label.
    pub fn from_label(label: &str) -> Self {
        if label.contains("500") {
            SteelGroup::B500
        } else {
            SteelGroup::S420
        }
    }
}

/// A reinforcing steel grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelGrade {
    /// Normalised label (upper case), e.g. "S420"
    pub label: String,

    /// Characteristic yield strength (MPa)
    pub fyk_mpa: f64,
}

impl SteelGrade {
    /// Parse a steel label.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slab_core::materials::{SteelGrade, SteelGroup};
    ///
    /// let b500 = SteelGrade::parse("b500c").unwrap();
    /// assert_eq!(b500.fyk_mpa, 500.0);
    /// assert_eq!(b500.group(), SteelGroup::B500);
    /// assert!(SteelGrade::parse("rebar").is_err());
    /// ```
    pub fn parse(label: &str) -> CalcResult<Self> {
        let upper = label.trim().to_uppercase();
        if !(upper.starts_with('S') || upper.starts_with('B')) {
            return Err(CalcError::material_not_found(label.trim()));
        }

        let digits: String = upper
            .chars()
            .skip(1)
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let fyk_mpa: f64 = digits
            .parse()
            .map_err(|_| CalcError::material_not_found(label.trim()))?;
        if fyk_mpa <= 0.0 {
            return Err(CalcError::material_not_found(label.trim()));
        }

        Ok(SteelGrade { label: upper, fyk_mpa })
    }

    /// Design yield strength fyd = fyk / γs (MPa)
    pub fn fyd_mpa(&self) -> f64 {
        self.fyk_mpa / GAMMA_S
    }

    /// Coefficient column group for the design chart
    pub fn group(&self) -> SteelGroup {
        SteelGroup::from_label(&self.label)
    }

    /// Minimum main reinforcement ratio ρ_min for one-way action.
    ///
    /// Mild steel (S220) needs 0.003; the higher-yield grades 0.002.
    pub fn rho_min_one_way(&self) -> f64 {
        if self.label.contains("220") {
            0.003
        } else {
            0.002
        }
    }
}

impl FromStr for SteelGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SteelGrade::parse(s)
    }
}

impl fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rho_min_one_way() {
        assert_eq!(SteelGrade::parse("S420").unwrap().rho_min_one_way(), 0.002);
        assert_eq!(SteelGrade::parse("S220").unwrap().rho_min_one_way(), 0.003);
        assert_eq!(SteelGrade::parse("B500C").unwrap().rho_min_one_way(), 0.002);
    }

    #[test]
    fn test_groups() {
        assert_eq!(SteelGrade::parse("S420").unwrap().group(), SteelGroup::S420);
        assert_eq!(SteelGrade::parse("S220").unwrap().group(), SteelGroup::S420);
        assert_eq!(SteelGrade::parse("B420C").unwrap().group(), SteelGroup::S420);
        assert_eq!(SteelGrade::parse("B500C").unwrap().group(), SteelGroup::B500);
    }

    #[test]
    fn test_yield_strength() {
        let s420 = SteelGrade::parse(" s420 ").unwrap();
        assert_eq!(s420.label, "S420");
        assert!((s420.fyd_mpa() - 420.0 / 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_labels() {
        assert!(SteelGrade::parse("").is_err());
        assert!(SteelGrade::parse("S").is_err());
        assert!(SteelGrade::parse("Q235").is_err());
    }
}
