//! Concrete Grades (TS500)
//!
//! Concrete is identified by its characteristic cylinder strength label,
//! e.g. `C30`. Intermediate grades such as `C32` are accepted; the design
//! chart interpolates between its tabulated columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Lowest concrete grade accepted for structural slabs (MPa)
pub const MIN_CONCRETE_GRADE: f64 = 25.0;

/// Material factor applied to concrete strength
pub const GAMMA_C: f64 = 1.5;

/// Concrete grade with characteristic strength fck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteGrade {
    /// Characteristic cylinder strength (MPa)
    pub fck_mpa: f64,
}

impl ConcreteGrade {
    /// Parse a label of the form `C<fck>`, optionally followed by a cube
    /// strength (`C30/37`). Case and surrounding whitespace are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slab_core::materials::ConcreteGrade;
    ///
    /// assert_eq!(ConcreteGrade::parse("c35").unwrap().fck_mpa, 35.0);
    /// assert_eq!(ConcreteGrade::parse("C30/37").unwrap().fck_mpa, 30.0);
    /// assert!(ConcreteGrade::parse("C20").is_err());
    /// assert!(ConcreteGrade::parse("30").is_err());
    /// ```
    pub fn parse(label: &str) -> CalcResult<Self> {
        let upper = label.trim().to_uppercase();
        let digits = upper.strip_prefix('C').ok_or_else(|| {
            CalcError::invalid_input("concrete", label, "Concrete grade must look like C30")
        })?;
        let cylinder = digits.split('/').next().unwrap_or_default().trim();

        let fck_mpa: f64 = cylinder.parse().map_err(|_| {
            CalcError::invalid_input("concrete", label, "Concrete grade must look like C30")
        })?;
        if !fck_mpa.is_finite() {
            return Err(CalcError::invalid_input("concrete", label, "Concrete strength must be finite"));
        }
        if fck_mpa < MIN_CONCRETE_GRADE {
            return Err(CalcError::invalid_input(
                "concrete",
                label,
                format!("{} is below the minimum grade C{:.0}", upper, MIN_CONCRETE_GRADE),
            ));
        }

        Ok(ConcreteGrade { fck_mpa })
    }

    /// Design compressive strength fcd = fck / γc (MPa)
    pub fn fcd_mpa(&self) -> f64 {
        self.fck_mpa / GAMMA_C
    }
}

impl FromStr for ConcreteGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConcreteGrade::parse(s)
    }
}

impl fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.fck_mpa)
    }
}
