//! # Unit Types
//!
//! Type-safe wrappers for the SI units used in slab design. These are thin
//! f64 newtypes that serialize as plain numbers.
//!
//! ## Conventions
//!
//! - Spans: metres (m); section dimensions and bar diameters: millimetres (mm)
//! - Bar spacing: centimetres (cm) in the catalog, millimetres for limits
//! - Area loads: kN/m²; moments per unit width: kNm/m
//! - Steel area per unit width: mm²/m (reports also show cm²/m)
//!
//! ## Example
//!
//! ```rust
//! use slab_core::units::{Meters, Millimeters, Mm2PerM, Cm2PerM};
//!
//! let beam = Millimeters(300.0);
//! let m: Meters = beam.into();
//! assert!((m.0 - 0.3).abs() < 1e-12);
//!
//! let area = Mm2PerM(524.0);
//! let cm2: Cm2PerM = area.into();
//! assert!((cm2.0 - 5.24).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Centimeters> for Millimeters {
    fn from(cm: Centimeters) -> Self {
        Millimeters(cm.0 * 10.0)
    }
}

impl From<Millimeters> for Centimeters {
    fn from(mm: Millimeters) -> Self {
        Centimeters(mm.0 / 10.0)
    }
}

// ============================================================================
// Steel Area per Unit Width
// ============================================================================

/// Steel area per metre width in mm²/m
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm2PerM(pub f64);

/// Steel area per metre width in cm²/m
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm2PerM(pub f64);

impl From<Mm2PerM> for Cm2PerM {
    fn from(a: Mm2PerM) -> Self {
        Cm2PerM(a.0 / 100.0)
    }
}

impl From<Cm2PerM> for Mm2PerM {
    fn from(a: Cm2PerM) -> Self {
        Mm2PerM(a.0 * 100.0)
    }
}

// ============================================================================
// Moment per Unit Width
// ============================================================================

/// Bending moment per metre width in kNm/m
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnmPerM(pub f64);

/// Bending moment per metre width in Nmm/m
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NmmPerM(pub f64);

impl From<KnmPerM> for NmmPerM {
    fn from(m: KnmPerM) -> Self {
        NmmPerM(m.0 * 1e6)
    }
}

impl From<NmmPerM> for KnmPerM {
    fn from(m: NmmPerM) -> Self {
        KnmPerM(m.0 / 1e6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        let mm: Millimeters = Meters(4.7).into();
        assert!((mm.0 - 4700.0).abs() < 1e-9);

        let cm: Centimeters = Millimeters(150.0).into();
        assert!((cm.0 - 15.0).abs() < 1e-12);

        let back: Millimeters = Centimeters(7.0).into();
        assert!((back.0 - 70.0).abs() < 1e-12);
    }

    #[test]
    fn test_moment_conversion() {
        let nmm: NmmPerM = KnmPerM(20.0).into();
        assert!((nmm.0 - 20e6).abs() < 1e-6);
        let knm: KnmPerM = nmm.into();
        assert!((knm.0 - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_serialization_is_transparent() {
        let json = serde_json::to_string(&Mm2PerM(418.9)).unwrap();
        assert_eq!(json, "418.9");
    }
}
