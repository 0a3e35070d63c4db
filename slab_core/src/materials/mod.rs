//! # Materials
//!
//! Material definitions for reinforced-concrete slab design.
//!
//! ## Contents
//!
//! - **Concrete**: grade labels (`C25`..`C50`, intermediate grades allowed)
//! - **Steel**: reinforcing steel labels (`S220`, `S420`, `B500C`, ...)
//! - **Rebar**: the stocked bar diameter/spacing catalog and its area grid
//!
//! ## Example
//!
//! ```rust
//! use slab_core::materials::{ConcreteGrade, SteelGrade};
//!
//! let concrete = ConcreteGrade::parse("C30").unwrap();
//! let steel = SteelGrade::parse("S420").unwrap();
//! println!("fcd = {:.1} MPa, fyd = {:.1} MPa", concrete.fcd_mpa(), steel.fyd_mpa());
//! ```

pub mod concrete;
pub mod rebar;
pub mod steel;

pub use concrete::{ConcreteGrade, MIN_CONCRETE_GRADE};
pub use rebar::{AreaGrid, BAR_DIAMETERS_MM, SPACINGS_CM};
pub use steel::{SteelGrade, SteelGroup};
