//! # slab_core - Reinforced-Concrete Slab Design Engine
//!
//! `slab_core` designs beam-supported reinforced-concrete floor slabs with the
//! moment-coefficient method. Given spans, support condition, materials and
//! loads it classifies the panel as one-way or two-way, computes design
//! moments, converts them to steel areas through the K/ks design chart and
//! picks bar diameters and spacings from a discrete catalog.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Shared Tables**: Bar catalog and design chart are built once, read-only
//!
//! ## Quick Start
//!
//! ```rust
//! use slab_core::calculations::slab::{calculate, BeamWidths, SlabInput};
//!
//! let input = SlabInput {
//!     label: "D-101".to_string(),
//!     lx_m: 4.5,
//!     ly_m: 5.5,
//!     beams_x: BeamWidths::uniform(300.0),
//!     beams_y: BeamWidths::uniform(300.0),
//!     thickness_mm: 140.0,
//!     cover_mm: 20.0,
//!     concrete: "C30".to_string(),
//!     steel: "S420".to_string(),
//!     additional_dead_kn_m2: 1.5,
//!     live_kn_m2: 3.5,
//!     support_case: 2,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("{} slab, m = {:.2}", result.slab_type, result.aspect_ratio);
//! println!("X bottom: {}", result.x.bottom);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Slab design, reinforcement rules, bar selection, records
//! - [`design_chart`] - K/ks chart lookup
//! - [`moment_coefficients`] - Support cases and moment coefficient tables
//! - [`materials`] - Concrete and steel grades, bar catalog
//! - [`loads`] - Self weight and load combinations
//! - [`project`] - Project container, metadata, and settings
//! - [`interpolate`] - Piecewise-linear interpolation helpers
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod design_chart;
pub mod errors;
pub mod interpolate;
pub mod loads;
pub mod materials;
pub mod moment_coefficients;
pub mod project;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::slab::{calculate, SlabInput, SlabResult};
pub use errors::{CalcError, CalcResult};
pub use project::{GlobalSettings, Project, ProjectMetadata};
