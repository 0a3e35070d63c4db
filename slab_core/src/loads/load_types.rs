//! Load type definitions for floor slabs.

use serde::{Deserialize, Serialize};

/// Load categories acting on a slab.
///
/// # Example
/// ```
/// use slab_core::loads::LoadType;
///
/// assert_eq!(LoadType::Dead.code(), "G");
/// assert_eq!(LoadType::Live.description(), "Live load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// G - Permanent load (self-weight, finishes, partitions)
    Dead,
    /// Q - Imposed load (occupancy)
    Live,
}

impl LoadType {
    /// All load types in standard order
    pub const ALL: [LoadType; 2] = [LoadType::Dead, LoadType::Live];

    /// Standard abbreviation used in combination equations
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "G",
            LoadType::Live => "Q",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Dead => "Dead load",
            LoadType::Live => "Live load",
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
