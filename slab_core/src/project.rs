//! # Project Data Structures
//!
//! The `Project` struct is the root container for a floor's slab panels.
//! Projects serialize as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (design code, defaults for new panels)
//! └── items: HashMap<Uuid, CalculationItem> (all slab panels)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use slab_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! assert_eq!(project.settings.code, "TS500-2000");
//!
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("Jane Engineer"));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::slab::{calculate, BeamWidths, SlabInput, SlabResult};
use crate::calculations::CalculationItem;
use crate::errors::CalcResult;

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Global settings (design code, default materials)
    pub settings: GlobalSettings,

    /// All calculation items, keyed by UUID
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slab_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a calculation item to the project.
    ///
    /// Returns the UUID assigned to the item.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slab_core::project::Project;
    /// use slab_core::calculations::CalculationItem;
    ///
    /// let mut project = Project::new("Engineer", "25-001", "Client");
    /// let slab = project.settings.new_slab("D-1", 4.5, 5.5);
    ///
    /// let id = project.add_item(CalculationItem::Slab(slab));
    /// assert!(project.items.contains_key(&id));
    /// ```
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Get a mutable reference to a calculation item by UUID.
    ///
    /// Marks the project as modified when the item exists.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut CalculationItem> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of items in the project.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Design every slab panel, keyed by item id.
    ///
    /// Stops at the first panel with invalid input.
    pub fn design_all(&self) -> CalcResult<HashMap<Uuid, SlabResult>> {
        self.items
            .iter()
            .map(|(id, item)| match item {
                CalculationItem::Slab(input) => calculate(input).map(|result| (*id, result)),
            })
            .collect()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Design code (e.g., "TS500-2000")
    pub code: String,

    /// Default materials for new panels
    pub default_materials: DefaultMaterials,

    /// Default section and support values for new panels
    pub default_section: DefaultSection,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            code: "TS500-2000".to_string(),
            default_materials: DefaultMaterials::default(),
            default_section: DefaultSection::default(),
        }
    }
}

impl GlobalSettings {
    /// A slab panel prefilled with the project defaults and no loads.
    pub fn new_slab(&self, label: impl Into<String>, lx_m: f64, ly_m: f64) -> SlabInput {
        let section = &self.default_section;
        SlabInput {
            label: label.into(),
            lx_m,
            ly_m,
            beams_x: BeamWidths::uniform(section.beam_width_mm),
            beams_y: BeamWidths::uniform(section.beam_width_mm),
            thickness_mm: section.thickness_mm,
            cover_mm: section.cover_mm,
            concrete: self.default_materials.concrete.clone(),
            steel: self.default_materials.steel.clone(),
            additional_dead_kn_m2: 0.0,
            live_kn_m2: 0.0,
            support_case: section.support_case,
        }
    }
}

/// Default materials for new panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultMaterials {
    /// Concrete grade (e.g., "C30")
    pub concrete: String,

    /// Reinforcing steel grade (e.g., "S420")
    pub steel: String,
}

impl Default for DefaultMaterials {
    fn default() -> Self {
        DefaultMaterials {
            concrete: "C30".to_string(),
            steel: "S420".to_string(),
        }
    }
}

/// Default section values for new panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultSection {
    /// Slab thickness (mm)
    pub thickness_mm: f64,

    /// Concrete cover (mm)
    pub cover_mm: f64,

    /// Supporting beam width (mm)
    pub beam_width_mm: f64,

    /// Support case (1-7)
    pub support_case: u8,
}

impl Default for DefaultSection {
    fn default() -> Self {
        DefaultSection {
            thickness_mm: 120.0,
            cover_mm: 20.0,
            beam_width_mm: 250.0,
            support_case: 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = Project::new("John Doe", "25-001", "Acme Corp");
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.job_id, "25-001");
        assert_eq!(project.meta.client, "Acme Corp");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
    }

    #[test]
    fn test_project_serialization() {
        let project = Project::new("Jane Engineer", "25-042", "Test Client");
        let json = serde_json::to_string_pretty(&project).unwrap();

        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("25-042"));
        assert!(json.contains("TS500-2000"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.engineer, "Jane Engineer");
        assert_eq!(roundtrip.settings, GlobalSettings::default());
    }

    #[test]
    fn test_default_slab() {
        let settings = GlobalSettings::default();
        let slab = settings.new_slab("D-1", 4.0, 5.0);
        assert_eq!(slab.concrete, "C30");
        assert_eq!(slab.steel, "S420");
        assert_eq!(slab.thickness_mm, 120.0);
        assert_eq!(slab.cover_mm, 20.0);
        assert_eq!(slab.beams_x, BeamWidths::uniform(250.0));
        assert!(slab.validate().is_ok());
    }

    #[test]
    fn test_add_remove_item() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        let slab = project.settings.new_slab("D-1", 4.0, 5.0);

        let id = project.add_item(CalculationItem::Slab(slab));
        assert_eq!(project.item_count(), 1);
        assert_eq!(project.get_item(&id).map(|i| i.label()), Some("D-1"));
        assert_eq!(project.get_item(&id).map(|i| i.calc_type()), Some("Slab"));

        let removed = project.remove_item(&id);
        assert!(removed.is_some());
        assert_eq!(project.item_count(), 0);
    }

    #[test]
    fn test_design_all() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        let mut slab = project.settings.new_slab("D-1", 4.0, 5.0);
        slab.additional_dead_kn_m2 = 1.5;
        slab.live_kn_m2 = 2.0;
        let id = project.add_item(CalculationItem::Slab(slab));

        let mut bad = project.settings.new_slab("D-2", 4.0, 5.0);
        bad.concrete = "C16".to_string();
        let results = project.design_all().unwrap();
        assert_eq!(results[&id].label, "D-1");

        project.add_item(CalculationItem::Slab(bad));
        assert!(project.design_all().is_err());
    }
}
