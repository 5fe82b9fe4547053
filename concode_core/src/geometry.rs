//! # Section Geometry Contract
//!
//! What section design needs to know about a cross-section. Reinforcement
//! collections are always present; a section without bars returns an empty
//! slice rather than omitting the collection.
//!
//! [`ReinforcedSection`] is a plain data implementation of [`Section`] for
//! callers that do not bring their own geometry engine.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "C1",
//!   "concrete_area": 160000.0,
//!   "concrete": { "name": "40 MPa Concrete", ... },
//!   "bars": [ { "area": 314.16, "x": 50.0, "y": 50.0, "material": { ... } } ],
//!   "meshed_reinforcement": [],
//!   "units": "Generic"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::materials::{Concrete, SteelBar};
use crate::units::UnitSystem;

/// A reinforcement element whose material has a fracture strain.
pub trait ReinforcementElement {
    /// Ultimate tensile strain of the element's material
    fn ultimate_strain(&self) -> f64;
}

/// Discrete (lumped) reinforcing bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpedBar {
    /// Bar area
    pub area: f64,
    /// Centroid x
    pub x: f64,
    /// Centroid y
    pub y: f64,
    /// Bar material
    pub material: SteelBar,
}

impl LumpedBar {
    pub fn new(area: f64, x: f64, y: f64, material: SteelBar) -> Self {
        Self { area, x, y, material }
    }

    /// Circular bar of the given diameter
    pub fn circular(diameter: f64, x: f64, y: f64, material: SteelBar) -> Self {
        Self::new(std::f64::consts::PI * diameter * diameter / 4.0, x, y, material)
    }
}

impl ReinforcementElement for LumpedBar {
    fn ultimate_strain(&self) -> f64 {
        self.material.ultimate_strain()
    }
}

/// Distributed reinforcement modelled as a meshed region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshedReinforcement {
    /// Region area
    pub area: f64,
    /// Region material
    pub material: SteelBar,
}

/// Cross-section as seen by section design.
pub trait Section {
    /// Whether any reinforcement is modelled as a meshed region
    fn has_meshed_reinforcement(&self) -> bool;

    /// Discrete bars, possibly empty
    fn lumped_reinforcement(&self) -> &[LumpedBar];

    /// Unit system the section's dimensions are expressed in
    fn unit_system(&self) -> UnitSystem;

    /// Replace the section's unit system
    fn set_unit_system(&mut self, units: UnitSystem);
}

/// Reinforced concrete section with lumped bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcedSection {
    /// User label (e.g., "C1", "Transfer Beam")
    pub label: String,
    /// Gross concrete area, bars included
    pub concrete_area: f64,
    /// Concrete material
    pub concrete: Concrete,
    /// Discrete bars
    #[serde(default)]
    pub bars: Vec<LumpedBar>,
    /// Meshed reinforcement regions
    #[serde(default)]
    pub meshed_reinforcement: Vec<MeshedReinforcement>,
    /// Declared unit system
    #[serde(default)]
    pub units: UnitSystem,
}

impl ReinforcedSection {
    /// Create a section with no reinforcement and generic units.
    pub fn new(label: impl Into<String>, concrete_area: f64, concrete: Concrete) -> Self {
        Self {
            label: label.into(),
            concrete_area,
            concrete,
            bars: Vec::new(),
            meshed_reinforcement: Vec::new(),
            units: UnitSystem::Generic,
        }
    }

    /// Rectangular section of width × depth
    pub fn rectangular(label: impl Into<String>, width: f64, depth: f64, concrete: Concrete) -> Self {
        Self::new(label, width * depth, concrete)
    }

    /// Add a bar (builder pattern)
    pub fn with_bar(mut self, bar: LumpedBar) -> Self {
        self.bars.push(bar);
        self
    }

    /// Add a meshed reinforcement region (builder pattern)
    pub fn with_meshed_reinforcement(mut self, region: MeshedReinforcement) -> Self {
        self.meshed_reinforcement.push(region);
        self
    }

    /// Declare a unit system (builder pattern)
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    /// Total bar area
    pub fn steel_area(&self) -> f64 {
        self.bars.iter().map(|bar| bar.area).sum()
    }

    /// Concrete area net of bars
    pub fn net_concrete_area(&self) -> f64 {
        self.concrete_area - self.steel_area()
    }
}

impl Section for ReinforcedSection {
    fn has_meshed_reinforcement(&self) -> bool {
        !self.meshed_reinforcement.is_empty()
    }

    fn lumped_reinforcement(&self) -> &[LumpedBar] {
        &self.bars
    }

    fn unit_system(&self) -> UnitSystem {
        self.units
    }

    fn set_unit_system(&mut self, units: UnitSystem) {
        self.units = units;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{DesignCode, HkCop2013};
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_section_areas() {
        let code = HkCop2013::default();
        let concrete = code.create_concrete_material(40.0, "lightgrey").unwrap();
        let steel = code.create_steel_material(500.0, "B", "grey").unwrap();

        let section = ReinforcedSection::rectangular("C1", 400.0, 400.0, concrete)
            .with_bar(LumpedBar::circular(20.0, 50.0, 50.0, steel.clone()))
            .with_bar(LumpedBar::circular(20.0, 350.0, 50.0, steel));

        assert_relative_eq!(section.steel_area(), 2.0 * std::f64::consts::PI * 100.0, epsilon = 1e-9);
        assert_relative_eq!(section.net_concrete_area(), 160_000.0 - section.steel_area(), epsilon = 1e-9);
        assert_eq!(section.lumped_reinforcement().len(), 2);
        assert_eq!(section.lumped_reinforcement()[0].ultimate_strain(), 0.05);
        assert!(!section.has_meshed_reinforcement());
    }

    #[test]
    fn test_meshed_flag_and_units() {
        let code = HkCop2013::default();
        let concrete = code.create_concrete_material(40.0, "lightgrey").unwrap();
        let steel = code.create_steel_material(500.0, "B", "grey").unwrap();

        let mut section = ReinforcedSection::new("Wall", 200_000.0, concrete)
            .with_meshed_reinforcement(MeshedReinforcement { area: 2000.0, material: steel });
        assert!(section.has_meshed_reinforcement());
        assert!(section.lumped_reinforcement().is_empty());

        assert_eq!(section.unit_system(), UnitSystem::Generic);
        section.set_unit_system(UnitSystem::NewtonMillimetre);
        assert_eq!(section.unit_system(), UnitSystem::NewtonMillimetre);
    }

    #[test]
    fn test_missing_collections_deserialize_empty() {
        let code = HkCop2013::default();
        let concrete = code.create_concrete_material(32.0, "lightgrey").unwrap();
        let json = format!(
            r#"{{"label":"B1","concrete_area":90000.0,"concrete":{}}}"#,
            serde_json::to_string(&concrete).unwrap()
        );
        let section: ReinforcedSection = serde_json::from_str(&json).unwrap();
        assert!(section.bars.is_empty());
        assert!(section.meshed_reinforcement.is_empty());
        assert_eq!(section.units, UnitSystem::Generic);
    }

    #[test]
    fn test_section_json_with_invalid_bar_rejected() {
        let code = HkCop2013::default();
        let concrete = code.create_concrete_material(40.0, "lightgrey").unwrap();
        let steel = code.create_steel_material(500.0, "C", "grey").unwrap();
        let section = ReinforcedSection::rectangular("C1", 400.0, 400.0, concrete)
            .with_bar(LumpedBar::circular(20.0, 50.0, 50.0, steel));

        let mut json = serde_json::to_value(&section).unwrap();
        assert!(serde_json::from_value::<ReinforcedSection>(json.clone()).is_ok());

        json["bars"][0]["material"]["profile"]["yield_strength"] = json!(9000.0);
        assert!(serde_json::from_value::<ReinforcedSection>(json.clone()).is_err());

        json["bars"][0]["material"]["profile"]["yield_strength"] = json!(500.0);
        json["concrete"]["fcu"] = json!(200.0);
        let err: crate::errors::CodeError = serde_json::from_value::<ReinforcedSection>(json).unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
