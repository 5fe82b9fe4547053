//! # Materials
//!
//! Stress-strain laws and the material objects handed to section analysis.
//!
//! ## Material Types
//!
//! - **Concrete**: linear no-tension service law and rectangular ultimate block
//! - **Steel bar**: elastic-plastic law with linear hardening to fracture
//!
//! Materials are built by a [`DesignCode`](crate::codes::DesignCode) so every
//! derived property comes from that code's formulas.
//!
//! ## Example
//!
//! ```rust
//! use concode_core::codes::{DesignCode, HkCop2013};
//! use concode_core::materials::{Material, StressStrainProfile};
//!
//! let code = HkCop2013::default();
//! let steel = code.create_steel_material(500.0, "B", "grey").unwrap();
//! assert_eq!(steel.profile.stress(0.001).unwrap(), 200.0);
//!
//! let mat = Material::from(steel);
//! assert_eq!(mat.material_type(), "Steel");
//! ```

pub mod concrete;
pub mod steel;

pub use concrete::{Concrete, ConcreteServiceProfile, ConcreteUltimateProfile};
pub use steel::{DuctilityClass, SteelBar, SteelProfile};

use serde::{Deserialize, Serialize};

use crate::errors::CodeResult;

/// Uniaxial stress-strain law.
///
/// Stresses are in MPa. Evaluating outside [`strain_limits`](Self::strain_limits)
/// returns [`CodeError::StrainOutOfRange`](crate::errors::CodeError::StrainOutOfRange).
pub trait StressStrainProfile {
    /// Stress at the given strain
    fn stress(&self, strain: f64) -> CodeResult<f64>;

    /// Initial elastic modulus (MPa)
    fn elastic_modulus(&self) -> f64;

    /// Limiting strain magnitude of the law
    fn ultimate_strain(&self) -> f64;

    /// Inclusive (min, max) strain domain
    fn strain_limits(&self) -> (f64, f64);
}

/// Unified material enum for everything a section can be built from.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Concrete", "name": "40 MPa Concrete", "fcu": 40.0, ... }
/// { "type": "Steel", "name": "500 MPa Steel", "ductility_class": "B", ... }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Material {
    /// Concrete with service and ultimate laws
    Concrete(Concrete),
    /// Reinforcing bar
    Steel(SteelBar),
}

impl Material {
    /// Grade name
    pub fn name(&self) -> &str {
        match self {
            Material::Concrete(mat) => &mat.name,
            Material::Steel(mat) => &mat.name,
        }
    }

    /// Density (kg/mm³)
    pub fn density(&self) -> f64 {
        match self {
            Material::Concrete(mat) => mat.density,
            Material::Steel(mat) => mat.density,
        }
    }

    /// Get display name for this material
    pub fn display_name(&self) -> String {
        match self {
            Material::Concrete(mat) => mat.display_name(),
            Material::Steel(mat) => mat.display_name(),
        }
    }

    /// Get material type as a string
    pub fn material_type(&self) -> &'static str {
        match self {
            Material::Concrete(_) => "Concrete",
            Material::Steel(_) => "Steel",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl From<Concrete> for Material {
    fn from(mat: Concrete) -> Self {
        Material::Concrete(mat)
    }
}

impl From<SteelBar> for Material {
    fn from(mat: SteelBar) -> Self {
        Material::Steel(mat)
    }
}
