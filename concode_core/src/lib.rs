//! # concode_core - Design Code Material Engine
//!
//! `concode_core` derives the material laws and code parameters a reinforced
//! concrete section analysis needs from a handful of characteristic inputs:
//! concrete cube strength, steel yield strength and reinforcement ductility
//! class. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Pure factories**: materials are a function of their inputs and settings only
//! - **Fail fast**: every entry point validates before building anything
//! - **One trait per seam**: design codes and section analysis are pluggable
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use concode_core::codes::{DesignCode, HkCop2013};
//! use concode_core::materials::StressStrainProfile;
//!
//! let code = HkCop2013::default();
//! let concrete = code.create_concrete_material(40.0, "lightgrey").unwrap();
//! let steel = code.create_steel_material(500.0, "B", "grey").unwrap();
//!
//! assert_eq!(concrete.alpha(), 0.67);
//! assert_eq!(steel.profile.stress(-0.001).unwrap(), -200.0);
//! ```
//!
//! ## Modules
//!
//! - [`rules`] - Code constants and clause formulas
//! - [`materials`] - Concrete and steel stress-strain laws
//! - [`codes`] - The `DesignCode` trait and its implementations
//! - [`classification`] - Section ductility classification
//! - [`capacity`] - Comparison capacity-reduction factors
//! - [`geometry`] - Section contract consumed by section design
//! - [`analysis`] - Axial load envelope collaborator
//! - [`design`] - Section design state for one analysis session
//! - [`settings`] - Explicit configuration
//! - [`units`] - Stress units and unit systems
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod capacity;
pub mod classification;
pub mod codes;
pub mod design;
pub mod errors;
pub mod geometry;
pub mod materials;
pub mod rules;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use codes::{DesignCode, HkCop2013};
pub use design::{SectionDesign, SectionSummary};
pub use errors::{CodeError, CodeResult};
pub use materials::{Concrete, DuctilityClass, SteelBar};
pub use settings::CodeSettings;
