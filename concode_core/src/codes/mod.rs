//! # Design Codes
//!
//! Each regional design code implements [`DesignCode`] with its own constant
//! table and formulas. Callers pick the implementation when they construct
//! it; section design is generic over the choice.
//!
//! ## Available Codes
//!
//! - [`HkCop2013`] - Hong Kong Code of Practice for Structural Use of Concrete 2013

pub mod hk_cop_2013;

pub use hk_cop_2013::HkCop2013;

use crate::errors::CodeResult;
use crate::geometry::LumpedBar;
use crate::materials::{Concrete, DuctilityClass, SteelBar};
use crate::settings::CodeSettings;

/// Contract shared by every design code.
pub trait DesignCode {
    /// Short code name (e.g., "HK CoP 2013")
    fn name(&self) -> &'static str;

    /// Settings the code was built with
    fn settings(&self) -> &CodeSettings;

    /// Derive a concrete material from its characteristic strength (MPa).
    fn create_concrete_material(&self, fcu: f64, colour: &str) -> CodeResult<Concrete>;

    /// Derive a reinforcing bar from its yield strength (MPa) and ductility class.
    fn create_steel_material(&self, fy: f64, ductility_class: &str, colour: &str) -> CodeResult<SteelBar>;

    /// Ductility class of a section from its lumped bars.
    fn classify(&self, reinforcement: &[LumpedBar]) -> DuctilityClass;

    /// Comparison capacity-reduction factor for a failure mode tag.
    fn capacity_factor(&self, failure_mode: &str) -> f64;
}
