//! # Section Analysis Collaborator
//!
//! Section design delegates the axial load envelope to a
//! [`SectionAnalysis`] implementation. [`PlasticAxialCapacity`] is a
//! reference implementation for [`ReinforcedSection`]:
//!
//! ```text
//! N_squash  =  k · ( A_c,net · σ_c(ε_cu) + Σ A_s · σ_s(ε_cu) )
//! N_tensile = −k · Σ A_s · fy
//! ```
//!
//! where `k` is the section's [`UnitSystem::stress_scale`](crate::units::UnitSystem::stress_scale).
//! Compression is positive, so the tensile load is negative.

use serde::{Deserialize, Serialize};

use crate::errors::{CodeError, CodeResult};
use crate::geometry::{ReinforcedSection, Section};
use crate::materials::StressStrainProfile;

/// Axial load envelope of a cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxialBounds {
    /// Pure axial compressive capacity (positive)
    pub squash_load: f64,
    /// Pure axial tensile capacity (negative)
    pub tensile_load: f64,
}

/// Computes axial load bounds for a section type.
pub trait SectionAnalysis<S: Section> {
    fn axial_bounds(&self, section: &S) -> CodeResult<AxialBounds>;
}

/// Plastic axial capacity of a lumped-bar reinforced section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlasticAxialCapacity;

impl SectionAnalysis<ReinforcedSection> for PlasticAxialCapacity {
    fn axial_bounds(&self, section: &ReinforcedSection) -> CodeResult<AxialBounds> {
        let net_area = section.net_concrete_area();
        if !(net_area > 0.0) {
            return Err(CodeError::analysis_failed(format!(
                "section '{}' has no net concrete area ({})",
                section.label, net_area
            )));
        }

        let ultimate = &section.concrete.ultimate_profile;
        let eps_cu = ultimate.ultimate_strain;
        let mut squash = net_area * ultimate.stress(eps_cu)?;
        let mut tensile = 0.0;
        for bar in section.lumped_reinforcement() {
            squash += bar.area * bar.material.stress(eps_cu)?;
            tensile -= bar.area * bar.material.yield_strength();
        }

        let scale = section.unit_system().stress_scale();
        Ok(AxialBounds {
            squash_load: squash * scale,
            tensile_load: tensile * scale,
        })
    }
}
