//! # Section Design
//!
//! Binds a [`DesignCode`] to a section-analysis collaborator and keeps the
//! results of the last section assigned to it: ductility class, squash load
//! and tensile load.
//!
//! One `SectionDesign` serves one analysis session. Reassigning a section
//! overwrites every cached result, and a failed assignment clears them.
//!
//! ## Example
//!
//! ```rust
//! use concode_core::analysis::PlasticAxialCapacity;
//! use concode_core::codes::{DesignCode, HkCop2013};
//! use concode_core::design::SectionDesign;
//! use concode_core::geometry::{LumpedBar, ReinforcedSection};
//! use concode_core::materials::DuctilityClass;
//!
//! let mut design = SectionDesign::new(HkCop2013::default(), PlasticAxialCapacity);
//!
//! let concrete = design.code().create_concrete_material(40.0, "lightgrey").unwrap();
//! let steel = design.code().create_steel_material(500.0, "A", "grey").unwrap();
//! let mut section = ReinforcedSection::rectangular("C1", 400.0, 400.0, concrete)
//!     .with_bar(LumpedBar::circular(20.0, 50.0, 50.0, steel));
//!
//! design.assign_section(&mut section).unwrap();
//! assert_eq!(design.ductility_class(), Some(DuctilityClass::A));
//! assert!(design.squash_load().unwrap() > 0.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::analysis::{AxialBounds, SectionAnalysis};
use crate::codes::DesignCode;
use crate::errors::{CodeError, CodeResult};
use crate::geometry::Section;
use crate::materials::DuctilityClass;

/// Results derived from the last assigned section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionSummary {
    /// Section ductility class
    pub ductility_class: DuctilityClass,
    /// Pure axial compressive capacity
    pub squash_load: f64,
    /// Pure axial tensile capacity (negative)
    pub tensile_load: f64,
}

/// Design code bound to a section-analysis collaborator.
#[derive(Debug, Clone)]
pub struct SectionDesign<C, A> {
    code: C,
    analysis: A,
    summary: Option<SectionSummary>,
}

impl<C: DesignCode, A> SectionDesign<C, A> {
    pub fn new(code: C, analysis: A) -> Self {
        Self {
            code,
            analysis,
            summary: None,
        }
    }

    /// The design code in use
    pub fn code(&self) -> &C {
        &self.code
    }

    /// Assign a section and recompute classification and axial bounds.
    ///
    /// Fails with [`CodeError::UnsupportedGeometry`] when the section has
    /// meshed reinforcement. A section with generic units is switched to the
    /// code's configured default first. Any error leaves no summary behind.
    #[instrument(skip_all, name = "assign_section", fields(code = self.code.name()))]
    pub fn assign_section<S>(&mut self, section: &mut S) -> CodeResult<()>
    where
        S: Section,
        A: SectionAnalysis<S>,
    {
        self.summary = None;

        if section.has_meshed_reinforcement() {
            return Err(CodeError::unsupported_geometry(format!(
                "{} supports lumped reinforcement only; section contains meshed reinforcement",
                self.code.name()
            )));
        }

        if !section.unit_system().is_explicit() {
            let units = self.code.settings().default_units;
            warn!(%units, "section has no explicit unit system, applying default");
            section.set_unit_system(units);
        }

        let ductility_class = self.code.classify(section.lumped_reinforcement());
        if ductility_class == DuctilityClass::A {
            warn!("section contains Class A reinforcement");
        }

        let AxialBounds {
            squash_load,
            tensile_load,
        } = self.analysis.axial_bounds(section)?;

        info!(
            bars = section.lumped_reinforcement().len(),
            class = %ductility_class,
            squash_load,
            tensile_load,
            "section assigned"
        );

        self.summary = Some(SectionSummary {
            ductility_class,
            squash_load,
            tensile_load,
        });
        Ok(())
    }

    /// Everything derived from the last assigned section
    pub fn summary(&self) -> Option<&SectionSummary> {
        self.summary.as_ref()
    }

    /// Ductility class of the last assigned section
    pub fn ductility_class(&self) -> Option<DuctilityClass> {
        self.summary.map(|s| s.ductility_class)
    }

    /// Squash load of the last assigned section
    pub fn squash_load(&self) -> Option<f64> {
        self.summary.map(|s| s.squash_load)
    }

    /// Tensile load of the last assigned section
    pub fn tensile_load(&self) -> Option<f64> {
        self.summary.map(|s| s.tensile_load)
    }
}
