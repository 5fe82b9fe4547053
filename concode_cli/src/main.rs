//! # Concode CLI
//!
//! Terminal front end for the material engine. Prompts for the characteristic
//! inputs, derives the HK CoP 2013 materials, assesses a demo column and
//! prints the results as a table and as JSON.
//!
//! ```text
//! concode_cli [settings.json]
//! ```

mod logging;

use std::io::{self, BufRead, Write};

use concode_core::analysis::PlasticAxialCapacity;
use concode_core::capacity::FailureMode;
use concode_core::geometry::{LumpedBar, ReinforcedSection};
use concode_core::materials::{Material, StressStrainProfile};
use concode_core::units::UnitSystem;
use concode_core::{CodeError, CodeResult, CodeSettings, DesignCode, HkCop2013, SectionDesign};
use tracing::error;

fn prompt(text: &str, default: &str) -> String {
    print!("{}", text);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    match input.trim() {
        "" => default.to_string(),
        value => value.to_string(),
    }
}

fn prompt_f64(text: &str, default: f64) -> f64 {
    prompt(text, &default.to_string()).parse().unwrap_or(default)
}

fn load_settings() -> CodeResult<CodeSettings> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).map_err(|e| {
                CodeError::invalid_input("settings", path.clone(), e.to_string())
            })?;
            CodeSettings::from_json(&json)
        }
        None => Ok(CodeSettings::default()),
    }
}

fn run() -> CodeResult<()> {
    let code = HkCop2013::new(load_settings()?)?;

    println!("Concode CLI - {} material derivation", code.name());
    println!("================================================");
    println!();

    let fcu = prompt_f64("Concrete strength fcu (MPa) [40]: ", 40.0);
    let fy = prompt_f64("Steel yield strength fy (MPa) [500]: ", 500.0);
    let class = prompt("Ductility class (A/B/C) [B]: ", "B");

    let settings = code.settings();
    let concrete = code.create_concrete_material(fcu, &settings.concrete_colour)?;
    let steel = code.create_steel_material(fy, &class, &settings.steel_colour)?;

    println!();
    println!("═══════════════════════════════════════");
    println!("  {}", concrete.name);
    println!("═══════════════════════════════════════");
    println!("  E_c     = {:.0} MPa", concrete.elastic_modulus);
    println!("  f_ct    = {:.3} MPa", concrete.flexural_tensile_strength);
    println!("  0.67fcu = {:.2} MPa (service)", concrete.service_profile.compressive_strength);
    println!("  alpha   = {:.4}", concrete.alpha());
    println!("  gamma   = {:.4}", concrete.gamma());
    println!("  ε_cu    = {}", concrete.ultimate_profile.ultimate_strain());
    println!();
    println!("═══════════════════════════════════════");
    println!("  {}", steel.display_name());
    println!("═══════════════════════════════════════");
    println!("  E_s     = {:.0} MPa", steel.profile.elastic_modulus);
    println!("  ε_y     = {:.5}", steel.yield_strain());
    println!("  fu      = {:.1} MPa", steel.ultimate_strength());
    println!("  ε_su    = {}", steel.ultimate_strain());
    println!();
    println!("Capacity factors (comparison only):");
    for mode in FailureMode::ALL {
        println!("  {:<12} {:.2}", mode.tag(), code.capacity_factor(mode.tag()));
    }

    // Demo 400 x 400 column with 4 corner bars of 20 mm
    let mut section = [(50.0, 50.0), (350.0, 50.0), (350.0, 350.0), (50.0, 350.0)]
        .into_iter()
        .fold(
            ReinforcedSection::rectangular("Demo column 400x400", 400.0, 400.0, concrete.clone()),
            |section, (x, y)| section.with_bar(LumpedBar::circular(20.0, x, y, steel.clone())),
        )
        .with_units(UnitSystem::NewtonMillimetre);

    let mut design = SectionDesign::new(code, PlasticAxialCapacity);
    design.assign_section(&mut section)?;

    if let Some(summary) = design.summary() {
        println!();
        println!("═══════════════════════════════════════");
        println!("  {} ({})", section.label, section.units);
        println!("═══════════════════════════════════════");
        println!("  Ductility class: {}", summary.ductility_class);
        let force = section.units.force_unit();
        println!("  Squash load:     {:.1} {}", summary.squash_load, force);
        println!("  Tensile load:    {:.1} {}", summary.tensile_load, force);

        println!();
        println!("JSON Output:");
        let materials = [Material::from(concrete), Material::from(steel)];
        let output = serde_json::json!({
            "materials": materials,
            "section": summary,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        error!(code = e.error_code(), "{}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}
