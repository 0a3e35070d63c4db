//! # Slabwise CLI Application
//!
//! Prompt-driven slab panel design. Each prompt shows its default in
//! brackets; pressing Enter accepts it. Defaults come from the project
//! settings. The report is followed by the JSON result and design record.

mod logging;

use std::io::{self, BufRead, Write};

use slab_core::calculations::record::SlabDesignRecord;
use slab_core::calculations::reinforcement::{BottomReinforcement, DirectionDesign, MomentDesign};
use slab_core::calculations::slab::{calculate, BeamWidths, SlabInput, SlabResult};
use slab_core::calculations::Selection;
use slab_core::moment_coefficients::SupportCase;
use slab_core::project::GlobalSettings;

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_line(&format!("{} [{}]: ", prompt, default))
        .and_then(|s| s.replace(',', ".").parse().ok())
        .unwrap_or(default)
}

fn prompt_u8(prompt: &str, default: u8) -> u8 {
    read_line(&format!("{} [{}]: ", prompt, default))
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    read_line(&format!("{} [{}]: ", prompt, default)).unwrap_or_else(|| default.to_string())
}

fn read_input(settings: &GlobalSettings) -> SlabInput {
    let section = &settings.default_section;
    let materials = &settings.default_materials;

    let label = prompt_string("Slab label", "D-101");
    let lx_m = prompt_f64("Gross span lx (m)", 5.0);
    let ly_m = prompt_f64("Gross span ly (m)", 6.0);
    let beam = section.beam_width_mm;
    let beams_x = BeamWidths::new(
        prompt_f64("Beam width at x=0 (mm)", beam),
        prompt_f64("Beam width at x=lx (mm)", beam),
    );
    let beams_y = BeamWidths::new(
        prompt_f64("Beam width at y=0 (mm)", beam),
        prompt_f64("Beam width at y=ly (mm)", beam),
    );
    let thickness_mm = prompt_f64("Slab thickness h (mm)", section.thickness_mm);
    let cover_mm = prompt_f64("Cover (mm)", section.cover_mm);
    let concrete = prompt_string("Concrete grade", &materials.concrete);
    let steel = prompt_string("Steel grade", &materials.steel);
    let additional_dead_kn_m2 = prompt_f64("Additional dead load g (kN/m²)", 1.5);
    let live_kn_m2 = prompt_f64("Live load q (kN/m²)", 2.0);

    println!();
    for case in SupportCase::ALL {
        println!("  {}", case);
    }
    let support_case = prompt_u8("Support case", section.support_case);

    SlabInput {
        label,
        lx_m,
        ly_m,
        beams_x,
        beams_y,
        thickness_mm,
        cover_mm,
        concrete,
        steel,
        additional_dead_kn_m2,
        live_kn_m2,
        support_case,
    }
}

fn print_moment(name: &str, moment: &MomentDesign) {
    if moment.is_zero() {
        println!("  {}: M = 0", name);
        return;
    }
    println!(
        "  {}: α = {:.4}, M = {:.2} kNm/m, K = {:.2}e-5, ks = {:.3}, As(M) = {:.0} mm²/m",
        name,
        moment.coefficient,
        moment.moment_knm_per_m,
        moment.k_x1e5,
        moment.ks,
        moment.as_from_moment_mm2_per_m
    );
}

fn print_direction(design: &DirectionDesign) {
    println!("───────────────────────────────────────");
    println!("  {} DIRECTION (ln = {:.3} m)", design.direction, design.net_span_m);
    println!("───────────────────────────────────────");
    print_moment("Positive", &design.positive);
    if let Some(negative) = &design.negative {
        print_moment("Negative", negative);
    }
    println!("  Minimum: {}", design.minimum_note);
    println!("  Spacing: {}", design.spacing_note());
    println!("  Edges:   {}", design.edge_note);

    match &design.bottom {
        BottomReinforcement::Main(Selection::Chosen(layout)) => {
            println!(
                "  Bottom (50% straight + 50% bent, same Ø), required {:.0} mm²/m:",
                design.bottom_required_mm2_per_m
            );
            println!(
                "    Straight: {} ({:.2} cm²/m)",
                layout.straight,
                layout.straight.area_cm2_per_m()
            );
            println!("    Bent:     {} ({:.2} cm²/m)", layout.bent, layout.bent.area_cm2_per_m());
            println!(
                "    Total:    {:.0} mm²/m (ratio {:.3}) {}",
                layout.total_provided_mm2_per_m,
                layout.ratio,
                status_icon(true)
            );
        }
        other => {
            println!(
                "  Bottom, required {:.0} mm²/m: {} {}",
                design.bottom_required_mm2_per_m,
                other,
                status_icon(!other.is_infeasible())
            );
        }
    }

    if design.top.is_required() {
        println!(
            "  Top, required {:.0} mm²/m: {} {}",
            design.top_required_mm2_per_m,
            design.top,
            status_icon(!design.top.is_infeasible())
        );
    } else {
        println!("  Top: {}", design.top);
    }
}

fn print_report(result: &SlabResult) {
    println!("═══════════════════════════════════════");
    println!("  SLAB DESIGN RESULTS: {}", result.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Classification:");
    println!("  Type:   {} (m = {:.3})", result.slab_type, result.aspect_ratio);
    println!("  Case:   {}", result.support_case);
    println!("  Net spans: lnx = {:.3} m, lny = {:.3} m", result.net_span_x_m, result.net_span_y_m);
    println!("  d = {:.1} mm", result.effective_depth_m * 1000.0);
    println!();
    println!("Loads:");
    println!("  Self weight: {:.2} kN/m²", result.loads.self_weight_kn_m2);
    println!("  G = {:.2} kN/m², Q = {:.2} kN/m²", result.loads.dead_total_kn_m2, result.loads.live_kn_m2);
    println!("  pd = {:.2} kN/m² ({})", result.loads.design_load_kn_m2, result.loads.combination);
    println!();
    println!("Thickness:");
    println!("  {} {}", result.thickness.note, status_icon(result.thickness.ok));
    println!();

    print_direction(&result.x);
    print_direction(&result.y);

    if !result.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &result.warnings {
            println!("  - {}", warning);
        }
    }

    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {}", if result.passes() { "PASS" } else { "CHECK WARNINGS" });
    println!("═══════════════════════════════════════");
}

fn main() {
    logging::init();

    println!("Slabwise CLI - Slab Flexural Design");
    println!("===================================");
    println!();

    let settings = GlobalSettings::default();
    println!("Design code: {}", settings.code);
    println!();

    let input = read_input(&settings);
    println!();

    match calculate(&input) {
        Ok(result) => {
            print_report(&result);

            let record = SlabDesignRecord::new(&input, &result);
            println!();
            println!("Schedule: {}", record.schedule_line());

            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
