//! Deflection Solver Example - the calculator's two reference beams

use deflection_solver::prelude::*;

fn print_report(title: &str, beam: &BeamSpec) -> CalcResult<()> {
    println!("=== {} ===\n", title);
    println!(
        "L = {} m, {} load = {} {}, E = {:e} Pa, I = {:e} m^4\n",
        beam.length,
        beam.load.kind,
        beam.load.magnitude,
        beam.load.kind.magnitude_unit(),
        beam.e,
        beam.i
    );

    let curve = evaluate_checked(beam)?;
    let report = DeflectionReport::from_curve(&curve);

    println!("{}\n", report.summary);
    println!("{}", report.table);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let material = Material::structural_steel();
    let section = Section::new(1e-6);

    print_report(
        "Central point load",
        &BeamSpec::from_parts(1.0, BeamLoad::point(100.0), &material, &section),
    )?;
    print_report(
        "Uniformly distributed load",
        &BeamSpec::from_parts(1.0, BeamLoad::udl(100.0), &material, &section),
    )?;

    // 100 x 300 mm timber-sized steel bar over 4 m
    let bar = Section::rectangular(0.1, 0.3);
    let beam = BeamSpec::from_parts(4.0, BeamLoad::udl(5_000.0), &Material::steel(), &bar);
    let curve = evaluate_checked(&beam)?;

    println!("=== Rectangular steel bar, 4 m span ===\n");
    println!("I = {:.4e} m^4, EI = {:.4e} N*m^2", bar.i, beam.flexural_rigidity());
    println!("Total load: {:.0} N", beam.load.total_force(beam.length));
    println!("{}", DeflectionReport::from_curve(&curve).summary);
    if let Some(peak) = curve.peak() {
        println!("Largest sampled deflection: {:.6e} m at x = {:.3} m", peak.y, peak.x);
    }
    println!("Span/deflection ratio: L/{:.0}", beam.length / curve.max_deflection);

    Ok(())
}
