//! Runs the canonical islet simulation and prints the transition table and
//! the step-by-step trace.

use anyhow::{Context, Result};
use islet::report::SimulationReport;
use islet::simulation::{trace, Simulation, SimulationConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Islet simulator v{}", env!("CARGO_PKG_VERSION"));

    let simulation = Simulation::new(SimulationConfig::default())
        .context("Invalid default simulation configuration")?;
    let classifier = simulation.classifier();
    println!(
        "Thresholds: lower={}, upper={} (G_min={}, G_middle={}, G_max={})",
        classifier.lower_bound(),
        classifier.upper_bound(),
        classifier.g_min(),
        classifier.g_middle(),
        classifier.g_max()
    );

    println!("\nFull transition graph:");
    let graph = simulation.transition_graph();
    for edge in graph.edges() {
        println!("  ({}) -> ({})", edge.from, edge.to);
        for line in edge.label().lines() {
            println!("      {line}");
        }
    }

    let trajectory = simulation.run();
    println!("\nTransition table:");
    for line in trace(&trajectory) {
        println!("{line}");
    }

    if let Ok(path) = std::env::var("ISLET_REPORT") {
        let report = SimulationReport::new(&simulation, trajectory);
        let json = report.to_json().context("Failed to serialize report")?;
        std::fs::write(&path, json).with_context(|| format!("Failed to write report to {path}"))?;
        log::info!("Report written to {path}");
    }

    Ok(())
}
