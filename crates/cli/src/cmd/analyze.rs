//! Implementation of the `xcprompt analyze` command.

use anyhow::Result;
use xcprompt_core::{BuildMetrics, analyze_build, optimized_settings_string};

use crate::output::symbols;

pub fn cmd_analyze(
    total: f64,
    compilation: f64,
    linking: f64,
    signing: f64,
    efficiency: f64,
    build_type: &str,
) -> Result<()> {
    let metrics = BuildMetrics {
        total_time: total,
        compilation_time: compilation,
        linking_time: linking,
        signing_time: signing,
        parallelization_efficiency: efficiency,
    };

    let suggestions = analyze_build(&metrics);
    if suggestions.is_empty() {
        println!("No optimization suggestions; build timings look healthy");
    } else {
        println!("Suggestions:");
        for suggestion in &suggestions {
            println!("  {} {suggestion}", symbols::ARROW);
        }
    }

    println!();
    println!("Recommended settings for {build_type} builds:");
    println!("  {}", optimized_settings_string(build_type));

    Ok(())
}
