//! Implementation of the `xcprompt generate` command.
//!
//! Parses an app description, generates starter sources, and writes
//! them under the output directory. `--dry-run` prints the file list
//! and contents instead of touching the filesystem.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;
use xcprompt_core::{Settings, UiFramework, generate_project, parse_requirements, write_project};

use crate::output::{print_step, print_success, symbols};

pub fn cmd_generate(
    prompt: &str,
    output: Option<&Path>,
    framework: &str,
    dry_run: bool,
    settings: &Settings,
    verbose: bool,
) -> Result<()> {
    let Some(framework) = UiFramework::from_name(framework) else {
        bail!("unknown UI framework: {framework} (expected swiftui or uikit)");
    };

    debug!(prompt = %prompt, framework = framework.as_str(), "parsing requirements");
    let requirements = parse_requirements(prompt, framework);

    println!("App: {}", requirements.app_name);
    println!("Framework: {}", requirements.ui_framework.as_str());
    println!("Features:");
    for feature in &requirements.features {
        println!("  {} {}: {}", symbols::ARROW, feature.name, feature.description);
        if verbose {
            println!("      ui: {}", feature.ui_elements.join(", "));
            println!("      functionality: {}", feature.functionality.join(", "));
        }
    }
    println!();

    let project = generate_project(&requirements);

    if dry_run {
        for (index, file) in project.files.iter().enumerate() {
            print_step(index, "Would write", &file.path);
            if verbose {
                print!("{}", file.content);
            }
        }
        return Ok(());
    }

    let output_dir = output.unwrap_or_else(|| Path::new(&settings.output.default_dir));
    let project_path = write_project(&project, output_dir)
        .with_context(|| format!("writing project to {}", output_dir.display()))?;

    for file in &project.files {
        println!("  {} {}", symbols::ARROW, file.path);
    }
    print_success(&format!("Project created at {}", project_path.display()));
    Ok(())
}
