//! Implementation of the `xcprompt plan` command.
//!
//! Routes a prompt through the full workflow router and prints each step
//! with its description. With `--run`, every command is fed through the
//! stubbed runner, which records it and reports success without spawning
//! anything.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};
use xcprompt_core::{CommandRunner, Settings, export_options_plist, route_prompt, validate_command};

use crate::output::{self, print_step, print_success, print_warning};

pub fn cmd_plan(
    prompt: &str,
    dir: &Path,
    settings: &Settings,
    run: bool,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!("Prompt: {prompt}");
        println!("Working directory: {}", dir.display());
        println!("Output directory: {}", settings.output.default_dir);
        println!();
    }

    debug!(prompt = %prompt, dir = %dir.display(), "routing prompt");
    let workflow = route_prompt(prompt, dir, &settings.output.default_dir);
    info!(steps = workflow.steps.len(), "workflow planned");

    for (index, step) in workflow.steps.iter().enumerate() {
        print_step(index, &step.description, &step.command);

        let lint = validate_command(&step.command);
        for issue in &lint.issues {
            print_warning(issue);
        }
    }

    if let Some(options) = &workflow.export_options {
        println!();
        println!(
            "Write this to {}/ExportOptions.plist:",
            settings.output.default_dir
        );
        print!("{}", export_options_plist(options));
    }

    if run {
        println!();
        let mut runner = CommandRunner::new();
        for step in &workflow.steps {
            let outcome = runner.run(&step.command);
            if outcome.success() {
                print_success(&step.description);
            } else {
                output::print_error(&step.description);
            }
        }
        println!("{} command(s) recorded (nothing was executed)", runner.history().len());
    }

    Ok(())
}
