//! Implementation of the `xcprompt deps` command.

use std::path::Path;

use anyhow::Result;
use xcprompt_core::{detect_managers, detect_projects};

use crate::output::symbols;

pub fn cmd_deps(dir: &Path) -> Result<()> {
    let managers = detect_managers(dir);
    if managers.is_empty() {
        println!("No dependency managers detected in {}", dir.display());
    } else {
        println!("Dependency managers:");
        for manager in &managers {
            println!("  {} {}", symbols::ARROW, manager.name());
            println!("      install: {}", manager.install_command());
            println!("      update:  {}", manager.update_command());
        }
    }

    let projects = detect_projects(dir);
    if projects.is_empty() {
        println!("No Xcode projects found in {}", dir.display());
    } else {
        println!("Projects:");
        for project in &projects {
            println!("  {} {}", symbols::ARROW, project.display());
        }
    }

    Ok(())
}
