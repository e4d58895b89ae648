//! Implementation of the `xcprompt validate` command.
//!
//! The linter itself is advisory; the nonzero exit code for findings is a
//! CLI-level convenience for scripting.

use anyhow::Result;
use xcprompt_core::validate_command;

use crate::output::{print_success, print_warning};

pub fn cmd_validate(command: &str) -> Result<()> {
    let lint = validate_command(command);

    if lint.valid {
        print_success("command looks fine");
        return Ok(());
    }

    for issue in &lint.issues {
        print_warning(issue);
    }
    std::process::exit(1);
}
