//! Implementation of the `xcprompt quick` command.
//!
//! Uses the flat keyword matcher, which has its own rules independent of
//! the workflow router.

use anyhow::Result;
use xcprompt_core::process_prompt;

pub fn cmd_quick(prompt: &str) -> Result<()> {
    for command in process_prompt(prompt) {
        println!("{command}");
    }
    Ok(())
}
