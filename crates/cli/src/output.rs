//! CLI output formatting utilities

use owo_colors::OwoColorize;

pub mod symbols {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "→";
}

pub fn print_success(message: &str) {
    println!("{} {message}", symbols::SUCCESS.green());
}

pub fn print_warning(message: &str) {
    eprintln!("{} {message}", symbols::WARNING.yellow());
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", symbols::ERROR.red().bold());
}

/// A numbered workflow step: description first, command indented below
pub fn print_step(index: usize, description: &str, command: &str) {
    println!("{}. {}", index + 1, description.bold());
    for line in command.lines() {
        println!("     {line}");
    }
}
