//! Command execution stub and the advisory command linter

/// Result of a stubbed command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub command: String,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Records submitted commands and reports canned success.
///
/// No subprocess is ever spawned; every call is synchronous and
/// deterministic.
#[derive(Debug, Default)]
pub struct CommandRunner {
    history: Vec<String>,
}

impl CommandRunner {
    pub fn new() -> Self {
        CommandRunner::default()
    }

    pub fn run(&mut self, command: &str) -> ExecutionOutcome {
        self.history.push(command.to_string());
        ExecutionOutcome {
            command: command.to_string(),
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Every command submitted so far, in submission order
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

/// Advisory lint result; never blocks anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLint {
    pub valid: bool,
    pub issues: Vec<String>,
}

/// Check a command string against three fixed heuristics.
///
/// Purely informational: callers must not escalate findings into errors.
pub fn validate_command(command: &str) -> CommandLint {
    let mut issues = Vec::new();

    if command.trim().is_empty() {
        issues.push("command is empty".to_string());
    }
    if command.contains("&&") && command.contains("||") {
        issues.push("command mixes && and || without grouping".to_string());
    }
    if command.contains("rm -rf /") {
        issues.push("dangerous command: recursive delete from root".to_string());
    }

    CommandLint {
        valid: issues.is_empty(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_records_history_and_reports_success() {
        let mut runner = CommandRunner::new();
        let outcome = runner.run("xcodebuild -project App.xcodeproj build");
        assert!(outcome.success());
        assert_eq!(outcome.exit_code, 0);

        runner.run("xcodebuild clean");
        assert_eq!(runner.history().len(), 2);
        assert_eq!(runner.history()[1], "xcodebuild clean");
    }

    #[test]
    fn test_validate_empty_command() {
        let lint = validate_command("");
        assert!(!lint.valid);
        assert!(lint.issues.iter().any(|issue| issue.contains("empty")));
    }

    #[test]
    fn test_validate_dangerous_command() {
        let lint = validate_command("rm -rf /");
        assert!(!lint.valid);
        assert!(lint.issues.iter().any(|issue| issue.contains("dangerous")));
    }

    #[test]
    fn test_validate_mixed_operators() {
        let lint = validate_command("a && b || c");
        assert!(!lint.valid);
        assert_eq!(lint.issues.len(), 1);
    }

    #[test]
    fn test_validate_normal_build_command() {
        let lint = validate_command("xcodebuild -project App.xcodeproj -scheme App build");
        assert!(lint.valid);
        assert!(lint.issues.is_empty());
    }
}
