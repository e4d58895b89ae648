//! Prompt routing
//!
//! Two independent keyword matchers live here on purpose: the workflow
//! router ([`route_prompt`]) and the simpler flat matcher
//! ([`process_prompt`]). Their rule sets diverge and are asserted
//! separately; do not merge them.

use std::path::Path;

use tracing::debug;

use crate::advisor::optimized_settings_string;
use crate::archive::{ExportMethod, ExportOptions, complete_workflow};
use crate::build::{build_command, clean_command};
use crate::configuration::BuildConfiguration;
use crate::deps::detect_managers;
use crate::destination::{Destination, parse_destination};
use crate::testing::{TestConfiguration, test_command};

/// Project and scheme used by every routed workflow. The router never
/// extracts these from the prompt or from disk.
const DEFAULT_PROJECT: &str = "App.xcodeproj";
const DEFAULT_SCHEME: &str = "App";

/// One step of a routed workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStep {
    pub command: String,
    pub description: String,
}

/// Ordered command sequence produced by the router
#[derive(Debug, Clone, Default)]
pub struct Workflow {
    pub steps: Vec<WorkflowStep>,
    /// Present only for archive workflows; holds the resolved export
    /// options so callers can render ExportOptions.plist.
    pub export_options: Option<ExportOptions>,
}

impl Workflow {
    /// The bare command strings, in step order
    pub fn commands(&self) -> Vec<String> {
        self.steps.iter().map(|step| step.command.clone()).collect()
    }
}

/// Describe a generated command by keyword-matching the command text.
///
/// This classifier is independent of the router's own branching and keeps
/// its fixed precedence: dependencies, clean, build-for-testing, test,
/// archive, export, build, then a numbered fallback.
pub fn describe_command(command: &str, index: usize) -> String {
    let lower = command.to_lowercase();

    if lower.contains("install")
        || lower.contains("resolve")
        || lower.contains("update")
        || lower.contains("bootstrap")
    {
        "Installing dependencies".to_string()
    } else if lower.contains("clean") {
        "Cleaning build artifacts".to_string()
    } else if lower.contains("build-for-testing") {
        "Building for testing".to_string()
    } else if lower.contains(" test") {
        // Space-prefixed: must not match ENABLE_TESTABILITY
        "Running tests".to_string()
    } else if lower.contains("xcodebuild archive") {
        "Creating archive".to_string()
    } else if lower.contains("export") {
        "Exporting archive".to_string()
    } else if lower.contains("build") {
        "Building project".to_string()
    } else {
        format!("Executing step {}", index + 1)
    }
}

fn workflow_from_commands(commands: Vec<String>, export_options: Option<ExportOptions>) -> Workflow {
    let steps = commands
        .into_iter()
        .enumerate()
        .map(|(index, command)| WorkflowStep {
            description: describe_command(&command, index),
            command,
        })
        .collect();
    Workflow {
        steps,
        export_options,
    }
}

/// Route a prompt to a test, archive, or default build workflow.
///
/// Single-pass classification over the lowercased prompt; `working_dir` is
/// only consulted for dependency-manifest checks in the default branch, and
/// `output_dir` only for archive paths.
pub fn route_prompt(prompt: &str, working_dir: &Path, output_dir: &str) -> Workflow {
    let lower = prompt.to_lowercase();

    if lower.contains("test") {
        let config = TestConfiguration {
            parallel: !lower.contains("sequential"),
            code_coverage: lower.contains("coverage"),
            ..Default::default()
        };
        let destination =
            parse_destination(&lower).unwrap_or_else(|| Destination::ios_simulator("iPhone 14"));
        debug!(parallel = config.parallel, coverage = config.code_coverage, "routed to test workflow");
        workflow_from_commands(
            vec![test_command(DEFAULT_PROJECT, DEFAULT_SCHEME, &destination, &config)],
            None,
        )
    } else if lower.contains("archive") || lower.contains("export") {
        let method = if lower.contains("app store") {
            ExportMethod::AppStore
        } else {
            ExportMethod::Development
        };
        debug!(method = method.as_str(), "routed to archive workflow");
        workflow_from_commands(
            complete_workflow(DEFAULT_PROJECT, DEFAULT_SCHEME, "Release", output_dir),
            Some(ExportOptions::new(method)),
        )
    } else {
        let configuration = BuildConfiguration::from_prompt(&lower);
        debug!(configuration = configuration.as_str(), "routed to build workflow");
        let mut commands = Vec::new();
        for manager in detect_managers(working_dir) {
            commands.push(manager.install_command().to_string());
        }
        commands.push(clean_command(DEFAULT_PROJECT, DEFAULT_SCHEME));
        let settings = optimized_settings_string(configuration.as_str());
        commands.push(build_command(
            DEFAULT_PROJECT,
            DEFAULT_SCHEME,
            configuration.as_str(),
            parse_destination(&lower).as_ref(),
            Some(&settings),
        ));
        workflow_from_commands(commands, None)
    }
}

/// Flat keyword matcher, kept separate from [`route_prompt`].
///
/// Appends one fixed command per recognized keyword, in clean/build/test/
/// archive order, and falls back to a single default build command when
/// nothing matches. Never returns an empty list.
pub fn process_prompt(prompt: &str) -> Vec<String> {
    let lower = prompt.to_lowercase();
    let uses_spm = lower.contains("swift package") || lower.contains("spm");
    let mut commands = Vec::new();

    if lower.contains("clean") {
        commands.push(format!(
            "xcodebuild -project {DEFAULT_PROJECT} -scheme {DEFAULT_SCHEME} clean"
        ));
    }
    if lower.contains("build") {
        if uses_spm {
            commands.push("swift build".to_string());
        } else {
            commands.push(default_build_command());
        }
    }
    if lower.contains("test") {
        if uses_spm {
            commands.push("swift test".to_string());
        } else {
            commands.push(format!(
                "xcodebuild test -project {DEFAULT_PROJECT} -scheme {DEFAULT_SCHEME} \
                 -destination 'platform=iOS Simulator,name=iPhone 14'"
            ));
        }
    }
    if lower.contains("archive") {
        commands.push(format!(
            "xcodebuild archive -project {DEFAULT_PROJECT} -scheme {DEFAULT_SCHEME} \
             -archivePath ./output/{DEFAULT_SCHEME}.xcarchive"
        ));
    }

    if commands.is_empty() {
        commands.push(default_build_command());
    }
    commands
}

fn default_build_command() -> String {
    format!(
        "xcodebuild -project {DEFAULT_PROJECT} -scheme {DEFAULT_SCHEME} \
         -configuration Debug build"
    )
}
