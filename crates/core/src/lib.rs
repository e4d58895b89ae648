//! xcprompt-core: Command planning for natural-language Xcode build prompts
//!
//! This crate turns free-text prompts ("build the release version for
//! iPhone 14 Pro") into ordered lists of `xcodebuild` command strings,
//! and can scaffold starter SwiftUI/UIKit projects from app descriptions.
//! Everything here is keyword matching plus string assembly against static
//! tables; no command is ever executed by this crate (see [`CommandRunner`]).

mod advisor;
mod archive;
mod build;
mod codegen;
mod configuration;
mod deps;
mod destination;
mod error;
mod exec;
mod requirements;
mod router;
mod settings;
mod signing;
mod testing;

pub mod security;

pub use advisor::{BuildMetrics, analyze_build, optimized_settings, optimized_settings_string};
pub use archive::{
    ExportMethod, ExportOptions, archive_command, complete_workflow, export_command,
    export_options_plist,
};
pub use build::{build_command, clean_command, detect_projects, project_flag};
pub use codegen::{FileKind, ProjectFile, ProjectStructure, generate_project, write_project};
pub use configuration::BuildConfiguration;
pub use deps::{DependencyManager, detect_managers};
pub use destination::{Destination, Platform, parse_destination};
pub use error::CoreError;
pub use exec::{CommandLint, CommandRunner, ExecutionOutcome, validate_command};
pub use requirements::{AppFeature, AppRequirements, UiFramework, parse_requirements};
pub use router::{Workflow, WorkflowStep, describe_command, process_prompt, route_prompt};
pub use settings::{BuildSection, OutputSection, Settings};
pub use signing::{
    IdentityKind, ProvisioningProfile, SigningIdentity, automatic_signing_settings,
    manual_signing_settings,
};
pub use testing::{
    TestConfiguration, TestResults, parse_test_results, test_command, ui_test_command,
    unit_test_command,
};

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
