//! Build command assembly and project detection

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::destination::Destination;

/// Select `-workspace` or `-project` from the project path suffix.
///
/// Single shared home for the suffix check every command builder needs.
pub fn project_flag(project_path: &str) -> &'static str {
    if project_path.ends_with(".xcworkspace") {
        "-workspace"
    } else {
        "-project"
    }
}

/// Format an `xcodebuild ... build` invocation
pub fn build_command(
    project: &str,
    scheme: &str,
    configuration: &str,
    destination: Option<&Destination>,
    extra_settings: Option<&str>,
) -> String {
    let mut command = format!(
        "xcodebuild {} {} -scheme {} -configuration {}",
        project_flag(project),
        project,
        scheme,
        configuration
    );
    if let Some(dest) = destination {
        command.push_str(&format!(" -destination '{}'", dest.descriptor()));
    }
    if let Some(settings) = extra_settings {
        if !settings.is_empty() {
            command.push(' ');
            command.push_str(settings);
        }
    }
    command.push_str(" build");
    command
}

/// Format an `xcodebuild ... clean` invocation
pub fn clean_command(project: &str, scheme: &str) -> String {
    format!(
        "xcodebuild {} {} -scheme {} clean",
        project_flag(project),
        project,
        scheme
    )
}

/// List Xcode projects and workspaces directly inside a directory.
///
/// A read failure is logged and yields an empty list; it is never fatal.
pub fn detect_projects(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "failed to list directory");
            return Vec::new();
        }
    };

    let mut projects: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            name.ends_with(".xcodeproj") || name.ends_with(".xcworkspace")
        })
        .collect();
    projects.sort();
    projects
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_project_flag() {
        assert_eq!(project_flag("App.xcodeproj"), "-project");
        assert_eq!(project_flag("App.xcworkspace"), "-workspace");
    }

    #[test]
    fn test_build_command_contains_required_flags() {
        let command = build_command("MyApp.xcodeproj", "MyApp", "Debug", None, None);
        assert!(command.contains("-project"));
        assert!(command.contains("MyApp.xcodeproj"));
        assert!(command.contains("-scheme MyApp"));
        assert!(command.contains("-configuration Debug"));
        assert!(command.ends_with(" build"));
    }

    #[test]
    fn test_build_command_workspace_flips_flag() {
        let command = build_command("MyApp.xcworkspace", "MyApp", "Debug", None, None);
        assert!(command.contains("-workspace"));
        assert!(!command.contains("-project"));
    }

    #[test]
    fn test_build_command_with_destination_and_settings() {
        let dest = Destination::ios_simulator("iPhone 14 Pro");
        let command = build_command(
            "App.xcodeproj",
            "App",
            "Release",
            Some(&dest),
            Some("ENABLE_TESTABILITY=NO"),
        );
        assert!(command.contains("-destination 'platform=iOS Simulator,name=iPhone 14 Pro'"));
        assert!(command.contains("ENABLE_TESTABILITY=NO"));
    }

    #[test]
    fn test_clean_command() {
        let command = clean_command("App.xcodeproj", "App");
        assert!(command.contains("clean"));
        assert!(command.contains("-project App.xcodeproj"));
    }

    #[test]
    fn test_detect_projects() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("App.xcodeproj")).unwrap();
        fs::create_dir(temp.path().join("App.xcworkspace")).unwrap();
        fs::write(temp.path().join("README.md"), "hi").unwrap();

        let projects = detect_projects(temp.path());
        assert_eq!(projects.len(), 2);
    }

    #[test]
    fn test_detect_projects_missing_dir_is_empty() {
        let projects = detect_projects(Path::new("/nonexistent/xcprompt-test"));
        assert!(projects.is_empty());
    }
}
