//! Dependency manager detection
//!
//! Detection is manifest-file existence only; manifest contents are never
//! parsed.

use std::path::Path;

use tracing::debug;

/// Supported dependency managers, in detection order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyManager {
    Spm,
    CocoaPods,
    Carthage,
}

impl DependencyManager {
    /// All managers, in the order detection reports them
    pub const ALL: [DependencyManager; 3] = [
        DependencyManager::Spm,
        DependencyManager::CocoaPods,
        DependencyManager::Carthage,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            DependencyManager::Spm => "Swift Package Manager",
            DependencyManager::CocoaPods => "CocoaPods",
            DependencyManager::Carthage => "Carthage",
        }
    }

    /// The manifest filename whose presence signals this manager
    pub fn manifest_file(&self) -> &'static str {
        match self {
            DependencyManager::Spm => "Package.swift",
            DependencyManager::CocoaPods => "Podfile",
            DependencyManager::Carthage => "Cartfile",
        }
    }

    /// Command that installs/resolves dependencies for this manager
    pub fn install_command(&self) -> &'static str {
        match self {
            DependencyManager::Spm => "swift package resolve",
            DependencyManager::CocoaPods => "pod install",
            DependencyManager::Carthage => "carthage bootstrap --use-xcframeworks",
        }
    }

    /// Command that updates dependencies for this manager
    pub fn update_command(&self) -> &'static str {
        match self {
            DependencyManager::Spm => "swift package update",
            DependencyManager::CocoaPods => "pod update",
            DependencyManager::Carthage => "carthage update --use-xcframeworks",
        }
    }
}

/// Detect which dependency managers a directory uses.
///
/// Non-recursive existence checks against the fixed manifest filenames; the
/// result follows declaration order (SPM, CocoaPods, Carthage), not disk
/// order.
pub fn detect_managers(dir: &Path) -> Vec<DependencyManager> {
    let detected: Vec<DependencyManager> = DependencyManager::ALL
        .into_iter()
        .filter(|manager| dir.join(manager.manifest_file()).exists())
        .collect();
    debug!(dir = %dir.display(), managers = detected.len(), "dependency detection");
    detected
}
