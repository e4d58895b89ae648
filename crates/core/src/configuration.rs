//! Build configurations and their compiler/linker flag tables

/// The four supported build configurations.
///
/// The flag table for each configuration is fixed at compile time; there is
/// no support for user-defined configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildConfiguration {
    Debug,
    Release,
    Profile,
    Staging,
}

const DEBUG_SETTINGS: &[(&str, &str)] = &[
    ("SWIFT_OPTIMIZATION_LEVEL", "-Onone"),
    ("GCC_OPTIMIZATION_LEVEL", "0"),
    ("DEBUG_INFORMATION_FORMAT", "dwarf"),
    ("ENABLE_TESTABILITY", "YES"),
    ("ONLY_ACTIVE_ARCH", "YES"),
];

const RELEASE_SETTINGS: &[(&str, &str)] = &[
    ("SWIFT_OPTIMIZATION_LEVEL", "-O"),
    ("SWIFT_COMPILATION_MODE", "wholemodule"),
    ("GCC_OPTIMIZATION_LEVEL", "s"),
    ("DEBUG_INFORMATION_FORMAT", "dwarf-with-dsym"),
    ("ENABLE_TESTABILITY", "NO"),
];

const PROFILE_SETTINGS: &[(&str, &str)] = &[
    ("SWIFT_OPTIMIZATION_LEVEL", "-O"),
    ("SWIFT_COMPILATION_MODE", "wholemodule"),
    ("DEBUG_INFORMATION_FORMAT", "dwarf-with-dsym"),
    ("ENABLE_TESTABILITY", "YES"),
];

const STAGING_SETTINGS: &[(&str, &str)] = &[
    ("SWIFT_OPTIMIZATION_LEVEL", "-O"),
    ("SWIFT_COMPILATION_MODE", "wholemodule"),
    ("DEBUG_INFORMATION_FORMAT", "dwarf-with-dsym"),
    ("ENABLE_TESTABILITY", "NO"),
    ("OTHER_SWIFT_FLAGS", "-DSTAGING"),
];

impl BuildConfiguration {
    /// Get the configuration name as passed to `-configuration`
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "Debug",
            BuildConfiguration::Release => "Release",
            BuildConfiguration::Profile => "Profile",
            BuildConfiguration::Staging => "Staging",
        }
    }

    /// Look up a configuration by name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "debug" => Some(BuildConfiguration::Debug),
            "release" => Some(BuildConfiguration::Release),
            "profile" => Some(BuildConfiguration::Profile),
            "staging" => Some(BuildConfiguration::Staging),
            _ => None,
        }
    }

    /// Resolve a configuration from free prompt text.
    ///
    /// Only "release" is recognized; everything else resolves to Debug.
    /// Profile and Staging are not reachable from natural language.
    pub fn from_prompt(prompt: &str) -> Self {
        if prompt.to_lowercase().contains("release") {
            BuildConfiguration::Release
        } else {
            BuildConfiguration::Debug
        }
    }

    /// The fixed flag table for this configuration
    pub fn build_settings(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            BuildConfiguration::Debug => DEBUG_SETTINGS,
            BuildConfiguration::Release => RELEASE_SETTINGS,
            BuildConfiguration::Profile => PROFILE_SETTINGS,
            BuildConfiguration::Staging => STAGING_SETTINGS,
        }
    }

    /// Flag table rendered as `KEY=VALUE` pairs joined by single spaces
    pub fn build_settings_string(&self) -> String {
        self.build_settings()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
