//! Build-timing analysis and optimization suggestions

/// Timing metrics for one build.
///
/// Component durations are taken as given; nothing checks that they sum to
/// the total.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildMetrics {
    pub total_time: f64,
    pub compilation_time: f64,
    pub linking_time: f64,
    pub signing_time: f64,
    /// Ratio in [0, 1]
    pub parallelization_efficiency: f64,
}

const DEBUG_OPTIMIZED: &[(&str, &str)] = &[
    ("SWIFT_OPTIMIZATION_LEVEL", "-Onone"),
    ("SWIFT_COMPILATION_MODE", "incremental"),
    ("ONLY_ACTIVE_ARCH", "YES"),
    ("ENABLE_TESTABILITY", "YES"),
    ("DEBUG_INFORMATION_FORMAT", "dwarf"),
];

const RELEASE_OPTIMIZED: &[(&str, &str)] = &[
    ("SWIFT_OPTIMIZATION_LEVEL", "-O"),
    ("SWIFT_COMPILATION_MODE", "wholemodule"),
    ("ONLY_ACTIVE_ARCH", "NO"),
    ("ENABLE_TESTABILITY", "NO"),
    ("DEBUG_INFORMATION_FORMAT", "dwarf-with-dsym"),
];

/// Evaluate the three threshold rules against the given metrics.
///
/// Rules are independent and may all fire; suggestions always come back in
/// rule-declaration order regardless of how far past a threshold the
/// metrics are.
pub fn analyze_build(metrics: &BuildMetrics) -> Vec<String> {
    let mut suggestions = Vec::new();

    if metrics.compilation_time / metrics.total_time > 0.5 {
        suggestions.push(
            "Compilation dominates the build; enable whole-module optimization \
             (SWIFT_COMPILATION_MODE=wholemodule)"
                .to_string(),
        );
    }
    if metrics.parallelization_efficiency < 0.6 {
        suggestions.push(
            "Parallelization efficiency is low; review target dependencies that \
             serialize compilation"
                .to_string(),
        );
    }
    if metrics.signing_time > 30.0 {
        suggestions.push(
            "Code signing is slow; consider disabling signing for development \
             builds (CODE_SIGNING_ALLOWED=NO)"
                .to_string(),
        );
    }

    suggestions
}

/// Static optimized-settings table for a build type.
///
/// Case-insensitive "debug" selects the debug table; any other string,
/// including "profile" and "staging", falls through to the release table.
pub fn optimized_settings(build_type: &str) -> &'static [(&'static str, &'static str)] {
    if build_type.to_lowercase() == "debug" {
        DEBUG_OPTIMIZED
    } else {
        RELEASE_OPTIMIZED
    }
}

/// Optimized settings rendered as space-joined `KEY=VALUE` pairs
pub fn optimized_settings_string(build_type: &str) -> String {
    optimized_settings(build_type)
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(" ")
}
