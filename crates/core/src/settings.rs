//! Settings file loading
//!
//! YAML file, then `XCPROMPT_*` environment overrides, then validation.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::configuration::BuildConfiguration;
use crate::error::CoreError;
use crate::Result;

/// `build:` section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuildSection {
    pub default_configuration: String,
    pub target_ios_version: String,
}

impl Default for BuildSection {
    fn default() -> Self {
        BuildSection {
            default_configuration: "Debug".to_string(),
            target_ios_version: "15.0".to_string(),
        }
    }
}

/// `output:` section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputSection {
    pub default_dir: String,
    pub clean_before_build: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        OutputSection {
            default_dir: "./output".to_string(),
            clean_before_build: true,
        }
    }
}

/// Tool settings, from file defaults plus environment overrides
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub build: BuildSection,
    pub output: OutputSection,
}

impl Settings {
    /// Load settings: YAML file if given and present, environment
    /// overrides, then validation.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut settings = match file {
            Some(path) if path.exists() => {
                let text = fs::read_to_string(path)?;
                serde_yaml::from_str(&text)?
            }
            _ => Settings::default(),
        };
        settings.apply_env_overrides();
        settings.validate()?;
        Ok(settings)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("XCPROMPT_CONFIGURATION") {
            self.build.default_configuration = value;
        }
        if let Ok(value) = env::var("XCPROMPT_OUTPUT_DIR") {
            self.output.default_dir = value;
        }
    }

    fn validate(&self) -> Result<()> {
        if BuildConfiguration::from_name(&self.build.default_configuration).is_none() {
            return Err(CoreError::InvalidSetting {
                field: "build.default_configuration",
                message: format!(
                    "'{}' is not one of Debug, Release, Profile, Staging",
                    self.build.default_configuration
                ),
            });
        }
        if self.build.target_ios_version.is_empty() {
            return Err(CoreError::InvalidSetting {
                field: "build.target_ios_version",
                message: "must not be empty".to_string(),
            });
        }
        if self.output.default_dir.is_empty() {
            return Err(CoreError::InvalidSetting {
                field: "output.default_dir",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.build.default_configuration, "Debug");
        assert_eq!(settings.build.target_ios_version, "15.0");
        assert_eq!(settings.output.default_dir, "./output");
        assert!(settings.output.clean_before_build);
    }

    #[test]
    #[serial]
    fn test_load_missing_file_uses_defaults() {
        let settings = Settings::load(Some(Path::new("/nonexistent/settings.yml"))).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    #[serial]
    fn test_load_from_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "build:\n  default_configuration: Release\noutput:\n  default_dir: ./dist\n  clean_before_build: false"
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.build.default_configuration, "Release");
        // Unset keys keep their defaults
        assert_eq!(settings.build.target_ios_version, "15.0");
        assert_eq!(settings.output.default_dir, "./dist");
        assert!(!settings.output.clean_before_build);
    }

    #[test]
    #[serial]
    fn test_invalid_configuration_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "build:\n  default_configuration: Banana").unwrap();

        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("build.default_configuration"));
    }

    // Environment overrides share process-global state, so both variables
    // are exercised in this single test.
    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            env::set_var("XCPROMPT_CONFIGURATION", "Staging");
            env::set_var("XCPROMPT_OUTPUT_DIR", "./env-out");
        }
        let settings = Settings::load(None).unwrap();
        unsafe {
            env::remove_var("XCPROMPT_CONFIGURATION");
            env::remove_var("XCPROMPT_OUTPUT_DIR");
        }
        assert_eq!(settings.build.default_configuration, "Staging");
        assert_eq!(settings.output.default_dir, "./env-out");
    }
}
