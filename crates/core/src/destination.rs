//! Destination descriptors and prompt-to-destination matching

use std::fmt;

/// Target platforms for `-destination`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    IosSimulator,
    Ios,
    MacOs,
    WatchOsSimulator,
    TvOsSimulator,
    VisionOsSimulator,
}

impl Platform {
    /// The platform name as it appears in a destination descriptor
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::IosSimulator => "iOS Simulator",
            Platform::Ios => "iOS",
            Platform::MacOs => "macOS",
            Platform::WatchOsSimulator => "watchOS Simulator",
            Platform::TvOsSimulator => "tvOS Simulator",
            Platform::VisionOsSimulator => "visionOS Simulator",
        }
    }

    /// Look up a platform by common name ("ios", "macos", ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "ios" | "ios simulator" | "iphone" | "ipad" => Some(Platform::IosSimulator),
            "ios device" => Some(Platform::Ios),
            "macos" | "mac" => Some(Platform::MacOs),
            "watchos" | "watch" => Some(Platform::WatchOsSimulator),
            "tvos" | "tv" => Some(Platform::TvOsSimulator),
            "visionos" | "vision" => Some(Platform::VisionOsSimulator),
            _ => None,
        }
    }

    /// Canonical list of representative device names for this platform.
    ///
    /// These are hardcoded, not queried from any live device list.
    pub fn default_devices(&self) -> &'static [&'static str] {
        match self {
            Platform::IosSimulator => &[
                "iPhone 14",
                "iPhone 14 Pro",
                "iPhone 14 Pro Max",
                "iPad Pro (12.9-inch)",
            ],
            Platform::Ios => &["Any iOS Device"],
            Platform::MacOs => &["My Mac"],
            Platform::WatchOsSimulator => &[
                "Apple Watch Series 8 (45mm)",
                "Apple Watch Ultra (49mm)",
            ],
            Platform::TvOsSimulator => &["Apple TV 4K (3rd generation)"],
            Platform::VisionOsSimulator => &["Apple Vision Pro"],
        }
    }
}

/// A platform/device/OS combination for a build tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub platform: Platform,
    pub device: String,
    pub os_version: Option<String>,
}

impl Destination {
    pub fn new(platform: Platform, device: impl Into<String>) -> Self {
        Destination {
            platform,
            device: device.into(),
            os_version: None,
        }
    }

    /// Shorthand for an iOS Simulator destination
    pub fn ios_simulator(device: impl Into<String>) -> Self {
        Destination::new(Platform::IosSimulator, device)
    }

    pub fn with_os_version(mut self, version: impl Into<String>) -> Self {
        self.os_version = Some(version.into());
        self
    }

    /// Render as `platform=<p>,name=<d>[,OS=<v>]`
    pub fn descriptor(&self) -> String {
        match &self.os_version {
            Some(version) => format!(
                "platform={},name={},OS={}",
                self.platform.as_str(),
                self.device,
                version
            ),
            None => format!("platform={},name={}", self.platform.as_str(), self.device),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor())
    }
}

/// Pick a destination from prompt text by ordered substring checks.
///
/// The first matching branch wins, so a prompt mentioning both "ipad" and
/// "mac" resolves to the iPad simulator. Returns `None` when nothing
/// matches.
pub fn parse_destination(prompt: &str) -> Option<Destination> {
    let lower = prompt.to_lowercase();

    if lower.contains("iphone") || lower.contains("ios") {
        let device = if lower.contains("14 pro") {
            "iPhone 14 Pro"
        } else {
            "iPhone 14"
        };
        Some(Destination::ios_simulator(device))
    } else if lower.contains("ipad") {
        Some(Destination::ios_simulator("iPad Pro (12.9-inch)"))
    } else if lower.contains("mac") {
        Some(Destination::new(Platform::MacOs, "My Mac"))
    } else if lower.contains("watch") {
        Some(Destination::new(
            Platform::WatchOsSimulator,
            "Apple Watch Series 8 (45mm)",
        ))
    } else if lower.contains("tv") {
        Some(Destination::new(
            Platform::TvOsSimulator,
            "Apple TV 4K (3rd generation)",
        ))
    } else if lower.contains("vision") {
        Some(Destination::new(
            Platform::VisionOsSimulator,
            "Apple Vision Pro",
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iphone_14_pro() {
        let dest = parse_destination("iPhone 14 Pro").unwrap();
        assert_eq!(dest.platform, Platform::IosSimulator);
        assert_eq!(dest.device, "iPhone 14 Pro");
    }

    #[test]
    fn test_parse_iphone_defaults_to_iphone_14() {
        let dest = parse_destination("run on iphone").unwrap();
        assert_eq!(dest.device, "iPhone 14");
    }

    #[test]
    fn test_parse_ipad() {
        let dest = parse_destination("iPad").unwrap();
        assert_eq!(dest.platform, Platform::IosSimulator);
        assert_eq!(dest.device, "iPad Pro (12.9-inch)");
    }

    #[test]
    fn test_parse_no_match() {
        assert_eq!(parse_destination("nonsense"), None);
    }

    #[test]
    fn test_parse_first_branch_wins() {
        // "ipad" is checked before "mac", so the iPad branch wins
        let dest = parse_destination("build for ipad and mac").unwrap();
        assert_eq!(dest.device, "iPad Pro (12.9-inch)");
    }

    #[test]
    fn test_descriptor_without_os() {
        let dest = Destination::ios_simulator("iPhone 14");
        assert_eq!(dest.descriptor(), "platform=iOS Simulator,name=iPhone 14");
    }

    #[test]
    fn test_descriptor_with_os() {
        let dest = Destination::ios_simulator("iPhone 14").with_os_version("16.4");
        assert_eq!(
            dest.descriptor(),
            "platform=iOS Simulator,name=iPhone 14,OS=16.4"
        );
    }

    #[test]
    fn test_default_devices_nonempty() {
        for platform in [
            Platform::IosSimulator,
            Platform::Ios,
            Platform::MacOs,
            Platform::WatchOsSimulator,
            Platform::TvOsSimulator,
            Platform::VisionOsSimulator,
        ] {
            assert!(!platform.default_devices().is_empty());
        }
    }
}
