//! Prompt-to-requirements parsing
//!
//! Keyword matching over the lowercased prompt, same as the router. The
//! app name and feature tables are fixed; anything unrecognized falls
//! through to a generic app with a single main feature.

/// UI framework the generated sources target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiFramework {
    SwiftUi,
    UiKit,
}

impl UiFramework {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiFramework::SwiftUi => "swiftui",
            UiFramework::UiKit => "uikit",
        }
    }

    /// Parse a framework name, case-insensitively. Returns `None` for
    /// unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "swiftui" => Some(UiFramework::SwiftUi),
            "uikit" => Some(UiFramework::UiKit),
            _ => None,
        }
    }
}

/// One recognized feature, with the UI elements and behaviors it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppFeature {
    pub name: String,
    pub description: String,
    pub ui_elements: Vec<String>,
    pub functionality: Vec<String>,
}

impl AppFeature {
    fn new(name: &str, description: &str, ui_elements: &[&str], functionality: &[&str]) -> Self {
        AppFeature {
            name: name.to_string(),
            description: description.to_string(),
            ui_elements: ui_elements.iter().map(|s| s.to_string()).collect(),
            functionality: functionality.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Structured requirements extracted from a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRequirements {
    pub app_name: String,
    pub description: String,
    pub features: Vec<AppFeature>,
    pub ui_framework: UiFramework,
}

/// Parse a natural-language app description into requirements.
///
/// The original prompt is kept verbatim as the description.
pub fn parse_requirements(prompt: &str, framework: UiFramework) -> AppRequirements {
    AppRequirements {
        app_name: extract_app_name(prompt),
        description: prompt.to_string(),
        features: extract_features(prompt),
        ui_framework: framework,
    }
}

fn extract_app_name(prompt: &str) -> String {
    let lower = prompt.to_lowercase();

    let name = if lower.contains("counter") {
        "CounterApp"
    } else if lower.contains("weather") {
        "WeatherApp"
    } else if lower.contains("todo") || lower.contains("task") {
        "TodoApp"
    } else if lower.contains("photo") || lower.contains("gallery") {
        "PhotoGallery"
    } else {
        "GeneratedApp"
    };
    name.to_string()
}

fn extract_features(prompt: &str) -> Vec<AppFeature> {
    let lower = prompt.to_lowercase();
    let mut features = Vec::new();

    if lower.contains("counter") {
        features.push(AppFeature::new(
            "Counter",
            "Display and modify a counter value",
            &["label", "button", "button"],
            &["increment", "decrement", "display"],
        ));
    }
    if lower.contains("weather") {
        features.push(AppFeature::new(
            "WeatherDisplay",
            "Show weather information",
            &["label", "image", "text"],
            &["fetch_weather", "display_temperature", "display_conditions"],
        ));
    }
    if lower.contains("todo") || lower.contains("task") {
        features.push(AppFeature::new(
            "TaskList",
            "Manage a list of tasks",
            &["list", "text_field", "button"],
            &["add_task", "remove_task", "toggle_completion"],
        ));
    }

    if features.is_empty() {
        features.push(AppFeature::new(
            "MainFeature",
            "Main application functionality",
            &["view"],
            &["display"],
        ));
    }

    features
}
