//! Source generation for parsed app requirements
//!
//! Renders a small SwiftUI or UIKit starter project in memory, and can
//! write it to disk as `<output>/<name>/<name>/` plus a stub
//! `.xcodeproj`. The stub `project.pbxproj` is just enough for Xcode to
//! recognize the directory; it carries no build phases.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::Result;
use crate::requirements::{AppRequirements, UiFramework};

/// What kind of file a [`ProjectFile`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Swift,
    Plist,
}

/// One generated file, with its path relative to the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub path: String,
    pub content: String,
    pub kind: FileKind,
}

/// A complete generated project, ready to write with [`write_project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStructure {
    pub name: String,
    pub files: Vec<ProjectFile>,
}

/// Generate the full set of source files for the given requirements.
///
/// SwiftUI projects get an `App` entry point and a `ContentView` whose
/// body follows the first parsed feature; UIKit projects get an
/// `AppDelegate` and a `ViewController`. Both get an `Info.plist`.
pub fn generate_project(requirements: &AppRequirements) -> ProjectStructure {
    let mut files = Vec::new();

    match requirements.ui_framework {
        UiFramework::SwiftUi => {
            files.push(swiftui_app_file(requirements));
            files.push(swiftui_content_view(requirements));
        }
        UiFramework::UiKit => {
            files.push(uikit_app_delegate());
            files.push(uikit_view_controller(requirements));
        }
    }
    files.push(info_plist(requirements));

    ProjectStructure {
        name: requirements.app_name.clone(),
        files,
    }
}

fn swiftui_app_file(requirements: &AppRequirements) -> ProjectFile {
    let name = &requirements.app_name;
    let content = format!(
        "import SwiftUI\n\n\
         @main\n\
         struct {name}: App {{\n    \
             var body: some Scene {{\n        \
                 WindowGroup {{\n            \
                     ContentView()\n        \
                 }}\n    \
             }}\n\
         }}\n"
    );
    ProjectFile {
        path: format!("{name}App.swift"),
        content,
        kind: FileKind::Swift,
    }
}

fn swiftui_content_view(requirements: &AppRequirements) -> ProjectFile {
    let body = view_body(requirements);
    let content = format!(
        "import SwiftUI\n\n\
         struct ContentView: View {{\n\
         {body}\n\
         }}\n\n\
         struct ContentView_Previews: PreviewProvider {{\n    \
             static var previews: some View {{\n        \
                 ContentView()\n    \
             }}\n\
         }}\n"
    );
    ProjectFile {
        path: "ContentView.swift".to_string(),
        content,
        kind: FileKind::Swift,
    }
}

const COUNTER_BODY: &str = r#"    @State private var count = 0

    var body: some View {
        VStack(spacing: 20) {
            Text("Counter: \(count)")
                .font(.largeTitle)
                .fontWeight(.bold)

            HStack(spacing: 20) {
                Button(action: {
                    count -= 1
                }) {
                    Image(systemName: "minus.circle.fill")
                        .font(.system(size: 50))
                }

                Button(action: {
                    count += 1
                }) {
                    Image(systemName: "plus.circle.fill")
                        .font(.system(size: 50))
                }
            }
        }
        .padding()
    }"#;

const WEATHER_BODY: &str = r#"    @State private var temperature = "72°F"
    @State private var condition = "Sunny"

    var body: some View {
        VStack(spacing: 20) {
            Image(systemName: "sun.max.fill")
                .font(.system(size: 100))
                .foregroundColor(.orange)

            Text(temperature)
                .font(.system(size: 60))
                .fontWeight(.bold)

            Text(condition)
                .font(.title)
                .foregroundColor(.secondary)
        }
        .padding()
    }"#;

fn view_body(requirements: &AppRequirements) -> String {
    match requirements.features.first().map(|f| f.name.as_str()) {
        Some("Counter") => COUNTER_BODY.to_string(),
        Some("WeatherDisplay") => WEATHER_BODY.to_string(),
        Some(_) => format!(
            "    var body: some View {{\n        \
                 VStack {{\n            \
                     Text(\"Welcome to {}\")\n                \
                         .font(.largeTitle)\n                \
                         .padding()\n        \
                 }}\n    \
             }}",
            requirements.app_name
        ),
        None => "    var body: some View {\n        \
                     Text(\"Hello, World!\")\n            \
                         .padding()\n    \
                 }"
        .to_string(),
    }
}

const APP_DELEGATE: &str = r#"import UIKit

@main
class AppDelegate: UIResponder, UIApplicationDelegate {

    func application(_ application: UIApplication, didFinishLaunchingWithOptions launchOptions: [UIApplication.LaunchOptionsKey: Any]?) -> Bool {
        return true
    }

    func application(_ application: UIApplication, configurationForConnecting connectingSceneSession: UISceneSession, options: UIScene.ConnectionOptions) -> UISceneConfiguration {
        return UISceneConfiguration(name: "Default Configuration", sessionRole: connectingSceneSession.role)
    }
}
"#;

fn uikit_app_delegate() -> ProjectFile {
    ProjectFile {
        path: "AppDelegate.swift".to_string(),
        content: APP_DELEGATE.to_string(),
        kind: FileKind::Swift,
    }
}

fn uikit_view_controller(requirements: &AppRequirements) -> ProjectFile {
    let name = &requirements.app_name;
    let content = format!(
        "import UIKit\n\n\
         class ViewController: UIViewController {{\n\n    \
             override func viewDidLoad() {{\n        \
                 super.viewDidLoad()\n        \
                 view.backgroundColor = .systemBackground\n\n        \
                 let label = UILabel()\n        \
                 label.text = \"Hello from {name}!\"\n        \
                 label.textAlignment = .center\n        \
                 label.translatesAutoresizingMaskIntoConstraints = false\n\n        \
                 view.addSubview(label)\n\n        \
                 NSLayoutConstraint.activate([\n            \
                     label.centerXAnchor.constraint(equalTo: view.centerXAnchor),\n            \
                     label.centerYAnchor.constraint(equalTo: view.centerYAnchor)\n        \
                 ])\n    \
             }}\n\
         }}\n"
    );
    ProjectFile {
        path: "ViewController.swift".to_string(),
        content,
        kind: FileKind::Swift,
    }
}

fn info_plist(requirements: &AppRequirements) -> ProjectFile {
    let mut plist = String::new();
    plist.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    plist.push_str(
        "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \
         \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
    );
    plist.push_str("<plist version=\"1.0\">\n<dict>\n");
    plist.push_str("    <key>CFBundleDevelopmentRegion</key>\n    <string>en</string>\n");
    plist.push_str("    <key>CFBundleDisplayName</key>\n");
    plist.push_str(&format!("    <string>{}</string>\n", requirements.app_name));
    plist.push_str("    <key>CFBundleExecutable</key>\n    <string>$(EXECUTABLE_NAME)</string>\n");
    plist.push_str(
        "    <key>CFBundleIdentifier</key>\n    <string>$(PRODUCT_BUNDLE_IDENTIFIER)</string>\n",
    );
    plist.push_str("    <key>CFBundleInfoDictionaryVersion</key>\n    <string>6.0</string>\n");
    plist.push_str("    <key>CFBundleName</key>\n    <string>$(PRODUCT_NAME)</string>\n");
    plist.push_str("    <key>CFBundlePackageType</key>\n    <string>APPL</string>\n");
    plist.push_str("    <key>CFBundleShortVersionString</key>\n    <string>1.0</string>\n");
    plist.push_str("    <key>CFBundleVersion</key>\n    <string>1</string>\n");
    plist.push_str("    <key>LSRequiresIPhoneOS</key>\n    <true/>\n");
    plist.push_str("    <key>UILaunchStoryboardName</key>\n    <string>LaunchScreen</string>\n");
    plist.push_str("    <key>UIRequiredDeviceCapabilities</key>\n    <array>\n");
    plist.push_str("        <string>armv7</string>\n    </array>\n");
    plist.push_str("    <key>UISupportedInterfaceOrientations</key>\n    <array>\n");
    plist.push_str("        <string>UIInterfaceOrientationPortrait</string>\n    </array>\n");
    plist.push_str("</dict>\n</plist>\n");

    ProjectFile {
        path: "Info.plist".to_string(),
        content: plist,
        kind: FileKind::Plist,
    }
}

// A minimal project marker. Xcode regenerates real object graphs; this
// only needs the magic header and an empty object table.
const PBXPROJ_STUB: &str = "// !$*UTF8*$!\n\
{\n\
    archiveVersion = 1;\n\
    classes = {\n\
    };\n\
    objectVersion = 55;\n\
    objects = {\n\
    };\n\
    rootObject = /* Project object */;\n\
}\n";

/// Write a generated project under `output_dir`.
///
/// Layout is `<output_dir>/<name>/<name>/<file>` for sources, with a
/// sibling `<name>.xcodeproj/project.pbxproj` stub. Returns the project
/// root directory.
pub fn write_project(project: &ProjectStructure, output_dir: &Path) -> Result<PathBuf> {
    let project_path = output_dir.join(&project.name);
    let src_path = project_path.join(&project.name);
    fs::create_dir_all(&src_path)?;

    for file in &project.files {
        let file_path = src_path.join(&file.path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, &file.content)?;
        debug!(path = %file_path.display(), "wrote project file");
    }

    let xcodeproj_path = project_path.join(format!("{}.xcodeproj", project.name));
    fs::create_dir_all(&xcodeproj_path)?;
    fs::write(xcodeproj_path.join("project.pbxproj"), PBXPROJ_STUB)?;
    debug!(path = %xcodeproj_path.display(), "wrote project stub");

    Ok(project_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::parse_requirements;
    use tempfile::TempDir;

    fn file_paths(project: &ProjectStructure) -> Vec<&str> {
        project.files.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn test_swiftui_project_files() {
        let reqs = parse_requirements("a counter app", UiFramework::SwiftUi);
        let project = generate_project(&reqs);

        assert_eq!(project.name, "CounterApp");
        assert_eq!(
            file_paths(&project),
            ["CounterAppApp.swift", "ContentView.swift", "Info.plist"]
        );
    }

    #[test]
    fn test_uikit_project_files() {
        let reqs = parse_requirements("a counter app", UiFramework::UiKit);
        let project = generate_project(&reqs);

        assert_eq!(
            file_paths(&project),
            ["AppDelegate.swift", "ViewController.swift", "Info.plist"]
        );
        assert!(project.files[0].content.contains("@main"));
        assert!(project.files[1].content.contains("Hello from CounterApp!"));
    }

    #[test]
    fn test_app_file_declares_entry_point() {
        let reqs = parse_requirements("a weather app", UiFramework::SwiftUi);
        let project = generate_project(&reqs);

        let app = &project.files[0];
        assert_eq!(app.kind, FileKind::Swift);
        assert!(app.content.contains("@main"));
        assert!(app.content.contains("struct WeatherApp: App"));
    }

    #[test]
    fn test_content_view_is_valid_swiftui() {
        let reqs = parse_requirements("a counter app", UiFramework::SwiftUi);
        let project = generate_project(&reqs);

        let view = &project.files[1];
        assert!(view.content.contains("import SwiftUI"));
        assert!(view.content.contains("struct ContentView"));
        assert!(view.content.contains("var body: some View"));
        // The counter feature drives the body
        assert!(view.content.contains("@State private var count = 0"));
    }

    #[test]
    fn test_generic_prompt_gets_welcome_view() {
        let reqs = parse_requirements("something novel", UiFramework::SwiftUi);
        let project = generate_project(&reqs);

        assert_eq!(project.name, "GeneratedApp");
        assert!(project.files[1].content.contains("Welcome to GeneratedApp"));
    }

    #[test]
    fn test_info_plist_embeds_display_name() {
        let reqs = parse_requirements("todo list", UiFramework::SwiftUi);
        let project = generate_project(&reqs);

        let plist = project.files.last().unwrap();
        assert_eq!(plist.kind, FileKind::Plist);
        assert!(plist.content.contains("<string>TodoApp</string>"));
        assert!(plist.content.contains("CFBundleIdentifier"));
    }

    #[test]
    fn test_write_project_layout() {
        let dir = TempDir::new().unwrap();
        let reqs = parse_requirements("a counter app", UiFramework::SwiftUi);
        let project = generate_project(&reqs);

        let root = write_project(&project, dir.path()).unwrap();
        assert_eq!(root, dir.path().join("CounterApp"));

        let src = root.join("CounterApp");
        assert!(src.join("CounterAppApp.swift").is_file());
        assert!(src.join("ContentView.swift").is_file());
        assert!(src.join("Info.plist").is_file());

        let pbxproj = root
            .join("CounterApp.xcodeproj")
            .join("project.pbxproj");
        let content = fs::read_to_string(pbxproj).unwrap();
        assert!(content.starts_with("// !$*UTF8*$!"));
    }
}
