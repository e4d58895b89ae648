//! Archive and export workflow formatting

use std::collections::BTreeMap;

use crate::build::project_flag;

/// Distribution channel for archive export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMethod {
    AppStore,
    AdHoc,
    Development,
    Enterprise,
    Validation,
}

impl ExportMethod {
    /// Value of the `method` key in ExportOptions.plist
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportMethod::AppStore => "app-store",
            ExportMethod::AdHoc => "ad-hoc",
            ExportMethod::Development => "development",
            ExportMethod::Enterprise => "enterprise",
            ExportMethod::Validation => "validation",
        }
    }
}

/// Options rendered into ExportOptions.plist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub method: ExportMethod,
    pub team_id: Option<String>,
    /// Profile name by bundle identifier
    pub provisioning_profiles: BTreeMap<String, String>,
    pub include_bitcode: bool,
    pub upload_symbols: bool,
}

impl ExportOptions {
    pub fn new(method: ExportMethod) -> Self {
        ExportOptions {
            method,
            team_id: None,
            provisioning_profiles: BTreeMap::new(),
            include_bitcode: false,
            upload_symbols: true,
        }
    }
}

/// Format an `xcodebuild archive` invocation
pub fn archive_command(
    project: &str,
    scheme: &str,
    configuration: &str,
    archive_path: &str,
) -> String {
    format!(
        "xcodebuild archive \\\n    {} {} \\\n    -scheme {} \\\n    -configuration {} \\\n    -archivePath {} \\\n    -destination 'generic/platform=iOS'",
        project_flag(project),
        project,
        scheme,
        configuration,
        archive_path
    )
}

/// Format an `xcodebuild -exportArchive` invocation
pub fn export_command(archive_path: &str, export_path: &str, options_plist: &str) -> String {
    format!(
        "xcodebuild -exportArchive \\\n    -archivePath {} \\\n    -exportPath {} \\\n    -exportOptionsPlist {}",
        archive_path, export_path, options_plist
    )
}

fn plist_bool(value: bool) -> &'static str {
    if value { "<true/>" } else { "<false/>" }
}

/// Render ExportOptions.plist content.
///
/// Interpolated values (team ID, profile names, bundle IDs) are emitted
/// verbatim; a value containing `<`, `>` or `&` produces invalid XML.
pub fn export_options_plist(options: &ExportOptions) -> String {
    let mut plist = String::new();
    plist.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    plist.push_str(
        "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \
         \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
    );
    plist.push_str("<plist version=\"1.0\">\n<dict>\n");
    plist.push_str("    <key>method</key>\n");
    plist.push_str(&format!("    <string>{}</string>\n", options.method.as_str()));
    if let Some(team_id) = &options.team_id {
        plist.push_str("    <key>teamID</key>\n");
        plist.push_str(&format!("    <string>{team_id}</string>\n"));
    }
    plist.push_str("    <key>compileBitcode</key>\n");
    plist.push_str(&format!("    {}\n", plist_bool(options.include_bitcode)));
    plist.push_str("    <key>uploadSymbols</key>\n");
    plist.push_str(&format!("    {}\n", plist_bool(options.upload_symbols)));
    if !options.provisioning_profiles.is_empty() {
        plist.push_str("    <key>provisioningProfiles</key>\n    <dict>\n");
        for (bundle_id, profile) in &options.provisioning_profiles {
            plist.push_str(&format!("        <key>{bundle_id}</key>\n"));
            plist.push_str(&format!("        <string>{profile}</string>\n"));
        }
        plist.push_str("    </dict>\n");
    }
    plist.push_str("</dict>\n</plist>\n");
    plist
}

/// Compose the full archive workflow: make the output directory, archive,
/// export. Steps are list entries only; nothing checks that a step
/// succeeded before the next runs.
pub fn complete_workflow(
    project: &str,
    scheme: &str,
    configuration: &str,
    output_dir: &str,
) -> Vec<String> {
    let archive_path = format!("{output_dir}/{scheme}.xcarchive");
    vec![
        format!("mkdir -p {output_dir}"),
        archive_command(project, scheme, configuration, &archive_path),
        export_command(
            &archive_path,
            &format!("{output_dir}/export"),
            &format!("{output_dir}/ExportOptions.plist"),
        ),
    ]
}
