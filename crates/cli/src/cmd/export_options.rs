//! Implementation of the `xcprompt export-options` command.

use anyhow::{Result, bail};
use xcprompt_core::{ExportMethod, ExportOptions, export_options_plist};

fn parse_method(name: &str) -> Option<ExportMethod> {
    match name.to_lowercase().as_str() {
        "app-store" => Some(ExportMethod::AppStore),
        "ad-hoc" => Some(ExportMethod::AdHoc),
        "development" => Some(ExportMethod::Development),
        "enterprise" => Some(ExportMethod::Enterprise),
        "validation" => Some(ExportMethod::Validation),
        _ => None,
    }
}

pub fn cmd_export_options(method: &str, team_id: Option<String>) -> Result<()> {
    let Some(method) = parse_method(method) else {
        bail!("unknown export method: {method} (expected app-store, ad-hoc, development, enterprise, or validation)");
    };

    let mut options = ExportOptions::new(method);
    options.team_id = team_id;
    print!("{}", export_options_plist(&options));
    Ok(())
}
