//! Implementation of the `xcprompt checksum` command.

use std::path::Path;

use anyhow::{Context, Result};
use xcprompt_core::security::{ChecksumSource, compute_sha256, verify_sha256, write_sha256_file};

use crate::output::{print_error, print_success};

pub fn cmd_checksum(
    file: &Path,
    verify: Option<&str>,
    check_file: Option<&Path>,
    write: bool,
) -> Result<()> {
    if write {
        let written = write_sha256_file(file, None)
            .with_context(|| format!("Failed to write checksum for {}", file.display()))?;
        print_success(&format!("wrote {}", written.display()));
        return Ok(());
    }

    let source = match (verify, check_file) {
        (Some(hash), _) => Some(ChecksumSource::Hash(hash)),
        (None, Some(path)) => Some(ChecksumSource::File(path)),
        (None, None) => None,
    };

    match source {
        Some(source) => {
            let matches = verify_sha256(file, source)
                .with_context(|| format!("Failed to verify {}", file.display()))?;
            if matches {
                print_success("checksum matches");
            } else {
                print_error("checksum mismatch");
                std::process::exit(1);
            }
        }
        None => {
            let digest = compute_sha256(file)
                .with_context(|| format!("Failed to hash {}", file.display()))?;
            let name = file.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            println!("{digest}  {name}");
        }
    }

    Ok(())
}
