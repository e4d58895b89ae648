//! Implementation of the `xcprompt sign` and `xcprompt verify-sig` commands.

use std::path::Path;

use anyhow::{Context, Result};
use xcprompt_core::security::{SignOptions, sign_detached, verify_signature};

use crate::output::{print_error, print_success};

pub fn cmd_sign(file: &Path, output: Option<&Path>, key_id: Option<&str>) -> Result<()> {
    let options = SignOptions {
        output,
        key_id,
        // Interactive pinentry; passphrase-over-stdin is library-only
        passphrase: None,
    };
    let signature = sign_detached(file, &options)
        .with_context(|| format!("Failed to sign {}", file.display()))?;
    print_success(&format!("wrote {}", signature.display()));
    Ok(())
}

pub fn cmd_verify_sig(file: &Path, signature: &Path, public_key: Option<&Path>) -> Result<()> {
    let valid = verify_signature(file, signature, public_key)
        .with_context(|| format!("Failed to verify {}", file.display()))?;
    if valid {
        print_success("signature is valid");
        Ok(())
    } else {
        print_error("signature is INVALID");
        std::process::exit(1);
    }
}
