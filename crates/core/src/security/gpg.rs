//! Detached GPG signing and verification via the `gpg` binary

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::Result;
use crate::error::CoreError;

/// Options for [`sign_detached`]
#[derive(Debug, Clone, Default)]
pub struct SignOptions<'a> {
    /// Signature output path; defaults to `<file>.asc`
    pub output: Option<&'a Path>,
    /// Key to sign with (`--local-user`)
    pub key_id: Option<&'a str>,
    /// Passphrase, fed over stdin rather than the command line
    pub passphrase: Option<&'a str>,
}

/// Whether a working `gpg` binary is on the PATH
pub fn gpg_available() -> bool {
    Command::new("gpg")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Verify a detached signature, optionally importing a public key first.
///
/// Returns `Ok(false)` for a bad signature; errors are reserved for missing
/// files and a missing `gpg` binary.
pub fn verify_signature(
    file: &Path,
    signature: &Path,
    public_key: Option<&Path>,
) -> Result<bool> {
    if !gpg_available() {
        return Err(CoreError::GpgUnavailable);
    }
    if !file.exists() {
        return Err(CoreError::FileNotFound(file.display().to_string()));
    }
    if !signature.exists() {
        return Err(CoreError::FileNotFound(signature.display().to_string()));
    }

    if let Some(key) = public_key {
        if !key.exists() {
            return Err(CoreError::FileNotFound(key.display().to_string()));
        }
        // Import failure is tolerated; the key may already be present
        let import = Command::new("gpg").arg("--import").arg(key).output()?;
        debug!(success = import.status.success(), "gpg key import");
    }

    let output = Command::new("gpg")
        .arg("--verify")
        .arg(signature)
        .arg(file)
        .output()?;
    Ok(output.status.success())
}

/// Create an armored detached signature for a file
pub fn sign_detached(file: &Path, options: &SignOptions<'_>) -> Result<PathBuf> {
    if !gpg_available() {
        return Err(CoreError::GpgUnavailable);
    }
    if !file.exists() {
        return Err(CoreError::FileNotFound(file.display().to_string()));
    }

    let output_path = match options.output {
        Some(out) => out.to_path_buf(),
        None => PathBuf::from(format!("{}.asc", file.display())),
    };

    let mut command = Command::new("gpg");
    command.args(["--detach-sign", "--armor"]);
    if let Some(key_id) = options.key_id {
        command.args(["--local-user", key_id]);
    }
    if options.passphrase.is_some() {
        command.args([
            "--batch",
            "--yes",
            "--pinentry-mode",
            "loopback",
            "--passphrase-fd",
            "0",
        ]);
    }
    command.arg("--output").arg(&output_path).arg(file);

    let output = if let Some(passphrase) = options.passphrase {
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        let mut child = command.spawn()?;
        child
            .stdin
            .take()
            .ok_or_else(|| CoreError::Gpg("failed to open gpg stdin".to_string()))?
            .write_all(passphrase.as_bytes())?;
        child.wait_with_output()?
    } else {
        command.output()?
    };

    if !output.status.success() {
        return Err(CoreError::Gpg(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }
    if !output_path.exists() {
        return Err(CoreError::Gpg(format!(
            "signature file was not created: {}",
            output_path.display()
        )));
    }
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Signing and verification need a configured keyring, so tests stick to
    // behavior that holds on any machine.

    #[test]
    fn test_gpg_available_does_not_panic() {
        let _ = gpg_available();
    }

    #[test]
    fn test_sign_missing_file_errors() {
        if !gpg_available() {
            return;
        }
        let err = sign_detached(Path::new("/nonexistent/artifact"), &SignOptions::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound(_)));
    }

    #[test]
    fn test_verify_missing_signature_errors() {
        if !gpg_available() {
            return;
        }
        let err = verify_signature(
            Path::new("/nonexistent/artifact"),
            Path::new("/nonexistent/artifact.asc"),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound(_)));
    }
}
