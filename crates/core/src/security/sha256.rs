//! SHA-256 checksums for build artifacts

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::Result;
use crate::error::CoreError;

const BUFFER_SIZE: usize = 64 * 1024;

/// Where the expected checksum comes from
#[derive(Debug, Clone, Copy)]
pub enum ChecksumSource<'a> {
    /// A hex digest supplied directly
    Hash(&'a str),
    /// A `.sha256` file, "hash" or "hash  filename" format
    File(&'a Path),
}

/// Compute the SHA-256 digest of a file, reading in 64 KiB chunks
pub fn compute_sha256(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CoreError::FileNotFound(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(CoreError::NotAFile(path.display().to_string()));
    }

    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Verify a file against an expected checksum. Comparison is
/// case-insensitive.
pub fn verify_sha256(path: &Path, source: ChecksumSource<'_>) -> Result<bool> {
    let expected = match source {
        ChecksumSource::Hash(hash) => hash.trim().to_string(),
        ChecksumSource::File(checksum_file) => {
            if !checksum_file.exists() {
                return Err(CoreError::FileNotFound(
                    checksum_file.display().to_string(),
                ));
            }
            let content = fs::read_to_string(checksum_file)?;
            content
                .split_whitespace()
                .next()
                .map(str::to_string)
                .ok_or_else(|| CoreError::Checksum {
                    path: checksum_file.display().to_string(),
                    message: "checksum file is empty".to_string(),
                })?
        }
    };

    let actual = compute_sha256(path)?;
    Ok(actual.eq_ignore_ascii_case(&expected))
}

/// Write a `.sha256` file next to (or at the given path for) a file.
///
/// Output format is the conventional `hash  filename` line.
pub fn write_sha256_file(path: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let output_path = match output {
        Some(out) => out.to_path_buf(),
        None => PathBuf::from(format!("{}.sha256", path.display())),
    };

    let checksum = compute_sha256(path)?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    fs::write(&output_path, format!("{checksum}  {name}\n"))?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const HELLO_WORLD_SHA256: &str =
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

    fn temp_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_compute_known_digest() {
        let temp = TempDir::new().unwrap();
        let path = temp_file(&temp, "hello.txt", b"hello world");
        assert_eq!(compute_sha256(&path).unwrap(), HELLO_WORLD_SHA256);
    }

    #[test]
    fn test_compute_missing_file() {
        let err = compute_sha256(Path::new("/nonexistent/file")).unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound(_)));
    }

    #[test]
    fn test_compute_directory_is_rejected() {
        let temp = TempDir::new().unwrap();
        let err = compute_sha256(temp.path()).unwrap_err();
        assert!(matches!(err, CoreError::NotAFile(_)));
    }

    #[test]
    fn test_verify_with_hash_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let path = temp_file(&temp, "hello.txt", b"hello world");
        assert!(verify_sha256(&path, ChecksumSource::Hash(HELLO_WORLD_SHA256)).unwrap());
        let upper = HELLO_WORLD_SHA256.to_uppercase();
        assert!(verify_sha256(&path, ChecksumSource::Hash(&upper)).unwrap());
        assert!(!verify_sha256(&path, ChecksumSource::Hash("deadbeef")).unwrap());
    }

    #[test]
    fn test_verify_with_checksum_file() {
        let temp = TempDir::new().unwrap();
        let path = temp_file(&temp, "hello.txt", b"hello world");
        // "hash  filename" format
        let checksum_path = temp_file(
            &temp,
            "hello.txt.sha256",
            format!("{HELLO_WORLD_SHA256}  hello.txt\n").as_bytes(),
        );
        assert!(verify_sha256(&path, ChecksumSource::File(&checksum_path)).unwrap());
    }

    #[test]
    fn test_write_sha256_file_format() {
        let temp = TempDir::new().unwrap();
        let path = temp_file(&temp, "hello.txt", b"hello world");

        let written = write_sha256_file(&path, None).unwrap();
        assert_eq!(written, temp.path().join("hello.txt.sha256"));
        let content = fs::read_to_string(&written).unwrap();
        assert_eq!(content, format!("{HELLO_WORLD_SHA256}  hello.txt\n"));

        // Round-trips through verification
        assert!(verify_sha256(&path, ChecksumSource::File(&written)).unwrap());
    }
}
