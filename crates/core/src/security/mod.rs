//! Artifact verification: SHA-256 checksums and GPG signatures

mod gpg;
mod sha256;

pub use gpg::{SignOptions, gpg_available, sign_detached, verify_signature};
pub use sha256::{ChecksumSource, compute_sha256, verify_sha256, write_sha256_file};
