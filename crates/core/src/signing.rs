//! Signing settings formatting
//!
//! These builders format whatever they are given; an empty team ID or
//! identity is emitted verbatim rather than rejected.

/// Kind of a code-signing identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    Development,
    Distribution,
}

/// A code-signing identity as shown by `security find-identity`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningIdentity {
    pub name: String,
    pub team_id: Option<String>,
    pub kind: IdentityKind,
}

/// A provisioning profile, referenced by name and UUID.
///
/// The UUID is carried as-is; its format is never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningProfile {
    pub name: String,
    pub uuid: String,
    pub app_id: String,
    pub expiration: Option<String>,
}

/// Flags for automatic signing with the fixed "Apple Development" identity
pub fn automatic_signing_settings(team_id: &str) -> String {
    format!(
        "CODE_SIGN_STYLE=Automatic DEVELOPMENT_TEAM={team_id} \
         CODE_SIGN_IDENTITY=\"Apple Development\""
    )
}

/// Flags for manual signing with an explicit identity and profile
pub fn manual_signing_settings(identity: &SigningIdentity, profile: &ProvisioningProfile) -> String {
    format!(
        "CODE_SIGN_STYLE=Manual CODE_SIGN_IDENTITY=\"{}\" \
         PROVISIONING_PROFILE_SPECIFIER=\"{}\"",
        identity.name, profile.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_identity() -> SigningIdentity {
        SigningIdentity {
            name: "Apple Distribution: Example Corp (ABCDE12345)".to_string(),
            team_id: Some("ABCDE12345".to_string()),
            kind: IdentityKind::Distribution,
        }
    }

    fn sample_profile() -> ProvisioningProfile {
        ProvisioningProfile {
            name: "Example AdHoc".to_string(),
            uuid: "12345678-90ab-cdef-1234-567890abcdef".to_string(),
            app_id: "com.example.app".to_string(),
            expiration: None,
        }
    }

    #[test]
    fn test_automatic_signing_flags() {
        let flags = automatic_signing_settings("ABCDE12345");
        assert!(flags.contains("CODE_SIGN_STYLE=Automatic"));
        assert!(flags.contains("DEVELOPMENT_TEAM=ABCDE12345"));
        assert!(flags.contains("CODE_SIGN_IDENTITY=\"Apple Development\""));
    }

    #[test]
    fn test_automatic_signing_accepts_empty_team_id() {
        // Garbage in, garbage out: no validation happens here
        let flags = automatic_signing_settings("");
        assert!(flags.contains("DEVELOPMENT_TEAM= "));
    }

    #[test]
    fn test_manual_signing_flags() {
        let flags = manual_signing_settings(&sample_identity(), &sample_profile());
        assert!(flags.contains("CODE_SIGN_STYLE=Manual"));
        assert!(flags.contains("CODE_SIGN_IDENTITY=\"Apple Distribution: Example Corp (ABCDE12345)\""));
        assert!(flags.contains("PROVISIONING_PROFILE_SPECIFIER=\"Example AdHoc\""));
    }
}
