//! Implementation of the `xcprompt signing` command.

use anyhow::{Result, bail};
use xcprompt_core::{
    IdentityKind, ProvisioningProfile, SigningIdentity, automatic_signing_settings,
    manual_signing_settings,
};

pub fn cmd_signing(
    team_id: Option<&str>,
    identity: Option<&str>,
    profile: Option<&str>,
) -> Result<()> {
    match (team_id, identity, profile) {
        (Some(team), _, _) => {
            println!("{}", automatic_signing_settings(team));
        }
        (None, Some(identity_name), Some(profile_name)) => {
            let identity = SigningIdentity {
                name: identity_name.to_string(),
                team_id: None,
                kind: IdentityKind::Distribution,
            };
            let profile = ProvisioningProfile {
                name: profile_name.to_string(),
                uuid: String::new(),
                app_id: String::new(),
                expiration: None,
            };
            println!("{}", manual_signing_settings(&identity, &profile));
        }
        _ => bail!("provide either --team-id or both --identity and --profile"),
    }
    Ok(())
}
