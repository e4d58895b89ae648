//! Implementation of the `xcprompt devices` command.

use anyhow::{Result, bail};
use xcprompt_core::Platform;

const ALL_PLATFORMS: [Platform; 6] = [
    Platform::IosSimulator,
    Platform::Ios,
    Platform::MacOs,
    Platform::WatchOsSimulator,
    Platform::TvOsSimulator,
    Platform::VisionOsSimulator,
];

fn print_platform(platform: Platform) {
    println!("{}:", platform.as_str());
    for device in platform.default_devices() {
        println!("  {device}");
    }
}

pub fn cmd_devices(platform: Option<&str>) -> Result<()> {
    match platform {
        Some(name) => match Platform::from_name(name) {
            Some(platform) => print_platform(platform),
            None => bail!("unknown platform: {name}"),
        },
        None => {
            for platform in ALL_PLATFORMS {
                print_platform(platform);
            }
        }
    }
    Ok(())
}
