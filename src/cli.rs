use clap::{Parser, Subcommand};

use crate::domain::DeviceCount;

/// Validates the device count (1 for single-device mode, 2-3 for threshold
/// reconstruction)
fn validate_device_count(s: &str) -> Result<DeviceCount, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    DeviceCount::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "solo-recover")]
#[command(about = "Reconstruct a Bitcoin key from Solo device secret shares and check it against an address")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify that device secrets reconstruct the key behind an address
    Verify {
        /// Number of devices the secrets come from (1, or 2-3 for threshold mode)
        #[arg(short, long, default_value = "1", value_parser = validate_device_count)]
        devices: DeviceCount,

        /// The address the reconstructed key is expected to control
        #[arg(short, long)]
        address: String,
    },
    /// Split a pair of bare secrets into three checksummed device shares
    Split,
}
