use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use zeroize::Zeroizing;

use solo_recover::cli::{Cli, Commands};
use solo_recover::commands::{DeviceSecrets, recover_and_verify, split_for_devices};
use solo_recover::domain::DeviceIndex;

/// Read one secret from stdin (hidden input when a TTY is available)
fn read_secret(prompt: &str) -> Result<Zeroizing<String>> {
    let line = if atty::is(atty::Stream::Stdin) {
        eprintln!("{prompt}:");
        rpassword::read_password().context("Failed to read secret from stdin")?
    } else {
        // Non-interactive mode (piped input) - read directly from stdin
        let stdin = io::stdin();
        let mut buffer = String::new();
        stdin
            .lock()
            .read_line(&mut buffer)
            .context("Failed to read secret from stdin")?;
        buffer
    };
    Ok(Zeroizing::new(line.trim().to_string()))
}

/// Read a device index from stdin; indices are not secret so input stays visible
fn read_device_index(position: u8) -> Result<DeviceIndex> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Index of device {position} (1-3):");
    }
    let stdin = io::stdin();
    let mut buffer = String::new();
    stdin
        .lock()
        .read_line(&mut buffer)
        .context("Failed to read device index from stdin")?;
    let value: u8 = buffer
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a valid device index", buffer.trim()))?;
    Ok(DeviceIndex::new(value)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Verify { devices, address } => {
            let mut entries = Vec::new();
            for position in 1..=*devices {
                let index = if devices.is_threshold() {
                    read_device_index(position)?
                } else {
                    DeviceIndex::new(1)?
                };
                let secret1 = read_secret(&format!("Secret 1 of device {}", *index))?;
                let secret2 = read_secret(&format!("Secret 2 of device {}", *index))?;
                entries.push(DeviceSecrets {
                    index,
                    secret1,
                    secret2,
                });
            }

            recover_and_verify(&entries, &address)?;
            println!("Address matches the reconstructed key.");
        }
        Commands::Split => {
            let secret1 = read_secret("Secret 1 (28 characters)")?;
            let secret2 = read_secret("Secret 2 (14 characters)")?;

            let shares = split_for_devices(&secret1, &secret2, &mut rand::thread_rng())?;
            for device in &shares {
                println!("Device {}:", device.index);
                println!("  secret 1 share: {}", device.share1.as_str());
                println!("  secret 2 share: {}", device.share2.as_str());
            }
        }
    }

    Ok(())
}
