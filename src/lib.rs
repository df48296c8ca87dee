// Library used by the solo-recover binary and its tests.
// The pipeline is pure: validate shares, reconstruct the two secret
// components, derive the private key, verify the address.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod keys;
pub mod shamir;

pub use error::RecoveryError;
