//! Error taxonomy for the recovery pipeline
//!
//! Every failure mode a verification attempt can hit maps to one variant
//! here. Messages are user-facing: the calling application displays them
//! verbatim and re-prompts. Nothing in the pipeline panics on user input.

use thiserror::Error;

/// Reasons a verification or split attempt is rejected.
///
/// `component` is 1 or 2 (which of the two device secrets), `device` is the
/// device index the share was entered for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoveryError {
    /// Share length is neither the component's bare length nor 30.
    #[error("secret {component} of device {device} should be of length {expected} or 30")]
    WrongLength {
        component: u8,
        device: u8,
        expected: usize,
        actual: usize,
    },

    /// Share contains characters outside the base58 alphabet.
    #[error("secret {component} of device {device} contains characters outside the base58 alphabet")]
    InvalidCharacter { component: u8, device: u8 },

    /// The trailing checksum character of a 30-character share does not match.
    #[error(
        "secret {component} of device {device} does not have a valid checksum, \
         verify that you entered the secret correctly"
    )]
    ChecksumFailed { component: u8, device: u8 },

    /// A bare-length share was supplied while combining multiple devices.
    /// Only the 30-character checksummed form carries a share of the split
    /// secret; the bare form is the secret itself.
    #[error(
        "secret {component} of device {device} must be the 30-character share \
         form when combining multiple devices"
    )]
    ShareNotChecksummed { component: u8, device: u8 },

    /// Two devices claim the same index.
    #[error("device index {index} was used more than once, each device must have a distinct index")]
    DuplicateIndex { index: u8 },

    /// Device index outside 1..=3.
    #[error("device index must be 1, 2 or 3 (got {0})")]
    InvalidDeviceIndex(u8),

    /// Device count outside 1..=3.
    #[error("device count must be between 1 and 3 (got {0})")]
    InvalidDeviceCount(u8),

    /// The expected address is not a valid Bitcoin address.
    #[error("the address is not valid")]
    InvalidAddressFormat,

    /// The reconstructed key does not correspond to the expected address.
    #[error(
        "the recomputed private key does not correspond to the address you \
         entered, please verify that the secret codes are correct"
    )]
    AddressMismatch,

    /// A bare secret handed to the splitter has the wrong length.
    #[error("secret {component} should be of length {expected} to be split")]
    SecretWrongLength {
        component: u8,
        expected: usize,
        actual: usize,
    },

    /// A bare secret handed to the splitter contains characters outside the
    /// base58 alphabet.
    #[error("secret {component} contains characters outside the base58 alphabet")]
    SecretInvalidCharacter { component: u8 },

    /// A bare secret handed to the splitter decodes to a value at or above
    /// the component's field modulus.
    #[error("secret {component} value is out of range for splitting")]
    SecretOutOfRange { component: u8 },
}
