//! Share validation and secret reconstruction
//!
//! [`NormalizedShare::parse`] is the validation step for a single share
//! string: length, alphabet, and (for the 30-character form) checksum, after
//! which the checksum character is dropped. [`ShareSet`] groups the
//! validated shares of one component across devices, enforces index
//! uniqueness, and reconstructs the component value.

use zeroize::Zeroizing;

use super::{Component, DeviceIndex};
use crate::error::RecoveryError;
use crate::{codec, shamir};

/// A share that passed validation, with the checksum character stripped.
#[derive(Debug, Clone)]
pub struct NormalizedShare {
    text: Zeroizing<String>,
    checksummed: bool,
}

impl NormalizedShare {
    /// Validates a raw share string for the given component.
    ///
    /// Accepts the component's bare length (28 for component 1, 14 for
    /// component 2), which is returned unchanged, or the 30-character
    /// checksummed form, which is verified and truncated to 29 characters.
    ///
    /// # Errors
    /// `WrongLength` for any other length, `InvalidCharacter` for input
    /// outside the base58 alphabet, `ChecksumFailed` when the trailing
    /// character does not match.
    pub fn parse(
        input: &str,
        component: Component,
        device: DeviceIndex,
    ) -> Result<Self, RecoveryError> {
        let bare = component.bare_len();
        if input.len() != bare && input.len() != Component::CHECKSUMMED_LEN {
            return Err(RecoveryError::WrongLength {
                component: component.number(),
                device: *device,
                expected: bare,
                actual: input.len(),
            });
        }
        if !codec::is_base58(input) {
            return Err(RecoveryError::InvalidCharacter {
                component: component.number(),
                device: *device,
            });
        }
        if input.len() == bare {
            return Ok(Self {
                text: Zeroizing::new(input.to_string()),
                checksummed: false,
            });
        }
        if !codec::verify_checksum(input) {
            return Err(RecoveryError::ChecksumFailed {
                component: component.number(),
                device: *device,
            });
        }
        Ok(Self {
            text: Zeroizing::new(input[..Component::TRUNCATED_LEN].to_string()),
            checksummed: true,
        })
    }

    /// The normalized share text: the bare secret, or 29 characters with
    /// the checksum dropped.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the share was supplied in the 30-character checksummed form.
    #[must_use]
    pub fn is_checksummed(&self) -> bool {
        self.checksummed
    }
}

/// A reconstructed secret component.
///
/// Holds the exact ASCII text the key-stretching step consumes; wrapped in
/// `Zeroizing` so the buffer is wiped on every exit path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret(Zeroizing<String>);

impl Secret {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(Zeroizing::new(text.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated shares of one component, at most one per device.
///
/// Index uniqueness is enforced at construction whenever more than one
/// share is present, so reconstruction never sees duplicate evaluation
/// points.
#[derive(Debug)]
pub struct ShareSet {
    component: Component,
    shares: Vec<(DeviceIndex, NormalizedShare)>,
}

impl ShareSet {
    /// Groups validated shares for one component.
    ///
    /// # Errors
    /// `InvalidDeviceCount` for an empty or oversized set, `DuplicateIndex`
    /// when two shares claim the same device index in multi-share mode.
    pub fn new(
        component: Component,
        shares: Vec<(DeviceIndex, NormalizedShare)>,
    ) -> Result<Self, RecoveryError> {
        if shares.is_empty() || shares.len() > DeviceIndex::MAX as usize {
            return Err(RecoveryError::InvalidDeviceCount(
                u8::try_from(shares.len()).unwrap_or(u8::MAX),
            ));
        }
        for (position, (index, _)) in shares.iter().enumerate() {
            if shares[..position].iter().any(|(other, _)| other == index) {
                return Err(RecoveryError::DuplicateIndex { index: **index });
            }
        }
        Ok(Self { component, shares })
    }

    /// Reconstructs the component value.
    ///
    /// With a single share the share text is the secret and is returned
    /// unchanged. With two or three shares, each must be the checksummed
    /// form; the 29-character values are decoded, reduced into the
    /// component's field, and interpolated at x = 0, and the result is
    /// re-encoded at the bare length.
    ///
    /// # Errors
    /// `ShareNotChecksummed` when a bare-length share appears in multi-share
    /// mode.
    pub fn reconstruct(&self) -> Result<Secret, RecoveryError> {
        if self.shares.len() == 1 {
            let (_, share) = &self.shares[0];
            return Ok(Secret::new(share.as_str()));
        }

        let modulus = self.component.modulus();
        let mut points = Vec::with_capacity(self.shares.len());
        for (index, share) in &self.shares {
            if !share.is_checksummed() {
                return Err(RecoveryError::ShareNotChecksummed {
                    component: self.component.number(),
                    device: **index,
                });
            }
            let value =
                codec::decode_value(share.as_str()).ok_or(RecoveryError::InvalidCharacter {
                    component: self.component.number(),
                    device: **index,
                })?;
            points.push((**index, value % modulus));
        }

        let secret = shamir::interpolate_at_zero(&points, modulus);
        Ok(Secret::new(codec::encode_value(
            &secret,
            self.component.bare_len(),
        )))
    }
}
