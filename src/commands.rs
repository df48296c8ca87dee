//! Pipeline controller
//!
//! Thin orchestration over the domain types: validate every share, enforce
//! index uniqueness, pre-check the address, reconstruct both components,
//! derive the key and compare addresses. The first failure wins and all
//! intermediate secret material is dropped on every exit path. No
//! algorithmic logic lives here.

use num_bigint::BigUint;
use rand::Rng;
use zeroize::Zeroizing;

use crate::domain::{Component, DeviceIndex, NormalizedShare, ShareSet};
use crate::error::RecoveryError;
use crate::{codec, keys, shamir};

/// The raw inputs entered for one physical device.
pub struct DeviceSecrets {
    pub index: DeviceIndex,
    pub secret1: Zeroizing<String>,
    pub secret2: Zeroizing<String>,
}

/// The 30-character share pair provisioned onto one device by a split.
#[derive(Debug)]
pub struct DeviceShares {
    pub index: u8,
    pub share1: Zeroizing<String>,
    pub share2: Zeroizing<String>,
}

/// Runs one verification attempt end to end.
///
/// `Ok(())` means the shares reconstruct the private key behind `address`.
/// One device means single-device mode (bare secrets); two or three devices
/// mean threshold reconstruction from checksummed shares.
///
/// # Errors
/// The first pipeline failure, in validation order: share shape and
/// checksum per device, duplicate indices, address format, and finally
/// `AddressMismatch` when the derived key does not control `address`.
pub fn recover_and_verify(
    devices: &[DeviceSecrets],
    address: &str,
) -> Result<(), RecoveryError> {
    if devices.is_empty() || devices.len() > DeviceIndex::MAX as usize {
        return Err(RecoveryError::InvalidDeviceCount(
            u8::try_from(devices.len()).unwrap_or(u8::MAX),
        ));
    }

    let mut shares1 = Vec::with_capacity(devices.len());
    let mut shares2 = Vec::with_capacity(devices.len());
    for device in devices {
        let share1 = NormalizedShare::parse(&device.secret1, Component::One, device.index)?;
        let share2 = NormalizedShare::parse(&device.secret2, Component::Two, device.index)?;
        shares1.push((device.index, share1));
        shares2.push((device.index, share2));
    }

    // ShareSet::new rejects duplicate indices before any reconstruction.
    let set1 = ShareSet::new(Component::One, shares1)?;
    let set2 = ShareSet::new(Component::Two, shares2)?;

    if !keys::is_valid_address(address) {
        return Err(RecoveryError::InvalidAddressFormat);
    }

    let secret1 = set1.reconstruct()?;
    let secret2 = set2.reconstruct()?;

    let key = keys::derive_key(&secret1, &secret2);
    if keys::verify_address(&key, address) {
        Ok(())
    } else {
        Err(RecoveryError::AddressMismatch)
    }
}

/// Splits a pair of bare secrets into three checksummed device share pairs.
///
/// Any two of the three returned devices suffice to reconstruct both
/// components through [`recover_and_verify`].
///
/// # Errors
/// `SecretWrongLength` or `SecretInvalidCharacter` for malformed input,
/// `SecretOutOfRange` when a secret decodes at or above its field modulus.
pub fn split_for_devices<R: Rng + ?Sized>(
    secret1: &str,
    secret2: &str,
    rng: &mut R,
) -> Result<Vec<DeviceShares>, RecoveryError> {
    let value1 = bare_secret_value(secret1, Component::One)?;
    let value2 = bare_secret_value(secret2, Component::Two)?;

    let split1 = shamir::split(&value1, Component::One.modulus(), rng);
    let split2 = shamir::split(&value2, Component::Two.modulus(), rng);

    Ok(split1
        .iter()
        .zip(split2.iter())
        .map(|((x, y1), (_, y2))| DeviceShares {
            index: *x,
            share1: encode_share(y1),
            share2: encode_share(y2),
        })
        .collect())
}

fn encode_share(value: &BigUint) -> Zeroizing<String> {
    Zeroizing::new(codec::append_checksum(&codec::encode_value(
        value,
        Component::TRUNCATED_LEN,
    )))
}

fn bare_secret_value(secret: &str, component: Component) -> Result<BigUint, RecoveryError> {
    if secret.len() != component.bare_len() {
        return Err(RecoveryError::SecretWrongLength {
            component: component.number(),
            expected: component.bare_len(),
            actual: secret.len(),
        });
    }
    let value = codec::decode_value(secret).ok_or(RecoveryError::SecretInvalidCharacter {
        component: component.number(),
    })?;
    if value >= *component.modulus() {
        return Err(RecoveryError::SecretOutOfRange {
            component: component.number(),
        });
    }
    Ok(value)
}
