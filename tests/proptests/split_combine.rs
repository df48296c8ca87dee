//! Property tests for split/reconstruct workflows

use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;

use solo_recover::codec;
use solo_recover::commands::split_for_devices;
use solo_recover::domain::{Component, DeviceIndex, NormalizedShare, ShareSet};
use solo_recover::error::RecoveryError;

/// A random valid pair of bare secrets, one per component
#[derive(Clone, Debug)]
struct ValidSecretPair {
    secret1: String,
    secret2: String,
}

fn arbitrary_secret(g: &mut Gen, component: Component) -> String {
    // Random bytes reduced into the field always encode at the bare length.
    let bytes: Vec<u8> = (0..32).map(|_| u8::arbitrary(g)).collect();
    let value = BigUint::from_bytes_be(&bytes) % component.modulus();
    codec::encode_value(&value, component.bare_len())
}

impl Arbitrary for ValidSecretPair {
    fn arbitrary(g: &mut Gen) -> Self {
        ValidSecretPair {
            secret1: arbitrary_secret(g, Component::One),
            secret2: arbitrary_secret(g, Component::Two),
        }
    }
}

fn reconstruct_component(
    component: Component,
    shares: &[(u8, &str)],
) -> Result<String, RecoveryError> {
    let mut validated = Vec::new();
    for (index, text) in shares {
        let device = DeviceIndex::new(*index)?;
        validated.push((device, NormalizedShare::parse(text, component, device)?));
    }
    Ok(ShareSet::new(component, validated)?
        .reconstruct()?
        .as_str()
        .to_string())
}

/// Any 2 of the 3 device shares reconstruct both original secrets exactly,
/// as does the full set of 3.
#[quickcheck]
fn prop_split_reconstruct_round_trip(pair: ValidSecretPair, seed: u64) -> bool {
    let mut rng = StdRng::seed_from_u64(seed);
    let Ok(shares) = split_for_devices(&pair.secret1, &pair.secret2, &mut rng) else {
        return false;
    };

    let selections: [&[usize]; 4] = [&[0, 1], &[0, 2], &[1, 2], &[0, 1, 2]];
    for selection in selections {
        let picked1: Vec<(u8, &str)> = selection
            .iter()
            .map(|&i| (shares[i].index, shares[i].share1.as_str()))
            .collect();
        let picked2: Vec<(u8, &str)> = selection
            .iter()
            .map(|&i| (shares[i].index, shares[i].share2.as_str()))
            .collect();

        if reconstruct_component(Component::One, &picked1) != Ok(pair.secret1.clone()) {
            return false;
        }
        if reconstruct_component(Component::Two, &picked2) != Ok(pair.secret2.clone()) {
            return false;
        }
    }
    true
}

/// Reconstruction is deterministic: the same share set yields the same
/// secret every time.
#[quickcheck]
fn prop_reconstruction_deterministic(pair: ValidSecretPair, seed: u64) -> bool {
    let mut rng = StdRng::seed_from_u64(seed);
    let Ok(shares) = split_for_devices(&pair.secret1, &pair.secret2, &mut rng) else {
        return false;
    };

    let picked: Vec<(u8, &str)> = shares
        .iter()
        .take(2)
        .map(|s| (s.index, s.share1.as_str()))
        .collect();

    reconstruct_component(Component::One, &picked)
        == reconstruct_component(Component::One, &picked)
}

/// Duplicate device indices are rejected before any interpolation happens.
#[quickcheck]
fn prop_duplicate_index_rejected(pair: ValidSecretPair, seed: u64) -> bool {
    let mut rng = StdRng::seed_from_u64(seed);
    let Ok(shares) = split_for_devices(&pair.secret1, &pair.secret2, &mut rng) else {
        return false;
    };

    let duplicated = [
        (shares[0].index, shares[0].share1.as_str()),
        (shares[0].index, shares[1].share1.as_str()),
    ];
    matches!(
        reconstruct_component(Component::One, &duplicated),
        Err(RecoveryError::DuplicateIndex { index: 1 })
    )
}
