//! Property tests for share validation and the checksum

use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;

use solo_recover::codec;
use solo_recover::domain::{Component, DeviceIndex, NormalizedShare};
use solo_recover::error::RecoveryError;

/// Wrapper generating a random base58 string of the given length
fn arbitrary_base58(g: &mut Gen, length: usize) -> String {
    (0..length)
        .map(|_| {
            let index = usize::arbitrary(g) % codec::B58_ALPHABET.len();
            codec::B58_ALPHABET[index] as char
        })
        .collect()
}

/// A random bare-length share for component 1 (28 characters)
#[derive(Clone, Debug)]
struct BareShare1(String);

impl Arbitrary for BareShare1 {
    fn arbitrary(g: &mut Gen) -> Self {
        BareShare1(arbitrary_base58(g, Component::One.bare_len()))
    }
}

/// A random bare-length share for component 2 (14 characters)
#[derive(Clone, Debug)]
struct BareShare2(String);

impl Arbitrary for BareShare2 {
    fn arbitrary(g: &mut Gen) -> Self {
        BareShare2(arbitrary_base58(g, Component::Two.bare_len()))
    }
}

#[quickcheck]
fn prop_bare_share_validates_unchanged(share1: BareShare1, share2: BareShare2) -> bool {
    let device = DeviceIndex::new(1).unwrap();

    let parsed1 = NormalizedShare::parse(&share1.0, Component::One, device);
    let parsed2 = NormalizedShare::parse(&share2.0, Component::Two, device);

    parsed1.is_ok_and(|s| s.as_str() == share1.0 && !s.is_checksummed())
        && parsed2.is_ok_and(|s| s.as_str() == share2.0 && !s.is_checksummed())
}

#[quickcheck]
fn prop_unexpected_length_is_wrong_length(input: String) -> TestResult {
    if [14, 28, 30].contains(&input.len()) {
        return TestResult::discard();
    }
    let device = DeviceIndex::new(1).unwrap();

    for component in [Component::One, Component::Two] {
        match NormalizedShare::parse(&input, component, device) {
            Err(RecoveryError::WrongLength { .. }) => {}
            _ => return TestResult::failed(),
        }
    }
    TestResult::passed()
}

#[quickcheck]
fn prop_appended_checksum_always_verifies(share: BareShare1) -> bool {
    // Any 29-character raw value gains a valid 30th character.
    let raw = format!("{}5", share.0);
    let checksummed = codec::append_checksum(&raw);
    checksummed.len() == 30 && codec::verify_checksum(&checksummed)
}

#[quickcheck]
fn prop_checksummed_share_parses_truncated(share: BareShare1) -> bool {
    let raw = format!("{}Q", share.0);
    let input = codec::append_checksum(&raw);
    let device = DeviceIndex::new(2).unwrap();

    NormalizedShare::parse(&input, Component::One, device)
        .is_ok_and(|s| s.as_str() == raw && s.is_checksummed())
}

/// The checksum is a single base58 character, so a corruption slips through
/// roughly once in 58 attempts. Check the detection rate over many
/// single-character substitutions instead of asserting on any one flip.
#[test]
fn test_single_character_flip_detection_rate() {
    let raw = "4QkCy3uZeU8tq7VZJKc9N6mAhE37d";
    let share = codec::append_checksum(raw);
    assert_eq!(share.len(), 30);

    let mut false_positives = 0u32;
    let mut total = 0u32;

    // Substitute every alphabet character at every non-checksum position.
    for position in 0..29 {
        let original = share.as_bytes()[position];
        for &candidate in codec::B58_ALPHABET.iter() {
            if candidate == original {
                continue;
            }
            let mut corrupted = share.clone().into_bytes();
            corrupted[position] = candidate;
            let corrupted = String::from_utf8(corrupted).unwrap();

            total += 1;
            if codec::verify_checksum(&corrupted) {
                false_positives += 1;
            }
        }
    }

    // Expected rate is 1/58 (~1.7%); anything near 10% means the checksum
    // is not mixing its input.
    let rate = f64::from(false_positives) / f64::from(total);
    assert!(
        rate < 0.1,
        "false positive rate {rate:.4} over {total} corruptions"
    );
}
