//! Key stretching, private-key derivation and address verification
//!
//! The two reconstructed component strings are each run through scrypt
//! (N = 16384, r = 8, p = 8, dkLen = 32, empty salt) and the two 32-byte
//! outputs, taken as big-endian integers, are summed modulo the secp256k1
//! curve order. The cost is deliberate: the components are low-entropy
//! enough that cheap derivation would invite brute-force guessing, so
//! callers must derive only on an explicit verify action, never per
//! keystroke.

use bitcoin::address::NetworkUnchecked;
use bitcoin::secp256k1::constants::CURVE_ORDER;
use bitcoin::secp256k1::{Secp256k1, SecretKey};
use bitcoin::{Address, Network, NetworkKind, PrivateKey};
use num_bigint::BigUint;
use scrypt::Params;
use zeroize::Zeroizing;

use crate::domain::Secret;

const SCRYPT_LOG_N: u8 = 14; // N = 16384
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 8;
const KEY_LEN: usize = 32;

/// A derived private key.
///
/// Lives only for the duration of one verification attempt; the bytes are
/// zeroized on drop and the type exposes no serialization surface.
pub struct RecoveredKey(Zeroizing<[u8; 32]>);

impl RecoveredKey {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

fn stretch(secret: &str) -> Zeroizing<[u8; 32]> {
    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_LEN)
        .unwrap_or_else(|_| unreachable!("scrypt parameters are fixed constants"));
    let mut output = Zeroizing::new([0u8; 32]);
    scrypt::scrypt(secret.as_bytes(), b"", &params, &mut output[..])
        .unwrap_or_else(|_| unreachable!("output length is a fixed constant"));
    output
}

/// Derives the private key from the two reconstructed components.
///
/// Deterministic and expensive by design (tens to hundreds of milliseconds).
#[must_use]
pub fn derive_key(secret1: &Secret, secret2: &Secret) -> RecoveredKey {
    let order = BigUint::from_bytes_be(&CURVE_ORDER);
    let stretched1 = stretch(secret1.as_str());
    let stretched2 = stretch(secret2.as_str());
    let sum = (BigUint::from_bytes_be(&stretched1[..]) + BigUint::from_bytes_be(&stretched2[..]))
        % order;

    let mut key = Zeroizing::new([0u8; 32]);
    let bytes = sum.to_bytes_be();
    key[KEY_LEN - bytes.len()..].copy_from_slice(&bytes);
    RecoveredKey(key)
}

/// Derives the compressed-pubkey mainnet P2PKH address for `key`.
///
/// Returns `None` for the negligible case where the key bytes are not a
/// valid secp256k1 scalar.
#[must_use]
pub fn derive_address(key: &RecoveredKey) -> Option<String> {
    let inner = SecretKey::from_slice(key.as_bytes()).ok()?;
    let secp = Secp256k1::new();
    let public = PrivateKey::new(inner, NetworkKind::Main).public_key(&secp);
    Some(Address::p2pkh(public.pubkey_hash(), NetworkKind::Main).to_string())
}

/// True iff the address derived from `key` equals `expected` exactly.
///
/// Never panics or errors; any failure, including a malformed expected
/// address, compares as unequal.
#[must_use]
pub fn verify_address(key: &RecoveredKey, expected: &str) -> bool {
    derive_address(key).is_some_and(|derived| derived == expected)
}

/// Syntactic pre-check that `address` is a valid mainnet address.
///
/// This is the collaborator-side format check the pipeline controller runs
/// before paying the derivation cost.
#[must_use]
pub fn is_valid_address(address: &str) -> bool {
    address
        .parse::<Address<NetworkUnchecked>>()
        .map(|parsed| parsed.is_valid_for_network(Network::Bitcoin))
        .unwrap_or(false)
}
