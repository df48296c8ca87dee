//! Base58 value codec and the share checksum
//!
//! Shares and reconstructed secrets are fixed-length base58 strings: the
//! pure base-58 numeral of an integer, left-padded with `1` (the zero digit)
//! to the component's length. A 30-character share carries a one-character
//! checksum derived from double SHA-256 of the 29 preceding characters.
//!
//! The checksum character is `alphabet[int_le(sha256d(raw)) mod 58]`, where
//! the 32-byte digest is interpreted as a little-endian integer.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use sha2::{Digest, Sha256};

/// The Bitcoin base58 alphabet, in digit-value order.
pub const B58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Returns true if every character of `s` belongs to the base58 alphabet.
#[must_use]
pub fn is_base58(s: &str) -> bool {
    s.bytes().all(|b| B58_ALPHABET.contains(&b))
}

/// Decodes a base58 string as an integer value.
///
/// Leading `1` characters are zero digits and do not affect the value.
/// Returns `None` if any character is outside the alphabet.
#[must_use]
pub fn decode_value(s: &str) -> Option<BigUint> {
    let bytes = bs58::decode(s).into_vec().ok()?;
    Some(BigUint::from_bytes_be(&bytes))
}

/// Encodes an integer as a base58 numeral of exactly `length` characters,
/// left-padded with `1`.
///
/// Values whose numeral exceeds `length` characters are returned unpadded;
/// both field moduli lie below `58^length`, so reconstructed secrets always
/// fit.
#[must_use]
pub fn encode_value(value: &BigUint, length: usize) -> String {
    let digits = bs58::encode(value.to_bytes_be()).into_string();
    if digits.len() >= length {
        return digits;
    }
    let mut out = String::with_capacity(length);
    for _ in 0..length - digits.len() {
        out.push('1');
    }
    out.push_str(&digits);
    out
}

fn sha256d(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// Computes the single checksum character for `raw`.
#[must_use]
pub fn checksum_char(raw: &str) -> char {
    let digest = sha256d(raw.as_bytes());
    let index = (BigUint::from_bytes_le(&digest) % 58u8)
        .to_usize()
        .unwrap_or_else(|| unreachable!("residue mod 58 fits in usize"));
    B58_ALPHABET[index] as char
}

/// Appends the checksum character to `raw`.
#[must_use]
pub fn append_checksum(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 1);
    out.push_str(raw);
    out.push(checksum_char(raw));
    out
}

/// Verifies that the last character of `share` is the checksum of the rest.
#[must_use]
pub fn verify_checksum(share: &str) -> bool {
    if !share.is_ascii() || share.len() < 2 {
        return false;
    }
    let raw = &share[..share.len() - 1];
    share.as_bytes()[share.len() - 1] == checksum_char(raw) as u8
}
