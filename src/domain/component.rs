//! Secret component descriptors

use std::sync::LazyLock;

use num_bigint::BigUint;

/// Field modulus for component 1, the largest prime below `58^28`.
static MODULUS_28: LazyLock<BigUint> = LazyLock::new(|| {
    BigUint::parse_bytes(b"23767517358231570773047645414309870043308402671871", 10)
        .unwrap_or_else(|| unreachable!("modulus literal is valid decimal"))
});

/// Field modulus for component 2, the largest prime below `58^14`.
static MODULUS_14: LazyLock<BigUint> = LazyLock::new(|| {
    BigUint::parse_bytes(b"4875194084160298409672797", 10)
        .unwrap_or_else(|| unreachable!("modulus literal is valid decimal"))
});

/// One of the two independent secret components stored on each device.
///
/// Component 1 is a 28-character base58 value, component 2 a 14-character
/// one. Each component is secret-shared over its own prime field; both
/// primes lie just below the corresponding power of 58, so every field
/// element fits the bare length and every share value fits 29 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    One,
    Two,
}

impl Component {
    /// Length of a share carrying the trailing checksum character.
    pub const CHECKSUMMED_LEN: usize = 30;

    /// Length of a checksummed share after the checksum is dropped.
    pub const TRUNCATED_LEN: usize = 29;

    /// 1-based component number, used in error messages.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Component::One => 1,
            Component::Two => 2,
        }
    }

    /// Length of the bare (non-checksummed) secret value.
    #[must_use]
    pub fn bare_len(self) -> usize {
        match self {
            Component::One => 28,
            Component::Two => 14,
        }
    }

    /// The prime modulus the component is secret-shared over.
    #[must_use]
    pub fn modulus(self) -> &'static BigUint {
        match self {
            Component::One => &MODULUS_28,
            Component::Two => &MODULUS_14,
        }
    }
}
