//! `DeviceIndex` newtype for threshold share reconstruction

use crate::error::RecoveryError;

/// Physical device index (1..=3)
///
/// The index doubles as the Shamir evaluation point of the device's shares,
/// so zero is invalid and the range is fixed by the 2-of-3 split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DeviceIndex(u8);

impl DeviceIndex {
    /// Minimum valid device index
    pub const MIN: u8 = 1;

    /// Maximum valid device index
    pub const MAX: u8 = 3;

    /// Creates a new device index
    ///
    /// # Errors
    /// Returns an error if the index is outside 1..=3
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solo_recover::domain::DeviceIndex;
    ///
    /// let index = DeviceIndex::new(2).unwrap();
    /// assert_eq!(*index, 2);
    ///
    /// assert!(DeviceIndex::new(0).is_err());
    /// assert!(DeviceIndex::new(4).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, RecoveryError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RecoveryError::InvalidDeviceIndex(value));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for DeviceIndex {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
