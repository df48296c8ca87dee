//! `DeviceCount` newtype for the verification pipeline

use crate::error::RecoveryError;

/// Number of devices supplying shares (1..=3)
///
/// A count of 1 selects single-device mode, where each share is the bare
/// secret itself; 2 or 3 selects threshold reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DeviceCount(u8);

impl DeviceCount {
    /// Minimum valid device count
    pub const MIN: u8 = 1;

    /// Maximum valid device count
    pub const MAX: u8 = 3;

    /// Creates a new device count
    ///
    /// # Errors
    /// Returns an error if the count is outside 1..=3
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solo_recover::domain::DeviceCount;
    ///
    /// let count = DeviceCount::new(2).unwrap();
    /// assert_eq!(*count, 2);
    ///
    /// assert!(DeviceCount::new(0).is_err());
    /// assert!(DeviceCount::new(4).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, RecoveryError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RecoveryError::InvalidDeviceCount(value));
        }
        Ok(Self(value))
    }

    /// True when more than one device supplies shares.
    #[must_use]
    pub fn is_threshold(self) -> bool {
        self.0 > 1
    }
}

impl std::ops::Deref for DeviceCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
