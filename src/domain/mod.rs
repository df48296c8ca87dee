//! Domain types for Solo secret-share recovery
//!
//! This module contains validated newtypes and the share pipeline types:
//! - [`Component`] - Which of the two device secrets a share encodes
//! - [`DeviceIndex`] - Physical device identifier (1..=3)
//! - [`DeviceCount`] - Number of devices supplying shares (1..=3)
//! - [`NormalizedShare`] - A single share after length/alphabet/checksum validation
//! - [`ShareSet`] - An index-unique collection of shares for one component
//! - [`Secret`] - A reconstructed component value

mod component;
mod device_count;
mod device_index;
mod share;

pub use component::Component;
pub use device_count::DeviceCount;
pub use device_index::DeviceIndex;
pub use share::{NormalizedShare, Secret, ShareSet};
