//! Sensor modules for the LIS3DHH
//!
//! This module provides types, enums, and configuration structures for the two
//! sensing elements of the LIS3DHH:
//! - Accelerometer (3-axis, ±2.5 g)
//! - Temperature sensor
//!
//! All bus operations are performed through methods on `Lis3dhhDriver`; the
//! conversions here are pure.

pub mod accelerometer;
pub mod temperature;

// Re-export main types
pub use accelerometer::{
    AccelConfig, AccelData, AccelDataMg, DataRate, FilterConfig, SelfTest, lsb_to_mg,
};
pub use temperature::lsb_to_celsius;
