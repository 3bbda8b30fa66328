//! Accelerometer sensor types and configuration
//!
//! Provides types, enums, and utility functions for the LIS3DHH's 3-axis accelerometer.
//! The sensor has a single fixed full scale, so one sensitivity applies to every sample.

use derive_more::TryFrom;

/// Sensitivity in mg/LSB (fixed ±2.5 g full scale)
pub const SENSITIVITY_MG_PER_LSB: f32 = 0.076;

/// Convert a raw acceleration sample to milli-g
#[must_use]
pub fn lsb_to_mg(lsb: i16) -> f32 {
    f32::from(lsb) * SENSITIVITY_MG_PER_LSB
}

/// Output data rate (`NORM_MOD_EN` in CTRL_REG1)
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, TryFrom)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    /// Power-down mode, no sampling
    #[default]
    PowerDown = 0,
    /// Normal mode, 1.1 kHz
    Hz1100 = 1,
}

/// Digital filter phase and bandwidth (`DSP` in CTRL_REG4)
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, TryFrom)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterConfig {
    /// Linear phase FIR, 440 Hz bandwidth
    #[default]
    LinearPhase440Hz = 0,
    /// Linear phase FIR, 235 Hz bandwidth
    LinearPhase235Hz = 1,
    /// Non-linear phase IIR, 440 Hz bandwidth
    NonLinearPhase440Hz = 2,
    /// Non-linear phase IIR, 235 Hz bandwidth
    NonLinearPhase235Hz = 3,
}

impl FilterConfig {
    /// Get the filter bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> u16 {
        match self {
            Self::LinearPhase440Hz | Self::NonLinearPhase440Hz => 440,
            Self::LinearPhase235Hz | Self::NonLinearPhase235Hz => 235,
        }
    }
}

/// Self-test mode (`ST` in CTRL_REG4)
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, TryFrom)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelfTest {
    /// Normal operation
    #[default]
    Disabled = 0,
    /// Positive electrostatic deflection
    Positive = 1,
    /// Negative electrostatic deflection
    Negative = 2,
}

/// Accelerometer configuration
///
/// Applied by `Lis3dhhDriver::configure` in one read-modify-write of CTRL_REG1
/// and one of CTRL_REG4.
///
/// `Default` is the chip reset state (power-down). Use
/// [`AccelConfig::continuous`] to start sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    /// Output data rate
    pub data_rate: DataRate,
    /// Digital filter selection
    pub filter: FilterConfig,
    /// Block data update
    pub block_data_update: bool,
    /// Register address auto-increment (required for burst reads)
    pub auto_increment: bool,
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self {
            data_rate: DataRate::PowerDown,
            filter: FilterConfig::LinearPhase440Hz,
            block_data_update: false,
            auto_increment: true,
        }
    }
}

impl AccelConfig {
    /// Continuous 1.1 kHz sampling with block data update
    #[must_use]
    pub const fn continuous() -> Self {
        Self {
            data_rate: DataRate::Hz1100,
            filter: FilterConfig::LinearPhase440Hz,
            block_data_update: true,
            auto_increment: true,
        }
    }
}

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

impl AccelData {
    /// Decode one output block (`OUT_X_L` .. `OUT_Z_H`, little-endian per axis)
    #[must_use]
    pub const fn from_le_bytes(buffer: [u8; 6]) -> Self {
        Self {
            x: i16::from_le_bytes([buffer[0], buffer[1]]),
            y: i16::from_le_bytes([buffer[2], buffer[3]]),
            z: i16::from_le_bytes([buffer[4], buffer[5]]),
        }
    }
}

/// Accelerometer data in physical units (milli-g)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataMg {
    /// X-axis acceleration in mg
    pub x: f32,
    /// Y-axis acceleration in mg
    pub y: f32,
    /// Z-axis acceleration in mg
    pub z: f32,
}

impl From<AccelData> for AccelDataMg {
    fn from(raw: AccelData) -> Self {
        Self {
            x: lsb_to_mg(raw.x),
            y: lsb_to_mg(raw.y),
            z: lsb_to_mg(raw.z),
        }
    }
}

impl AccelDataMg {
    /// Get the magnitude of the acceleration vector in mg
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
