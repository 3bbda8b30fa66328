//! FIFO (First In First Out) buffer management
//!
//! The LIS3DHH has a 32-sample FIFO for acceleration data. Each slot holds one
//! complete X/Y/Z sample read back through the regular output registers.
//! This is useful for:
//! - Reducing interrupt frequency
//! - Buffering data during host MCU sleep
//! - Capturing samples around an external trigger (INT1 as input)
//!
//! The FIFO status flags are set by hardware and cleared only by draining the
//! FIFO or changing mode; there is no write path to `FIFO_SRC`.
//!
//! # Example
//!
//! ```ignore
//! # use lis3dhh::{Lis3dhhDriver, fifo::{FifoConfig, FifoMode}};
//! # let mut imu: Lis3dhhDriver<_> = todo!();
//! let config = FifoConfig {
//!     enable: true,
//!     mode: FifoMode::DynamicStream,
//!     watermark: 16,
//!     ..Default::default()
//! };
//! imu.configure_fifo(&config)?;
//!
//! // Later, drain in batches
//! let mut samples = heapless::Vec::new();
//! if imu.read_fifo_status()?.watermark_reached {
//!     imu.fifo_read(&mut samples)?;
//! }
//! # Ok::<(), lis3dhh::Error<()>>(())
//! ```

use derive_more::TryFrom;

/// FIFO depth in samples
pub const FIFO_DEPTH: usize = 32;

/// Largest watermark the 5-bit `FTH` field can hold
pub const MAX_WATERMARK: u8 = 31;

/// FIFO operating mode (`FMODE` in FIFO_CTRL)
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, TryFrom)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoMode {
    /// FIFO disabled, contents cleared
    #[default]
    Bypass = 0,
    /// Collect until full, then stop
    Fifo = 1,
    /// Stream until trigger, then FIFO mode
    StreamToFifo = 3,
    /// Bypass until trigger, then stream
    BypassToStream = 4,
    /// Stream with oldest sample dropped, read pointer follows level
    DynamicStream = 6,
}

/// FIFO configuration
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoConfig {
    /// Enable the FIFO memory (`FIFO_EN`)
    pub enable: bool,
    /// FIFO operating mode
    pub mode: FifoMode,
    /// Watermark threshold in samples (0-31)
    pub watermark: u8,
    /// Block the FIFO read window for SPI clocks above 6 MHz (`FIFO_SPI_HS_ON`)
    pub spi_high_speed: bool,
}

/// Decoded FIFO_SRC register
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoStatus {
    /// Number of unread samples (0-32)
    pub level: u8,
    /// FIFO overrun: at least one sample was overwritten
    pub overrun: bool,
    /// Level is equal to or above the watermark
    pub watermark_reached: bool,
}

impl FifoStatus {
    /// Check if the FIFO holds no samples
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.level == 0
    }

    /// Check if all FIFO slots are occupied
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.level as usize >= FIFO_DEPTH
    }
}
