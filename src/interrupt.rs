//! Interrupt configuration and status
//!
//! The LIS3DHH has two interrupt pads. Each can carry any combination of:
//! - FIFO threshold reached
//! - FIFO full
//! - FIFO overrun
//! - Boot status
//! - Data ready
//!
//! INT1 can alternatively be turned into an input that triggers FIFO storage
//! (see [`Int1Mode::Trigger`]).
//!
//! # Example
//!
//! ```ignore
//! # use lis3dhh::{Lis3dhhDriver, interrupt::{InterruptRouting, PinMode}};
//! # let mut imu: Lis3dhhDriver<_> = todo!();
//! // Open-drain on INT1, data ready on INT1, FIFO watermark on INT2
//! imu.set_pin_mode(PinMode::Int1OpenDrainInt2PushPull)?;
//! imu.configure_int1(&InterruptRouting::data_ready_only())?;
//! imu.configure_int2(&InterruptRouting {
//!     fifo_threshold: true,
//!     ..Default::default()
//! })?;
//! # Ok::<(), lis3dhh::Error<()>>(())
//! ```

use derive_more::TryFrom;

/// INT1 pad function (`INT1_EXT` in INT1_CTRL)
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, TryFrom)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Int1Mode {
    /// INT1 drives interrupt flags
    #[default]
    Interrupt = 0,
    /// INT1 is an external asynchronous trigger input for the FIFO
    Trigger = 1,
}

/// Data-ready signal shape (`DRDY_PULSE` in CTRL_REG1)
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, TryFrom)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrdyNotification {
    /// Held until the output registers are read
    #[default]
    Latched = 0,
    /// Pulse of 1/4 ODR
    Pulsed = 1,
}

/// Interrupt pad electrical mode (`PP_OD` in CTRL_REG4)
///
/// Bit 1 of the field selects open-drain on INT1, bit 0 on INT2.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, TryFrom)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Both pads push-pull
    #[default]
    AllPushPull = 0,
    /// INT1 push-pull, INT2 open-drain
    Int1PushPullInt2OpenDrain = 1,
    /// INT1 open-drain, INT2 push-pull
    Int1OpenDrainInt2PushPull = 2,
    /// Both pads open-drain
    AllOpenDrain = 3,
}

impl PinMode {
    /// Whether INT1 is open-drain
    #[must_use]
    pub const fn int1_open_drain(self) -> bool {
        (self as u8) & 0b10 != 0
    }

    /// Whether INT2 is open-drain
    #[must_use]
    pub const fn int2_open_drain(self) -> bool {
        (self as u8) & 0b01 != 0
    }
}

/// Interrupt sources routed to one pad
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptRouting {
    /// FIFO threshold flag
    pub fifo_threshold: bool,
    /// FIFO full flag
    pub fifo_full: bool,
    /// FIFO overrun flag
    pub fifo_overrun: bool,
    /// Boot status
    pub boot: bool,
    /// Data ready
    pub data_ready: bool,
}

impl InterruptRouting {
    /// Create routing with only data ready enabled
    pub const fn data_ready_only() -> Self {
        Self {
            fifo_threshold: false,
            fifo_full: false,
            fifo_overrun: false,
            boot: false,
            data_ready: true,
        }
    }

    /// Create routing for FIFO batch reading
    pub const fn fifo_batch() -> Self {
        Self {
            fifo_threshold: true,
            fifo_full: false,
            fifo_overrun: true,
            boot: false,
            data_ready: false,
        }
    }

    /// Check if any source is routed
    #[must_use]
    pub const fn any(&self) -> bool {
        self.fifo_threshold || self.fifo_full || self.fifo_overrun || self.boot || self.data_ready
    }
}

/// Content of the STATUS register
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct Status {
    /// X-axis new data available
    pub x_data_available: bool,
    /// Y-axis new data available
    pub y_data_available: bool,
    /// Z-axis new data available
    pub z_data_available: bool,
    /// New data available on all axes
    pub xyz_data_available: bool,
    /// X-axis data overrun
    pub x_overrun: bool,
    /// Y-axis data overrun
    pub y_overrun: bool,
    /// Z-axis data overrun
    pub z_overrun: bool,
    /// Data overrun on any axis set
    pub xyz_overrun: bool,
}
