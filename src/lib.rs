#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod registers;
pub mod sensors;

pub mod fifo;
pub mod interrupt;

// Re-export main types
pub use device::Lis3dhhDriver;
pub use interface::SpiInterface;
pub use sensors::{
    AccelConfig, AccelData, AccelDataMg, DataRate, FilterConfig, SelfTest, lsb_to_celsius,
    lsb_to_mg,
};

pub use fifo::{FIFO_DEPTH, FifoConfig, FifoMode, FifoStatus, MAX_WATERMARK};
pub use interrupt::{DrdyNotification, Int1Mode, InterruptRouting, PinMode, Status};

/// Expected value of `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0x11;

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device, passed through from the interface unchanged
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
    /// Invalid configuration parameter (value does not fit its register field)
    InvalidConfig,
    /// Initialization timed out (software reset did not self-clear)
    InitializationTimeout,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
