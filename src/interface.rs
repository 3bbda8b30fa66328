//! Bus interface implementation for the LIS3DHH
//!
//! The LIS3DHH only has an SPI port. This module implements the `device-driver`
//! register traits on top of an `embedded-hal` [`SpiDevice`](embedded_hal::spi::SpiDevice),
//! so the driver itself never sees the bus. Any other transport can be plugged
//! in by implementing `device_driver::RegisterInterface` directly.

use device_driver::RegisterInterface;

/// Read/write flag in the SPI address byte
const SPI_READ: u8 = 0x80;

/// Largest payload accepted in a single write
const MAX_WRITE_LEN: usize = 8;

/// SPI interface for the LIS3DHH
///
/// # Note on Chip Select
///
/// This interface uses the `SpiDevice` trait from `embedded-hal`, which manages
/// the chip select (CS) pin automatically. The CS pin is handled internally by
/// the SPI device implementation you provide, so you don't need to pass it separately.
///
/// If using `embedded-hal-bus`, you would typically create an `SpiDevice` like:
/// ```ignore
/// let spi_device = embedded_hal_bus::spi::ExclusiveDevice::new(spi_bus, cs_pin, delay);
/// let interface = SpiInterface::new(spi_device);
/// ```
///
/// Multi-byte reads rely on the device auto-incrementing the register address,
/// which is controlled by `IF_ADD_INC` in CTRL_REG1 (enabled at reset).
///
/// Writes carry at most 8 data bytes per call. Longer payloads trip a debug
/// assertion and are truncated in release builds.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI interface with the given SPI device
    ///
    /// The SPI device should already include chip select management via the
    /// `SpiDevice` trait (e.g., using `embedded_hal_bus::spi::ExclusiveDevice`).
    /// The LIS3DHH uses SPI mode 0 or 3.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the interface and return the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

/// Build the write frame: address byte followed by at most `MAX_WRITE_LEN` data bytes
///
/// Longer payloads are truncated. Every LIS3DHH register is one byte wide, so
/// the driver never writes more than one data byte.
fn write_frame(address: u8, write_data: &[u8], buffer: &mut [u8; MAX_WRITE_LEN + 1]) -> usize {
    debug_assert!(
        write_data.len() <= MAX_WRITE_LEN,
        "SPI write payload exceeds MAX_WRITE_LEN"
    );
    // MSB cleared selects a write
    buffer[0] = address & !SPI_READ;
    let len = write_data.len().min(MAX_WRITE_LEN);
    buffer[1..=len].copy_from_slice(&write_data[..len]);
    len
}

impl<SPI, E> RegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for SPI
        let command = [address | SPI_READ];
        let mut operations = [
            embedded_hal::spi::Operation::Write(&command),
            embedded_hal::spi::Operation::Read(read_data),
        ];

        self.spi.transaction(&mut operations)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for SPI
        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        let len = write_frame(address, write_data, &mut buffer);

        self.spi.write(&buffer[..=len])
    }
}

#[cfg(feature = "async")]
impl<SPI, E> device_driver::AsyncRegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal_async::spi::SpiDevice<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for SPI
        let command = [address | SPI_READ];
        let mut operations = [
            embedded_hal_async::spi::Operation::Write(&command),
            embedded_hal_async::spi::Operation::Read(read_data),
        ];

        self.spi.transaction(&mut operations).await
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for SPI
        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        let len = write_frame(address, write_data, &mut buffer);

        self.spi.write(&buffer[..=len]).await
    }
}
