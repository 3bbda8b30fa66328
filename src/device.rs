//! High-level driver API for the LIS3DHH
//!
//! This module provides one accessor per configuration field of the LIS3DHH,
//! plus burst reads of the output registers and a few convenience helpers.
//!
//! ## Register access contract
//!
//! - Every `set_*` method reads the whole register, changes only its own
//!   bit-field and writes the register back. If the read fails the write is
//!   never issued and the bus error is returned.
//! - Every `read_*` method reads the register and decodes the field. Field
//!   values the device should never report decode to the first (reset) variant
//!   of the corresponding enum instead of failing.
//! - Bus errors are passed through unchanged as [`Error::Bus`].
//!
//! ## Concurrency
//!
//! The read-modify-write sequence is two separate bus transactions. The driver
//! holds `&mut self` across both, but nothing prevents another bus master (or a
//! second handle on a shared bus) from writing the same register in between.
//! Callers sharing the device must serialize access themselves.
//!
//! The driver mirrors no device state: power mode, FIFO mode and every other
//! setting live on the chip only.

use crate::fifo::{FIFO_DEPTH, FifoConfig, FifoMode, FifoStatus, MAX_WATERMARK};
use crate::interrupt::{DrdyNotification, Int1Mode, InterruptRouting, PinMode, Status};
use crate::registers::Lis3dhh as RegisterDevice;
use crate::registers::{OUT_TEMP_L, OUT_X_L_XL};
use crate::sensors::temperature;
use crate::sensors::{AccelConfig, AccelData, AccelDataMg, DataRate, FilterConfig, SelfTest};
use crate::{Error, WHO_AM_I_VALUE};

// Only import RegisterInterface when not using async feature
#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Upper bound on the software reset duration
const RESET_TIMEOUT_MS: u32 = 100;
/// Polling interval while waiting for `SW_RESET` to self-clear
const RESET_POLL_INTERVAL_MS: u32 = 1;

/// Main driver for the LIS3DHH
pub struct Lis3dhhDriver<I> {
    device: RegisterDevice<I>,
}

impl<I> Lis3dhhDriver<I> {
    /// Create a driver without checking the `WHO_AM_I` register
    ///
    /// No bus traffic is generated.
    pub fn new_unchecked(interface: I) -> Self {
        Self {
            device: RegisterDevice::new(interface),
        }
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }
}

#[cfg(not(feature = "async"))]
impl<I> Lis3dhhDriver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new LIS3DHH driver instance
    ///
    /// This will verify the `WHO_AM_I` register but will not configure the device.
    /// Call `init()` after construction for a known starting state.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The `WHO_AM_I` register contains an unexpected value
    pub fn new(interface: I) -> Result<Self, Error<I::Error>> {
        let mut driver = Self::new_unchecked(interface);

        let who_am_i = driver.read_device_id()?;
        if who_am_i != WHO_AM_I_VALUE {
            #[cfg(feature = "defmt")]
            defmt::warn!("Unexpected WHO_AM_I: {=u8:#x}", who_am_i);
            return Err(Error::InvalidDevice(who_am_i));
        }

        Ok(driver)
    }

    /// Initialize the device
    ///
    /// Issues a software reset, waits for `SW_RESET` to self-clear, then enables
    /// register address auto-increment and block data update. The device is left
    /// in power-down; call [`set_data_rate`](Self::set_data_rate) or
    /// [`configure`](Self::configure) to start sampling.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns the bus error if any transfer fails, including the polling reads,
    /// or `InitializationTimeout` if the reset bit does not clear within 100 ms.
    pub fn init<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.set_reset(true)?;

        for _ in 0..(RESET_TIMEOUT_MS / RESET_POLL_INTERVAL_MS) {
            delay.delay_ms(RESET_POLL_INTERVAL_MS);
            let ctrl = self.device.ctrl_reg_1().read()?;
            if !ctrl.sw_reset() {
                self.device.ctrl_reg_1().modify(|w| {
                    w.set_if_add_inc(true);
                    w.set_bdu(true);
                })?;

                #[cfg(feature = "defmt")]
                defmt::debug!("LIS3DHH reset complete");

                return Ok(());
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("LIS3DHH software reset did not complete");

        Err(Error::InitializationTimeout)
    }

    /// Apply an accelerometer configuration
    ///
    /// Data rate, block data update and auto-increment go to CTRL_REG1, the
    /// filter to CTRL_REG4; each register is read-modify-written once.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure(&mut self, config: &AccelConfig) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Configuring accelerometer: {}", config);

        self.device.ctrl_reg_1().modify(|w| {
            w.set_norm_mod_en(config.data_rate == DataRate::Hz1100);
            w.set_bdu(config.block_data_update);
            w.set_if_add_inc(config.auto_increment);
        })?;
        self.device.ctrl_reg_4().modify(|w| {
            w.set_dsp(config.filter as u8);
        })?;
        Ok(())
    }

    // ==================== DATA GENERATION ====================

    /// Enable or disable block data update
    ///
    /// When enabled, output registers are not updated until both bytes of the
    /// current sample have been read.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_block_data_update(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_bdu(enable);
        })?;
        Ok(())
    }

    /// Read the block data update setting
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_block_data_update(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        Ok(reg.bdu())
    }

    /// Set the output data rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_norm_mod_en(rate == DataRate::Hz1100);
        })?;
        Ok(())
    }

    /// Read the output data rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_data_rate(&mut self) -> Result<DataRate, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        Ok(DataRate::try_from(u8::from(reg.norm_mod_en())).unwrap_or_default())
    }

    /// Read raw temperature
    ///
    /// Reads `OUT_TEMP_L`/`OUT_TEMP_H` in one burst and drops the 4 padding bits
    /// with a signed divide by 16. Convert with [`crate::lsb_to_celsius`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature_raw(&mut self) -> Result<i16, Error<I::Error>> {
        let mut buffer = [0u8; 2];
        self.device
            .interface
            .read_register(OUT_TEMP_L, 16, &mut buffer)?;

        Ok(temperature::raw_from_le_bytes(buffer))
    }

    /// Read temperature in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature_celsius(&mut self) -> Result<f32, Error<I::Error>> {
        let raw = self.read_temperature_raw()?;
        Ok(temperature::lsb_to_celsius(raw))
    }

    /// Read raw acceleration
    ///
    /// Reads all 6 output bytes in one burst so the three axes belong to the
    /// same sample. No scaling is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_acceleration_raw(&mut self) -> Result<AccelData, Error<I::Error>> {
        let mut buffer = [0u8; 6];
        self.device
            .interface
            .read_register(OUT_X_L_XL, 48, &mut buffer)?;

        Ok(AccelData::from_le_bytes(buffer))
    }

    /// Read acceleration in milli-g
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_acceleration_mg(&mut self) -> Result<AccelDataMg, Error<I::Error>> {
        let raw = self.read_acceleration_raw()?;
        Ok(AccelDataMg::from(raw))
    }

    /// Check whether a new X/Y/Z sample is available (`ZYXDA`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_data_ready(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.status().read()?;
        Ok(reg.zyxda())
    }

    /// Check whether an X/Y/Z sample was overwritten before being read (`ZYXOR`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_data_overrun(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.status().read()?;
        Ok(reg.zyxor())
    }

    // ==================== COMMON ====================

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0x11 for a valid LIS3DHH
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_device_id(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    /// Trigger (or clear) a software reset of the user registers
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_reset(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_sw_reset(enable);
        })?;
        Ok(())
    }

    /// Read the software reset bit (cleared by hardware when reset completes)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_reset(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        Ok(reg.sw_reset())
    }

    /// Reboot memory content (reload calibration parameters)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_boot(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_boot(enable);
        })?;
        Ok(())
    }

    /// Read the reboot bit
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_boot(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        Ok(reg.boot())
    }

    /// Set the self-test mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_self_test(&mut self, mode: SelfTest) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_4().modify(|w| {
            w.set_st(mode as u8);
        })?;
        Ok(())
    }

    /// Read the self-test mode
    ///
    /// The reserved field value 3 reads back as [`SelfTest::Disabled`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_self_test(&mut self) -> Result<SelfTest, Error<I::Error>> {
        let reg = self.device.ctrl_reg_4().read()?;
        Ok(SelfTest::try_from(reg.st()).unwrap_or_default())
    }

    /// Set the digital filter phase/bandwidth
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_filter_config(&mut self, filter: FilterConfig) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_4().modify(|w| {
            w.set_dsp(filter as u8);
        })?;
        Ok(())
    }

    /// Read the digital filter phase/bandwidth
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_filter_config(&mut self) -> Result<FilterConfig, Error<I::Error>> {
        let reg = self.device.ctrl_reg_4().read()?;
        Ok(FilterConfig::try_from(reg.dsp()).unwrap_or_default())
    }

    /// Read the full STATUS register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_status(&mut self) -> Result<Status, Error<I::Error>> {
        let reg = self.device.status().read()?;

        Ok(Status {
            x_data_available: reg.xda(),
            y_data_available: reg.yda(),
            z_data_available: reg.zda(),
            xyz_data_available: reg.zyxda(),
            x_overrun: reg.x_or(),
            y_overrun: reg.y_or(),
            z_overrun: reg.z_or(),
            xyz_overrun: reg.zyxor(),
        })
    }

    // ==================== INTERRUPTS ====================

    /// Select latched or pulsed data-ready signalling
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_drdy_notification_mode(
        &mut self,
        mode: DrdyNotification,
    ) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_drdy_pulse(mode == DrdyNotification::Pulsed);
        })?;
        Ok(())
    }

    /// Read the data-ready signalling mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_drdy_notification_mode(&mut self) -> Result<DrdyNotification, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        Ok(DrdyNotification::try_from(u8::from(reg.drdy_pulse())).unwrap_or_default())
    }

    /// Use INT1 as interrupt output or as FIFO trigger input
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_int1_mode(&mut self, mode: Int1Mode) -> Result<(), Error<I::Error>> {
        self.device.int_1_ctrl().modify(|w| {
            w.set_ext(mode == Int1Mode::Trigger);
        })?;
        Ok(())
    }

    /// Read the INT1 pad function
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_int1_mode(&mut self) -> Result<Int1Mode, Error<I::Error>> {
        let reg = self.device.int_1_ctrl().read()?;
        Ok(Int1Mode::try_from(u8::from(reg.ext())).unwrap_or_default())
    }

    /// Route the FIFO threshold flag to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_threshold_on_int1(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.int_1_ctrl().modify(|w| {
            w.set_fth(enable);
        })?;
        Ok(())
    }

    /// Check whether the FIFO threshold flag is routed to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_threshold_on_int1(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_1_ctrl().read()?;
        Ok(reg.fth())
    }

    /// Route the FIFO full flag to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_full_on_int1(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.int_1_ctrl().modify(|w| {
            w.set_fss_full(enable);
        })?;
        Ok(())
    }

    /// Check whether the FIFO full flag is routed to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_full_on_int1(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_1_ctrl().read()?;
        Ok(reg.fss_full())
    }

    /// Route the FIFO overrun flag to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_overrun_on_int1(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.int_1_ctrl().modify(|w| {
            w.set_ovr(enable);
        })?;
        Ok(())
    }

    /// Check whether the FIFO overrun flag is routed to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_overrun_on_int1(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_1_ctrl().read()?;
        Ok(reg.ovr())
    }

    /// Route the boot status to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_boot_on_int1(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.int_1_ctrl().modify(|w| {
            w.set_boot(enable);
        })?;
        Ok(())
    }

    /// Check whether the boot status is routed to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_boot_on_int1(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_1_ctrl().read()?;
        Ok(reg.boot())
    }

    /// Route data-ready to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_drdy_on_int1(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.int_1_ctrl().modify(|w| {
            w.set_drdy(enable);
        })?;
        Ok(())
    }

    /// Check whether data-ready is routed to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_drdy_on_int1(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_1_ctrl().read()?;
        Ok(reg.drdy())
    }

    /// Route the FIFO threshold flag to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_threshold_on_int2(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.int_2_ctrl().modify(|w| {
            w.set_fth(enable);
        })?;
        Ok(())
    }

    /// Check whether the FIFO threshold flag is routed to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_threshold_on_int2(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_2_ctrl().read()?;
        Ok(reg.fth())
    }

    /// Route the FIFO full flag to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_full_on_int2(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.int_2_ctrl().modify(|w| {
            w.set_fss_full(enable);
        })?;
        Ok(())
    }

    /// Check whether the FIFO full flag is routed to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_full_on_int2(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_2_ctrl().read()?;
        Ok(reg.fss_full())
    }

    /// Route the FIFO overrun flag to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_overrun_on_int2(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.int_2_ctrl().modify(|w| {
            w.set_ovr(enable);
        })?;
        Ok(())
    }

    /// Check whether the FIFO overrun flag is routed to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_overrun_on_int2(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_2_ctrl().read()?;
        Ok(reg.ovr())
    }

    /// Route the boot status to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_boot_on_int2(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.int_2_ctrl().modify(|w| {
            w.set_boot(enable);
        })?;
        Ok(())
    }

    /// Check whether the boot status is routed to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_boot_on_int2(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_2_ctrl().read()?;
        Ok(reg.boot())
    }

    /// Route data-ready to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_drdy_on_int2(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.int_2_ctrl().modify(|w| {
            w.set_drdy(enable);
        })?;
        Ok(())
    }

    /// Check whether data-ready is routed to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_drdy_on_int2(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_2_ctrl().read()?;
        Ok(reg.drdy())
    }

    /// Route a set of sources to INT1 in a single read-modify-write
    ///
    /// The INT1 pad function (`INT1_EXT`) is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_int1(&mut self, routing: &InterruptRouting) -> Result<(), Error<I::Error>> {
        self.device.int_1_ctrl().modify(|w| {
            w.set_fth(routing.fifo_threshold);
            w.set_fss_full(routing.fifo_full);
            w.set_ovr(routing.fifo_overrun);
            w.set_boot(routing.boot);
            w.set_drdy(routing.data_ready);
        })?;
        Ok(())
    }

    /// Read the sources routed to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_int1_routing(&mut self) -> Result<InterruptRouting, Error<I::Error>> {
        let reg = self.device.int_1_ctrl().read()?;
        Ok(InterruptRouting {
            fifo_threshold: reg.fth(),
            fifo_full: reg.fss_full(),
            fifo_overrun: reg.ovr(),
            boot: reg.boot(),
            data_ready: reg.drdy(),
        })
    }

    /// Route a set of sources to INT2 in a single read-modify-write
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_int2(&mut self, routing: &InterruptRouting) -> Result<(), Error<I::Error>> {
        self.device.int_2_ctrl().modify(|w| {
            w.set_fth(routing.fifo_threshold);
            w.set_fss_full(routing.fifo_full);
            w.set_ovr(routing.fifo_overrun);
            w.set_boot(routing.boot);
            w.set_drdy(routing.data_ready);
        })?;
        Ok(())
    }

    /// Read the sources routed to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_int2_routing(&mut self) -> Result<InterruptRouting, Error<I::Error>> {
        let reg = self.device.int_2_ctrl().read()?;
        Ok(InterruptRouting {
            fifo_threshold: reg.fth(),
            fifo_full: reg.fss_full(),
            fifo_overrun: reg.ovr(),
            boot: reg.boot(),
            data_ready: reg.drdy(),
        })
    }

    /// Set push-pull / open-drain mode of the interrupt pads
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_pin_mode(&mut self, mode: PinMode) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_4().modify(|w| {
            w.set_pp_od(mode as u8);
        })?;
        Ok(())
    }

    /// Read push-pull / open-drain mode of the interrupt pads
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_pin_mode(&mut self) -> Result<PinMode, Error<I::Error>> {
        let reg = self.device.ctrl_reg_4().read()?;
        Ok(PinMode::try_from(reg.pp_od()).unwrap_or_default())
    }

    // ==================== FIFO ====================

    /// Enable or disable the FIFO memory
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_enable(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_4().modify(|w| {
            w.set_fifo_en(enable);
        })?;
        Ok(())
    }

    /// Check whether the FIFO memory is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_enable(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_4().read()?;
        Ok(reg.fifo_en())
    }

    /// Block the FIFO read window for SPI clocks above 6 MHz
    ///
    /// Guarantees a minimum duration of the window during which writes to the
    /// output RAM are blocked.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_block_spi_hs(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_5().modify(|w| {
            w.set_fifo_spi_hs_on(enable);
        })?;
        Ok(())
    }

    /// Read the high-speed SPI FIFO setting
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_block_spi_hs(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_5().read()?;
        Ok(reg.fifo_spi_hs_on())
    }

    /// Set the FIFO watermark in samples
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` without touching the bus if `watermark` exceeds 31,
    /// or an error if communication with the device fails.
    pub fn set_fifo_watermark(&mut self, watermark: u8) -> Result<(), Error<I::Error>> {
        if watermark > MAX_WATERMARK {
            return Err(Error::InvalidConfig);
        }

        self.device.fifo_ctrl().modify(|w| {
            w.set_fth(watermark);
        })?;
        Ok(())
    }

    /// Read the FIFO watermark in samples
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_watermark(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.fifo_ctrl().read()?;
        Ok(reg.fth())
    }

    /// Set the FIFO mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_mode(&mut self, mode: FifoMode) -> Result<(), Error<I::Error>> {
        self.device.fifo_ctrl().modify(|w| {
            w.set_fmode(mode as u8);
        })?;
        Ok(())
    }

    /// Read the FIFO mode
    ///
    /// Undefined mode patterns read back as [`FifoMode::Bypass`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_mode(&mut self) -> Result<FifoMode, Error<I::Error>> {
        let reg = self.device.fifo_ctrl().read()?;
        Ok(FifoMode::try_from(reg.fmode()).unwrap_or_default())
    }

    /// Configure the FIFO
    ///
    /// Writes the enable bit (CTRL_REG4), the high-speed SPI bit (CTRL_REG5), then
    /// watermark and mode together (FIFO_CTRL).
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` without touching the bus if the watermark exceeds 31,
    /// or an error if communication with the device fails.
    pub fn configure_fifo(&mut self, config: &FifoConfig) -> Result<(), Error<I::Error>> {
        if config.watermark > MAX_WATERMARK {
            return Err(Error::InvalidConfig);
        }

        self.set_fifo_enable(config.enable)?;
        self.set_fifo_block_spi_hs(config.spi_high_speed)?;
        self.device.fifo_ctrl().modify(|w| {
            w.set_fth(config.watermark);
            w.set_fmode(config.mode as u8);
        })?;
        Ok(())
    }

    /// Read the FIFO status (level, overrun and watermark flags)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_status(&mut self) -> Result<FifoStatus, Error<I::Error>> {
        let reg = self.device.fifo_src().read()?;

        Ok(FifoStatus {
            level: reg.fss(),
            overrun: reg.ovrn(),
            watermark_reached: reg.fth(),
        })
    }

    /// Read the number of unread samples in the FIFO (`FSS`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_level(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.fifo_src().read()?;
        Ok(reg.fss())
    }

    /// Read the FIFO overrun flag
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_overrun_flag(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.fifo_src().read()?;
        Ok(reg.ovrn())
    }

    /// Read the FIFO watermark flag
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_watermark_flag(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.fifo_src().read()?;
        Ok(reg.fth())
    }

    /// Drain the FIFO into `samples`
    ///
    /// Reads the current level once, then one 6-byte output block per stored
    /// sample. Stops early when `samples` is full; samples not read stay in the
    /// FIFO. Returns the number of samples appended.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. Samples read
    /// before the failure remain in `samples`.
    pub fn fifo_read(
        &mut self,
        samples: &mut heapless::Vec<AccelData, FIFO_DEPTH>,
    ) -> Result<usize, Error<I::Error>> {
        let level = self.read_fifo_level()?;
        let mut count = 0;

        for _ in 0..level {
            if samples.is_full() {
                break;
            }
            let sample = self.read_acceleration_raw()?;
            // Capacity checked above
            let _ = samples.push(sample);
            count += 1;
        }

        Ok(count)
    }

    // ==================== SERIAL INTERFACE ====================

    /// Enable or disable register address auto-increment on multi-byte access
    ///
    /// Burst reads ([`read_acceleration_raw`](Self::read_acceleration_raw),
    /// [`read_temperature_raw`](Self::read_temperature_raw)) need this enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_auto_increment(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_if_add_inc(enable);
        })?;
        Ok(())
    }

    /// Read the auto-increment setting
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_auto_increment(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        Ok(reg.if_add_inc())
    }
}

#[cfg(feature = "async")]
impl<I> Lis3dhhDriver<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Create a new LIS3DHH driver instance
    ///
    /// This will verify the `WHO_AM_I` register but will not configure the device.
    /// Call `init()` after construction for a known starting state.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The `WHO_AM_I` register contains an unexpected value
    pub async fn new(interface: I) -> Result<Self, Error<I::Error>> {
        let mut driver = Self::new_unchecked(interface);

        let who_am_i = driver.read_device_id().await?;
        if who_am_i != WHO_AM_I_VALUE {
            #[cfg(feature = "defmt")]
            defmt::warn!("Unexpected WHO_AM_I: {=u8:#x}", who_am_i);
            return Err(Error::InvalidDevice(who_am_i));
        }

        Ok(driver)
    }

    /// Initialize the device
    ///
    /// Issues a software reset, waits for `SW_RESET` to self-clear, then enables
    /// register address auto-increment and block data update. The device is left
    /// in power-down; call [`set_data_rate`](Self::set_data_rate) or
    /// [`configure`](Self::configure) to start sampling.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider implementing `embedded_hal_async::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns the bus error if any transfer fails, including the polling reads,
    /// or `InitializationTimeout` if the reset bit does not clear within 100 ms.
    pub async fn init<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.set_reset(true).await?;

        for _ in 0..(RESET_TIMEOUT_MS / RESET_POLL_INTERVAL_MS) {
            delay.delay_ms(RESET_POLL_INTERVAL_MS).await;
            let ctrl = self.device.ctrl_reg_1().read_async().await?;
            if !ctrl.sw_reset() {
                self.device
                    .ctrl_reg_1()
                    .modify_async(|w| {
                        w.set_if_add_inc(true);
                        w.set_bdu(true);
                    })
                    .await?;

                #[cfg(feature = "defmt")]
                defmt::debug!("LIS3DHH reset complete");

                return Ok(());
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("LIS3DHH software reset did not complete");

        Err(Error::InitializationTimeout)
    }

    /// Apply an accelerometer configuration
    ///
    /// Data rate, block data update and auto-increment go to CTRL_REG1, the
    /// filter to CTRL_REG4; each register is read-modify-written once.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn configure(&mut self, config: &AccelConfig) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Configuring accelerometer: {}", config);

        self.device
            .ctrl_reg_1()
            .modify_async(|w| {
                w.set_norm_mod_en(config.data_rate == DataRate::Hz1100);
                w.set_bdu(config.block_data_update);
                w.set_if_add_inc(config.auto_increment);
            })
            .await?;
        self.device
            .ctrl_reg_4()
            .modify_async(|w| {
                w.set_dsp(config.filter as u8);
            })
            .await?;
        Ok(())
    }

    // ==================== DATA GENERATION ====================

    /// Enable or disable block data update
    ///
    /// When enabled, output registers are not updated until both bytes of the
    /// current sample have been read.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_block_data_update(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_1()
            .modify_async(|w| {
                w.set_bdu(enable);
            })
            .await?;
        Ok(())
    }

    /// Read the block data update setting
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_block_data_update(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read_async().await?;
        Ok(reg.bdu())
    }

    /// Set the output data rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_1()
            .modify_async(|w| {
                w.set_norm_mod_en(rate == DataRate::Hz1100);
            })
            .await?;
        Ok(())
    }

    /// Read the output data rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_data_rate(&mut self) -> Result<DataRate, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read_async().await?;
        Ok(DataRate::try_from(u8::from(reg.norm_mod_en())).unwrap_or_default())
    }

    /// Read raw temperature
    ///
    /// Reads `OUT_TEMP_L`/`OUT_TEMP_H` in one burst and drops the 4 padding bits
    /// with a signed divide by 16. Convert with [`crate::lsb_to_celsius`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_temperature_raw(&mut self) -> Result<i16, Error<I::Error>> {
        let mut buffer = [0u8; 2];
        self.device
            .interface
            .read_register(OUT_TEMP_L, 16, &mut buffer)
            .await?;

        Ok(temperature::raw_from_le_bytes(buffer))
    }

    /// Read temperature in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_temperature_celsius(&mut self) -> Result<f32, Error<I::Error>> {
        let raw = self.read_temperature_raw().await?;
        Ok(temperature::lsb_to_celsius(raw))
    }

    /// Read raw acceleration
    ///
    /// Reads all 6 output bytes in one burst so the three axes belong to the
    /// same sample. No scaling is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_acceleration_raw(&mut self) -> Result<AccelData, Error<I::Error>> {
        let mut buffer = [0u8; 6];
        self.device
            .interface
            .read_register(OUT_X_L_XL, 48, &mut buffer)
            .await?;

        Ok(AccelData::from_le_bytes(buffer))
    }

    /// Read acceleration in milli-g
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_acceleration_mg(&mut self) -> Result<AccelDataMg, Error<I::Error>> {
        let raw = self.read_acceleration_raw().await?;
        Ok(AccelDataMg::from(raw))
    }

    /// Check whether a new X/Y/Z sample is available (`ZYXDA`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_data_ready(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.status().read_async().await?;
        Ok(reg.zyxda())
    }

    /// Check whether an X/Y/Z sample was overwritten before being read (`ZYXOR`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_data_overrun(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.status().read_async().await?;
        Ok(reg.zyxor())
    }

    // ==================== COMMON ====================

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0x11 for a valid LIS3DHH
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_device_id(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read_async().await?;
        Ok(reg.who_am_i())
    }

    /// Trigger (or clear) a software reset of the user registers
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_reset(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_1()
            .modify_async(|w| {
                w.set_sw_reset(enable);
            })
            .await?;
        Ok(())
    }

    /// Read the software reset bit (cleared by hardware when reset completes)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_reset(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read_async().await?;
        Ok(reg.sw_reset())
    }

    /// Reboot memory content (reload calibration parameters)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_boot(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_1()
            .modify_async(|w| {
                w.set_boot(enable);
            })
            .await?;
        Ok(())
    }

    /// Read the reboot bit
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_boot(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read_async().await?;
        Ok(reg.boot())
    }

    /// Set the self-test mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_self_test(&mut self, mode: SelfTest) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_4()
            .modify_async(|w| {
                w.set_st(mode as u8);
            })
            .await?;
        Ok(())
    }

    /// Read the self-test mode
    ///
    /// The reserved field value 3 reads back as [`SelfTest::Disabled`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_self_test(&mut self) -> Result<SelfTest, Error<I::Error>> {
        let reg = self.device.ctrl_reg_4().read_async().await?;
        Ok(SelfTest::try_from(reg.st()).unwrap_or_default())
    }

    /// Set the digital filter phase/bandwidth
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_filter_config(&mut self, filter: FilterConfig) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_4()
            .modify_async(|w| {
                w.set_dsp(filter as u8);
            })
            .await?;
        Ok(())
    }

    /// Read the digital filter phase/bandwidth
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_filter_config(&mut self) -> Result<FilterConfig, Error<I::Error>> {
        let reg = self.device.ctrl_reg_4().read_async().await?;
        Ok(FilterConfig::try_from(reg.dsp()).unwrap_or_default())
    }

    /// Read the full STATUS register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_status(&mut self) -> Result<Status, Error<I::Error>> {
        let reg = self.device.status().read_async().await?;

        Ok(Status {
            x_data_available: reg.xda(),
            y_data_available: reg.yda(),
            z_data_available: reg.zda(),
            xyz_data_available: reg.zyxda(),
            x_overrun: reg.x_or(),
            y_overrun: reg.y_or(),
            z_overrun: reg.z_or(),
            xyz_overrun: reg.zyxor(),
        })
    }

    // ==================== INTERRUPTS ====================

    /// Select latched or pulsed data-ready signalling
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_drdy_notification_mode(
        &mut self,
        mode: DrdyNotification,
    ) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_1()
            .modify_async(|w| {
                w.set_drdy_pulse(mode == DrdyNotification::Pulsed);
            })
            .await?;
        Ok(())
    }

    /// Read the data-ready signalling mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_drdy_notification_mode(&mut self) -> Result<DrdyNotification, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read_async().await?;
        Ok(DrdyNotification::try_from(u8::from(reg.drdy_pulse())).unwrap_or_default())
    }

    /// Use INT1 as interrupt output or as FIFO trigger input
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_int1_mode(&mut self, mode: Int1Mode) -> Result<(), Error<I::Error>> {
        self.device
            .int_1_ctrl()
            .modify_async(|w| {
                w.set_ext(mode == Int1Mode::Trigger);
            })
            .await?;
        Ok(())
    }

    /// Read the INT1 pad function
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_int1_mode(&mut self) -> Result<Int1Mode, Error<I::Error>> {
        let reg = self.device.int_1_ctrl().read_async().await?;
        Ok(Int1Mode::try_from(u8::from(reg.ext())).unwrap_or_default())
    }

    /// Route the FIFO threshold flag to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_fifo_threshold_on_int1(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .int_1_ctrl()
            .modify_async(|w| {
                w.set_fth(enable);
            })
            .await?;
        Ok(())
    }

    /// Check whether the FIFO threshold flag is routed to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_fifo_threshold_on_int1(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_1_ctrl().read_async().await?;
        Ok(reg.fth())
    }

    /// Route the FIFO full flag to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_fifo_full_on_int1(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .int_1_ctrl()
            .modify_async(|w| {
                w.set_fss_full(enable);
            })
            .await?;
        Ok(())
    }

    /// Check whether the FIFO full flag is routed to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_fifo_full_on_int1(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_1_ctrl().read_async().await?;
        Ok(reg.fss_full())
    }

    /// Route the FIFO overrun flag to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_fifo_overrun_on_int1(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .int_1_ctrl()
            .modify_async(|w| {
                w.set_ovr(enable);
            })
            .await?;
        Ok(())
    }

    /// Check whether the FIFO overrun flag is routed to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_fifo_overrun_on_int1(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_1_ctrl().read_async().await?;
        Ok(reg.ovr())
    }

    /// Route the boot status to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_boot_on_int1(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .int_1_ctrl()
            .modify_async(|w| {
                w.set_boot(enable);
            })
            .await?;
        Ok(())
    }

    /// Check whether the boot status is routed to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_boot_on_int1(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_1_ctrl().read_async().await?;
        Ok(reg.boot())
    }

    /// Route data-ready to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_drdy_on_int1(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .int_1_ctrl()
            .modify_async(|w| {
                w.set_drdy(enable);
            })
            .await?;
        Ok(())
    }

    /// Check whether data-ready is routed to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_drdy_on_int1(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_1_ctrl().read_async().await?;
        Ok(reg.drdy())
    }

    /// Route the FIFO threshold flag to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_fifo_threshold_on_int2(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .int_2_ctrl()
            .modify_async(|w| {
                w.set_fth(enable);
            })
            .await?;
        Ok(())
    }

    /// Check whether the FIFO threshold flag is routed to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_fifo_threshold_on_int2(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_2_ctrl().read_async().await?;
        Ok(reg.fth())
    }

    /// Route the FIFO full flag to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_fifo_full_on_int2(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .int_2_ctrl()
            .modify_async(|w| {
                w.set_fss_full(enable);
            })
            .await?;
        Ok(())
    }

    /// Check whether the FIFO full flag is routed to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_fifo_full_on_int2(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_2_ctrl().read_async().await?;
        Ok(reg.fss_full())
    }

    /// Route the FIFO overrun flag to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_fifo_overrun_on_int2(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .int_2_ctrl()
            .modify_async(|w| {
                w.set_ovr(enable);
            })
            .await?;
        Ok(())
    }

    /// Check whether the FIFO overrun flag is routed to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_fifo_overrun_on_int2(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_2_ctrl().read_async().await?;
        Ok(reg.ovr())
    }

    /// Route the boot status to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_boot_on_int2(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .int_2_ctrl()
            .modify_async(|w| {
                w.set_boot(enable);
            })
            .await?;
        Ok(())
    }

    /// Check whether the boot status is routed to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_boot_on_int2(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_2_ctrl().read_async().await?;
        Ok(reg.boot())
    }

    /// Route data-ready to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_drdy_on_int2(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .int_2_ctrl()
            .modify_async(|w| {
                w.set_drdy(enable);
            })
            .await?;
        Ok(())
    }

    /// Check whether data-ready is routed to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_drdy_on_int2(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_2_ctrl().read_async().await?;
        Ok(reg.drdy())
    }

    /// Route a set of sources to INT1 in a single read-modify-write
    ///
    /// The INT1 pad function (`INT1_EXT`) is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn configure_int1(&mut self, routing: &InterruptRouting) -> Result<(), Error<I::Error>> {
        self.device
            .int_1_ctrl()
            .modify_async(|w| {
                w.set_fth(routing.fifo_threshold);
                w.set_fss_full(routing.fifo_full);
                w.set_ovr(routing.fifo_overrun);
                w.set_boot(routing.boot);
                w.set_drdy(routing.data_ready);
            })
            .await?;
        Ok(())
    }

    /// Read the sources routed to INT1
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_int1_routing(&mut self) -> Result<InterruptRouting, Error<I::Error>> {
        let reg = self.device.int_1_ctrl().read_async().await?;
        Ok(InterruptRouting {
            fifo_threshold: reg.fth(),
            fifo_full: reg.fss_full(),
            fifo_overrun: reg.ovr(),
            boot: reg.boot(),
            data_ready: reg.drdy(),
        })
    }

    /// Route a set of sources to INT2 in a single read-modify-write
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn configure_int2(&mut self, routing: &InterruptRouting) -> Result<(), Error<I::Error>> {
        self.device
            .int_2_ctrl()
            .modify_async(|w| {
                w.set_fth(routing.fifo_threshold);
                w.set_fss_full(routing.fifo_full);
                w.set_ovr(routing.fifo_overrun);
                w.set_boot(routing.boot);
                w.set_drdy(routing.data_ready);
            })
            .await?;
        Ok(())
    }

    /// Read the sources routed to INT2
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_int2_routing(&mut self) -> Result<InterruptRouting, Error<I::Error>> {
        let reg = self.device.int_2_ctrl().read_async().await?;
        Ok(InterruptRouting {
            fifo_threshold: reg.fth(),
            fifo_full: reg.fss_full(),
            fifo_overrun: reg.ovr(),
            boot: reg.boot(),
            data_ready: reg.drdy(),
        })
    }

    /// Set push-pull / open-drain mode of the interrupt pads
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_pin_mode(&mut self, mode: PinMode) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_4()
            .modify_async(|w| {
                w.set_pp_od(mode as u8);
            })
            .await?;
        Ok(())
    }

    /// Read push-pull / open-drain mode of the interrupt pads
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_pin_mode(&mut self) -> Result<PinMode, Error<I::Error>> {
        let reg = self.device.ctrl_reg_4().read_async().await?;
        Ok(PinMode::try_from(reg.pp_od()).unwrap_or_default())
    }

    // ==================== FIFO ====================

    /// Enable or disable the FIFO memory
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_fifo_enable(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_4()
            .modify_async(|w| {
                w.set_fifo_en(enable);
            })
            .await?;
        Ok(())
    }

    /// Check whether the FIFO memory is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_fifo_enable(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_4().read_async().await?;
        Ok(reg.fifo_en())
    }

    /// Block the FIFO read window for SPI clocks above 6 MHz
    ///
    /// Guarantees a minimum duration of the window during which writes to the
    /// output RAM are blocked.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_fifo_block_spi_hs(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_5()
            .modify_async(|w| {
                w.set_fifo_spi_hs_on(enable);
            })
            .await?;
        Ok(())
    }

    /// Read the high-speed SPI FIFO setting
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_fifo_block_spi_hs(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_5().read_async().await?;
        Ok(reg.fifo_spi_hs_on())
    }

    /// Set the FIFO watermark in samples
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` without touching the bus if `watermark` exceeds 31,
    /// or an error if communication with the device fails.
    pub async fn set_fifo_watermark(&mut self, watermark: u8) -> Result<(), Error<I::Error>> {
        if watermark > MAX_WATERMARK {
            return Err(Error::InvalidConfig);
        }

        self.device
            .fifo_ctrl()
            .modify_async(|w| {
                w.set_fth(watermark);
            })
            .await?;
        Ok(())
    }

    /// Read the FIFO watermark in samples
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_fifo_watermark(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.fifo_ctrl().read_async().await?;
        Ok(reg.fth())
    }

    /// Set the FIFO mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_fifo_mode(&mut self, mode: FifoMode) -> Result<(), Error<I::Error>> {
        self.device
            .fifo_ctrl()
            .modify_async(|w| {
                w.set_fmode(mode as u8);
            })
            .await?;
        Ok(())
    }

    /// Read the FIFO mode
    ///
    /// Undefined mode patterns read back as [`FifoMode::Bypass`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_fifo_mode(&mut self) -> Result<FifoMode, Error<I::Error>> {
        let reg = self.device.fifo_ctrl().read_async().await?;
        Ok(FifoMode::try_from(reg.fmode()).unwrap_or_default())
    }

    /// Configure the FIFO
    ///
    /// Writes the enable bit (CTRL_REG4), the high-speed SPI bit (CTRL_REG5), then
    /// watermark and mode together (FIFO_CTRL).
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` without touching the bus if the watermark exceeds 31,
    /// or an error if communication with the device fails.
    pub async fn configure_fifo(&mut self, config: &FifoConfig) -> Result<(), Error<I::Error>> {
        if config.watermark > MAX_WATERMARK {
            return Err(Error::InvalidConfig);
        }

        self.set_fifo_enable(config.enable).await?;
        self.set_fifo_block_spi_hs(config.spi_high_speed).await?;
        self.device
            .fifo_ctrl()
            .modify_async(|w| {
                w.set_fth(config.watermark);
                w.set_fmode(config.mode as u8);
            })
            .await?;
        Ok(())
    }

    /// Read the FIFO status (level, overrun and watermark flags)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_fifo_status(&mut self) -> Result<FifoStatus, Error<I::Error>> {
        let reg = self.device.fifo_src().read_async().await?;

        Ok(FifoStatus {
            level: reg.fss(),
            overrun: reg.ovrn(),
            watermark_reached: reg.fth(),
        })
    }

    /// Read the number of unread samples in the FIFO (`FSS`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_fifo_level(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.fifo_src().read_async().await?;
        Ok(reg.fss())
    }

    /// Read the FIFO overrun flag
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_fifo_overrun_flag(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.fifo_src().read_async().await?;
        Ok(reg.ovrn())
    }

    /// Read the FIFO watermark flag
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_fifo_watermark_flag(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.fifo_src().read_async().await?;
        Ok(reg.fth())
    }

    /// Drain the FIFO into `samples`
    ///
    /// Reads the current level once, then one 6-byte output block per stored
    /// sample. Stops early when `samples` is full; samples not read stay in the
    /// FIFO. Returns the number of samples appended.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. Samples read
    /// before the failure remain in `samples`.
    pub async fn fifo_read(
        &mut self,
        samples: &mut heapless::Vec<AccelData, FIFO_DEPTH>,
    ) -> Result<usize, Error<I::Error>> {
        let level = self.read_fifo_level().await?;
        let mut count = 0;

        for _ in 0..level {
            if samples.is_full() {
                break;
            }
            let sample = self.read_acceleration_raw().await?;
            // Capacity checked above
            let _ = samples.push(sample);
            count += 1;
        }

        Ok(count)
    }

    // ==================== SERIAL INTERFACE ====================

    /// Enable or disable register address auto-increment on multi-byte access
    ///
    /// Burst reads ([`read_acceleration_raw`](Self::read_acceleration_raw),
    /// [`read_temperature_raw`](Self::read_temperature_raw)) need this enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_auto_increment(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_1()
            .modify_async(|w| {
                w.set_if_add_inc(enable);
            })
            .await?;
        Ok(())
    }

    /// Read the auto-increment setting
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_auto_increment(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read_async().await?;
        Ok(reg.if_add_inc())
    }
}
