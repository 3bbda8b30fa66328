//! Register definitions for the LIS3DHH
//!
//! The LIS3DHH has a flat 8-bit register map with no banking. Control registers
//! are declared field by field so that every setter only touches its own bits;
//! the output data blocks are read as raw byte runs through the interface and
//! are listed here as plain addresses.
//!
//! ## Layout
//! - `0x0F`: identity
//! - `0x20..=0x24`: control and interrupt routing
//! - `0x25..=0x2D`: temperature, status and acceleration output
//! - `0x2E..=0x2F`: FIFO control and status

/// OUT_TEMP_L - first byte of the 2-byte temperature output (0x25)
pub const OUT_TEMP_L: u8 = 0x25;

/// OUT_X_L_XL - first byte of the 6-byte acceleration output block (0x28)
pub const OUT_X_L_XL: u8 = 0x28;

device_driver::create_device!(
    device_name: Lis3dhh,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// WHO_AM_I - Device ID Register (0x0F)
        /// Expected value: 0x11
        register WhoAmI {
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;

            /// Device ID (should read 0x11)
            who_am_i: uint = 0..8,
        },

        /// CTRL_REG1 - Control Register 1 (0x20)
        register CtrlReg1 {
            const ADDRESS = 0x20;
            const SIZE_BITS = 8;

            /// Block data update (output registers frozen until both bytes are read)
            bdu: bool = 0,
            /// Data-ready signal pulsed (1) or latched (0)
            drdy_pulse: bool = 1,
            /// Software reset, self-clearing
            sw_reset: bool = 2,
            /// Reboot memory content
            boot: bool = 3,
            reserved_5_4: uint = 4..6,
            /// Register address auto-increment on multi-byte access
            if_add_inc: bool = 6,
            /// Normal mode enable (0 = power-down, 1 = 1.1 kHz)
            norm_mod_en: bool = 7,
        },

        /// INT1_CTRL - INT1 Pin Control (0x21)
        register Int1Ctrl {
            const ADDRESS = 0x21;
            const SIZE_BITS = 8;

            reserved_1_0: uint = 0..2,
            /// INT1 pad used as external asynchronous FIFO trigger input
            ext: bool = 2,
            /// FIFO threshold flag on INT1
            fth: bool = 3,
            /// FIFO full flag on INT1
            fss_full: bool = 4,
            /// FIFO overrun flag on INT1
            ovr: bool = 5,
            /// Boot status on INT1
            boot: bool = 6,
            /// Data-ready on INT1
            drdy: bool = 7,
        },

        /// INT2_CTRL - INT2 Pin Control (0x22)
        register Int2Ctrl {
            const ADDRESS = 0x22;
            const SIZE_BITS = 8;

            reserved_2_0: uint = 0..3,
            /// FIFO threshold flag on INT2
            fth: bool = 3,
            /// FIFO full flag on INT2
            fss_full: bool = 4,
            /// FIFO overrun flag on INT2
            ovr: bool = 5,
            /// Boot status on INT2
            boot: bool = 6,
            /// Data-ready on INT2
            drdy: bool = 7,
        },

        /// CTRL_REG4 - Control Register 4 (0x23)
        register CtrlReg4 {
            const ADDRESS = 0x23;
            const SIZE_BITS = 8;

            /// Must be kept at 1
            reserved_0: uint = 0..1,
            /// FIFO memory enable
            fifo_en: bool = 1,
            /// Push-pull / open-drain selection (bit 3 = INT1, bit 2 = INT2)
            pp_od: uint = 2..4,
            /// Self-test (0 = normal, 1 = positive, 2 = negative)
            st: uint = 4..6,
            /// Digital filter phase/bandwidth selection
            dsp: uint = 6..8,
        },

        /// CTRL_REG5 - Control Register 5 (0x24)
        register CtrlReg5 {
            const ADDRESS = 0x24;
            const SIZE_BITS = 8;

            /// Block FIFO read window for SPI clocks above 6 MHz
            fifo_spi_hs_on: bool = 0,
            reserved_7_1: uint = 1..8,
        },

        /// STATUS - Data Status (0x27)
        register Status {
            const ADDRESS = 0x27;
            const SIZE_BITS = 8;

            /// X-axis new data available
            xda: bool = 0,
            /// Y-axis new data available
            yda: bool = 1,
            /// Z-axis new data available
            zda: bool = 2,
            /// X, Y and Z new data available
            zyxda: bool = 3,
            /// X-axis data overrun
            x_or: bool = 4,
            /// Y-axis data overrun
            y_or: bool = 5,
            /// Z-axis data overrun
            z_or: bool = 6,
            /// X, Y and Z data overrun
            zyxor: bool = 7,
        },

        /// FIFO_CTRL - FIFO Control (0x2E)
        register FifoCtrl {
            const ADDRESS = 0x2E;
            const SIZE_BITS = 8;

            /// FIFO threshold level
            fth: uint = 0..5,
            /// FIFO mode selection
            fmode: uint = 5..8,
        },

        /// FIFO_SRC - FIFO Status (0x2F, read-only)
        register FifoSrc {
            const ADDRESS = 0x2F;
            const SIZE_BITS = 8;

            /// Number of unread samples stored in FIFO
            fss: uint = 0..6,
            /// FIFO overrun
            ovrn: bool = 6,
            /// FIFO filling is equal or higher than the threshold level
            fth: bool = 7,
        }
    }
);
