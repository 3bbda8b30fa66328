//! Temperature sensor conversion
//!
//! The temperature output is a 12-bit value left-justified in a 16-bit word.
//! The driver drops the four padding bits with a signed divide by 16 before the
//! value reaches [`lsb_to_celsius`], which then applies 16 LSB/°C around 25 °C.

/// Temperature sensitivity in LSB/°C
pub const SENSITIVITY_LSB_PER_CELSIUS: f32 = 16.0;

/// Output value corresponding to 0 LSB
pub const OFFSET_CELSIUS: f32 = 25.0;

/// Convert a raw temperature sample to degrees Celsius
#[must_use]
pub fn lsb_to_celsius(lsb: i16) -> f32 {
    (f32::from(lsb) / SENSITIVITY_LSB_PER_CELSIUS) + OFFSET_CELSIUS
}

/// Reassemble the two output bytes (`OUT_TEMP_L`, `OUT_TEMP_H`) and drop the padding
///
/// Division, not a shift: negative readings truncate toward zero like the
/// device reference code does.
#[must_use]
pub const fn raw_from_le_bytes(buffer: [u8; 2]) -> i16 {
    i16::from_le_bytes(buffer) / 16
}
