#![allow(dead_code)]

/// FIFO watermark threshold (LSB)
pub const FIFO_CTRL1: u8 = 0x07;
/// FIFO watermark threshold (MSB) and compression settings
pub const FIFO_CTRL2: u8 = 0x08;
/// Batch data rate selection for accelerometer and gyroscope
pub const FIFO_CTRL3: u8 = 0x09;
/// FIFO mode and temperature/timestamp batch rate
pub const FIFO_CTRL4: u8 = 0x0A;

/// Device identification, reads back [`WHO_AM_I_VALUE`]
pub const WHO_AM_I: u8 = 0x0F;

/// Accelerometer data rate and full scale
pub const CTRL1_XL: u8 = 0x10;
/// Gyroscope data rate and full scale
pub const CTRL2_G: u8 = 0x11;
/// Control register 3, holds the reboot bit
pub const CTRL3_C: u8 = 0x12;

/// Data available flags
pub const STATUS_REG: u8 = 0x1E;

/// Temperature output (LSB)
pub const OUT_TEMP_L: u8 = 0x20;
/// Temperature output (MSB)
pub const OUT_TEMP_H: u8 = 0x21;

/// Angular rate X (LSB)
pub const OUTX_L_G: u8 = 0x22;
/// Angular rate X (MSB)
pub const OUTX_H_G: u8 = 0x23;
/// Angular rate Y (LSB)
pub const OUTY_L_G: u8 = 0x24;
/// Angular rate Y (MSB)
pub const OUTY_H_G: u8 = 0x25;
/// Angular rate Z (LSB)
pub const OUTZ_L_G: u8 = 0x26;
/// Angular rate Z (MSB)
pub const OUTZ_H_G: u8 = 0x27;

/// Linear acceleration X (LSB)
pub const OUTX_L_A: u8 = 0x28;
/// Linear acceleration X (MSB)
pub const OUTX_H_A: u8 = 0x29;
/// Linear acceleration Y (LSB)
pub const OUTY_L_A: u8 = 0x2A;
/// Linear acceleration Y (MSB)
pub const OUTY_H_A: u8 = 0x2B;
/// Linear acceleration Z (LSB)
pub const OUTZ_L_A: u8 = 0x2C;
/// Linear acceleration Z (MSB)
pub const OUTZ_H_A: u8 = 0x2D;

pub const WHO_AM_I_VALUE: u8 = 0b0110_1000;

// CTRL1_XL and CTRL2_G share this layout.
pub const CTRL_ODR_SHIFT: u8 = 4;
pub const CTRL_ODR_MASK: u8 = 0xF0;
pub const CTRL_FS_SHIFT: u8 = 2;
pub const CTRL_FS_MASK: u8 = 0x0C;

pub const CTRL3_C_BOOT: u8 = 0x80;

pub const FIFO_CTRL4_CONTINUOUS_MODE: u8 = 0x06;
pub const FIFO_CTRL4_FIFO_ODR_SHIFT: u8 = 4;

/// Output register pairs of one sub-sensor, in read order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OutputBlock {
    pub x: (u8, u8),
    pub y: (u8, u8),
    pub z: (u8, u8),
}

pub(crate) const ACCEL_OUTPUT: OutputBlock = OutputBlock {
    x: (OUTX_L_A, OUTX_H_A),
    y: (OUTY_L_A, OUTY_H_A),
    z: (OUTZ_L_A, OUTZ_H_A),
};

pub(crate) const GYRO_OUTPUT: OutputBlock = OutputBlock {
    x: (OUTX_L_G, OUTX_H_G),
    y: (OUTY_L_G, OUTY_H_G),
    z: (OUTZ_L_G, OUTZ_H_G),
};
