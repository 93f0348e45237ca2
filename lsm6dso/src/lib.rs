#![cfg_attr(not(test), no_std)]

mod bus;
pub mod config;
pub mod convert;
pub mod register;

use core::cell::RefCell;

use bitflags::bitflags;
use embedded_hal::{delay::DelayNs, i2c::I2c};
use log::{debug, error, trace, warn};

use bus::Bus;
pub use config::{
    AccelFullScale, Config, ConfigError, DataRate, Decimation, GyroFullScale, RawConfig,
    PRIMARY_ADDRESS, SECONDARY_ADDRESS,
};
use register::OutputBlock;

/// Time for the device to reload its trimming parameters after a reboot.
const BOOT_WAIT_US: u32 = 15_000;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        const ACCELEROMETER_DATA_AVAILABLE = 0b1;
        const GYROSCOPE_DATA_AVAILABLE     = 0b10;
        const TEMPERATURE_DATA_AVAILABLE   = 0b100;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sensor {
    Accelerometer,
    Gyroscope,
}

impl Sensor {
    fn control_register(self) -> u8 {
        match self {
            Sensor::Accelerometer => register::CTRL1_XL,
            Sensor::Gyroscope => register::CTRL2_G,
        }
    }

    fn output_block(self) -> OutputBlock {
        match self {
            Sensor::Accelerometer => register::ACCEL_OUTPUT,
            Sensor::Gyroscope => register::GYRO_OUTPUT,
        }
    }
}

/// One scaled reading of the three axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Sample {
    pub fn as_array(&self) -> [i16; 3] {
        [self.x, self.y, self.z]
    }
}

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    Bus(E),
    Config(ConfigError),
    /// The identity register held this value instead of
    /// [`register::WHO_AM_I_VALUE`].
    Device(u8),
}

impl<E: core::fmt::Display> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        match self {
            Error::Bus(e) => write!(f, "Bus error: {}", e),
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Device(id) => write!(f, "Invalid device ID: {:#04x}", id),
        }
    }
}

impl<E> core::convert::From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Bus(error)
    }
}

/// An initialized LSM6DSO on a shared I2C bus.
///
/// The driver keeps no state besides its configuration: power state lives
/// in the device only.
pub struct Lsm6dso<'a, I2C> {
    bus: &'a RefCell<I2C>,
    config: Config,
}

impl<'a, I2C: I2c<Error = E>, E> Lsm6dso<'a, I2C> {
    /// Reboot the device, check its identity and program both sensors and
    /// the FIFO from `config`.
    ///
    /// Register writes are not rolled back: on [`ConfigError::InitWrite`]
    /// the device is left in an unknown state.
    pub fn initialize<D: DelayNs>(
        bus: &'a RefCell<I2C>,
        config: Config,
        delay: &mut D,
    ) -> Result<Self, Error<E>> {
        let device = Lsm6dso { bus, config };

        let mut bus = device.acquire();

        let mut failed = false;
        if bus.write_u8(register::CTRL3_C, register::CTRL3_C_BOOT).is_err() {
            warn!("lsm6dso: reboot command failed");
            failed = true;
        }

        delay.delay_us(BOOT_WAIT_US);

        let id = bus.read_u8(register::WHO_AM_I).map_err(|e| {
            error!("lsm6dso: failed to read WHO_AM_I");
            Error::Bus(e)
        })?;
        if id != register::WHO_AM_I_VALUE {
            error!(
                "lsm6dso: WHO_AM_I: {:#04x}, expected: {:#04x}",
                id,
                register::WHO_AM_I_VALUE
            );
            return Err(Error::Device(id));
        }

        for (reg, value) in [
            (register::CTRL1_XL, config.ctrl1_xl()),
            (register::CTRL2_G, config.ctrl2_g()),
            (register::FIFO_CTRL4, config.fifo_ctrl4()),
        ] {
            trace!("lsm6dso: write_reg {:#04x} = {:#04x}", reg, value);
            if bus.write_u8(reg, value).is_err() {
                failed = true;
            }
        }

        drop(bus);

        if failed {
            error!("lsm6dso: configuration failed");
            return Err(Error::Config(ConfigError::InitWrite));
        }

        Ok(device)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the bus handle.
    pub fn release(self) -> &'a RefCell<I2C> {
        self.bus
    }

    pub fn who_am_i(&self) -> Result<u8, Error<E>> {
        Ok(self.acquire().read_u8(register::WHO_AM_I)?)
    }

    pub fn status(&self) -> Result<StatusFlags, Error<E>> {
        Ok(read_status(&mut self.acquire())?)
    }

    /// Linear acceleration in mg.
    pub fn read_acceleration(&self) -> Result<Sample, Error<E>> {
        self.read_sample(Sensor::Accelerometer)
    }

    /// Angular rate, scaled by [`convert::GYRO_RANGE`].
    pub fn read_angular_rate(&self) -> Result<Sample, Error<E>> {
        self.read_sample(Sensor::Gyroscope)
    }

    /// Temperature in hundredths of a degree Celsius.
    pub fn read_temperature(&self) -> Result<i16, Error<E>> {
        let (low, high) = self
            .acquire()
            .read_pair((register::OUT_TEMP_L, register::OUT_TEMP_H))
            .map_err(|e| {
                error!("lsm6dso: failed to read temperature");
                Error::Bus(e)
            })?;

        Ok(convert::temperature_centi_celsius(low, high))
    }

    /// Stop the sensor by clearing its data rate field.
    pub fn power_down(&self, sensor: Sensor) -> Result<(), Error<E>> {
        self.set_data_rate(sensor, DataRate::PowerDown)
    }

    /// Restart the sensor at its configured data rate.
    pub fn power_up(&self, sensor: Sensor) -> Result<(), Error<E>> {
        let rate = match sensor {
            Sensor::Accelerometer => self.config.accel_odr,
            Sensor::Gyroscope => self.config.gyro_odr,
        };
        self.set_data_rate(sensor, rate)
    }

    /// Full-scale table entry the samples of `sensor` are scaled by.
    pub fn full_scale(&self, sensor: Sensor) -> i16 {
        match sensor {
            Sensor::Accelerometer => self.config.accel_fs.milli_g(),
            Sensor::Gyroscope => self.config.gyro_fs.deci_dps(),
        }
    }

    fn read_sample(&self, sensor: Sensor) -> Result<Sample, Error<E>> {
        let full_scale = self.full_scale(sensor);

        let (x, y, z) = self.read_raw(sensor.output_block()).map_err(|e| {
            error!("lsm6dso: failed to read {:?}", sensor);
            Error::Bus(e)
        })?;

        Ok(Sample {
            x: convert::scale(x, full_scale),
            y: convert::scale(y, full_scale),
            z: convert::scale(z, full_scale),
        })
    }

    fn read_raw(&self, block: OutputBlock) -> Result<(i16, i16, i16), E> {
        let mut bus = self.acquire();

        // Only reported, the data-ready bits do not gate the read.
        match read_status(&mut bus) {
            Ok(status) => debug!("lsm6dso status: {:?}", status),
            Err(_) => warn!("lsm6dso: failed to read status"),
        }

        let (x_l, x_h) = bus.read_pair(block.x)?;
        let (y_l, y_h) = bus.read_pair(block.y)?;
        let (z_l, z_h) = bus.read_pair(block.z)?;

        Ok((
            convert::assemble(x_l, x_h),
            convert::assemble(y_l, y_h),
            convert::assemble(z_l, z_h),
        ))
    }

    fn set_data_rate(&self, sensor: Sensor, rate: DataRate) -> Result<(), Error<E>> {
        let reg = sensor.control_register();
        let mut bus = self.acquire();

        let ctrl = bus.read_u8(reg).map_err(|e| {
            error!("lsm6dso: failed to read control of {:?}", sensor);
            Error::Bus(e)
        })?;

        let ctrl = (ctrl & !register::CTRL_ODR_MASK) | ((rate as u8) << register::CTRL_ODR_SHIFT);

        bus.write_u8(reg, ctrl).map_err(|e| {
            error!("lsm6dso: failed to set {:?} data rate", sensor);
            Error::Bus(e)
        })
    }

    fn acquire(&self) -> Bus<'a, I2C> {
        Bus::acquire(self.bus, self.config.address)
    }
}

fn read_status<I2C: I2c<Error = E>, E>(bus: &mut Bus<'_, I2C>) -> Result<StatusFlags, E> {
    let status = bus.read_u8(register::STATUS_REG)?;
    Ok(StatusFlags::from_bits_truncate(status))
}
