use esp_hal::{
    i2c::master::{Config, I2c},
    peripherals::I2C0,
    time::RateExtU32,
    Blocking,
};

pub mod pins {
    use esp_hal::gpio::GpioPin;

    // I2C
    pub const SDA: u8 = 21;
    pub type Sda = GpioPin<SDA>;
    pub const SCL: u8 = 22;
    pub type Scl = GpioPin<SCL>;

    pub struct I2cPins {
        pub sda: Sda,
        pub scl: Scl,
    }
}

/// The breakout pulls SA0 high.
pub const IMU_ADDRESS: u8 = lsm6dso::SECONDARY_ADDRESS;

pub fn init_i2c<'d>(i2c0: I2C0, pins: pins::I2cPins) -> I2c<'d, Blocking> {
    I2c::new(i2c0, Config::default().with_frequency(400_u32.kHz()))
        .unwrap()
        .with_sda(pins.sda)
        .with_scl(pins.scl)
}
