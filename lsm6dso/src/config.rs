use crate::convert::{ACCEL_RANGE, GYRO_RANGE};

/// I2C address with SA0 pulled low.
pub const PRIMARY_ADDRESS: u8 = 0x6A;
/// I2C address with SA0 pulled high.
pub const SECONDARY_ADDRESS: u8 = 0x6B;

/// A configuration value outside of its enumerated set, or an
/// initialization that could not program every register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    DataRate(u8),
    AccelFullScale(u8),
    GyroFullScale(u8),
    Decimation(u8),
    /// At least one register write during initialization failed.
    InitWrite,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::DataRate(code) => write!(f, "Invalid data rate code: {:#x}", code),
            ConfigError::AccelFullScale(code) => {
                write!(f, "Invalid accelerometer full scale code: {}", code)
            }
            ConfigError::GyroFullScale(code) => {
                write!(f, "Invalid gyroscope full scale code: {}", code)
            }
            ConfigError::Decimation(code) => write!(f, "Invalid decimation code: {}", code),
            ConfigError::InitWrite => write!(f, "Failed to write configuration registers"),
        }
    }
}

/// Output data rate. The discriminant is the 4-bit ODR field value.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    PowerDown = 0x0,
    Hz12_5 = 0x1,
    Hz26 = 0x2,
    Hz52 = 0x3,
    Hz104 = 0x4,
    Hz208 = 0x5,
    Hz416 = 0x6,
    Hz833 = 0x7,
    Hz1660 = 0x8,
    Hz3330 = 0x9,
    Hz6660 = 0xA,
    Hz1_6 = 0xB,
}

impl DataRate {
    pub const fn millihertz(self) -> u32 {
        match self {
            DataRate::PowerDown => 0,
            DataRate::Hz1_6 => 1_600,
            DataRate::Hz12_5 => 12_500,
            DataRate::Hz26 => 26_000,
            DataRate::Hz52 => 52_000,
            DataRate::Hz104 => 104_000,
            DataRate::Hz208 => 208_000,
            DataRate::Hz416 => 416_000,
            DataRate::Hz833 => 833_000,
            DataRate::Hz1660 => 1_660_000,
            DataRate::Hz3330 => 3_330_000,
            DataRate::Hz6660 => 6_660_000,
        }
    }
}

impl TryFrom<u8> for DataRate {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0x0 => DataRate::PowerDown,
            0x1 => DataRate::Hz12_5,
            0x2 => DataRate::Hz26,
            0x3 => DataRate::Hz52,
            0x4 => DataRate::Hz104,
            0x5 => DataRate::Hz208,
            0x6 => DataRate::Hz416,
            0x7 => DataRate::Hz833,
            0x8 => DataRate::Hz1660,
            0x9 => DataRate::Hz3330,
            0xA => DataRate::Hz6660,
            0xB => DataRate::Hz1_6,
            _ => return Err(ConfigError::DataRate(code)),
        })
    }
}

/// Accelerometer full scale. The discriminant is the 2-bit FS field
/// value, which is not in order of magnitude.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScale {
    G2 = 0,
    G16 = 1,
    G4 = 2,
    G8 = 3,
}

impl AccelFullScale {
    /// Full scale in mg.
    pub const fn milli_g(self) -> i16 {
        ACCEL_RANGE[self as usize]
    }
}

impl TryFrom<u8> for AccelFullScale {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if usize::from(code) >= ACCEL_RANGE.len() {
            return Err(ConfigError::AccelFullScale(code));
        }
        Ok(match code {
            0 => AccelFullScale::G2,
            1 => AccelFullScale::G16,
            2 => AccelFullScale::G4,
            _ => AccelFullScale::G8,
        })
    }
}

/// Gyroscope full scale, same field encoding as [`AccelFullScale`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFullScale {
    Dps245 = 0,
    Dps500 = 1,
    Dps1000 = 2,
    Dps2000 = 3,
}

impl GyroFullScale {
    /// Full scale in 0.1 dps.
    pub const fn deci_dps(self) -> i16 {
        GYRO_RANGE[self as usize]
    }
}

impl TryFrom<u8> for GyroFullScale {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if usize::from(code) >= GYRO_RANGE.len() {
            return Err(ConfigError::GyroFullScale(code));
        }
        Ok(match code {
            0 => GyroFullScale::Dps245,
            1 => GyroFullScale::Dps500,
            2 => GyroFullScale::Dps1000,
            _ => GyroFullScale::Dps2000,
        })
    }
}

/// FIFO decimation factor.
///
/// Stored for completeness only: initialization does not program it.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decimation {
    #[default]
    None = 0,
    Div1 = 1,
    Div8 = 2,
    Div32 = 3,
}

impl TryFrom<u8> for Decimation {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Decimation::None),
            1 => Ok(Decimation::Div1),
            2 => Ok(Decimation::Div8),
            3 => Ok(Decimation::Div32),
            _ => Err(ConfigError::Decimation(code)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub address: u8,
    pub accel_odr: DataRate,
    pub gyro_odr: DataRate,
    pub accel_fs: AccelFullScale,
    pub gyro_fs: GyroFullScale,
    pub accel_decimation: Decimation,
    pub gyro_decimation: Decimation,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address: SECONDARY_ADDRESS,
            accel_odr: DataRate::Hz52,
            gyro_odr: DataRate::Hz52,
            accel_fs: AccelFullScale::G2,
            gyro_fs: GyroFullScale::Dps245,
            accel_decimation: Decimation::None,
            gyro_decimation: Decimation::None,
        }
    }
}

/// Raw register codes, as they would come from board parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawConfig {
    pub address: u8,
    pub accel_odr: u8,
    pub gyro_odr: u8,
    pub accel_fs: u8,
    pub gyro_fs: u8,
    pub accel_decimation: u8,
    pub gyro_decimation: u8,
}

impl Config {
    /// Validate every raw code against its enumerated set.
    pub fn from_codes(raw: RawConfig) -> Result<Self, ConfigError> {
        Ok(Config {
            address: raw.address,
            accel_odr: DataRate::try_from(raw.accel_odr)?,
            gyro_odr: DataRate::try_from(raw.gyro_odr)?,
            accel_fs: AccelFullScale::try_from(raw.accel_fs)?,
            gyro_fs: GyroFullScale::try_from(raw.gyro_fs)?,
            accel_decimation: Decimation::try_from(raw.accel_decimation)?,
            gyro_decimation: Decimation::try_from(raw.gyro_decimation)?,
        })
    }

    /// Value of CTRL1_XL for this configuration.
    pub(crate) fn ctrl1_xl(&self) -> u8 {
        ctrl_bits(self.accel_odr, self.accel_fs as u8)
    }

    /// Value of CTRL2_G for this configuration.
    pub(crate) fn ctrl2_g(&self) -> u8 {
        ctrl_bits(self.gyro_odr, self.gyro_fs as u8)
    }

    /// Value of FIFO_CTRL4: continuous mode, batched at the larger of the
    /// two ODR codes. Codes are compared as written to the register, so
    /// 1.6 Hz (0xB) wins over every other rate.
    pub(crate) fn fifo_ctrl4(&self) -> u8 {
        use crate::register::{FIFO_CTRL4_CONTINUOUS_MODE, FIFO_CTRL4_FIFO_ODR_SHIFT};

        let fifo_odr = (self.accel_odr as u8).max(self.gyro_odr as u8);
        (fifo_odr << FIFO_CTRL4_FIFO_ODR_SHIFT) | FIFO_CTRL4_CONTINUOUS_MODE
    }
}

fn ctrl_bits(odr: DataRate, fs: u8) -> u8 {
    use crate::register::{CTRL_FS_MASK, CTRL_FS_SHIFT, CTRL_ODR_SHIFT};

    ((odr as u8) << CTRL_ODR_SHIFT) | ((fs << CTRL_FS_SHIFT) & CTRL_FS_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawConfig {
        RawConfig {
            address: PRIMARY_ADDRESS,
            accel_odr: 0x4,
            gyro_odr: 0x6,
            accel_fs: 1,
            gyro_fs: 3,
            accel_decimation: 0,
            gyro_decimation: 2,
        }
    }

    #[test]
    fn from_codes_accepts_valid_codes() {
        let config = Config::from_codes(raw()).unwrap();
        assert_eq!(config.accel_odr, DataRate::Hz104);
        assert_eq!(config.gyro_odr, DataRate::Hz416);
        assert_eq!(config.accel_fs, AccelFullScale::G16);
        assert_eq!(config.gyro_fs, GyroFullScale::Dps2000);
        assert_eq!(config.gyro_decimation, Decimation::Div8);
    }

    #[test]
    fn full_scale_codes_at_or_past_the_table_end_are_rejected() {
        for code in 4..=u8::MAX {
            assert_eq!(
                AccelFullScale::try_from(code),
                Err(ConfigError::AccelFullScale(code))
            );
            assert_eq!(
                GyroFullScale::try_from(code),
                Err(ConfigError::GyroFullScale(code))
            );
        }

        let bad = RawConfig { accel_fs: 4, ..raw() };
        assert_eq!(
            Config::from_codes(bad),
            Err(ConfigError::AccelFullScale(4))
        );
        let bad = RawConfig { gyro_fs: 7, ..raw() };
        assert_eq!(Config::from_codes(bad), Err(ConfigError::GyroFullScale(7)));
    }

    #[test]
    fn full_scale_follows_the_field_encoding() {
        assert_eq!(AccelFullScale::G2.milli_g(), 2000);
        assert_eq!(AccelFullScale::G16.milli_g(), 16000);
        assert_eq!(AccelFullScale::G4.milli_g(), 4000);
        assert_eq!(AccelFullScale::G8.milli_g(), 8000);
        assert_eq!(GyroFullScale::Dps245.deci_dps(), 2450);
        assert_eq!(GyroFullScale::Dps2000.deci_dps(), 20000);
    }

    #[test]
    fn unknown_rate_and_decimation_codes_are_rejected() {
        assert_eq!(DataRate::try_from(0xC), Err(ConfigError::DataRate(0xC)));
        assert_eq!(Decimation::try_from(4), Err(ConfigError::Decimation(4)));
    }

    #[test]
    fn every_rate_code_round_trips() {
        for code in 0..=0xB {
            assert_eq!(DataRate::try_from(code).unwrap() as u8, code);
        }
    }

    #[test]
    fn control_register_layout() {
        let config = Config {
            accel_odr: DataRate::Hz104,
            accel_fs: AccelFullScale::G8,
            gyro_odr: DataRate::Hz1_6,
            gyro_fs: GyroFullScale::Dps500,
            ..Config::default()
        };
        assert_eq!(config.ctrl1_xl(), 0b0100_1100);
        assert_eq!(config.ctrl2_g(), 0b1011_0100);
    }

    #[test]
    fn fifo_rate_is_the_larger_rate_code() {
        let config = Config {
            accel_odr: DataRate::Hz208,
            gyro_odr: DataRate::Hz52,
            ..Config::default()
        };
        assert_eq!(config.fifo_ctrl4(), 0x56);

        // 1.6 Hz carries the largest code even though it is the slowest rate.
        let config = Config {
            accel_odr: DataRate::Hz1_6,
            gyro_odr: DataRate::Hz104,
            ..Config::default()
        };
        assert_eq!(config.fifo_ctrl4(), 0xB6);

        let config = Config {
            accel_odr: DataRate::Hz12_5,
            gyro_odr: DataRate::Hz1_6,
            ..Config::default()
        };
        assert_eq!(config.fifo_ctrl4(), 0xB6);
    }

    #[test]
    fn rate_codes_are_not_ordered_by_frequency() {
        assert!(DataRate::Hz1_6.millihertz() < DataRate::Hz12_5.millihertz());
        assert!((DataRate::Hz1_6 as u8) > (DataRate::Hz6660 as u8));
        assert_eq!(DataRate::PowerDown.millihertz(), 0);
    }
}
