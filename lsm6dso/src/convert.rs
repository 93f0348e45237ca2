//! Fixed-point conversion from raw counts to physical units.
//!
//! All products are taken in `i32` before dividing so that a full 16-bit
//! count times the largest table entry cannot overflow.

/// Accelerometer full scale in mg, indexed by the FS field code
/// (±2 g, ±16 g, ±4 g, ±8 g).
pub const ACCEL_RANGE: [i16; 4] = [2000, 16000, 4000, 8000];

/// Gyroscope full scale, indexed by the FS field code
/// (±245, ±500, ±1000, ±2000 dps). Entries are in 0.1 dps.
pub const GYRO_RANGE: [i16; 4] = [2450, 5000, 10000, 20000];

/// Zero-point correction added to the raw temperature count.
pub const TEMP_OFFSET: u16 = 0x1900;
/// Temperature counts per degree Celsius.
pub const TEMP_SENSITIVITY: i32 = 0x100;

/// Assemble a two's-complement value from its register pair.
pub fn assemble(low: u8, high: u8) -> i16 {
    i16::from_le_bytes([low, high])
}

/// Scale a raw count to milli-units for the given full-scale table entry.
/// Truncates toward zero.
pub fn scale(raw: i16, full_scale: i16) -> i16 {
    ((i32::from(raw) * i32::from(full_scale)) / i32::from(i16::MAX)) as i16
}

/// Temperature in hundredths of a degree Celsius.
///
/// The register pair is taken as unsigned and the offset is added in 16
/// bits, wrapping, before widening.
pub fn temperature_centi_celsius(low: u8, high: u8) -> i16 {
    let raw = u16::from_le_bytes([low, high]).wrapping_add(TEMP_OFFSET);
    ((i32::from(raw) * 100) / TEMP_SENSITIVITY) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_axis_bytes() {
        assert_eq!(assemble(0xFF, 0x7F), 32767);
        assert_eq!(assemble(0x00, 0x80), -32768);
        assert_eq!(assemble(0x34, 0x12), 0x1234);
        assert_eq!(assemble(0xFF, 0xFF), -1);
    }

    #[test]
    fn scale_hits_the_table_at_positive_full_scale() {
        for table in [&ACCEL_RANGE, &GYRO_RANGE] {
            for &fs in table.iter() {
                assert_eq!(scale(i16::MAX, fs), fs);
            }
        }
    }

    #[test]
    fn scale_is_within_one_count_at_negative_full_scale() {
        for table in [&ACCEL_RANGE, &GYRO_RANGE] {
            for &fs in table.iter() {
                let scaled = i32::from(scale(i16::MIN, fs));
                assert!((scaled + i32::from(fs)).abs() <= 1, "fs {}: {}", fs, scaled);
            }
        }
    }

    #[test]
    fn scale_of_zero_is_zero() {
        for &fs in ACCEL_RANGE.iter().chain(GYRO_RANGE.iter()) {
            assert_eq!(scale(0, fs), 0);
        }
    }

    #[test]
    fn scale_truncates_toward_zero() {
        // 1 * 2000 / 32767 and its negation both truncate to 0.
        assert_eq!(scale(1, 2000), 0);
        assert_eq!(scale(-1, 2000), 0);
        // Half scale on ±16 g.
        assert_eq!(scale(16384, 16000), 8000);
        assert_eq!(scale(-16384, 16000), -8000);
    }

    #[test]
    fn temperature_zero_point_is_25_degrees() {
        assert_eq!(temperature_centi_celsius(0x00, 0x00), 2500);
    }

    #[test]
    fn temperature_around_the_zero_point() {
        // One degree is 256 counts.
        assert_eq!(temperature_centi_celsius(0x00, 0x01), 2600);
        assert_eq!(temperature_centi_celsius(0x00, 0xFF), 2400);
        assert_eq!(temperature_centi_celsius(0x80, 0x00), 2550);
    }

    #[test]
    fn temperature_offset_wraps_in_16_bits() {
        // 0xE600 + 0x1900 = 0xFF00, no carry into a wider type.
        assert_eq!(temperature_centi_celsius(0x00, 0xE6), 25500);
        // 0xE700 + 0x1900 wraps to zero.
        assert_eq!(temperature_centi_celsius(0x00, 0xE7), 0);
        assert_eq!(temperature_centi_celsius(0xFF, 0xFF), 2499);
    }
}
