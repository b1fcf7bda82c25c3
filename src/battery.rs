//! Battery status
//!
//! Voltage conversion based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/battery.rs
//! and https://wiki.pine64.org/wiki/PineTime.

/// Battery state as reported to the watchface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryInfo {
    /// Charging state
    pub charging: bool,
    /// Battery percentage (0–100)
    pub percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    InvalidMeasurement,
}

/// Convert a 12 bit SAADC sample into the battery voltage in millivolts.
pub fn millivolts_from_adc(raw_measurement: i16) -> Result<u16, Error> {
    match raw_measurement {
        0..=4095 => {
            // keep as 32 bit for multiplication
            let adc_val = raw_measurement as u32;
            // multiply the ADC value by 2 * 1000 for mV and divide by (2 ^ 12 / 3.3V reference)
            Ok((adc_val * 2000 / 1241) as u16)
        }
        _ => Err(Error::InvalidMeasurement),
    }
}

/// Estimate the remaining capacity from the battery voltage.
///
/// Uses fixed data points with linear interpolation in between.
pub fn percent_from_millivolts(voltage: u16) -> u8 {
    (match voltage {
        0..=3449 => 0,
        3450..=3699 => (voltage - 3450) / 5,
        3700..=4199 => 50 + (voltage - 3700) / 10,
        _ => 100,
    }) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adc_to_millivolts() {
        assert_eq!(millivolts_from_adc(0), Ok(0));
        assert_eq!(millivolts_from_adc(2482), Ok(4000));
        assert_eq!(millivolts_from_adc(4095), Ok(6599));
    }

    #[test]
    fn adc_out_of_range() {
        assert_eq!(millivolts_from_adc(-1), Err(Error::InvalidMeasurement));
        assert_eq!(millivolts_from_adc(4096), Err(Error::InvalidMeasurement));
    }

    #[test]
    fn percent_breakpoints() {
        assert_eq!(percent_from_millivolts(3000), 0);
        assert_eq!(percent_from_millivolts(3449), 0);
        assert_eq!(percent_from_millivolts(3450), 0);
        assert_eq!(percent_from_millivolts(3699), 49);
        assert_eq!(percent_from_millivolts(3700), 50);
        assert_eq!(percent_from_millivolts(3950), 75);
        assert_eq!(percent_from_millivolts(4199), 99);
        assert_eq!(percent_from_millivolts(4200), 100);
        assert_eq!(percent_from_millivolts(u16::MAX), 100);
    }

    #[test]
    fn percent_never_decreases_with_voltage() {
        let mut previous = 0;
        for mv in 3000..4400 {
            let percent = percent_from_millivolts(mv);
            assert!(percent >= previous);
            assert!(percent <= 100);
            previous = percent;
        }
    }
}
