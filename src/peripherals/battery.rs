//! Battery status check
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/battery.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::{gpio::Input, peripherals::P0_12, saadc::Saadc};

use trekkie::battery::{self, BatteryInfo, Error};

/// Battery API
pub struct Battery<'a> {
    /// ADC instance for battery voltage measurement
    adc: Saadc<'a, 1>,
    /// Charge indication pin:
    /// high = battery, low = charging
    pin_charge_indication: Input<'a, P0_12>,
    /// Last measurement
    info: BatteryInfo,
}

impl<'a> Battery<'a> {
    /// Configure battery settings on boot and take a first measurement
    pub async fn init(adc: Saadc<'a, 1>, charge_pin: Input<'a, P0_12>) -> Result<Self, Error> {
        let mut battery = Self {
            adc,
            pin_charge_indication: charge_pin,
            info: BatteryInfo::default(),
        };
        battery.update().await?;
        Ok(battery)
    }

    /// Return the current state of the battery.
    ///
    /// This returns the stored value. To fetch current data, call `update()` first.
    pub fn info(&self) -> BatteryInfo {
        self.info
    }

    /// Update the battery status by reading information from the
    /// hardware. Return whether or not the values changed.
    pub async fn update(&mut self) -> Result<bool, Error> {
        let charging = self.pin_charge_indication.is_low();
        let percent = battery::percent_from_millivolts(self.voltage().await?);

        let info = BatteryInfo { charging, percent };
        let changed = info != self.info;
        self.info = info;

        Ok(changed)
    }

    /// Battery voltage in millivolts
    async fn voltage(&mut self) -> Result<u16, Error> {
        let mut buf = [0; 1];
        self.adc.sample(&mut buf).await;
        battery::millivolts_from_adc(buf[0])
    }
}
