//! General system configuration

use embassy_nrf::{
    config::{Config, Debug, HfclkSource, LfclkSource},
    interrupt::Priority,
};

/// Local time zone offset from UTC in seconds
pub const TIMEZONE: i32 = 3_600;

/// Backlight level at boot (0–7)
pub const BRIGHTNESS: u8 = 2;

/// Peripheral configuration for running next to the nRF softdevice
pub fn embassy_config() -> Config {
    // Config is `non_exhaustive`, start from the defaults
    let mut config = Config::default();

    // Set high-frequency and low-frequency clock sources to external
    config.hfclk_source = HfclkSource::ExternalXtal;
    config.lfclk_source = LfclkSource::ExternalXtal;

    // Enable DC/DC regulator to massively reduce runtime current consumption
    config.dcdc.reg1 = true;

    // Priorities 0, 1 and 4 are reserved for the softdevice
    config.gpiote_interrupt_priority = Priority::P2;
    config.time_interrupt_priority = Priority::P2;

    config.debug = Debug::Allowed;

    config
}
