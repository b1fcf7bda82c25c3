//! Trekkie watchface
//!
//! Date, time, stardate, battery and Bluetooth status for the PineTime.
//! The library holds everything that does not touch hardware and builds
//! for the host as well, the firmware binary (`firmware` feature) wires it
//! up to the nRF52832 peripherals.

#![cfg_attr(not(test), no_std)]

pub mod battery;
pub mod clock;
pub mod stardate;
pub mod ui;

pub use battery::BatteryInfo;
pub use clock::{ClockStyle, TimeUnits};
pub use stardate::Stardate;
pub use ui::{trekkie::TrekkieWatchface, WatchFace, WatchFaceState};
