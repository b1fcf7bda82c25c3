//! UI definitions module
//! Based on: https://github.com/lupyuen/pinetime-watchface/blob/master/src/lib.rs

use chrono::NaiveDateTime;
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

use crate::{battery::BatteryInfo, clock::TimeUnits};

pub mod format;
pub mod icons;
pub mod layout;
pub mod trekkie;
pub mod widgets;

/// Colour format of the PineTime display
pub type ColorMode = Rgb565;

/// Event handlers of a watchface.
///
/// The host calls at most one handler at a time and then asks the face to
/// render whatever changed.
pub trait WatchFace {
    /// Periodic tick, `units_changed` tells which calendar units rolled over.
    fn on_tick(&mut self, time: &NaiveDateTime, units_changed: TimeUnits);

    /// Battery charge or charging state changed
    fn on_battery_change(&mut self, battery: BatteryInfo);

    /// Bluetooth connection established or lost
    fn on_bluetooth_change(&mut self, connected: bool);

    /// Draw everything that changed since the last render
    fn render<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>;

    /// Fill every display region from a snapshot so the first frame is not blank.
    fn init(&mut self, state: &WatchFaceState) {
        self.on_tick(&state.time, TimeUnits::DAY);
        self.on_battery_change(state.battery);
        self.on_bluetooth_change(state.connected);
    }
}

/// State for the watch face
#[derive(Debug, Clone, Copy)]
pub struct WatchFaceState {
    pub time: NaiveDateTime,
    pub battery: BatteryInfo,
    pub connected: bool,
}
