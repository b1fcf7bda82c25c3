//! Screen layout, colours and fonts of the LCARS watchface (240x240)

use embedded_graphics::{
    mono_font::{iso_8859_1::FONT_10X20, MonoFont},
    prelude::*,
    primitives::Rectangle,
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use super::ColorMode;

pub const LCD_W: u32 = 240;
pub const LCD_H: u32 = 240;

// LCARS palette
pub const BACKGROUND: ColorMode = ColorMode::new(0, 0, 0);
pub const ORANGE: ColorMode = ColorMode::new(31, 38, 0);
pub const LILAC: ColorMode = ColorMode::new(25, 38, 25);
pub const TEXT_LIGHT: ColorMode = ColorMode::new(31, 63, 31);
pub const TEXT_DARK: ColorMode = ColorMode::new(0, 0, 0);

// Fonts
pub const FONT_SMALL: &MonoFont<'static> = &FONT_10X20;
pub const FONT_MEDIUM: &MonoFont<'static> = &PROFONT_18_POINT;
pub const FONT_LARGE: &MonoFont<'static> = &PROFONT_24_POINT;

// Frame: an orange elbow along the top and left edge, a lilac block below it
pub const ELBOW: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(LCD_W, 150));
pub const ELBOW_OUTER_RADIUS: u32 = 30;
pub const BAR_CAP_RADIUS: u32 = 15;
pub const ELBOW_INNER: Rectangle = Rectangle::new(Point::new(60, 30), Size::new(LCD_W - 60, 120));
pub const ELBOW_INNER_RADIUS: u32 = 24;
pub const LOWER_BLOCK: Rectangle = Rectangle::new(Point::new(0, 154), Size::new(60, LCD_H - 154));
pub const LOWER_BLOCK_RADIUS: u32 = 30;

// Labels
pub const DATE: Rectangle = Rectangle::new(Point::new(140, 5), Size::new(84, 20));
pub const NICE_DATE: Rectangle = Rectangle::new(Point::new(6, 36), Size::new(52, 64));
pub const TIME: Rectangle = Rectangle::new(Point::new(70, 48), Size::new(150, 34));
pub const AMPM: Rectangle = Rectangle::new(Point::new(70, 86), Size::new(40, 20));
pub const STARDATE: Rectangle = Rectangle::new(Point::new(70, 160), Size::new(150, 26));
pub const BATTERY_PERCENT: Rectangle = Rectangle::new(Point::new(8, 104), Size::new(34, 20));

// Icons
pub const CHARGING_ICON: Point = Point::new(44, 109);
pub const BLUETOOTH_ICON: Point = Point::new(24, 170);

// Battery bar, 19 units of 2 pixels each
pub const BATTERY_BAR: Point = Point::new(8, 130);
pub const BATTERY_BAR_UNITS: u32 = 19;
pub const BATTERY_BAR_UNIT: u32 = 2;
pub const BATTERY_BAR_HEIGHT: u32 = 4;
