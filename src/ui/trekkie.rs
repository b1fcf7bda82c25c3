//! LCARS watchface with stardate

use chrono::{NaiveDateTime, Timelike};
use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    prelude::*,
    primitives::{CornerRadiiBuilder, PrimitiveStyle, Rectangle, RoundedRectangle},
};

use super::{
    format, icons, layout,
    widgets::{Icon, Label, ProgressBar, Widget},
    ColorMode, WatchFace,
};
use crate::{
    battery::BatteryInfo,
    clock::{ClockStyle, TimeUnits},
    stardate::Stardate,
};

/// Background of the face: the orange elbow and the lilac block
pub struct LcarsFrame {
    dirty: bool,
}

impl LcarsFrame {
    fn new() -> Self {
        Self { dirty: true }
    }
}

impl Widget for LcarsFrame {
    fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(layout::LCD_W, layout::LCD_H))
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn draw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        target.fill_solid(&self.bounds(), layout::BACKGROUND)?;

        let elbow = CornerRadiiBuilder::new()
            .top_left(Size::new_equal(layout::ELBOW_OUTER_RADIUS))
            .top_right(Size::new_equal(layout::BAR_CAP_RADIUS))
            .build();
        RoundedRectangle::new(layout::ELBOW, elbow)
            .into_styled(PrimitiveStyle::with_fill(layout::ORANGE))
            .draw(target)?;

        let cut_out = CornerRadiiBuilder::new()
            .top_left(Size::new_equal(layout::ELBOW_INNER_RADIUS))
            .build();
        RoundedRectangle::new(layout::ELBOW_INNER, cut_out)
            .into_styled(PrimitiveStyle::with_fill(layout::BACKGROUND))
            .draw(target)?;

        let block = CornerRadiiBuilder::new()
            .bottom_left(Size::new_equal(layout::LOWER_BLOCK_RADIUS))
            .build();
        RoundedRectangle::new(layout::LOWER_BLOCK, block)
            .into_styled(PrimitiveStyle::with_fill(layout::LILAC))
            .draw(target)?;

        self.dirty = false;
        Ok(())
    }
}

/// Date, time, stardate, battery and Bluetooth status in LCARS style
pub struct TrekkieWatchface {
    /// Background
    pub frame: LcarsFrame,
    /// Short date label, `07.03.24`
    pub date_label: Label,
    /// Weekday, month and day on three lines
    pub nice_date_label: Label,
    /// Time label
    pub time_label: Label,
    /// am/pm label, empty on a 24 hour clock
    pub ampm_label: Label,
    /// Stardate label
    pub stardate_label: Label,
    /// Battery percentage label
    pub battery_label: Label,
    /// Shown while charging
    pub charging_icon: Icon,
    /// Battery charge bar
    pub battery_bar: ProgressBar,
    /// Shown while a phone is connected
    pub bluetooth_icon: Icon,
    style: ClockStyle,
}

impl TrekkieWatchface {
    /// Create new watchface, all labels empty and both icons hidden
    pub fn new(style: ClockStyle) -> Self {
        let light =
            |font: &'static MonoFont<'static>| MonoTextStyle::new(font, layout::TEXT_LIGHT);
        let dark = |font: &'static MonoFont<'static>| MonoTextStyle::new(font, layout::TEXT_DARK);

        let mut charging_icon = Icon::new(
            layout::CHARGING_ICON,
            icons::charging(),
            layout::TEXT_DARK,
            layout::ORANGE,
        );
        charging_icon.set_hidden(true);
        let mut bluetooth_icon = Icon::new(
            layout::BLUETOOTH_ICON,
            icons::bluetooth(),
            layout::TEXT_DARK,
            layout::LILAC,
        );
        bluetooth_icon.set_hidden(true);

        Self {
            frame: LcarsFrame::new(),
            date_label: Label::new(layout::DATE, dark(layout::FONT_SMALL), layout::ORANGE),
            nice_date_label: Label::new(
                layout::NICE_DATE,
                dark(layout::FONT_SMALL),
                layout::ORANGE,
            ),
            time_label: Label::new(layout::TIME, light(layout::FONT_LARGE), layout::BACKGROUND),
            ampm_label: Label::new(layout::AMPM, light(layout::FONT_SMALL), layout::BACKGROUND),
            stardate_label: Label::new(
                layout::STARDATE,
                light(layout::FONT_MEDIUM),
                layout::BACKGROUND,
            ),
            battery_label: Label::new(
                layout::BATTERY_PERCENT,
                dark(layout::FONT_SMALL),
                layout::ORANGE,
            ),
            charging_icon,
            battery_bar: ProgressBar::new(
                layout::BATTERY_BAR,
                layout::BATTERY_BAR_UNITS,
                layout::BATTERY_BAR_UNIT,
                layout::BATTERY_BAR_HEIGHT,
                layout::TEXT_DARK,
                layout::ORANGE,
            ),
            bluetooth_icon,
            style,
        }
    }

    /// Switch between 12 and 24 hour clock, applied on the next tick.
    pub fn set_style(&mut self, style: ClockStyle) {
        self.style = style;
    }

    /// Last battery state received, as shown on screen
    pub fn battery(&self) -> BatteryInfo {
        BatteryInfo {
            charging: !self.charging_icon.is_hidden(),
            percent: self.battery_bar.percent(),
        }
    }

    /// Whether anything has to be drawn
    pub fn is_dirty(&self) -> bool {
        self.frame.is_dirty()
            || self.date_label.is_dirty()
            || self.nice_date_label.is_dirty()
            || self.time_label.is_dirty()
            || self.ampm_label.is_dirty()
            || self.stardate_label.is_dirty()
            || self.battery_label.is_dirty()
            || self.charging_icon.is_dirty()
            || self.battery_bar.is_dirty()
            || self.bluetooth_icon.is_dirty()
    }

    /// Repaint the whole screen on the next render
    pub fn invalidate(&mut self) {
        self.frame.mark_dirty();
    }

    fn update_date(&mut self, time: &NaiveDateTime) {
        self.date_label.set_text(&format::date(time));
        self.nice_date_label.set_text(&format::friendly_date(time));
    }

    fn mark_widgets_dirty(&mut self) {
        self.date_label.mark_dirty();
        self.nice_date_label.mark_dirty();
        self.time_label.mark_dirty();
        self.ampm_label.mark_dirty();
        self.stardate_label.mark_dirty();
        self.battery_label.mark_dirty();
        self.charging_icon.mark_dirty();
        self.battery_bar.mark_dirty();
        self.bluetooth_icon.mark_dirty();
    }
}

impl WatchFace for TrekkieWatchface {
    fn on_tick(&mut self, time: &NaiveDateTime, units_changed: TimeUnits) {
        if units_changed.spans_day() {
            self.update_date(time);
        }

        let stardate = Stardate::from_datetime(time).label();
        #[cfg(feature = "defmt")]
        defmt::debug!("Stardate {}", stardate.as_str());
        self.stardate_label.set_text(&stardate);

        self.time_label.set_text(&format::time_of_day(time, self.style));
        match self.style {
            ClockStyle::TwelveHour => self.ampm_label.set_text(format::meridiem(time.hour())),
            ClockStyle::TwentyFourHour => self.ampm_label.set_text(""),
        }
    }

    fn on_battery_change(&mut self, battery: BatteryInfo) {
        self.battery_label.set_text(&format::battery_percent(battery.percent));
        self.charging_icon.set_hidden(!battery.charging);
        self.battery_bar.set_percent(battery.percent);
    }

    fn on_bluetooth_change(&mut self, connected: bool) {
        self.bluetooth_icon.set_hidden(!connected);
    }

    fn render<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        if self.frame.is_dirty() {
            #[cfg(feature = "defmt")]
            defmt::debug!("Full repaint");
            self.frame.draw(target)?;
            self.mark_widgets_dirty();
        }

        draw_if_dirty(&mut self.date_label, target)?;
        draw_if_dirty(&mut self.nice_date_label, target)?;
        draw_if_dirty(&mut self.time_label, target)?;
        draw_if_dirty(&mut self.ampm_label, target)?;
        draw_if_dirty(&mut self.stardate_label, target)?;
        draw_if_dirty(&mut self.battery_label, target)?;
        draw_if_dirty(&mut self.charging_icon, target)?;
        draw_if_dirty(&mut self.battery_bar, target)?;
        draw_if_dirty(&mut self.bluetooth_icon, target)
    }
}

fn draw_if_dirty<W, D>(widget: &mut W, target: &mut D) -> Result<(), D::Error>
where
    W: Widget,
    D: DrawTarget<Color = ColorMode>,
{
    if widget.is_dirty() {
        widget.draw(target)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::WatchFaceState;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn starts_blank_with_hidden_icons() {
        let face = TrekkieWatchface::new(ClockStyle::TwentyFourHour);

        assert_eq!(face.time_label.text(), "");
        assert!(face.charging_icon.is_hidden());
        assert!(face.bluetooth_icon.is_hidden());
        assert!(face.is_dirty());
    }

    #[test]
    fn tick_24h() {
        let mut face = TrekkieWatchface::new(ClockStyle::TwentyFourHour);
        face.on_tick(&at(2024, 3, 7, 13, 5), TimeUnits::ALL);

        assert_eq!(face.time_label.text(), "13:05");
        assert_eq!(face.ampm_label.text(), "");
        assert_eq!(face.date_label.text(), "07.03.24");
        assert_eq!(face.nice_date_label.text(), "Thu.\nMar.\n07");
        assert_eq!(face.stardate_label.text(), "24179.96");
    }

    #[test]
    fn tick_12h() {
        let mut face = TrekkieWatchface::new(ClockStyle::TwelveHour);

        face.on_tick(&at(2024, 3, 7, 0, 7), TimeUnits::ALL);
        assert_eq!(face.time_label.text(), "12:07");
        assert_eq!(face.ampm_label.text(), "am");

        face.on_tick(&at(2024, 3, 7, 13, 5), TimeUnits::MINUTE | TimeUnits::HOUR);
        assert_eq!(face.time_label.text(), "1:05");
        assert_eq!(face.ampm_label.text(), "pm");
    }

    #[test]
    fn switching_to_24h_clears_meridiem() {
        let mut face = TrekkieWatchface::new(ClockStyle::TwelveHour);
        face.on_tick(&at(2024, 3, 7, 13, 5), TimeUnits::ALL);
        assert_eq!(face.ampm_label.text(), "pm");

        face.set_style(ClockStyle::TwentyFourHour);
        face.on_tick(&at(2024, 3, 7, 13, 6), TimeUnits::MINUTE);
        assert_eq!(face.time_label.text(), "13:06");
        assert_eq!(face.ampm_label.text(), "");
    }

    #[test]
    fn date_only_follows_day_changes() {
        let mut face = TrekkieWatchface::new(ClockStyle::TwentyFourHour);
        face.on_tick(&at(2024, 3, 7, 23, 59), TimeUnits::ALL);

        // A minute tick keeps yesterday's date even when given a new one
        face.on_tick(&at(2024, 3, 8, 0, 0), TimeUnits::MINUTE | TimeUnits::HOUR);
        assert_eq!(face.date_label.text(), "07.03.24");
        assert_eq!(face.time_label.text(), "00:00");

        face.on_tick(&at(2024, 3, 8, 0, 0), TimeUnits::MINUTE | TimeUnits::HOUR | TimeUnits::DAY);
        assert_eq!(face.date_label.text(), "08.03.24");
        assert_eq!(face.nice_date_label.text(), "Fri.\nMar.\n08");
    }

    #[test]
    fn battery_status() {
        let mut face = TrekkieWatchface::new(ClockStyle::TwentyFourHour);

        face.on_battery_change(BatteryInfo {
            charging: true,
            percent: 100,
        });
        assert_eq!(face.battery_label.text(), "100");
        assert!(!face.charging_icon.is_hidden());
        assert_eq!(face.battery_bar.filled_units(), 19);

        face.on_battery_change(BatteryInfo {
            charging: false,
            percent: 45,
        });
        assert_eq!(face.battery_label.text(), "45%");
        assert!(face.charging_icon.is_hidden());
        assert_eq!(face.battery_bar.filled_units(), 8);
        assert_eq!(
            face.battery(),
            BatteryInfo {
                charging: false,
                percent: 45,
            }
        );
    }

    #[test]
    fn bluetooth_status() {
        let mut face = TrekkieWatchface::new(ClockStyle::TwentyFourHour);

        face.on_bluetooth_change(true);
        assert!(!face.bluetooth_icon.is_hidden());
        face.on_bluetooth_change(false);
        assert!(face.bluetooth_icon.is_hidden());
    }

    #[test]
    fn init_fills_everything() {
        let mut face = TrekkieWatchface::new(ClockStyle::TwentyFourHour);
        face.init(&WatchFaceState {
            time: at(2016, 1, 1, 0, 0),
            battery: BatteryInfo {
                charging: false,
                percent: 5,
            },
            connected: true,
        });

        assert_eq!(face.date_label.text(), "01.01.16");
        assert_eq!(face.stardate_label.text(), "15997.60");
        assert_eq!(face.battery_label.text(), "05%");
        assert!(!face.bluetooth_icon.is_hidden());
    }
}
