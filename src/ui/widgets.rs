//! Display regions the watchface is built from
//!
//! Every widget owns a rectangle of the screen and remembers whether its
//! content changed since it was last drawn. Drawing a widget first clears
//! its rectangle with the colour underneath, so widgets can be repainted
//! one by one without touching the rest of the screen.

use embedded_graphics::{
    image::{GetPixel, ImageRaw},
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use heapless::String;

use super::ColorMode;

/// Buffer size of a text label
pub const BUF_LEN: usize = 16;

pub trait Widget {
    /// Screen area covered by the widget
    fn bounds(&self) -> Rectangle;

    /// Whether the widget has to be drawn again
    fn is_dirty(&self) -> bool;

    /// Request a repaint on the next draw
    fn mark_dirty(&mut self);

    /// Draw the widget and clear its dirty flag
    fn draw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>;
}

/// Single or multi line text
pub struct Label {
    bounds: Rectangle,
    style: MonoTextStyle<'static, ColorMode>,
    fill: ColorMode,
    text: String<BUF_LEN>,
    dirty: bool,
}

impl Label {
    /// Create new, empty label
    pub fn new(bounds: Rectangle, style: MonoTextStyle<'static, ColorMode>, fill: ColorMode) -> Self {
        Self {
            bounds,
            style,
            fill,
            text: String::new(),
            dirty: true,
        }
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Anything beyond the buffer size is cut off.
    pub fn set_text(&mut self, text: &str) {
        if self.text.as_str() == text {
            return;
        }

        self.text.clear();
        for c in text.chars() {
            if self.text.push(c).is_err() {
                break;
            }
        }
        self.dirty = true;
    }
}

impl Widget for Label {
    fn bounds(&self) -> Rectangle {
        self.bounds
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
        target.fill_solid(&self.bounds, self.fill)?;
        if !self.text.is_empty() {
            Text::with_baseline(&self.text, self.bounds.top_left, self.style, Baseline::Top)
                .draw(target)?;
        }
        self.dirty = false;
        Ok(())
    }
}

/// 1bpp bitmap that can be shown or hidden.
///
/// Set pixels are drawn in the icon colour, unset pixels are transparent.
pub struct Icon {
    bounds: Rectangle,
    image: ImageRaw<'static, BinaryColor>,
    color: ColorMode,
    fill: ColorMode,
    hidden: bool,
    dirty: bool,
}

impl Icon {
    /// Create new icon at `position`
    pub fn new(
        position: Point,
        image: ImageRaw<'static, BinaryColor>,
        color: ColorMode,
        fill: ColorMode,
    ) -> Self {
        Self {
            bounds: Rectangle::new(position, image.size()),
            image,
            color,
            fill,
            hidden: false,
            dirty: true,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        if self.hidden != hidden {
            self.hidden = hidden;
            self.dirty = true;
        }
    }
}

impl Widget for Icon {
    fn bounds(&self) -> Rectangle {
        self.bounds
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
        target.fill_solid(&self.bounds, self.fill)?;
        if !self.hidden {
            let origin = self.bounds.top_left;
            let pixels = self.bounds.points().filter_map(|p| {
                match self.image.pixel(p - origin) {
                    Some(BinaryColor::On) => Some(Pixel(p, self.color)),
                    _ => None,
                }
            });
            target.draw_iter(pixels)?;
        }
        self.dirty = false;
        Ok(())
    }
}

/// Horizontal bar filled from the left.
///
/// The width is counted in units of `unit` pixels, a full bar is
/// `max_units` wide.
pub struct ProgressBar {
    bounds: Rectangle,
    max_units: u32,
    unit: u32,
    percent: u8,
    color: ColorMode,
    fill: ColorMode,
    dirty: bool,
}

impl ProgressBar {
    /// Create new, empty progress bar
    pub fn new(
        position: Point,
        max_units: u32,
        unit: u32,
        height: u32,
        color: ColorMode,
        fill: ColorMode,
    ) -> Self {
        Self {
            bounds: Rectangle::new(position, Size::new(max_units * unit, height)),
            max_units,
            unit,
            percent: 0,
            color,
            fill,
            dirty: true,
        }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn set_percent(&mut self, percent: u8) {
        if self.percent != percent {
            self.percent = percent;
            self.dirty = true;
        }
    }

    /// Filled width in units
    pub fn filled_units(&self) -> u32 {
        super::format::bar_width(self.percent, self.max_units).min(self.max_units)
    }
}

impl Widget for ProgressBar {
    fn bounds(&self) -> Rectangle {
        self.bounds
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
        target.fill_solid(&self.bounds, self.fill)?;

        let width = self.filled_units() * self.unit;
        if width > 0 {
            Rectangle::new(
                self.bounds.top_left,
                Size::new(width, self.bounds.size.height),
            )
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(target)?;
        }
        self.dirty = false;
        Ok(())
    }
}
