//! Display control module for PineTime

use embassy_nrf::{
    gpio::Output,
    peripherals::{P0_18, P0_25, P0_26, SPI2},
    spim::Spim,
};

use display_interface_spi::SPIInterface;
use embassy_time::Delay;
use mipidsi::{models::ST7789, Builder, Orientation};

use trekkie::{ui::layout, WatchFace};

use super::backlight::Backlight;

type Lcd<'a> = mipidsi::Display<
    SPIInterface<Spim<'a, SPI2>, Output<'a, P0_18>, Output<'a, P0_25>>,
    ST7789,
    Output<'a, P0_26>,
>;

pub struct Display<'a> {
    /// ST7789 driver
    lcd: Lcd<'a>,
    // Kept alive so the backlight pins stay driven
    backlight: Backlight<'a>,
}

impl<'a> Display<'a> {
    /// Configure the display on boot
    pub fn init(
        spim: Spim<'a, SPI2>,
        cs_pin: Output<'a, P0_25>,
        dc_pin: Output<'a, P0_18>,
        rst_pin: Output<'a, P0_26>,
        backlight: Backlight<'a>,
        delay: &mut Delay,
    ) -> Result<Self, Error> {
        let lcd = Builder::st7789(SPIInterface::new(spim, dc_pin, cs_pin))
            .with_display_size(layout::LCD_W as u16, layout::LCD_H as u16)
            .with_orientation(Orientation::Portrait(false))
            .init(delay, Some(rst_pin))
            .map_err(|_| Error::Init)?;

        Ok(Self { lcd, backlight })
    }

    /// Draw whatever changed on the watchface
    pub fn render<F: WatchFace>(&mut self, face: &mut F) -> Result<(), Error> {
        face.render(&mut self.lcd).map_err(|_| Error::Draw)
    }

    /// Brightness of the display backlight
    pub fn brightness(&self) -> u8 {
        self.backlight.brightness()
    }
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    Init,
    Draw,
}
