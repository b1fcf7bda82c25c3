//! Bitmaps bundled with the watchface, 1 bit per pixel, rows padded to whole bytes

use embedded_graphics::{image::ImageRaw, pixelcolor::BinaryColor};

const BLUETOOTH_WIDTH: u32 = 9;
#[rustfmt::skip]
static BLUETOOTH: [u8; 26] = [
    0b0000_1000, 0b0000_0000,
    0b0000_1100, 0b0000_0000,
    0b0000_1010, 0b0000_0000,
    0b1000_1001, 0b0000_0000,
    0b0100_1010, 0b0000_0000,
    0b0010_1100, 0b0000_0000,
    0b0001_1000, 0b0000_0000,
    0b0010_1100, 0b0000_0000,
    0b0100_1010, 0b0000_0000,
    0b1000_1001, 0b0000_0000,
    0b0000_1010, 0b0000_0000,
    0b0000_1100, 0b0000_0000,
    0b0000_1000, 0b0000_0000,
];

const CHARGING_WIDTH: u32 = 8;
#[rustfmt::skip]
static CHARGING: [u8; 10] = [
    0b0000_0110,
    0b0000_1100,
    0b0001_1000,
    0b0011_0000,
    0b0111_1110,
    0b0000_1100,
    0b0001_1000,
    0b0011_0000,
    0b0110_0000,
    0b1100_0000,
];

/// Bluetooth rune, 9x13
pub fn bluetooth() -> ImageRaw<'static, BinaryColor> {
    ImageRaw::new(&BLUETOOTH, BLUETOOTH_WIDTH)
}

/// Lightning bolt shown while charging, 8x10
pub fn charging() -> ImageRaw<'static, BinaryColor> {
    ImageRaw::new(&CHARGING, CHARGING_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;

    #[test]
    fn icon_sizes() {
        assert_eq!(bluetooth().size(), Size::new(9, 13));
        assert_eq!(charging().size(), Size::new(8, 10));
    }
}
