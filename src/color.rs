//! Pixel format conversion and named colors.

use embedded_graphics_core::pixelcolor::{raw::RawU16, Rgb565, Rgb888};

/// Packs 8-bit red, green and blue components into an RGB565 word.
#[inline]
pub const fn color565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Converts packed RGB888 pixels (`[r, g, b, r, g, b, ...]`) into the
/// controller's big-endian RGB565 byte stream.
///
/// Pixels are processed in order until either buffer runs out; the number of
/// converted pixels is returned. A trailing partial pixel in `src` is ignored.
pub fn rgb888_to_rgb565_be(src: &[u8], dst: &mut [u8]) -> usize {
    let mut converted = 0;
    for (rgb, out) in src.chunks_exact(3).zip(dst.chunks_exact_mut(2)) {
        let [hi, lo] = color565(rgb[0], rgb[1], rgb[2]).to_be_bytes();
        out[0] = hi;
        out[1] = lo;
        converted += 1;
    }
    converted
}

/// Basic colors in the controller's native format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Palette {
    Black,
    Blue,
    Red,
    Green,
    Cyan,
    Magenta,
    Yellow,
    White,
}

impl Palette {
    /// RGB565 value of the color.
    pub const fn rgb565(self) -> u16 {
        match self {
            Palette::Black => 0x0000,
            Palette::Blue => 0x001F,
            Palette::Red => 0xF800,
            Palette::Green => 0x07E0,
            Palette::Cyan => 0x07FF,
            Palette::Magenta => 0xF81F,
            Palette::Yellow => 0xFFE0,
            Palette::White => 0xFFFF,
        }
    }
}

impl From<Palette> for Rgb565 {
    fn from(color: Palette) -> Self {
        RawU16::new(color.rgb565()).into()
    }
}

impl From<Palette> for Rgb888 {
    fn from(color: Palette) -> Self {
        Rgb565::from(color).into()
    }
}
