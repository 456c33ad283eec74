//! A framebuffer that stores pixels as raw bytes.
//!
//! [`RawFrameBuf`] implements `DrawTarget`, so embedded-graphics primitives,
//! text and images can be drawn into it. The driver keeps an RGB888
//! [`FrameBuffer`] and converts it to the controller's RGB565 format when the
//! frame is pushed.

use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    pixelcolor::{
        raw::{RawData, RawU16},
        PixelColor, Rgb565, Rgb888, RgbColor,
    },
    primitives::Rectangle,
    Pixel,
};

/// Colors with a fixed raw byte encoding of `N` bytes.
pub trait IntoRawBytes<const N: usize>: PixelColor {
    fn into_raw_bytes(self) -> [u8; N];
    const BYTES_PER_PIXEL: usize = N;
}

/// Big-endian RGB565, the order the controller expects on the wire.
impl IntoRawBytes<2> for Rgb565 {
    fn into_raw_bytes(self) -> [u8; 2] {
        RawU16::from(self).into_inner().to_be_bytes()
    }
}

impl IntoRawBytes<3> for Rgb888 {
    fn into_raw_bytes(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }
}

/// Byte storage behind a [`RawFrameBuf`].
pub trait RawBufferBackendMut {
    fn as_mut_u8_slice(&mut self) -> &mut [u8];
    fn as_u8_slice(&self) -> &[u8];
    fn u8_len(&self) -> usize;
}

impl<'a> RawBufferBackendMut for &'a mut [u8] {
    fn as_mut_u8_slice(&mut self) -> &mut [u8] {
        self
    }
    fn as_u8_slice(&self) -> &[u8] {
        self
    }
    fn u8_len(&self) -> usize {
        self.len()
    }
}

impl RawBufferBackendMut for Vec<u8> {
    fn as_mut_u8_slice(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
    fn as_u8_slice(&self) -> &[u8] {
        self.as_slice()
    }
    fn u8_len(&self) -> usize {
        self.len()
    }
}

/// Heap allocated RGB888 framebuffer, the driver's drawing surface.
pub type FrameBuffer = RawFrameBuf<Rgb888, Vec<u8>, 3>;

pub struct RawFrameBuf<C, BUF, const N: usize>
where
    C: IntoRawBytes<N>,
    BUF: RawBufferBackendMut,
{
    buffer: BUF,
    width: usize,
    height: usize,
    _phantom_color: core::marker::PhantomData<C>,
}

impl<C, BUF, const N: usize> RawFrameBuf<C, BUF, N>
where
    C: IntoRawBytes<N>,
    BUF: RawBufferBackendMut,
{
    /// Wraps `buffer`, which must hold at least `width * height * N` bytes.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is too small.
    pub fn new(buffer: BUF, width: usize, height: usize) -> Self {
        let expected_len = width * height * N;
        assert!(
            buffer.u8_len() >= expected_len,
            "RawFrameBuf underlying buffer is too small. Expected at least {}, got {}.",
            expected_len,
            buffer.u8_len()
        );
        Self {
            buffer,
            width,
            height,
            _phantom_color: core::marker::PhantomData,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel bytes in row-major order, `N` bytes per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer.as_u8_slice()[0..self.active_len()]
    }

    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        let len = self.active_len();
        &mut self.buffer.as_mut_u8_slice()[0..len]
    }

    /// Raw bytes of the pixel at `(x, y)`, `None` outside the buffer.
    pub fn pixel_bytes(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y * self.width + x) * N;
        Some(&self.as_bytes()[index..index + N])
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: C) {
        let color_bytes = color.into_raw_bytes();
        let active_slice = self.as_mut_bytes();
        if N == 1 {
            active_slice.fill(color_bytes[0]);
        } else {
            for chunk in active_slice.chunks_exact_mut(N) {
                chunk.copy_from_slice(&color_bytes);
            }
        }
    }

    fn active_len(&self) -> usize {
        self.width * self.height * N
    }
}

impl<C, const N: usize> RawFrameBuf<C, Vec<u8>, N>
where
    C: IntoRawBytes<N>,
{
    /// Allocates a zeroed buffer for `width` x `height` pixels.
    pub fn zeroed(width: usize, height: usize) -> Self {
        Self::new(vec![0; width * height * N], width, height)
    }
}

impl<C, BUF, const N: usize> OriginDimensions for RawFrameBuf<C, BUF, N>
where
    C: IntoRawBytes<N>,
    BUF: RawBufferBackendMut,
{
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl<C, BUF, const N: usize> DrawTarget for RawFrameBuf<C, BUF, N>
where
    C: IntoRawBytes<N>,
    BUF: RawBufferBackendMut,
{
    type Color = C;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let width = self.width;
        let height = self.height;
        let buffer_slice = self.as_mut_bytes();

        for Pixel(coord, color) in pixels.into_iter() {
            if coord.x >= 0 && coord.x < width as i32 && coord.y >= 0 && coord.y < height as i32 {
                let byte_index = (coord.y as usize * width + coord.x as usize) * N;
                buffer_slice[byte_index..byte_index + N].copy_from_slice(&color.into_raw_bytes());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.is_zero_sized() {
            return Ok(());
        }

        let color_bytes = color.into_raw_bytes();
        let width = self.width;
        let buffer_slice = self.as_mut_bytes();

        let x0 = drawable_area.top_left.x as usize;
        let x1 = x0 + drawable_area.size.width as usize;
        let y0 = drawable_area.top_left.y as usize;
        let y1 = y0 + drawable_area.size.height as usize;

        for y in y0..y1 {
            let row = &mut buffer_slice[(y * width + x0) * N..(y * width + x1) * N];
            for chunk in row.chunks_exact_mut(N) {
                chunk.copy_from_slice(&color_bytes);
            }
        }
        Ok(())
    }
}
