//! [ModelOptions] and other helper types.

use crate::models::Model;

/// [ModelOptions] are passed to the [`init`](Model::init) method of [Model]
/// implementations.
#[derive(Clone)]
#[non_exhaustive]
pub struct ModelOptions {
    /// Display size (w, h) in pixels.
    pub display_size: (u16, u16),
}

impl ModelOptions {
    /// Creates model options for the entire framebuffer.
    pub fn full_size<M: Model>() -> Self {
        Self {
            display_size: M::FRAMEBUFFER_SIZE,
        }
    }

    pub fn width(&self) -> u16 {
        self.display_size.0
    }

    pub fn height(&self) -> u16 {
        self.display_size.1
    }

    /// Number of pixels on the configured display.
    pub fn pixel_count(&self) -> usize {
        usize::from(self.width()) * usize::from(self.height())
    }

    /// Window covering the whole configured display.
    pub fn full_window(&self) -> Window {
        Window::new(
            0,
            0,
            self.width().saturating_sub(1),
            self.height().saturating_sub(1),
        )
    }
}

/// Inclusive pixel window, `(x0, y0)` to `(x1, y1)`.
///
/// Bounds are sent to the controller as given. Callers keep `x0 <= x1`,
/// `y0 <= y1` and stay inside the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl Window {
    pub const fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Window of `width` x `height` pixels with its top left corner at `(x, y)`.
    pub const fn with_size(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self::new(
            x,
            y,
            x.saturating_add(width.saturating_sub(1)),
            y.saturating_add(height.saturating_sub(1)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ILI9225;

    #[test]
    fn full_size_matches_model() {
        let options = ModelOptions::full_size::<ILI9225>();
        assert_eq!(options.display_size, (176, 220));
        assert_eq!(options.pixel_count(), 38_720);
        assert_eq!(options.full_window(), Window::new(0, 0, 175, 219));
    }

    #[test]
    fn window_with_size() {
        let window = Window::with_size(10, 20, 4, 3);
        assert_eq!(window, Window::new(10, 20, 13, 22));
    }
}
