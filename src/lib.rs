#![cfg_attr(not(test), no_std)]

//! This crate provides a blocking driver for TFT displays built on the ILI9225
//! controller (176x220 pixels, RGB565), connected over a 4-line SPI interface.
//!
//! The driver keeps an RGB888 framebuffer in memory. Draw into it with
//! [`embedded-graphics`](https://docs.rs/embedded-graphics), then push the
//! whole frame with [`Display::display`]; the pixels are converted to the
//! controller's RGB565 format on the way out.
//!
//! ```
//! use embedded_graphics::{
//!     pixelcolor::Rgb888,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//! };
//! use ili9225::{interface::SpiInterface, models::ILI9225, Builder};
//! # use ili9225::_mock::{MockDelay, MockOutputPin, MockSpi};
//! # let (spi, dc, rst, mut delay) = (MockSpi, MockOutputPin, MockOutputPin, MockDelay);
//!
//! let di = SpiInterface::new(spi, dc);
//! let mut display = Builder::new(ILI9225, di)
//!     .reset_pin(rst)
//!     .init(&mut delay)
//!     .unwrap();
//!
//! display.clear(Rgb888::BLACK);
//! Circle::new(Point::new(48, 70), 80)
//!     .into_styled(PrimitiveStyle::with_fill(Rgb888::RED))
//!     .draw(display.framebuffer_mut())
//!     .unwrap();
//! display.display().unwrap();
//! ```
//!
//! The SPI bus must be set up with [`interface::SPI_MODE`] and a clock of at
//! most [`interface::SPI_MAX_FREQUENCY_HZ`].

extern crate alloc;

#[macro_use]
mod fmt;

use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics_core::pixelcolor::{Rgb888, RgbColor};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

pub mod interface;

pub mod options;
use options::Window;

mod builder;
pub use builder::*;

pub mod color;
pub mod models;
pub mod raw_framebuf;
pub mod registers;

use models::Model;
use raw_framebuf::{FrameBuffer, RawBufferBackendMut, RawFrameBuf};
use registers::InterfaceExt;

/// Display driver structure.
pub struct Display<DI, MODEL, RST>
where
    DI: interface::Interface,
    MODEL: Model,
    RST: OutputPin,
{
    /// The display interface.
    di: DI,
    /// The display model instance.
    model: MODEL,
    /// The reset pin.
    rst: Option<RST>,
    /// Display options.
    options: options::ModelOptions,
    /// RGB888 drawing surface.
    framebuffer: FrameBuffer,
    /// RGB565 bytes of the last pushed frame, reused between frames.
    tx: Vec<u8>,
    /// Sleep state.
    sleeping: bool,
}

impl<DI, M, RST> Display<DI, M, RST>
where
    DI: interface::Interface,
    M: Model,
    RST: OutputPin,
{
    pub(crate) fn new(di: DI, model: M, rst: Option<RST>, options: options::ModelOptions) -> Self {
        let (width, height) = options.display_size;
        let pixels = options.pixel_count();
        Self {
            di,
            model,
            rst,
            framebuffer: FrameBuffer::zeroed(usize::from(width), usize::from(height)),
            tx: vec![0; pixels * 2],
            options,
            sleeping: false,
        }
    }

    /// Returns the configured display size (width, height) in pixels.
    pub fn size(&self) -> (u16, u16) {
        self.options.display_size
    }

    /// Resets the controller and runs the model's init table, then clears the
    /// framebuffer to black.
    ///
    /// Called by [`Builder::init`]; call it again to re-initialize the panel.
    pub fn begin<DLY: DelayNs>(
        &mut self,
        delay: &mut DLY,
    ) -> Result<(), InitError<DI::Error, RST::Error>> {
        self.reset(delay).map_err(InitError::ResetPin)?;

        debug!("ILI9225: running init sequence");
        self.model
            .init(&mut self.di, delay, &self.options)
            .map_err(InitError::Interface)?;

        self.clear(Rgb888::BLACK);
        self.sleeping = false;
        Ok(())
    }

    /// Pulses the reset line: high, low, high, with the model's hold times.
    ///
    /// Does nothing when no reset pin was given to the [`Builder`].
    pub fn reset<DLY: DelayNs>(&mut self, delay: &mut DLY) -> Result<(), RST::Error> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(());
        };

        debug!("ILI9225: hardware reset");
        let timing = M::RESET_TIMING;
        rst.set_high()?;
        delay.delay_ms(timing.pre_high_ms);
        rst.set_low()?;
        delay.delay_ms(timing.low_ms);
        rst.set_high()?;
        delay.delay_ms(timing.post_high_ms);
        Ok(())
    }

    /// Sets the pixel window for the following data write and selects GRAM.
    ///
    /// `None` selects the whole display. Bounds are not checked.
    pub fn set_window(&mut self, window: Option<Window>) -> Result<(), DI::Error> {
        let window = window.unwrap_or_else(|| self.options.full_window());
        trace!(
            "ILI9225: window ({=u16}, {=u16})-({=u16}, {=u16})",
            window.x0,
            window.y0,
            window.x1,
            window.y1
        );
        M::update_address_window(&mut self.di, window)?;
        self.di.write_memory_start()
    }

    /// Pushes the internal framebuffer to the display.
    pub fn display(&mut self) -> Result<(), DI::Error> {
        color::rgb888_to_rgb565_be(self.framebuffer.as_bytes(), &mut self.tx);
        self.flush_tx()
    }

    /// Pushes an external RGB888 image to the display.
    ///
    /// # Panics
    ///
    /// Panics if the image size differs from the display size. Scale or rotate
    /// the image before passing it in.
    pub fn display_image<BUF>(
        &mut self,
        image: &RawFrameBuf<Rgb888, BUF, 3>,
    ) -> Result<(), DI::Error>
    where
        BUF: RawBufferBackendMut,
    {
        let (width, height) = self.options.display_size;
        assert!(
            image.width() == usize::from(width) && image.height() == usize::from(height),
            "image is {}x{}, display is {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );
        color::rgb888_to_rgb565_be(image.as_bytes(), &mut self.tx);
        self.flush_tx()
    }

    /// Sends pre-encoded pixel data (big-endian RGB565) to `window`.
    pub fn show_raw_data(&mut self, window: Window, pixel_data: &[u8]) -> Result<(), DI::Error> {
        self.set_window(Some(window))?;
        self.di.send_data(pixel_data)
    }

    /// Fills the framebuffer with `color`. The panel is updated by the next
    /// [`display`](Self::display).
    pub fn clear(&mut self, color: Rgb888) {
        self.framebuffer.fill(color);
    }

    /// The drawing surface.
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// The drawing surface, for use as an embedded-graphics `DrawTarget`.
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.framebuffer
    }

    /// Switches the panel output on or off without touching GRAM.
    pub fn set_display_on<DLY: DelayNs>(
        &mut self,
        delay: &mut DLY,
        on: bool,
    ) -> Result<(), DI::Error> {
        M::set_display_on(&mut self.di, delay, on)
    }

    /// Sets the vertical scroll region of the display.
    pub fn set_vertical_scroll_region(
        &mut self,
        top_fixed_area: u16,
        bottom_fixed_area: u16,
    ) -> Result<(), DI::Error> {
        M::set_vertical_scroll_region(&mut self.di, top_fixed_area, bottom_fixed_area)
    }

    /// Sets the vertical scroll offset.
    pub fn set_vertical_scroll_offset(&mut self, offset: u16) -> Result<(), DI::Error> {
        M::set_vertical_scroll_offset(&mut self.di, offset)
    }

    /// Returns `true` if the display is currently in sleep mode.
    pub fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    /// Puts the display into standby.
    /// Need to call [Self::wake] before pushing new frames.
    pub fn sleep<DLY: DelayNs>(&mut self, delay: &mut DLY) -> Result<(), DI::Error> {
        debug!("ILI9225: sleep");
        M::sleep(&mut self.di, delay)?;
        self.sleeping = true;
        Ok(())
    }

    /// Wakes the display from standby.
    pub fn wake<DLY: DelayNs>(&mut self, delay: &mut DLY) -> Result<(), DI::Error> {
        debug!("ILI9225: wake");
        M::wake(&mut self.di, delay)?;
        self.sleeping = false;
        Ok(())
    }

    /// Releases the display interface, model instance, and reset pin.
    pub fn release(self) -> (DI, M, Option<RST>) {
        (self.di, self.model, self.rst)
    }

    /// Returns a mutable reference to the underlying display interface for sending raw commands.
    ///
    /// # Safety
    ///
    /// Raw register writes can change the controller state behind the driver's
    /// back, e.g. its window or power mode. The caller keeps them consistent.
    pub unsafe fn raw_interface_mut(&mut self) -> &mut DI {
        &mut self.di
    }

    fn flush_tx(&mut self) -> Result<(), DI::Error> {
        self.set_window(None)?;
        trace!("ILI9225: frame of {=usize} bytes", self.tx.len());
        self.di.send_data(&self.tx)
    }
}

/// Mock implementations of embedded-hal and interface traits.
///
/// Do not use types in this module outside of tests.
#[doc(hidden)]
pub mod _mock {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use core::convert::Infallible;

    use embedded_hal::{delay::DelayNs, digital, spi};

    use crate::{
        interface::{Interface, SpiInterface, Transfer},
        models::ILI9225,
        Builder, Display, NoResetPin,
    };

    pub fn new_mock_display() -> Display<MockDisplayInterface, ILI9225, NoResetPin> {
        Builder::new(ILI9225, MockDisplayInterface)
            .init(&mut MockDelay)
            .unwrap()
    }

    pub struct MockOutputPin;

    impl digital::OutputPin for MockOutputPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    impl digital::ErrorType for MockOutputPin {
        type Error = Infallible;
    }

    pub struct MockSpi;

    impl spi::SpiDevice for MockSpi {
        fn transaction(
            &mut self,
            _operations: &mut [spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    impl spi::ErrorType for MockSpi {
        type Error = Infallible;
    }

    pub struct MockDelay;

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    pub struct MockDisplayInterface;

    impl Interface for MockDisplayInterface {
        type Error = Infallible;

        fn send(&mut self, _kind: Transfer, _bytes: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    /// One logical transfer seen by [`RecordingInterface`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Sent {
        pub kind: Transfer,
        pub bytes: Vec<u8>,
    }

    impl Sent {
        pub fn new(kind: Transfer, bytes: &[u8]) -> Self {
            Self {
                kind,
                bytes: bytes.to_vec(),
            }
        }
    }

    /// Interface that keeps every transfer.
    #[derive(Default)]
    pub struct RecordingInterface {
        pub sent: Vec<Sent>,
    }

    impl Interface for RecordingInterface {
        type Error = Infallible;

        fn send(&mut self, kind: Transfer, bytes: &[u8]) -> Result<(), Self::Error> {
            self.sent.push(Sent::new(kind, bytes));
            Ok(())
        }
    }

    /// Hardware activity, in the order it happened.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Event {
        /// A named pin was driven to a level (`true` = high).
        Pin(&'static str, bool),
        /// One SPI write.
        Write(Vec<u8>),
        /// A delay, in nanoseconds.
        Delay(u64),
    }

    /// Shared event log for [`RecordingPin`], [`RecordingSpi`] and [`RecordingDelay`].
    #[derive(Clone, Default)]
    pub struct Recorder {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl Recorder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pin(&self, name: &'static str) -> RecordingPin {
            RecordingPin {
                name,
                recorder: self.clone(),
            }
        }

        pub fn spi(&self) -> RecordingSpi {
            RecordingSpi {
                recorder: self.clone(),
            }
        }

        pub fn delay(&self) -> RecordingDelay {
            RecordingDelay {
                recorder: self.clone(),
            }
        }

        /// Removes and returns everything recorded so far.
        pub fn take(&self) -> Vec<Event> {
            core::mem::take(&mut *self.events.borrow_mut())
        }

        fn push(&self, event: Event) {
            self.events.borrow_mut().push(event);
        }
    }

    pub struct RecordingPin {
        name: &'static str,
        recorder: Recorder,
    }

    impl digital::ErrorType for RecordingPin {
        type Error = Infallible;
    }

    impl digital::OutputPin for RecordingPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.recorder.push(Event::Pin(self.name, false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.recorder.push(Event::Pin(self.name, true));
            Ok(())
        }
    }

    pub struct RecordingSpi {
        recorder: Recorder,
    }

    impl spi::ErrorType for RecordingSpi {
        type Error = Infallible;
    }

    impl spi::SpiDevice for RecordingSpi {
        fn transaction(
            &mut self,
            operations: &mut [spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            for operation in operations.iter() {
                if let spi::Operation::Write(bytes) = operation {
                    self.recorder.push(Event::Write(bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    pub struct RecordingDelay {
        recorder: Recorder,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.recorder.push(Event::Delay(u64::from(ns)));
        }

        fn delay_us(&mut self, us: u32) {
            self.recorder.push(Event::Delay(u64::from(us) * 1_000));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.recorder.push(Event::Delay(u64::from(ms) * 1_000_000));
        }
    }

    /// Display wired to a [`Recorder`]: DC pin `"dc"`, reset pin `"rst"`.
    pub type RecordingDisplay =
        Display<SpiInterface<RecordingSpi, RecordingPin>, ILI9225, RecordingPin>;

    /// Builds a [`RecordingDisplay`] without initializing it.
    pub fn new_recording_display(recorder: &Recorder) -> RecordingDisplay {
        Builder::new(ILI9225, SpiInterface::new(recorder.spi(), recorder.pin("dc")))
            .reset_pin(recorder.pin("rst"))
            .build()
            .unwrap()
    }

    /// Groups SPI writes into logical transfers: every `"dc"` pin event
    /// starts a new transfer of the matching kind. Other events are skipped.
    pub fn transfers(events: &[Event]) -> Vec<Sent> {
        let mut sent: Vec<Sent> = Vec::new();
        for event in events {
            match event {
                Event::Pin("dc", level) => {
                    let kind = if *level {
                        Transfer::Data
                    } else {
                        Transfer::Command
                    };
                    sent.push(Sent::new(kind, &[]));
                }
                Event::Write(bytes) => {
                    if let Some(last) = sent.last_mut() {
                        last.bytes.extend_from_slice(bytes);
                    }
                }
                _ => {}
            }
        }
        sent
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::{
        pixelcolor::{Rgb565, Rgb888},
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
    };

    use super::*;
    use crate::_mock::{
        new_mock_display, new_recording_display, transfers, Event, MockDelay, Recorder, Sent,
    };
    use crate::interface::Transfer;

    const MS: u64 = 1_000_000;

    fn window_transfers(x0: u16, y0: u16, x1: u16, y1: u16) -> Vec<Sent> {
        let mut expected = Vec::new();
        for (register, value) in [
            (0x36, x1),
            (0x37, x0),
            (0x38, y1),
            (0x39, y0),
            (0x20, x0),
            (0x21, y0),
        ] {
            expected.push(Sent::new(Transfer::Command, &[register]));
            expected.push(Sent::new(Transfer::Data, &value.to_be_bytes()));
        }
        expected.push(Sent::new(Transfer::Command, &[0x00, 0x22]));
        expected
    }

    #[test]
    fn reset_without_pin_does_nothing() {
        let recorder = Recorder::new();
        let mut display = Builder::new(
            models::ILI9225,
            interface::SpiInterface::new(recorder.spi(), recorder.pin("dc")),
        )
        .build()
        .unwrap();

        display.reset(&mut recorder.delay()).unwrap();

        assert!(recorder.take().is_empty());
    }

    #[test]
    fn reset_pulses_pin_with_hold_times() {
        let recorder = Recorder::new();
        let mut display = new_recording_display(&recorder);

        display.reset(&mut recorder.delay()).unwrap();

        assert_eq!(
            recorder.take(),
            vec![
                Event::Pin("rst", true),
                Event::Delay(5 * MS),
                Event::Pin("rst", false),
                Event::Delay(20 * MS),
                Event::Pin("rst", true),
                Event::Delay(150 * MS),
            ]
        );
    }

    #[test]
    fn begin_resets_then_runs_init_table() {
        let recorder = Recorder::new();
        let mut display = new_recording_display(&recorder);
        display.framebuffer_mut().clear(Rgb888::WHITE).unwrap();

        display.begin(&mut recorder.delay()).unwrap();

        let events = recorder.take();
        assert_eq!(events[0], Event::Pin("rst", true));
        assert_eq!(events[5], Event::Delay(150 * MS));
        let delays: Vec<u64> = events[6..]
            .iter()
            .filter_map(|event| match event {
                Event::Delay(ns) => Some(*ns / MS),
                _ => None,
            })
            .collect();
        assert_eq!(delays, vec![40, 10, 50, 50]);

        let sent = transfers(&events);
        assert_eq!(sent.len(), 44 * 2);
        assert_eq!(sent[0], Sent::new(Transfer::Command, &[0x10]));
        assert_eq!(sent[1], Sent::new(Transfer::Data, &[0x00, 0x00]));
        assert_eq!(sent[86], Sent::new(Transfer::Command, &[0x07]));
        assert_eq!(sent[87], Sent::new(Transfer::Data, &[0x10, 0x17]));

        assert!(display.framebuffer().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn set_window_defaults_to_full_display() {
        let recorder = Recorder::new();
        let mut display = new_recording_display(&recorder);

        display.set_window(None).unwrap();

        assert_eq!(transfers(&recorder.take()), window_transfers(0, 0, 175, 219));
    }

    #[test]
    fn set_window_sends_both_bytes_of_each_bound() {
        let recorder = Recorder::new();
        let mut display = new_recording_display(&recorder);

        display.set_window(Some(Window::new(10, 20, 300, 260))).unwrap();

        assert_eq!(transfers(&recorder.take()), window_transfers(10, 20, 300, 260));
    }

    #[test]
    fn clear_fills_framebuffer() {
        let mut display = new_mock_display();

        display.clear(Rgb888::RED);
        assert!(display
            .framebuffer()
            .as_bytes()
            .chunks_exact(3)
            .all(|px| px == [255u8, 0, 0]));

        display.clear(Rgb888::BLACK);
        assert!(display.framebuffer().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn display_pushes_window_then_one_frame() {
        let recorder = Recorder::new();
        let mut display = new_recording_display(&recorder);
        display.clear(Rgb888::BLACK);

        display.display().unwrap();

        let events = recorder.take();
        let sent = transfers(&events);
        let window = window_transfers(0, 0, 175, 219);
        assert_eq!(sent.len(), window.len() + 1);
        assert_eq!(sent[..window.len()], window[..]);

        let frame = &sent[window.len()];
        assert_eq!(frame.kind, Transfer::Data);
        assert_eq!(frame.bytes.len(), 77_440);
        assert!(frame.bytes.iter().all(|&b| b == 0));

        let frame_writes: Vec<usize> = events
            .iter()
            .rev()
            .take_while(|event| matches!(event, Event::Write(_)))
            .map(|event| match event {
                Event::Write(bytes) => bytes.len(),
                _ => 0,
            })
            .collect();
        assert_eq!(frame_writes.len(), 19);
        assert!(frame_writes.iter().all(|&len| len <= 4096));
    }

    #[test]
    fn display_converts_drawn_pixels() {
        let recorder = Recorder::new();
        let mut display = new_recording_display(&recorder);
        Rectangle::new(Point::new(0, 0), Size::new(2, 1))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::new(0xFF, 0x80, 0x08)))
            .draw(display.framebuffer_mut())
            .unwrap();
        display
            .framebuffer_mut()
            .draw_iter([Pixel(Point::new(175, 219), Rgb888::BLUE)])
            .unwrap();

        display.display().unwrap();

        let sent = transfers(&recorder.take());
        let frame = &sent.last().unwrap().bytes;
        assert_eq!(frame[..4], [0xFCu8, 0x01, 0xFC, 0x01]);
        assert_eq!(frame[4..6], [0x00u8, 0x00]);
        assert_eq!(frame[frame.len() - 2..], [0x00u8, 0x1F]);
    }

    #[test]
    fn display_image_pushes_external_buffer() {
        let recorder = Recorder::new();
        let mut display = new_recording_display(&recorder);
        let mut image = raw_framebuf::FrameBuffer::zeroed(176, 220);
        image.clear(Rgb888::GREEN).unwrap();

        display.display_image(&image).unwrap();

        let sent = transfers(&recorder.take());
        let frame = &sent.last().unwrap().bytes;
        assert_eq!(frame.len(), 77_440);
        assert!(frame.chunks_exact(2).all(|px| px == [0x07u8, 0xE0]));
        assert!(display.framebuffer().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    #[should_panic]
    fn display_image_rejects_wrong_size() {
        let mut display = new_mock_display();
        let image = raw_framebuf::FrameBuffer::zeroed(220, 176);

        let _ = display.display_image(&image);
    }

    #[test]
    fn custom_size_pushes_smaller_frame() {
        let recorder = Recorder::new();
        let mut display = Builder::new(
            models::ILI9225,
            interface::SpiInterface::new(recorder.spi(), recorder.pin("dc")),
        )
        .display_size(100, 50)
        .build()
        .unwrap();

        display.display().unwrap();

        let sent = transfers(&recorder.take());
        assert_eq!(sent[..13], window_transfers(0, 0, 99, 49)[..]);
        assert_eq!(sent[13].bytes.len(), 100 * 50 * 2);
    }

    #[test]
    fn landscape_size_pushes_wide_window() {
        let recorder = Recorder::new();
        let mut display = Builder::new(
            models::ILI9225,
            interface::SpiInterface::new(recorder.spi(), recorder.pin("dc")),
        )
        .display_size(220, 176)
        .build()
        .unwrap();

        display.display().unwrap();

        let sent = transfers(&recorder.take());
        assert_eq!(sent[..13], window_transfers(0, 0, 219, 175)[..]);
        assert_eq!(sent[13].bytes.len(), 220 * 176 * 2);
    }

    #[test]
    fn show_raw_data_targets_window() {
        let recorder = Recorder::new();
        let mut display = new_recording_display(&recorder);
        let mut pixels = [0u8; 4 * 2];
        let mut raw = raw_framebuf::RawFrameBuf::<Rgb565, _, 2>::new(&mut pixels[..], 2, 2);
        raw.clear(Rgb565::WHITE).unwrap();

        display
            .show_raw_data(Window::with_size(4, 5, 2, 2), raw.as_bytes())
            .unwrap();

        let sent = transfers(&recorder.take());
        assert_eq!(sent[..13], window_transfers(4, 5, 5, 6)[..]);
        assert_eq!(sent[13], Sent::new(Transfer::Data, &[0xFF; 8]));
    }

    #[test]
    fn sleep_and_wake_track_state() {
        let mut display = new_mock_display();
        assert!(!display.is_sleeping());

        display.sleep(&mut MockDelay).unwrap();
        assert!(display.is_sleeping());

        display.wake(&mut MockDelay).unwrap();
        assert!(!display.is_sleeping());
    }

    #[test]
    fn display_off_then_on() {
        let recorder = Recorder::new();
        let mut display = new_recording_display(&recorder);

        display.set_display_on(&mut recorder.delay(), false).unwrap();
        display.set_display_on(&mut recorder.delay(), true).unwrap();

        let events = recorder.take();
        assert_eq!(
            transfers(&events),
            vec![
                Sent::new(Transfer::Command, &[0x07]),
                Sent::new(Transfer::Data, &[0x00, 0x00]),
                Sent::new(Transfer::Command, &[0x07]),
                Sent::new(Transfer::Data, &[0x00, 0x12]),
                Sent::new(Transfer::Command, &[0x07]),
                Sent::new(Transfer::Data, &[0x10, 0x17]),
            ]
        );
        assert_eq!(
            events.iter().filter(|event| matches!(event, Event::Delay(_))).count(),
            2
        );
    }

    #[test]
    fn release_returns_parts() {
        let display = new_mock_display();
        let (_di, _model, rst) = display.release();
        assert!(rst.is_none());
    }
}
