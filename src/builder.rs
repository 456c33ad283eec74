//! [super::Display] builder module

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};

use crate::{interface::Interface, models::Model, options::ModelOptions, Display};

/// Builder for [Display] instances.
///
/// ```
/// use ili9225::{interface::SpiInterface, models::ILI9225, Builder};
/// # use ili9225::_mock::{MockDelay, MockOutputPin, MockSpi};
/// # let (spi, dc, rst, mut delay) = (MockSpi, MockOutputPin, MockOutputPin, MockDelay);
///
/// let di = SpiInterface::new(spi, dc);
/// let mut display = Builder::new(ILI9225, di)
///     .reset_pin(rst)
///     .init(&mut delay)
///     .unwrap();
/// display.display().unwrap();
/// ```
pub struct Builder<DI, MODEL, RST>
where
    DI: Interface,
    MODEL: Model,
{
    di: DI,
    model: MODEL,
    rst: Option<RST>,
    options: ModelOptions,
}

impl<DI, MODEL> Builder<DI, MODEL, NoResetPin>
where
    DI: Interface,
    MODEL: Model,
{
    /// Starts a builder for the full framebuffer size of `MODEL`, without a reset pin.
    #[must_use]
    pub fn new(model: MODEL, di: DI) -> Self {
        Self {
            di,
            model,
            rst: None,
            options: ModelOptions::full_size::<MODEL>(),
        }
    }
}

impl<DI, MODEL, RST> Builder<DI, MODEL, RST>
where
    DI: Interface,
    MODEL: Model,
    RST: OutputPin,
{
    /// Sets the visible display size in pixels.
    #[must_use]
    pub fn display_size(mut self, width: u16, height: u16) -> Self {
        self.options.display_size = (width, height);
        self
    }

    /// Uses `rst` for hardware resets.
    #[must_use]
    pub fn reset_pin<RST2: OutputPin>(self, rst: RST2) -> Builder<DI, MODEL, RST2> {
        Builder {
            di: self.di,
            model: self.model,
            rst: Some(rst),
            options: self.options,
        }
    }

    /// Allocates the framebuffer without touching the hardware.
    ///
    /// Any non-zero size is accepted; sizes other than the panel's own are
    /// passed through to the controller as given.
    /// [`Display::begin`] must run before the first frame is pushed.
    pub fn build(self) -> Result<Display<DI, MODEL, RST>, ConfigurationError> {
        let (width, height) = self.options.display_size;
        if width == 0 || height == 0 {
            return Err(ConfigurationError::InvalidDisplaySize);
        }

        Ok(Display::new(self.di, self.model, self.rst, self.options))
    }

    /// Builds the display and runs [`Display::begin`]: hardware reset, then
    /// the model's init table.
    pub fn init(
        self,
        delay_source: &mut impl DelayNs,
    ) -> Result<Display<DI, MODEL, RST>, InitError<DI::Error, RST::Error>> {
        let mut display = self.build()?;
        display.begin(delay_source)?;
        Ok(display)
    }
}

/// Error returned by [`Builder::init`] and [`Display::begin`].
#[derive(Debug)]
pub enum InitError<DIError, PinError> {
    /// Error caused by the display interface.
    Interface(DIError),
    /// Error caused by the reset pin.
    ResetPin(PinError),
    /// Invalid builder options.
    InvalidConfiguration(ConfigurationError),
}

/// Invalid [`Builder`] options.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigurationError {
    /// Width or height is zero.
    InvalidDisplaySize,
}

impl<DIError, PinError> From<ConfigurationError> for InitError<DIError, PinError> {
    fn from(value: ConfigurationError) -> Self {
        Self::InvalidConfiguration(value)
    }
}

/// Marker type for displays without a reset pin.
pub enum NoResetPin {}
impl digital::OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
impl digital::ErrorType for NoResetPin {
    type Error = core::convert::Infallible;
}
