use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::spi::SpiDevice;

use super::{Interface, Transfer};

/// SPI mode expected by the controller: CPOL = 0, CPHA = 0, MSB first.
pub use embedded_hal::spi::MODE_0 as SPI_MODE;

/// Highest SCK frequency the driver is used with.
pub const SPI_MAX_FREQUENCY_HZ: u32 = 64_000_000;

/// Default upper bound for the length of a single SPI write.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Spi interface error
#[derive(Clone, Copy, Debug)]
pub enum SpiError<SPI, DC> {
    Spi(SPI),
    Dc(DC),
}

/// 4-line serial interface: an SPI device plus the register select (DC) line.
///
/// The SPI device must be configured with [`SPI_MODE`] and a clock no faster
/// than [`SPI_MAX_FREQUENCY_HZ`]; that is left to the HAL.
pub struct SpiInterface<SPI, DC> {
    spi: SPI,
    dc: DC,
    chunk_size: usize,
}

impl<SPI, DC> SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create new interface
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self {
            spi,
            dc,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Limits every SPI write to at most `chunk_size` bytes.
    ///
    /// Some SPI drivers reject long transactions (spidev defaults to 4096 bytes).
    /// A size of zero is treated as one.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Release the DC pin and SPI peripheral back, deconstructing the interface
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> Interface for SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    type Error = SpiError<SPI::Error, DC::Error>;

    fn send(&mut self, kind: Transfer, bytes: &[u8]) -> Result<(), Self::Error> {
        let level = PinState::from(kind == Transfer::Data);
        self.dc.set_state(level).map_err(SpiError::Dc)?;

        for chunk in bytes.chunks(self.chunk_size) {
            self.spi.write(chunk).map_err(SpiError::Spi)?;
        }
        Ok(())
    }
}
