//! Interface traits and implementations

mod spi;
pub use spi::*;

/// Kind of a byte transfer, selected on the controller's register select (DC/RS) line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transfer {
    /// Register index, sent with DC low.
    Command,
    /// Register value or GRAM pixel data, sent with DC high.
    Data,
}

/// Command and data interface to the controller.
pub trait Interface {
    /// Error type
    type Error: core::fmt::Debug;

    /// Sends `bytes` as one logical transfer of the given kind.
    ///
    /// Implementations may split the bytes into several bus transactions but
    /// must keep their order.
    fn send(&mut self, kind: Transfer, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Sends a command (register index).
    fn send_command(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.send(Transfer::Command, bytes)
    }

    /// Sends parameter or pixel data.
    /// The GRAM write command must be sent before pixel data.
    fn send_data(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.send(Transfer::Data, bytes)
    }
}

impl<T: Interface + ?Sized> Interface for &mut T {
    type Error = T::Error;

    fn send(&mut self, kind: Transfer, bytes: &[u8]) -> Result<(), Self::Error> {
        T::send(self, kind, bytes)
    }
}
