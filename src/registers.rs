//! ILI9225 register map and register-level helpers.

use crate::interface::Interface;

/// Controller register addresses.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    DriverOutputControl = 0x01,
    LcdAcDrivingControl = 0x02,
    EntryMode = 0x03,
    DisplayControl1 = 0x07,
    BlankPeriodControl1 = 0x08,
    FrameCycleControl = 0x0B,
    InterfaceControl = 0x0C,
    OscillatorControl = 0x0F,
    PowerControl1 = 0x10,
    PowerControl2 = 0x11,
    PowerControl3 = 0x12,
    PowerControl4 = 0x13,
    PowerControl5 = 0x14,
    VciRecycling = 0x15,
    /// Horizontal GRAM address (cursor x).
    RamAddressSet1 = 0x20,
    /// Vertical GRAM address (cursor y).
    RamAddressSet2 = 0x21,
    GramData = 0x22,
    GateScanControl = 0x30,
    /// Scroll area end line.
    VerticalScrollControl1 = 0x31,
    /// Scroll area start line.
    VerticalScrollControl2 = 0x32,
    /// Scroll step.
    VerticalScrollControl3 = 0x33,
    PartialDrivingPosition1 = 0x34,
    PartialDrivingPosition2 = 0x35,
    /// Window end column.
    HorizontalWindowEnd = 0x36,
    /// Window start column.
    HorizontalWindowStart = 0x37,
    /// Window end row.
    VerticalWindowEnd = 0x38,
    /// Window start row.
    VerticalWindowStart = 0x39,
    GammaControl1 = 0x50,
    GammaControl2 = 0x51,
    GammaControl3 = 0x52,
    GammaControl4 = 0x53,
    GammaControl5 = 0x54,
    GammaControl6 = 0x55,
    GammaControl7 = 0x56,
    GammaControl8 = 0x57,
    GammaControl9 = 0x58,
    GammaControl10 = 0x59,
}

impl Register {
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// One entry of a register table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Write a 16-bit value to a register.
    Write(Register, u16),
    /// Wait before the next entry.
    DelayMs(u32),
}

/// Register-level writes on top of an [`Interface`].
pub trait InterfaceExt: Interface {
    /// Sends the register index as a command byte, then `value` as two data bytes, high byte first.
    fn write_register(&mut self, register: Register, value: u16) -> Result<(), Self::Error> {
        self.send_command(&[register.addr()])?;
        self.send_data(&value.to_be_bytes())
    }

    /// Selects the GRAM data register so that following data bytes land in the current window.
    ///
    /// Unlike other register writes the index goes out as a full 16-bit word.
    fn write_memory_start(&mut self) -> Result<(), Self::Error> {
        self.send_command(&u16::from(Register::GramData.addr()).to_be_bytes())
    }
}

impl<T: Interface + ?Sized> InterfaceExt for T {}
