//! Display models.

use embedded_hal::delay::DelayNs;

use crate::{
    interface::Interface,
    options::{ModelOptions, Window},
    registers::{InterfaceExt, Register, Step},
};

mod ili9225;

pub use ili9225::*;

/// Timing of the hardware reset pulse, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTiming {
    /// Time the line is held high before the pulse.
    pub pre_high_ms: u32,
    /// Length of the active low pulse.
    pub low_ms: u32,
    /// Time to wait after releasing the line before the first command.
    pub post_high_ms: u32,
}

/// Display model.
///
/// A model describes one controller variant through register tables; the
/// default methods drive the ILI922x register layout.
pub trait Model {
    /// The framebuffer size in pixels.
    const FRAMEBUFFER_SIZE: (u16, u16);

    /// Reset pulse timing.
    const RESET_TIMING: ResetTiming;

    /// Power-up and configuration table, run once after reset.
    const INIT_SEQUENCE: &'static [Step];

    /// Switches the panel output on.
    const DISPLAY_ON_SEQUENCE: &'static [Step];

    /// Switches the panel output off.
    const DISPLAY_OFF_SEQUENCE: &'static [Step];

    /// Enters standby. Expects the output to be off already.
    const SLEEP_SEQUENCE: &'static [Step];

    /// Leaves standby. The output is switched on afterwards.
    const WAKE_SEQUENCE: &'static [Step];

    /// Initializes the display for this model.
    fn init<DELAY, DI>(
        &mut self,
        di: &mut DI,
        delay: &mut DELAY,
        _options: &ModelOptions,
    ) -> Result<(), DI::Error>
    where
        DELAY: DelayNs,
        DI: Interface,
    {
        run_sequence(di, delay, Self::INIT_SEQUENCE)
    }

    /// Updates the address window of the display and moves the GRAM cursor to
    /// its top left corner.
    fn update_address_window<DI>(di: &mut DI, window: Window) -> Result<(), DI::Error>
    where
        DI: Interface,
    {
        di.write_register(Register::HorizontalWindowEnd, window.x1)?;
        di.write_register(Register::HorizontalWindowStart, window.x0)?;
        di.write_register(Register::VerticalWindowEnd, window.y1)?;
        di.write_register(Register::VerticalWindowStart, window.y0)?;
        di.write_register(Register::RamAddressSet1, window.x0)?;
        di.write_register(Register::RamAddressSet2, window.y0)
    }

    /// Switches the panel output on or off. GRAM content is kept.
    fn set_display_on<DI, DELAY>(di: &mut DI, delay: &mut DELAY, on: bool) -> Result<(), DI::Error>
    where
        DI: Interface,
        DELAY: DelayNs,
    {
        let sequence = if on {
            Self::DISPLAY_ON_SEQUENCE
        } else {
            Self::DISPLAY_OFF_SEQUENCE
        };
        run_sequence(di, delay, sequence)
    }

    ///
    /// Need to call [Self::wake] before issuing other commands
    ///
    fn sleep<DI, DELAY>(di: &mut DI, delay: &mut DELAY) -> Result<(), DI::Error>
    where
        DI: Interface,
        DELAY: DelayNs,
    {
        run_sequence(di, delay, Self::DISPLAY_OFF_SEQUENCE)?;
        run_sequence(di, delay, Self::SLEEP_SEQUENCE)
    }

    ///
    /// Wakes the display after it's been set to sleep via [Self::sleep]
    ///
    fn wake<DI, DELAY>(di: &mut DI, delay: &mut DELAY) -> Result<(), DI::Error>
    where
        DI: Interface,
        DELAY: DelayNs,
    {
        run_sequence(di, delay, Self::WAKE_SEQUENCE)?;
        run_sequence(di, delay, Self::DISPLAY_ON_SEQUENCE)
    }

    /// Sets the vertical scroll region.
    ///
    /// The `top_fixed_area` and `bottom_fixed_area` arguments can be used to
    /// define an area on the top and/or bottom of the display which won't be
    /// affected by scrolling. If the fixed areas leave no line to scroll, the
    /// whole framebuffer scrolls.
    ///
    /// After the scrolling region is defined the
    /// [`set_vertical_scroll_offset`](Self::set_vertical_scroll_offset) can be
    /// used to scroll the display.
    fn set_vertical_scroll_region<DI>(
        di: &mut DI,
        top_fixed_area: u16,
        bottom_fixed_area: u16,
    ) -> Result<(), DI::Error>
    where
        DI: Interface,
    {
        let rows = Self::FRAMEBUFFER_SIZE.1;

        let (start, end) = match top_fixed_area.checked_add(bottom_fixed_area) {
            Some(fixed) if fixed < rows => (top_fixed_area, rows - 1 - bottom_fixed_area),
            _ => (0, rows - 1),
        };

        di.write_register(Register::VerticalScrollControl1, end)?;
        di.write_register(Register::VerticalScrollControl2, start)
    }

    /// Sets the vertical scroll offset.
    ///
    /// Setting the vertical scroll offset shifts the vertical scroll region
    /// upwards by `offset` pixels.
    fn set_vertical_scroll_offset<DI>(di: &mut DI, offset: u16) -> Result<(), DI::Error>
    where
        DI: Interface,
    {
        di.write_register(Register::VerticalScrollControl3, offset)
    }
}

/// Runs a register table: every [`Step::Write`] goes out as a register write,
/// every [`Step::DelayMs`] blocks on `delay`.
pub fn run_sequence<DI, DELAY>(
    di: &mut DI,
    delay: &mut DELAY,
    steps: &[Step],
) -> Result<(), DI::Error>
where
    DI: Interface,
    DELAY: DelayNs,
{
    for step in steps {
        match *step {
            Step::Write(register, value) => di.write_register(register, value)?,
            Step::DelayMs(ms) => delay.delay_ms(ms),
        }
    }
    Ok(())
}
