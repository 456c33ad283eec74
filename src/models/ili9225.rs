use crate::{
    models::{Model, ResetTiming},
    registers::{Register, Register::*, Step, Step::DelayMs},
};

/// ILI9225 176x220 TFT controller in RGB565 mode.
pub struct ILI9225;

const fn w(register: Register, value: u16) -> Step {
    Step::Write(register, value)
}

impl Model for ILI9225 {
    const FRAMEBUFFER_SIZE: (u16, u16) = (176, 220);

    const RESET_TIMING: ResetTiming = ResetTiming {
        pre_high_ms: 5,
        low_ms: 20,
        post_high_ms: 150,
    };

    const INIT_SEQUENCE: &'static [Step] = &[
        // power control registers to a known state: SAP, DSTB, STB, APON, PON, AON, VCI1EN, VC,
        // BT, DC1-3, GVDD, VCOMH/VCOML all cleared
        w(PowerControl1, 0x0000),
        w(PowerControl2, 0x0000),
        w(PowerControl3, 0x0000),
        w(PowerControl4, 0x0000),
        w(PowerControl5, 0x0000),
        DelayMs(40),
        // power-on ramp
        w(PowerControl2, 0x0018),
        w(PowerControl3, 0x6121),
        w(PowerControl4, 0x006F),
        w(PowerControl5, 0x495F),
        w(PowerControl1, 0x0800),
        DelayMs(10),
        w(PowerControl2, 0x103B),
        DelayMs(50),
        // 220 lines, S528 to S1
        w(DriverOutputControl, 0x011C),
        // line inversion
        w(LcdAcDrivingControl, 0x0100),
        // GRAM increments horizontally, BGR
        w(EntryMode, 0x1030),
        w(DisplayControl1, 0x0000),
        // back and front porch
        w(BlankPeriodControl1, 0x0808),
        w(FrameCycleControl, 0x1100),
        w(InterfaceControl, 0x0000),
        w(OscillatorControl, 0x0D01),
        w(VciRecycling, 0x0020),
        w(RamAddressSet1, 0x0000),
        w(RamAddressSet2, 0x0000),
        // GRAM area
        w(GateScanControl, 0x0000),
        w(VerticalScrollControl1, 0x00DB),
        w(VerticalScrollControl2, 0x0000),
        w(VerticalScrollControl3, 0x0000),
        w(PartialDrivingPosition1, 0x00DB),
        w(PartialDrivingPosition2, 0x0000),
        w(HorizontalWindowEnd, 0x00AF),
        w(HorizontalWindowStart, 0x0000),
        w(VerticalWindowEnd, 0x00DB),
        w(VerticalWindowStart, 0x0000),
        // gamma curve
        w(GammaControl1, 0x0000),
        w(GammaControl2, 0x0808),
        w(GammaControl3, 0x080A),
        w(GammaControl4, 0x000A),
        w(GammaControl5, 0x0A08),
        w(GammaControl6, 0x0808),
        w(GammaControl7, 0x0000),
        w(GammaControl8, 0x0A00),
        w(GammaControl9, 0x0710),
        w(GammaControl10, 0x0710),
        // display on
        w(DisplayControl1, 0x0012),
        DelayMs(50),
        w(DisplayControl1, 0x1017),
    ];

    const DISPLAY_ON_SEQUENCE: &'static [Step] = &[
        w(DisplayControl1, 0x0012),
        DelayMs(50),
        w(DisplayControl1, 0x1017),
    ];

    const DISPLAY_OFF_SEQUENCE: &'static [Step] = &[w(DisplayControl1, 0x0000), DelayMs(50)];

    // SAP kept, STB set
    const SLEEP_SEQUENCE: &'static [Step] = &[w(PowerControl1, 0x0801)];

    const WAKE_SEQUENCE: &'static [Step] = &[w(PowerControl1, 0x0800), DelayMs(50)];
}
