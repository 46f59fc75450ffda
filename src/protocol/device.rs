//! # Device Control Commands
//!
//! Cash drawer, buzzer, error recovery, macros, automatic status back,
//! serial counter and printer ID.
//!
//! ## Real-Time Commands
//!
//! `DLE ENQ` and `DLE DC4` are handled as soon as they arrive, even while
//! the printer is offline or its receive buffer is full:
//!
//! | Command | Description |
//! |---------|-------------|
//! | DLE ENQ 1 | Recover from error, restart from the failing line |
//! | DLE ENQ 2 | Recover from error, clear receive and print buffers |
//! | DLE DC4 1 m t | Drawer pulse |
//!
//! Recovery is only effective after an autocutter, black mark or
//! platen-open error.

use super::commands::{DC2, DC4, DLE, ENQ, ESC, FF, GS, u16_le};
use crate::error::{EscPosError, ensure_range};

// ============================================================================
// REAL-TIME COMMANDS
// ============================================================================

/// Error recovery mode for `DLE ENQ n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Recovery {
    /// Restart printing from the line where the error occurred
    Restart = 1,
    /// Clear the receive and print buffers
    Cancel = 2,
}

/// Drawer kick-out connector pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DrawerPin {
    #[default]
    Pin2 = 0,
    Pin5 = 1,
}

/// Recover from a recoverable error (DLE ENQ n)
pub fn recover(mode: Recovery) -> Vec<u8> {
    vec![DLE, ENQ, mode as u8]
}

/// # Generate Pulse in Real Time (DLE DC4 1 m t)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | DLE DC4 SOH m t |
/// | Hex     | 10 14 01 m t |
/// | Decimal | 16 20 1 m t |
///
/// ## Parameters
///
/// - `pin`: drawer connector pin
/// - `t`: on-time and off-time, `t × 100ms`, 1-8
pub fn realtime_pulse(pin: DrawerPin, t: u8) -> Result<Vec<u8>, EscPosError> {
    ensure_range("pulse time", t, 1, 8)?;
    Ok(vec![DLE, DC4, 1, pin as u8, t])
}

// ============================================================================
// DRAWER AND BUZZER
// ============================================================================

/// # Generate Pulse (ESC p m t1 t2)
///
/// Drives the drawer connector: on for `on_time × 2ms`, off for
/// `off_time × 2ms`. A zero off-time is raised to the on-time by the
/// printer.
pub fn pulse(pin: DrawerPin, on_time: u8, off_time: u8) -> Vec<u8> {
    vec![ESC, b'p', pin as u8, on_time, off_time]
}

/// # Beep (ESC B n t)
///
/// Sounds the buzzer `count` times, each for `duration × 50ms`.
/// Both values must be 1-9.
pub fn beep(count: u8, duration: u8) -> Result<Vec<u8>, EscPosError> {
    ensure_range("beep count", count, 1, 9)?;
    ensure_range("beep duration", duration, 1, 9)?;
    Ok(vec![ESC, b'B', count, duration])
}

// ============================================================================
// PANEL, PERIPHERALS AND MOTION UNITS
// ============================================================================

/// Enable or disable the panel buttons (ESC c 5 n)
pub fn panel_buttons(enabled: bool) -> Vec<u8> {
    vec![ESC, b'c', b'5', u8::from(!enabled)]
}

/// Select peripheral device (ESC = n)
///
/// Bit 0 set enables the printer; with it clear the printer ignores
/// everything except real-time commands until re-enabled.
pub fn peripheral_device(n: u8) -> Vec<u8> {
    vec![ESC, b'=', n]
}

/// Set horizontal and vertical motion units to `1/x` and `1/y` inch (GS P x y)
///
/// Zero restores the default for that axis (x = 200, y = 400).
pub fn motion_units(x: u8, y: u8) -> Vec<u8> {
    vec![GS, b'P', x, y]
}

/// Print the self-test page (DC2 T)
pub fn test_page() -> Vec<u8> {
    vec![DC2, b'T']
}

/// Feed black-mark paper to the print start position (GS FF)
pub fn feed_marked_paper() -> Vec<u8> {
    vec![GS, FF]
}

// ============================================================================
// MACROS
// ============================================================================

/// Start or end a macro definition (GS :)
pub fn toggle_macro_definition() -> Vec<u8> {
    vec![GS, b':']
}

/// How a stored macro is replayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroExecution {
    /// Number of runs, 1-255
    pub repeat: u8,
    /// Wait between runs, `wait × 100ms`
    pub wait: u8,
    /// 0 runs immediately, 1 waits for the FEED button before each run
    pub mode: u8,
}

/// # Execute Macro (GS ^ r t m)
pub fn execute_macro(exec: &MacroExecution) -> Result<Vec<u8>, EscPosError> {
    ensure_range("macro repeat count", exec.repeat, 1, u8::MAX)?;
    ensure_range("macro mode", exec.mode, 0, 1)?;
    Ok(vec![GS, b'^', exec.repeat, exec.wait, exec.mode])
}

// ============================================================================
// AUTOMATIC STATUS BACK
// ============================================================================

/// Bit 2 of `GS a n`: report error status changes
pub const ASB_ERROR_STATUS: u8 = 0x04;

/// Bit 3 of `GS a n`: report paper sensor changes
pub const ASB_PAPER_SENSOR: u8 = 0x08;

/// Which status changes the printer reports on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AsbFlags {
    pub error_status: bool,
    pub paper_sensor: bool,
}

impl AsbFlags {
    pub const fn to_byte(self) -> u8 {
        let mut n = 0;
        if self.error_status {
            n |= ASB_ERROR_STATUS;
        }
        if self.paper_sensor {
            n |= ASB_PAPER_SENSOR;
        }
        n
    }
}

/// Enable/disable Automatic Status Back (GS a n)
pub fn automatic_status_back(flags: AsbFlags) -> Vec<u8> {
    vec![GS, b'a', flags.to_byte()]
}

// ============================================================================
// SERIAL NUMBER COUNTER
// ============================================================================

/// Padding used when the counter is printed (`GS C 0 n`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CounterPrintMode {
    /// Right aligned, padded with spaces
    #[default]
    SpacesLeft = 0,
    /// Right aligned, padded with zeros
    ZerosLeft = 1,
    /// Left aligned, padded with spaces
    SpacesRight = 2,
}

impl TryFrom<u8> for CounterPrintMode {
    type Error = EscPosError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(CounterPrintMode::SpacesLeft),
            1 => Ok(CounterPrintMode::ZerosLeft),
            2 => Ok(CounterPrintMode::SpacesRight),
            _ => Err(EscPosError::out_of_range("counter print mode", n, 0u8, 2u8)),
        }
    }
}

/// Counting behaviour for `GS C 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountMode {
    /// Counter range start
    pub from: u16,
    /// Counter range end. Counts down when below `from`.
    pub to: u16,
    /// Increment per print
    pub step: u8,
    /// Times each value is repeated before stepping
    pub repeat: u8,
}

/// Select counter print mode (GS C 0 n)
pub fn counter_print_mode(mode: CounterPrintMode) -> Vec<u8> {
    vec![GS, b'C', b'0', mode as u8]
}

/// # Select Count Mode (GS C 1 aL aH bL bH n r)
pub fn count_mode(mode: &CountMode) -> Vec<u8> {
    let [al, ah] = u16_le(mode.from);
    let [bl, bh] = u16_le(mode.to);
    vec![GS, b'C', b'1', al, ah, bl, bh, mode.step, mode.repeat]
}

/// Set the serial counter value (GS C 2 nL nH)
pub fn counter_value(value: u16) -> Vec<u8> {
    let [nl, nh] = u16_le(value);
    vec![GS, b'C', b'2', nl, nh]
}

/// Print the counter and advance it (GS c)
pub fn print_counter() -> Vec<u8> {
    vec![GS, b'c']
}

// ============================================================================
// PRINTER ID
// ============================================================================

/// Information returned by `GS I n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PrinterIdInfo {
    Model = 0x01,
    Type = 0x02,
    FirmwareVersion = 0x41,
    Manufacturer = 0x42,
    PrinterName = 0x43,
    SerialNumber = 0x44,
}

impl PrinterIdInfo {
    pub const ALL: [PrinterIdInfo; 6] = [
        PrinterIdInfo::Model,
        PrinterIdInfo::Type,
        PrinterIdInfo::FirmwareVersion,
        PrinterIdInfo::Manufacturer,
        PrinterIdInfo::PrinterName,
        PrinterIdInfo::SerialNumber,
    ];

    /// Model and type answer with one binary byte, the rest with a
    /// NUL-terminated string.
    pub const fn is_text(self) -> bool {
        (self as u8) >= 0x41
    }
}

impl TryFrom<u8> for PrinterIdInfo {
    type Error = EscPosError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|info| *info as u8 == n)
            .ok_or_else(|| EscPosError::out_of_range("printer ID type", n, 0x01u8, 0x44u8))
    }
}

/// Request printer ID (GS I n)
pub fn printer_id(info: PrinterIdInfo) -> Vec<u8> {
    vec![GS, b'I', info as u8]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recover() {
        assert_eq!(recover(Recovery::Restart), vec![0x10, 0x05, 0x01]);
        assert_eq!(recover(Recovery::Cancel), vec![0x10, 0x05, 0x02]);
    }

    #[test]
    fn test_realtime_pulse() {
        assert_eq!(
            realtime_pulse(DrawerPin::Pin5, 8).unwrap(),
            vec![0x10, 0x14, 0x01, 0x01, 0x08]
        );
        assert!(realtime_pulse(DrawerPin::Pin2, 0).is_err());
        assert!(realtime_pulse(DrawerPin::Pin2, 9).is_err());
    }

    #[test]
    fn test_pulse() {
        assert_eq!(pulse(DrawerPin::Pin2, 25, 250), vec![0x1B, 0x70, 0, 25, 250]);
        assert_eq!(pulse(DrawerPin::Pin5, 1, 0), vec![0x1B, 0x70, 1, 1, 0]);
    }

    #[test]
    fn test_beep() {
        assert_eq!(beep(3, 2).unwrap(), vec![0x1B, 0x42, 3, 2]);
        assert_eq!(beep(9, 9).unwrap(), vec![0x1B, 0x42, 9, 9]);
        assert!(beep(0, 1).is_err());
        assert!(beep(10, 1).is_err());
        assert!(beep(1, 0).is_err());
        assert!(beep(1, 10).is_err());
    }

    #[test]
    fn test_panel_and_peripherals() {
        assert_eq!(panel_buttons(false), vec![0x1B, 0x63, 0x35, 1]);
        assert_eq!(panel_buttons(true), vec![0x1B, 0x63, 0x35, 0]);
        assert_eq!(peripheral_device(1), vec![0x1B, 0x3D, 1]);
        assert_eq!(motion_units(200, 0), vec![0x1D, 0x50, 200, 0]);
        assert_eq!(test_page(), vec![0x12, 0x54]);
        assert_eq!(feed_marked_paper(), vec![0x1D, 0x0C]);
    }

    #[test]
    fn test_macros() {
        assert_eq!(toggle_macro_definition(), vec![0x1D, 0x3A]);
        let exec = MacroExecution { repeat: 2, wait: 10, mode: 1 };
        assert_eq!(execute_macro(&exec).unwrap(), vec![0x1D, 0x5E, 2, 10, 1]);

        let exec = MacroExecution { repeat: 0, wait: 0, mode: 0 };
        assert!(execute_macro(&exec).is_err());
        let exec = MacroExecution { repeat: 1, wait: 0, mode: 2 };
        assert!(execute_macro(&exec).is_err());
    }

    #[test]
    fn test_automatic_status_back() {
        assert_eq!(automatic_status_back(AsbFlags::default()), vec![0x1D, 0x61, 0]);
        let all = AsbFlags { error_status: true, paper_sensor: true };
        assert_eq!(automatic_status_back(all), vec![0x1D, 0x61, 0x0C]);
        let paper = AsbFlags { error_status: false, paper_sensor: true };
        assert_eq!(paper.to_byte(), 0x08);
    }

    #[test]
    fn test_counter() {
        assert_eq!(
            counter_print_mode(CounterPrintMode::ZerosLeft),
            vec![0x1D, 0x43, 0x30, 1]
        );
        assert!(CounterPrintMode::try_from(3).is_err());

        let mode = CountMode { from: 1, to: 1000, step: 1, repeat: 1 };
        assert_eq!(
            count_mode(&mode),
            vec![0x1D, 0x43, 0x31, 1, 0, 0xE8, 0x03, 1, 1]
        );
        assert_eq!(counter_value(300), vec![0x1D, 0x43, 0x32, 0x2C, 0x01]);
        assert_eq!(print_counter(), vec![0x1D, 0x63]);
    }

    #[test]
    fn test_printer_id() {
        assert_eq!(printer_id(PrinterIdInfo::Model), vec![0x1D, 0x49, 0x01]);
        assert_eq!(printer_id(PrinterIdInfo::SerialNumber), vec![0x1D, 0x49, 0x44]);
        assert!(!PrinterIdInfo::Type.is_text());
        assert!(PrinterIdInfo::PrinterName.is_text());
    }

    #[test]
    fn test_printer_id_from_byte() {
        for info in PrinterIdInfo::ALL {
            assert_eq!(PrinterIdInfo::try_from(info as u8).unwrap(), info);
        }
        for n in [0x00, 0x03, 0x40, 0x45, 0xFF] {
            assert!(matches!(
                PrinterIdInfo::try_from(n),
                Err(EscPosError::OutOfRange { .. })
            ));
        }
    }
}
