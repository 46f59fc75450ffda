//! # ESC/POS Protocol Commands
//!
//! This module holds the control-code constants shared by every command
//! family, plus the basic print, feed and cut commands.
//!
//! ## Protocol Overview
//!
//! ESC/POS commands are byte sequences introduced by one of a few control
//! characters:
//!
//! - Single byte: `LF`, `CR`, `HT`, `FF`, `CAN`
//! - Escape prefixed: `ESC @`, `ESC E n`, `ESC * m nL nH d...`
//! - Group-separator prefixed: `GS ! n`, `GS k m n d...`, `GS v 0 ...`
//! - Real-time: `DLE EOT n`, `DLE ENQ n`, `DLE DC4 ...`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]` (`nL nH`)
//!
//! ## Reference
//!
//! Based on the Rongta RP325 "ESC/POS Command Set" programming manual.

// ============================================================================
// CONTROL CHARACTER CONSTANTS
// ============================================================================

/// NUL - terminator for variable-length parameter lists (`ESC D`)
pub const NUL: u8 = 0x00;

/// EOT (End of Transmission) - second byte of `DLE EOT n`
pub const EOT: u8 = 0x04;

/// ENQ (Enquiry) - second byte of `DLE ENQ n`
pub const ENQ: u8 = 0x05;

/// HT (Horizontal Tab) - move to the next tab position
pub const HT: u8 = 0x09;

/// LF (Line Feed) - print the line buffer and feed one line
pub const LF: u8 = 0x0A;

/// FF (Form Feed) - print page-mode buffer and return to standard mode
pub const FF: u8 = 0x0C;

/// CR (Carriage Return) - print and return to the start of the line
pub const CR: u8 = 0x0D;

/// DLE (Data Link Escape) - real-time command prefix
///
/// Real-time commands are processed as soon as they are received, even when
/// the printer is offline or the receive buffer is full.
pub const DLE: u8 = 0x10;

/// DC2 (Device Control 2) - test page prefix
pub const DC2: u8 = 0x12;

/// DC4 (Device Control 4) - second byte of the real-time pulse command
pub const DC4: u8 = 0x14;

/// CAN (Cancel) - delete print data in the current page-mode area
pub const CAN: u8 = 0x18;

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B).
pub const ESC: u8 = 0x1B;

/// FS (File Separator) - NV graphics and Kanji command prefix
pub const FS: u8 = 0x1C;

/// GS (Group Separator) - Extended command prefix
///
/// Used for character size, barcodes, raster graphics and status.
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// SP (Space) - second byte of `ESC SP n`
pub const SP: u8 = 0x20;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets the printer modes to their power-on
/// defaults.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Does NOT Reset
///
/// - Receive buffer contents
/// - Macro definitions
/// - NV bit images
///
/// ## Example
///
/// ```
/// use rongta_escpos::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// PRINT AND FEED COMMANDS
// ============================================================================

/// Print the line buffer and feed one line (LF)
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

/// Print and carriage return (CR)
#[inline]
pub fn carriage_return() -> Vec<u8> {
    vec![CR]
}

/// Move the print position to the next horizontal tab (HT)
#[inline]
pub fn horizontal_tab() -> Vec<u8> {
    vec![HT]
}

/// # Print and Feed Paper (ESC J n)
///
/// Prints the buffer and feeds the paper `n` motion units
/// (n × 0.125mm with the default vertical motion unit).
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC J n |
/// | Hex     | 1B 4A n |
/// | Decimal | 27 74 n |
///
/// ## Example
///
/// ```
/// use rongta_escpos::protocol::commands;
///
/// assert_eq!(commands::print_and_feed_dots(24), vec![0x1B, 0x4A, 24]);
/// ```
#[inline]
pub fn print_and_feed_dots(n: u8) -> Vec<u8> {
    vec![ESC, b'J', n]
}

/// # Print and Feed n Lines (ESC d n)
///
/// Prints the buffer and feeds `n` lines at the current line spacing.
#[inline]
pub fn print_and_feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// # Partial Cut (ESC i)
///
/// Cuts the paper leaving one point uncut. Only partial cuts are supported
/// by the RP325 cutter.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC i |
/// | Hex     | 1B 69 |
/// | Decimal | 27 105 |
#[inline]
pub fn cut_partial() -> Vec<u8> {
    vec![ESC, b'i']
}

/// # Feed and Cut (GS V 66 n)
///
/// Feeds paper to (cutting position + n × 0.125mm) and performs a partial
/// cut.
///
/// ## Protocol Details
///
/// | Format  | Bytes        |
/// |---------|--------------|
/// | ASCII   | GS V B n     |
/// | Hex     | 1D 56 42 n   |
/// | Decimal | 29 86 66 n   |
#[inline]
pub fn cut_feed(n: u8) -> Vec<u8> {
    vec![GS, b'V', 66, n]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ESC/POS uses `nL + nH × 256` for every two-byte parameter.
///
/// ## Example
///
/// ```
/// use rongta_escpos::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(576), [0x40, 0x02]); // 576 = 0x0240
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
