//! # ESC/POS Text Formatting Commands
//!
//! This module implements the character and line formatting commands.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Print mode | ESC ! n | Font, bold, double size, underline in one byte |
//! | Bold | ESC E n | **Emphasized** text |
//! | Double strike | ESC G n | Each dot printed twice |
//! | Underline | ESC - n | 1 or 2 dot underline |
//! | Character size | GS ! n | 1-8× width and height |
//! | Reverse | GS B n | White on black |
//! | Rotation | ESC V n | 90° clockwise |
//!
//! ## Font Selection
//!
//! | Font | Size |
//! |------|------|
//! | Font A | 12×24 dots |
//! | Font B | 9×17 dots |

use super::commands::{ESC, GS, NUL, SP, u16_le};
use crate::error::{EscPosError, ensure_range};

// ============================================================================
// TYPES
// ============================================================================

/// Available fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Font A: 12×24 dots
    #[default]
    A = 0,
    /// Font B: 9×17 dots
    B = 1,
}

/// Underline thickness for `ESC -`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Underline {
    #[default]
    None = 0,
    /// 1-dot underline
    Thin = 1,
    /// 2-dot underline
    Thick = 2,
}

/// Line justification for `ESC a`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

// ============================================================================
// PRINT MODE (ESC !)
// ============================================================================

/// Font B select bit of the print-mode byte
pub const PRINT_MODE_FONT_B: u8 = 1 << 0;
/// Emphasized bit of the print-mode byte
pub const PRINT_MODE_EMPHASIZED: u8 = 1 << 3;
/// Double-height bit of the print-mode byte
pub const PRINT_MODE_DOUBLE_HEIGHT: u8 = 1 << 4;
/// Double-width bit of the print-mode byte
pub const PRINT_MODE_DOUBLE_WIDTH: u8 = 1 << 5;
/// Underline bit of the print-mode byte
pub const PRINT_MODE_UNDERLINE: u8 = 1 << 7;

/// Print mode flags packed into the single `ESC !` parameter byte.
///
/// ```text
/// bit:  7   6   5   4   3   2   1   0
///       UL  -   DW  DH  EM  -   -   FONT
/// ```
///
/// ## Example
///
/// ```
/// use rongta_escpos::protocol::text::{Font, PrintMode};
///
/// let mode = PrintMode {
///     font: Font::B,
///     emphasized: true,
///     underline: true,
///     ..Default::default()
/// };
/// assert_eq!(mode.to_byte(), 0x89);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintMode {
    pub font: Font,
    pub emphasized: bool,
    pub double_height: bool,
    pub double_width: bool,
    pub underline: bool,
}

impl PrintMode {
    /// Pack the flags into the `ESC !` parameter byte.
    pub const fn to_byte(&self) -> u8 {
        let mut n = 0;
        if matches!(self.font, Font::B) {
            n |= PRINT_MODE_FONT_B;
        }
        if self.emphasized {
            n |= PRINT_MODE_EMPHASIZED;
        }
        if self.double_height {
            n |= PRINT_MODE_DOUBLE_HEIGHT;
        }
        if self.double_width {
            n |= PRINT_MODE_DOUBLE_WIDTH;
        }
        if self.underline {
            n |= PRINT_MODE_UNDERLINE;
        }
        n
    }
}

/// # Select Print Mode (ESC ! n)
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC ! n |
/// | Hex     | 1B 21 n |
/// | Decimal | 27 33 n |
pub fn print_mode(mode: &PrintMode) -> Vec<u8> {
    vec![ESC, b'!', mode.to_byte()]
}

// ============================================================================
// CHARACTER SIZE (GS !)
// ============================================================================

/// Maximum width/height multiplier for `GS !`
pub const MAX_CHARACTER_SCALE: u8 = 8;

/// Build the `GS !` parameter byte.
///
/// Width occupies the high nibble and height the low nibble, each stored as
/// `multiplier - 1`. Width outside 1..=8 is rejected; height outside 1..=8
/// falls back to normal height.
pub fn character_size_byte(width: u8, height: u8) -> Result<u8, EscPosError> {
    ensure_range("character width", width, 1, MAX_CHARACTER_SCALE)?;
    let height_bits = match height {
        1..=MAX_CHARACTER_SCALE => height - 1,
        _ => 0,
    };
    Ok(((width - 1) << 4) | height_bits)
}

/// # Select Character Size (GS ! n)
///
/// Sets character width and height multipliers (1 = normal, 2 = double, ...).
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | GS ! n  |
/// | Hex     | 1D 21 n |
/// | Decimal | 29 33 n |
///
/// ## Example
///
/// ```
/// use rongta_escpos::protocol::text::character_size;
///
/// assert_eq!(character_size(3, 5).unwrap(), vec![0x1D, 0x21, 0x24]);
/// assert!(character_size(9, 1).is_err());
/// ```
pub fn character_size(width: u8, height: u8) -> Result<Vec<u8>, EscPosError> {
    Ok(vec![GS, b'!', character_size_byte(width, height)?])
}

// ============================================================================
// TEXT STYLE TOGGLES
// ============================================================================

/// Text bytes are sent verbatim; the printer interprets them with the
/// current character code table.
pub fn text(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Set right-side character spacing to n × 0.125mm (ESC SP n)
#[inline]
pub fn right_side_spacing(n: u8) -> Vec<u8> {
    vec![ESC, SP, n]
}

/// # Underline Mode (ESC - n)
///
/// - `n = 0`: off
/// - `n = 1`: 1-dot thick
/// - `n = 2`: 2-dot thick
pub fn underline(u: Underline) -> Vec<u8> {
    vec![ESC, b'-', u as u8]
}

/// Emphasized mode on/off (ESC E n)
#[inline]
pub fn emphasized(on: bool) -> Vec<u8> {
    vec![ESC, b'E', on as u8]
}

/// Double-strike mode on/off (ESC G n)
#[inline]
pub fn double_strike(on: bool) -> Vec<u8> {
    vec![ESC, b'G', on as u8]
}

/// Select character font (ESC M n)
#[inline]
pub fn font(f: Font) -> Vec<u8> {
    vec![ESC, b'M', f as u8]
}

/// 90° clockwise rotation on/off (ESC V n)
#[inline]
pub fn rotate_90(on: bool) -> Vec<u8> {
    vec![ESC, b'V', on as u8]
}

/// White/black reverse printing on/off (GS B n)
#[inline]
pub fn reverse(on: bool) -> Vec<u8> {
    vec![GS, b'B', on as u8]
}

/// # Select Justification (ESC a n)
///
/// Only effective when issued at the beginning of a line.
pub fn justification(j: Justification) -> Vec<u8> {
    vec![ESC, b'a', j as u8]
}

// ============================================================================
// LINE SPACING AND POSITION
// ============================================================================

/// Select default line spacing (ESC 2)
#[inline]
pub fn default_line_spacing() -> Vec<u8> {
    vec![ESC, b'2']
}

/// Set line spacing to n × 0.125mm (ESC 3 n)
#[inline]
pub fn line_spacing(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n]
}

/// # Set Absolute Print Position (ESC $ nL nH)
///
/// Moves to (nL + nH × 256) × 0.125mm from the start of the line.
pub fn absolute_position(position: u16) -> Vec<u8> {
    let [nl, nh] = u16_le(position);
    vec![ESC, b'$', nl, nh]
}

/// # Set Relative Print Position (ESC \ nL nH)
///
/// Moves relative to the current position. Negative offsets move left and
/// are sent as the two's complement of the 16-bit value.
///
/// ```
/// use rongta_escpos::protocol::text::relative_position;
///
/// assert_eq!(relative_position(-1), vec![0x1B, 0x5C, 0xFF, 0xFF]);
/// ```
pub fn relative_position(offset: i16) -> Vec<u8> {
    let [nl, nh] = offset.to_le_bytes();
    vec![ESC, b'\\', nl, nh]
}

/// Maximum number of horizontal tab positions accepted by `ESC D`
pub const MAX_TAB_POSITIONS: usize = 32;

/// # Set Horizontal Tab Positions (ESC D n1...nk NUL)
///
/// Each position is a column count from the start of the line. Positions
/// must be non-zero and strictly ascending; at most 32 may be set. An empty
/// slice clears every tab position.
pub fn tab_positions(positions: &[u8]) -> Result<Vec<u8>, EscPosError> {
    if positions.len() > MAX_TAB_POSITIONS {
        return Err(EscPosError::out_of_range(
            "tab position count",
            positions.len() as u32,
            0u32,
            MAX_TAB_POSITIONS as u32,
        ));
    }

    let mut previous = 0u8;
    for &position in positions {
        // Each entry must exceed the one before it; the first must be >= 1.
        if position <= previous {
            return Err(EscPosError::out_of_range(
                "tab position",
                position,
                previous.saturating_add(1),
                u8::MAX,
            ));
        }
        previous = position;
    }

    let mut cmd = Vec::with_capacity(3 + positions.len());
    cmd.push(ESC);
    cmd.push(b'D');
    cmd.extend_from_slice(positions);
    cmd.push(NUL);
    Ok(cmd)
}

/// Set left margin to (nL + nH × 256) × 0.125mm (GS L nL nH)
pub fn left_margin(margin: u16) -> Vec<u8> {
    let [nl, nh] = u16_le(margin);
    vec![GS, b'L', nl, nh]
}

/// Set printing area width to (nL + nH × 256) × 0.125mm (GS W nL nH)
pub fn printing_area_width(width: u16) -> Vec<u8> {
    let [nl, nh] = u16_le(width);
    vec![GS, b'W', nl, nh]
}

// ============================================================================
// TESTS
// ============================================================================
