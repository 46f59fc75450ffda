//! # Page Mode Commands
//!
//! Page mode allows composing a print area with absolute X,Y positioning
//! before printing. Unlike standard mode where each line prints immediately,
//! page mode accumulates content and prints when explicitly commanded.
//!
//! ## Workflow
//!
//! 1. Enter page mode (`select_page_mode`)
//! 2. Define the print area (`print_area`)
//! 3. Set print direction (`print_direction`)
//! 4. Position and add content:
//!    - `text::absolute_position` / `absolute_vertical_position`
//!    - Print text or graphics
//! 5. Print and return to standard mode (`print_and_return`)
//!
//! `cancel_page_data` discards everything inside the current area.

use super::commands::{CAN, ESC, FF, GS, u16_le};
use crate::error::{EscPosError, ensure_range};

/// Page mode direction and origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PageDirection {
    /// Left to right, starting top-left (normal reading direction)
    #[default]
    LeftToRightTopLeft = 0,
    /// Bottom to top, starting bottom-left (90° counter-clockwise)
    BottomToTopBottomLeft = 1,
    /// Right to left, starting bottom-right (180° rotation)
    RightToLeftBottomRight = 2,
    /// Top to bottom, starting top-right (90° clockwise)
    TopToBottomTopRight = 3,
}

impl TryFrom<u8> for PageDirection {
    type Error = EscPosError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(PageDirection::LeftToRightTopLeft),
            1 => Ok(PageDirection::BottomToTopBottomLeft),
            2 => Ok(PageDirection::RightToLeftBottomRight),
            3 => Ok(PageDirection::TopToBottomTopRight),
            _ => Err(EscPosError::out_of_range("page direction", n, 0u8, 3u8)),
        }
    }
}

/// Page mode print area, in horizontal/vertical motion units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Select page mode (ESC L)
///
/// Must be sent at the beginning of a line.
pub fn select_page_mode() -> Vec<u8> {
    vec![ESC, b'L']
}

/// Select standard mode (ESC S)
///
/// Page mode data not yet printed is discarded.
pub fn select_standard_mode() -> Vec<u8> {
    vec![ESC, b'S']
}

/// Select print direction in page mode (ESC T n)
pub fn print_direction(direction: PageDirection) -> Vec<u8> {
    vec![ESC, b'T', direction as u8]
}

/// # Set Print Area in Page Mode (ESC W xL xH yL yH dxL dxH dyL dyH)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC W xL xH yL yH dxL dxH dyL dyH |
/// | Hex     | 1B 57 xL xH yL yH dxL dxH dyL dyH |
/// | Decimal | 27 87 xL xH yL yH dxL dxH dyL dyH |
///
/// Width and height must both be at least 1.
pub fn print_area(area: &PrintArea) -> Result<Vec<u8>, EscPosError> {
    ensure_range("page area width", area.width, 1, u16::MAX)?;
    ensure_range("page area height", area.height, 1, u16::MAX)?;

    let [xl, xh] = u16_le(area.x);
    let [yl, yh] = u16_le(area.y);
    let [dxl, dxh] = u16_le(area.width);
    let [dyl, dyh] = u16_le(area.height);
    Ok(vec![ESC, b'W', xl, xh, yl, yh, dxl, dxh, dyl, dyh])
}

/// Set absolute vertical print position in page mode (GS $ nL nH)
pub fn absolute_vertical_position(position: u16) -> Vec<u8> {
    let [nl, nh] = u16_le(position);
    vec![GS, b'$', nl, nh]
}

/// Set relative vertical print position in page mode (GS \ nL nH)
///
/// Negative offsets move towards the top of the area and are sent as
/// 16-bit two's complement.
pub fn relative_vertical_position(offset: i16) -> Vec<u8> {
    let [nl, nh] = offset.to_le_bytes();
    vec![GS, b'\\', nl, nh]
}

/// Print the page buffer and return to standard mode (FF)
pub fn print_and_return() -> Vec<u8> {
    vec![FF]
}

/// Print the page buffer without leaving page mode (ESC FF)
pub fn print_page() -> Vec<u8> {
    vec![ESC, FF]
}

/// Cancel print data in the current page area (CAN)
pub fn cancel_page_data() -> Vec<u8> {
    vec![CAN]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_select() {
        assert_eq!(select_page_mode(), vec![0x1B, 0x4C]);
        assert_eq!(select_standard_mode(), vec![0x1B, 0x53]);
    }

    #[test]
    fn test_print_direction() {
        assert_eq!(
            print_direction(PageDirection::TopToBottomTopRight),
            vec![0x1B, 0x54, 3]
        );
        assert!(PageDirection::try_from(4).is_err());
        assert_eq!(
            PageDirection::try_from(1).unwrap(),
            PageDirection::BottomToTopBottomLeft
        );
    }

    #[test]
    fn test_print_area() {
        let area = PrintArea { x: 0, y: 0, width: 576, height: 800 };
        assert_eq!(
            print_area(&area).unwrap(),
            vec![
                0x1B, 0x57,
                0, 0,      // x = 0
                0, 0,      // y = 0
                64, 2,     // width = 576 (0x0240)
                32, 3,     // height = 800 (0x0320)
            ]
        );
    }

    #[test]
    fn test_print_area_rejects_empty() {
        let area = PrintArea { x: 10, y: 10, width: 0, height: 100 };
        assert!(print_area(&area).is_err());
        let area = PrintArea { x: 10, y: 10, width: 100, height: 0 };
        assert!(print_area(&area).is_err());
    }

    #[test]
    fn test_vertical_position() {
        assert_eq!(absolute_vertical_position(160), vec![0x1D, 0x24, 160, 0]);
        assert_eq!(relative_vertical_position(-1), vec![0x1D, 0x5C, 0xFF, 0xFF]);
        assert_eq!(relative_vertical_position(256), vec![0x1D, 0x5C, 0x00, 0x01]);
    }

    #[test]
    fn test_page_print_commands() {
        assert_eq!(print_and_return(), vec![0x0C]);
        assert_eq!(print_page(), vec![0x1B, 0x0C]);
        assert_eq!(cancel_page_data(), vec![0x18]);
    }
}
