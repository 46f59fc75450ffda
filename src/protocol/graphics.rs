//! # ESC/POS Graphics Commands
//!
//! Bit image, raster image and stored (NV) image printing.
//!
//! | Mode | Command | Description |
//! |------|---------|-------------|
//! | Bit image | ESC * | One band of 8 or 24 vertical dots |
//! | Raster | GS v 0 | Arbitrary height, row-major |
//! | NV image | FS p | Image previously stored in flash |
//!
//! ## Bit Packing
//!
//! In every mode one bit is one dot, 1 = print:
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```
//!
//! Bit image data is column-major (each byte is a vertical slice), raster
//! data is row-major (each byte is 8 horizontal dots, MSB on the left).

use super::commands::{ESC, FS, GS, u16_le};
use crate::error::{EscPosError, ensure_range};

// ============================================================================
// BIT IMAGE (ESC *)
// ============================================================================

/// Maximum horizontal dot count of a single `ESC *` band
pub const MAX_BIT_IMAGE_WIDTH: u16 = 1023;

/// Bit image density, the `m` byte of `ESC *`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BitImageMode {
    /// 8-dot single density
    #[default]
    Single8 = 0,
    /// 8-dot double density
    Double8 = 1,
    /// 24-dot single density
    Single24 = 32,
    /// 24-dot double density
    Double24 = 33,
}

impl BitImageMode {
    /// Bytes per column: 1 for 8-dot modes, 3 for 24-dot modes.
    pub const fn bytes_per_column(self) -> usize {
        match self {
            BitImageMode::Single8 | BitImageMode::Double8 => 1,
            BitImageMode::Single24 | BitImageMode::Double24 => 3,
        }
    }
}

impl TryFrom<u8> for BitImageMode {
    type Error = EscPosError;

    fn try_from(m: u8) -> Result<Self, Self::Error> {
        match m {
            0 => Ok(BitImageMode::Single8),
            1 => Ok(BitImageMode::Double8),
            32 => Ok(BitImageMode::Single24),
            33 => Ok(BitImageMode::Double24),
            _ => Err(EscPosError::out_of_range("bit image mode", m, 0u8, 33u8)),
        }
    }
}

/// # Select Bit Image Mode (ESC * m nL nH d1...dk)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC * m nL nH d1...dk |
/// | Hex     | 1B 2A m nL nH d1...dk |
/// | Decimal | 27 42 m nL nH d1...dk |
///
/// ## Parameters
///
/// - `width`: horizontal dots, 1-1023 (`nL + nH × 256`)
/// - `data`: `width` bytes for 8-dot modes, `width × 3` for 24-dot modes
///
/// ## Example
///
/// ```
/// use rongta_escpos::protocol::graphics::{self, BitImageMode};
///
/// let cmd = graphics::bit_image(BitImageMode::Double24, 2, &[0xFF; 6]).unwrap();
/// assert_eq!(&cmd[..5], &[0x1B, 0x2A, 33, 2, 0]);
/// ```
pub fn bit_image(mode: BitImageMode, width: u16, data: &[u8]) -> Result<Vec<u8>, EscPosError> {
    ensure_range("bit image width", width, 1, MAX_BIT_IMAGE_WIDTH)?;

    let expected = usize::from(width) * mode.bytes_per_column();
    if data.len() != expected {
        return Err(EscPosError::DataLength {
            expected,
            actual: data.len(),
        });
    }

    let [nl, nh] = u16_le(width);
    let mut cmd = Vec::with_capacity(5 + data.len());
    cmd.extend_from_slice(&[ESC, b'*', mode as u8, nl, nh]);
    cmd.extend_from_slice(data);
    Ok(cmd)
}

// ============================================================================
// RASTER IMAGE (GS v 0)
// ============================================================================

/// Maximum raster width in bytes (`xL + xH × 256`)
pub const MAX_RASTER_WIDTH_BYTES: u16 = 128;

/// Maximum raster height in dots (`yL + yH × 256`)
pub const MAX_RASTER_HEIGHT: u16 = 4095;

/// Raster scaling, the `m` byte of `GS v 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum RasterMode {
    #[default]
    Normal = 0,
    DoubleWidth = 1,
    DoubleHeight = 2,
    Quadruple = 3,
}

impl TryFrom<u8> for RasterMode {
    type Error = EscPosError;

    fn try_from(m: u8) -> Result<Self, Self::Error> {
        match m {
            0 => Ok(RasterMode::Normal),
            1 => Ok(RasterMode::DoubleWidth),
            2 => Ok(RasterMode::DoubleHeight),
            3 => Ok(RasterMode::Quadruple),
            _ => Err(EscPosError::out_of_range("raster mode", m, 0u8, 3u8)),
        }
    }
}

/// # Print Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS v 0 m xL xH yL yH d1...dk |
/// | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
/// | Decimal | 29 118 48 m xL xH yL yH d1...dk |
///
/// ## Parameters
///
/// - `width_bytes`: bytes per row, 1-128 (up to 1024 dots)
/// - `height`: rows, 1-4095
/// - `data`: exactly `width_bytes × height` bytes
///
/// ## Width Calculation
///
/// ```text
/// width_bytes = (width_dots + 7) / 8
///
/// 576 dots (80mm paper): 72 bytes
/// 384 dots (58mm paper): 48 bytes
/// ```
pub fn raster_image(
    mode: RasterMode,
    width_bytes: u16,
    height: u16,
    data: &[u8],
) -> Result<Vec<u8>, EscPosError> {
    ensure_range("raster width", width_bytes, 1, MAX_RASTER_WIDTH_BYTES)?;
    ensure_range("raster height", height, 1, MAX_RASTER_HEIGHT)?;

    let expected = usize::from(width_bytes) * usize::from(height);
    if data.len() != expected {
        return Err(EscPosError::DataLength {
            expected,
            actual: data.len(),
        });
    }

    let [xl, xh] = u16_le(width_bytes);
    let [yl, yh] = u16_le(height);
    let mut cmd = Vec::with_capacity(8 + data.len());
    cmd.extend_from_slice(&[GS, b'v', b'0', mode as u8, xl, xh, yl, yh]);
    cmd.extend_from_slice(data);
    Ok(cmd)
}

// ============================================================================
// NV IMAGES (FS p)
// ============================================================================

/// Print stored NV bit image `n` (FS p n m)
///
/// `n` is the 1-based image number; `mode` uses the same scaling values as
/// [`RasterMode`]. Defining NV images is not supported by this crate, so
/// the images must have been stored with the vendor utility.
pub fn print_nv_image(n: u8, mode: RasterMode) -> Result<Vec<u8>, EscPosError> {
    ensure_range("NV image number", n, 1, u8::MAX)?;
    Ok(vec![FS, b'p', n, mode as u8])
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_image_8_dot() {
        let cmd = bit_image(BitImageMode::Single8, 3, &[0xAA, 0x55, 0xFF]).unwrap();
        assert_eq!(cmd, vec![0x1B, 0x2A, 0, 3, 0, 0xAA, 0x55, 0xFF]);
    }

    #[test]
    fn test_bit_image_24_dot_needs_three_bytes_per_column() {
        assert!(bit_image(BitImageMode::Single24, 2, &[0; 6]).is_ok());
        assert!(matches!(
            bit_image(BitImageMode::Single24, 2, &[0; 2]),
            Err(EscPosError::DataLength { expected: 6, actual: 2 })
        ));
    }

    #[test]
    fn test_bit_image_width_bounds() {
        assert!(bit_image(BitImageMode::Single8, 0, &[]).is_err());
        assert!(bit_image(BitImageMode::Single8, 1024, &[0; 1024]).is_err());

        let cmd = bit_image(BitImageMode::Double8, 1023, &[0; 1023]).unwrap();
        assert_eq!(&cmd[..5], &[0x1B, 0x2A, 1, 0xFF, 0x03]);
    }

    #[test]
    fn test_bit_image_mode_from_byte() {
        assert_eq!(BitImageMode::try_from(33).unwrap(), BitImageMode::Double24);
        assert!(BitImageMode::try_from(2).is_err());
        assert!(BitImageMode::try_from(34).is_err());
    }

    #[test]
    fn test_raster_image() {
        let data = vec![0xF0; 2 * 3];
        let cmd = raster_image(RasterMode::Normal, 2, 3, &data).unwrap();
        assert_eq!(&cmd[..8], &[0x1D, 0x76, 0x30, 0, 2, 0, 3, 0]);
        assert_eq!(cmd.len(), 8 + 6);
    }

    #[test]
    fn test_raster_image_bounds() {
        assert!(raster_image(RasterMode::Normal, 0, 1, &[]).is_err());
        assert!(raster_image(RasterMode::Normal, 129, 1, &[0; 129]).is_err());
        assert!(raster_image(RasterMode::Normal, 1, 0, &[]).is_err());
        assert!(raster_image(RasterMode::Normal, 1, 4096, &[0; 4096]).is_err());
        assert!(matches!(
            raster_image(RasterMode::Quadruple, 4, 4, &[0; 15]),
            Err(EscPosError::DataLength { expected: 16, actual: 15 })
        ));
    }

    #[test]
    fn test_raster_height_little_endian() {
        let cmd = raster_image(RasterMode::DoubleHeight, 1, 4095, &[0; 4095]).unwrap();
        assert_eq!(&cmd[3..8], &[2, 1, 0, 0xFF, 0x0F]);
    }

    #[test]
    fn test_print_nv_image() {
        assert_eq!(
            print_nv_image(1, RasterMode::Normal).unwrap(),
            vec![0x1C, 0x70, 1, 0]
        );
        assert_eq!(
            print_nv_image(2, RasterMode::Quadruple).unwrap(),
            vec![0x1C, 0x70, 2, 3]
        );
        assert!(print_nv_image(0, RasterMode::Normal).is_err());
    }
}
