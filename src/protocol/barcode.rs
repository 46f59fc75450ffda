//! # ESC/POS Barcode Commands
//!
//! This module implements barcode validation and framing.
//!
//! ## Supported Symbologies
//!
//! | Symbology | Tag | Length | Characters |
//! |-----------|-----|--------|------------|
//! | UPC-A | 65 | 11-12 | 0-9 |
//! | UPC-E | 66 | 11-12 | 0-9 |
//! | EAN-13 | 67 | 12-13 | 0-9 |
//! | EAN-8 | 68 | 7-8 | 0-9 |
//! | CODE39 | 69 | 1-255 | 0-9 A-Z space $ % + - . / |
//! | ITF | 70 | 1-255 | 0-9 |
//! | CODABAR | 71 | 1-255 | 0-9 A-D + - $ : |
//! | CODE93 | 72 | 1-255 | 0x00-0x7F |
//! | CODE128 | 73 | 1-255 | 0x00-0x7F |
//!
//! ## Validation Order
//!
//! 1. Declared length within the symbology's bounds
//! 2. Declared length equals the number of data bytes
//! 3. Every byte belongs to the symbology's character set
//!
//! The first failing check is reported and no command is built.
//!
//! ## Usage
//!
//! ```
//! use rongta_escpos::protocol::barcode::{self, BarcodeRequest, Symbology};
//!
//! let request = BarcodeRequest::new(Symbology::Ean13, b"590123412345");
//! let cmd = barcode::print(&request).unwrap();
//! assert_eq!(&cmd[..4], &[0x1D, 0x6B, 0x43, 0x0C]);
//! ```
//!
//! ## 2D Barcodes
//!
//! See [`two_d`]. The active 2D symbology is chosen by a separate
//! `GS Z m` command which must be sent before `ESC Z`.

use std::fmt;
use std::str::FromStr;

use super::commands::GS;
use crate::error::{BarcodeError, EscPosError, ensure_range};

// ============================================================================
// SYMBOLOGIES
// ============================================================================

/// 1D barcode symbology, tagged with its `GS k` system byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Symbology {
    UpcA = 65,
    UpcE = 66,
    Ean13 = 67,
    Ean8 = 68,
    Code39 = 69,
    Itf = 70,
    Codabar = 71,
    Code93 = 72,
    Code128 = 73,
}

impl Symbology {
    /// Every symbology in tag order
    pub const ALL: [Symbology; 9] = [
        Symbology::UpcA,
        Symbology::UpcE,
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::Code39,
        Symbology::Itf,
        Symbology::Codabar,
        Symbology::Code93,
        Symbology::Code128,
    ];

    /// The `m` byte of `GS k m n`.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Look up a symbology from its wire tag.
    pub fn from_tag(tag: u8) -> Result<Self, BarcodeError> {
        Self::ALL
            .into_iter()
            .find(|s| s.tag() == tag)
            .ok_or(BarcodeError::UnknownSymbology(tag))
    }

    /// Inclusive `(min, max)` bounds on the data length.
    pub const fn length_bounds(self) -> (u8, u8) {
        match self {
            Symbology::UpcA | Symbology::UpcE => (11, 12),
            Symbology::Ean13 => (12, 13),
            Symbology::Ean8 => (7, 8),
            Symbology::Code39
            | Symbology::Itf
            | Symbology::Codabar
            | Symbology::Code93
            | Symbology::Code128 => (1, u8::MAX),
        }
    }

    /// True if `byte` belongs to this symbology's character set.
    pub const fn accepts(self, byte: u8) -> bool {
        match self {
            Symbology::UpcA
            | Symbology::UpcE
            | Symbology::Ean13
            | Symbology::Ean8
            | Symbology::Itf => byte.is_ascii_digit(),
            Symbology::Code39 => {
                byte.is_ascii_digit()
                    || byte.is_ascii_uppercase()
                    || matches!(byte, b' ' | b'$' | b'%' | b'+' | b'-' | b'.' | b'/')
            }
            Symbology::Codabar => {
                byte.is_ascii_digit()
                    || matches!(byte, b'A'..=b'D' | b'+' | b'-' | b'$' | b':')
            }
            Symbology::Code93 | Symbology::Code128 => byte.is_ascii(),
        }
    }

    /// Human-readable symbology name
    pub const fn name(self) -> &'static str {
        match self {
            Symbology::UpcA => "UPC-A",
            Symbology::UpcE => "UPC-E",
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean8 => "EAN-8",
            Symbology::Code39 => "CODE39",
            Symbology::Itf => "ITF",
            Symbology::Codabar => "CODABAR",
            Symbology::Code93 => "CODE93",
            Symbology::Code128 => "CODE128",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbology {
    type Err = String;

    /// Parse names like `ean13`, `EAN-13`, `code128` (case and `-`/`_`
    /// insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_uppercase();

        Self::ALL
            .into_iter()
            .find(|sym| sym.name().replace('-', "") == normalized)
            .ok_or_else(|| format!("unknown barcode symbology '{s}'"))
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Length rule applied to ITF barcodes.
///
/// ITF encodes digits in pairs. `Lenient` accepts any length of at least
/// one digit, which is what existing drivers send. `RequireEven` also
/// rejects odd lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItfLengthRule {
    #[default]
    Lenient,
    RequireEven,
}

/// A 1D barcode print request.
///
/// `declared_length` is the `n` byte sent on the wire and must match
/// `data.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeRequest<'a> {
    pub symbology: Symbology,
    pub declared_length: u8,
    pub data: &'a [u8],
}

impl<'a> BarcodeRequest<'a> {
    /// Build a request whose declared length is taken from `data`.
    ///
    /// Data longer than 255 bytes saturates the declared length, so
    /// validation reports the mismatch.
    pub fn new(symbology: Symbology, data: &'a [u8]) -> Self {
        Self {
            symbology,
            declared_length: u8::try_from(data.len()).unwrap_or(u8::MAX),
            data,
        }
    }

    /// Build a request with an explicit declared length.
    pub fn with_length(symbology: Symbology, declared_length: u8, data: &'a [u8]) -> Self {
        Self {
            symbology,
            declared_length,
            data,
        }
    }

    /// Run every check with the default ITF rule.
    pub fn validate(&self) -> Result<(), BarcodeError> {
        validate(self.symbology, self.declared_length, self.data)
    }
}

/// Validate a barcode request with the default [`ItfLengthRule`].
pub fn validate(symbology: Symbology, declared_length: u8, data: &[u8]) -> Result<(), BarcodeError> {
    validate_with(symbology, declared_length, data, ItfLengthRule::default())
}

/// Validate a barcode request whose symbology is given as a raw wire tag.
///
/// Returns the decoded symbology on success.
pub fn validate_tag(tag: u8, declared_length: u8, data: &[u8]) -> Result<Symbology, BarcodeError> {
    let symbology = Symbology::from_tag(tag)?;
    validate(symbology, declared_length, data)?;
    Ok(symbology)
}

/// Validate a barcode request.
///
/// ## Errors
///
/// - [`BarcodeError::InvalidLength`] if `declared_length` is outside the
///   symbology's bounds (or odd for ITF under [`ItfLengthRule::RequireEven`])
/// - [`BarcodeError::LengthMismatch`] if `data.len() != declared_length`
/// - [`BarcodeError::InvalidCharacter`] for the first byte outside the
///   symbology's character set
pub fn validate_with(
    symbology: Symbology,
    declared_length: u8,
    data: &[u8],
    itf_rule: ItfLengthRule,
) -> Result<(), BarcodeError> {
    let (min, max) = symbology.length_bounds();
    let odd_itf = symbology == Symbology::Itf
        && itf_rule == ItfLengthRule::RequireEven
        && declared_length % 2 != 0;
    if declared_length < min || declared_length > max || odd_itf {
        return Err(BarcodeError::InvalidLength {
            symbology,
            length: declared_length,
        });
    }

    if data.len() != usize::from(declared_length) {
        return Err(BarcodeError::LengthMismatch {
            declared: declared_length,
            actual: data.len(),
        });
    }

    if let Some((index, &byte)) = data
        .iter()
        .enumerate()
        .find(|(_, b)| !symbology.accepts(**b))
    {
        return Err(BarcodeError::InvalidCharacter {
            symbology,
            byte,
            index,
        });
    }

    Ok(())
}

// ============================================================================
// 1D BARCODE COMMANDS
// ============================================================================

/// # Print Barcode (GS k m n d1...dn)
///
/// Validates the request and frames the barcode command.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS k m n d1...dn |
/// | Hex     | 1D 6B m n d1...dn |
/// | Decimal | 29 107 m n d1...dn |
///
/// ## Parameters
///
/// - `m`: symbology tag (65-73)
/// - `n`: number of data bytes
/// - `d1...dn`: barcode data, appended verbatim
pub fn print(request: &BarcodeRequest<'_>) -> Result<Vec<u8>, BarcodeError> {
    print_with(request, ItfLengthRule::default())
}

/// [`print`] with an explicit ITF length rule.
pub fn print_with(request: &BarcodeRequest<'_>, itf_rule: ItfLengthRule) -> Result<Vec<u8>, BarcodeError> {
    validate_with(
        request.symbology,
        request.declared_length,
        request.data,
        itf_rule,
    )?;

    let mut cmd = Vec::with_capacity(4 + request.data.len());
    cmd.push(GS);
    cmd.push(b'k');
    cmd.push(request.symbology.tag());
    cmd.push(request.declared_length);
    cmd.extend_from_slice(request.data);
    Ok(cmd)
}

/// HRI (Human Readable Interpretation) font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HriFont {
    /// Font A (12×24 dots)
    #[default]
    A = 0,
    /// Font B (9×17 dots)
    B = 1,
}

impl TryFrom<u8> for HriFont {
    type Error = EscPosError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(HriFont::A),
            1 => Ok(HriFont::B),
            _ => Err(EscPosError::out_of_range("HRI font", n, 0u8, 1u8)),
        }
    }
}

/// HRI print position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HriPosition {
    /// Not printed
    #[default]
    None = 0,
    Above = 1,
    Below = 2,
    Both = 3,
}

impl TryFrom<u8> for HriPosition {
    type Error = EscPosError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(HriPosition::None),
            1 => Ok(HriPosition::Above),
            2 => Ok(HriPosition::Below),
            3 => Ok(HriPosition::Both),
            _ => Err(EscPosError::out_of_range("HRI position", n, 0u8, 3u8)),
        }
    }
}

/// Select HRI font (GS f n)
pub fn hri_font(font: HriFont) -> Vec<u8> {
    vec![GS, b'f', font as u8]
}

/// Select HRI print position (GS H n)
pub fn hri_position(position: HriPosition) -> Vec<u8> {
    vec![GS, b'H', position as u8]
}

/// # Set Barcode Width (GS w n)
///
/// | n | Module (mm) | Thin (mm) | Thick (mm) |
/// |---|-------------|-----------|------------|
/// | 2 | 0.250 | 0.250 | 0.625 |
/// | 3 | 0.375 | 0.375 | 1.000 |
/// | 4 | 0.560 | 0.500 | 1.250 |
/// | 5 | 0.625 | 0.625 | 1.625 |
/// | 6 | 0.750 | 0.750 | 2.000 |
///
/// Multi-level symbologies use the module column, binary ones (CODE39, ITF,
/// CODABAR) the thin/thick columns. Default is 3.
pub fn width(n: u8) -> Result<Vec<u8>, EscPosError> {
    ensure_range("barcode width", n, 2, 6)?;
    Ok(vec![GS, b'w', n])
}

/// Set barcode height to n dots (GS h n), 1-255
pub fn height(n: u8) -> Result<Vec<u8>, EscPosError> {
    ensure_range("barcode height", n, 1, u8::MAX)?;
    Ok(vec![GS, b'h', n])
}

/// Set barcode horizontal print start position (GS x n)
pub fn print_position(n: u8) -> Vec<u8> {
    vec![GS, b'x', n]
}

// ============================================================================
// 2D BARCODE COMMANDS
// ============================================================================

/// 2D barcode command builders (`GS Z m` + `ESC Z m n k dL dH d...`).
///
/// `ESC Z` prints with whichever symbology the last `GS Z` selected; sending
/// the mode select first is the caller's job.
pub mod two_d {
    use super::super::commands::{ESC, GS, u16_le};
    use crate::error::{EscPosError, ensure_range};

    /// 2D symbology selected by `GS Z m`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum TwoDSymbology {
        #[default]
        Pdf417 = 0,
        Qr = 1,
    }

    impl TryFrom<u8> for TwoDSymbology {
        type Error = EscPosError;

        fn try_from(m: u8) -> Result<Self, Self::Error> {
            match m {
                0 => Ok(TwoDSymbology::Pdf417),
                1 => Ok(TwoDSymbology::Qr),
                _ => Err(EscPosError::out_of_range("2D barcode mode", m, 0u8, 1u8)),
            }
        }
    }

    /// QR error correction level, sent as its ASCII letter
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum QrErrorLevel {
        L = b'L' as isize,
        #[default]
        M = b'M' as isize,
        Q = b'Q' as isize,
        H = b'H' as isize,
    }

    /// Parameters of an `ESC Z` print, per active symbology.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TwoDParams {
        /// PDF417: `columns` 0-30 (0 = auto), `security_level` 0-8,
        /// `aspect_ratio` 2-5
        Pdf417 {
            columns: u8,
            security_level: u8,
            aspect_ratio: u8,
        },
        /// QR: `version` 0-40 (0 = auto), `module_size` 1-8
        Qr {
            version: u8,
            error_level: QrErrorLevel,
            module_size: u8,
        },
    }

    impl TwoDParams {
        /// The symbology these parameters are meant for.
        pub fn symbology(&self) -> TwoDSymbology {
            match self {
                TwoDParams::Pdf417 { .. } => TwoDSymbology::Pdf417,
                TwoDParams::Qr { .. } => TwoDSymbology::Qr,
            }
        }

        fn to_bytes(self) -> Result<[u8; 3], EscPosError> {
            match self {
                TwoDParams::Pdf417 {
                    columns,
                    security_level,
                    aspect_ratio,
                } => {
                    ensure_range("PDF417 columns", columns, 0, 30)?;
                    ensure_range("PDF417 security level", security_level, 0, 8)?;
                    ensure_range("PDF417 aspect ratio", aspect_ratio, 2, 5)?;
                    Ok([columns, security_level, aspect_ratio])
                }
                TwoDParams::Qr {
                    version,
                    error_level,
                    module_size,
                } => {
                    ensure_range("QR version", version, 0, 40)?;
                    ensure_range("QR module size", module_size, 1, 8)?;
                    Ok([version, error_level as u8, module_size])
                }
            }
        }
    }

    /// Select the 2D symbology used by the next `ESC Z` (GS Z m)
    pub fn select(symbology: TwoDSymbology) -> Vec<u8> {
        vec![GS, b'Z', symbology as u8]
    }

    /// # Print 2D Barcode (ESC Z m n k dL dH d1...dn)
    ///
    /// `dL dH` carry `data.len()` little-endian. The printer must already be
    /// in the matching mode (see [`select`]); this is not checked here.
    pub fn print(params: &TwoDParams, data: &[u8]) -> Result<Vec<u8>, EscPosError> {
        let [m, n, k] = params.to_bytes()?;
        let len = u32::try_from(data.len()).unwrap_or(u32::MAX);
        ensure_range("2D barcode data length", len, 1, u32::from(u16::MAX))?;
        let [dl, dh] = u16_le(len as u16);

        let mut cmd = Vec::with_capacity(7 + data.len());
        cmd.extend_from_slice(&[ESC, b'Z', m, n, k, dl, dh]);
        cmd.extend_from_slice(data);
        Ok(cmd)
    }

}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(n: usize) -> Vec<u8> {
        (0..n).map(|i| b'0' + (i % 10) as u8).collect()
    }

    #[test]
    fn test_ean13_frame() {
        let request = BarcodeRequest::new(Symbology::Ean13, b"590123412345");
        let cmd = print(&request).unwrap();
        let mut expected = vec![0x1D, 0x6B, 0x43, 0x0C];
        expected.extend_from_slice(b"590123412345");
        assert_eq!(cmd, expected);
    }

    #[test]
    fn test_tags() {
        let tags: Vec<u8> = Symbology::ALL.iter().map(|s| s.tag()).collect();
        assert_eq!(tags, (65..=73).collect::<Vec<u8>>());
        for sym in Symbology::ALL {
            assert_eq!(Symbology::from_tag(sym.tag()), Ok(sym));
        }
    }

    #[test]
    fn test_tags_start_at_65() {
        assert_eq!(Symbology::UpcA.tag(), 65);
        assert_eq!(Symbology::Code128.tag(), 73);
        let frame = print(&BarcodeRequest::new(Symbology::UpcA, b"12345678901")).unwrap();
        assert_eq!(frame[2], 65);
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(Symbology::from_tag(64), Err(BarcodeError::UnknownSymbology(64)));
        assert_eq!(Symbology::from_tag(74), Err(BarcodeError::UnknownSymbology(74)));
        assert_eq!(
            validate_tag(0, 1, b"1"),
            Err(BarcodeError::UnknownSymbology(0))
        );
        assert_eq!(validate_tag(73, 1, b"a"), Ok(Symbology::Code128));
    }

    #[test]
    fn test_fixed_length_bounds() {
        let cases = [
            (Symbology::UpcA, 11, 12),
            (Symbology::UpcE, 11, 12),
            (Symbology::Ean13, 12, 13),
            (Symbology::Ean8, 7, 8),
        ];
        for (sym, min, max) in cases {
            for len in min..=max {
                assert_eq!(validate(sym, len as u8, &digits(len)), Ok(()), "{sym} len {len}");
            }
            for len in [0, min - 1, max + 1, 20] {
                assert_eq!(
                    validate(sym, len as u8, &digits(len)),
                    Err(BarcodeError::InvalidLength { symbology: sym, length: len as u8 }),
                    "{sym} len {len}"
                );
            }
        }
    }

    #[test]
    fn test_variable_length_rejects_zero() {
        for sym in [
            Symbology::Code39,
            Symbology::Itf,
            Symbology::Codabar,
            Symbology::Code93,
            Symbology::Code128,
        ] {
            assert_eq!(
                validate(sym, 0, b""),
                Err(BarcodeError::InvalidLength { symbology: sym, length: 0 })
            );
        }
    }

    #[test]
    fn test_length_checked_before_mismatch() {
        // Out-of-bound declared length wins over a mismatching payload.
        assert!(matches!(
            validate(Symbology::Ean8, 3, b"1234567"),
            Err(BarcodeError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_mismatch_checked_before_characters() {
        assert_eq!(
            validate(Symbology::Ean13, 12, b"ABCDEFGHIJKLM"),
            Err(BarcodeError::LengthMismatch { declared: 12, actual: 13 })
        );
        assert_eq!(
            validate(Symbology::Code39, 5, b"a"),
            Err(BarcodeError::LengthMismatch { declared: 5, actual: 1 })
        );
    }

    #[test]
    fn test_numeric_symbologies_reject_letters() {
        for sym in [
            Symbology::UpcA,
            Symbology::UpcE,
            Symbology::Ean13,
            Symbology::Ean8,
            Symbology::Itf,
        ] {
            let (min, _) = sym.length_bounds();
            let mut data = digits(usize::from(min).max(2));
            data[1] = b'A';
            assert_eq!(
                validate(sym, data.len() as u8, &data),
                Err(BarcodeError::InvalidCharacter { symbology: sym, byte: b'A', index: 1 })
            );
        }
    }

    #[test]
    fn test_digit_boundaries() {
        assert!(!Symbology::Ean13.accepts(b'/'));
        assert!(Symbology::Ean13.accepts(b'0'));
        assert!(Symbology::Ean13.accepts(b'9'));
        assert!(!Symbology::Ean13.accepts(b':'));
    }

    #[test]
    fn test_code39_alphabet_exhaustive() {
        let allowed: Vec<u8> = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%+-./".to_vec();
        for byte in 0..=u8::MAX {
            assert_eq!(
                Symbology::Code39.accepts(byte),
                allowed.contains(&byte),
                "byte {byte}"
            );
        }
    }

    #[test]
    fn test_code39_boundaries() {
        for bad in [44u8, 58, 91, b'a', b'*', b'@', 0x80] {
            assert_eq!(
                validate(Symbology::Code39, 1, &[bad]),
                Err(BarcodeError::InvalidCharacter { symbology: Symbology::Code39, byte: bad, index: 0 }),
                "byte {bad}"
            );
        }
        assert_eq!(validate(Symbology::Code39, 9, b"HELLO-1.2"), Ok(()));
        assert_eq!(validate(Symbology::Code39, 4, b"$ %/"), Ok(()));
    }

    #[test]
    fn test_codabar_alphabet() {
        assert_eq!(validate(Symbology::Codabar, 8, b"A12$34:D"), Ok(()));
        assert_eq!(validate(Symbology::Codabar, 4, b"B+-C"), Ok(()));
        for bad in [b'E', b'a', b'*', b' ', b'@'] {
            assert!(
                matches!(
                    validate(Symbology::Codabar, 1, &[bad]),
                    Err(BarcodeError::InvalidCharacter { .. })
                ),
                "byte {bad}"
            );
        }
    }

    #[test]
    fn test_full_ascii_symbologies() {
        let all_ascii: Vec<u8> = (0..=127).collect();
        assert_eq!(validate(Symbology::Code93, 128, &all_ascii), Ok(()));
        assert_eq!(validate(Symbology::Code128, 128, &all_ascii), Ok(()));
        assert_eq!(
            validate(Symbology::Code128, 3, &[b'a', 0x80, b'b']),
            Err(BarcodeError::InvalidCharacter { symbology: Symbology::Code128, byte: 0x80, index: 1 })
        );
    }

    #[test]
    fn test_itf_lenient_rule_accepts_odd() {
        assert_eq!(validate(Symbology::Itf, 3, b"123"), Ok(()));
        assert_eq!(validate(Symbology::Itf, 4, b"1234"), Ok(()));
    }

    #[test]
    fn test_itf_require_even_rule() {
        assert_eq!(
            validate_with(Symbology::Itf, 3, b"123", ItfLengthRule::RequireEven),
            Err(BarcodeError::InvalidLength { symbology: Symbology::Itf, length: 3 })
        );
        assert_eq!(
            validate_with(Symbology::Itf, 4, b"1234", ItfLengthRule::RequireEven),
            Ok(())
        );
        // Only ITF is affected by the rule.
        assert_eq!(
            validate_with(Symbology::Code39, 3, b"ABC", ItfLengthRule::RequireEven),
            Ok(())
        );
    }

    #[test]
    fn test_oversized_data_reports_mismatch() {
        let data = vec![b'A'; 300];
        let request = BarcodeRequest::new(Symbology::Code128, &data);
        assert_eq!(request.declared_length, 255);
        assert_eq!(
            request.validate(),
            Err(BarcodeError::LengthMismatch { declared: 255, actual: 300 })
        );
    }

    #[test]
    fn test_print_rejects_without_output() {
        let request = BarcodeRequest::with_length(Symbology::UpcA, 12, b"12345678901");
        assert!(print(&request).is_err());
    }

    #[test]
    fn test_symbology_from_str() {
        assert_eq!("ean13".parse::<Symbology>(), Ok(Symbology::Ean13));
        assert_eq!("EAN-8".parse::<Symbology>(), Ok(Symbology::Ean8));
        assert_eq!("upc_a".parse::<Symbology>(), Ok(Symbology::UpcA));
        assert_eq!("Code128".parse::<Symbology>(), Ok(Symbology::Code128));
        assert!("qr".parse::<Symbology>().is_err());
    }

    #[test]
    fn test_hri_commands() {
        assert_eq!(hri_font(HriFont::B), vec![0x1D, 0x66, 0x01]);
        assert_eq!(hri_position(HriPosition::Below), vec![0x1D, 0x48, 0x02]);
        assert!(HriFont::try_from(2).is_err());
        assert_eq!(HriPosition::try_from(3).unwrap(), HriPosition::Both);
        assert!(HriPosition::try_from(4).is_err());
    }

    #[test]
    fn test_width_height_position() {
        assert_eq!(width(3).unwrap(), vec![0x1D, 0x77, 0x03]);
        assert!(width(1).is_err());
        assert!(width(7).is_err());
        assert_eq!(height(162).unwrap(), vec![0x1D, 0x68, 162]);
        assert!(height(0).is_err());
        assert_eq!(print_position(20), vec![0x1D, 0x78, 20]);
    }
}
