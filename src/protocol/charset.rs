//! # Character Set Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | ESC R n | International character set (replaces a dozen ASCII glyphs) |
//! | ESC t n | Character code table for bytes 0x80-0xFF |
//! | ESC % n | Select/cancel the user-defined character set |
//! | ESC ? n | Cancel one user-defined character |
//!
//! Text is written to the printer as raw bytes, so the code table selected
//! here decides how anything above 0x7F is rendered.

use super::commands::ESC;
use crate::error::{EscPosError, ensure_range};

/// International character set, `n` of `ESC R n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum InternationalCharset {
    #[default]
    Usa = 0,
    France = 1,
    Germany = 2,
    Uk = 3,
    DenmarkI = 4,
    Sweden = 5,
    Italy = 6,
    SpainI = 7,
    Japan = 8,
    Norway = 9,
    DenmarkII = 10,
    SpainII = 11,
    LatinAmerica = 12,
    Korea = 13,
    Slovenia = 14,
    China = 15,
}

impl TryFrom<u8> for InternationalCharset {
    type Error = EscPosError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        use InternationalCharset::*;
        const ALL: [InternationalCharset; 16] = [
            Usa, France, Germany, Uk, DenmarkI, Sweden, Italy, SpainI, Japan, Norway, DenmarkII,
            SpainII, LatinAmerica, Korea, Slovenia, China,
        ];
        ALL.get(usize::from(n))
            .copied()
            .ok_or_else(|| EscPosError::out_of_range("international character set", n, 0u8, 15u8))
    }
}

/// Character code table, `n` of `ESC t n`.
///
/// Values 11-14 are unassigned on the RP325.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CodeTable {
    #[default]
    Cp437 = 0,
    Katakana = 1,
    Cp850 = 2,
    Cp860 = 3,
    Cp863 = 4,
    Cp865 = 5,
    Wcp1251 = 6,
    Cp866 = 7,
    Mik = 8,
    Cp755 = 9,
    Iran = 10,
    Cp862 = 15,
    Wcp1252 = 16,
    Wcp1253 = 17,
    Cp852 = 18,
    Cp858 = 19,
    IranII = 20,
    Latvian = 21,
    Cp864 = 22,
    Iso8859_1 = 23,
    Cp737 = 24,
    Wcp1257 = 25,
    Thai = 26,
    Cp720 = 27,
    Cp855 = 28,
    Cp857 = 29,
    Wcp1250 = 30,
    Cp775 = 31,
    Wcp1254 = 32,
    Wcp1255 = 33,
    Wcp1256 = 34,
    Wcp1258 = 35,
    Iso8859_2 = 36,
    Iso8859_3 = 37,
    Iso8859_4 = 38,
    Iso8859_5 = 39,
    Iso8859_6 = 40,
    Iso8859_7 = 41,
    Iso8859_8 = 42,
    Iso8859_9 = 43,
    Iso8859_15 = 44,
    ThaiII = 45,
    Cp856 = 46,
    Cp874 = 47,
}

impl CodeTable {
    /// Every code table in wire order
    pub const ALL: [CodeTable; 44] = [
        CodeTable::Cp437,
        CodeTable::Katakana,
        CodeTable::Cp850,
        CodeTable::Cp860,
        CodeTable::Cp863,
        CodeTable::Cp865,
        CodeTable::Wcp1251,
        CodeTable::Cp866,
        CodeTable::Mik,
        CodeTable::Cp755,
        CodeTable::Iran,
        CodeTable::Cp862,
        CodeTable::Wcp1252,
        CodeTable::Wcp1253,
        CodeTable::Cp852,
        CodeTable::Cp858,
        CodeTable::IranII,
        CodeTable::Latvian,
        CodeTable::Cp864,
        CodeTable::Iso8859_1,
        CodeTable::Cp737,
        CodeTable::Wcp1257,
        CodeTable::Thai,
        CodeTable::Cp720,
        CodeTable::Cp855,
        CodeTable::Cp857,
        CodeTable::Wcp1250,
        CodeTable::Cp775,
        CodeTable::Wcp1254,
        CodeTable::Wcp1255,
        CodeTable::Wcp1256,
        CodeTable::Wcp1258,
        CodeTable::Iso8859_2,
        CodeTable::Iso8859_3,
        CodeTable::Iso8859_4,
        CodeTable::Iso8859_5,
        CodeTable::Iso8859_6,
        CodeTable::Iso8859_7,
        CodeTable::Iso8859_8,
        CodeTable::Iso8859_9,
        CodeTable::Iso8859_15,
        CodeTable::ThaiII,
        CodeTable::Cp856,
        CodeTable::Cp874,
    ];
}

impl TryFrom<u8> for CodeTable {
    type Error = EscPosError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| *t as u8 == n)
            .ok_or_else(|| EscPosError::out_of_range("character code table", n, 0u8, 47u8))
    }
}

/// Lowest character code that can be user-defined
pub const USER_DEFINED_FIRST: u8 = 32;

/// Highest character code that can be user-defined
pub const USER_DEFINED_LAST: u8 = 126;

/// Select international character set (ESC R n)
pub fn international_charset(set: InternationalCharset) -> Vec<u8> {
    vec![ESC, b'R', set as u8]
}

/// # Select Character Code Table (ESC t n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC t n |
/// | Hex     | 1B 74 n |
/// | Decimal | 27 116 n |
pub fn code_table(table: CodeTable) -> Vec<u8> {
    vec![ESC, b't', table as u8]
}

/// Select (`true`) or cancel the user-defined character set (ESC % n)
pub fn user_defined_set(enabled: bool) -> Vec<u8> {
    vec![ESC, b'%', u8::from(enabled)]
}

/// Cancel user-defined character `n` (ESC ? n), 32-126
///
/// The built-in glyph is restored for that code.
pub fn cancel_user_defined(n: u8) -> Result<Vec<u8>, EscPosError> {
    ensure_range("user-defined character", n, USER_DEFINED_FIRST, USER_DEFINED_LAST)?;
    Ok(vec![ESC, b'?', n])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_international_charset() {
        assert_eq!(
            international_charset(InternationalCharset::Germany),
            vec![0x1B, 0x52, 2]
        );
        assert_eq!(
            InternationalCharset::try_from(15).unwrap(),
            InternationalCharset::China
        );
        assert!(InternationalCharset::try_from(16).is_err());
    }

    #[test]
    fn test_code_table() {
        assert_eq!(code_table(CodeTable::Cp437), vec![0x1B, 0x74, 0]);
        assert_eq!(code_table(CodeTable::Wcp1252), vec![0x1B, 0x74, 16]);
        assert_eq!(CodeTable::try_from(47).unwrap(), CodeTable::Cp874);
    }

    #[test]
    fn test_code_table_gaps() {
        for n in [11, 12, 13, 14, 48, 255] {
            assert!(CodeTable::try_from(n).is_err(), "table {n}");
        }
        for table in CodeTable::ALL {
            assert_eq!(CodeTable::try_from(table as u8).unwrap(), table);
        }
    }

    #[test]
    fn test_user_defined_set() {
        assert_eq!(user_defined_set(true), vec![0x1B, 0x25, 1]);
        assert_eq!(user_defined_set(false), vec![0x1B, 0x25, 0]);
    }

    #[test]
    fn test_cancel_user_defined() {
        assert_eq!(cancel_user_defined(32).unwrap(), vec![0x1B, 0x3F, 32]);
        assert_eq!(cancel_user_defined(126).unwrap(), vec![0x1B, 0x3F, 126]);
        assert!(cancel_user_defined(31).is_err());
        assert!(cancel_user_defined(127).is_err());
    }
}
