//! # Error Types
//!
//! This module defines the error types returned by every printer operation.
//!
//! Errors fall into three groups:
//!
//! - **Validation**: [`BarcodeError`], [`EscPosError::OutOfRange`] and
//!   [`EscPosError::DataLength`]. These are raised before any byte is written.
//! - **Unsupported**: commands whose encoding is intentionally incomplete.
//! - **Transport**: the underlying write/read failed, tagged with the
//!   operation that was running.

use std::io;

use thiserror::Error;

use crate::protocol::barcode::Symbology;

/// Barcode validation failures.
///
/// Checks run in a fixed order (length bound, declared-vs-actual length,
/// character set) and the first failure is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    /// The raw symbology tag is not one the printer understands.
    #[error("unknown barcode symbology tag {0}")]
    UnknownSymbology(u8),

    /// The declared length is outside the symbology's bounds.
    #[error("invalid {symbology} barcode length {length}")]
    InvalidLength { symbology: Symbology, length: u8 },

    /// The declared length does not match the number of data bytes.
    #[error("barcode length mismatch: declared {declared}, got {actual} bytes")]
    LengthMismatch { declared: u8, actual: usize },

    /// A data byte is outside the symbology's character set.
    #[error("invalid {symbology} barcode character 0x{byte:02X} at index {index}")]
    InvalidCharacter {
        symbology: Symbology,
        byte: u8,
        index: usize,
    },
}

/// Main error type for printer operations
#[derive(Debug, Error)]
pub enum EscPosError {
    /// Barcode request rejected by the validator
    #[error("invalid barcode: {0}")]
    Barcode(#[from] BarcodeError),

    /// Numeric parameter outside the range accepted by the command
    #[error("{parameter} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        parameter: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Image payload does not match the declared dimensions
    #[error("image data length mismatch: expected {expected} bytes, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Command whose encoding is not implemented
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Transport-level failure while running `operation`
    #[error("{operation}: transport error: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    /// Configuration could not be loaded or applied
    #[error("configuration error: {0}")]
    Config(String),
}

impl EscPosError {
    /// Build an [`EscPosError::OutOfRange`] for `value` outside `min..=max`.
    pub(crate) fn out_of_range(
        parameter: &'static str,
        value: impl Into<u32>,
        min: impl Into<u32>,
        max: impl Into<u32>,
    ) -> Self {
        Self::OutOfRange {
            parameter,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Wrap an I/O error raised while running `operation`.
    pub(crate) fn transport(operation: &'static str, source: io::Error) -> Self {
        Self::Transport { operation, source }
    }

    /// True if this error was raised before anything reached the transport.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Barcode(_) | Self::OutOfRange { .. } | Self::DataLength { .. }
        )
    }
}

/// Check that `value` lies within `min..=max`.
pub(crate) fn ensure_range<V>(parameter: &'static str, value: V, min: V, max: V) -> Result<(), EscPosError>
where
    V: PartialOrd + Copy + Into<u32>,
{
    if value < min || value > max {
        return Err(EscPosError::out_of_range(parameter, value, min, max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_range_bounds_inclusive() {
        assert!(ensure_range("n", 1u8, 1, 9).is_ok());
        assert!(ensure_range("n", 9u8, 1, 9).is_ok());
        assert!(ensure_range("n", 0u8, 1, 9).is_err());
        assert!(ensure_range("n", 10u8, 1, 9).is_err());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ensure_range("beep count", 12u8, 1, 9).unwrap_err();
        assert_eq!(err.to_string(), "beep count out of range: 12 (expected 1..=9)");
        assert!(err.is_validation());
    }

    #[test]
    fn test_transport_error_keeps_source() {
        let err = EscPosError::transport(
            "cut",
            io::Error::new(io::ErrorKind::BrokenPipe, "gone"),
        );
        assert!(!err.is_validation());
        match err {
            EscPosError::Transport { operation, source } => {
                assert_eq!(operation, "cut");
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_barcode_error_converts() {
        let err: EscPosError = BarcodeError::UnknownSymbology(99).into();
        assert!(matches!(err, EscPosError::Barcode(BarcodeError::UnknownSymbology(99))));
        assert!(err.is_validation());
    }
}
