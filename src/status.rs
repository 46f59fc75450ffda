//! # Printer Status Decoding
//!
//! Real-time status queries (`DLE EOT n`) answer with exactly one byte.
//! Each query class packs independent facts into fixed bits of that byte.
//!
//! | Class | n | Fact | Rule |
//! |-------|---|------|------|
//! | Printer | 1 | Drawer open (pin 3 low) | `b & 0x04 == 0` |
//! | Offline | 2 | Cover open | `b & 0x04 != 0` |
//! | Offline | 2 | Feed button pressed | `b & 0x08 == 0` |
//! | Error | 3 | Autocutter error | `b & 0x08 != 0` |
//! | Error | 3 | Unrecoverable error | `b & 0x20 != 0` |
//! | Error | 3 | Auto-recoverable error | `b & 0x40 != 0` |
//! | Paper | 4 | Paper near end | `b & 0x0C != 0` |
//! | Paper | 4 | Paper present | `b & 0x60 == 0` |
//!
//! The paper sensor query `GS r 1` is not real-time; its answer is masked
//! with `0x0C` (near-end sensor).
//!
//! Decoding is pure. Reading the byte is the printer facade's job, and a
//! failed read is reported as an error rather than a default status.

use serde::Serialize;

use crate::protocol::commands::{DLE, EOT, GS};

// ============================================================================
// BIT MASKS
// ============================================================================

/// Printer class: drawer kick-out connector pin 3
pub const DRAWER_MASK: u8 = 0x04;

/// Offline class: cover open
pub const COVER_MASK: u8 = 0x04;

/// Offline class: FEED button (clear while pressed)
pub const FEED_BUTTON_MASK: u8 = 0x08;

/// Error class: autocutter error
pub const AUTOCUTTER_MASK: u8 = 0x08;

/// Error class: unrecoverable error
pub const UNRECOVERABLE_ERROR_MASK: u8 = 0x20;

/// Error class: auto-recoverable error
pub const AUTORECOVERABLE_ERROR_MASK: u8 = 0x40;

/// Paper class: near-end sensor
pub const PAPER_NEAR_END_MASK: u8 = 0x0C;

/// Paper class: paper end sensor (clear while paper is present)
pub const PAPER_END_MASK: u8 = 0x60;

/// `GS r 1` answer: near-end sensor
pub const PAPER_SENSOR_MASK: u8 = 0x0C;

// ============================================================================
// QUERIES
// ============================================================================

/// Real-time status query class, `n` of `DLE EOT n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum StatusQuery {
    Printer = 1,
    Offline = 2,
    Error = 3,
    Paper = 4,
}

impl StatusQuery {
    pub const ALL: [StatusQuery; 4] = [
        StatusQuery::Printer,
        StatusQuery::Offline,
        StatusQuery::Error,
        StatusQuery::Paper,
    ];

    /// Transmit real-time status (DLE EOT n)
    pub fn request(self) -> Vec<u8> {
        vec![DLE, EOT, self as u8]
    }
}

/// Transmit paper sensor status (GS r 1)
pub fn paper_sensor_request() -> Vec<u8> {
    vec![GS, b'r', 1]
}

// ============================================================================
// DECODED STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrinterStatus {
    pub raw: u8,
    pub drawer_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OfflineStatus {
    pub raw: u8,
    pub cover_open: bool,
    pub feed_button_pressed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorStatus {
    pub raw: u8,
    pub autocutter_error: bool,
    pub unrecoverable_error: bool,
    pub autorecoverable_error: bool,
}

impl ErrorStatus {
    /// True if any error bit is set.
    pub fn has_error(&self) -> bool {
        self.autocutter_error || self.unrecoverable_error || self.autorecoverable_error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaperStatus {
    pub raw: u8,
    pub paper_present: bool,
    pub near_end: bool,
}

/// Facts decoded from one status byte, tagged by query class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum StatusFacts {
    Printer(PrinterStatus),
    Offline(OfflineStatus),
    Error(ErrorStatus),
    Paper(PaperStatus),
}

impl StatusFacts {
    /// The raw byte the facts were decoded from.
    pub fn raw(&self) -> u8 {
        match self {
            StatusFacts::Printer(s) => s.raw,
            StatusFacts::Offline(s) => s.raw,
            StatusFacts::Error(s) => s.raw,
            StatusFacts::Paper(s) => s.raw,
        }
    }
}

impl PrinterStatus {
    pub fn decode(raw: u8) -> Self {
        Self {
            raw,
            drawer_open: raw & DRAWER_MASK == 0,
        }
    }
}

impl OfflineStatus {
    pub fn decode(raw: u8) -> Self {
        Self {
            raw,
            cover_open: raw & COVER_MASK != 0,
            feed_button_pressed: raw & FEED_BUTTON_MASK == 0,
        }
    }
}

impl ErrorStatus {
    pub fn decode(raw: u8) -> Self {
        Self {
            raw,
            autocutter_error: raw & AUTOCUTTER_MASK != 0,
            unrecoverable_error: raw & UNRECOVERABLE_ERROR_MASK != 0,
            autorecoverable_error: raw & AUTORECOVERABLE_ERROR_MASK != 0,
        }
    }
}

impl PaperStatus {
    pub fn decode(raw: u8) -> Self {
        Self {
            raw,
            paper_present: raw & PAPER_END_MASK == 0,
            near_end: raw & PAPER_NEAR_END_MASK != 0,
        }
    }
}

/// Decode a status byte for the given query class.
pub fn decode(query: StatusQuery, raw: u8) -> StatusFacts {
    match query {
        StatusQuery::Printer => StatusFacts::Printer(PrinterStatus::decode(raw)),
        StatusQuery::Offline => StatusFacts::Offline(OfflineStatus::decode(raw)),
        StatusQuery::Error => StatusFacts::Error(ErrorStatus::decode(raw)),
        StatusQuery::Paper => StatusFacts::Paper(PaperStatus::decode(raw)),
    }
}

/// Paper sensor state reported by `GS r 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperSensor {
    Ok,
    NearEnd,
}

impl PaperSensor {
    pub fn decode(raw: u8) -> Self {
        if raw & PAPER_SENSOR_MASK == 0 {
            PaperSensor::Ok
        } else {
            PaperSensor::NearEnd
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
