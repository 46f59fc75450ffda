//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders for Rongta receipt printers. Every function
//! is pure: typed parameters in, exact bytes out. Builders for commands
//! with range or length rules return `Result` and never produce bytes for
//! invalid input.
//!
//! ## Module Structure
//!
//! - [`commands`]: Control codes, init, feed, cut
//! - [`text`]: Print mode, character size, alignment, spacing, tabs
//! - [`charset`]: International character sets and code tables
//! - [`barcode`]: 1D barcode validation, HRI, 2D barcodes
//! - [`graphics`]: Bit image, raster and NV images
//! - [`page`]: Page mode
//! - [`device`]: Drawer, buzzer, recovery, macros, counter, printer ID
//!
//! ## Usage Example
//!
//! ```
//! use rongta_escpos::protocol::{barcode, commands, text};
//! use rongta_escpos::protocol::barcode::{BarcodeRequest, Symbology};
//! use rongta_escpos::protocol::text::{Justification, PrintMode};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::justification(Justification::Center));
//! data.extend(text::print_mode(&PrintMode { emphasized: true, ..Default::default() }));
//! data.extend(text::text("RECEIPT\n"));
//! data.extend(barcode::print(&BarcodeRequest::new(Symbology::Code39, b"A-1"))?);
//! data.extend(commands::cut_feed(40));
//! # Ok::<(), rongta_escpos::EscPosError>(())
//! ```

pub mod barcode;
pub mod charset;
pub mod commands;
pub mod device;
pub mod graphics;
pub mod page;
pub mod text;

/// Format bytes as space-separated uppercase hex, e.g. `1B 40`.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
