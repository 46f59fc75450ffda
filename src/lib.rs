//! # Rongta ESC/POS - Thermal Receipt Printer Library
//!
//! Command encoder and status decoder for Rongta thermal receipt printers
//! (RP325 and compatibles) speaking ESC/POS over serial, USB-CDC or TCP.
//! It provides:
//!
//! - **Protocol implementation**: pure ESC/POS command builders
//! - **Barcode validation**: length and character-set rules per symbology
//! - **Status decoding**: real-time status bytes into named facts
//! - **Transport**: serial tty, raw TCP and an in-memory recorder
//!
//! ## Quick Start
//!
//! ```no_run
//! use rongta_escpos::{
//!     Printer,
//!     printer::config::{ConnectionConfig, SerialConfig},
//!     protocol::barcode::{BarcodeRequest, Symbology},
//!     protocol::text::PrintMode,
//! };
//!
//! let transport = ConnectionConfig::Serial(SerialConfig::default()).connect()?;
//! let mut printer = Printer::new(transport);
//!
//! printer.initialize()?;
//! printer.set_print_mode(&PrintMode { double_height: true, ..Default::default() })?;
//! printer.write_text("HELLO\n")?;
//! printer.print_barcode(&BarcodeRequest::new(Symbology::Code128, b"ORDER-0042"))?;
//! printer.cut_with_feed(40)?;
//!
//! if printer.paper_status()?.near_end {
//!     eprintln!("paper running low");
//! }
//! # Ok::<(), rongta_escpos::EscPosError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`status`] | Status byte decoding |
//! | [`printer`] | The [`Printer`] facade and connection config |
//! | [`transport`] | Communication backends |
//! | [`error`] | Error types |
//!
//! ## Logging
//!
//! Every command sent is logged through the `log` facade: the operation
//! name and size at `debug`, the bytes in hex at `trace`.

pub mod error;
pub mod printer;
pub mod protocol;
pub mod status;
pub mod transport;

// Re-exports for convenience
pub use error::{BarcodeError, EscPosError};
pub use printer::Printer;
pub use status::{StatusFacts, StatusQuery};
