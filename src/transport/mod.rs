//! # Printer Transport Layer
//!
//! Byte-stream backends the [`Printer`](crate::printer::Printer) facade
//! writes commands to and reads status answers from.
//!
//! ## Available Transports
//!
//! - [`serial`]: RS-232 and USB-CDC ttys (unix termios)
//! - [`tcp`]: raw socket printing, port 9100
//! - [`memory`]: in-memory recorder for tests and dry runs
//!
//! Any `Read + Write` type works with the facade; these are the ones the
//! crate ships with.

pub mod memory;
pub mod serial;
pub mod tcp;

use std::io::{Read, Write};

pub use memory::MemoryTransport;
pub use serial::SerialTransport;
pub use tcp::TcpTransport;

/// A bidirectional printer connection.
pub trait Transport: Read + Write + Send {}

impl<T: Read + Write + Send> Transport for T {}
