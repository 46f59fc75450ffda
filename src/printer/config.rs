//! # Connection Configuration
//!
//! How to reach a printer: a serial/USB-CDC tty or a raw TCP socket.
//!
//! ## Defaults
//!
//! | Setting | Serial | TCP |
//! |---------|--------|-----|
//! | Device / host | `/dev/ttyUSB0` (`COM1` on Windows) | `192.168.1.87` |
//! | Baud / port | 19200 | 9100 |
//! | Framing | 8N1 | n/a |
//! | Read timeout | 2000 ms | 2000 ms |
//!
//! ## JSON
//!
//! Configurations deserialize from JSON; missing fields take the defaults
//! above.
//!
//! ```
//! use rongta_escpos::printer::config::ConnectionConfig;
//!
//! let config = ConnectionConfig::from_json(r#"{"type": "tcp", "host": "10.0.0.5"}"#).unwrap();
//! match config {
//!     ConnectionConfig::Tcp(tcp) => assert_eq!((tcp.host.as_str(), tcp.port), ("10.0.0.5", 9100)),
//!     _ => unreachable!(),
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::EscPosError;
use crate::transport::{SerialTransport, TcpTransport, Transport};

/// Default serial device
#[cfg(windows)]
pub const DEFAULT_SERIAL_DEVICE: &str = "COM1";

/// Default serial device
#[cfg(not(windows))]
pub const DEFAULT_SERIAL_DEVICE: &str = "/dev/ttyUSB0";

/// Factory default baud rate of the RP325 serial interface
pub const DEFAULT_BAUD_RATE: u32 = 19200;

/// Raw printing port used by network printers
pub const DEFAULT_TCP_PORT: u16 = 9100;

const DEFAULT_TIMEOUT_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    #[default]
    None,
    Even,
    Odd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopBits {
    #[default]
    One,
    Two,
}

/// Serial (RS-232 or USB-CDC) connection settings. Data bits are always 8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    pub device: PathBuf,
    pub baud_rate: u32,
    pub parity: Parity,
    pub stop_bits: StopBits,
    /// How long a status read waits before giving up, in milliseconds
    pub read_timeout_ms: u64,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_SERIAL_DEVICE),
            baud_rate: DEFAULT_BAUD_RATE,
            parity: Parity::None,
            stop_bits: StopBits::One,
            read_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Raw TCP connection settings. A zero timeout means "no timeout".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TcpConfig {
    pub host: String,
    pub port: u16,
    pub connect_timeout_ms: u64,
    pub read_timeout_ms: u64,
    pub write_timeout_ms: u64,
}

impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            host: "192.168.1.87".to_string(),
            port: DEFAULT_TCP_PORT,
            connect_timeout_ms: DEFAULT_TIMEOUT_MS,
            read_timeout_ms: DEFAULT_TIMEOUT_MS,
            write_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Where the printer is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ConnectionConfig {
    Serial(SerialConfig),
    Tcp(TcpConfig),
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        ConnectionConfig::Serial(SerialConfig::default())
    }
}

impl ConnectionConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, EscPosError> {
        serde_json::from_str(json).map_err(|e| EscPosError::Config(format!("invalid config: {e}")))
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EscPosError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| EscPosError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Open the transport described by this configuration.
    pub fn connect(&self) -> Result<Box<dyn Transport>, EscPosError> {
        match self {
            ConnectionConfig::Serial(serial) => Ok(Box::new(SerialTransport::open(serial)?)),
            ConnectionConfig::Tcp(tcp) => Ok(Box::new(TcpTransport::connect(tcp)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_defaults() {
        let config = SerialConfig::default();
        assert_eq!(config.baud_rate, 19200);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
        assert_eq!(config.device, PathBuf::from(DEFAULT_SERIAL_DEVICE));
        assert_eq!(
            ConnectionConfig::default(),
            ConnectionConfig::Serial(SerialConfig::default())
        );
    }

    #[test]
    fn test_parse_serial() {
        let config = ConnectionConfig::from_json(
            r#"{"type": "serial", "device": "/dev/ttyACM0", "baud_rate": 115200, "parity": "even", "stop_bits": "two"}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            ConnectionConfig::Serial(SerialConfig {
                device: PathBuf::from("/dev/ttyACM0"),
                baud_rate: 115200,
                parity: Parity::Even,
                stop_bits: StopBits::Two,
                read_timeout_ms: 2000,
            })
        );
    }

    #[test]
    fn test_parse_tcp_defaults() {
        let config = ConnectionConfig::from_json(r#"{"type": "tcp"}"#).unwrap();
        assert_eq!(config, ConnectionConfig::Tcp(TcpConfig::default()));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            ConnectionConfig::from_json(r#"{"type": "usb"}"#),
            Err(EscPosError::Config(_))
        ));
        assert!(matches!(
            ConnectionConfig::from_json("not json"),
            Err(EscPosError::Config(_))
        ));
        assert!(matches!(
            ConnectionConfig::from_json_file("/nonexistent/rongta.json"),
            Err(EscPosError::Config(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = ConnectionConfig::Tcp(TcpConfig {
            host: "printer.local".to_string(),
            ..TcpConfig::default()
        });
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(ConnectionConfig::from_json(&json).unwrap(), config);
    }
}
