//! # TCP Transport
//!
//! Ethernet printers listen on a raw socket (port 9100 by default). Bytes
//! written to the socket are fed to the command parser unchanged and status
//! answers come back on the same stream.

use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::EscPosError;
use crate::printer::config::TcpConfig;

/// Network printer connection.
#[derive(Debug)]
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    /// Connect to the printer, trying each resolved address in turn.
    pub fn connect(config: &TcpConfig) -> Result<Self, EscPosError> {
        let addrs = (config.host.as_str(), config.port)
            .to_socket_addrs()
            .map_err(|e| EscPosError::transport("resolve printer address", e))?;

        let timeout = Duration::from_millis(config.connect_timeout_ms);
        let mut last_err = io::Error::new(
            io::ErrorKind::NotFound,
            format!("no address found for {}", config.host),
        );

        for addr in addrs {
            match TcpStream::connect_timeout(&addr, timeout) {
                Ok(stream) => {
                    log::debug!("connected to {addr}");
                    return Self::from_stream(stream, config);
                }
                Err(e) => {
                    log::debug!("connect to {addr} failed: {e}");
                    last_err = e;
                }
            }
        }

        Err(EscPosError::transport("connect", last_err))
    }

    fn from_stream(stream: TcpStream, config: &TcpConfig) -> Result<Self, EscPosError> {
        let read_timeout = (config.read_timeout_ms > 0).then(|| Duration::from_millis(config.read_timeout_ms));
        let write_timeout = (config.write_timeout_ms > 0).then(|| Duration::from_millis(config.write_timeout_ms));

        stream
            .set_read_timeout(read_timeout)
            .and_then(|_| stream.set_write_timeout(write_timeout))
            .and_then(|_| stream.set_nodelay(true))
            .map_err(|e| EscPosError::transport("configure socket", e))?;

        Ok(Self { stream })
    }
}

impl Read for TcpTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }
}

impl Write for TcpTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_round_trip_with_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let mut buf = [0u8; 3];
            socket.read_exact(&mut buf).unwrap();
            assert_eq!(buf, [0x10, 0x04, 0x01]);
            socket.write_all(&[0x12]).unwrap();
        });

        let config = TcpConfig {
            host: "127.0.0.1".to_string(),
            port,
            ..TcpConfig::default()
        };
        let mut transport = TcpTransport::connect(&config).unwrap();
        transport.write_all(&[0x10, 0x04, 0x01]).unwrap();
        let mut answer = [0u8; 1];
        transport.read_exact(&mut answer).unwrap();
        assert_eq!(answer, [0x12]);

        server.join().unwrap();
    }

    #[test]
    fn test_connect_refused() {
        // Bind then drop to get a port nobody listens on.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = TcpConfig {
            host: "127.0.0.1".to_string(),
            port,
            connect_timeout_ms: 500,
            ..TcpConfig::default()
        };
        assert!(matches!(
            TcpTransport::connect(&config),
            Err(EscPosError::Transport { operation: "connect", .. })
        ));
    }
}
