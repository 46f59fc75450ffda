//! # In-Memory Transport
//!
//! Records every write and replays scripted read responses. Used by the
//! tests and by the CLI's `--dry-run` mode.
//!
//! ```
//! use std::io::{Read, Write};
//! use rongta_escpos::transport::MemoryTransport;
//!
//! let mut transport = MemoryTransport::new();
//! transport.push_response(&[0x12]);
//!
//! transport.write_all(&[0x10, 0x04, 0x01]).unwrap();
//! let mut buf = [0u8; 1];
//! transport.read(&mut buf).unwrap();
//!
//! assert_eq!(transport.written(), &[0x10, 0x04, 0x01]);
//! assert_eq!(buf, [0x12]);
//! ```

use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// One scripted answer to a `read` call
#[derive(Debug, Clone, PartialEq, Eq)]
enum Response {
    Data(Vec<u8>),
    Error(io::ErrorKind),
}

/// Transport that keeps everything in memory.
///
/// Reads with no scripted response left return `Ok(0)`, like a closed
/// stream.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    writes: Vec<Vec<u8>>,
    responses: VecDeque<Response>,
    write_error: Option<io::ErrorKind>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes to be returned by the next unanswered `read`.
    pub fn push_response(&mut self, data: &[u8]) {
        self.responses.push_back(Response::Data(data.to_vec()));
    }

    /// Queue an I/O error to be returned by the next unanswered `read`.
    pub fn push_read_error(&mut self, kind: io::ErrorKind) {
        self.responses.push_back(Response::Error(kind));
    }

    /// Make every following `write` fail with `kind`.
    pub fn fail_writes(&mut self, kind: io::ErrorKind) {
        self.write_error = Some(kind);
    }

    /// All bytes written so far, concatenated.
    pub fn written(&self) -> Vec<u8> {
        self.writes.concat()
    }

    /// Bytes of each `write` call, in order.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// Drain the recorded writes.
    pub fn take_written(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.writes).concat()
    }
}

impl Read for MemoryTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.responses.pop_front() {
            None => Ok(0),
            Some(Response::Error(kind)) => Err(io::Error::new(kind, "scripted read failure")),
            Some(Response::Data(data)) => {
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                if n < data.len() {
                    self.responses.push_front(Response::Data(data[n..].to_vec()));
                }
                Ok(n)
            }
        }
    }
}

impl Write for MemoryTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(kind) = self.write_error {
            return Err(io::Error::new(kind, "scripted write failure"));
        }
        self.writes.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.write_error {
            Some(kind) => Err(io::Error::new(kind, "scripted flush failure")),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_writes() {
        let mut transport = MemoryTransport::new();
        transport.write_all(&[1, 2]).unwrap();
        transport.write_all(&[3]).unwrap();
        assert_eq!(transport.writes(), &[vec![1, 2], vec![3]]);
        assert_eq!(transport.written(), vec![1, 2, 3]);
        assert_eq!(transport.take_written(), vec![1, 2, 3]);
        assert!(transport.writes().is_empty());
    }

    #[test]
    fn test_scripted_reads() {
        let mut transport = MemoryTransport::new();
        transport.push_response(b"abc");
        transport.push_read_error(io::ErrorKind::TimedOut);

        let mut buf = [0u8; 2];
        assert_eq!(transport.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf, b"ab");
        assert_eq!(transport.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'c');
        assert_eq!(
            transport.read(&mut buf).unwrap_err().kind(),
            io::ErrorKind::TimedOut
        );
        assert_eq!(transport.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_write_failure() {
        let mut transport = MemoryTransport::new();
        transport.fail_writes(io::ErrorKind::BrokenPipe);
        assert_eq!(
            transport.write(&[1]).unwrap_err().kind(),
            io::ErrorKind::BrokenPipe
        );
        assert!(transport.writes().is_empty());
    }
}
