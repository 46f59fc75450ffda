//! # Serial Transport
//!
//! RS-232 and USB-CDC printers appear as a tty (`/dev/ttyUSB0`,
//! `/dev/ttyACM0`, `COM1`). Both go through this transport.
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so binary data passes through
//! unmodified:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR,
//!   ICRNL cleared
//! - **No software flow control**: IXON, IXOFF, IXANY cleared (0x11 and 0x13
//!   appear in image data)
//! - **No output processing**: OPOST cleared
//! - **Non-canonical, no echo**: ECHO, ECHONL, ICANON, ISIG, IEXTEN cleared
//! - **Framing**: CS8 plus the configured parity and stop bits
//! - **Reads**: `VMIN = 0`, `VTIME` from the configured read timeout, so a
//!   silent printer makes `read` return 0 bytes instead of blocking forever

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
#[cfg(unix)]
use std::os::unix::io::AsRawFd;

use crate::error::EscPosError;
use crate::printer::config::SerialConfig;
#[cfg(unix)]
use crate::printer::config::{Parity, StopBits};

/// Serial printer connection.
///
/// ## Example
///
/// ```no_run
/// use rongta_escpos::printer::config::SerialConfig;
/// use rongta_escpos::transport::SerialTransport;
///
/// let transport = SerialTransport::open(&SerialConfig::default())?;
/// # Ok::<(), rongta_escpos::EscPosError>(())
/// ```
#[derive(Debug)]
pub struct SerialTransport {
    file: File,
}

impl SerialTransport {
    /// Open and configure the serial device.
    ///
    /// ## Errors
    ///
    /// - The device doesn't exist or permission is denied (the user may
    ///   need to be in the `dialout` group)
    /// - The baud rate is not a standard termios speed
    /// - tty configuration fails
    pub fn open(config: &SerialConfig) -> Result<Self, EscPosError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&config.device)
            .map_err(|e| EscPosError::transport("open serial port", e))?;

        #[cfg(unix)]
        configure_tty(file.as_raw_fd(), config)?;

        log::debug!(
            "opened {} at {} baud ({:?} parity, {:?} stop bits)",
            config.device.display(),
            config.baud_rate,
            config.parity,
            config.stop_bits
        );

        Ok(Self { file })
    }
}

impl Read for SerialTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for SerialTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Map a baud rate to its termios speed constant.
#[cfg(unix)]
fn baud_constant(baud: u32) -> Option<libc::speed_t> {
    let speed = match baud {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        230400 => libc::B230400,
        _ => return None,
    };
    Some(speed)
}

#[cfg(unix)]
fn configure_tty(fd: i32, config: &SerialConfig) -> Result<(), EscPosError> {
    use std::mem::MaybeUninit;

    let speed = baud_constant(config.baud_rate)
        .ok_or_else(|| EscPosError::Config(format!("unsupported baud rate {}", config.baud_rate)))?;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(EscPosError::transport(
            "configure serial port",
            io::Error::last_os_error(),
        ));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    termios.c_oflag &= !libc::OPOST;

    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    termios.c_cflag &= !(libc::CSIZE | libc::PARENB | libc::PARODD | libc::CSTOPB);
    termios.c_cflag |= libc::CS8 | libc::CREAD | libc::CLOCAL;
    match config.parity {
        Parity::None => {}
        Parity::Even => termios.c_cflag |= libc::PARENB,
        Parity::Odd => termios.c_cflag |= libc::PARENB | libc::PARODD,
    }
    if config.stop_bits == StopBits::Two {
        termios.c_cflag |= libc::CSTOPB;
    }

    // VTIME counts tenths of a second, capped at 25.5s
    let deciseconds = (config.read_timeout_ms / 100).clamp(1, 255) as libc::cc_t;
    termios.c_cc[libc::VMIN] = 0;
    termios.c_cc[libc::VTIME] = deciseconds;

    let result = unsafe {
        libc::cfsetispeed(&mut termios, speed) | libc::cfsetospeed(&mut termios, speed)
    };
    if result != 0 {
        return Err(EscPosError::transport(
            "configure serial port",
            io::Error::last_os_error(),
        ));
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(EscPosError::transport(
            "configure serial port",
            io::Error::last_os_error(),
        ));
    }

    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_baud_constant() {
        assert_eq!(baud_constant(19200), Some(libc::B19200));
        assert_eq!(baud_constant(115200), Some(libc::B115200));
        assert_eq!(baud_constant(12345), None);
    }

    #[test]
    fn test_open_missing_device() {
        let config = SerialConfig {
            device: "/dev/does-not-exist-rongta".into(),
            ..SerialConfig::default()
        };
        match SerialTransport::open(&config) {
            Err(EscPosError::Transport { operation, source }) => {
                assert_eq!(operation, "open serial port");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
