//! # Rongta CLI
//!
//! Command-line interface for Rongta ESC/POS receipt printers.
//!
//! ## Usage
//!
//! ```bash
//! # Query every status class
//! rongta status
//! rongta --json status
//!
//! # Print a line of text and cut
//! rongta text "Hello" --align center --bold --cut
//!
//! # Print a barcode over the network
//! rongta --host 192.168.1.87 barcode ean13 590123412345 --hri below
//!
//! # Show the bytes instead of sending them
//! rongta --dry-run barcode code39 ABC-123
//!
//! # Debug logging of every command sent
//! RUST_LOG=rongta_escpos=trace rongta cut
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{Read, Write};
use std::path::PathBuf;

use rongta_escpos::{
    EscPosError, Printer, StatusQuery,
    printer::config::{ConnectionConfig, SerialConfig, TcpConfig},
    protocol::barcode::{BarcodeRequest, HriPosition, ItfLengthRule, Symbology},
    protocol::device::{PrinterIdInfo, Recovery},
    protocol::text::{Justification, PrintMode},
    protocol::to_hex,
    status::PaperSensor,
    transport::MemoryTransport,
};

/// Rongta - ESC/POS receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "rongta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON connection config file (overrides --device/--host)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Serial device path
    #[arg(long, global = true)]
    device: Option<PathBuf>,

    /// Serial baud rate
    #[arg(long, global = true)]
    baud: Option<u32>,

    /// Printer host for raw TCP printing
    #[arg(long, global = true)]
    host: Option<String>,

    /// TCP port
    #[arg(long, default_value_t = 9100, global = true)]
    port: u16,

    /// Print the framed bytes as hex instead of sending them
    #[arg(long, global = true)]
    dry_run: bool,

    /// JSON output for queries
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Query printer, offline, error and paper status
    Status,

    /// Query printer identification
    Id {
        #[arg(long, value_enum, default_value_t = IdKind::Name)]
        info: IdKind,
    },

    /// Print a line of text
    Text {
        text: String,

        #[arg(long, value_enum, default_value_t = Align::Left)]
        align: Align,

        #[arg(long)]
        bold: bool,

        /// Character width multiplier (1-8)
        #[arg(long, default_value_t = 1)]
        width: u8,

        /// Character height multiplier (1-8)
        #[arg(long, default_value_t = 1)]
        height: u8,

        /// Feed and cut after printing
        #[arg(long)]
        cut: bool,
    },

    /// Print a 1D barcode
    Barcode {
        /// upca, upce, ean13, ean8, code39, itf, codabar, code93, code128
        symbology: Symbology,

        data: String,

        #[arg(long, value_enum, default_value_t = Hri::Below)]
        hri: Hri,

        /// Bar height in dots (1-255)
        #[arg(long, default_value_t = 162)]
        height: u8,

        /// Module width (2-6)
        #[arg(long, default_value_t = 3)]
        width: u8,

        /// Reject odd-length ITF data
        #[arg(long)]
        even_itf: bool,
    },

    /// Feed and cut the paper
    Cut {
        /// Extra feed past the cutter, in motion units
        #[arg(long, default_value_t = 0)]
        feed: u8,
    },

    /// Print the self-test page
    TestPage,

    /// Recover from an autocutter or cover error
    Recover {
        /// Clear buffered data instead of restarting the failed line
        #[arg(long)]
        cancel: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Align {
    Left,
    Center,
    Right,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Hri {
    None,
    Above,
    Below,
    Both,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum IdKind {
    Model,
    Type,
    Firmware,
    Manufacturer,
    Name,
    Serial,
}

impl From<Align> for Justification {
    fn from(a: Align) -> Self {
        match a {
            Align::Left => Justification::Left,
            Align::Center => Justification::Center,
            Align::Right => Justification::Right,
        }
    }
}

impl From<Hri> for HriPosition {
    fn from(h: Hri) -> Self {
        match h {
            Hri::None => HriPosition::None,
            Hri::Above => HriPosition::Above,
            Hri::Below => HriPosition::Below,
            Hri::Both => HriPosition::Both,
        }
    }
}

impl From<IdKind> for PrinterIdInfo {
    fn from(k: IdKind) -> Self {
        match k {
            IdKind::Model => PrinterIdInfo::Model,
            IdKind::Type => PrinterIdInfo::Type,
            IdKind::Firmware => PrinterIdInfo::FirmwareVersion,
            IdKind::Manufacturer => PrinterIdInfo::Manufacturer,
            IdKind::Name => PrinterIdInfo::PrinterName,
            IdKind::Serial => PrinterIdInfo::SerialNumber,
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EscPosError> {
    let cli = Cli::parse();

    if cli.dry_run {
        if matches!(cli.command, Commands::Status | Commands::Id { .. }) {
            return Err(EscPosError::Config(
                "--dry-run cannot answer printer queries".to_string(),
            ));
        }
        let mut printer = Printer::new(MemoryTransport::new());
        execute(&mut printer, &cli.command, cli.json)?;
        println!("{}", to_hex(&printer.get_ref().written()));
        return Ok(());
    }

    let connection = connection_config(&cli)?;
    log::info!("connecting: {:?}", connection);
    let mut printer = Printer::new(connection.connect()?);
    execute(&mut printer, &cli.command, cli.json)
}

/// Pick the connection from --config, then --host, then the serial flags.
fn connection_config(cli: &Cli) -> Result<ConnectionConfig, EscPosError> {
    if let Some(path) = &cli.config {
        return ConnectionConfig::from_json_file(path);
    }

    if let Some(host) = &cli.host {
        return Ok(ConnectionConfig::Tcp(TcpConfig {
            host: host.clone(),
            port: cli.port,
            ..TcpConfig::default()
        }));
    }

    let mut serial = SerialConfig::default();
    if let Some(device) = &cli.device {
        serial.device = device.clone();
    }
    if let Some(baud) = cli.baud {
        serial.baud_rate = baud;
    }
    Ok(ConnectionConfig::Serial(serial))
}

fn execute<T: Read + Write>(printer: &mut Printer<T>, command: &Commands, json: bool) -> Result<(), EscPosError> {
    match command {
        Commands::Status => print_status(printer, json),

        Commands::Id { info } => {
            let info = PrinterIdInfo::from(*info);
            let id = printer.printer_id(info)?;
            if info.is_text() {
                let text = String::from_utf8_lossy(&id);
                println!("{}", text.trim_start_matches('_').trim_end_matches('\0'));
            } else {
                println!("{}", to_hex(&id));
            }
            Ok(())
        }

        Commands::Text {
            text,
            align,
            bold,
            width,
            height,
            cut,
        } => {
            printer.initialize()?;
            printer.set_justification((*align).into())?;
            printer.set_print_mode(&PrintMode {
                emphasized: *bold,
                ..Default::default()
            })?;
            printer.set_character_size(*width, *height)?;
            printer.write_text(text)?;
            printer.line_feed()?;
            if *cut {
                printer.cut_with_feed(40)?;
            }
            Ok(())
        }

        Commands::Barcode {
            symbology,
            data,
            hri,
            height,
            width,
            even_itf,
        } => {
            let rule = if *even_itf {
                ItfLengthRule::RequireEven
            } else {
                ItfLengthRule::Lenient
            };
            let request = BarcodeRequest::new(*symbology, data.as_bytes());
            // Fail before touching the printer's barcode settings.
            rongta_escpos::protocol::barcode::validate_with(
                request.symbology,
                request.declared_length,
                request.data,
                rule,
            )?;

            printer.set_hri_position((*hri).into())?;
            printer.set_barcode_height(*height)?;
            printer.set_barcode_width(*width)?;
            printer.print_barcode_with(&request, rule)?;
            printer.line_feed()
        }

        Commands::Cut { feed } => printer.cut_with_feed(*feed),

        Commands::TestPage => printer.print_test_page(),

        Commands::Recover { cancel } => {
            let mode = if *cancel {
                Recovery::Cancel
            } else {
                Recovery::Restart
            };
            printer.recover(mode)
        }
    }
}

fn print_status<T: Read + Write>(printer: &mut Printer<T>, json: bool) -> Result<(), EscPosError> {
    let facts = StatusQuery::ALL
        .into_iter()
        .map(|query| printer.status(query))
        .collect::<Result<Vec<_>, _>>()?;
    let sensor = printer.paper_sensor()?;

    if json {
        let value = serde_json::json!({
            "status": facts,
            "paper_sensor": sensor,
        });
        println!("{}", value);
        return Ok(());
    }

    for fact in &facts {
        println!("{:?}", fact);
    }
    match sensor {
        PaperSensor::Ok => println!("Paper sensor: ok"),
        PaperSensor::NearEnd => println!("Paper sensor: near end"),
    }
    Ok(())
}
