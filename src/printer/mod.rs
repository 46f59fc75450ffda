//! # Printer Facade
//!
//! [`Printer`] wraps any `Read + Write` transport and exposes one method per
//! printer command.
//!
//! ## Operation Flow
//!
//! ```text
//! set/print command:  validate ──► frame ──► write + flush
//! query command:      frame ──► write + flush ──► one read ──► decode
//! ```
//!
//! - Validation runs to completion before anything is written, so a
//!   rejected call leaves the transport untouched.
//! - Nothing is retried. Every failure is returned with the name of the
//!   operation that raised it.
//! - Queries do exactly one `read`. A read of zero bytes is reported as
//!   [`std::io::ErrorKind::UnexpectedEof`], never as a default status.
//!
//! ## Example
//!
//! ```
//! use rongta_escpos::Printer;
//! use rongta_escpos::protocol::barcode::{BarcodeRequest, Symbology};
//! use rongta_escpos::protocol::text::Justification;
//! use rongta_escpos::transport::MemoryTransport;
//!
//! let mut printer = Printer::new(MemoryTransport::new());
//! printer.initialize()?;
//! printer.set_justification(Justification::Center)?;
//! printer.write_text("ORDER 42\n")?;
//! printer.print_barcode(&BarcodeRequest::new(Symbology::Ean13, b"590123412345"))?;
//! printer.cut_with_feed(40)?;
//! # Ok::<(), rongta_escpos::EscPosError>(())
//! ```

pub mod config;

use std::io::{self, Read, Write};

use crate::error::EscPosError;
use crate::protocol::barcode::two_d::{self, TwoDParams, TwoDSymbology};
use crate::protocol::barcode::{self, BarcodeRequest, HriFont, HriPosition, ItfLengthRule, Symbology};
use crate::protocol::charset::{self, CodeTable, InternationalCharset};
use crate::protocol::device::{
    self, AsbFlags, CountMode, CounterPrintMode, DrawerPin, MacroExecution, PrinterIdInfo, Recovery,
};
use crate::protocol::graphics::{self, BitImageMode, RasterMode};
use crate::protocol::page::{self, PageDirection, PrintArea};
use crate::protocol::text::{self, Font, Justification, PrintMode, Underline};
use crate::protocol::{commands, to_hex};
use crate::status::{
    self, ErrorStatus, OfflineStatus, PaperSensor, PaperStatus, PrinterStatus, StatusFacts, StatusQuery,
};

/// Size of the buffer a printer ID answer is read into
pub const PRINTER_ID_BUFFER_SIZE: usize = 1024;

/// # Rongta ESC/POS Printer
///
/// Owns its transport; all methods take `&mut self`, so a printer is used
/// from one place at a time. Wrap it in a `Mutex` to share it.
pub struct Printer<T: Read + Write> {
    transport: T,
}

impl<T: Read + Write> Printer<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Give back the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }

    pub fn get_ref(&self) -> &T {
        &self.transport
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    // ========================================================================
    // TRANSPORT
    // ========================================================================

    fn send(&mut self, operation: &'static str, bytes: &[u8]) -> Result<(), EscPosError> {
        log::debug!("{operation}: sending {} bytes", bytes.len());
        log::trace!("{operation}: {}", to_hex(bytes));

        self.transport
            .write_all(bytes)
            .and_then(|_| self.transport.flush())
            .map_err(|e| EscPosError::transport(operation, e))
    }

    /// Send `request`, then read once into `buf`.
    fn query(&mut self, operation: &'static str, request: &[u8], buf: &mut [u8]) -> Result<usize, EscPosError> {
        self.send(operation, request)?;

        let n = self
            .transport
            .read(buf)
            .map_err(|e| EscPosError::transport(operation, e))?;
        if n == 0 {
            return Err(EscPosError::transport(
                operation,
                io::Error::new(io::ErrorKind::UnexpectedEof, "printer sent no response"),
            ));
        }

        log::trace!("{operation}: received {}", to_hex(&buf[..n]));
        Ok(n)
    }

    fn query_byte(&mut self, operation: &'static str, request: &[u8]) -> Result<u8, EscPosError> {
        let mut buf = [0u8; 1];
        self.query(operation, request, &mut buf)?;
        Ok(buf[0])
    }

    // ========================================================================
    // PRINT, FEED AND CUT
    // ========================================================================

    /// Reset the printer to its power-on modes (ESC @)
    pub fn initialize(&mut self) -> Result<(), EscPosError> {
        self.send("initialize", &commands::init())
    }

    /// Write text bytes as-is. The active code table decides how bytes
    /// above 0x7F print.
    pub fn write_text(&mut self, s: &str) -> Result<(), EscPosError> {
        self.send("write text", &text::text(s))
    }

    /// Write pre-framed bytes without validation.
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<(), EscPosError> {
        self.send("write raw", bytes)
    }

    pub fn line_feed(&mut self) -> Result<(), EscPosError> {
        self.send("line feed", &commands::line_feed())
    }

    pub fn carriage_return(&mut self) -> Result<(), EscPosError> {
        self.send("carriage return", &commands::carriage_return())
    }

    pub fn horizontal_tab(&mut self) -> Result<(), EscPosError> {
        self.send("horizontal tab", &commands::horizontal_tab())
    }

    pub fn print_and_feed_dots(&mut self, n: u8) -> Result<(), EscPosError> {
        self.send("print and feed dots", &commands::print_and_feed_dots(n))
    }

    pub fn print_and_feed_lines(&mut self, n: u8) -> Result<(), EscPosError> {
        self.send("print and feed lines", &commands::print_and_feed_lines(n))
    }

    /// Partial cut (ESC i)
    pub fn cut(&mut self) -> Result<(), EscPosError> {
        self.send("cut", &commands::cut_partial())
    }

    /// Feed `n` motion units past the cutter, then cut (GS V 66 n)
    pub fn cut_with_feed(&mut self, n: u8) -> Result<(), EscPosError> {
        self.send("cut with feed", &commands::cut_feed(n))
    }

    // ========================================================================
    // TEXT FORMATTING
    // ========================================================================

    pub fn set_print_mode(&mut self, mode: &PrintMode) -> Result<(), EscPosError> {
        self.send("set print mode", &text::print_mode(mode))
    }

    /// Width 1-8 (rejected otherwise), height outside 1-8 prints at normal height
    pub fn set_character_size(&mut self, width: u8, height: u8) -> Result<(), EscPosError> {
        let cmd = text::character_size(width, height)?;
        self.send("set character size", &cmd)
    }

    pub fn set_right_side_spacing(&mut self, n: u8) -> Result<(), EscPosError> {
        self.send("set right side spacing", &text::right_side_spacing(n))
    }

    pub fn set_underline(&mut self, underline: Underline) -> Result<(), EscPosError> {
        self.send("set underline", &text::underline(underline))
    }

    pub fn set_emphasized(&mut self, enabled: bool) -> Result<(), EscPosError> {
        self.send("set emphasized", &text::emphasized(enabled))
    }

    pub fn set_double_strike(&mut self, enabled: bool) -> Result<(), EscPosError> {
        self.send("set double strike", &text::double_strike(enabled))
    }

    pub fn set_font(&mut self, font: Font) -> Result<(), EscPosError> {
        self.send("set font", &text::font(font))
    }

    pub fn set_rotate_90(&mut self, enabled: bool) -> Result<(), EscPosError> {
        self.send("set 90 degree rotation", &text::rotate_90(enabled))
    }

    pub fn set_reverse(&mut self, enabled: bool) -> Result<(), EscPosError> {
        self.send("set reverse printing", &text::reverse(enabled))
    }

    pub fn set_justification(&mut self, justification: Justification) -> Result<(), EscPosError> {
        self.send("set justification", &text::justification(justification))
    }

    pub fn set_default_line_spacing(&mut self) -> Result<(), EscPosError> {
        self.send("set default line spacing", &text::default_line_spacing())
    }

    pub fn set_line_spacing(&mut self, n: u8) -> Result<(), EscPosError> {
        self.send("set line spacing", &text::line_spacing(n))
    }

    pub fn set_absolute_position(&mut self, position: u16) -> Result<(), EscPosError> {
        self.send("set absolute position", &text::absolute_position(position))
    }

    pub fn set_relative_position(&mut self, offset: i16) -> Result<(), EscPosError> {
        self.send("set relative position", &text::relative_position(offset))
    }

    /// At most 32 strictly ascending positions. An empty slice clears all
    /// tab stops.
    pub fn set_tab_positions(&mut self, positions: &[u8]) -> Result<(), EscPosError> {
        let cmd = text::tab_positions(positions)?;
        self.send("set tab positions", &cmd)
    }

    pub fn set_left_margin(&mut self, margin: u16) -> Result<(), EscPosError> {
        self.send("set left margin", &text::left_margin(margin))
    }

    pub fn set_printing_area_width(&mut self, width: u16) -> Result<(), EscPosError> {
        self.send("set printing area width", &text::printing_area_width(width))
    }

    // ========================================================================
    // CHARACTER SETS
    // ========================================================================

    pub fn select_international_charset(&mut self, set: InternationalCharset) -> Result<(), EscPosError> {
        self.send("select international charset", &charset::international_charset(set))
    }

    pub fn select_code_table(&mut self, table: CodeTable) -> Result<(), EscPosError> {
        self.send("select code table", &charset::code_table(table))
    }

    pub fn set_user_defined_set(&mut self, enabled: bool) -> Result<(), EscPosError> {
        self.send("set user-defined character set", &charset::user_defined_set(enabled))
    }

    pub fn cancel_user_defined_character(&mut self, n: u8) -> Result<(), EscPosError> {
        let cmd = charset::cancel_user_defined(n)?;
        self.send("cancel user-defined character", &cmd)
    }

    /// Define user characters (ESC &). Not supported.
    pub fn define_user_characters(&mut self, _first: u8, _last: u8, _data: &[u8]) -> Result<(), EscPosError> {
        Err(EscPosError::Unsupported("define user-defined characters"))
    }

    // ========================================================================
    // PAGE MODE
    // ========================================================================

    pub fn select_page_mode(&mut self) -> Result<(), EscPosError> {
        self.send("select page mode", &page::select_page_mode())
    }

    pub fn select_standard_mode(&mut self) -> Result<(), EscPosError> {
        self.send("select standard mode", &page::select_standard_mode())
    }

    pub fn set_print_direction(&mut self, direction: PageDirection) -> Result<(), EscPosError> {
        self.send("set print direction", &page::print_direction(direction))
    }

    pub fn set_print_area(&mut self, area: &PrintArea) -> Result<(), EscPosError> {
        let cmd = page::print_area(area)?;
        self.send("set print area", &cmd)
    }

    pub fn set_absolute_vertical_position(&mut self, position: u16) -> Result<(), EscPosError> {
        self.send(
            "set absolute vertical position",
            &page::absolute_vertical_position(position),
        )
    }

    pub fn set_relative_vertical_position(&mut self, offset: i16) -> Result<(), EscPosError> {
        self.send(
            "set relative vertical position",
            &page::relative_vertical_position(offset),
        )
    }

    /// Print the page and go back to standard mode (FF)
    pub fn print_and_return(&mut self) -> Result<(), EscPosError> {
        self.send("print and return", &page::print_and_return())
    }

    /// Print the page, staying in page mode (ESC FF)
    pub fn print_page(&mut self) -> Result<(), EscPosError> {
        self.send("print page", &page::print_page())
    }

    pub fn cancel_page_data(&mut self) -> Result<(), EscPosError> {
        self.send("cancel page data", &page::cancel_page_data())
    }

    // ========================================================================
    // BARCODES
    // ========================================================================

    /// Validate and print a 1D barcode (GS k).
    ///
    /// ## Errors
    ///
    /// [`EscPosError::Barcode`] if the request fails validation; nothing is
    /// written in that case.
    pub fn print_barcode(&mut self, request: &BarcodeRequest<'_>) -> Result<(), EscPosError> {
        self.print_barcode_with(request, ItfLengthRule::default())
    }

    /// [`print_barcode`](Self::print_barcode) with an explicit ITF rule.
    pub fn print_barcode_with(
        &mut self,
        request: &BarcodeRequest<'_>,
        itf_rule: ItfLengthRule,
    ) -> Result<(), EscPosError> {
        let cmd = barcode::print_with(request, itf_rule)?;
        self.send("print barcode", &cmd)
    }

    /// Print a barcode whose symbology comes as a raw `GS k` tag.
    pub fn print_barcode_tag(&mut self, tag: u8, declared_length: u8, data: &[u8]) -> Result<(), EscPosError> {
        let symbology = Symbology::from_tag(tag)?;
        let request = BarcodeRequest::with_length(symbology, declared_length, data);
        self.print_barcode(&request)
    }

    /// Print a barcode using symbology-specific extended characters
    /// (CODE128 code sets, CODE93 shifts). Not supported.
    pub fn print_barcode_extended(&mut self, _symbology: Symbology, _data: &[u8]) -> Result<(), EscPosError> {
        Err(EscPosError::Unsupported("barcode special characters"))
    }

    pub fn set_hri_font(&mut self, font: HriFont) -> Result<(), EscPosError> {
        self.send("set HRI font", &barcode::hri_font(font))
    }

    pub fn set_hri_position(&mut self, position: HriPosition) -> Result<(), EscPosError> {
        self.send("set HRI position", &barcode::hri_position(position))
    }

    /// Module width 2-6
    pub fn set_barcode_width(&mut self, n: u8) -> Result<(), EscPosError> {
        let cmd = barcode::width(n)?;
        self.send("set barcode width", &cmd)
    }

    /// Height in dots, 1-255
    pub fn set_barcode_height(&mut self, n: u8) -> Result<(), EscPosError> {
        let cmd = barcode::height(n)?;
        self.send("set barcode height", &cmd)
    }

    pub fn set_barcode_position(&mut self, n: u8) -> Result<(), EscPosError> {
        self.send("set barcode position", &barcode::print_position(n))
    }

    pub fn select_2d_mode(&mut self, symbology: TwoDSymbology) -> Result<(), EscPosError> {
        self.send("select 2D barcode mode", &two_d::select(symbology))
    }

    /// Print a 2D barcode (ESC Z).
    ///
    /// The printer must already be in the matching mode, see
    /// [`select_2d_mode`](Self::select_2d_mode).
    pub fn print_2d_barcode(&mut self, params: &TwoDParams, data: &[u8]) -> Result<(), EscPosError> {
        let cmd = two_d::print(params, data)?;
        self.send("print 2D barcode", &cmd)
    }

    // ========================================================================
    // IMAGES
    // ========================================================================

    pub fn print_bit_image(&mut self, mode: BitImageMode, width: u16, data: &[u8]) -> Result<(), EscPosError> {
        let cmd = graphics::bit_image(mode, width, data)?;
        self.send("print bit image", &cmd)
    }

    pub fn print_raster_image(
        &mut self,
        mode: RasterMode,
        width_bytes: u16,
        height: u16,
        data: &[u8],
    ) -> Result<(), EscPosError> {
        let cmd = graphics::raster_image(mode, width_bytes, height, data)?;
        self.send("print raster image", &cmd)
    }

    pub fn print_nv_image(&mut self, n: u8, mode: RasterMode) -> Result<(), EscPosError> {
        let cmd = graphics::print_nv_image(n, mode)?;
        self.send("print NV image", &cmd)
    }

    /// Store images in NV memory (FS q). Not supported.
    pub fn define_nv_images(&mut self, _images: &[&[u8]]) -> Result<(), EscPosError> {
        Err(EscPosError::Unsupported("define NV bit image"))
    }

    /// Define a downloaded bit image (GS *). Not supported.
    pub fn define_downloaded_image(&mut self, _width: u8, _height: u8, _data: &[u8]) -> Result<(), EscPosError> {
        Err(EscPosError::Unsupported("define downloaded bit image"))
    }

    /// Print the downloaded bit image (GS /). Not supported.
    pub fn print_downloaded_image(&mut self, _mode: RasterMode) -> Result<(), EscPosError> {
        Err(EscPosError::Unsupported("print downloaded bit image"))
    }

    // ========================================================================
    // DEVICE CONTROL
    // ========================================================================

    /// Recover from an autocutter, black mark or platen-open error (DLE ENQ)
    pub fn recover(&mut self, mode: Recovery) -> Result<(), EscPosError> {
        self.send("recover", &device::recover(mode))
    }

    /// Real-time drawer pulse (DLE DC4 1 m t), `t` 1-8
    pub fn realtime_pulse(&mut self, pin: DrawerPin, t: u8) -> Result<(), EscPosError> {
        let cmd = device::realtime_pulse(pin, t)?;
        self.send("real-time pulse", &cmd)
    }

    /// Drawer pulse (ESC p m t1 t2)
    pub fn pulse(&mut self, pin: DrawerPin, on_time: u8, off_time: u8) -> Result<(), EscPosError> {
        self.send("pulse", &device::pulse(pin, on_time, off_time))
    }

    /// Beep `count` times for `duration × 50ms`, both 1-9
    pub fn beep(&mut self, count: u8, duration: u8) -> Result<(), EscPosError> {
        let cmd = device::beep(count, duration)?;
        self.send("beep", &cmd)
    }

    pub fn set_panel_buttons(&mut self, enabled: bool) -> Result<(), EscPosError> {
        self.send("set panel buttons", &device::panel_buttons(enabled))
    }

    pub fn set_peripheral_device(&mut self, n: u8) -> Result<(), EscPosError> {
        self.send("set peripheral device", &device::peripheral_device(n))
    }

    pub fn toggle_macro_definition(&mut self) -> Result<(), EscPosError> {
        self.send("toggle macro definition", &device::toggle_macro_definition())
    }

    pub fn execute_macro(&mut self, exec: &MacroExecution) -> Result<(), EscPosError> {
        let cmd = device::execute_macro(exec)?;
        self.send("execute macro", &cmd)
    }

    pub fn set_automatic_status_back(&mut self, flags: AsbFlags) -> Result<(), EscPosError> {
        self.send("set automatic status back", &device::automatic_status_back(flags))
    }

    pub fn set_motion_units(&mut self, x: u8, y: u8) -> Result<(), EscPosError> {
        self.send("set motion units", &device::motion_units(x, y))
    }

    pub fn print_test_page(&mut self) -> Result<(), EscPosError> {
        self.send("print test page", &device::test_page())
    }

    pub fn feed_marked_paper(&mut self) -> Result<(), EscPosError> {
        self.send("feed marked paper", &device::feed_marked_paper())
    }

    /// Execute test print (GS ( A). Not supported.
    pub fn execute_test_print(&mut self, _paper: u8, _pattern: u8) -> Result<(), EscPosError> {
        Err(EscPosError::Unsupported("execute test print"))
    }

    pub fn select_counter_print_mode(&mut self, mode: CounterPrintMode) -> Result<(), EscPosError> {
        self.send("select counter print mode", &device::counter_print_mode(mode))
    }

    pub fn select_count_mode(&mut self, mode: &CountMode) -> Result<(), EscPosError> {
        self.send("select count mode", &device::count_mode(mode))
    }

    pub fn set_counter_value(&mut self, value: u16) -> Result<(), EscPosError> {
        self.send("set counter value", &device::counter_value(value))
    }

    pub fn print_counter(&mut self) -> Result<(), EscPosError> {
        self.send("print counter", &device::print_counter())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Query one real-time status class (DLE EOT n) and decode the answer.
    pub fn status(&mut self, query: StatusQuery) -> Result<StatusFacts, EscPosError> {
        let raw = self.query_byte("transmit real-time status", &query.request())?;
        Ok(status::decode(query, raw))
    }

    pub fn printer_status(&mut self) -> Result<PrinterStatus, EscPosError> {
        let raw = self.query_byte("transmit printer status", &StatusQuery::Printer.request())?;
        Ok(PrinterStatus::decode(raw))
    }

    pub fn offline_status(&mut self) -> Result<OfflineStatus, EscPosError> {
        let raw = self.query_byte("transmit offline status", &StatusQuery::Offline.request())?;
        Ok(OfflineStatus::decode(raw))
    }

    pub fn error_status(&mut self) -> Result<ErrorStatus, EscPosError> {
        let raw = self.query_byte("transmit error status", &StatusQuery::Error.request())?;
        Ok(ErrorStatus::decode(raw))
    }

    pub fn paper_status(&mut self) -> Result<PaperStatus, EscPosError> {
        let raw = self.query_byte("transmit paper status", &StatusQuery::Paper.request())?;
        Ok(PaperStatus::decode(raw))
    }

    /// Query the paper sensor (GS r 1)
    pub fn paper_sensor(&mut self) -> Result<PaperSensor, EscPosError> {
        let raw = self.query_byte("transmit paper sensor status", &status::paper_sensor_request())?;
        Ok(PaperSensor::decode(raw))
    }

    /// Query printer ID (GS I n).
    ///
    /// Returns the bytes of a single read. Text answers keep their framing
    /// bytes (`_` header, NUL terminator).
    pub fn printer_id(&mut self, info: PrinterIdInfo) -> Result<Vec<u8>, EscPosError> {
        let mut buf = vec![0u8; PRINTER_ID_BUFFER_SIZE];
        let n = self.query("transmit printer ID", &device::printer_id(info), &mut buf)?;
        buf.truncate(n);
        Ok(buf)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;
    use crate::error::BarcodeError;

    fn printer() -> Printer<MemoryTransport> {
        Printer::new(MemoryTransport::new())
    }

    #[test]
    fn test_send_records_bytes() {
        let mut p = printer();
        p.initialize().unwrap();
        p.cut().unwrap();
        assert_eq!(p.get_ref().writes(), &[vec![0x1B, 0x40], vec![0x1B, 0x69]]);
    }

    #[test]
    fn test_validation_failure_writes_nothing() {
        let mut p = printer();
        assert!(p.set_character_size(9, 1).is_err());
        assert!(p.beep(0, 1).is_err());
        assert!(p.print_barcode(&BarcodeRequest::new(Symbology::Ean8, b"12")).is_err());
        assert!(p.print_raster_image(RasterMode::Normal, 2, 2, &[0; 3]).is_err());
        assert!(p.get_ref().writes().is_empty());
    }

    #[test]
    fn test_unsupported_writes_nothing() {
        let mut p = printer();
        let results = [
            p.print_barcode_extended(Symbology::Code128, b"{A12"),
            p.define_nv_images(&[&[0u8; 8]]),
            p.define_downloaded_image(1, 1, &[0; 8]),
            p.print_downloaded_image(RasterMode::Normal),
            p.execute_test_print(0, 1),
            p.define_user_characters(32, 32, &[0; 36]),
        ];
        for result in results {
            assert!(matches!(result, Err(EscPosError::Unsupported(_))));
        }
        assert!(p.get_ref().writes().is_empty());
    }

    #[test]
    fn test_status_reads_once() {
        let mut transport = MemoryTransport::new();
        transport.push_response(&[0x24]);
        transport.push_response(&[0x00]);
        let mut p = Printer::new(transport);

        let status = p.offline_status().unwrap();
        assert!(status.cover_open);
        assert!(status.feed_button_pressed);

        // The second scripted byte is left for the next query.
        let paper = p.paper_status().unwrap();
        assert!(paper.paper_present);
        assert_eq!(
            p.get_ref().written(),
            vec![0x10, 0x04, 0x02, 0x10, 0x04, 0x04]
        );
    }

    #[test]
    fn test_empty_read_is_an_error() {
        let mut p = printer();
        match p.status(StatusQuery::Error) {
            Err(EscPosError::Transport { operation, source }) => {
                assert_eq!(operation, "transmit real-time status");
                assert_eq!(source.kind(), io::ErrorKind::UnexpectedEof);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_read_error_propagates() {
        let mut transport = MemoryTransport::new();
        transport.push_read_error(io::ErrorKind::TimedOut);
        let mut p = Printer::new(transport);

        match p.paper_sensor() {
            Err(EscPosError::Transport { source, .. }) => {
                assert_eq!(source.kind(), io::ErrorKind::TimedOut)
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_write_error_names_operation() {
        let mut transport = MemoryTransport::new();
        transport.fail_writes(io::ErrorKind::BrokenPipe);
        let mut p = Printer::new(transport);

        match p.cut_with_feed(10) {
            Err(EscPosError::Transport { operation, source }) => {
                assert_eq!(operation, "cut with feed");
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_printer_id_trims_to_read() {
        let mut transport = MemoryTransport::new();
        transport.push_response(b"_RP325\0");
        let mut p = Printer::new(transport);

        let id = p.printer_id(PrinterIdInfo::PrinterName).unwrap();
        assert_eq!(id, b"_RP325\0".to_vec());
        assert_eq!(p.get_ref().written(), vec![0x1D, 0x49, 0x43]);
    }

    #[test]
    fn test_print_barcode_tag() {
        let mut p = printer();
        p.print_barcode_tag(69, 3, b"ABC").unwrap();
        assert_eq!(p.get_ref().written(), vec![0x1D, 0x6B, 69, 3, b'A', b'B', b'C']);

        assert!(matches!(
            p.print_barcode_tag(80, 3, b"ABC"),
            Err(EscPosError::Barcode(BarcodeError::UnknownSymbology(80)))
        ));
        assert!(matches!(
            p.print_barcode_tag(69, 3, b"ab!"),
            Err(EscPosError::Barcode(BarcodeError::InvalidCharacter { .. }))
        ));
        assert_eq!(p.get_ref().writes().len(), 1);
    }
}
