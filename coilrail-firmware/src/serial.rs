//! Diagnostic serial output
//!
//! Report lines go out on UART0 TX with blocking writes; every report is
//! also logged over defmt. A failed UART write drops that line and the
//! loop carries on.

use coilrail_core::state::Report;
use coilrail_core::traits::ReportSink;
use coilrail_drivers::LineWriter;
use defmt::*;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{self, Blocking, UartTx};
use embedded_io::{ErrorKind, ErrorType, Write};

/// UART transmit failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct SerialError(pub uart::Error);

impl embedded_io::Error for SerialError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Blocking UART transmitter as an `embedded_io::Write`
pub struct UartLines {
    tx: UartTx<'static, UART0, Blocking>,
}

impl UartLines {
    pub fn new(tx: UartTx<'static, UART0, Blocking>) -> Self {
        Self { tx }
    }
}

impl ErrorType for UartLines {
    type Error = SerialError;
}

impl Write for UartLines {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.tx.blocking_write(buf).map_err(SerialError)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush().map_err(SerialError)
    }
}

/// Report sink feeding both defmt and the diagnostic UART
pub struct DiagnosticSink {
    lines: LineWriter<UartLines>,
    dropped: u32,
}

impl DiagnosticSink {
    pub fn new(uart: UartLines) -> Self {
        Self {
            lines: LineWriter::new(uart, cfg!(feature = "verbose-reports")),
            dropped: 0,
        }
    }
}

impl ReportSink for DiagnosticSink {
    fn report(&mut self, report: Report) {
        if report.is_warning() {
            warn!("{}", report);
        } else {
            info!("{}", report);
        }

        if let Err(e) = self.lines.write_report(&report) {
            self.dropped = self.dropped.wrapping_add(1);
            warn!("Diagnostic line dropped ({} total): {}", self.dropped, e);
        }
    }
}
