//! Serial report writer
//!
//! Renders each [`Report`] as one CRLF-terminated text line on any
//! `embedded_io::Write` (a UART in the firmware).

use core::fmt::Write as _;

use coilrail_core::state::Report;
use embedded_io::Write;
use heapless::String;

/// Longest rendered report line, excluding CRLF
pub const MAX_LINE_LEN: usize = 64;

/// Failure writing a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteError<E> {
    /// Rendered line did not fit in `MAX_LINE_LEN`
    LineTooLong,
    /// Underlying writer failed
    Io(E),
}

/// Line-oriented report writer
pub struct LineWriter<W> {
    writer: W,
    verbose: bool,
    written: u32,
}

impl<W: Write> LineWriter<W> {
    /// Create a writer
    ///
    /// With `verbose` false, trace reports (sensor trips, coil on/off) are
    /// skipped and only hold-off, speed and fail-safe lines go out.
    pub fn new(writer: W, verbose: bool) -> Self {
        Self {
            writer,
            verbose,
            written: 0,
        }
    }

    /// Check if a report would be written
    pub fn accepts(&self, report: &Report) -> bool {
        self.verbose || !report.is_verbose()
    }

    /// Write one report line
    ///
    /// Returns `Ok(false)` if the report was filtered out.
    pub fn write_report(&mut self, report: &Report) -> Result<bool, WriteError<W::Error>> {
        if !self.accepts(report) {
            return Ok(false);
        }

        let mut line: String<MAX_LINE_LEN> = String::new();
        write!(line, "{}", report).map_err(|_| WriteError::LineTooLong)?;

        self.writer
            .write_all(line.as_bytes())
            .map_err(WriteError::Io)?;
        self.writer.write_all(b"\r\n").map_err(WriteError::Io)?;
        self.written = self.written.wrapping_add(1);
        Ok(true)
    }

    /// Lines written so far
    pub fn written(&self) -> u32 {
        self.written
    }

    /// Get access to the underlying writer
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coilrail_core::traits::{Coil, Sensor};
    use core::convert::Infallible;

    /// Writer collecting bytes into a fixed buffer
    struct Capture {
        bytes: heapless::Vec<u8, 256>,
    }

    impl Capture {
        fn new() -> Self {
            Self {
                bytes: heapless::Vec::new(),
            }
        }

        fn text(&self) -> &str {
            core::str::from_utf8(&self.bytes).unwrap()
        }
    }

    impl embedded_io::ErrorType for Capture {
        type Error = Infallible;
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            let room = self.bytes.capacity() - self.bytes.len();
            let n = buf.len().min(room);
            self.bytes.extend_from_slice(&buf[..n]).unwrap();
            Ok(n)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_lines_are_crlf_terminated() {
        let mut out = LineWriter::new(Capture::new(), true);
        out.write_report(&Report::HoldOff { ms: 42 }).unwrap();
        out.write_report(&Report::Speed {
            sensor: Sensor::Two,
            mm_per_s: Some(1250),
        })
        .unwrap();
        assert_eq!(
            out.writer().text(),
            "Holdoff delay 42 ms\r\nHall2 Speed: 1250 mm/s\r\n"
        );
        assert_eq!(out.written(), 2);
    }

    #[test]
    fn test_quiet_writer_drops_trace_lines() {
        let mut out = LineWriter::new(Capture::new(), false);
        assert_eq!(
            out.write_report(&Report::CoilOff { coil: Coil::A }),
            Ok(false)
        );
        assert_eq!(out.write_report(&Report::FailSafeTripped), Ok(true));
        assert_eq!(
            out.writer().text(),
            "Launch taking too long.  Shutting down!\r\n"
        );
    }
}
