//! Output sinks.
//!
//! Rendering never fails because of its sink: [`Output::write`] is
//! infallible, and sinks backed by fallible writers remember their first
//! error for the caller to inspect once rendering is over.

use std::io;

/// Append-only text sink.
pub trait Output {
    fn write(&mut self, text: &str);
}

impl Output for String {
    #[inline]
    fn write(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// Sink over any `io::Write`.
///
/// The first failed write is recorded and every later write is dropped.
pub struct IoOutput<W: io::Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoOutput<W> {
    pub fn new(writer: W) -> Self {
        IoOutput {
            writer,
            error: None,
        }
    }

    /// Flush the writer and return it, or the first error encountered.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: io::Write> Output for IoOutput<W> {
    fn write(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.writer.write_all(text.as_bytes()) {
            self.error = Some(error);
        }
    }
}
