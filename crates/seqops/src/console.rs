//! Line oriented text output.

use std::{
    fmt,
    io::{self, Write},
};

/// Writes human-readable lines to an underlying writer.
///
/// Each method writes exactly one line.
#[derive(Debug)]
pub struct Console<W> {
    writer: W,
}

impl Console<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes `<value>`
    pub fn log<T: fmt::Display + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        writeln!(self.writer, "{value}")
    }

    /// Writes `<index>: <element>`
    pub fn log_indexed<T: fmt::Display + ?Sized>(
        &mut self,
        index: usize,
        element: &T,
    ) -> io::Result<()> {
        writeln!(self.writer, "{index}: {element}")
    }

    /// Writes `<key>: <value>`
    pub fn log_entry<K, V>(&mut self, key: &K, value: &V) -> io::Result<()>
    where
        K: fmt::Display + ?Sized,
        V: fmt::Display + ?Sized,
    {
        writeln!(self.writer, "{key}: {value}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
