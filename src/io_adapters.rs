//! Line-oriented adapters over the session's input and output streams.
//!
//! Every write is flushed immediately so that prompts show up before the
//! shell blocks on the next read. I/O failures at this level are fatal to
//! the session; callers propagate them instead of reporting inline.

use std::io::{self, BufRead, Write};

/// Writer that flushes after every string it emits.
///
/// The output line terminator is a bare `\n`, applied consistently to every
/// line the shell produces.
pub struct LineWriter<W: Write> {
    inner: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write a string as-is and flush.
    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.inner.write_all(s.as_bytes())?;
        self.inner.flush()
    }

    /// Write a string followed by a newline and flush.
    pub fn write_line(&mut self, s: &str) -> io::Result<()> {
        self.inner.write_all(s.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.inner.flush()
    }
}

// Builtins write through the plain `Write` interface; the dispatcher flushes
// once their output is complete.
impl<W: Write> Write for LineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Read one line from the input stream.
///
/// Returns `Ok(None)` at end of input. The trailing `\n` (and a preceding
/// `\r`, if any) is stripped before the line is handed to the tokenizer.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
