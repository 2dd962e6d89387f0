use std::fs::File;
use std::io::{self, Write};

use base64::prelude::*;

use super::{Clipboard, ClipboardError};

/// Copies through the terminal with an OSC 52 escape sequence.
/// Works over SSH and inside tmux when the terminal allows it.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Osc52Clipboard<File> {
    /// The controlling terminal, so a redirected stdout stays clean.
    pub fn tty() -> io::Result<Self> {
        File::options().write(true).open("/dev/tty").map(Self::new)
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn name(&self) -> &str {
        "osc52"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        write!(self.out, "\x1b]52;c;{}\x07", BASE64_STANDARD.encode(text))?;
        self.out.flush()?;
        Ok(())
    }
}
