/// Terminal output context that handles the line-oriented writing
use std::io::{self, Stdout, Write};

pub struct TerminalContext<W: Write> {
    out: W,
}

impl TerminalContext<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print a full line
    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print text without newline, e.g. a prompt
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
