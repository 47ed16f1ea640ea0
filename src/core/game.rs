/// Core game interface driven by the engine
use std::io::{self, Write};

use crate::core::terminal::TerminalContext;

/// Main game trait that all games must implement
/// The engine owns the input channel; the game only sees one line at a time
pub trait Game {
    /// Prompt written before every read, without trailing newline
    const PROMPT: &'static str;

    /// Emitted once before the first prompt
    fn greeting<W: Write>(&self, ctx: &mut TerminalContext<W>) -> io::Result<()>;

    /// Handle one line of input (line terminator already stripped)
    fn handle_input<W: Write>(&mut self, line: &str, ctx: &mut TerminalContext<W>) -> io::Result<()>;

    /// Once true the engine stops reading input
    fn is_finished(&self) -> bool;
}
