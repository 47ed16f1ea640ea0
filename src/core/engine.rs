use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::core::error::EngineError;
use crate::core::game::Game;
use crate::core::terminal::TerminalContext;

pub struct Engine<G: Game, R: BufRead> {
    game: G,
    input: R,
}

impl<G: Game, R: BufRead> Engine<G, R> {
    pub fn new(game: G, input: R) -> Self {
        Self { game, input }
    }

    /// Runs prompt/read/dispatch until the game finishes and hands the game back.
    /// End of input before that is an error.
    pub fn run<W: Write>(mut self, ctx: &mut TerminalContext<W>) -> Result<G, EngineError> {
        self.game.greeting(ctx)?;

        let mut buf = Vec::new();
        while !self.game.is_finished() {
            ctx.print(G::PROMPT)?;
            ctx.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("input channel closed");
                return Err(EngineError::InputClosed);
            }

            // Bytes that are not UTF-8 become U+FFFD and the game rejects them like any other text
            let line = String::from_utf8_lossy(&buf);
            let raw = strip_line_ending(&line);
            trace!(input = raw, "read line");
            self.game.handle_input(raw, ctx)?;
        }

        ctx.flush()?;
        Ok(self.game)
    }
}

/// Only the terminator goes; any other whitespace is part of the input.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
