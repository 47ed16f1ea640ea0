pub mod core {
	pub mod engine;
	pub mod error;
	pub mod game;
	pub mod terminal;
}

pub mod cli;
pub mod config;
pub mod games;
pub mod telemetry;

// Re-export for convenience
pub use crate::core::game::Game;
pub use crate::core::terminal::TerminalContext;
