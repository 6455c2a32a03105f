mod commands;
mod context;

use crate::error::DoilyError;

pub use commands::Command;
pub use context::CommandContext;

/// Result type for command operations
pub type CommandResult = Result<(), DoilyError>;
