//! CLI command handlers

pub mod commands;
pub mod prompt;

pub use commands::{export, Preview, SUCCESS_MESSAGE};
pub use prompt::Prompter;
