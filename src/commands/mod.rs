//! Form command parsing and response formatting.
//!
//! The form is driven by lines typed on stdin. This module turns each line
//! into a form operation on the poller and formats the text printed back.
//!
//! # Architecture
//!
//! ```text
//! stdin line
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: parse() + execute()
//! └─────────────┘
//!      │
//!      ├── parse() ──────────▶ command::Command
//!      │
//!      └── execute() ────────▶ Action Handlers ──▶ CommandResult
//!                               - handle_players / date / from / to
//!                               - handle_check / stop
//!                               - handle_mute / show / help
//! ```
//!
//! ## Available Commands
//!
//! | Command | Arguments | Description |
//! |---------|-----------|-------------|
//! | `players` | `<1-4>` | Number of players |
//! | `date` | `<yyyy-MM-dd>` | Day to look at |
//! | `from` | `<HH:MM>` | Earliest tee time |
//! | `to` | `<HH:MM>` | Latest tee time |
//! | `check` | None | Check now, then every polling interval |
//! | `stop` | None | Stop polling |
//! | `mute` | None | Toggle the notification sound |
//! | `show` | None | Show the form and the matching tee times |
//! | `help` | None | Display help information |
//! | `quit` | None | Exit |
//!
//! # Module Organization
//!
//! - [`commander`] - Parses and executes commands
//! - [`command`] - Command enum definitions and parsing logic
//! - [`actions`] - Individual command handler implementations
//! - [`text_response`] - Response formatting utilities

mod actions;
mod command;
mod commander;
mod text_response;

pub use crate::commands::commander::Commander;
pub use crate::commands::text_response::{format_form, format_help, format_response};

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Text to print
    pub response: String,
    /// Whether the user asked to exit
    pub quit: bool,
}

/// Errors that can occur during command parsing.
///
/// # Variants
///
/// * `Blank` - Nothing was typed. Should be ignored silently.
///
/// * `InvalidCommand` - Command syntax or arguments are invalid.
///   Contains a user-friendly error message to display.
#[derive(Debug)]
pub enum CommandParseError {
    /// Blank line (silent error)
    Blank,
    /// Invalid command syntax with error message
    InvalidCommand(String),
}
