//! Command parsing.
//!
//! This module converts a line typed by the user into a structured
//! [`Command`].

use chrono::{NaiveDate, NaiveTime};
use command_parser::{Command as ParserCommand, Parser};
use log::debug;

use crate::{
    commands::text_response::{
        format_invalid_date, format_invalid_players, format_invalid_time, format_unknown_command,
    },
    poller::{parse_date, parse_time},
};

/// Represents a parsed form command.
#[derive(Debug, Hash, PartialEq, Eq)]
pub enum Command {
    /// Display help information
    Help,
    /// Set the number of players
    Players(u8),
    /// Select the day
    Date(NaiveDate),
    /// Set the start of the time window
    From(NaiveTime),
    /// Set the end of the time window
    To(NaiveTime),
    /// Submit the form: check now and keep polling
    Check,
    /// Stop polling
    Stop,
    /// Toggle the notification sound
    Mute,
    /// Show the form and the matching tee times
    Show,
    /// Exit
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandParsingError {
    /// The line is blank
    Empty,
    /// The line could not be parsed as a command
    UnableToParse,
    /// The command is not recognized
    Unknown,
    /// The players command has a missing or non numeric argument
    InvalidPlayers,
    /// The date command has a missing or malformed date
    InvalidDate,
    /// The from command has a missing or malformed time
    InvalidFrom,
    /// The to command has a missing or malformed time
    InvalidTo,
}

impl Command {
    /// Parses a line into a Command.
    ///
    /// # Arguments
    ///
    /// * `parser` - The command parser instance
    /// * `line` - The text typed by the user, e.g. `players 2`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The line is blank - [`CommandParsingError::Empty`]
    /// - The line is not a command - [`CommandParsingError::UnableToParse`]
    /// - The command is not recognized - [`CommandParsingError::Unknown`]
    /// - An argument is missing or malformed - one of the `Invalid*` variants
    ///
    /// # Examples
    ///
    /// ```
    /// let parser = Parser::new('!', '-');
    /// let result = Command::parse(&parser, "players 2");
    /// assert_eq!(result, Ok(Command::Players(2)));
    /// ```
    pub fn parse(parser: &Parser, line: &str) -> Result<Self, CommandParsingError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandParsingError::Empty);
        }

        // The form has no command prefix, the parser requires one. For an
        // unknown reason the parser ignores the last word, so we add a dummy word at the end
        let body = format!("!{} dummy", line);

        let command = match parser.parse(&body) {
            Ok(cmd) => cmd,
            Err(_) => return Err(CommandParsingError::UnableToParse),
        };

        debug!("Parsing command: {:?}", command);

        match command.name.to_lowercase().as_str() {
            "help" | "?" => Ok(Command::Help),
            "players" => Ok(Command::Players(Self::parse_players(&command)?)),
            "date" => Ok(Command::Date(Self::parse_date(&command)?)),
            "from" => Ok(Command::From(
                Self::parse_time(&command).ok_or(CommandParsingError::InvalidFrom)?,
            )),
            "to" => Ok(Command::To(
                Self::parse_time(&command).ok_or(CommandParsingError::InvalidTo)?,
            )),
            "check" => Ok(Command::Check),
            "stop" => Ok(Command::Stop),
            "mute" => Ok(Command::Mute),
            "show" => Ok(Command::Show),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandParsingError::Unknown),
        }
    }

    fn parse_players(command: &ParserCommand) -> Result<u8, CommandParsingError> {
        // Range is checked by the form, here only the number format
        command
            .arguments
            .first()
            .and_then(|players| players.parse::<u8>().ok())
            .ok_or(CommandParsingError::InvalidPlayers)
    }

    fn parse_date(command: &ParserCommand) -> Result<NaiveDate, CommandParsingError> {
        command
            .arguments
            .first()
            .and_then(|date| parse_date(date))
            .ok_or(CommandParsingError::InvalidDate)
    }

    fn parse_time(command: &ParserCommand) -> Option<NaiveTime> {
        command.arguments.first().and_then(|time| parse_time(time))
    }
}

/// Formats a command error into a user-friendly message.
///
/// Blank lines produce no message.
///
/// # Examples
///
/// ```
/// let message = format_command_error(CommandParsingError::Unknown);
/// assert!(message.is_some());
/// ```
pub fn format_command_error(error: CommandParsingError) -> Option<String> {
    match error {
        CommandParsingError::Empty => None,
        CommandParsingError::UnableToParse | CommandParsingError::Unknown => {
            Some(format_unknown_command())
        }
        CommandParsingError::InvalidPlayers => Some(format_invalid_players()),
        CommandParsingError::InvalidDate => Some(format_invalid_date()),
        CommandParsingError::InvalidFrom => Some(format_invalid_time("from")),
        CommandParsingError::InvalidTo => Some(format_invalid_time("to")),
    }
}
