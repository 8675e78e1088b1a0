//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, which serves as the main entry point
//! for processing form commands. It coordinates command parsing and execution, routing
//! commands to their appropriate handlers.
//!
//! # Flow
//!
//! ```text
//! stdin line → parse() → Command → execute() → CommandResult
//! ```

use std::time::Duration;

use command_parser::Parser;

use crate::{
    commands::{
        CommandParseError, CommandResult,
        actions::{
            handle_check, handle_date, handle_from, handle_help, handle_mute, handle_players,
            handle_show, handle_stop, handle_to,
        },
        command::{Command, format_command_error},
    },
    poller::AvailabilityPoller,
    schedule::Requester,
    sound::Notifier,
};

/// Command orchestrator for parsing and executing form commands.
///
/// The Commander is responsible for:
/// - Parsing raw lines into structured commands
/// - Converting parse errors into user-friendly messages
/// - Routing commands to appropriate handlers
pub struct Commander {
    /// Command parser for processing user commands
    parser: Parser,
    /// Polling interval announced by `check`
    polling_interval: Duration,
}

impl Commander {
    /// Creates a new Commander instance with a configured command parser.
    ///
    /// # Examples
    ///
    /// ```
    /// let commander = Commander::new(Duration::from_secs(300));
    /// ```
    pub fn new(polling_interval: Duration) -> Self {
        let parser = Parser::new('!', '-');
        Commander {
            parser,
            polling_interval,
        }
    }

    /// Parses a line typed by the user into a structured command.
    ///
    /// # Returns
    ///
    /// * `Ok(Command)` - Successfully parsed and validated command
    /// * `Err(CommandParseError::Blank)` - Nothing was typed
    /// * `Err(CommandParseError::InvalidCommand)` - Command syntax is invalid
    ///
    /// # Examples
    ///
    /// ```
    /// let commander = Commander::new(Duration::from_secs(300));
    ///
    /// assert!(commander.parse("players 2").is_ok());
    /// assert!(commander.parse("book now").is_err());
    /// ```
    pub fn parse(&self, line: &str) -> Result<Command, CommandParseError> {
        Command::parse(&self.parser, line).map_err(|error| match format_command_error(error) {
            Some(message) => CommandParseError::InvalidCommand(message),
            None => CommandParseError::Blank,
        })
    }

    /// Executes a parsed command against the poller and returns the result.
    ///
    /// # Command Handlers
    ///
    /// - [`Command::Help`] → [`handle_help`]
    /// - [`Command::Players`] → [`handle_players`]
    /// - [`Command::Date`] → [`handle_date`]
    /// - [`Command::From`] → [`handle_from`]
    /// - [`Command::To`] → [`handle_to`]
    /// - [`Command::Check`] → [`handle_check`]
    /// - [`Command::Stop`] → [`handle_stop`]
    /// - [`Command::Mute`] → [`handle_mute`]
    /// - [`Command::Show`] → [`handle_show`]
    /// - [`Command::Quit`] → stops polling and asks the caller to exit
    pub async fn execute<R, N>(
        &self,
        command: &Command,
        poller: &mut AvailabilityPoller<R, N>,
    ) -> CommandResult
    where
        R: Requester + 'static,
        N: Notifier + 'static,
    {
        match command {
            Command::Help => handle_help(),
            Command::Players(players) => handle_players(poller, *players).await,
            Command::Date(date) => handle_date(poller, *date).await,
            Command::From(time) => handle_from(poller, *time).await,
            Command::To(time) => handle_to(poller, *time).await,
            Command::Check => handle_check(poller, self.polling_interval).await,
            Command::Stop => handle_stop(poller),
            Command::Mute => handle_mute(poller).await,
            Command::Show => handle_show(poller).await,
            Command::Quit => {
                poller.stop_polling();
                CommandResult {
                    response: "Bye.".to_owned(),
                    quit: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poller::QueryParameters;
    use crate::schedule::{CourseSchedule, MockRequester};
    use crate::sound::MockNotifier;
    use chrono::{NaiveDate, NaiveTime};

    const POLLING_INTERVAL: Duration = Duration::from_secs(300);

    fn create_test_poller(requester: MockRequester) -> AvailabilityPoller<MockRequester, MockNotifier> {
        let query = QueryParameters::new(
            NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            1,
            NaiveTime::from_hms_opt(5, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        )
        .unwrap();
        AvailabilityPoller::new(requester, MockNotifier::new(), query, false, POLLING_INTERVAL)
    }

    #[test]
    fn test_parse_valid_commands() {
        let commander = Commander::new(POLLING_INTERVAL);

        assert!(matches!(commander.parse("help"), Ok(Command::Help)));
        assert!(matches!(commander.parse("players 2"), Ok(Command::Players(2))));
        assert!(matches!(commander.parse("check"), Ok(Command::Check)));
    }

    #[test]
    fn test_parse_invalid_command_returns_error() {
        let commander = Commander::new(POLLING_INTERVAL);
        let result = commander.parse("book 09:00");
        match result.err().unwrap() {
            CommandParseError::InvalidCommand(msg) => {
                assert!(msg.contains("Unknown command"));
            }
            _ => panic!("Expected InvalidCommand error"),
        }
    }

    #[test]
    fn test_parse_invalid_players_returns_usage() {
        let commander = Commander::new(POLLING_INTERVAL);
        let result = commander.parse("players");
        match result.err().unwrap() {
            CommandParseError::InvalidCommand(msg) => {
                assert!(msg.contains("`players <1-4>`"));
            }
            _ => panic!("Expected InvalidCommand error"),
        }
    }

    #[test]
    fn test_parse_blank_line() {
        let commander = Commander::new(POLLING_INTERVAL);
        assert!(matches!(
            commander.parse("  ").err().unwrap(),
            CommandParseError::Blank
        ));
    }

    #[tokio::test]
    async fn test_execute_form_commands() {
        let commander = Commander::new(POLLING_INTERVAL);
        let mut poller = create_test_poller(MockRequester::new());

        for line in ["players 2", "date 2026-10-21", "from 08:00", "to 12:00"] {
            let command = commander.parse(line).unwrap();
            let result = commander.execute(&command, &mut poller).await;
            assert!(!result.quit);
        }

        let query = poller.snapshot().await.query;
        assert_eq!(query.players, 2);
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2026, 10, 21).unwrap());
        assert_eq!(query.from_time.format("%Y-%m-%d %H:%M").to_string(), "2026-10-21 08:00");
        assert_eq!(query.to_time.format("%Y-%m-%d %H:%M").to_string(), "2026-10-21 12:00");
    }

    #[tokio::test]
    async fn test_execute_check_twice_then_quit() {
        let mut requester = MockRequester::new();
        requester
            .expect_get_course_schedule()
            .times(2)
            .returning(|_| Ok(CourseSchedule { slots: None }));
        let commander = Commander::new(POLLING_INTERVAL);
        let mut poller = create_test_poller(requester);

        commander.execute(&Command::Check, &mut poller).await;
        commander.execute(&Command::Check, &mut poller).await;
        assert!(poller.is_polling());

        let result = commander.execute(&Command::Quit, &mut poller).await;
        assert!(result.quit);
        assert!(!poller.is_polling());
    }
}
