//! Interactive form loop.
//!
//! This module provides the [`App`] implementation that wires the availability
//! poller to the terminal: lines typed on stdin are parsed into form commands,
//! and every response stored by the poller is printed as it arrives.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    lines     ┌─────────────┐
//! │    stdin     │ ───────────▶ │  Commander  │
//! └──────────────┘              └─────────────┘
//!                                      │
//!                                      ▼
//! ┌──────────────┐   revision   ┌─────────────────────┐
//! │    stdout    │ ◀─────────── │ AvailabilityPoller  │ ──▶ widget API
//! └──────────────┘              └─────────────────────┘
//! ```
//!
//! Both sources are awaited in a single `tokio::select!` loop, so a poll that
//! completes while the user is typing is printed right away.

use std::time::Duration;

use anyhow::anyhow;
use chrono::{Local, NaiveDate};
use log::{debug, error, info};
use tokio::io::{AsyncBufRead, Lines};

use crate::{
    Args,
    commands::{CommandParseError, Commander, format_form, format_help, format_response},
    config::{Config, Form},
    poller::{AvailabilityPoller, QueryParameters, parse_date, parse_time},
    schedule::{Requester, ScheduleRequester},
    sound::{Notifier, Sound},
};

/// Terminal front end of the availability poller.
pub struct App<R: Requester + 'static, N: Notifier + 'static> {
    /// Poller owning the form state and the poll timer
    poller: AvailabilityPoller<R, N>,

    /// Parses and executes the lines typed by the user
    commander: Commander,
}

impl App<ScheduleRequester, Sound> {
    /// Creates the application from the loaded configuration and the
    /// command-line arguments.
    ///
    /// Command-line form values take precedence over the `form` section of
    /// the configuration. The date defaults to today.
    ///
    /// # Errors
    ///
    /// Returns an error if a form value given on the command line or in the
    /// configuration is malformed or rejected by the form validation.
    pub fn new(config: &Config, args: &Args) -> Result<Self, anyhow::Error> {
        let query = build_query(&config.form, args, Local::now().date_naive())?;
        let polling_interval = Duration::from_secs(config.api.polling_interval);

        let requester =
            ScheduleRequester::new(&config.api.url, &config.api.club_id, &config.api.course_id);
        let sound = Sound::from_config(&config.sound);
        let muted = config.sound.muted || args.muted;

        let poller = AvailabilityPoller::new(requester, sound, query, muted, polling_interval);

        Ok(App::with_poller(poller, polling_interval))
    }
}

impl<R: Requester + 'static, N: Notifier + 'static> App<R, N> {
    fn with_poller(poller: AvailabilityPoller<R, N>, polling_interval: Duration) -> Self {
        App {
            poller,
            commander: Commander::new(polling_interval),
        }
    }

    /// Runs the form loop until `quit` or the end of the input.
    ///
    /// Prints the help and the initial form first. When `check` is true the
    /// poller starts right away, as if the user typed `check`. Polling is
    /// stopped before returning.
    pub async fn start<L>(&mut self, mut lines: Lines<L>, check: bool)
    where
        L: AsyncBufRead + Unpin,
    {
        let mut updates = self.poller.subscribe();

        println!("{}\n", format_help());
        println!("{}", format_form(&self.poller.snapshot().await));

        if check {
            self.poller.start_polling().await;
        }

        loop {
            tokio::select! {
                line = lines.next_line() => match line {
                    Ok(Some(line)) => {
                        if self.handle_line(&line).await {
                            break;
                        }
                    }
                    Ok(None) => {
                        info!("input closed, exiting");
                        break;
                    }
                    Err(e) => {
                        error!("Failed to read input: {}", e);
                        break;
                    }
                },
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    if let Some(response) = format_response(&self.poller.snapshot().await) {
                        println!("{}", response);
                    }
                }
            }
        }

        self.poller.stop_polling();
    }

    /// Handles one input line and returns whether the user asked to exit.
    async fn handle_line(&mut self, line: &str) -> bool {
        let command = match self.commander.parse(line) {
            Ok(command) => command,
            Err(CommandParseError::Blank) => return false,
            Err(CommandParseError::InvalidCommand(message)) => {
                println!("{}", message);
                return false;
            }
        };

        debug!("executing {:?}", command);
        let result = self.commander.execute(&command, &mut self.poller).await;
        println!("{}", result.response);

        result.quit
    }
}

/// Builds the initial form from the configuration and the arguments.
fn build_query(
    form: &Form,
    args: &Args,
    today: NaiveDate,
) -> Result<QueryParameters, anyhow::Error> {
    let date = match &args.date {
        Some(date) => parse_date(date).ok_or_else(|| anyhow!("invalid date {}", date))?,
        None => today,
    };

    let from = args.from.as_deref().unwrap_or(&form.from);
    let to = args.to.as_deref().unwrap_or(&form.to);
    let from_time = parse_time(from).ok_or_else(|| anyhow!("invalid from time {}", from))?;
    let to_time = parse_time(to).ok_or_else(|| anyhow!("invalid to time {}", to))?;

    let players = args.players.unwrap_or(form.players);

    Ok(QueryParameters::new(date, players, from_time, to_time)?)
}
