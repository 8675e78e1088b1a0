//! Form state driving the availability queries.
//!
//! [`QueryParameters`] holds what the user typed in the form: the day to
//! look at, the size of the party and the time window. The window bounds are
//! full date-times always anchored on the selected day.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use log::debug;

/// Smallest party the course accepts.
pub const MIN_PLAYERS: u8 = 1;
/// Largest party the course accepts.
pub const MAX_PLAYERS: u8 = 4;
/// Granularity of the time pickers, in minutes.
pub const TIME_STEP_MINUTES: u32 = 10;

/// Reasons for rejecting a form value.
///
/// A rejected value leaves the form unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The number of players is outside `1..=4`
    PlayersOutOfRange(u8),
    /// The time is not on the 10 minutes grid
    TimeOffGrid(NaiveTime),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FormError::PlayersOutOfRange(players) => write!(
                f,
                "number of players must be between {} and {}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, players
            ),
            FormError::TimeOffGrid(time) => write!(
                f,
                "time must be a multiple of {} minutes, got {}",
                TIME_STEP_MINUTES,
                time.format("%H:%M")
            ),
        }
    }
}

impl std::error::Error for FormError {}

/// Query parameters of the availability form.
///
/// # Invariant
///
/// `from_time` and `to_time` are always on `date`: changing the date moves
/// both bounds to the new day, keeping their hour and minute.
///
/// # Examples
///
/// ```
/// let mut query = QueryParameters::new(d1, 2, from, to)?;
/// query.set_date(d2);
/// assert_eq!(query.from_time.date(), d2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameters {
    /// Day to request the schedule for
    pub date: NaiveDate,
    /// Size of the party, between [`MIN_PLAYERS`] and [`MAX_PLAYERS`]
    pub players: u8,
    /// Earliest acceptable tee time, inclusive
    pub from_time: NaiveDateTime,
    /// Latest acceptable tee time, inclusive
    pub to_time: NaiveDateTime,
}

impl QueryParameters {
    /// Creates validated query parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] if `players` is out of range or one of the
    /// times is not on the 10 minutes grid.
    pub fn new(
        date: NaiveDate,
        players: u8,
        from: NaiveTime,
        to: NaiveTime,
    ) -> Result<Self, FormError> {
        validate_players(players)?;
        validate_time(from)?;
        validate_time(to)?;

        Ok(QueryParameters {
            date,
            players,
            from_time: anchor(date, from),
            to_time: anchor(date, to),
        })
    }

    /// Selects another day, re-anchoring the time window onto it.
    ///
    /// Only the hour and minute of the bounds survive; seconds are zeroed.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.from_time = anchor(date, self.from_time.time());
        self.to_time = anchor(date, self.to_time.time());
        debug!(
            "date set to {}, window {} - {}",
            self.date, self.from_time, self.to_time
        );
    }

    pub fn set_players(&mut self, players: u8) -> Result<(), FormError> {
        validate_players(players)?;
        self.players = players;
        Ok(())
    }

    pub fn set_from_time(&mut self, time: NaiveTime) -> Result<(), FormError> {
        validate_time(time)?;
        self.from_time = anchor(self.date, time);
        Ok(())
    }

    pub fn set_to_time(&mut self, time: NaiveTime) -> Result<(), FormError> {
        validate_time(time)?;
        self.to_time = anchor(self.date, time);
        Ok(())
    }
}

fn validate_players(players: u8) -> Result<(), FormError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        Ok(())
    } else {
        Err(FormError::PlayersOutOfRange(players))
    }
}

fn validate_time(time: NaiveTime) -> Result<(), FormError> {
    if time.minute() % TIME_STEP_MINUTES == 0 && time.second() == 0 {
        Ok(())
    } else {
        Err(FormError::TimeOffGrid(time))
    }
}

/// Puts the hour and minute of `time` on `date`.
fn anchor(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time);
    date.and_time(time)
}

/// Parses a `yyyy-MM-dd` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parses a `HH:MM` time of day.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}
