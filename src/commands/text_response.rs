//! Text response formatters for form commands.
//!
//! This module formats everything the tool prints on stdout: help, form
//! summary, validation errors and the table of matching tee times.

use crate::{
    poller::{FormError, MAX_PLAYERS, MIN_PLAYERS, PollerSnapshot, compute_matches},
    schedule::Response,
};

/// Formats the help message showing available commands.
///
/// # Examples
///
/// ```
/// let help = format_help();
/// assert!(help.contains("Commands:"));
/// ```
pub fn format_help() -> String {
    let body = "Commands:\n\
        - `players <1-4>`: number of players\n\
        - `date <yyyy-MM-dd>`: day to look at\n\
        - `from <HH:MM>`: earliest tee time, 10 minutes steps\n\
        - `to <HH:MM>`: latest tee time, 10 minutes steps\n\
        - `check`: check availability now, then every polling interval\n\
        - `stop`: stop polling\n\
        - `mute`: toggle the notification sound\n\
        - `show`: show the form and the matching tee times\n\
        - `help`: show this help message\n\
        - `quit`: exit\n\n\
        A sound plays each time a check finds tee times matching the form.";

    body.to_owned()
}

pub fn format_unknown_command() -> String {
    "Unknown command. Type `help` for more information.".to_owned()
}

pub fn format_invalid_players() -> String {
    format!(
        "Invalid command. Usage: `players <{}-{}>`",
        MIN_PLAYERS, MAX_PLAYERS
    )
}

pub fn format_invalid_date() -> String {
    "Invalid command. Usage: `date <yyyy-MM-dd>`, e.g. `date 2026-10-20`".to_owned()
}

/// Formats the usage of the `from` or `to` command.
pub fn format_invalid_time(bound: &str) -> String {
    format!(
        "Invalid command. Usage: `{} <HH:MM>`, e.g. `{} 08:30`",
        bound, bound
    )
}

pub fn format_form_error(error: &FormError) -> String {
    format!("Rejected: {}.", error)
}

/// Formats the form values on one line.
///
/// # Examples
///
/// ```
/// let line = format_form(&snapshot);
/// assert!(line.starts_with("Players: "));
/// ```
pub fn format_form(snapshot: &PollerSnapshot) -> String {
    let query = &snapshot.query;
    format!(
        "Players: {} | Date: {} | From: {} | To: {} | Sound: {} | Polling: {}",
        query.players,
        query.date.format("%Y-%m-%d"),
        query.from_time.format("%H:%M"),
        query.to_time.format("%H:%M"),
        if snapshot.muted { "muted" } else { "on" },
        if snapshot.polling { "yes" } else { "no" },
    )
}

/// Formats the outcome of the latest fetch.
///
/// The matches are recomputed from the snapshot on every call: a table with
/// one row per matching tee time (time and available slots), or the error
/// of the failed fetch. Nothing to format before the first fetch.
pub fn format_response(snapshot: &PollerSnapshot) -> Option<String> {
    let response = match &snapshot.response {
        None => return None,
        Some(Response::Error(message)) => return Some(format!("No tee times: {}", message)),
        Some(response) => response,
    };

    let query = &snapshot.query;
    let rows = compute_matches(response, query.players, query.from_time, query.to_time)
        .map(|slot| {
            format!(
                "  {}  {}",
                slot.time.format("%H:%M:%S"),
                slot.available_slots
            )
        })
        .collect::<Vec<String>>();

    if rows.is_empty() {
        return Some(format!(
            "No matching tee times on {}.",
            query.date.format("%Y-%m-%d")
        ));
    }

    Some(format!(
        "Matching tee times on {}:\n  Time      Available\n{}",
        query.date.format("%Y-%m-%d"),
        rows.join("\n")
    ))
}

pub fn format_polling_started(interval_secs: u64) -> String {
    let period = match interval_secs {
        60 => "minute".to_owned(),
        secs if secs % 60 == 0 => format!("{} minutes", secs / 60),
        1 => "second".to_owned(),
        secs => format!("{} seconds", secs),
    };

    format!("Checking availability, then every {}.", period)
}

pub fn format_polling_stopped(was_polling: bool) -> String {
    match was_polling {
        true => "Polling stopped.".to_owned(),
        false => "Not polling.".to_owned(),
    }
}

pub fn format_mute(muted: bool) -> String {
    match muted {
        true => "Sound muted.".to_owned(),
        false => "Sound on.".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poller::QueryParameters;
    use crate::schedule::Slot;
    use chrono::{NaiveDate, NaiveTime};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    }

    fn time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn snapshot(response: Option<Response>) -> PollerSnapshot {
        PollerSnapshot {
            query: QueryParameters::new(day(), 2, time(8, 0), time(12, 0)).unwrap(),
            muted: false,
            response,
            polling: true,
        }
    }

    fn slot(hour: u32, min: u32, available_slots: i32) -> Slot {
        Slot {
            time: day().and_time(time(hour, min)),
            available_slots,
        }
    }

    #[test]
    fn test_format_help() {
        let help = format_help();
        assert!(help.contains("Commands:"));
        assert!(help.contains("`check`"));
        assert!(help.contains("`mute`"));
    }

    #[test]
    fn test_format_form() {
        let mut snapshot = snapshot(None);
        snapshot.muted = true;

        assert_eq!(
            format_form(&snapshot),
            "Players: 2 | Date: 2026-10-20 | From: 08:00 | To: 12:00 | Sound: muted | Polling: yes"
        );
    }

    #[test]
    fn test_format_response_matches_table() {
        let response = Response::Schedule(vec![slot(7, 50, 3), slot(9, 0, 2), slot(10, 0, 1)]);

        let output = format_response(&snapshot(Some(response))).unwrap();

        assert!(output.starts_with("Matching tee times on 2026-10-20:"));
        assert!(output.contains("  09:00:00  2"));
        assert!(!output.contains("07:50:00"));
        assert!(!output.contains("10:00:00"));
    }

    #[test]
    fn test_format_response_no_matches() {
        let response = Response::Schedule(vec![slot(14, 0, 4)]);

        assert_eq!(
            format_response(&snapshot(Some(response))).unwrap(),
            "No matching tee times on 2026-10-20."
        );
    }

    #[test]
    fn test_format_response_error() {
        let response = Response::Error("Failed to fetch data: timeout".to_string());

        let output = format_response(&snapshot(Some(response))).unwrap();

        assert_eq!(output, "No tee times: Failed to fetch data: timeout");
        assert!(!output.contains("Time"));
    }

    #[test]
    fn test_format_response_not_checked() {
        assert!(format_response(&snapshot(None)).is_none());
    }

    #[test]
    fn test_format_polling_started() {
        assert_eq!(
            format_polling_started(300),
            "Checking availability, then every 5 minutes."
        );
        assert_eq!(
            format_polling_started(90),
            "Checking availability, then every 90 seconds."
        );
        assert_eq!(
            format_polling_started(60),
            "Checking availability, then every minute."
        );
    }

    #[test]
    fn test_format_form_error() {
        let error = FormError::PlayersOutOfRange(6);
        assert_eq!(
            format_form_error(&error),
            "Rejected: number of players must be between 1 and 4, got 6."
        );
    }

    #[test]
    fn test_format_invalid_time() {
        assert_eq!(
            format_invalid_time("from"),
            "Invalid command. Usage: `from <HH:MM>`, e.g. `from 08:30`"
        );
    }
}
