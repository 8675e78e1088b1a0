//! Internal data structures for representing the fetched schedule.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime};
use log::warn;

use crate::schedule::response_structs::{CourseSchedule, SlotResponse};

/// One bookable tee time with its remaining capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Start time of the slot, in local time
    pub time: NaiveDateTime,
    /// Number of players that can still book the slot
    pub available_slots: i32,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "time={}, available_slots={}",
            self.time, self.available_slots
        )
    }
}

/// Outcome of the latest fetch.
///
/// Replaced wholesale on every fetch, never merged with the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The schedule was fetched and parsed
    Schedule(Vec<Slot>),
    /// The fetch failed, with the reason shown to the user
    Error(String),
}

impl Response {
    /// Converts the raw API payload into a [`Response::Schedule`].
    ///
    /// A missing `slots` array gives an empty schedule. Slots with a missing or
    /// unreadable time or capacity are skipped.
    pub fn from_schedule(schedule: CourseSchedule) -> Self {
        let slots = schedule
            .slots
            .unwrap_or_default()
            .iter()
            .filter_map(convert_slot)
            .collect();

        Response::Schedule(slots)
    }

    /// Slots of the response, empty for an error.
    pub fn slots(&self) -> &[Slot] {
        match self {
            Response::Schedule(slots) => slots,
            Response::Error(_) => &[],
        }
    }
}

fn convert_slot(slot: &SlotResponse) -> Option<Slot> {
    let Some(time) = slot.time.as_deref().and_then(parse_slot_time) else {
        warn!("ignore slot with unreadable time: {}", slot);
        return None;
    };
    let Some(available_slots) = slot.availability.as_ref().and_then(|a| a.available_slots) else {
        warn!("ignore slot without availability: {}", slot);
        return None;
    };

    Some(Slot {
        time,
        available_slots,
    })
}

/// Parses an ISO-8601 slot time into local time.
///
/// Times carrying an offset are converted to the local timezone; times
/// without one are already local.
pub fn parse_slot_time(time: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(time) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }

    time.parse::<NaiveDateTime>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::response_structs::AvailabilityResponse;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 20)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn slot_response(time: Option<&str>, available_slots: Option<i32>) -> SlotResponse {
        SlotResponse {
            time: time.map(str::to_string),
            availability: Some(AvailabilityResponse { available_slots }),
        }
    }

    #[test]
    fn test_parse_slot_time_local() {
        assert_eq!(parse_slot_time("2026-10-20T09:00:00"), Some(at(9, 0)));
        assert_eq!(parse_slot_time("2026-10-20T09:10:00.000"), Some(at(9, 10)));
    }

    #[test]
    fn test_parse_slot_time_with_offset() {
        let expected = Utc
            .with_ymd_and_hms(2026, 10, 20, 7, 0, 0)
            .unwrap()
            .with_timezone(&Local)
            .naive_local();

        assert_eq!(parse_slot_time("2026-10-20T07:00:00Z"), Some(expected));
    }

    #[test]
    fn test_parse_slot_time_invalid() {
        assert_eq!(parse_slot_time("tomorrow morning"), None);
        assert_eq!(parse_slot_time(""), None);
    }

    #[test]
    fn test_from_schedule() {
        let schedule = CourseSchedule {
            slots: Some(vec![
                slot_response(Some("2026-10-20T09:00:00"), Some(2)),
                slot_response(Some("2026-10-20T09:10:00"), Some(0)),
            ]),
        };

        let response = Response::from_schedule(schedule);

        assert_eq!(
            response,
            Response::Schedule(vec![
                Slot {
                    time: at(9, 0),
                    available_slots: 2
                },
                Slot {
                    time: at(9, 10),
                    available_slots: 0
                },
            ])
        );
    }

    #[test]
    fn test_from_schedule_skips_broken_slots() {
        let schedule = CourseSchedule {
            slots: Some(vec![
                slot_response(None, Some(2)),
                slot_response(Some("not a time"), Some(2)),
                slot_response(Some("2026-10-20T09:00:00"), None),
                SlotResponse {
                    time: Some("2026-10-20T09:20:00".to_string()),
                    availability: None,
                },
                slot_response(Some("2026-10-20T09:30:00"), Some(1)),
            ]),
        };

        let response = Response::from_schedule(schedule);

        assert_eq!(response.slots().len(), 1);
        assert_eq!(response.slots()[0].time, at(9, 30));
    }

    #[test]
    fn test_from_schedule_missing_slots() {
        let response = Response::from_schedule(CourseSchedule { slots: None });
        assert_eq!(response, Response::Schedule(vec![]));
    }

    #[test]
    fn test_error_has_no_slots() {
        let response = Response::Error("connection refused".to_string());
        assert!(response.slots().is_empty());
    }

    #[test]
    fn test_slot_display() {
        let slot = Slot {
            time: at(9, 0),
            available_slots: 3,
        };

        let display = format!("{}", slot);
        assert!(display.contains("time=2026-10-20 09:00:00"));
        assert!(display.contains("available_slots=3"));
    }
}
