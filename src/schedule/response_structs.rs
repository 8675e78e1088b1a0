//! Response structures for the course schedule endpoint.
//!
//! Every field is optional: the widget API is not ours and a missing field
//! must not fail the whole response.

use serde::Deserialize;
use std::fmt;

/// Response from `/api/widget/club/{clubId}/courseSchedule`.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct CourseSchedule {
    /// Slots of the requested day, absent when the course has no schedule.
    #[serde(default)]
    pub slots: Option<Vec<SlotResponse>>,
}

/// One tee time of the schedule.
#[derive(Deserialize, Debug, Clone)]
pub struct SlotResponse {
    /// ISO-8601 start time of the slot.
    #[serde(default)]
    pub time: Option<String>,
    /// Remaining capacity. The API spells the key `availablity`.
    #[serde(default, rename = "availablity")]
    pub availability: Option<AvailabilityResponse>,
}

/// Capacity block of a slot.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    /// Number of players that can still book the slot.
    #[serde(default)]
    pub available_slots: Option<i32>,
}

impl fmt::Display for SlotResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "time={:?}, available_slots={:?}",
            self.time,
            self.availability.as_ref().and_then(|a| a.available_slots)
        )
    }
}
