//! Course schedule integration and API client.
//!
//! This module talks to the golf club widget API that publishes the tee time
//! schedule of a course for a given day.
//!
//! # Modules
//!
//! - `requester` - HTTP client for the `courseSchedule` endpoint
//! - `response_structs` - Raw data structures for the API responses
//! - `structs` - Internal representation of slots and fetch results
//!
//! # Examples
//!
//! ```no_run
//! # async fn example() {
//! let requester = ScheduleRequester::new(
//!     "https://prd-sgf-widget-api.azurewebsites.net",
//!     "71d046c5-1016-4b88-9347-eade7d50d2b7",
//!     "0f1334d7-88dc-444d-bd14-1a5a19ea5aa6",
//! );
//! let today = chrono::Local::now().date_naive();
//! let schedule = requester.get_course_schedule(today).await;
//! # }
//! ```

mod requester;
mod response_structs;
mod structs;

#[cfg(test)]
pub use crate::schedule::requester::MockRequester;
pub use crate::schedule::requester::{Requester, ScheduleRequester};
pub use crate::schedule::response_structs::CourseSchedule;
#[cfg(test)]
pub use crate::schedule::response_structs::{AvailabilityResponse, SlotResponse};
pub use crate::schedule::structs::{Response, Slot};
