//! HTTP client for the course schedule API.
//!
//! This module provides the [`ScheduleRequester`] struct for requesting the
//! tee time schedule of one course on one day.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info, warn};
use mockall::automock;
use reqwest::{Client, Error, header::CONTENT_TYPE};

use crate::schedule::response_structs::CourseSchedule;

/// Longest wait for a schedule response before the fetch fails.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for requesting the schedule of a course.
///
/// # Examples
///
/// ```no_run
/// let requester = ScheduleRequester::new("https://widget.example.com", "club_id", "course_id");
/// let schedule = requester.get_course_schedule(date).await.unwrap();
/// println!("Schedule: {:?}", schedule);
/// ```
pub struct ScheduleRequester {
    /// Widget API base url, without trailing slash
    url: String,
    /// Club owning the course
    club_id: String,
    /// Course to request the schedule for
    course_id: String,
    /// HTTP client
    client: Client,
}

/// Trait for requesting the course schedule.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
#[async_trait]
pub trait Requester: Send + Sync {
    /// Fetches the schedule of the configured course for `date`.
    async fn get_course_schedule(&self, date: NaiveDate) -> Result<CourseSchedule, Error>;
}

impl ScheduleRequester {
    /// Create a new [ScheduleRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the widget API.
    /// * `club_id` - The club identifier, part of the endpoint path.
    /// * `course_id` - The course identifier, sent as a query parameter.
    pub fn new(url: &str, club_id: &str, course_id: &str) -> Self {
        Self::with_timeout(url, club_id, course_id, REQUEST_TIMEOUT)
    }

    fn with_timeout(url: &str, club_id: &str, course_id: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("cannot build http client with timeout, using defaults: {}", e);
                Client::new()
            });
        ScheduleRequester {
            url: url.to_string(),
            club_id: club_id.to_string(),
            course_id: course_id.to_string(),
            client,
        }
    }

    fn schedule_url(&self) -> String {
        format!(
            "{}/api/widget/club/{}/courseSchedule",
            &self.url, &self.club_id
        )
    }
}

/// Formats a date the way the `date` query parameter expects it (`yyyy-MM-dd`).
pub fn format_query_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[async_trait]
impl Requester for ScheduleRequester {
    /// Request `/api/widget/club/{clubId}/courseSchedule?courseId={courseId}&date={date}`.
    ///
    /// This api call returns a json object with the slots of the day:
    /// ```
    /// {
    ///   slots: [
    ///     { time: "2026-10-20T09:00:00", availablity: { availableSlots: 2 } },
    ///     { time: "2026-10-20T09:10:00", availablity: { availableSlots: 0 } }
    ///   ]
    /// }
    /// ```
    /// This method transforms this json into a [`CourseSchedule`]. Non-2xx
    /// statuses are turned into errors.
    async fn get_course_schedule(&self, date: NaiveDate) -> Result<CourseSchedule, Error> {
        let url = self.schedule_url();
        let date = format_query_date(date);
        info!("request course schedule for {}", &date);
        debug!("request {}?courseId={}&date={}", &url, &self.course_id, &date);

        let schedule: CourseSchedule = self
            .client
            .get(&url)
            .query(&[("courseId", self.course_id.as_str()), ("date", date.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("response from {}?date={} -> {:?}", &url, &date, &schedule);

        Ok(schedule)
    }
}
