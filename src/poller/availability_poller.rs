//! Availability poller coordinating the form, the fetches and the sound.
//!
//! This module provides the [`AvailabilityPoller`] which owns the form state,
//! fetches the course schedule on demand and on a timer, and rings when the
//! latest schedule holds matching tee times.

use std::{sync::Arc, time::Duration};

use chrono::{NaiveDate, NaiveTime};
use log::{debug, error, info};
use tokio::sync::{Mutex, watch};

use crate::{
    poller::{
        matches::compute_matches,
        poll_handle::PollHandle,
        query::{FormError, QueryParameters},
    },
    schedule::{Requester, Response},
    sound::Notifier,
};

/// Copy of the poller state, taken for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerSnapshot {
    /// Current form values
    pub query: QueryParameters,
    /// Whether the notification sound is muted
    pub muted: bool,
    /// Latest fetch outcome, `None` before the first fetch
    pub response: Option<Response>,
    /// Whether a poll timer is running
    pub polling: bool,
}

struct PollerState {
    query: QueryParameters,
    muted: bool,
    response: Option<Response>,
    /// Id of the most recently issued fetch
    latest_request_id: u64,
}

/// State shared between the poller and its timer task.
struct Shared<R: Requester, N: Notifier> {
    requester: R,
    sound: N,
    state: Mutex<PollerState>,
    /// Bumped on every stored response
    revision: watch::Sender<u64>,
}

impl<R: Requester, N: Notifier> Shared<R, N> {
    async fn fetch_availability(&self) {
        let (request_id, date) = {
            let mut state = self.state.lock().await;
            state.latest_request_id += 1;
            (state.latest_request_id, state.query.date)
        };

        debug!("fetch #{} for {}", request_id, date);

        let response = match self.requester.get_course_schedule(date).await {
            Ok(schedule) => Response::from_schedule(schedule),
            Err(e) => {
                error!("error while fetching course schedule: {}", e);
                Response::Error(format!("Failed to fetch data: {}", e))
            }
        };

        let should_notify = {
            let mut state = self.state.lock().await;

            // A newer fetch was issued while this one was in flight
            if request_id != state.latest_request_id {
                debug!(
                    "discard response of fetch #{}, latest is #{}",
                    request_id, state.latest_request_id
                );
                return;
            }

            let query = &state.query;
            let match_count = compute_matches(
                &response,
                query.players,
                query.from_time,
                query.to_time,
            )
            .count();
            info!("fetch #{} stored, {} matching slots", request_id, match_count);

            state.response = Some(response);
            match_count > 0 && !state.muted
        };

        self.revision.send_modify(|revision| *revision += 1);

        if should_notify {
            self.sound.notify();
        }
    }
}

/// Polls the course schedule and notifies on matching tee times.
///
/// The poller owns:
/// - the form state ([`QueryParameters`] and the mute flag)
/// - the latest [`Response`], replaced wholesale by every fetch
/// - the notification sound
/// - at most one [`PollHandle`] re-running the fetch periodically
///
/// Dropping the poller cancels its timer.
///
/// # Examples
///
/// ```no_run
/// let mut poller = AvailabilityPoller::new(requester, Sound::Bell, query, false, Duration::from_secs(300));
/// let mut updates = poller.subscribe();
///
/// poller.start_polling().await;
/// updates.changed().await?;
/// println!("{:?}", poller.snapshot().await.response);
/// ```
pub struct AvailabilityPoller<R: Requester + 'static, N: Notifier + 'static> {
    shared: Arc<Shared<R, N>>,
    polling_interval: Duration,
    poll_handle: Option<PollHandle>,
}

impl<R: Requester + 'static, N: Notifier + 'static> AvailabilityPoller<R, N> {
    /// Creates an idle poller.
    ///
    /// # Arguments
    ///
    /// * `requester` - Client for the course schedule API
    /// * `sound` - Cue played on responses with matches
    /// * `query` - Initial form values
    /// * `muted` - Initial mute flag
    /// * `polling_interval` - Period of the poll timer, must not be zero
    pub fn new(
        requester: R,
        sound: N,
        query: QueryParameters,
        muted: bool,
        polling_interval: Duration,
    ) -> Self {
        let (revision, _) = watch::channel(0);
        let state = PollerState {
            query,
            muted,
            response: None,
            latest_request_id: 0,
        };

        AvailabilityPoller {
            shared: Arc::new(Shared {
                requester,
                sound,
                state: Mutex::new(state),
                revision,
            }),
            polling_interval,
            poll_handle: None,
        }
    }

    /// Returns a receiver notified each time a response is stored.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> PollerSnapshot {
        let state = self.shared.state.lock().await;
        PollerSnapshot {
            query: state.query.clone(),
            muted: state.muted,
            response: state.response.clone(),
            polling: self.is_polling(),
        }
    }

    /// Selects another day. The time window keeps its hours and moves with
    /// the date. Nothing is fetched until the next poll.
    pub async fn set_date(&self, date: NaiveDate) {
        self.shared.state.lock().await.query.set_date(date);
    }

    pub async fn set_players(&self, players: u8) -> Result<(), FormError> {
        self.shared.state.lock().await.query.set_players(players)
    }

    pub async fn set_from_time(&self, time: NaiveTime) -> Result<(), FormError> {
        self.shared.state.lock().await.query.set_from_time(time)
    }

    pub async fn set_to_time(&self, time: NaiveTime) -> Result<(), FormError> {
        self.shared.state.lock().await.query.set_to_time(time)
    }

    /// Flips the mute flag and returns the new value.
    ///
    /// Applies to the next stored response; a sound already playing goes on.
    pub async fn toggle_mute(&self) -> bool {
        let mut state = self.shared.state.lock().await;
        state.muted = !state.muted;
        info!("sound {}", if state.muted { "muted" } else { "unmuted" });
        state.muted
    }

    /// Fetches the schedule of the selected day and stores the outcome.
    ///
    /// Failures are logged and stored as [`Response::Error`]; they are never
    /// returned. If a newer fetch was issued meanwhile, the outcome is dropped.
    pub async fn fetch_availability(&self) {
        self.shared.fetch_availability().await;
    }

    /// Cancels the running timer, fetches now, then every polling interval.
    pub async fn start_polling(&mut self) {
        if let Some(handle) = self.poll_handle.take() {
            info!("cancel previous polling");
            handle.cancel();
        }

        self.shared.fetch_availability().await;

        info!(
            "polling course schedule every {} seconds",
            self.polling_interval.as_secs()
        );
        let shared = Arc::clone(&self.shared);
        self.poll_handle = Some(PollHandle::spawn(self.polling_interval, move || {
            let shared = Arc::clone(&shared);
            async move { shared.fetch_availability().await }
        }));
    }

    /// Cancels the running timer. Returns `false` if none was running.
    pub fn stop_polling(&mut self) -> bool {
        match self.poll_handle.take() {
            Some(handle) => {
                info!("stop polling");
                handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poll_handle
            .as_ref()
            .is_some_and(|handle| handle.is_active())
    }
}
