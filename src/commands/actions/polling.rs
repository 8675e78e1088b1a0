//! Polling command handlers.
//!
//! `check` submits the form: it fetches at once and (re)starts the poll
//! timer. `stop` cancels the timer and keeps the latest response.

use std::time::Duration;

use log::debug;

use crate::{
    commands::{
        CommandResult,
        text_response::{format_polling_started, format_polling_stopped},
    },
    poller::AvailabilityPoller,
    schedule::Requester,
    sound::Notifier,
};

/// Fetches now and polls every `polling_interval`, replacing any running timer.
///
/// The fetch outcome is not part of the result: it reaches the user through
/// the poller update channel, like every later poll.
pub async fn handle_check<R, N>(
    poller: &mut AvailabilityPoller<R, N>,
    polling_interval: Duration,
) -> CommandResult
where
    R: Requester + 'static,
    N: Notifier + 'static,
{
    debug!("handling check command");
    poller.start_polling().await;

    CommandResult {
        response: format_polling_started(polling_interval.as_secs()),
        quit: false,
    }
}

pub fn handle_stop<R, N>(poller: &mut AvailabilityPoller<R, N>) -> CommandResult
where
    R: Requester + 'static,
    N: Notifier + 'static,
{
    debug!("handling stop command");

    CommandResult {
        response: format_polling_stopped(poller.stop_polling()),
        quit: false,
    }
}
