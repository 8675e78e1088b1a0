//! Form command handlers.
//!
//! Edit the query of the poller: players, date and time window, plus the
//! mute toggle. None of them fetches; the new values apply from the next
//! check or poll.

use chrono::{NaiveDate, NaiveTime};
use log::debug;

use crate::{
    commands::{
        CommandResult,
        text_response::{format_form, format_form_error, format_mute},
    },
    poller::{AvailabilityPoller, FormError},
    schedule::Requester,
    sound::Notifier,
};

async fn form_result<R, N>(
    poller: &AvailabilityPoller<R, N>,
    outcome: Result<(), FormError>,
) -> CommandResult
where
    R: Requester + 'static,
    N: Notifier + 'static,
{
    let response = match outcome {
        Ok(()) => format_form(&poller.snapshot().await),
        Err(e) => format_form_error(&e),
    };

    CommandResult {
        response,
        quit: false,
    }
}

/// Sets the number of players, rejecting values outside 1-4.
pub async fn handle_players<R, N>(poller: &AvailabilityPoller<R, N>, players: u8) -> CommandResult
where
    R: Requester + 'static,
    N: Notifier + 'static,
{
    debug!("handling players command: {}", players);
    let outcome = poller.set_players(players).await;
    form_result(poller, outcome).await
}

/// Selects the day; the time window follows it.
pub async fn handle_date<R, N>(poller: &AvailabilityPoller<R, N>, date: NaiveDate) -> CommandResult
where
    R: Requester + 'static,
    N: Notifier + 'static,
{
    debug!("handling date command: {}", date);
    poller.set_date(date).await;
    form_result(poller, Ok(())).await
}

pub async fn handle_from<R, N>(poller: &AvailabilityPoller<R, N>, time: NaiveTime) -> CommandResult
where
    R: Requester + 'static,
    N: Notifier + 'static,
{
    debug!("handling from command: {}", time);
    let outcome = poller.set_from_time(time).await;
    form_result(poller, outcome).await
}

pub async fn handle_to<R, N>(poller: &AvailabilityPoller<R, N>, time: NaiveTime) -> CommandResult
where
    R: Requester + 'static,
    N: Notifier + 'static,
{
    debug!("handling to command: {}", time);
    let outcome = poller.set_to_time(time).await;
    form_result(poller, outcome).await
}

pub async fn handle_mute<R, N>(poller: &AvailabilityPoller<R, N>) -> CommandResult
where
    R: Requester + 'static,
    N: Notifier + 'static,
{
    debug!("handling mute command");

    CommandResult {
        response: format_mute(poller.toggle_mute().await),
        quit: false,
    }
}
