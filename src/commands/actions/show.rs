//! Show command handler.
//!
//! Prints the form and the matching tee times of the latest response. This is
//! a read-only command. Before the first fetch only the form is shown.

use log::debug;

use crate::{
    commands::{
        CommandResult,
        text_response::{format_form, format_response},
    },
    poller::AvailabilityPoller,
    schedule::Requester,
    sound::Notifier,
};

pub async fn handle_show<R, N>(poller: &AvailabilityPoller<R, N>) -> CommandResult
where
    R: Requester + 'static,
    N: Notifier + 'static,
{
    debug!("handling show command");

    let snapshot = poller.snapshot().await;
    let form = format_form(&snapshot);
    let response = match format_response(&snapshot) {
        Some(matches) => format!("{}\n{}", form, matches),
        None => form,
    };
    let result = CommandResult {
        response,
        quit: false,
    };

    debug!("show command result {:?}", result);

    result
}
