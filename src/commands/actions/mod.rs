//! Command action handlers.
//!
//! Individual handler functions for each form command. Each handler applies
//! the command to the [`AvailabilityPoller`](crate::poller::AvailabilityPoller)
//! and returns a [`CommandResult`](crate::commands::CommandResult) with the
//! text to print.
//!
//! # Available Handlers
//!
//! - [`handle_help`] - Display help information
//! - [`handle_players`], [`handle_date`], [`handle_from`], [`handle_to`] - Edit the form
//! - [`handle_mute`] - Toggle the notification sound
//! - [`handle_check`] - Submit the form and start polling
//! - [`handle_stop`] - Stop polling
//! - [`handle_show`] - Display the form and the matching tee times

mod form;
mod help;
mod polling;
mod show;

pub use crate::commands::actions::{
    form::{handle_date, handle_from, handle_mute, handle_players, handle_to},
    help::handle_help,
    polling::{handle_check, handle_stop},
    show::handle_show,
};
