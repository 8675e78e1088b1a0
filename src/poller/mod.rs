//! Availability polling for tee times.
//!
//! This module holds the core of the tool: the form state, the slot filter and
//! the poller re-fetching the course schedule on a timer.
//!
//! - [`QueryParameters`]: day, party size and time window typed by the user
//! - [`compute_matches`]: pure filter selecting the slots fitting the query
//! - [`AvailabilityPoller`]: fetches, stores the latest response, rings on matches
//!
//! # Lifecycle
//!
//! ```text
//! idle ──check──▶ polling ──check──▶ polling (timer replaced)
//!                    │
//!                    └──stop / drop──▶ idle
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! # async fn example() {
//! let mut poller = AvailabilityPoller::new(requester, sound, query, false, interval);
//! poller.start_polling().await;
//! poller.set_players(3).await.unwrap();
//! poller.stop_polling();
//! # }
//! ```

mod availability_poller;
mod matches;
mod poll_handle;
mod query;

pub use crate::poller::availability_poller::{AvailabilityPoller, PollerSnapshot};
pub use crate::poller::matches::compute_matches;
pub use crate::poller::query::{
    FormError, MAX_PLAYERS, MIN_PLAYERS, QueryParameters, parse_date, parse_time,
};
