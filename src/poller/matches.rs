//! Slot filtering.

use chrono::NaiveDateTime;

use crate::schedule::{Response, Slot};

/// Returns the slots of `response` that fit the party and the time window.
///
/// A slot matches when it can take at least `players` more players and starts
/// between `from_time` and `to_time`, both bounds included. An error response
/// has no matches.
///
/// The returned iterator is lazy and `Clone`, so callers can walk it several
/// times; it is meant to be recomputed on every render rather than stored.
///
/// # Examples
///
/// ```
/// let matches: Vec<&Slot> = compute_matches(&response, 2, from, to).collect();
/// ```
pub fn compute_matches<'a>(
    response: &'a Response,
    players: u8,
    from_time: NaiveDateTime,
    to_time: NaiveDateTime,
) -> impl Iterator<Item = &'a Slot> + Clone + 'a {
    let players = i32::from(players);

    response.slots().iter().filter(move |slot| {
        slot.available_slots >= players && from_time <= slot.time && slot.time <= to_time
    })
}
