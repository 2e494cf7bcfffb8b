//! Room availability reconciliation.
//!
//! A room's `available` flag is a derived value: it is false exactly while
//! some reservation's stay interval contains the current date, and true
//! otherwise. The flag is never independently settable truth -- it must be
//! recomputed whenever the reservation set changes and whenever the date
//! rolls over.
//!
//! This module holds the pure recomputation. Loading rooms/reservations and
//! persisting the recomputed flags is the `innkeeper-db` crate's concern.

use crate::types::Date;

/// A room's identity plus its (possibly stale) availability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomState {
    pub number: i32,
    pub available: bool,
}

/// The slice of a reservation that matters for availability: which room it
/// occupies and over which closed date interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub room_number: i32,
    pub check_in: Date,
    pub check_out: Date,
}

impl Stay {
    /// Whether this stay occupies its room on `date`.
    ///
    /// Both endpoints are inclusive: a guest checking in or out today still
    /// holds the room today.
    pub fn contains(&self, date: Date) -> bool {
        self.check_in <= date && date <= self.check_out
    }
}

/// Whether any stay occupies `room_number` on `today`.
///
/// Stays referencing room numbers that do not exist in the room set simply
/// match nothing here; referential integrity is enforced elsewhere.
pub fn is_occupied(stays: &[Stay], room_number: i32, today: Date) -> bool {
    stays
        .iter()
        .any(|s| s.room_number == room_number && s.contains(today))
}

/// Recompute the authoritative `available` flag for every room.
///
/// Pure and idempotent: the output depends only on the inputs, and applying
/// it twice yields the same result. The caller persists the returned flags.
pub fn reconcile(rooms: &[RoomState], stays: &[Stay], today: Date) -> Vec<RoomState> {
    rooms
        .iter()
        .map(|room| RoomState {
            number: room.number,
            available: !is_occupied(stays, room.number, today),
        })
        .collect()
}
