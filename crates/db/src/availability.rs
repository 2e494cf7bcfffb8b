//! Availability reconciliation against the store.
//!
//! Wraps the pure recomputation in `innkeeper_core::availability` with the
//! load/persist steps: fetch all rooms, fetch the reservations overlapping
//! the reference date, recompute every flag, and write back only the flags
//! that changed.

use serde::Serialize;
use tokio::sync::Mutex;

use innkeeper_core::availability::{reconcile, RoomState, Stay};
use innkeeper_core::error::CoreError;
use innkeeper_core::types::Date;

use crate::repositories::{ReservationRepo, RoomRepo};
use crate::DbPool;

/// Outcome of one reconciliation run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReconcileSummary {
    /// The reference date the flags were computed against.
    pub date: Date,
    /// Total rooms examined.
    pub rooms: usize,
    /// Rooms occupied on `date`.
    pub occupied: usize,
    /// Flags that actually changed and were written back.
    pub changed: usize,
}

/// Serialized reconciliation runner.
///
/// Reconciliation is a read-compute-write pass over every room; two
/// interleaved passes could overwrite each other's flags, so all runs go
/// through an internal mutex. Callers share one `Reconciler` per process.
pub struct Reconciler {
    pool: DbPool,
    lock: Mutex<()>,
}

impl Reconciler {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            lock: Mutex::new(()),
        }
    }

    /// Recompute and persist every room's availability flag for `today`.
    ///
    /// Any store failure maps to [`CoreError::StoreUnavailable`]; the run
    /// may then be partially applied and the caller should retry, since the
    /// operation is idempotent.
    pub async fn run(&self, today: Date) -> Result<ReconcileSummary, CoreError> {
        let _guard = self.lock.lock().await;

        let rooms = RoomRepo::list_all(&self.pool)
            .await
            .map_err(store_unavailable)?;
        let reservations = ReservationRepo::list_overlapping(&self.pool, today)
            .await
            .map_err(store_unavailable)?;

        let before: Vec<RoomState> = rooms
            .iter()
            .map(|r| RoomState {
                number: r.number,
                available: r.available,
            })
            .collect();
        let stays: Vec<Stay> = reservations
            .iter()
            .map(|r| Stay {
                room_number: r.room_number,
                check_in: r.check_in,
                check_out: r.check_out,
            })
            .collect();

        let after = reconcile(&before, &stays, today);

        let mut changed = 0;
        for (old, new) in before.iter().zip(&after) {
            if old.available != new.available {
                RoomRepo::update_availability(&self.pool, new.number, new.available)
                    .await
                    .map_err(store_unavailable)?;
                changed += 1;
            }
        }

        let summary = ReconcileSummary {
            date: today,
            rooms: after.len(),
            occupied: after.iter().filter(|r| !r.available).count(),
            changed,
        };

        tracing::debug!(
            date = %summary.date,
            rooms = summary.rooms,
            occupied = summary.occupied,
            changed = summary.changed,
            "Availability reconciled"
        );

        Ok(summary)
    }
}

fn store_unavailable(err: sqlx::Error) -> CoreError {
    CoreError::StoreUnavailable(err.to_string())
}
