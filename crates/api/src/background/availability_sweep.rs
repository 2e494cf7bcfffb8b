//! Periodic availability reconciliation.
//!
//! Reservation mutations already reconcile room flags synchronously, but a
//! flag can still go stale when the date rolls over with no reservation
//! activity (a stay ending at midnight leaves its room marked unavailable
//! until something else triggers a recompute). This task re-runs the
//! reconciler on a fixed interval so flags never lag the calendar by more
//! than one sweep.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use innkeeper_db::availability::Reconciler;

/// Run the availability sweep loop.
///
/// Re-reconciles every room's flag against the current UTC date every
/// `interval_secs`. Runs until `cancel` is triggered. An `interval_secs`
/// of 0 disables the sweep.
pub async fn run(reconciler: Arc<Reconciler>, interval_secs: u64, cancel: CancellationToken) {
    if interval_secs == 0 {
        tracing::info!("Availability sweep disabled");
        return;
    }

    tracing::info!(interval_secs, "Availability sweep started");

    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    // The first tick fires immediately; startup already reconciled.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Availability sweep stopping");
                break;
            }
            _ = interval.tick() => {
                let today = chrono::Utc::now().date_naive();
                match reconciler.run(today).await {
                    Ok(summary) => {
                        if summary.changed > 0 {
                            tracing::info!(
                                date = %summary.date,
                                changed = summary.changed,
                                "Availability sweep: flags updated"
                            );
                        } else {
                            tracing::debug!(date = %summary.date, "Availability sweep: no changes");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Availability sweep failed");
                    }
                }
            }
        }
    }
}
