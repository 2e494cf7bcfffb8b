//! Handler for on-demand availability reconciliation.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use innkeeper_core::error::CoreError;
use innkeeper_db::availability::ReconcileSummary;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `POST /availability/reconcile`.
#[derive(Debug, Default, Deserialize)]
pub struct ReconcileParams {
    /// Reference date as `YYYY-MM-DD`. Defaults to today (UTC) when omitted.
    pub date: Option<String>,
}

/// POST /api/v1/availability/reconcile
///
/// Recomputes every room's availability flag against the given date. This is
/// the manual escape hatch for day rollover; reservation mutations already
/// reconcile on their own.
pub async fn reconcile(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ReconcileParams>,
) -> AppResult<Json<ReconcileSummary>> {
    let date = match params.date.as_deref() {
        Some(raw) => raw.parse().map_err(|_| {
            AppError::Core(CoreError::InvalidArgument(format!(
                "'{raw}' is not a valid date (expected YYYY-MM-DD)"
            )))
        })?,
        None => chrono::Utc::now().date_naive(),
    };

    let summary = state.reconciler.run(date).await?;
    Ok(Json(summary))
}
