//! Housekeeping service: background purge of expired auth rows.
//!
//! DESIGN
//! ======
//! Session validation already ignores expired rows, so purging is only about
//! keeping `sessions` and `email_login_codes` small. A failed sweep is logged
//! and retried on the next tick.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::{email_auth, session};
use crate::state::AppState;

/// Rows removed by one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub sessions: u64,
    pub login_codes: u64,
}

/// Run one purge pass over sessions and login codes.
pub async fn sweep(state: &AppState) -> SweepReport {
    let mut report = SweepReport::default();

    match session::purge_expired_sessions(&state.pool).await {
        Ok(n) => report.sessions = n,
        Err(e) => warn!(error = %e, "expired session purge failed"),
    }
    match email_auth::purge_stale_codes(&state.pool).await {
        Ok(n) => report.login_codes = n,
        Err(e) => warn!(error = %e, "stale login code purge failed"),
    }

    report
}

/// Spawn the background housekeeping task. Returns a handle for shutdown.
pub fn spawn_housekeeping_task(state: AppState) -> JoinHandle<()> {
    let interval_secs = state.config.housekeeping_interval_secs.max(1);
    info!(interval_secs, "auth housekeeping configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let report = sweep(&state).await;
            if report == SweepReport::default() {
                debug!("housekeeping sweep removed nothing");
            } else {
                info!(sessions = report.sessions, login_codes = report.login_codes, "housekeeping sweep");
            }
        }
    })
}
