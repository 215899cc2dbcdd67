use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use configs::ReminderConfig;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use models::reminder::{self, ReminderStatus};
use super::notifier::Notifier;
use crate::errors::ServiceError;

#[derive(Clone, Debug)]
pub struct SweepConfig {
    pub interval: Duration,
    pub lookahead: Duration,
    pub batch_size: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { interval: Duration::from_secs(30), lookahead: Duration::from_secs(60), batch_size: 100 }
    }
}

impl From<&ReminderConfig> for SweepConfig {
    fn from(cfg: &ReminderConfig) -> Self {
        Self { interval: cfg.interval(), lookahead: cfg.lookahead(), batch_size: cfg.batch_size }
    }
}

/// Outcome of one sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub selected: usize,
    pub sent: usize,
    pub failed: usize,
}

/// Background job turning due reminders into notifications.
///
/// A single task drives the loop and skips ticks that fire while a sweep is
/// still running, so sweeps in one process never overlap. Two processes
/// sharing a database can still pick the same row.
pub struct ReminderSweeper {
    db: DatabaseConnection,
    notifier: Arc<dyn Notifier>,
    cfg: SweepConfig,
}

impl ReminderSweeper {
    pub fn new(db: DatabaseConnection, notifier: Arc<dyn Notifier>, cfg: SweepConfig) -> Self {
        Self { db, notifier, cfg }
    }

    /// Spawn the sweep loop on the current runtime.
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move { self.start().await })
    }

    async fn start(&self) {
        info!(
            event = "reminder_sweeper_started",
            interval_secs = self.cfg.interval.as_secs(),
            lookahead_secs = self.cfg.lookahead.as_secs(),
            batch_size = self.cfg.batch_size
        );
        let mut ticker = interval(self.cfg.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            match self.run_once(Utc::now()).await {
                Ok(report) if report.selected > 0 => {
                    info!(event = "reminder_sweep", selected = report.selected, sent = report.sent, failed = report.failed);
                }
                Ok(_) => debug!(event = "reminder_sweep", "no reminders due"),
                Err(e) => error!(event = "reminder_sweep_failed", error = %e),
            }
        }
    }

    /// Reminders due at `now + lookahead`, oldest `fire_at` first, at most `batch_size`.
    pub async fn due(&self, now: DateTime<Utc>) -> Result<Vec<reminder::Model>, ServiceError> {
        let lookahead = chrono::Duration::from_std(self.cfg.lookahead).unwrap_or_else(|_| chrono::Duration::zero());
        let horizon: sea_orm::prelude::DateTimeWithTimeZone = (now + lookahead).into();
        let rows = reminder::Entity::find()
            .filter(reminder::Column::Status.eq(ReminderStatus::Pending))
            .filter(reminder::Column::FireAt.lte(horizon))
            .order_by_asc(reminder::Column::FireAt)
            .limit(self.cfg.batch_size)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// One sweep. Per-item failures are recorded on the reminder and never
    /// abort the batch; only the selection query can fail the whole sweep.
    pub async fn run_once(&self, now: DateTime<Utc>) -> Result<SweepReport, ServiceError> {
        let batch = self.due(now).await?;
        let mut report = SweepReport { selected: batch.len(), ..SweepReport::default() };

        for item in batch {
            let id = item.id;
            let attempts = item.attempts;
            let outcome = self.notifier.notify(&item).await;

            let mut am: reminder::ActiveModel = item.into();
            am.updated_at = Set(Utc::now().into());
            match &outcome {
                Ok(()) => {
                    am.status = Set(ReminderStatus::Sent);
                    am.last_error = Set(None);
                }
                Err(e) => {
                    warn!(event = "reminder_dispatch_failed", reminder_id = %id, error = %e);
                    am.status = Set(ReminderStatus::Failed);
                    am.attempts = Set(attempts + 1);
                    am.last_error = Set(Some(e.to_string()));
                }
            }

            if let Err(e) = am.update(&self.db).await {
                error!(event = "reminder_status_update_failed", reminder_id = %id, error = %e);
                continue;
            }
            match outcome {
                Ok(()) => report.sent += 1,
                Err(_) => report.failed += 1,
            }
        }
        Ok(report)
    }
}
