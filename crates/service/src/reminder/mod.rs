//! Periodic reminder sweep: due `pending` reminders become notifications.

pub mod notifier;
pub mod sweeper;

pub use notifier::{Notifier, NotifyError, StoreNotifier};
pub use sweeper::{ReminderSweeper, SweepConfig, SweepReport};
