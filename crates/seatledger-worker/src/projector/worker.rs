//! The projection worker — consumes projection events and upserts the
//! member ledger.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use seatledger_core::events::ProjectionEvent;
use seatledger_core::traits::MemberStore;

/// Applies projection events to the member ledger, one at a time.
///
/// A failure for one event is logged and skipped; the worker never
/// terminates on projection failure. The ledger is therefore
/// at-least-once, eventually consistent with the partitions.
pub struct ProjectionWorker {
    members: Arc<dyn MemberStore>,
}

impl ProjectionWorker {
    /// Create a new worker over the member ledger.
    pub fn new(members: Arc<dyn MemberStore>) -> Self {
        Self { members }
    }

    /// Run until the channel closes or shutdown is signalled.
    pub async fn run(
        self,
        mut rx: mpsc::Receiver<ProjectionEvent>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        debug!("Projection worker shutting down");
                        break;
                    }
                }
                event = rx.recv() => match event {
                    Some(event) => self.project(event).await,
                    None => break,
                },
            }
        }
    }

    async fn project(&self, event: ProjectionEvent) {
        match self
            .members
            .apply_payment_projection(&event.registration, event.date, event.shift)
            .await
        {
            Ok(()) => {
                debug!(
                    registration = %event.registration,
                    date = %event.date,
                    "Projected payment into member ledger"
                );
            }
            Err(e) => {
                // Isolated per event: log and move on to the next one.
                warn!(
                    registration = %event.registration,
                    error = %e,
                    "Projection failed; event skipped"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use seatledger_core::types::Shift;
    use seatledger_database::stores::memory::MemoryMemberStore;

    #[tokio::test]
    async fn worker_applies_events_until_channel_closes() {
        let members = Arc::new(MemoryMemberStore::new());
        let (tx, rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        let worker = tokio::spawn(ProjectionWorker::new(members.clone()).run(rx, shutdown_rx));

        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        tx.send(ProjectionEvent {
            registration: "L-101".into(),
            date,
            shift: Shift::Morning,
        })
        .await
        .unwrap();
        drop(tx);
        worker.await.unwrap();

        let member = members.find_by_registration("L-101").await.unwrap().unwrap();
        assert_eq!(member.last_payment_date, Some(date));
        assert_eq!(member.shift, Some(Shift::Morning));
    }
}
