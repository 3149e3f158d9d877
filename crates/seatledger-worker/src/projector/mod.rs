//! The change projector.
//!
//! One watcher task per monthly partition pulls that partition's change
//! feed and pushes typed [`ProjectionEvent`]s onto an internal channel;
//! a single projection worker consumes the channel and upserts the
//! member ledger. Watch-failure isolation and projection-failure
//! isolation are therefore independent: a lagged feed never stalls the
//! worker, and a failed ledger write never kills a watcher.
//!
//! [`ProjectionEvent`]: seatledger_core::events::ProjectionEvent

pub mod watcher;
pub mod worker;

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::info;

use seatledger_core::traits::MemberStore;

use seatledger_database::PartitionRegistry;

use self::watcher::spawn_watchers;
use self::worker::ProjectionWorker;

/// Handle to the running projector tasks.
pub struct ChangeProjector {
    watchers: Vec<JoinHandle<()>>,
    worker: JoinHandle<()>,
}

impl ChangeProjector {
    /// Start the projector: twelve watchers plus one projection worker.
    ///
    /// Called once at boot; the tasks run for the process lifetime and
    /// stop when `shutdown` flips to `true`.
    pub fn start(
        partitions: &PartitionRegistry,
        members: Arc<dyn MemberStore>,
        buffer_size: usize,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        let (tx, rx) = mpsc::channel(buffer_size);

        let watchers = spawn_watchers(partitions, tx, shutdown.clone());
        let worker = tokio::spawn(ProjectionWorker::new(members).run(rx, shutdown));

        info!(
            watchers = watchers.len(),
            "Change projector started"
        );
        Self { watchers, worker }
    }

    /// Wait for all projector tasks to finish after shutdown is
    /// signalled.
    pub async fn join(self) {
        for watcher in self.watchers {
            let _ = watcher.await;
        }
        let _ = self.worker.await;
        info!("Change projector stopped");
    }
}
