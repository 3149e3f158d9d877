//! Partition watchers — one long-lived task per monthly partition.

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use seatledger_core::events::ProjectionEvent;

use seatledger_database::PartitionRegistry;

/// Spawn one watcher per partition.
///
/// Each watcher subscribes to its partition's change feed before
/// returning, so no event published after this call is missed. Events
/// whose booking lacks a registration are skipped; a lagged feed is
/// logged and the watcher continues with the next event.
pub fn spawn_watchers(
    partitions: &PartitionRegistry,
    tx: mpsc::Sender<ProjectionEvent>,
    shutdown: watch::Receiver<bool>,
) -> Vec<JoinHandle<()>> {
    partitions
        .iter()
        .map(|partition| {
            let month = partition.month();
            let mut feed = partition.watch();
            let tx = tx.clone();
            let mut shutdown = shutdown.clone();

            tokio::spawn(async move {
                loop {
                    tokio::select! {
                        changed = shutdown.changed() => {
                            if changed.is_err() || *shutdown.borrow() {
                                debug!(%month, "Watcher shutting down");
                                break;
                            }
                        }
                        event = feed.recv() => match event {
                            Ok(change) => {
                                let Some(projection) = ProjectionEvent::from_change(&change)
                                else {
                                    debug!(%month, "Skipping change without registration");
                                    continue;
                                };
                                if tx.send(projection).await.is_err() {
                                    // Projection worker is gone; nothing
                                    // left to watch for.
                                    break;
                                }
                            }
                            Err(RecvError::Lagged(missed)) => {
                                warn!(%month, missed, "Watcher lagged its change feed; events dropped");
                            }
                            Err(RecvError::Closed) => {
                                debug!(%month, "Change feed closed");
                                break;
                            }
                        },
                    }
                }
            })
        })
        .collect()
}
