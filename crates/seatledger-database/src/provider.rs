//! Store provider selection.
//!
//! Builds the partition registry and member ledger over the configured
//! backend: Postgres for durable deployments, in-memory for single-node
//! evaluation and tests.

use std::sync::Arc;

use tracing::info;

use seatledger_core::config::store::StoreConfig;
use seatledger_core::error::AppError;
use seatledger_core::traits::{BookingStore, MemberStore};

use crate::connection::DatabasePool;
use crate::migration;
use crate::registry::PartitionRegistry;
use crate::stores::memory::{MemoryBookingStore, MemoryMemberStore};
use crate::stores::pg::{PgBookingStore, PgMemberStore};

/// The constructed store layer: partition registry plus member ledger.
pub struct Stores {
    /// Monthly booking partitions.
    pub partitions: Arc<PartitionRegistry>,
    /// Canonical member ledger.
    pub members: Arc<dyn MemberStore>,
}

/// Build the store layer for the configured provider.
pub async fn build_stores(config: &StoreConfig, feed_buffer: usize) -> Result<Stores, AppError> {
    match config.provider.as_str() {
        "postgres" => {
            let pool = DatabasePool::connect(&config.database).await?;
            migration::run_migrations(pool.pool()).await?;

            let registry = PartitionRegistry::new(
                |month| {
                    Arc::new(PgBookingStore::new(pool.pool().clone(), month))
                        as Arc<dyn BookingStore>
                },
                feed_buffer,
            );

            info!("Store provider: postgres");
            Ok(Stores {
                partitions: Arc::new(registry),
                members: Arc::new(PgMemberStore::new(pool.into_pool())),
            })
        }
        "memory" => {
            let registry = PartitionRegistry::new(
                |_| Arc::new(MemoryBookingStore::new()) as Arc<dyn BookingStore>,
                feed_buffer,
            );

            info!("Store provider: memory");
            Ok(Stores {
                partitions: Arc::new(registry),
                members: Arc::new(MemoryMemberStore::new()),
            })
        }
        other => Err(AppError::configuration(format!(
            "Unknown store provider: '{other}' (expected 'postgres' or 'memory')"
        ))),
    }
}
