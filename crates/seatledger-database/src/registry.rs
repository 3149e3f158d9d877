//! Partition registry — the arena of monthly partition handles.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use seatledger_core::traits::BookingStore;
use seatledger_core::types::Month;

use crate::partition::BookingPartition;

/// Registry mapping each calendar month to its partition handle.
///
/// All twelve handles are materialized at construction, so `get` is a
/// pure lookup and two callers racing on an unseen month cannot create
/// divergent handles. The registry is constructed once at startup and
/// passed explicitly to every component that needs it.
#[derive(Debug)]
pub struct PartitionRegistry {
    partitions: BTreeMap<Month, Arc<BookingPartition>>,
}

impl PartitionRegistry {
    /// Build the registry, materializing one store per month via the
    /// factory.
    pub fn new(
        mut make_store: impl FnMut(Month) -> Arc<dyn BookingStore>,
        feed_buffer: usize,
    ) -> Self {
        let partitions = Month::ALL
            .into_iter()
            .map(|month| {
                (
                    month,
                    Arc::new(BookingPartition::new(month, make_store(month), feed_buffer)),
                )
            })
            .collect();

        info!("Partition registry initialized for all twelve months");
        Self { partitions }
    }

    /// The stable handle for `month`. Repeated calls return the same
    /// handle.
    pub fn get(&self, month: Month) -> Arc<BookingPartition> {
        // Every month is seeded in `new`, so the lookup cannot miss.
        Arc::clone(&self.partitions[&month])
    }

    /// The handle for the current civil month, the only partition
    /// writes ever target.
    pub fn current(&self) -> Arc<BookingPartition> {
        self.get(Month::current())
    }

    /// All handles in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = Arc<BookingPartition>> + '_ {
        Month::ALL.into_iter().map(|month| self.get(month))
    }
}
