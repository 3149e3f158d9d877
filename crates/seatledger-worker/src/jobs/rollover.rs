//! Monthly rollover job.
//!
//! At each month boundary the job reads the *previous* month's partition
//! and classifies its bookings: rows marked `discontinue` (any casing)
//! drop out, and of the remainder those with any nonzero fee money are
//! the "paid, continuing" set. The job only reports that set; it writes
//! nothing into the new month. Whether carry-forward is performed by
//! staff or was simply never finished upstream is unknown; this is the
//! hook point for either answer.

use std::sync::Arc;

use tracing::info;

use seatledger_core::model::Booking;
use seatledger_core::result::AppResult;
use seatledger_core::types::Month;

use seatledger_database::PartitionRegistry;

/// What one rollover run observed.
#[derive(Debug, Clone)]
pub struct RolloverReport {
    /// The month that was inspected (the previous one).
    pub month: Month,
    /// Total bookings in that partition.
    pub total: usize,
    /// Bookings not marked discontinue.
    pub continuing: usize,
    /// The paid, continuing bookings.
    pub paid_continuing: Vec<Booking>,
}

/// The scheduled monthly rollover.
pub struct RolloverJob {
    partitions: Arc<PartitionRegistry>,
}

impl RolloverJob {
    /// Create a new rollover job.
    pub fn new(partitions: Arc<PartitionRegistry>) -> Self {
        Self { partitions }
    }

    /// Inspect the previous month's partition and log the paid,
    /// continuing set.
    pub async fn run(&self) -> AppResult<RolloverReport> {
        let month = Month::current().previous();
        let bookings = self.partitions.get(month).list_all().await?;
        let total = bookings.len();

        let continuing: Vec<Booking> = bookings
            .into_iter()
            .filter(|b| !is_discontinued(b))
            .collect();
        let continuing_count = continuing.len();
        let paid_continuing = classify_paid(continuing);

        info!(
            %month,
            total,
            continuing = continuing_count,
            paid_continuing = paid_continuing.len(),
            registrations = ?paid_continuing
                .iter()
                .map(|b| b.registration.as_str())
                .collect::<Vec<_>>(),
            "Monthly rollover: paid continuing bookings (report only, no carry-forward write)"
        );

        Ok(RolloverReport {
            month,
            total,
            continuing: continuing_count,
            paid_continuing,
        })
    }
}

/// Whether a booking opted out of the next month. The marker is
/// free-form text, so the comparison is case-insensitive.
fn is_discontinued(booking: &Booking) -> bool {
    booking
        .next_month_status
        .as_deref()
        .is_some_and(|marker| marker.trim().eq_ignore_ascii_case("discontinue"))
}

/// Of the continuing bookings, those with any nonzero fee money.
fn classify_paid(continuing: Vec<Booking>) -> Vec<Booking> {
    continuing
        .into_iter()
        .filter(|b| b.fee != 0.0 || b.cash != 0.0 || b.online != 0.0 || b.total_money != 0.0)
        .collect()
}
