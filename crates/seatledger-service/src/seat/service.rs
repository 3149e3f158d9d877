//! Seat allocation service — the business logic over booking partitions
//! and the member ledger.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use seatledger_core::error::AppError;
use seatledger_core::model::{
    Booking, BookingPatch, BookingStatus, MemberProfile, NewBooking, booking,
};
use seatledger_core::result::AppResult;
use seatledger_core::traits::MemberStore;
use seatledger_core::types::{MonthSelector, Shift};

use seatledger_database::PartitionRegistry;

/// Result of a seat-status transition.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SeatTransition {
    /// The seat was allotted (or re-allotted) to the member.
    Allotted(Booking),
    /// The member's booking row was removed; the seat is free.
    Released,
}

/// One occupied seat in the seat-grid projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatOccupancy {
    pub seat: String,
    pub registration: String,
    pub name: String,
    pub status: BookingStatus,
}

/// Business logic for seat occupancy and booking maintenance.
///
/// All writes target the current month's partition; explicit months are
/// accepted only for read-only historical queries.
#[derive(Clone)]
pub struct SeatAllocationService {
    partitions: Arc<PartitionRegistry>,
    members: Arc<dyn MemberStore>,
}

impl SeatAllocationService {
    /// Create a new service.
    pub fn new(partitions: Arc<PartitionRegistry>, members: Arc<dyn MemberStore>) -> Self {
        Self {
            partitions,
            members,
        }
    }

    /// Non-terminal bookings for a seat across shifts, the "who is on
    /// this seat" admin view. An empty result is not an error here;
    /// callers decide.
    pub async fn list_by_seat(&self, seat: &str) -> AppResult<Vec<Booking>> {
        let rows = self.partitions.current().find_by_seat(seat).await?;
        Ok(rows
            .into_iter()
            .filter(|b| b.status.occupies_seat())
            .collect())
    }

    /// Read-only projection of a member's identity fields.
    pub async fn get_member(&self, registration: &str) -> AppResult<MemberProfile> {
        self.members
            .find_by_registration(registration)
            .await?
            .map(|member| MemberProfile::from(&member))
            .ok_or_else(|| AppError::not_found(format!("No member with registration {registration}")))
    }

    /// Full partition scan for the admin spreadsheet views.
    pub async fn list_bookings(&self, selector: MonthSelector) -> AppResult<Vec<Booking>> {
        match selector {
            MonthSelector::Current => self.partitions.current().list_all().await,
            MonthSelector::Month(month) => self.partitions.get(month).list_all().await,
            MonthSelector::All => {
                let mut all = Vec::new();
                for partition in self.partitions.iter() {
                    all.extend(partition.list_all().await?);
                }
                Ok(all)
            }
        }
    }

    /// Insert a new booking row into the current partition.
    pub async fn create_booking(&self, new: NewBooking) -> AppResult<Booking> {
        let booking = self.partitions.current().insert(Booking::from(new)).await?;
        info!(registration = %booking.registration, seat = %booking.seat, "Booking created");
        Ok(booking)
    }

    /// Upsert the booking keyed by `registration` in the current
    /// partition.
    pub async fn update_booking(
        &self,
        registration: &str,
        patch: BookingPatch,
    ) -> AppResult<Booking> {
        let outcome = self
            .partitions
            .current()
            .upsert_by_registration(registration, patch)
            .await?;
        Ok(outcome.booking)
    }

    /// Hard-delete a booking row by id.
    pub async fn delete_booking(&self, id: Uuid) -> AppResult<()> {
        if self.partitions.current().delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!("No booking with id {id}")))
        }
    }

    /// Merge one annotation color into a booking without disturbing
    /// other keys.
    pub async fn set_annotation(&self, id: Uuid, column: &str, color: &str) -> AppResult<Booking> {
        self.partitions
            .current()
            .merge_color(id, column, color)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No booking with id {id}")))
    }

    /// Allot or release a seat.
    ///
    /// `"Empty"` releases: the booking row keyed by `registration` is
    /// deleted and the seat becomes free. Every other requested status
    /// allots, and the stored status is always `Paid`; the admin clients
    /// rely on allotment never storing the caller-supplied value.
    /// `Confirmed` and `discontinue` are reachable only through
    /// [`set_notification_status`](Self::set_notification_status).
    pub async fn set_seat_status(
        &self,
        registration: &str,
        requested_status: &str,
        seat: &str,
        shift: Shift,
    ) -> AppResult<SeatTransition> {
        let partition = self.partitions.current();

        if requested_status.trim().eq_ignore_ascii_case("empty") {
            partition.delete_by_registration(registration).await?;
            info!(registration, seat, "Seat released");
            return Ok(SeatTransition::Released);
        }

        let member = self
            .members
            .find_by_registration(registration)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("No member with registration {registration}"))
            })?;

        let patch = BookingPatch {
            name: Some(member.name),
            seat: Some(seat.to_string()),
            shift: Some(shift),
            status: Some(BookingStatus::Paid),
            date: Some(booking::today()),
            ..Default::default()
        };
        let outcome = partition.upsert_by_registration(registration, patch).await?;
        info!(registration, seat, %shift, "Seat allotted");
        Ok(SeatTransition::Allotted(outcome.booking))
    }

    /// Record the student's "continue next month?" answer.
    ///
    /// Strictly update-only: the booking must already exist in the
    /// current partition. Stamps the status, the next-month marker, a
    /// status color hint, and today's date.
    pub async fn set_notification_status(
        &self,
        registration: &str,
        status: BookingStatus,
    ) -> AppResult<Booking> {
        let color = match status {
            BookingStatus::Confirmed => "#8df188",
            BookingStatus::Discontinue => "#f18888",
            other => {
                return Err(AppError::validation(format!(
                    "Notification status must be Confirmed or discontinue, got {other}"
                )));
            }
        };

        let partition = self.partitions.current();
        if partition.find_by_registration(registration).await?.is_none() {
            return Err(AppError::not_found(format!(
                "No booking for registration {registration} this month"
            )));
        }

        let patch = BookingPatch {
            status: Some(status),
            next_month_status: Some(status.as_str().to_string()),
            date: Some(booking::today()),
            colors: Some([("status".to_string(), color.to_string())].into()),
            ..Default::default()
        };
        let outcome = partition.upsert_by_registration(registration, patch).await?;
        info!(registration, %status, "Notification status recorded");
        Ok(outcome.booking)
    }

    /// The seat-state projection: occupied seats of the current
    /// partition, grouped by shift.
    pub async fn seat_status_by_shift(&self) -> AppResult<BTreeMap<Shift, Vec<SeatOccupancy>>> {
        let rows = self.partitions.current().list_all().await?;
        let mut grid: BTreeMap<Shift, Vec<SeatOccupancy>> = BTreeMap::new();
        for booking in rows.into_iter().filter(|b| b.status.occupies_seat()) {
            grid.entry(booking.shift).or_default().push(SeatOccupancy {
                seat: booking.seat,
                registration: booking.registration,
                name: booking.name,
                status: booking.status,
            });
        }
        for seats in grid.values_mut() {
            seats.sort_by(|a, b| a.seat.cmp(&b.seat));
        }
        Ok(grid)
    }

    /// The member's current-month booking.
    pub async fn current_seat(&self, registration: &str) -> AppResult<Booking> {
        self.partitions
            .current()
            .find_by_registration(registration)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "No booking for registration {registration} this month"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatledger_core::error::ErrorKind;
    use seatledger_core::model::Member;
    use seatledger_core::traits::BookingStore;
    use seatledger_database::stores::memory::{MemoryBookingStore, MemoryMemberStore};

    async fn service_with_member(registration: &str, name: &str) -> SeatAllocationService {
        let members = Arc::new(MemoryMemberStore::new());
        let mut member = Member::skeleton(registration);
        member.name = name.to_string();
        members.create(member).await.unwrap();

        let partitions = Arc::new(PartitionRegistry::new(
            |_| Arc::new(MemoryBookingStore::new()) as Arc<dyn BookingStore>,
            16,
        ));
        SeatAllocationService::new(partitions, members)
    }

    #[tokio::test]
    async fn allotment_always_yields_paid() {
        let service = service_with_member("L-101", "Asha").await;

        // Requesting "Confirmed" must still store Paid.
        let transition = service
            .set_seat_status("L-101", "Confirmed", "A3", Shift::Morning)
            .await
            .unwrap();
        match transition {
            SeatTransition::Allotted(booking) => {
                assert_eq!(booking.status, BookingStatus::Paid);
                assert_eq!(booking.name, "Asha");
                assert_eq!(booking.seat, "A3");
                assert_eq!(booking.shift, Shift::Morning);
                assert_eq!(booking.date, booking::today());
            }
            SeatTransition::Released => panic!("expected allotment"),
        }

        let on_seat = service.list_by_seat("A3").await.unwrap();
        assert_eq!(on_seat.len(), 1);
        assert_eq!(on_seat[0].status, BookingStatus::Paid);
    }

    #[tokio::test]
    async fn empty_releases_the_seat() {
        let service = service_with_member("L-101", "Asha").await;
        service
            .set_seat_status("L-101", "Paid", "A3", Shift::Morning)
            .await
            .unwrap();

        let transition = service
            .set_seat_status("L-101", "Empty", "A3", Shift::Morning)
            .await
            .unwrap();
        assert!(matches!(transition, SeatTransition::Released));

        let rows = service.list_bookings(MonthSelector::Current).await.unwrap();
        assert!(rows.iter().all(|b| b.registration != "L-101"));
    }

    #[tokio::test]
    async fn notification_status_requires_existing_booking() {
        let service = service_with_member("L-101", "Asha").await;
        let err = service
            .set_notification_status("L-101", BookingStatus::Confirmed)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn notification_status_stamps_marker_and_color() {
        let service = service_with_member("L-101", "Asha").await;
        service
            .set_seat_status("L-101", "Paid", "A3", Shift::Morning)
            .await
            .unwrap();

        let booking = service
            .set_notification_status("L-101", BookingStatus::Discontinue)
            .await
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Discontinue);
        assert_eq!(booking.next_month_status.as_deref(), Some("discontinue"));
        assert!(booking.colors.contains_key("status"));
    }

    #[tokio::test]
    async fn notification_status_rejects_plain_statuses() {
        let service = service_with_member("L-101", "Asha").await;
        let err = service
            .set_notification_status("L-101", BookingStatus::Paid)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn seat_grid_groups_live_rows_by_shift() {
        let service = service_with_member("L-101", "Asha").await;
        service
            .set_seat_status("L-101", "Paid", "A3", Shift::Morning)
            .await
            .unwrap();
        // A terminal row must not occupy its seat.
        service
            .update_booking(
                "L-102",
                BookingPatch {
                    name: Some("Vikram".into()),
                    seat: Some("B1".into()),
                    shift: Some(Shift::Morning),
                    status: Some(BookingStatus::Left),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let grid = service.seat_status_by_shift().await.unwrap();
        let morning = grid.get(&Shift::Morning).unwrap();
        assert_eq!(morning.len(), 1);
        assert_eq!(morning[0].seat, "A3");
    }

    #[tokio::test]
    async fn annotation_merge_keeps_other_keys() {
        let service = service_with_member("L-101", "Asha").await;
        let booking = service
            .update_booking("L-101", BookingPatch::default())
            .await
            .unwrap();

        service.set_annotation(booking.id, "fee", "red").await.unwrap();
        let updated = service
            .set_annotation(booking.id, "seat", "blue")
            .await
            .unwrap();
        assert_eq!(updated.colors.len(), 2);
    }
}
