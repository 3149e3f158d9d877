//! Domain entities owned by the booking partitions and the member ledger.

pub mod booking;
pub mod member;

pub use booking::{Booking, BookingPatch, BookingStatus, NewBooking, PaymentDetail};
pub use member::{Member, MemberProfile};
