//! # seatledger-service
//!
//! Business logic over the booking partitions and member ledger: seat
//! allocation/release, annotation handling, the continue-next-month
//! notification flow, and the signature-gated fee payment flow.

pub mod payment;
pub mod seat;

pub use payment::fee::{FeePayment, FeePaymentService};
pub use payment::gateway::{Order, PaymentGatewayClient};
pub use payment::signature::SignatureVerifier;
pub use seat::service::{SeatAllocationService, SeatOccupancy, SeatTransition};
