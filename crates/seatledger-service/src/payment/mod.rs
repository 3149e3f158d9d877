//! Payment gateway adapter and the signature-gated fee payment flow.

pub mod fee;
pub mod gateway;
pub mod signature;

pub use fee::{FeePayment, FeePaymentService};
pub use gateway::{Order, PaymentGatewayClient};
pub use signature::SignatureVerifier;
